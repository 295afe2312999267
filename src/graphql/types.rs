use async_graphql::{Enum, InputObject, SimpleObject, ID};

use crate::domain::team::Team as DomainTeam;
use crate::domain::user::{self as domain, NewUser, User as DomainUser};

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Skill {
    #[graphql(name = "express")]
    Express,
    #[graphql(name = "nestjs")]
    Nestjs,
    #[graphql(name = "react")]
    React,
    #[graphql(name = "nextjs")]
    Nextjs,
}

impl From<domain::Skill> for Skill {
    fn from(s: domain::Skill) -> Self {
        match s {
            domain::Skill::Express => Skill::Express,
            domain::Skill::Nestjs => Skill::Nestjs,
            domain::Skill::React => Skill::React,
            domain::Skill::Nextjs => Skill::Nextjs,
        }
    }
}

impl From<Skill> for domain::Skill {
    fn from(s: Skill) -> Self {
        match s {
            Skill::Express => domain::Skill::Express,
            Skill::Nestjs => domain::Skill::Nestjs,
            Skill::React => domain::Skill::React,
            Skill::Nextjs => domain::Skill::Nextjs,
        }
    }
}

#[derive(SimpleObject)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub age: i32,
    pub skill: Skill,
}

impl From<&DomainUser> for User {
    fn from(u: &DomainUser) -> Self {
        Self {
            id: ID::from(u.id().to_string()),
            name: u.name().to_string(),
            age: u.age(),
            skill: u.skill().into(),
        }
    }
}

#[derive(SimpleObject)]
pub struct Team {
    pub id: ID,
    pub name: String,
    pub users: Vec<User>,
}

impl From<&DomainTeam> for Team {
    fn from(t: &DomainTeam) -> Self {
        Self {
            id: ID::from(t.id().to_string()),
            name: t.name().to_string(),
            users: t.users().iter().map(|u| User::from(u.as_ref())).collect(),
        }
    }
}

#[derive(InputObject)]
pub struct TeamInput {
    pub name: String,
}

#[derive(InputObject)]
pub struct UserInput {
    pub name: String,
    pub age: i32,
    pub skill: Skill,
    pub team_id: i32,
}

impl From<UserInput> for NewUser {
    fn from(input: UserInput) -> Self {
        NewUser::new(input.name, input.age, input.skill.into(), input.team_id)
    }
}
