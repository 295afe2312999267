use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primary skill of a user
///
/// Serialized in lowercase (`"express"`, `"nestjs"`, ...), matching the
/// values accepted by the REST and GraphQL surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    Express,
    Nestjs,
    React,
    Nextjs,
}

impl Skill {
    /// Every skill, in declaration order
    pub const ALL: [Skill; 4] = [Skill::Express, Skill::Nestjs, Skill::React, Skill::Nextjs];

    pub fn as_str(&self) -> &'static str {
        match self {
            Skill::Express => "express",
            Skill::Nestjs => "nestjs",
            Skill::React => "react",
            Skill::Nextjs => "nextjs",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Skill {
    type Err = String;

    /// Parses a skill name
    ///
    /// # Example
    /// ```
    /// use team_roster_api::domain::user::value_objects::Skill;
    ///
    /// assert_eq!("react".parse::<Skill>(), Ok(Skill::React));
    /// assert!("rails".parse::<Skill>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Skill::ALL
            .into_iter()
            .find(|skill| skill.as_str() == s)
            .ok_or_else(|| format!("Unknown skill: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_display() {
        assert_eq!(Skill::Express.to_string(), "express");
        assert_eq!(Skill::Nestjs.to_string(), "nestjs");
        assert_eq!(Skill::React.to_string(), "react");
        assert_eq!(Skill::Nextjs.to_string(), "nextjs");
    }

    #[test]
    fn skill_parses_every_display_value() {
        for skill in Skill::ALL {
            assert_eq!(skill.to_string().parse::<Skill>(), Ok(skill));
        }
    }

    #[test]
    fn skill_parse_is_case_sensitive() {
        assert!("Express".parse::<Skill>().is_err());
    }

    #[test]
    fn skill_serializes_lowercase() {
        let json = serde_json::to_string(&Skill::Nextjs).unwrap();
        assert_eq!(json, "\"nextjs\"");

        let skill: Skill = serde_json::from_str("\"nestjs\"").unwrap();
        assert_eq!(skill, Skill::Nestjs);
    }

    #[test]
    fn unknown_skill_is_rejected_by_serde() {
        assert!(serde_json::from_str::<Skill>("\"django\"").is_err());
    }
}
