//! Integration tests for the store and resolver layers
//!
//! These tests exercise the named operations against an isolated in-memory
//! store per test, checking id assignment, the consistency of users between
//! the users collection and their team, and that rejected writes leave no
//! trace.

use std::sync::Arc;

use team_roster_api::domain::errors::{DomainError, EntityKind};
use team_roster_api::domain::repositories::EntityStore;
use team_roster_api::domain::user::{NewUser, Skill};
use team_roster_api::infrastructure::repositories::InMemoryEntityStore;
use team_roster_api::resolver::QueryResolver;

/// Fresh resolver over an empty store
fn setup_resolver() -> QueryResolver {
    QueryResolver::new(Arc::new(InMemoryEntityStore::new()))
}

/// Resolver with two teams and three users
async fn setup_populated_resolver() -> QueryResolver {
    let resolver = setup_resolver();
    resolver
        .append_team("Backend".to_string())
        .await
        .expect("team capacity");
    resolver
        .append_team("Frontend".to_string())
        .await
        .expect("team capacity");
    resolver
        .append_user(NewUser::new("Kim", 28, Skill::Nestjs, 1))
        .await
        .expect("team 1 exists");
    resolver
        .append_user(NewUser::new("Lee", 31, Skill::React, 2))
        .await
        .expect("team 2 exists");
    resolver
        .append_user(NewUser::new("Park", 24, Skill::Express, 1))
        .await
        .expect("team 1 exists");
    resolver
}

#[tokio::test]
async fn test_append_team_id_is_previous_length_plus_one() {
    let resolver = setup_populated_resolver().await;

    for name in ["Data", "Infra", "Mobile"] {
        let before = resolver.get_teams().await.len();

        let id = resolver.append_team(name.to_string()).await.unwrap();

        let teams = resolver.get_teams().await;
        assert_eq!(id as usize, before + 1);
        assert_eq!(teams.len(), before + 1);
        let last = teams.last().unwrap();
        assert_eq!(last.name(), name);
        assert!(last.users().is_empty());
    }
}

#[tokio::test]
async fn test_append_user_visible_in_users_and_team() {
    let resolver = setup_populated_resolver().await;
    let before = resolver.get_users().await.len();

    let id = resolver
        .append_user(NewUser::new("Choi", 35, Skill::Nextjs, 2))
        .await
        .unwrap();

    assert_eq!(id as usize, before + 1);

    let users = resolver.get_users().await;
    let listed = users.iter().find(|u| u.id() == id).expect("user listed");
    assert_eq!(listed.name(), "Choi");
    assert_eq!(listed.age(), 35);
    assert_eq!(listed.skill(), Skill::Nextjs);

    let team = resolver.get_team("2").await.unwrap();
    let member = team
        .users()
        .iter()
        .find(|u| u.id() == id)
        .expect("user in team");
    assert_eq!(member.as_ref(), listed.as_ref());
}

#[tokio::test]
async fn test_every_team_member_matches_global_user() {
    let resolver = setup_populated_resolver().await;
    let users = resolver.get_users().await;

    for team in resolver.get_teams().await {
        for member in team.users() {
            let global = users.iter().find(|u| u.id() == member.id()).unwrap();
            assert!(Arc::ptr_eq(member, global));
        }
    }
}

#[tokio::test]
async fn test_append_user_unknown_team_leaves_state_unchanged() {
    let resolver = setup_populated_resolver().await;
    let teams_before = resolver.get_teams().await;
    let users_before = resolver.get_users().await;

    let err = resolver
        .append_user(NewUser::new("Ghost", 30, Skill::React, 999))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        DomainError::NotFound {
            kind: EntityKind::Team,
            id: "999".to_string(),
        }
    );
    assert!(err.to_string().contains("999"));
    assert_eq!(resolver.get_teams().await, teams_before);
    assert_eq!(resolver.get_users().await, users_before);
}

#[tokio::test]
async fn test_append_user_negative_team_id_is_not_found() {
    let resolver = setup_populated_resolver().await;
    let teams_before = resolver.get_teams().await;
    let users_before = resolver.get_users().await;

    let err = resolver
        .append_user(NewUser::new("Ghost", 30, Skill::React, -1))
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::team_not_found(-1));
    assert_eq!(err.to_string(), "Team not found: -1");
    assert_eq!(resolver.get_teams().await, teams_before);
    assert_eq!(resolver.get_users().await, users_before);
}

#[tokio::test]
async fn test_get_team_unknown_id_fails() {
    let resolver = setup_populated_resolver().await;

    assert!(matches!(
        resolver.get_team("3").await,
        Err(DomainError::NotFound {
            kind: EntityKind::Team,
            ..
        })
    ));
}

#[tokio::test]
async fn test_get_user_unknown_id_is_sentinel() {
    let resolver = setup_populated_resolver().await;

    assert!(resolver.get_user("4").await.is_none());
    assert!(resolver.get_user("x").await.is_none());
    assert_eq!(resolver.get_user("3").await.unwrap().name(), "Park");
}

#[tokio::test]
async fn test_reads_are_idempotent() {
    let resolver = setup_populated_resolver().await;

    assert_eq!(resolver.get_teams().await, resolver.get_teams().await);
    assert_eq!(resolver.get_users().await, resolver.get_users().await);
}

#[tokio::test]
async fn test_end_to_end_create_then_read() {
    let resolver = setup_resolver();

    assert_eq!(resolver.append_team("A".to_string()).await, Ok(1));
    assert_eq!(
        resolver
            .append_user(NewUser::new("U", 21, Skill::Express, 1))
            .await
            .unwrap(),
        1
    );

    let team = resolver.get_team("1").await.unwrap();
    assert_eq!(team.id(), 1);
    assert_eq!(team.name(), "A");
    assert_eq!(team.users().len(), 1);

    let member = &team.users()[0];
    assert_eq!(
        (member.id(), member.name(), member.age(), member.skill()),
        (1, "U", 21, Skill::Express)
    );

    let user = resolver.get_user("1").await.unwrap();
    assert_eq!(user.as_ref(), member.as_ref());

    // Rejected append on that state changes nothing
    let teams_before = resolver.get_teams().await;
    let users_before = resolver.get_users().await;
    let result = resolver
        .append_user(NewUser::new("U2", 30, Skill::React, 999))
        .await;
    assert!(result.is_err());
    assert_eq!(resolver.get_teams().await, teams_before);
    assert_eq!(resolver.get_users().await, users_before);
}

#[tokio::test]
async fn test_separate_stores_are_isolated() {
    let first = setup_resolver();
    let second = setup_resolver();

    first.append_team("Only here".to_string()).await.unwrap();

    assert_eq!(first.get_teams().await.len(), 1);
    assert!(second.get_teams().await.is_empty());
}

#[tokio::test]
async fn test_concurrent_appends_keep_collections_consistent() {
    let store = Arc::new(InMemoryEntityStore::new());
    let resolver = QueryResolver::new(store.clone());
    resolver.append_team("A".to_string()).await.unwrap();
    resolver.append_team("B".to_string()).await.unwrap();

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let resolver = resolver.clone();
            tokio::spawn(async move {
                let team_id = i % 2 + 1;
                resolver
                    .append_user(NewUser::new(format!("User {}", i), 20 + i, Skill::React, team_id))
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let users = resolver.get_users().await;
    let ids: Vec<i32> = users.iter().map(|u| u.id()).collect();
    assert_eq!(ids, (1..=20).collect::<Vec<i32>>());

    let members: usize = resolver
        .get_teams()
        .await
        .iter()
        .map(|t| t.users().len())
        .sum();
    assert_eq!(members, 20);
    assert_eq!(store.counts().await, (2, 20));
}
