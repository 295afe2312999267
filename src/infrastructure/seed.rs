use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::SeedConfig;
use crate::domain::errors::DomainResult;
use crate::domain::repositories::EntityStore;
use crate::domain::user::{NewUser, Skill};

/// What a seeding run created, measured on the store itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub teams: usize,
    pub users: usize,
}

/// Fills the store with sample teams and users
///
/// Teams are created first (`Sample Team 1..=team_count`), then users
/// (`Sample User 1..=user_count`) aged 21 to 40 with a random skill. Users
/// are spread over the teams by a shuffled round-robin, so team sizes differ
/// by at most one. Everything goes through the store's append operations.
///
/// With no teams to join, no users are created.
///
/// # Errors
/// Stops at the first failed append; entries written before it remain.
pub async fn seed_dummy_data(
    store: &dyn EntityStore,
    config: &SeedConfig,
) -> DomainResult<SeedSummary> {
    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (teams_before, users_before) = store.counts().await;

    let mut team_ids = Vec::with_capacity(config.team_count);
    for n in 1..=config.team_count {
        let team = store.append_team(format!("Sample Team {}", n)).await?;
        team_ids.push(team.id());
    }

    if team_ids.is_empty() && config.user_count > 0 {
        tracing::warn!(
            user_count = config.user_count,
            "no teams to seed users into, skipping users"
        );
    } else {
        let mut assignments: Vec<i32> = (0..config.user_count)
            .map(|i| team_ids[i % team_ids.len()])
            .collect();
        assignments.shuffle(&mut rng);

        for (n, team_id) in (1..).zip(assignments) {
            let age = 20 + rng.gen_range(1..=20);
            let skill = Skill::ALL[rng.gen_range(0..Skill::ALL.len())];
            store
                .append_user(NewUser::new(format!("Sample User {}", n), age, skill, team_id))
                .await?;
        }
    }

    let (teams_after, users_after) = store.counts().await;
    let summary = SeedSummary {
        teams: teams_after - teams_before,
        users: users_after - users_before,
    };
    tracing::info!(teams = summary.teams, users = summary.users, "seeded dummy data");
    Ok(summary)
}
