//! Repository implementations for the Projects domain

pub mod projects;

use sqlx::PgPool;

pub use projects::ProjectRepository;

/// Combined repository access for the Projects domain
#[derive(Clone)]
pub struct ProjectsRepositories {
    pub projects: ProjectRepository,
}

impl ProjectsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            projects: ProjectRepository::new(pool),
        }
    }
}
