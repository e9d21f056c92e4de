use chrono::{DateTime, Utc};
use rand::{Rng, distributions::Alphanumeric};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct DietPlanningConfig {
    pub auth: AuthConfig,
    pub seed: SeedConfig,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// HS256 signing secret. When absent a random one is generated at start-up
    /// and issued tokens do not survive a restart.
    pub jwt_secret: Option<String>,
    pub token_ttl_minutes: i64,
}

#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub demo_data: bool,
    pub admin: Option<AdminAccount>,
}

#[derive(Clone, Debug)]
pub struct AdminAccount {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_minutes: 30,
        }
    }
}

pub fn generate_timestamp() -> DateTime<Utc> {
    Utc::now()
}

pub fn generate_random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
