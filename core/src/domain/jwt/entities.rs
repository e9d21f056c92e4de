use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaim {
    /// Username of the bearer.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl JwtClaim {
    pub fn new(sub: String, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jwt {
    pub token: String,
    pub expires_at: i64,
}
