use super::handlers::{get_current_user::get_current_user, login::login, register::register};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};

/// Token issuance and identity lookup. These routes sit outside the resource
/// guard.
pub fn authentication_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/register"), post(register))
        .route(&format!("{root_path}/login"), post(login))
        .route(&format!("{root_path}/users/me"), get(get_current_user))
}
