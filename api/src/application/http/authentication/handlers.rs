pub mod get_current_user;
pub mod login;
pub mod register;
