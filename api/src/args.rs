use clap::{Args as ClapArgs, Parser, ValueEnum};
use dietplan_core::domain::common::{AdminAccount, AuthConfig, DietPlanningConfig, SeedConfig};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "dietplan-api",
    version,
    about = "Diet planning HTTP API",
    args_override_self = true
)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub seed: SeedArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 8001)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Exposes `/metrics` and records request metrics.
    #[arg(long, env = "SERVER_METRICS", default_value_t = true, action = clap::ArgAction::Set)]
    pub metrics: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AuthMode {
    /// Resource routes require a bearer token.
    Bearer,
    /// Resource routes are open. `/users/me` still needs a token.
    Disabled,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AuthArgs {
    #[arg(long, env = "AUTH_MODE", value_enum, default_value_t = AuthMode::Bearer)]
    pub auth_mode: AuthMode,

    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: Option<String>,

    #[arg(long, env = "ACCESS_TOKEN_EXPIRE_MINUTES", default_value_t = 30)]
    pub token_ttl_minutes: i64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct SeedArgs {
    /// Loads the demo customers, recipes, plan and batch at start-up.
    #[arg(long, env = "SEED_DEMO_DATA", default_value_t = true, action = clap::ArgAction::Set)]
    pub demo_data: bool,

    #[arg(long, env = "ADMIN_USERNAME", default_value = "admin")]
    pub admin_username: String,

    #[arg(long, env = "ADMIN_PASSWORD", default_value = "secret", hide_env_values = true)]
    pub admin_password: String,

    #[arg(long, env = "ADMIN_EMAIL", default_value = "admin@example.com")]
    pub admin_email: String,

    /// Skips the admin account entirely.
    #[arg(long, env = "NO_ADMIN", default_value_t = false)]
    pub no_admin: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for DietPlanningConfig {
    fn from(args: Args) -> Self {
        let admin = (!args.seed.no_admin).then(|| AdminAccount {
            username: args.seed.admin_username,
            password: args.seed.admin_password,
            email: Some(args.seed.admin_email),
            full_name: Some("Administrator".to_string()),
        });

        DietPlanningConfig {
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                token_ttl_minutes: args.auth.token_ttl_minutes,
            },
            seed: SeedConfig {
                demo_data: args.seed.demo_data,
                admin,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["dietplan-api"]);

        assert_eq!(args.server.port, 8001);
        assert_eq!(args.server.root_path, "");
        assert_eq!(args.auth.auth_mode, AuthMode::Bearer);
        assert_eq!(args.auth.token_ttl_minutes, 30);
        assert!(args.seed.demo_data);
    }

    #[test]
    fn test_config_conversion() {
        let args = Args::parse_from([
            "dietplan-api",
            "--auth-mode",
            "disabled",
            "--jwt-secret",
            "s3cret",
            "--demo-data",
            "false",
            "--admin-username",
            "root",
        ]);

        assert_eq!(args.auth.auth_mode, AuthMode::Disabled);

        let config = DietPlanningConfig::from(args);
        assert_eq!(config.auth.jwt_secret.as_deref(), Some("s3cret"));
        assert!(!config.seed.demo_data);
        assert_eq!(
            config.seed.admin.map(|admin| admin.username),
            Some("root".to_string())
        );
    }

    #[test]
    fn test_repeated_flag_keeps_last_value() {
        let args = Args::try_parse_from([
            "dietplan-api",
            "--jwt-secret",
            "first",
            "--port",
            "9000",
            "--jwt-secret",
            "second",
            "--port",
            "9001",
        ])
        .unwrap();

        assert_eq!(args.auth.jwt_secret.as_deref(), Some("second"));
        assert_eq!(args.server.port, 9001);
    }

    #[test]
    fn test_no_admin_flag() {
        let args = Args::parse_from(["dietplan-api", "--no-admin"]);

        assert!(DietPlanningConfig::from(args).seed.admin.is_none());
    }

    #[test]
    fn test_allowed_origins_are_comma_separated() {
        let args = Args::parse_from([
            "dietplan-api",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
