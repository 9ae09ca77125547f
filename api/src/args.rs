use clap::{Args as ClapArgs, Parser};
use nutriplan_core::domain::common::{DatabaseConfig, NutriplanConfig, PlanningConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutriplan-api", version, about = "Nutriplan HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub planning: PlanningArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(id = "server-host", long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(id = "server-port", long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(id = "database-host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database-port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "nutriplan")]
    pub name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct PlanningArgs {
    /// Default window for trend analysis.
    #[arg(long, env = "TREND_WINDOW_DAYS", default_value_t = 7)]
    pub trend_window_days: u32,

    /// Default window for target adjustment.
    #[arg(long, env = "ADJUSTMENT_WINDOW_DAYS", default_value_t = 7)]
    pub adjustment_window_days: u32,
}

impl From<Args> for NutriplanConfig {
    fn from(args: Args) -> Self {
        NutriplanConfig {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            planning: PlanningConfig {
                trend_window_days: args.planning.trend_window_days,
                adjustment_window_days: args.planning.adjustment_window_days,
                ..PlanningConfig::default()
            },
        }
    }
}
