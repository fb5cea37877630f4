#[macro_use]
extern crate log;

use clap::Parser;

const DEFAULT_DB_URL: &str = "dobroportal.db";
const DEFAULT_DB_CONNECTION_POOL_SIZE: u32 = 10;

#[derive(Parser, Debug)]
#[command(name = "dobroportal", version, about = "Charity and volunteering portal backend")]
struct Args {
    /// URL of the SQLite database
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DB_URL)]
    db_url: String,

    /// Secret used to sign and verify access and refresh tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    jwt_secret: String,

    /// Number of pooled database connections
    #[arg(long, default_value_t = DEFAULT_DB_CONNECTION_POOL_SIZE)]
    db_connection_pool_size: u32,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    info!("Opening database {}", args.db_url);
    let connections =
        dobro_db_sqlite::Connections::init(&args.db_url, args.db_connection_pool_size)?;
    dobro_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    let cfg = dobro_webserver::Cfg {
        jwt_secret: args.jwt_secret,
    };
    dobro_webserver::run(connections, args.enable_cors, cfg).await;
    Ok(())
}
