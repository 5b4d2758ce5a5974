//! CLI entry point for the playforge telemetry generator.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use playforge_store::StoreConfig;

use playforge_gen::config::GenConfig;
use playforge_gen::driver::Driver;

#[derive(Parser)]
#[command(name = "playforge-gen")]
#[command(about = "Synthetic gameplay telemetry generator for the playforge analytics store")]
struct Cli {
    /// Produce a single event and exit instead of running forever.
    #[arg(long)]
    once: bool,

    /// Config file prefix (default: playforge).
    #[arg(short, long, default_value = "playforge")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let cli = Cli::parse();
    let gen_config = load_gen_config(&cli.config)?;
    let store_config = load_store_config(&cli.config);

    tracing::info!(
        player = %gen_config.player,
        period_secs = gen_config.period_secs,
        host = %store_config.host,
        "Generator starting"
    );

    let mut driver = Driver::new(store_config, gen_config);

    if cli.once {
        let event = driver.run_once().await?;
        tracing::info!(
            action = %event.action,
            total = event.karma_total,
            rank = %event.rank,
            "Single event recorded"
        );
    } else {
        driver.run().await;
    }

    Ok(())
}

fn load_gen_config(file_prefix: &str) -> anyhow::Result<GenConfig> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("PLAYFORGE_GEN")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    match cfg.get::<GenConfig>("gen") {
        Ok(c) => Ok(c),
        Err(_) => Ok(GenConfig::default()),
    }
}

fn load_store_config(file_prefix: &str) -> StoreConfig {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("PLAYFORGE")
                .separator("__")
                .try_parsing(true),
        )
        .build();

    match cfg {
        Ok(c) => StoreConfig {
            host: c
                .get_string("store.host")
                .unwrap_or_else(|_| "localhost".to_string()),
            port: c
                .get_int("store.port")
                .ok()
                .and_then(|p| u16::try_from(p).ok())
                .unwrap_or(5432),
            database: c
                .get_string("store.database")
                .unwrap_or_else(|_| "analytics".to_string()),
            user: c.get_string("store.user").unwrap_or_else(|_| "app".to_string()),
            password: c
                .get_string("store.password")
                .unwrap_or_else(|_| "app_pass".to_string()),
            ..Default::default()
        },
        Err(_) => StoreConfig::default(),
    }
}
