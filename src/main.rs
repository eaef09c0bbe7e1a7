use anyhow::{Context, Result};
use nfr::config::{OutputFormat, ReportConfig};
use nfr::data::{Data, NetflixData};
use nfr::report;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();
    init_tracing();
    match dotenv {
        Ok(path) => info!("Loaded environment from {:?}", path),
        Err(e) => warn!("No .env file loaded ({}) - relying on environment", e),
    }

    let cfg = ReportConfig::from_env()?;
    info!(
        threads = polars_core::POOL.current_num_threads(),
        today = %cfg.today,
        "polars thread pool ready"
    );

    let netflix = NetflixData::load(&cfg.data_path)
        .with_context(|| format!("loading {}", cfg.data_path.display()))?;
    let db = Data::new(&netflix).context("titles do not match the expected schema")?;

    let sections = report::run(&db, &cfg)?;
    match cfg.format {
        OutputFormat::Table => {
            for section in &sections {
                println!("{section}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report::to_json(&sections)?)?);
        }
    }
    Ok(())
}
