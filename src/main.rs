mod config;
mod error;
mod fetch;
mod output;
mod parser;
mod pipeline;
mod record;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;

use config::SiteConfig;
use fetch::HttpFetcher;

#[derive(Parser)]
#[command(name = "sof_scraper", about = "Ship of Fools wiki projectile scraper")]
struct Cli {
    /// Index page listing every projectile
    #[arg(long, default_value = config::INDEX_URL)]
    index_url: String,
    /// Where to write the JSON array
    #[arg(short, long, default_value = config::OUTPUT_PATH)]
    output: PathBuf,
    /// Per-request timeout
    #[arg(
        long,
        default_value_t = config::DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let cfg = SiteConfig::default();
    let fetcher = HttpFetcher::new(Duration::from_secs(cli.timeout_secs))?;

    println!("Scraping projectile links from {}...", cli.index_url);
    let mut stdout = std::io::stdout();
    let records = pipeline::scrape_all(&fetcher, &cli.index_url, &cfg, true, &mut stdout);

    if records.is_empty() {
        println!("No projectile data could be extracted.");
        return Ok(());
    }

    output::write_records(&cli.output, &records)?;
    println!("\nSaved projectile data to '{}'.", cli.output.display());
    println!("Projectiles extracted: {}", records.len());

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("Done in {:.1}s", elapsed.as_secs_f64());
    }
    Ok(())
}
