//! # Freedium
//!
//! Command-line front end for the article extraction pipeline.
//!
//! ## Usage
//!
//! ```sh
//! freedium extract https://medium.com/@someone/some-post-0123abcd
//! freedium validate https://example.com
//! freedium health
//! ```
//!
//! Records are printed to stdout (or written under `--output-dir`); logs go
//! to stderr and are filtered with `RUST_LOG`.

use clap::Parser;
use freedium::cache::CacheHandle;
use freedium::config::Settings;
use freedium::outputs::{self, Report, json, markdown};
use freedium::scrapers::{HttpFetcher, Platform, Scraper};
use freedium::utils::ensure_writable_dir;
use freedium::validate::is_valid_url;
use std::error::Error;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;

use cli::{Cli, Command, Format};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(command = ?args.command, "Parsed CLI arguments");

    let settings = Settings::load(args.config.as_deref())
        .await?
        .with_overrides(args.overrides())?;

    match args.command {
        Command::Validate { url } => {
            let valid = is_valid_url(url.as_str());
            println!("{}", serde_json::json!({ "url": url, "valid": valid }));
            Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Command::Health => {
            let cache = CacheHandle::from_settings(
                settings.redis_url.as_deref(),
                settings.redis_token.as_deref(),
            );
            let status = cache.status().await;
            info!(%status, "Cache status");
            println!("{}", serde_json::json!({ "status": "ok", "cache": status.to_string() }));
            Ok(ExitCode::SUCCESS)
        }
        Command::Extract {
            urls,
            format,
            output_dir,
            ..
        } => extract(&settings, &urls, format, output_dir.as_deref()).await,
    }
}

async fn extract(
    settings: &Settings,
    urls: &[String],
    format: Format,
    output_dir: Option<&str>,
) -> Result<ExitCode, Box<dyn Error>> {
    let start_time = std::time::Instant::now();

    // Fail before any fetch if the output cannot be written.
    if let Some(dir) = output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(path = %dir, error = %e, "Output directory is not writable");
            return Err(e.into());
        }
    }

    let platform = Platform::with_domain(&settings.platform_domain);
    let fetcher = HttpFetcher::new(
        platform.clone(),
        settings.session_cookie.as_deref(),
        settings.fetch_timeout(),
    )?;
    let scraper = Scraper::new(fetcher, platform, settings.concurrency);
    info!(count = urls.len(), domain = %settings.platform_domain, "Starting extraction");

    let reports: Vec<Report> = scraper
        .scrape_many(urls)
        .await
        .into_iter()
        .map(|(url, outcome)| Report::from_outcome(&url, outcome))
        .collect();

    for report in reports.iter().filter(|r| !r.is_success()) {
        if let Some(e) = &report.error {
            eprintln!("error: {}: {}", report.record.url, e);
        }
    }

    let mut write_failures = 0usize;
    match output_dir {
        Some(dir) => {
            for report in &reports {
                let rendered = match format {
                    Format::Json => json::report_to_json(report)?,
                    Format::Markdown => markdown::report_to_markdown(report),
                };
                if let Err(e) = outputs::write_report(dir, report, format.extension(), &rendered).await {
                    error!(url = %report.record.url, error = %e, "Failed writing report");
                    eprintln!("error: {}: failed writing report: {}", report.record.url, e);
                    write_failures += 1;
                }
            }
        }
        None => {
            let rendered = match (format, reports.as_slice()) {
                (Format::Json, [single]) => json::report_to_json(single)?,
                (Format::Json, many) => json::reports_to_json(many)?,
                (Format::Markdown, many) => markdown::reports_to_markdown(many),
            };
            println!("{}", rendered);
        }
    }

    let failed = reports.iter().filter(|r| !r.is_success()).count();
    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        total = reports.len(),
        failed,
        write_failures,
        "Execution complete"
    );

    Ok(if failed == 0 && write_failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
