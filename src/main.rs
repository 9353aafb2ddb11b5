//! Terminal client for the shorter URL-shortening service.
//!
//! Plays the host role for the two controllers: it wires the transport and
//! API client together, runs submissions, and refreshes the listing after a
//! successful creation.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (scheme optional), copying the result to the clipboard
//! shorter shorten example.com/some/long/path --copy
//!
//! # Shorten with a custom code
//! shorter shorten https://example.com --code my-link
//!
//! # Browse history
//! shorter list --page 2
//!
//! # Click statistics for a short code
//! shorter stats abc123
//!
//! # Save the QR code image
//! shorter qr abc123 --output qr.png
//!
//! # Backend health
//! shorter health
//! ```
//!
//! # Environment Variables
//!
//! See [`shorter_client::config::Config`]; `API_BASE_URL` selects the backend.

use shorter_client::api::{ApiClient, ReqwestTransport};
use shorter_client::application::{
    ListController, Notice, NoticeLevel, SubmissionController, SubmitOutcome,
};
use shorter_client::config::Config;
use shorter_client::utils::clipboard::copy_text;
use shorter_client::utils::format::{format_count, hostname_of, relative_time, truncate};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Client CLI for the shorter URL-shortening service.
#[derive(Parser)]
#[command(name = "shorter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a long URL
    Shorten {
        /// The URL to shorten; https:// is assumed when the scheme is omitted
        url: String,

        /// Custom short code (3-20 characters: letters, numbers, hyphens)
        #[arg(short, long)]
        code: Option<String>,

        /// Copy the resulting short URL to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// List previously created short links
    List {
        /// Page of history to show
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// Show click statistics for a short code
    Stats {
        short_code: String,
    },

    /// Save the QR code image for a short code
    Qr {
        short_code: String,

        /// Output file (default: qr-<code>.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check backend health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config);

    let transport = ReqwestTransport::new(Duration::from_secs(config.request_timeout_secs))
        .context("Failed to build HTTP transport")?;
    let client = Arc::new(ApiClient::new(transport, &config.api_base_url)?);

    let cli = Cli::parse();
    match cli.command {
        Commands::Shorten { url, code, copy } => {
            run_shorten(client, &config, url, code, copy).await?;
        }
        Commands::List { page } => {
            run_list(client, &config, page).await?;
        }
        Commands::Stats { short_code } => {
            run_stats(client, &short_code).await?;
        }
        Commands::Qr { short_code, output } => {
            run_qr(client, &short_code, output).await;
        }
        Commands::Health => {
            run_health(client).await?;
        }
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.log_format == "json" {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Submits a URL through the submission controller and, on success, refreshes
/// the listing the way a host page would.
async fn run_shorten(
    client: Arc<ApiClient<ReqwestTransport>>,
    config: &Config,
    url: String,
    code: Option<String>,
    copy: bool,
) -> Result<()> {
    let mut form = SubmissionController::new(client.clone());
    form.set_url_input(url);
    form.set_custom_code_input(code.unwrap_or_default());

    match form.submit().await {
        SubmitOutcome::Invalid => {
            let errors = form.errors();
            if let Some(message) = &errors.url {
                eprintln!("{} {}", "url:".red().bold(), message);
            }
            if let Some(message) = &errors.custom_code {
                eprintln!("{} {}", "code:".red().bold(), message);
            }
            bail!("validation failed");
        }
        SubmitOutcome::Created(link) => {
            print_notice(form.take_notice());
            println!();
            println!("  {}  {}", "Short URL:".bold(), link.short_url.green().bold());
            println!("  {}  {}", "Original: ".bold(), link.original_url);
            println!("  {}  {}", "Code:     ".bold(), link.short_code);

            if copy {
                if copy_text(&link.short_url).await {
                    println!("\n{}", "Copied to clipboard!".green());
                } else {
                    println!("\n{}", "Failed to copy to clipboard".yellow());
                }
            }

            // Host composition: a successful creation refreshes the listing.
            let mut list = ListController::new(client, config.page_limit);
            list.refresh().await;
            if let Some(page) = list.page() {
                println!();
                println!(
                    "{}",
                    format!("{} short links total", format_count(page.total)).dimmed()
                );
            }
            Ok(())
        }
        SubmitOutcome::Rejected => {
            print_notice(form.take_notice());
            bail!("short link creation failed");
        }
        SubmitOutcome::InFlight => unreachable!("single submission per invocation"),
    }
}

async fn run_list(
    client: Arc<ApiClient<ReqwestTransport>>,
    config: &Config,
    page: u32,
) -> Result<()> {
    let mut list = ListController::new(client, config.page_limit);
    list.select_page(page);
    list.refresh().await;

    if let Some(notice) = list.take_notice() {
        print_notice(Some(notice));
        bail!("could not fetch short links");
    }

    let Some(data) = list.page() else {
        bail!("could not fetch short links");
    };

    if data.items.is_empty() {
        println!("{}", "No short links yet.".dimmed());
        return Ok(());
    }

    let now = Utc::now();
    println!();
    for link in &data.items {
        let label = if link.title.is_empty() {
            hostname_of(&link.original_url)
        } else {
            link.title.clone()
        };

        println!("  {}  {}", link.short_url.green().bold(), label.bold());
        println!(
            "      {}  |  {} clicks  |  {}",
            truncate(&link.original_url, 60).dimmed(),
            format_count(link.click_count),
            relative_time(link.created_at, now).dimmed()
        );
    }

    println!();
    let numbers: Vec<String> = list
        .page_numbers()
        .into_iter()
        .map(|n| {
            if n == data.page {
                format!("[{n}]").bold().to_string()
            } else {
                n.to_string()
            }
        })
        .collect();

    let prev = if list.has_prev() { "< prev" } else { "      " };
    let next = if list.has_next() { "next >" } else { "" };
    println!(
        "  {prev} {} {next}   {}",
        numbers.join(" "),
        format!(
            "page {} of {} ({} links)",
            data.page,
            data.total_pages,
            format_count(data.total)
        )
        .dimmed()
    );

    Ok(())
}

async fn run_stats(client: Arc<ApiClient<ReqwestTransport>>, short_code: &str) -> Result<()> {
    let stats = match client.get_stats(short_code).await {
        Ok(stats) => stats,
        Err(e) => {
            print_notice(Some(Notice::error(e.message())));
            bail!("could not fetch statistics");
        }
    };

    println!();
    println!(
        "  {}  {}",
        "Total clicks:".bold(),
        format_count(stats.total_clicks).green().bold()
    );

    if !stats.daily_clicks.is_empty() {
        println!("\n  {}", "Last days".bold());
        for row in &stats.daily_clicks {
            println!("    {}  {}", row.date, format_count(row.count));
        }
    }

    if !stats.country_clicks.is_empty() {
        println!("\n  {}", "Countries".bold());
        for row in &stats.country_clicks {
            println!("    {}  {}", row.country, format_count(row.count));
        }
    }

    if !stats.referer_clicks.is_empty() {
        println!("\n  {}", "Referers".bold());
        for row in &stats.referer_clicks {
            println!("    {}  {}", truncate(&row.referer, 50), format_count(row.count));
        }
    }

    Ok(())
}

/// QR failure is a rendering fallback: degrade to a placeholder message, no
/// error notification, success exit.
async fn run_qr(
    client: Arc<ApiClient<ReqwestTransport>>,
    short_code: &str,
    output: Option<PathBuf>,
) {
    let path = output.unwrap_or_else(|| PathBuf::from(format!("qr-{short_code}.png")));

    match client.fetch_qr_image(short_code).await {
        Ok(bytes) => match tokio::fs::write(&path, bytes).await {
            Ok(()) => {
                println!("{} {}", "Saved QR code to".green(), path.display());
                println!("{}", format!("View online: {}", client.qr_page_url(short_code)).dimmed());
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to write QR image");
                println!("{}", "QR code unavailable".dimmed());
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "failed to fetch QR image");
            println!("{}", "QR code unavailable".dimmed());
        }
    }
}

async fn run_health(client: Arc<ApiClient<ReqwestTransport>>) -> Result<()> {
    match client.health_check().await {
        Ok(health) => {
            let status = if health.status == "ok" {
                health.status.green().bold()
            } else {
                health.status.yellow().bold()
            };
            println!("{}  {}", status, health.message);
            Ok(())
        }
        Err(e) => {
            print_notice(Some(Notice::error(e.message())));
            bail!("backend unreachable");
        }
    }
}

fn print_notice(notice: Option<Notice>) {
    if let Some(notice) = notice {
        match notice.level {
            NoticeLevel::Success => println!("{}", notice.message.green()),
            NoticeLevel::Error => eprintln!("{}", notice.message.red()),
        }
    }
}
