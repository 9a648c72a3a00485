//! Chartwatch CLI
//!
//! Command-line client for the Chartwatch API:
//! - Show the home summary
//! - Show a metric's chart data and headline
//! - Dump a raw series
//! - Check server status

use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chartwatch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "12 Charts to Watch from the terminal")]
#[command(long_about = "Chartwatch renders twelve crypto-market charts and their headline figures.\nThis client talks to a running chartwatch-api server.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8090", global = true)]
    pub api_url: String,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Anchor time in ms since epoch (default: now)
    #[arg(long, global = true)]
    pub as_of: Option<i64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every metric's latest value and change
    Home,

    /// Show one selection (`home` or a metric id)
    Show {
        /// Selection identifier, e.g. x402_volume
        selection: String,
    },

    /// Dump a metric's generated series
    Series {
        /// Metric identifier
        metric: String,
        /// Number of points (default: metric's default)
        #[arg(short, long)]
        length: Option<i64>,
    },

    /// List all metrics
    Metrics,

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let as_of = cli.as_of.unwrap_or_else(|| Utc::now().timestamp_millis());

    match &cli.command {
        Commands::Home => {
            let url = format!("{}/api/v1/views/home?as_of={}", cli.api_url, as_of);
            let data = fetch_json(&client, &url).await?;
            print_view(&data, &cli.format)?;
        }

        Commands::Show { selection } => {
            let url = format!("{}/api/v1/views/{}?as_of={}", cli.api_url, selection, as_of);
            let data = fetch_json(&client, &url).await?;
            print_view(&data, &cli.format)?;
        }

        Commands::Series { metric, length } => {
            let mut url = format!("{}/api/v1/series/{}?as_of={}", cli.api_url, metric, as_of);
            if let Some(n) = length {
                url.push_str(&format!("&length={}", n));
            }

            let data = fetch_json(&client, &url).await?;

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&data)?),
                "csv" => print_series_csv(&data),
                _ => print_series_table(&data),
            }
        }

        Commands::Metrics => {
            let url = format!("{}/api/v1/metrics", cli.api_url);
            let data = fetch_json(&client, &url).await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&data)?);
                return Ok(());
            }

            println!(
                "{:<20} {:<20} {:<14} {:<8} {}",
                "ID", "Name", "Chart", "Cadence", "Points"
            );
            println!("{}", "-".repeat(72));

            for metric in data["metrics"].as_array().into_iter().flatten() {
                println!(
                    "{:<20} {:<20} {:<14} {:<8} {}",
                    metric["metric"].as_str().unwrap_or("-"),
                    metric["name"].as_str().unwrap_or("-"),
                    metric["kind"].as_str().unwrap_or("-"),
                    metric["cadence"].as_str().unwrap_or("-"),
                    metric["default_length"].as_u64().unwrap_or(0)
                );
            }
        }

        Commands::Status => {
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("Chartwatch v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!("Metrics: {}", health["metrics"].as_u64().unwrap_or(0));

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Chartwatch API at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the Chartwatch API server is running:");
                    eprintln!("  cargo run --bin chartwatch-api");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = chartwatch::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// GET a URL and decode JSON, exiting with the server's error on failure
async fn fetch_json(
    client: &reqwest::Client,
    url: &str,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let body: serde_json::Value = response.json().await.unwrap_or_default();
        let message = body["error"]["message"].as_str().unwrap_or("unknown error");
        eprintln!("Request failed ({}): {}", status, message);
        std::process::exit(1);
    }

    Ok(response.json().await?)
}

fn print_view(data: &serde_json::Value, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(data)?);
        return Ok(());
    }

    match data["view"].as_str() {
        Some("home") => {
            let headlines = data["headlines"].as_array().map(Vec::as_slice);
            print_headlines(headlines.unwrap_or(&[]));
        }
        Some("metric") => print_metric_view(data, format),
        _ => println!("No data"),
    }

    Ok(())
}

fn print_headlines(headlines: &[serde_json::Value]) {
    println!("{:<20} {:>14} {:>10}", "Metric", "Latest", "Change");
    println!("{}", "-".repeat(46));

    for headline in headlines {
        println!(
            "{:<20} {:>14} {:>10}",
            headline["name"].as_str().unwrap_or("-"),
            headline["value"].as_str().unwrap_or("-"),
            headline["change"].as_str().unwrap_or("-")
        );
    }
}

fn print_metric_view(data: &serde_json::Value, format: &str) {
    let chart = &data["chart"];
    let headline = &data["headline"];

    if format != "csv" {
        println!("{}", data["descriptor"]["title"].as_str().unwrap_or("-"));
        if let Some(caption) = data["descriptor"]["caption"].as_str() {
            println!("{}", caption);
        }
        println!(
            "{}  ({})   [{} chart]",
            headline["value"].as_str().unwrap_or("-"),
            headline["change"].as_str().unwrap_or("-"),
            chart["kind"].as_str().unwrap_or("-")
        );
        println!();
    }

    let traces = chart["traces"].as_array().cloned().unwrap_or_default();
    let timestamps = chart["timestamps"].as_array().cloned().unwrap_or_default();
    let names: Vec<&str> = traces
        .iter()
        .map(|t| t["name"].as_str().unwrap_or("-"))
        .collect();

    let rows = timestamps.iter().enumerate().map(|(i, ts)| {
        let values: Vec<Option<f64>> =
            traces.iter().map(|t| t["values"][i].as_f64()).collect();
        (ts.as_i64().unwrap_or(0), values)
    });

    if format == "csv" {
        println!("timestamp,{}", names.join(","));
        for (ts, values) in rows {
            let cells: Vec<String> = values
                .iter()
                .map(|v| v.map(|v| v.to_string()).unwrap_or_default())
                .collect();
            println!("{},{}", ts, cells.join(","));
        }
    } else {
        print_table(&names, rows);
    }
}

fn print_series_table(data: &serde_json::Value) {
    let names: Vec<&str> = data["categories"]
        .as_array()
        .into_iter()
        .flatten()
        .map(|c| c.as_str().unwrap_or("-"))
        .collect();

    let rows = data["points"].as_array().into_iter().flatten().map(|p| {
        let values: Vec<Option<f64>> = p["values"]
            .as_array()
            .into_iter()
            .flatten()
            .map(|v| v.as_f64())
            .collect();
        (p["timestamp"].as_i64().unwrap_or(0), values)
    });

    print_table(&names, rows);
}

fn print_series_csv(data: &serde_json::Value) {
    let names: Vec<&str> = data["categories"]
        .as_array()
        .into_iter()
        .flatten()
        .map(|c| c.as_str().unwrap_or("-"))
        .collect();

    println!("timestamp,{}", names.join(","));
    for point in data["points"].as_array().into_iter().flatten() {
        let cells: Vec<String> = point["values"]
            .as_array()
            .into_iter()
            .flatten()
            .map(|v| v.as_f64().map(|v| v.to_string()).unwrap_or_default())
            .collect();
        println!(
            "{},{}",
            point["timestamp"].as_i64().unwrap_or(0),
            cells.join(",")
        );
    }
}

fn print_table(names: &[&str], rows: impl Iterator<Item = (i64, Vec<Option<f64>>)>) {
    // Header
    print!("{:<12}", "Date");
    for name in names {
        print!(" | {:<18}", name);
    }
    println!();

    // Separator
    println!("{}", "-".repeat(12 + names.len() * 21));

    // Data rows
    for (ts, values) in rows {
        let date = chrono::DateTime::from_timestamp_millis(ts)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());

        print!("{:<12}", date);
        for value in values {
            let cell = value
                .map(|v| format!("{:.3}", v))
                .unwrap_or_else(|| "-".to_string());
            print!(" | {:<18}", cell);
        }
        println!();
    }
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
