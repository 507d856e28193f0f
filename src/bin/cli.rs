//! Enrollment Dashboard CLI
//!
//! Command-line client for the dashboard API:
//! - Compute enrollment estimates
//! - List the state table and monthly trend
//! - Download charts and exports
//! - Check server status

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use enrollment::dataset::group_thousands;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "enrollment-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Client for the AADHAAR enrollment dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8501", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate enrollment from the two age-band counts
    Predict {
        /// Children, ages 5-17
        #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(0..=1000))]
        children: u32,
        /// Adults, ages 17+
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(0..=1000))]
        adults: u32,
        /// Is this an outlier zone?
        #[arg(long, value_enum, default_value_t = Outlier::No)]
        outlier: Outlier,
    },

    /// List states by enrollment
    States {
        /// Show only the N largest states
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Show the monthly enrollment trend
    Trend,

    /// Show project information
    About,

    /// Show server status
    Status,

    /// Download a chart as SVG
    Chart {
        /// Which chart
        #[arg(value_enum)]
        kind: ChartKind,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the state table
    Export {
        /// Export format
        #[arg(long = "as", value_enum, default_value_t = ExportFormat::Csv)]
        export_format: ExportFormat,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Outlier {
    No,
    Yes,
}

impl Outlier {
    fn as_str(self) -> &'static str {
        match self {
            Outlier::No => "No",
            Outlier::Yes => "Yes",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ChartKind {
    TopStates,
    MonthlyTrend,
}

impl ChartKind {
    fn path(self) -> &'static str {
        match self {
            ChartKind::TopStates => "top-states.svg",
            ChartKind::MonthlyTrend => "monthly-trend.svg",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.api_url.trim_end_matches('/').to_string();

    match cli.command {
        Commands::Predict {
            children,
            adults,
            outlier,
        } => {
            let body = serde_json::json!({
                "children": children,
                "adults": adults,
                "outlier_zone": outlier.as_str(),
            });

            let response = client
                .post(format!("{}/api/v1/predict", base))
                .json(&body)
                .send()
                .await
                .with_context(|| format!("Cannot reach dashboard API at {}", base))?;

            let result = read_json(response).await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "Children (5-17): {}   Adults (17+): {}   Outlier zone: {}",
                    children,
                    adults,
                    result["outlier_zone"].as_str().unwrap_or("-")
                );
                println!();
                println!(
                    "Predicted Enrollment: {}",
                    result["formatted_total"].as_str().unwrap_or("-")
                );
                println!("{}", result["message"].as_str().unwrap_or(""));
            }
        }

        Commands::States { top } => {
            let mut request = client.get(format!("{}/api/v1/states", base));
            if let Some(n) = top {
                request = request.query(&[("top", n)]);
            }
            let data = read_json(request.send().await?).await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                print_states(&data);
            }
        }

        Commands::Trend => {
            let data = read_json(
                client
                    .get(format!("{}/api/v1/analytics", base))
                    .send()
                    .await?,
            )
            .await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&data["trend"])?);
            } else {
                print_trend(&data);
            }
        }

        Commands::About => {
            let data = read_json(client.get(format!("{}/api/v1/about", base)).send().await?).await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                println!("{}", data["header"].as_str().unwrap_or(""));
                println!();
                print!("{}", data["markdown"].as_str().unwrap_or(""));
                println!();
                println!("{}", data["footer"].as_str().unwrap_or(""));
            }
        }

        Commands::Status => {
            let response = client.get(format!("{}/health", base)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: Value = resp.json().await?;

                    println!("Enrollment Dashboard v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!(
                        "Server version: {}",
                        health["version"].as_str().unwrap_or("unknown")
                    );
                    if let Some(rows) = health["dataset_rows"].as_u64() {
                        println!("Dataset rows: {}", rows);
                    }
                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to dashboard API at {}", base);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the server is running:");
                    eprintln!("  cargo run --bin enrollment");
                    std::process::exit(1);
                }
            }
        }

        Commands::Chart { kind, output } => {
            let response = client
                .get(format!("{}/api/v1/charts/{}", base, kind.path()))
                .send()
                .await?;
            let svg = read_text(response).await?;
            write_output(output, &svg)?;
        }

        Commands::Export {
            export_format,
            output,
        } => {
            let response = client
                .get(format!("{}/api/v1/export", base))
                .query(&[("format", export_format.as_str())])
                .send()
                .await?;
            let data = read_text(response).await?;
            write_output(output, &data)?;
        }

        Commands::Config { output } => {
            let config = enrollment::config::generate_default_config();

            if let Some(parent) = output.as_ref().and_then(|p| p.parent()) {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Cannot create {:?}", parent))?;
                }
            }
            write_output(output, &config)?;
        }
    }

    Ok(())
}

/// Decode a JSON body, turning API error payloads into an error
async fn read_json(response: reqwest::Response) -> anyhow::Result<Value> {
    let status = response.status();
    let body: Value = response.json().await.context("Invalid JSON from API")?;

    if !status.is_success() {
        let message = body["error"]["message"].as_str().unwrap_or("unknown error");
        bail!("Request failed ({}): {}", status, message);
    }

    Ok(body)
}

async fn read_text(response: reqwest::Response) -> anyhow::Result<String> {
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        bail!("Request failed ({}): {}", status, text);
    }
    Ok(text)
}

fn write_output(output: Option<PathBuf>, data: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(&path, data).with_context(|| format!("Cannot write {:?}", path))?;
            println!("Written to {:?}", path);
        }
        None => print!("{}", data),
    }
    Ok(())
}

fn print_states(data: &Value) {
    let rows = match data["states"].as_array() {
        Some(r) if !r.is_empty() => r,
        _ => {
            println!("No states");
            return;
        }
    };

    println!(
        "{:<16} {:>12} {:>12} {:>12} {:>12}",
        "State", "Total", "Age 5-17", "Age 17+", "Other"
    );
    println!("{}", "-".repeat(68));

    for row in rows {
        println!(
            "{:<16} {:>12} {:>12} {:>12} {:>12}",
            row["state"].as_str().unwrap_or("-"),
            group_thousands(row["total_bio"].as_u64().unwrap_or(0)),
            group_thousands(row["bio_age_5_17"].as_u64().unwrap_or(0)),
            group_thousands(row["bio_age_17_plus"].as_u64().unwrap_or(0)),
            group_thousands(row["other_age_bio"].as_u64().unwrap_or(0)),
        );
    }

    let totals = &data["totals"];
    println!("{}", "-".repeat(68));
    println!(
        "{:<16} {:>12} {:>12} {:>12}",
        "All listed",
        group_thousands(totals["total_bio"].as_u64().unwrap_or(0)),
        group_thousands(totals["bio_age_5_17"].as_u64().unwrap_or(0)),
        group_thousands(totals["bio_age_17_plus"].as_u64().unwrap_or(0)),
    );
}

fn print_trend(data: &Value) {
    let points = match data["trend"].as_array() {
        Some(p) => p,
        None => {
            println!("No data");
            return;
        }
    };

    println!("{}", data["caption"].as_str().unwrap_or("Monthly Trend"));
    println!();

    let max = points
        .iter()
        .filter_map(|p| p["enrollments"].as_u64())
        .max()
        .unwrap_or(1)
        .max(1);

    for point in points {
        let value = point["enrollments"].as_u64().unwrap_or(0);
        let width = (value * 40 / max) as usize;
        println!(
            "{:<4} {:>11} {}",
            point["label"].as_str().unwrap_or("-"),
            group_thousands(value),
            "█".repeat(width)
        );
    }

    if let Some(peak) = data["peak_month"]["label"].as_str() {
        println!();
        println!("Highest month in data: {}", peak);
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_predict_bounds_enforced() {
        assert!(Cli::try_parse_from(["enrollment-cli", "predict", "--children", "1000"]).is_ok());
        assert!(Cli::try_parse_from(["enrollment-cli", "predict", "--children", "1001"]).is_err());
        assert!(Cli::try_parse_from(["enrollment-cli", "predict", "--adults", "-1"]).is_err());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(42), "42s");
        assert_eq!(format_duration(125), "2m 5s");
        assert_eq!(format_duration(7260), "2h 1m");
        assert_eq!(format_duration(90000), "1d 1h");
    }
}
