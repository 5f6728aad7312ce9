//! Heart Risk CLI Module
//!
//! Command-line interface for serving the API and scoring single records.

use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};

use crate::feature_engineering::{PatientInput, PatientRecord};
use crate::inference::RiskPredictor;
use crate::server::{run_server, ServerConfig, API_TITLE};

// ─── Styling helpers ───────────────────────────────────────────────────────────

const W: usize = 58; // box inner width

fn dim(s: &str) -> ColoredString   { s.truecolor(100, 100, 100) }
fn muted(s: &str) -> ColoredString  { s.truecolor(140, 140, 140) }
fn ok(s: &str) -> ColoredString     { s.truecolor(100, 210, 120) }

fn line_box_top()    { println!("  {}", dim("┌─────────────────────────────────────────────────────────┐")); }
fn line_box_bottom() { println!("  {}", dim("└─────────────────────────────────────────────────────────┘")); }
fn line_box_sep()    { println!("  {}", dim("├─────────────────────────────────────────────────────────┤")); }

fn line_box(content: &str) {
    let visible_len = strip_ansi(content).chars().count();
    let pad = W.saturating_sub(visible_len);
    println!("  {}  {}{} {}", dim("│"), content, " ".repeat(pad), dim("│"));
}

fn line_box_center(content: &str) {
    let visible_len = strip_ansi(content).chars().count();
    let total_pad = W.saturating_sub(visible_len);
    let left = total_pad / 2;
    let right = total_pad - left;
    println!("  {}  {}{}{} {}", dim("│"), " ".repeat(left), content, " ".repeat(right), dim("│"));
}

fn line_box_empty() { line_box(""); }

fn strip_ansi(s: &str) -> String {
    let mut out = String::new();
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' { in_escape = true; continue; }
        if in_escape { if c == 'm' { in_escape = false; } continue; }
        out.push(c);
    }
    out
}

fn kv(key: &str, val: &str) -> String {
    format!("{} {}", muted(key), val.white())
}

// ─── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "heart-risk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Heart disease risk prediction API")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the prediction server
    Serve {
        /// Server port [env: API_PORT, default: 7860]
        #[arg(short, long)]
        port: Option<u16>,

        /// Server host [env: API_HOST, default: 0.0.0.0]
        #[arg(long)]
        host: Option<String>,

        /// Directory holding preprocessor.json and classifier.json [env: MODELS_DIR]
        #[arg(short, long)]
        models_dir: Option<PathBuf>,
    },

    /// Score one patient record from a JSON file and print the response
    Predict {
        /// JSON file with the eight input fields
        #[arg(short, long)]
        input: PathBuf,

        /// Directory holding preprocessor.json and classifier.json [env: MODELS_DIR]
        #[arg(short, long)]
        models_dir: Option<PathBuf>,

        /// Also print the derived features
        #[arg(long)]
        explain: bool,
    },
}

fn config_with_overrides(
    host: Option<String>,
    port: Option<u16>,
    models_dir: Option<PathBuf>,
) -> ServerConfig {
    let defaults = ServerConfig::default();
    ServerConfig {
        host: host.unwrap_or(defaults.host),
        port: port.unwrap_or(defaults.port),
        models_dir: models_dir.unwrap_or(defaults.models_dir),
        ..defaults
    }
}

// ─── Serve ─────────────────────────────────────────────────────────────────────

pub async fn cmd_serve(
    host: Option<String>,
    port: Option<u16>,
    models_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = config_with_overrides(host, port, models_dir);
    let base = format!("http://{}:{}", config.host, config.port);

    println!();
    line_box_top();
    line_box_empty();
    line_box_center(&format!("{}", API_TITLE.white().bold()));
    line_box_center(&format!("{}", dim(&format!("v{}", env!("CARGO_PKG_VERSION")))));
    line_box_empty();
    line_box_sep();
    line_box_empty();
    line_box(&kv("Predict", &format!("POST {}/predict", base)));
    line_box(&kv("Health ", &format!("GET  {}/health", base)));
    line_box(&kv("Models ", &config.models_dir.display().to_string()));
    line_box_empty();
    line_box_sep();
    line_box_empty();
    line_box_center(&format!("{}", dim("ctrl+c to stop")));
    line_box_empty();
    line_box_bottom();
    println!();

    run_server(config).await
}

// ─── Predict ───────────────────────────────────────────────────────────────────

pub fn cmd_predict(input: &Path, models_dir: Option<PathBuf>, explain: bool) -> anyhow::Result<()> {
    let config = config_with_overrides(None, None, models_dir);
    let predictor = RiskPredictor::load(config.inference_config())?;

    let raw = std::fs::read_to_string(input)?;
    let patient: PatientInput = serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("Invalid patient record in {}: {}", input.display(), e))?;

    if explain {
        let record = PatientRecord::from_input(patient.clone())?;
        println!("{}", serde_json::to_string_pretty(&record)?);
    }

    let response = predictor.predict(patient)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    eprintln!("  {} {}", ok("✓"), dim(response.prediction.as_str()));
    Ok(())
}
