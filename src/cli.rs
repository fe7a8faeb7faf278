use crate::models::{parse_name, CollisionPolicy, ErrorPolicy};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "criterion-scraper",
    version,
    about = "Collect Criterion point estimates into a single JSON file"
)]
pub struct Cli {
    #[arg(help = "Directory to scan (default: current directory)")]
    pub root: Option<PathBuf>,
    #[arg(short, long, help = "Output file (default: <ROOT>/results.json)")]
    pub output: Option<PathBuf>,
    #[arg(short, long, help = "Config file (default: ./criterion_scraper.toml if present)")]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum, help = "What to do when an estimates file cannot be parsed")]
    pub on_error: Option<ErrorPolicy>,
    #[arg(long, value_enum, help = "What to do when two runs produce the same key")]
    pub on_collision: Option<CollisionPolicy>,
    #[arg(long, value_parser = parse_name, help = "Statistic to read (mean, median, slope, ...)")]
    pub statistic: Option<String>,
    #[arg(long, value_parser = parse_name, help = "Field inside the statistic (point_estimate, standard_error)")]
    pub field: Option<String>,
    #[arg(long, value_parser = parse_name, help = "Baseline directory inside each run")]
    pub baseline: Option<String>,
    #[arg(long, default_value_t = false, help = "Pretty-print the output JSON")]
    pub pretty: bool,
    #[arg(short, long, default_value_t = false, conflicts_with = "quiet", help = "Log every visited run")]
    pub verbose: bool,
    #[arg(short, long, default_value_t = false, help = "Only report errors")]
    pub quiet: bool,
}
