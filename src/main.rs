// src/main.rs
mod cli;
mod config;
mod file_utils;
mod json_parser;
mod logging;
mod models;
mod output;
mod scraper;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::{apply_cli_overrides, load_config};
use logging::init_logging;
use output::write_results;
use scraper::scrape;
use tracing::{debug, warn};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet)?;

    // 加载配置文件，再用命令行参数覆盖
    let config = load_config(cli.config.as_deref())?;
    let config = apply_cli_overrides(config, &cli)?;
    debug!(?config, "configuration resolved");

    // 扫描目录树；出错时直接返回，不写任何输出
    let report = scrape(&config)?;
    if !report.is_clean() {
        warn!(
            collisions = report.collisions.len(),
            skipped = report.failures.len(),
            "results are incomplete"
        );
    }

    // 全部扫描完成后一次性写出
    let output_path = config.output_path();
    write_results(&output_path, &report.results, config.general.pretty)?;

    if !cli.quiet {
        println!("Wrote {} entries to {}", report.results.len(), output_path.display());
    }

    Ok(())
}
