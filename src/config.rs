use crate::cli::Cli;
use crate::models::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// 未通过 --config 指定时，在当前目录查找的配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "criterion_scraper.toml";

/// 加载配置文件
///
/// 显式指定的路径必须存在；默认路径不存在时使用内置默认值（不会自动创建文件）。
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_path = match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file '{}' does not exist", path.display());
            }
            path
        }
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                return Ok(Config::default());
            }
            path
        }
    };

    // 读取配置文件内容
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    // 解析TOML配置
    let config: Config = toml::from_str(&config_content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    Ok(config)
}

/// 用命令行参数覆盖配置文件中的值
pub fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Result<Config> {
    if let Some(root) = &cli.root {
        config.general.root = root.clone();
    }
    // 命令行给出的输出路径相对于当前目录，而不是扫描根目录
    if let Some(output) = &cli.output {
        config.general.output_file = if output.is_absolute() {
            output.clone()
        } else {
            std::env::current_dir()
                .context("Failed to resolve current directory")?
                .join(output)
        };
    }
    if cli.pretty {
        config.general.pretty = true;
    }

    if let Some(baseline) = &cli.baseline {
        config.estimates.baseline = baseline.clone();
    }
    if let Some(statistic) = &cli.statistic {
        config.estimates.statistic = statistic.clone();
    }
    if let Some(field) = &cli.field {
        config.estimates.field = field.clone();
    }

    if let Some(on_error) = cli.on_error {
        config.policy.on_error = on_error;
    }
    if let Some(on_collision) = cli.on_collision {
        config.policy.on_collision = on_collision;
    }

    Ok(config)
}
