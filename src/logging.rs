use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// 日志过滤环境变量，语法同 `EnvFilter`
pub const LOG_ENV: &str = "CRITERION_SCRAPER_LOG";

/// 未设置环境变量时的默认日志级别
fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// 初始化 tracing，日志统一输出到 stderr，stdout 只留给结果摘要
pub fn init_logging(verbose: bool, quiet: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to initialise logging: {}", err))
}
