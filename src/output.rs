use crate::models::ResultMap;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// 将结果映射序列化为 JSON 并写入文件，已有内容直接覆盖
pub fn write_results(output_path: &Path, results: &ResultMap, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(results)
    } else {
        serde_json::to_string(results)
    }
    .context("Failed to serialize results")?;

    fs::write(output_path, json)
        .with_context(|| format!("Failed to write results file: {}", output_path.display()))?;

    Ok(())
}
