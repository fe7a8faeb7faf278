use std::path::Path;
use anyhow::{Context, Result};
use crate::models::StatisticSelector;

/// 读取单个 estimates.json 并提取 `<statistic>.<field>` 的数值
// ————————————————————————————————————————————————————————————————————————
// 核心解析函数
// ————————————————————————————————————————————————————————————————————————
pub fn read_point_estimate(file_path: &Path, selector: &StatisticSelector) -> Result<f64> {
    let contents = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read estimates file: {}", file_path.display()))?;

    parse_point_estimate(&contents, selector)
        .with_context(|| format!("Invalid estimates file: {}", file_path.display()))
}

/// 从 JSON 文本中提取数值，其余字段一律忽略
pub fn parse_point_estimate(contents: &str, selector: &StatisticSelector) -> Result<f64> {
    let json_value: serde_json::Value = serde_json::from_str(contents)
        .context("Failed to parse JSON")?;

    extract_statistic(&json_value, selector)
}

// ————————————————————————————————————————————————————————————————————————
// 按 statistic -> field 两级查找
// ————————————————————————————————————————————————————————————————————————
fn extract_statistic(value: &serde_json::Value, selector: &StatisticSelector) -> Result<f64> {
    let statistic = value.get(&selector.statistic)
        .ok_or_else(|| anyhow::anyhow!("Missing '{}' object", selector.statistic))?;

    let field = statistic.get(&selector.field)
        .ok_or_else(|| anyhow::anyhow!("Missing '{}' field", selector))?;

    field.as_f64()
        .ok_or_else(|| anyhow::anyhow!("'{}' is not a number: {}", selector, field))
}
