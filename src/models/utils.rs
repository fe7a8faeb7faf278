use serde::{Deserialize, Deserializer};

/// 校验单个名称（统计量、字段或 baseline 目录名）
///
/// # 参数
/// - `s`: 待校验的名称
///
/// # 返回值
/// 合法时返回名称本身；空字符串、`.`/`..` 或包含路径分隔符时返回错误信息
pub fn parse_name(s: &str) -> std::result::Result<String, String> {
    if s.is_empty() {
        return Err("name must not be empty".to_string());
    }
    if s == "." || s == ".." {
        return Err(format!("'{}' is not a valid name", s));
    }
    if s.contains(['/', '\\']) {
        return Err(format!("'{}' must not contain path separators", s));
    }
    Ok(s.to_string())
}

/// 反序列化名称字段，复用 `parse_name` 的校验规则
pub fn deserialize_name<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_name(&s).map_err(serde::de::Error::custom)
}
