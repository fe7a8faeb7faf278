use crate::models::config::EstimatesConfig;
use std::fmt;
use std::path::PathBuf;

/// Criterion 在每个 baseline 目录下写出的统计文件名
pub const ESTIMATES_FILE: &str = "estimates.json";

/// 一个 run 目录在树中的位置：group / subgroup / run
#[derive(Debug, Clone, PartialEq)]
pub struct RunLocation {
    pub group: String,
    pub subgroup: String,
    pub run: String,
    pub estimates_path: PathBuf, // <group>/<subgroup>/<run>/<baseline>/estimates.json
}

impl RunLocation {
    /// 复合键：三个目录名直接拼接，不加分隔符
    ///
    /// ("ab", "c", "1") 与 ("a", "bc", "1") 会得到相同的键 "abc1"。
    pub fn key(&self) -> String {
        format!("{}{}{}", self.group, self.subgroup, self.run)
    }
}

/// 要从 estimates.json 中读取的值：`<statistic>.<field>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticSelector {
    pub statistic: String,
    pub field: String,
}

impl From<&EstimatesConfig> for StatisticSelector {
    fn from(config: &EstimatesConfig) -> Self {
        Self {
            statistic: config.statistic.clone(),
            field: config.field.clone(),
        }
    }
}

impl Default for StatisticSelector {
    fn default() -> Self {
        Self::from(&EstimatesConfig::default())
    }
}

impl fmt::Display for StatisticSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.statistic, self.field)
    }
}
