use clap::ValueEnum;
use serde::Deserialize;
use std::path::PathBuf;

/// 应用程序配置结构
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub general: GeneralConfig,
    pub estimates: EstimatesConfig,
    pub policy: PolicyConfig,
}

impl Config {
    /// 输出文件的最终路径：相对路径基于扫描根目录
    pub fn output_path(&self) -> PathBuf {
        self.general.root.join(&self.general.output_file)
    }
}

/// 通用配置
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    pub root: PathBuf,
    pub output_file: PathBuf,
    pub pretty: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_file: PathBuf::from("results.json"),
            pretty: false,
        }
    }
}

/// estimates.json 的定位与字段选择
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EstimatesConfig {
    #[serde(deserialize_with = "crate::models::utils::deserialize_name")]
    pub baseline: String,
    #[serde(deserialize_with = "crate::models::utils::deserialize_name")]
    pub statistic: String,
    #[serde(deserialize_with = "crate::models::utils::deserialize_name")]
    pub field: String,
}

impl Default for EstimatesConfig {
    fn default() -> Self {
        Self {
            baseline: "base".to_string(),
            statistic: "mean".to_string(),
            field: "point_estimate".to_string(),
        }
    }
}

/// 错误与键冲突的处理策略
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    pub on_error: ErrorPolicy,
    pub on_collision: CollisionPolicy,
}

/// 单个 estimates 文件读取/解析失败时的行为
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// 立即终止，不写任何输出
    #[default]
    Abort,
    /// 记录警告并跳过该 run，继续扫描
    Skip,
}

/// 两条路径拼出相同复合键时的行为
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// 后写入者覆盖先写入者
    #[default]
    Overwrite,
    /// 遇到冲突即报错终止
    Reject,
}
