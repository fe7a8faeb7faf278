use std::collections::BTreeMap;
use std::path::PathBuf;

/// 复合键 -> 提取出的数值
pub type ResultMap = BTreeMap<String, f64>;

/// 一次键冲突：后写入的值覆盖了先写入的值
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    pub key: String,
    pub previous_value: f64,
    pub previous_path: PathBuf,
    pub value: f64,
    pub path: PathBuf,
}

/// 在 skip 策略下被跳过的 run
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRun {
    pub path: PathBuf,
    pub reason: String,
}

/// 一次扫描的完整结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrapeReport {
    pub results: ResultMap,
    pub runs_visited: usize,
    pub missing_estimates: usize,
    pub collisions: Vec<Collision>,
    pub failures: Vec<SkippedRun>,
}

impl ScrapeReport {
    /// 扫描是否完全干净（没有冲突也没有被跳过的失败）
    pub fn is_clean(&self) -> bool {
        self.collisions.is_empty() && self.failures.is_empty()
    }
}
