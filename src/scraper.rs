// src/scraper.rs
use std::collections::HashMap;
use std::path::PathBuf;
use anyhow::Result;
use tracing::{debug, info, warn};
use crate::models::{Collision, CollisionPolicy, Config, ErrorPolicy, ScrapeReport, SkippedRun, StatisticSelector};
use crate::file_utils::{ensure_scan_root, find_run_locations};
use crate::json_parser::read_point_estimate;

/// 扫描 `config.general.root`，把每个 run 的统计值收集进结果映射
///
/// 缺少 estimates.json 的 run 直接跳过；解析失败与键冲突按 `config.policy` 处理。
/// 任何致命错误都会在写出结果之前返回，因此不会产生部分输出。
pub fn scrape(config: &Config) -> Result<ScrapeReport> {
    let root = &config.general.root;
    ensure_scan_root(root)?;

    let selector = StatisticSelector::from(&config.estimates);
    let locations = find_run_locations(root, &config.estimates.baseline)?;
    debug!(root = %root.display(), runs = locations.len(), "found run directories");

    let mut report = ScrapeReport::default();
    // 记录每个键来自哪个文件，用于冲突信息
    let mut origins: HashMap<String, PathBuf> = HashMap::new();

    for location in locations {
        report.runs_visited += 1;
        let path = &location.estimates_path;

        if !path.is_file() {
            debug!(path = %path.display(), "no estimates file, skipping run");
            report.missing_estimates += 1;
            continue;
        }

        let value = match read_point_estimate(path, &selector) {
            Ok(value) => value,
            Err(err) => match config.policy.on_error {
                ErrorPolicy::Abort => return Err(err),
                ErrorPolicy::Skip => {
                    let reason = format!("{:#}", err);
                    warn!(path = %path.display(), error = %reason, "skipping unreadable estimates file");
                    report.failures.push(SkippedRun {
                        path: path.clone(),
                        reason,
                    });
                    continue;
                }
            },
        };

        let key = location.key();
        let previous_path = origins.insert(key.clone(), path.clone());
        let previous_value = report.results.insert(key.clone(), value);

        if let (Some(previous_value), Some(previous_path)) = (previous_value, previous_path) {
            match config.policy.on_collision {
                CollisionPolicy::Reject => anyhow::bail!(
                    "Key '{}' is produced by both {} and {}",
                    key,
                    previous_path.display(),
                    path.display()
                ),
                CollisionPolicy::Overwrite => {
                    warn!(
                        key = %key,
                        previous = %previous_path.display(),
                        current = %path.display(),
                        "key collision, keeping the later value"
                    );
                    report.collisions.push(Collision {
                        key,
                        previous_value,
                        previous_path,
                        value,
                        path: path.clone(),
                    });
                    continue;
                }
            }
        }

        debug!(key = %key, value, "recorded {}", selector);
    }

    info!(
        entries = report.results.len(),
        runs = report.runs_visited,
        missing = report.missing_estimates,
        collisions = report.collisions.len(),
        failures = report.failures.len(),
        "scrape finished"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_estimates(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn mean(value: f64) -> String {
        format!(r#"{{"mean": {{"point_estimate": {:?}, "standard_error": 0.1}}, "median": {{"point_estimate": {:?}}}}}"#, value, value / 2.0)
    }

    fn config_for(root: &Path) -> Config {
        let mut config = Config::default();
        config.general.root = root.to_path_buf();
        config
    }

    #[test]
    fn test_empty_tree() {
        let temp_dir = tempdir().unwrap();
        let report = scrape(&config_for(temp_dir.path())).unwrap();
        assert!(report.results.is_empty());
        assert_eq!(report.runs_visited, 0);
        assert!(report.is_clean());
    }

    #[test]
    fn test_single_estimate() {
        let temp_dir = tempdir().unwrap();
        write_estimates(temp_dir.path(), "G/S/3/base/estimates.json", r#"{"mean": {"point_estimate": 4.5}}"#);

        let report = scrape(&config_for(temp_dir.path())).unwrap();
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results.get("GS3"), Some(&4.5));
    }

    #[test]
    fn test_filtered_directories_never_scraped() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        write_estimates(root, "G/S/1/base/estimates.json", &mean(1.0));
        write_estimates(root, "G/7/3/base/estimates.json", &mean(2.0));
        write_estimates(root, "G/report/3/base/estimates.json", &mean(3.0));
        write_estimates(root, "G/S/abc/base/estimates.json", &mean(4.0));
        // 结构不符（层级过浅/过深）也不会被扫描
        write_estimates(root, "G/S/base/estimates.json", &mean(5.0));
        write_estimates(root, "G/S/1/2/base/estimates.json", &mean(6.0));

        let report = scrape(&config_for(root)).unwrap();
        let keys: Vec<&str> = report.results.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["GS1"]);
        assert_eq!(report.results["GS1"], 1.0);
    }

    #[test]
    fn test_missing_estimates_file_skipped() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        write_estimates(root, "G/S/1/base/estimates.json", &mean(1.0));
        fs::create_dir_all(root.join("G/S/2/new")).unwrap();
        write_estimates(root, "G/S/3/new/estimates.json", &mean(3.0));
        // base/estimates.json 是目录而不是文件
        fs::create_dir_all(root.join("G/S/4/base/estimates.json")).unwrap();

        let report = scrape(&config_for(root)).unwrap();
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.runs_visited, 4);
        assert_eq!(report.missing_estimates, 3);
        assert!(report.is_clean());
    }

    #[test]
    fn test_key_collision_last_write_wins() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        write_estimates(root, "A/BC/1/base/estimates.json", &mean(1.0));
        write_estimates(root, "AB/C/1/base/estimates.json", &mean(2.0));

        let report = scrape(&config_for(root)).unwrap();
        assert_eq!(report.results.len(), 1);
        // 按文件名排序遍历："A" 先于 "AB"
        assert_eq!(report.results["ABC1"], 2.0);

        assert_eq!(report.collisions.len(), 1);
        let collision = &report.collisions[0];
        assert_eq!(collision.key, "ABC1");
        assert_eq!(collision.previous_value, 1.0);
        assert_eq!(collision.value, 2.0);
        assert_eq!(collision.previous_path, root.join("A/BC/1/base/estimates.json"));
        assert_eq!(collision.path, root.join("AB/C/1/base/estimates.json"));
    }

    #[test]
    fn test_key_collision_rejected() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        write_estimates(root, "A/BC/1/base/estimates.json", &mean(1.0));
        write_estimates(root, "AB/C/1/base/estimates.json", &mean(2.0));

        let mut config = config_for(root);
        config.policy.on_collision = CollisionPolicy::Reject;

        let err = scrape(&config).unwrap_err();
        assert!(err.to_string().contains("Key 'ABC1'"));
    }

    #[test]
    fn test_malformed_file_aborts() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        write_estimates(root, "G/S/1/base/estimates.json", &mean(1.0));
        write_estimates(root, "G/S/2/base/estimates.json", "{ not json");

        let result = scrape(&config_for(root));
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_error_aborts() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        write_estimates(root, "G/S/1/base/estimates.json", r#"{"median": {"point_estimate": 1.0}}"#);

        let err = scrape(&config_for(root)).unwrap_err();
        assert!(format!("{:#}", err).contains("Missing 'mean' object"));
    }

    #[test]
    fn test_skip_policy_isolates_failures() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        write_estimates(root, "G/S/1/base/estimates.json", &mean(1.0));
        write_estimates(root, "G/S/2/base/estimates.json", "{ not json");
        write_estimates(root, "G/S/3/base/estimates.json", r#"{"mean": {}}"#);
        write_estimates(root, "G/S/4/base/estimates.json", &mean(4.0));

        let mut config = config_for(root);
        config.policy.on_error = ErrorPolicy::Skip;

        let report = scrape(&config).unwrap();
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results["GS1"], 1.0);
        assert_eq!(report.results["GS4"], 4.0);

        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[0].path, root.join("G/S/2/base/estimates.json"));
        assert!(report.failures[1].reason.contains("point_estimate"));
        assert!(!report.is_clean());
    }

    #[test]
    fn test_selected_statistic_and_baseline() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        write_estimates(root, "G/S/1/base/estimates.json", &mean(1.0));
        write_estimates(root, "G/S/1/new/estimates.json", &mean(8.0));

        let mut config = config_for(root);
        config.estimates.statistic = "median".to_string();
        let report = scrape(&config).unwrap();
        assert_eq!(report.results["GS1"], 0.5);

        config.estimates.baseline = "new".to_string();
        let report = scrape(&config).unwrap();
        assert_eq!(report.results["GS1"], 4.0);
    }

    #[test]
    fn test_missing_root() {
        let temp_dir = tempdir().unwrap();
        let result = scrape(&config_for(&temp_dir.path().join("missing")));
        assert!(result.is_err());
    }
}
