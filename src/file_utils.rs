use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use anyhow::{Context, Result};
use crate::models::{RunLocation, ESTIMATES_FILE};

/// 位于 subgroup 层级、但不是 subgroup 的报告目录名
pub const REPORT_DIR: &str = "report";

/// 检查扫描根目录是否存在且为目录
pub fn ensure_scan_root(root: &Path) -> Result<()> {
    if !root.exists() {
        anyhow::bail!("Scan directory '{}' does not exist", root.display());
    }

    if !root.is_dir() {
        anyhow::bail!("'{}' is not a directory", root.display());
    }

    Ok(())
}

/// 名称是否完全由十进制数字组成（空字符串不算）
pub fn is_numeric_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}

/// subgroup：非纯数字，且不是 "report"
pub fn is_subgroup_name(name: &str) -> bool {
    !is_numeric_name(name) && name != REPORT_DIR
}

/// run：纯数字目录名
pub fn is_run_name(name: &str) -> bool {
    is_numeric_name(name)
}

/// 列出目录下的直接子目录（跟随符号链接，按文件名排序）
///
/// 文件会被忽略；读取目录出错（权限、失效的符号链接等）直接返回错误。
pub fn list_subdirs(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let walker = WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut subdirs = Vec::new();
    for entry in walker {
        let entry = entry
            .with_context(|| format!("Failed to read directory entry in {}", dir.display()))?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        subdirs.push((name, entry.into_path()));
    }

    Ok(subdirs)
}

/// 拼出 run 目录下某个 baseline 的 estimates.json 路径
pub fn estimates_path(run_dir: &Path, baseline: &str) -> PathBuf {
    run_dir.join(baseline).join(ESTIMATES_FILE)
}

/// 遍历 root/<group>/<subgroup>/<run>，收集所有 run 的位置
///
/// 只负责目录结构的筛选，不检查 estimates.json 是否存在。
pub fn find_run_locations(root: &Path, baseline: &str) -> Result<Vec<RunLocation>> {
    let mut locations = Vec::new();

    for (group, group_dir) in list_subdirs(root)? {
        for (subgroup, subgroup_dir) in list_subdirs(&group_dir)? {
            if !is_subgroup_name(&subgroup) {
                continue;
            }
            for (run, run_dir) in list_subdirs(&subgroup_dir)? {
                if !is_run_name(&run) {
                    continue;
                }
                locations.push(RunLocation {
                    group: group.clone(),
                    subgroup: subgroup.clone(),
                    estimates_path: estimates_path(&run_dir, baseline),
                    run,
                });
            }
        }
    }

    Ok(locations)
}
