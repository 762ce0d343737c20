//! 语料目录扫描

use std::path::PathBuf;
use tracing::warn;

use crate::config::GlobalConfig;
use crate::error::FcResult;

/// 目录扫描结果（均按文件名排序）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirScan {
    /// 待处理文件 (文件名, 路径)
    pub targets: Vec<(String, PathBuf)>,
    /// 被跳过的索引文件名
    pub skipped: Vec<String>,
}

/// 扫描语料目录：跳过索引文件，只保留目标扩展名的普通文件
pub async fn scan_data_dir(config: &GlobalConfig) -> FcResult<DirScan> {
    let mut entries = tokio::fs::read_dir(&config.data_dir).await?;
    let mut scan = DirScan::default();

    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
            warn!("忽略非UTF-8文件名：{:?}", entry.file_name());
            continue;
        };

        if config.is_skipped(&file_name) {
            scan.skipped.push(file_name);
        } else if config.has_target_extension(&file_name) {
            scan.targets.push((file_name, entry.path()));
        }
    }

    scan.targets.sort_by(|a, b| a.0.cmp(&b.0));
    scan.skipped.sort();
    Ok(scan)
}
