//! 批量清洗：逐个读取语料文件，清洗后原地回写
use std::path::Path;
use tracing::{error, info, warn};

use super::report::{BatchReport, FileOutcome};
use crate::config::GlobalConfig;
use crate::error::{FcResult, FincorpusError};
use crate::sanitizer::{CleanOutcome, Sanitizer};
use crate::utils::scan_data_dir;

/// 批量清洗器
#[derive(Debug, Clone)]
pub struct BatchCleaner {
    sanitizer: Sanitizer,
    config: GlobalConfig,
}

impl BatchCleaner {
    pub fn new(sanitizer: Sanitizer, config: GlobalConfig) -> Self {
        Self { sanitizer, config }
    }

    /// 按配置加载规则并创建
    pub async fn from_config(config: GlobalConfig) -> FcResult<Self> {
        let sanitizer = Sanitizer::from_config(&config).await?;
        Ok(Self::new(sanitizer, config))
    }

    /// 清洗语料目录下的全部目标文件（按文件名顺序，串行）
    pub async fn run(&self) -> FcResult<BatchReport> {
        let scan = scan_data_dir(&self.config).await?;
        let mut report = BatchReport {
            dry_run: self.config.dry_run,
            ..Default::default()
        };

        for file_name in scan.skipped {
            let outcome = FileOutcome::Skipped { file_name };
            info!("{}", outcome);
            report.push(outcome);
        }

        for (file_name, path) in scan.targets {
            match self.clean_file(&path, &file_name).await {
                Ok(outcome) => {
                    match &outcome {
                        FileOutcome::Reverted { .. } => warn!("{}", outcome),
                        _ => info!("{}", outcome),
                    }
                    report.push(outcome);
                }
                Err(e) => {
                    error!("清洗文件失败 {}：{}", file_name, e);
                    if self.config.fail_fast {
                        return Err(FincorpusError::BatchAborted {
                            file: file_name,
                            reason: e.to_string(),
                        });
                    }
                    report.push(FileOutcome::Failed {
                        file_name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!("{}", report);
        Ok(report)
    }

    /// 清洗单个文件；保护触发或内容未变时不回写
    pub async fn clean_file(&self, path: &Path, file_name: &str) -> FcResult<FileOutcome> {
        let raw = tokio::fs::read_to_string(path).await?;

        let outcome = match self.sanitizer.sanitize(&raw) {
            CleanOutcome::Reverted { original_chars, cleaned_chars, .. } => FileOutcome::Reverted {
                file_name: file_name.to_string(),
                original_chars,
                cleaned_chars,
            },
            CleanOutcome::Cleaned { text, .. } if text == raw => FileOutcome::Unchanged {
                file_name: file_name.to_string(),
            },
            CleanOutcome::Cleaned { text, original_chars, cleaned_chars } => {
                if !self.config.dry_run {
                    tokio::fs::write(path, text.as_bytes()).await?;
                }
                FileOutcome::Cleaned {
                    file_name: file_name.to_string(),
                    original_chars,
                    cleaned_chars,
                }
            }
        };

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use std::path::PathBuf;

    const DIRTY: &str = "原创 作者名\n\n正文内容这里是真实的文章内容，包含很多字📈\n---\n";
    const CLEANED: &str = "正文内容这里是真实的文章内容，包含很多字";

    async fn seed(dir: &Path) {
        tokio::fs::write(dir.join("ReadMe.md"), "原创 说明\n\n").await.unwrap();
        tokio::fs::write(dir.join("2025-1-2.md"), DIRTY).await.unwrap();
        tokio::fs::write(dir.join("2025-1-3.md"), CLEANED).await.unwrap();
        tokio::fs::write(dir.join("2025-1-4.md"), "四川\n\n\n\n").await.unwrap();
        tokio::fs::write(dir.join("notes.txt"), DIRTY).await.unwrap();
    }

    fn config_for(dir: PathBuf) -> GlobalConfig {
        ConfigManager::custom().data_dir(dir).build()
    }

    async fn read(dir: &Path, name: &str) -> String {
        tokio::fs::read_to_string(dir.join(name)).await.unwrap()
    }

    #[tokio::test]
    async fn test_batch_cleans_in_place() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path()).await;

        let cleaner = BatchCleaner::from_config(config_for(dir.path().to_path_buf())).await.unwrap();
        let report = cleaner.run().await.unwrap();

        assert_eq!(report.skipped(), 1);
        assert_eq!(report.cleaned(), 1);
        assert_eq!(report.unchanged(), 1);
        assert_eq!(report.reverted(), 1);
        assert_eq!(report.failed(), 0);

        assert_eq!(read(dir.path(), "2025-1-2.md").await, CLEANED);
        assert_eq!(read(dir.path(), "2025-1-3.md").await, CLEANED);
        // 回退与跳过的文件保持原样
        assert_eq!(read(dir.path(), "2025-1-4.md").await, "四川\n\n\n\n");
        assert_eq!(read(dir.path(), "ReadMe.md").await, "原创 说明\n\n");
        assert_eq!(read(dir.path(), "notes.txt").await, DIRTY);
    }

    #[tokio::test]
    async fn test_second_run_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path()).await;
        let cleaner = BatchCleaner::from_config(config_for(dir.path().to_path_buf())).await.unwrap();

        cleaner.run().await.unwrap();
        let report = cleaner.run().await.unwrap();

        assert_eq!(report.cleaned(), 0);
        assert_eq!(report.unchanged(), 2);
        assert_eq!(report.reverted(), 1);
    }

    #[tokio::test]
    async fn test_dry_run_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path()).await;
        let config = ConfigManager::custom()
            .data_dir(dir.path().to_path_buf())
            .dry_run(true)
            .build();

        let report = BatchCleaner::from_config(config).await.unwrap().run().await.unwrap();

        assert_eq!(report.cleaned(), 1);
        assert!(report.to_string().starts_with("[演练]"));
        assert_eq!(read(dir.path(), "2025-1-2.md").await, DIRTY);
    }

    #[tokio::test]
    async fn test_unreadable_file_is_recorded_and_batch_continues() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path()).await;
        tokio::fs::write(dir.path().join("2025-1-1.md"), [0xffu8, 0xfe, 0x00]).await.unwrap();

        let cleaner = BatchCleaner::from_config(config_for(dir.path().to_path_buf())).await.unwrap();
        let report = cleaner.run().await.unwrap();

        assert_eq!(report.failed(), 1);
        assert_eq!(report.cleaned(), 1);
        let failed = report
            .outcomes
            .iter()
            .find(|o| matches!(o, FileOutcome::Failed { .. }))
            .unwrap();
        assert_eq!(failed.file_name(), "2025-1-1.md");
    }

    #[tokio::test]
    async fn test_fail_fast_aborts_batch() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path()).await;
        tokio::fs::write(dir.path().join("2025-1-1.md"), [0xffu8, 0xfe, 0x00]).await.unwrap();
        let config = ConfigManager::custom()
            .data_dir(dir.path().to_path_buf())
            .fail_fast(true)
            .build();

        let err = BatchCleaner::from_config(config).await.unwrap().run().await.unwrap_err();

        match err {
            FincorpusError::BatchAborted { file, .. } => assert_eq!(file, "2025-1-1.md"),
            other => panic!("unexpected error: {:?}", other),
        }
        // 中止发生在第一个文件，后续文件未被处理
        assert_eq!(read(dir.path(), "2025-1-2.md").await, DIRTY);
    }
}
