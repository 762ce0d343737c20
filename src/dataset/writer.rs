//! 训练数据保存：JSON 数组 + JSONL

use std::path::{Path, PathBuf};
use tracing::info;

use super::sample::TrainingSample;
use crate::error::FcResult;

/// 训练数据写入器
pub struct DatasetWriter;

impl DatasetWriter {
    /// 写入 `json_path`，并在同目录写入同名 `.jsonl`；返回 jsonl 路径
    pub async fn save(samples: &[TrainingSample], json_path: &Path) -> FcResult<PathBuf> {
        if let Some(parent) = json_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(samples)?;
        tokio::fs::write(json_path, json).await?;
        info!("训练数据已保存到: {}", json_path.display());

        let mut jsonl = String::new();
        for sample in samples {
            jsonl.push_str(&serde_json::to_string(sample)?);
            jsonl.push('\n');
        }
        let jsonl_path = json_path.with_extension("jsonl");
        tokio::fs::write(&jsonl_path, jsonl).await?;
        info!("JSONL格式已保存到: {}", jsonl_path.display());

        Ok(jsonl_path)
    }

    /// 读取 JSON 数组格式的训练数据
    pub async fn load(json_path: &Path) -> FcResult<Vec<TrainingSample>> {
        let content = tokio::fs::read_to_string(json_path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}
