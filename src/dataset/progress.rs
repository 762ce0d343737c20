//! 训练数据生成进度统计

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use serde_json::Value;

use crate::error::{FcResult, FincorpusError};

/// 样本进度统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressReport {
    pub total: usize,
    /// 日期 -> 样本数（缺少日期记为 unknown）
    pub per_date: BTreeMap<String, usize>,
}

impl ProgressReport {
    /// 统计样本数组；只读取 `date` 字段，其余字段不做校验
    pub fn from_samples(samples: &[Value]) -> Self {
        let mut per_date = BTreeMap::new();
        for sample in samples {
            let date = sample
                .get("date")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string();
            *per_date.entry(date).or_insert(0) += 1;
        }
        Self {
            total: samples.len(),
            per_date,
        }
    }

    /// 读取训练数据文件；文件尚未生成时返回 None
    pub async fn load(path: &Path) -> FcResult<Option<Self>> {
        if !tokio::fs::try_exists(path).await? {
            return Ok(None);
        }
        let content = tokio::fs::read_to_string(path).await?;
        let value: Value = serde_json::from_str(&content)?;
        let samples = value.as_array().ok_or_else(|| {
            FincorpusError::InvalidInput(format!("训练数据文件不是JSON数组：{}", path.display()))
        })?;
        Ok(Some(Self::from_samples(samples)))
    }
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✅ 已生成样本数: {}", self.total)?;
        writeln!(f)?;
        writeln!(f, "📊 各日期样本数:")?;
        for (date, count) in &self.per_date {
            writeln!(f, "  {}: {}个", date, count)?;
        }
        writeln!(f)?;
        write!(f, "📈 总计: {}个样本", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_samples_groups_by_date() {
        let samples = vec![
            json!({"date": "2025-03-06", "instruction": "a"}),
            json!({"date": "2025-03-05"}),
            json!({"date": "2025-03-06"}),
            json!({"instruction": "no date"}),
        ];
        let report = ProgressReport::from_samples(&samples);

        assert_eq!(report.total, 4);
        let dates: Vec<(&str, usize)> = report.per_date.iter().map(|(d, c)| (d.as_str(), *c)).collect();
        assert_eq!(dates, vec![("2025-03-05", 1), ("2025-03-06", 2), ("unknown", 1)]);
        assert!(report.to_string().contains("  2025-03-06: 2个"));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let report = ProgressReport::load(&dir.path().join("training_dataset.json")).await.unwrap();
        assert!(report.is_none());
    }

    #[tokio::test]
    async fn test_load_rejects_non_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("training_dataset.json");
        tokio::fs::write(&path, r#"{"date": "2025-03-05"}"#).await.unwrap();
        assert!(matches!(
            ProgressReport::load(&path).await,
            Err(FincorpusError::InvalidInput(_))
        ));
    }
}
