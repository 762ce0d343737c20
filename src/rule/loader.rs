//! 规则加载管理器
//! 负责组合内置规则与本地额外规则文件

use std::path::Path;
use tracing::{debug, warn};

use super::model::{RawRule, RuleSet};
use crate::config::GlobalConfig;
use crate::error::{FcResult, FincorpusError};

/// 规则加载管理器
pub struct RuleLoader;

impl RuleLoader {
    /// 加载规则集（内置规则 + 可选的额外规则文件）
    pub async fn load(config: &GlobalConfig) -> FcResult<RuleSet> {
        let mut rule_set = RuleSet::builtin(&config.region_marker);
        debug!("内置清洗规则加载完成，规则数：{}", rule_set.len());

        if let Some(path) = &config.extra_rules_path {
            let extra = Self::load_extra(path).await?;
            if extra.is_empty() {
                warn!("额外规则文件为空：{}", path.display());
            }
            debug!("额外清洗规则加载完成，规则数：{}，来源：{}", extra.len(), path.display());
            rule_set.extend(extra);
        }

        Ok(rule_set)
    }

    /// 从JSON文件读取额外规则（数组）
    pub async fn load_extra(path: &Path) -> FcResult<Vec<RawRule>> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            FincorpusError::RuleLoadError(format!("读取规则文件 {} 失败：{}", path.display(), e))
        })?;
        let rules: Vec<RawRule> = serde_json::from_str(&content)?;
        Ok(rules)
    }
}
