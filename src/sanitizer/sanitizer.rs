//! 清洗器核心：按序应用规则、规范化空行，并由内容损失保护决定是否回退
use std::sync::Arc;
use tracing::debug;

use super::guard::{real_chars, ContentGuard};
use super::lines::collapse_blank_lines;
use crate::compiler::{CompiledRuleSet, RuleCompiler};
use crate::config::GlobalConfig;
use crate::error::FcResult;
use crate::rule::{RuleLoader, RuleSet};
use crate::utils::preview_compact;

/// 单次清洗结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanOutcome {
    /// 采用清洗结果
    Cleaned {
        text: String,
        original_chars: usize,
        cleaned_chars: usize,
    },
    /// 损失超过阈值，原样返回原文
    Reverted {
        original: String,
        original_chars: usize,
        cleaned_chars: usize,
    },
}

impl CleanOutcome {
    /// 最终文本
    pub fn text(&self) -> &str {
        match self {
            CleanOutcome::Cleaned { text, .. } => text,
            CleanOutcome::Reverted { original, .. } => original,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            CleanOutcome::Cleaned { text, .. } => text,
            CleanOutcome::Reverted { original, .. } => original,
        }
    }

    pub fn is_reverted(&self) -> bool {
        matches!(self, CleanOutcome::Reverted { .. })
    }

    /// (原文有效字符数, 清洗后有效字符数)
    pub fn char_counts(&self) -> (usize, usize) {
        match self {
            CleanOutcome::Cleaned { original_chars, cleaned_chars, .. }
            | CleanOutcome::Reverted { original_chars, cleaned_chars, .. } => (*original_chars, *cleaned_chars),
        }
    }
}

/// 文章清洗器
#[derive(Debug, Clone)]
pub struct Sanitizer {
    rules: Arc<CompiledRuleSet>,
}

impl Sanitizer {
    /// 由已编译规则创建
    pub fn new(rules: CompiledRuleSet) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    /// 仅使用内置规则
    pub fn builtin(region_marker: &str) -> FcResult<Self> {
        let compiled = RuleCompiler::compile(&RuleSet::builtin(region_marker))?;
        Ok(Self::new(compiled))
    }

    /// 按配置加载（内置规则 + 额外规则文件）
    pub async fn from_config(config: &GlobalConfig) -> FcResult<Self> {
        let rule_set = RuleLoader::load(config).await?;
        let compiled = RuleCompiler::compile(&rule_set)?;
        Ok(Self::new(compiled))
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// 清洗并返回结构化结果
    pub fn sanitize(&self, text: &str) -> CleanOutcome {
        let stripped = self.rules.apply(text);
        let cleaned = collapse_blank_lines(&stripped);

        let original_chars = real_chars(text);
        let cleaned_chars = real_chars(&cleaned);

        if ContentGuard::accepts(original_chars, cleaned_chars) {
            CleanOutcome::Cleaned {
                text: cleaned,
                original_chars,
                cleaned_chars,
            }
        } else {
            debug!(
                "清洗后有效字符 {} 不足原文 {} 的一半，回退原文：{}",
                cleaned_chars,
                original_chars,
                preview_compact(text, 40)
            );
            CleanOutcome::Reverted {
                original: text.to_string(),
                original_chars,
                cleaned_chars,
            }
        }
    }

    /// 清洗并只返回文本
    pub fn clean(&self, text: &str) -> String {
        self.sanitize(text).into_text()
    }
}
