//! 规则编译器核心
//! 仅负责将原始规则编译为可执行的匹配器

use std::collections::BTreeMap;
use std::time::Instant;
use regex::RegexBuilder;
use tracing::debug;

use super::pattern::{CompiledRule, CompiledRuleSet, Matcher};
use crate::rule::{RawPattern, RawRule, RuleSet, RuleStage, MAX_CODE_POINT};
use crate::error::{FcResult, FincorpusError};

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译规则集（保持原有顺序）
    pub fn compile(rule_set: &RuleSet) -> FcResult<CompiledRuleSet> {
        let start = Instant::now();
        let mut compile_stats = CompileStats::default();
        let mut rules = Vec::with_capacity(rule_set.len());

        for raw_rule in rule_set.iter() {
            let compiled = Self::compile_rule(raw_rule)?;
            compile_stats.record(compiled.stage);
            rules.push(compiled);
        }

        debug!("✅ 清洗规则编译完成，总耗时{:?}", start.elapsed());
        debug!("📊 编译统计：{}", compile_stats);

        Ok(CompiledRuleSet { rules })
    }

    /// 编译单条规则
    fn compile_rule(raw_rule: &RawRule) -> FcResult<CompiledRule> {
        let matcher = match &raw_rule.pattern {
            RawPattern::Regex { pattern, multi_line } => {
                let regex = RegexBuilder::new(pattern).multi_line(*multi_line).build()?;
                Matcher::Regex(regex)
            }
            RawPattern::CharRange { start, end } => {
                if start > end || *end > MAX_CODE_POINT {
                    return Err(FincorpusError::InvalidRule(format!(
                        "规则 {} 的码点区间无效：{:#X}..={:#X}",
                        raw_rule.name, start, end
                    )));
                }
                Matcher::CharRange(*start, *end)
            }
        };

        Ok(CompiledRule {
            name: raw_rule.name.clone(),
            stage: raw_rule.stage,
            matcher,
        })
    }
}

/// 编译统计信息
#[derive(Debug, Clone, Default)]
struct CompileStats {
    per_stage: BTreeMap<RuleStage, usize>,
}

impl CompileStats {
    fn record(&mut self, stage: RuleStage) {
        *self.per_stage.entry(stage).or_insert(0) += 1;
    }
}

impl std::fmt::Display for CompileStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = RuleStage::ALL
            .iter()
            .map(|stage| format!("{}模式{}条", stage, self.per_stage.get(stage).copied().unwrap_or(0)))
            .collect();
        f.write_str(&parts.join("、"))
    }
}
