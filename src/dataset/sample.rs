//! 指令微调样本（不依赖远程接口，直接由语料章节生成）
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::corpus::{ParsedDocument, SectionKind};
use crate::utils::truncate_chars;

/// 样本输出截取的最大字符数
pub const MAX_OUTPUT_CHARS: usize = 500;

/// 单条训练样本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub instruction: String,
    pub input: String,
    pub output: String,
    pub section_type: String,
    pub date: String,
}

/// 样本构建器
pub struct SampleBuilder;

impl SampleBuilder {
    /// 各章节对应的指令模板
    pub fn instruction_for(kind: SectionKind, date: &str) -> String {
        match kind {
            SectionKind::Morning => format!("请分析{}今天的市场走势，应该关注哪些方向？", date),
            SectionKind::MainOne => format!("请复盘{}今天的市场表现", date),
            SectionKind::MainTwo => format!("{}收盘后，明天应该如何布局？", date),
        }
    }

    /// 每篇语料的每个非空章节生成一条样本
    pub fn build(docs: &[ParsedDocument]) -> Vec<TrainingSample> {
        let samples: Vec<TrainingSample> = docs
            .iter()
            .flat_map(|doc| {
                doc.sections.non_empty().map(move |(kind, content)| TrainingSample {
                    instruction: Self::instruction_for(kind, &doc.date),
                    input: format!("日期：{}", doc.date),
                    output: truncate_chars(content, MAX_OUTPUT_CHARS).to_string(),
                    section_type: kind.label().to_string(),
                    date: doc.date.clone(),
                })
            })
            .collect();

        info!("✅ 生成了 {} 个简化训练样本", samples.len());
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_one_sample_per_section() {
        let long_tail = "涨".repeat(600);
        let content = format!("# 早自习\n盘前{}\n# 明日（主2）\n关注券商。", long_tail);
        let doc = ParsedDocument::from_content("2025-3-5.md", &content).unwrap();

        let samples = SampleBuilder::build(&[doc]);

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].instruction, "请分析2025-03-05今天的市场走势，应该关注哪些方向？");
        assert_eq!(samples[0].input, "日期：2025-03-05");
        assert_eq!(samples[0].section_type, "早自习");
        assert_eq!(samples[0].output.chars().count(), MAX_OUTPUT_CHARS);

        assert_eq!(samples[1].instruction, "2025-03-05收盘后，明天应该如何布局？");
        assert_eq!(samples[1].output, "# 明日（主2）\n关注券商。");
        assert_eq!(samples[1].date, "2025-03-05");
    }

    #[test]
    fn test_build_empty() {
        assert!(SampleBuilder::build(&[]).is_empty());
    }
}
