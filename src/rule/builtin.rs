//! 内置清洗规则
//! 针对公众号文章导出的 markdown 观察到的固定垃圾模式

use super::model::{RawRule, RuleSet, RuleStage};

/// 辅助平面起点（BMP 之后）
pub const SUPPLEMENTARY_PLANE_START: u32 = 0x1_0000;
/// Unicode 最大码点
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

impl RuleSet {
    /// 内置规则集，`region_marker` 为来源标记行的字面量
    pub fn builtin(region_marker: &str) -> Self {
        let marker = regex::escape(region_marker);

        Self::new(vec![
            // 1. 公众号头部垃圾
            RawRule::regex("originality_badge", RuleStage::Header, r"原创.*?\n"),
            RawRule::regex("void_link", RuleStage::Header, r"\[.*?\]\(javascript:void\(0\)\)"),
            RawRule::regex("date_stamp", RuleStage::Header, r"\*?\d{4}年\d{1,2}月\d{1,2}日.*?\n"),
            RawRule::regex("region_marker", RuleStage::Header, format!(r"[\* ]*{}[\* ]*\n", marker)),
            // 2. 图片
            RawRule::regex("markdown_image", RuleStage::Image, r"!\[.*?\]\(.*?\)"),
            RawRule::regex("img_tag", RuleStage::Image, r"<img.*?>"),
            RawRule::regex("image_url", RuleStage::Image, r"https?://\S+\.(?:jpg|jpeg|png|gif)"),
            // 3. emoji
            RawRule::char_range("supplementary_plane", RuleStage::Emoji, SUPPLEMENTARY_PLANE_START, MAX_CODE_POINT),
            // 4. 残留链接标记
            RawRule::regex("void_marker", RuleStage::LinkMarker, r"javascript:void\(0\);?"),
            // 5. 独立符号行
            RawRule::line_regex("separator_line", RuleStage::SymbolLine, r"^\s*[·\-\*]+\s*$"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::model::RawPattern;

    #[test]
    fn test_builtin_rules_are_in_stage_order() {
        let set = RuleSet::builtin("四川");
        let stages: Vec<RuleStage> = set.iter().map(|r| r.stage).collect();
        let mut sorted = stages.clone();
        sorted.sort();
        assert_eq!(stages, sorted);
        assert_eq!(set.len(), 10);
    }

    #[test]
    fn test_region_marker_is_escaped() {
        let set = RuleSet::builtin("a+b");
        let marker_rule = set.iter().find(|r| r.name == "region_marker").unwrap();
        match &marker_rule.pattern {
            RawPattern::Regex { pattern, .. } => assert_eq!(pattern, r"[\* ]*a\+b[\* ]*\n"),
            other => panic!("unexpected pattern: {:?}", other),
        }
    }
}
