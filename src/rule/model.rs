//! 清洗规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，支持序列化/反序列化

use std::fmt;
use serde::{Deserialize, Serialize};

/// 规则所属阶段（声明顺序即执行顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleStage {
    /// 公众号头部垃圾（原创标记、日期行、来源标记等）
    Header,
    /// markdown / html 图片
    Image,
    /// 辅助平面字符（emoji）
    Emoji,
    /// 残留的 javascript:void(0)
    LinkMarker,
    /// 独立符号行
    SymbolLine,
}

impl RuleStage {
    pub const ALL: [RuleStage; 5] = [
        RuleStage::Header,
        RuleStage::Image,
        RuleStage::Emoji,
        RuleStage::LinkMarker,
        RuleStage::SymbolLine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleStage::Header => "header",
            RuleStage::Image => "image",
            RuleStage::Emoji => "emoji",
            RuleStage::LinkMarker => "link_marker",
            RuleStage::SymbolLine => "symbol_line",
        }
    }
}

impl fmt::Display for RuleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 原始匹配定义
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RawPattern {
    /// 正则删除；multi_line 控制 ^/$ 是否按行匹配
    Regex {
        pattern: String,
        #[serde(default)]
        multi_line: bool,
    },
    /// 码点区间删除（闭区间）
    CharRange { start: u32, end: u32 },
}

/// 单条清洗规则（匹配即删除）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRule {
    pub name: String,
    pub stage: RuleStage,
    #[serde(flatten)]
    pub pattern: RawPattern,
}

impl RawRule {
    pub fn regex(name: &str, stage: RuleStage, pattern: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            stage,
            pattern: RawPattern::Regex {
                pattern: pattern.into(),
                multi_line: false,
            },
        }
    }

    pub fn line_regex(name: &str, stage: RuleStage, pattern: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            stage,
            pattern: RawPattern::Regex {
                pattern: pattern.into(),
                multi_line: true,
            },
        }
    }

    pub fn char_range(name: &str, stage: RuleStage, start: u32, end: u32) -> Self {
        Self {
            name: name.to_string(),
            stage,
            pattern: RawPattern::CharRange { start, end },
        }
    }
}

/// 有序规则集
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub rules: Vec<RawRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<RawRule>) -> Self {
        Self { rules }
    }

    /// 追加规则后按阶段稳定排序：同阶段内先内置后追加
    pub fn extend(&mut self, extra: impl IntoIterator<Item = RawRule>) {
        self.rules.extend(extra);
        self.rules.sort_by_key(|rule| rule.stage);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RawRule> {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_rule_json_shape() {
        let json = r#"[
            {"name": "footer", "stage": "header", "kind": "regex", "pattern": "点击关注.*?\\n"},
            {"name": "dingbats", "stage": "emoji", "kind": "char_range", "start": 9984, "end": 10175},
            {"name": "dots", "stage": "symbol_line", "kind": "regex", "pattern": "^…+$", "multi_line": true}
        ]"#;
        let rules: Vec<RawRule> = serde_json::from_str(json).unwrap();

        assert_eq!(rules[0], RawRule::regex("footer", RuleStage::Header, "点击关注.*?\\n"));
        assert_eq!(rules[1], RawRule::char_range("dingbats", RuleStage::Emoji, 0x2700, 0x27BF));
        assert_eq!(rules[2], RawRule::line_regex("dots", RuleStage::SymbolLine, "^…+$"));
    }

    #[test]
    fn test_extend_keeps_stage_order_and_builtin_first() {
        let mut set = RuleSet::new(vec![
            RawRule::regex("h1", RuleStage::Header, "a"),
            RawRule::regex("i1", RuleStage::Image, "b"),
            RawRule::regex("s1", RuleStage::SymbolLine, "c"),
        ]);
        set.extend(vec![
            RawRule::regex("s2", RuleStage::SymbolLine, "d"),
            RawRule::regex("h2", RuleStage::Header, "e"),
        ]);

        let names: Vec<&str> = set.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["h1", "h2", "i1", "s1", "s2"]);
    }
}
