//! 编译后模式模型
//! 正则/码点区间编译后的结构

use std::borrow::Cow;
use regex::Regex;

use crate::rule::RuleStage;

#[derive(Debug, Clone)]
pub enum Matcher {
    Regex(Regex), // 正则匹配
    CharRange(u32, u32), // 码点闭区间匹配
}

impl Matcher {
    /// 删除全部匹配，无匹配时不分配
    pub fn strip<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match self {
            Matcher::Regex(regex) => regex.replace_all(input, ""),
            Matcher::CharRange(..) => {
                if input.chars().any(|c| self.contains_char(c)) {
                    Cow::Owned(input.chars().filter(|&c| !self.contains_char(c)).collect())
                } else {
                    Cow::Borrowed(input)
                }
            }
        }
    }

    /// 简单匹配判断
    pub fn is_match(&self, input: &str) -> bool {
        match self {
            Matcher::Regex(regex) => regex.is_match(input),
            Matcher::CharRange(..) => input.chars().any(|c| self.contains_char(c)),
        }
    }

    /// 规则描述
    pub fn describe(&self) -> String {
        match self {
            Matcher::Regex(r) => r.as_str().to_string(),
            Matcher::CharRange(start, end) => format!("U+{:04X}..=U+{:04X}", start, end),
        }
    }

    fn contains_char(&self, c: char) -> bool {
        match self {
            Matcher::CharRange(start, end) => (*start..=*end).contains(&(c as u32)),
            Matcher::Regex(_) => false,
        }
    }
}

/// 编译后的清洗规则
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub name: String,
    pub stage: RuleStage,
    pub matcher: Matcher,
}

/// 编译后的有序规则集
#[derive(Debug, Clone, Default)]
pub struct CompiledRuleSet {
    pub rules: Vec<CompiledRule>,
}

impl CompiledRuleSet {
    /// 按顺序依次应用全部规则（每条规则作用于整段文本）
    pub fn apply(&self, text: &str) -> String {
        let mut text = text.to_string();
        for rule in &self.rules {
            let replaced = match rule.matcher.strip(&text) {
                Cow::Borrowed(_) => None,
                Cow::Owned(s) => Some(s),
            };
            if let Some(s) = replaced {
                text = s;
            }
        }
        text
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
