//! 章节切分：早自习 / 主1 / 主2

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::utils::truncate_chars;

/// 章节类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// 盘前早自习
    Morning,
    /// 主1：当日复盘
    MainOne,
    /// 主2：次日展望
    MainTwo,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [SectionKind::Morning, SectionKind::MainOne, SectionKind::MainTwo];

    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Morning => "早自习",
            SectionKind::MainOne => "主1",
            SectionKind::MainTwo => "主2",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 一篇语料的三个章节（缺失为空字符串）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections {
    #[serde(rename = "早自习", default)]
    pub morning: String,
    #[serde(rename = "主1", default)]
    pub main_one: String,
    #[serde(rename = "主2", default)]
    pub main_two: String,
}

impl Sections {
    pub fn get(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::Morning => &self.morning,
            SectionKind::MainOne => &self.main_one,
            SectionKind::MainTwo => &self.main_two,
        }
    }

    fn set(&mut self, kind: SectionKind, content: String) {
        match kind {
            SectionKind::Morning => self.morning = content,
            SectionKind::MainOne => self.main_one = content,
            SectionKind::MainTwo => self.main_two = content,
        }
    }

    /// 非空章节（按固定顺序）
    pub fn non_empty(&self) -> impl Iterator<Item = (SectionKind, &str)> {
        SectionKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
            .filter(|(_, content)| !content.is_empty())
    }
}

/// 判断章节类型：标题区出现对应关键字
fn classify(part: &str) -> Option<SectionKind> {
    let head_50 = truncate_chars(part, 50);
    let head_100 = truncate_chars(part, 100);

    if head_50.contains("早自习") {
        Some(SectionKind::Morning)
    } else if head_100.contains("（主1）") || head_100.contains("(主1)") {
        Some(SectionKind::MainOne)
    } else if head_100.contains("（主2）") || head_100.contains("(主2)") {
        Some(SectionKind::MainTwo)
    } else {
        None
    }
}

/// 按一级标题切分语料；同类章节出现多次时保留最后一次
pub fn split_sections(content: &str) -> Sections {
    let mut sections = Sections::default();

    for part in content.split("\n# ") {
        if part.trim().is_empty() {
            continue;
        }
        let part = if part.starts_with('#') {
            part.to_string()
        } else {
            format!("# {}", part)
        };

        if let Some(kind) = classify(&part) {
            sections.set(kind, part);
        }
    }

    sections
}
