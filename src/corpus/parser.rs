//! 语料解析器
//! 负责读取语料文件、切分章节、提取关键信息并保存为JSON

use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::date::parse_date_from_filename;
use super::key_info::{extract_key_info, KeyInfo};
use super::section::{split_sections, SectionKind, Sections};
use crate::config::GlobalConfig;
use crate::error::FcResult;
use crate::utils::scan_data_dir;

/// 各章节的关键信息（缺失章节不输出）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionKeyInfo {
    #[serde(rename = "早自习", default, skip_serializing_if = "Option::is_none")]
    pub morning: Option<KeyInfo>,
    #[serde(rename = "主1", default, skip_serializing_if = "Option::is_none")]
    pub main_one: Option<KeyInfo>,
    #[serde(rename = "主2", default, skip_serializing_if = "Option::is_none")]
    pub main_two: Option<KeyInfo>,
}

impl SectionKeyInfo {
    pub fn get(&self, kind: SectionKind) -> Option<&KeyInfo> {
        match kind {
            SectionKind::Morning => self.morning.as_ref(),
            SectionKind::MainOne => self.main_one.as_ref(),
            SectionKind::MainTwo => self.main_two.as_ref(),
        }
    }
}

/// 单篇语料解析结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub filename: String,
    pub date: String,
    pub sections: Sections,
    pub key_info: SectionKeyInfo,
}

impl ParsedDocument {
    /// 从文件名与正文解析；文件名无日期时返回 None
    pub fn from_content(file_name: &str, content: &str) -> Option<Self> {
        let date = parse_date_from_filename(file_name)?;
        let sections = split_sections(content);

        let extract = |kind: SectionKind| {
            let text = sections.get(kind);
            (!text.is_empty()).then(|| extract_key_info(text, &date))
        };
        let key_info = SectionKeyInfo {
            morning: extract(SectionKind::Morning),
            main_one: extract(SectionKind::MainOne),
            main_two: extract(SectionKind::MainTwo),
        };

        Some(Self {
            filename: file_name.to_string(),
            date,
            sections,
            key_info,
        })
    }

    pub fn section_count(&self) -> usize {
        self.sections.non_empty().count()
    }
}

/// 语料解析器
#[derive(Debug, Clone)]
pub struct CorpusParser {
    config: GlobalConfig,
}

impl CorpusParser {
    pub fn new(config: GlobalConfig) -> Self {
        Self { config }
    }

    /// 解析单个文件；失败只记录日志
    pub async fn parse_file(&self, path: &Path) -> Option<ParsedDocument> {
        let file_name = path.file_name()?.to_string_lossy().into_owned();
        info!("解析文件: {}", file_name);

        if parse_date_from_filename(&file_name).is_none() {
            warn!("无法从文件名提取日期: {}", file_name);
            return None;
        }

        match tokio::fs::read_to_string(path).await {
            Ok(content) => ParsedDocument::from_content(&file_name, &content),
            Err(e) => {
                error!("解析文件失败 {}: {}", file_name, e);
                None
            }
        }
    }

    /// 解析语料目录下全部文件（按文件名排序，跳过索引文件）
    pub async fn parse_all(&self) -> FcResult<Vec<ParsedDocument>> {
        let scan = scan_data_dir(&self.config).await?;
        info!("找到 {} 个语料文件", scan.targets.len());

        let mut results = Vec::with_capacity(scan.targets.len());
        for (_, path) in &scan.targets {
            if let Some(doc) = self.parse_file(path).await {
                results.push(doc);
            }
        }

        let total_sections: usize = results.iter().map(ParsedDocument::section_count).sum();
        info!("成功解析 {} 个文件，总共章节数: {}", results.len(), total_sections);
        Ok(results)
    }

    /// 保存解析结果（格式化JSON，保留中文）
    pub async fn save(docs: &[ParsedDocument], path: &Path) -> FcResult<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(docs)?;
        tokio::fs::write(path, json).await?;
        info!("解析结果已保存到: {}", path.display());
        Ok(())
    }

    /// 读取已保存的解析结果
    pub async fn load(path: &Path) -> FcResult<Vec<ParsedDocument>> {
        let content = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}
