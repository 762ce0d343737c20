//! 语料模块：日期、章节与关键信息解析
pub mod date;
pub mod section;
pub mod key_info;
pub mod parser;

pub use self::date::parse_date_from_filename;
pub use self::section::{split_sections, SectionKind, Sections};
pub use self::key_info::{extract_key_info, KeyInfo};
pub use self::parser::{CorpusParser, ParsedDocument, SectionKeyInfo};
