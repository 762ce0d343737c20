//! fincorpus - 财经语料清洗、解析与指令微调样本生成工具

// 导出全局错误类型
pub use self::error::{FincorpusError, FcResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心接口
pub use self::rule::{RawPattern, RawRule, RuleSet, RuleStage, RuleLoader};

// 导出编译模块核心接口
pub use self::compiler::{CompiledRule, CompiledRuleSet, Matcher, RuleCompiler};

// 导出清洗模块核心接口（含全局默认清洗器的简化接口）
pub use self::sanitizer::{
    Sanitizer,
    CleanOutcome,
    ContentGuard,
    clean,
    sanitize,
    default_sanitizer,
    real_chars,
    collapse_blank_lines,
};

// 导出批量清洗接口
pub use self::batch::{BatchCleaner, BatchReport, FileOutcome};

// 导出语料与训练数据接口
pub use self::corpus::{CorpusParser, ParsedDocument, Sections, SectionKind, KeyInfo};
pub use self::dataset::{SampleBuilder, TrainingSample, DatasetWriter, ProgressReport};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod compiler;
pub mod sanitizer;
pub mod batch;
pub mod corpus;
pub mod dataset;
pub mod utils;
