//! 批量清洗模块
pub mod cleaner;
pub mod report;

pub use self::cleaner::BatchCleaner;
pub use self::report::{BatchReport, FileOutcome};
