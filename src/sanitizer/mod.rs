//! 清洗模块：幂等、有损失上限的文章清洗
pub mod guard;
pub mod lines;
pub mod sanitizer;
pub mod global;

// 导出核心接口
pub use self::guard::{real_chars, ContentGuard, MIN_RETAINED_RATIO};
pub use self::lines::collapse_blank_lines;
pub use self::sanitizer::{CleanOutcome, Sanitizer};
pub use self::global::{clean, default_sanitizer, sanitize};
