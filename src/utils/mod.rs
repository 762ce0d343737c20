//! 工具模块
pub mod preview;
pub mod dir_scan;

pub use self::preview::{preview_compact, truncate_chars};
pub use self::dir_scan::{scan_data_dir, DirScan};
