//! 规则模块：负责清洗规则的数据模型、内置规则集与加载
pub mod model;
pub mod builtin;
pub mod loader;

// 导出核心接口
pub use self::model::{RawPattern, RawRule, RuleSet, RuleStage};
pub use self::builtin::{MAX_CODE_POINT, SUPPLEMENTARY_PLANE_START};
pub use self::loader::RuleLoader;
