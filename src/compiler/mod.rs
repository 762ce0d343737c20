//! 编译模块：将原始清洗规则编译为可执行的匹配器
pub mod pattern;
pub mod compiler;

pub use self::pattern::{CompiledRule, CompiledRuleSet, Matcher};
pub use self::compiler::RuleCompiler;
