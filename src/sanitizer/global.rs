//! 全局默认清洗器
use once_cell::sync::Lazy;

use super::sanitizer::{CleanOutcome, Sanitizer};
use crate::config::ConfigManager;

/// 全局默认清洗器（仅内置规则）
static DEFAULT_SANITIZER: Lazy<Sanitizer> = Lazy::new(|| {
    Sanitizer::builtin(&ConfigManager::get_default().region_marker)
        .expect("内置清洗规则必须可编译")
});

/// 获取全局默认清洗器
pub fn default_sanitizer() -> &'static Sanitizer {
    &DEFAULT_SANITIZER
}

/// 使用内置规则清洗文章（保护触发时原样返回）
pub fn clean(text: &str) -> String {
    DEFAULT_SANITIZER.clean(text)
}

/// 使用内置规则清洗文章，返回是否回退
pub fn sanitize(text: &str) -> CleanOutcome {
    DEFAULT_SANITIZER.sanitize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_clean_matches_builtin_sanitizer() {
        let input = "原创 作者名\n正文内容这里是真实的文章内容，包含很多字\n";
        assert_eq!(clean(input), Sanitizer::builtin("四川").unwrap().clean(input));
        assert!(!sanitize(input).is_reverted());
    }

    #[test]
    fn test_global_sanitizer_usable_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| std::thread::spawn(move || clean(&format!("第{}篇正文内容足够长😀\n\n", i))))
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("第{}篇正文内容足够长", i));
        }
    }
}
