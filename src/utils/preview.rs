//! 日志预览与按字符截断工具

/// 折叠连续空白并截断到 `max_chars` 个字符，超长时以 `…` 结尾
pub fn preview_compact(s: &str, max_chars: usize) -> String {
    let compact = s.split_whitespace().collect::<Vec<_>>().join(" ");
    let head = truncate_chars(&compact, max_chars);
    if head.len() < compact.len() {
        format!("{}…", head)
    } else {
        compact
    }
}

/// 取前 `max_chars` 个字符（按码点，不会截断多字节字符）
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_compact() {
        assert_eq!(preview_compact("上证\n\n  指数", 10), "上证 指数");
        assert_eq!(preview_compact("  原创 \t 早自习\n", 10), "原创 早自习");
        assert_eq!(preview_compact("一二三四五", 3), "一二三…");
        assert_eq!(preview_compact("一二三", 3), "一二三");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("早自习内容", 3), "早自习");
        assert_eq!(truncate_chars("短", 500), "短");
        assert_eq!(truncate_chars("", 1), "");
    }
}
