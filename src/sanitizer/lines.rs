//! 行规范化：去除首尾空白与空行

/// 是否为行分隔符（含 Unicode 行/段分隔符）
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{1C}' | '\u{1D}' | '\u{1E}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// 行首尾需去除的空白（Unicode 空白及单元分隔符 U+1F）
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{1F}'
}

/// 按行切分、逐行去除首尾空白、丢弃空行，再以单个换行拼接
pub fn collapse_blank_lines(text: &str) -> String {
    text.split(is_line_boundary)
        .map(|line| line.trim_matches(is_trimmable))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines("  第一段  \n\n\n\t第二段\n   \n"), "第一段\n第二段");
        assert_eq!(collapse_blank_lines("甲\r\n乙\r丙"), "甲\n乙\n丙");
        assert_eq!(collapse_blank_lines("甲\u{2028}乙"), "甲\n乙");
        assert_eq!(collapse_blank_lines("\n \n"), "");
    }

    #[test]
    fn test_unit_separator_is_trimmed() {
        assert_eq!(collapse_blank_lines("正文\u{1F}\n\u{1F}\n\u{1F}收盘"), "正文\n收盘");
        // 行内的 U+1F 保留
        assert_eq!(collapse_blank_lines("甲\u{1F}乙"), "甲\u{1F}乙");
    }

    #[test]
    fn test_collapse_is_a_fixed_point() {
        let once = collapse_blank_lines(" a \n\n b\r\n\r\n c ");
        assert_eq!(collapse_blank_lines(&once), once);
    }
}
