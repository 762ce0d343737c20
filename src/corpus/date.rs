//! 从文件名提取日期
use once_cell::sync::Lazy;
use regex::Regex;

static FILENAME_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})").unwrap()
});

/// 提取文件名中第一个 `YYYY-M-D`，规范化为 `YYYY-MM-DD`
pub fn parse_date_from_filename(file_name: &str) -> Option<String> {
    let caps = FILENAME_DATE_REGEX.captures(file_name)?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    Some(format!("{}-{:02}-{:02}", &caps[1], month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_from_filename() {
        assert_eq!(parse_date_from_filename("2025-3-5.md"), Some("2025-03-05".to_string()));
        assert_eq!(parse_date_from_filename("早评 2024-12-31 终版.md"), Some("2024-12-31".to_string()));
        assert_eq!(parse_date_from_filename("ReadMe.md"), None);
        assert_eq!(parse_date_from_filename("2025-3.md"), None);
    }
}
