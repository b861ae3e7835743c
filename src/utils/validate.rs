use once_cell::sync::Lazy;
use regex::Regex;

static HEX_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("Invalid hex color regex")
});

/// 日历展示色校验：`#rgb` 或 `#rrggbb`
pub fn validate_hex_color(color: &str) -> Result<(), &'static str> {
    if !HEX_COLOR_RE.is_match(color) {
        return Err("Color must be a hex value like #2d9cdb");
    }
    Ok(())
}

/// 去除首尾空白后非空则返回，否则返回 None
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 仅判断是否全为空白，返回原始内容（不做修剪）
pub fn not_blank_verbatim(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// 评分校验：必须是有限实数
pub fn validate_grade(grade: f64) -> Result<(), &'static str> {
    if !grade.is_finite() {
        return Err("Grade must be a finite number");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_colors() {
        assert!(validate_hex_color("#2d9cdb").is_ok());
        assert!(validate_hex_color("#FFD93D").is_ok());
        assert!(validate_hex_color("#fff").is_ok());
    }

    #[test]
    fn test_invalid_colors() {
        assert!(validate_hex_color("2d9cdb").is_err());
        assert!(validate_hex_color("#2d9cd").is_err());
        assert!(validate_hex_color("#zzzzzz").is_err());
        assert!(validate_hex_color("red").is_err());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("   ".into())), None);
        assert_eq!(non_blank(Some(" Alice ".into())), Some("Alice".into()));
    }

    #[test]
    fn test_not_blank_verbatim() {
        assert_eq!(not_blank_verbatim(None), None);
        assert_eq!(not_blank_verbatim(Some(" \n\t".into())), None);
        assert_eq!(
            not_blank_verbatim(Some("  indented\n".into())),
            Some("  indented\n".into())
        );
    }

    #[test]
    fn test_grade() {
        assert!(validate_grade(90.0).is_ok());
        assert!(validate_grade(-5.5).is_ok());
        assert!(validate_grade(f64::NAN).is_err());
        assert!(validate_grade(f64::INFINITY).is_err());
    }
}
