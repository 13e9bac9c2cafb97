//! Substring helpers for the sheet's title cells
//!
//! A missing delimiter yields an empty string rather than an error.

/// Text between the first `start` and the next `end` after it
pub fn between(text: &str, start: &str, end: &str) -> String {
    text.find(start)
        .map(|pos| &text[pos + start.len()..])
        .and_then(|rest| rest.find(end).map(|pos| rest[..pos].trim().to_string()))
        .unwrap_or_default()
}

/// Text after the first `start`
pub fn after(text: &str, start: &str) -> String {
    text.find(start)
        .map(|pos| text[pos + start.len()..].trim().to_string())
        .unwrap_or_default()
}

/// Text inside the first pair of parentheses (ASCII or full-width)
pub fn in_parentheses(text: &str) -> String {
    let ascii = between(text, "(", ")");
    if !ascii.is_empty() {
        return ascii;
    }
    between(text, "（", "）")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between() {
        assert_eq!(
            between("厦门理工学院 2023-2024学年第二学期 成绩登记表", "厦门理工学院", "成绩登记表"),
            "2023-2024学年第二学期"
        );
        assert_eq!(between("no markers here", "[", "]"), "");
        assert_eq!(between("only [start", "[", "]"), "");
    }

    #[test]
    fn test_after() {
        assert_eq!(after("课程名称：大学信息技术 ", "课程名称："), "大学信息技术");
        assert_eq!(after("课程：大学信息技术", "课程名称："), "");
    }

    #[test]
    fn test_in_parentheses() {
        assert_eq!(in_parentheses("成绩单(2023-2024-1)"), "2023-2024-1");
        assert_eq!(in_parentheses("成绩单（2023-2024-2）"), "2023-2024-2");
        assert_eq!(in_parentheses("成绩单"), "");
    }
}
