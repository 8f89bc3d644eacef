use unicode_width::UnicodeWidthStr;

/// Hard-wrap `s` so that no line is wider than `width` terminal cells.
/// Existing line breaks are kept.
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(s.len() + s.len() / width);
    let mut current_line_width = 0;

    for c in s.chars() {
        if c == '\n' {
            result.push(c);
            current_line_width = 0;
            continue;
        }

        let char_width = UnicodeWidthStr::width(c.encode_utf8(&mut [0; 4]));
        if current_line_width + char_width > width {
            result.push('\n');
            current_line_width = char_width;
        } else {
            current_line_width += char_width;
        }

        result.push(c);
    }

    result
}

/// Keep at most `max_height` lines, replacing the overflow with a `...` line.
pub fn truncate_text(s: &str, max_height: usize) -> String {
    if max_height == 0 {
        return String::new();
    }

    let mut lines = s.lines();
    let kept: Vec<&str> = lines.by_ref().take(max_height).collect();
    if lines.next().is_none() {
        return s.to_string();
    }

    let mut truncated = kept[..max_height - 1].to_vec();
    truncated.push("...");
    truncated.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wrap_text_no_wrap_alnum() {
        let actual = wrap_text("hello, world!", 13);
        let expected = "hello, world!";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_wrap_alnum() {
        let actual = wrap_text("hello, world!", 4);
        let expected = "hell\no, w\norld\n!";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_wrap_double_width() {
        let actual = wrap_text("こんにちは、世界！", 7);
        let expected = "こんに\nちは、\n世界！";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_keeps_line_breaks() {
        let actual = wrap_text("ab\ncdef", 3);
        let expected = "ab\ncde\nf";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        let actual = wrap_text("hello, world!", 0);
        let expected = "";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_truncate_text_no_truncate() {
        let actual = truncate_text("foo\nbar\nbaz", 3);
        let expected = "foo\nbar\nbaz";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_truncate_text_truncate() {
        let actual = truncate_text("foo\nbar\nbaz", 2);
        let expected = "foo\n...";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_truncate_text_single_line() {
        let actual = truncate_text("foo\nbar", 1);
        let expected = "...";
        assert_eq!(actual, expected);
    }
}
