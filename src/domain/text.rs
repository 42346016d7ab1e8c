use unicode_width::UnicodeWidthStr;

/// Word-wraps `s` to `width` display columns.
///
/// Words longer than `width` are broken at character boundaries. Explicit
/// newlines in `s` start a new line.
pub fn wrap_text(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = vec![];
    for paragraph in s.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let sep = usize::from(!current.is_empty());
            if current.width() + sep + word.width() <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if word.width() <= width {
                current.push_str(word);
            } else {
                for c in word.chars() {
                    if !current.is_empty() && current.width() + c.to_string().width() > width {
                        lines.push(std::mem::take(&mut current));
                    }
                    current.push(c);
                }
            }
        }
        lines.push(current);
    }

    lines
}

pub fn truncate_text(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut out = String::new();
    for c in s.chars() {
        if out.width() + c.to_string().width() + 1 > max_width {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}

/// Left padding needed to center `s` in `width` columns.
pub fn center_offset(s: &str, width: usize) -> usize {
    width.saturating_sub(s.width()) / 2
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wrap_text_no_wrap() {
        let actual = wrap_text("hello, world!", 13);
        assert_eq!(actual, vec!["hello, world!"]);
    }

    #[test]
    fn test_wrap_text_breaks_on_words() {
        let actual = wrap_text("Brand Strategy for Kalavya", 10);
        assert_eq!(actual, vec!["Brand", "Strategy", "for", "Kalavya"]);

        let actual = wrap_text("Our Mission is simple", 12);
        assert_eq!(actual, vec!["Our Mission", "is simple"]);
    }

    #[test]
    fn test_wrap_text_long_word() {
        let actual = wrap_text("abcdefghij", 4);
        assert_eq!(actual, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_text_double_width() {
        let actual = wrap_text("こんにちは", 4);
        assert_eq!(actual, vec!["こん", "にち", "は"]);
    }

    #[test]
    fn test_wrap_text_keeps_paragraphs() {
        let actual = wrap_text("one\n\ntwo", 10);
        assert_eq!(actual, vec!["one", "", "two"]);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        let actual = wrap_text("hello, world!", 0);
        assert!(actual.is_empty());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Mithila", 10), "Mithila");
        assert_eq!(truncate_text("Mithila Red", 8), "Mithila…");
        assert_eq!(truncate_text("Mithila", 0), "");
    }

    #[test]
    fn test_center_offset() {
        assert_eq!(center_offset("abc", 9), 3);
        assert_eq!(center_offset("abcdef", 4), 0);
    }
}
