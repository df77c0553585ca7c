//! Terminal display width helpers for the sidebar text.

/// Compute the display width of a string after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    unicode_width::UnicodeWidthStr::width(&*clean_str)
}

/// Cut `text` so it never spills past `width` display columns.
pub fn clip_to_width(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out
}

/// Clip `text` to `width` display columns, then pad it with spaces so it
/// covers exactly `width` columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let mut out = clip_to_width(text, width);
    let used = display_width(&out);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_sequences_have_no_width() {
        assert_eq!(display_width("\x1b[1mPAUSED\x1b[0m"), 6);
    }

    #[test]
    fn pads_short_text() {
        assert_eq!(pad_to_width("", 3), "   ");
        assert_eq!(pad_to_width("ab", 4), "ab  ");
    }

    #[test]
    fn padding_ignores_ansi_sequences() {
        assert_eq!(pad_to_width("\x1b[1mab\x1b[0m", 4), "\x1b[1mab\x1b[0m  ");
    }

    #[test]
    fn truncates_long_text() {
        assert_eq!(pad_to_width("Generation: 12", 10), "Generation");
        assert_eq!(pad_to_width("ｗｉｄｅ", 3), "ｗ ");
    }

    #[test]
    fn clipping_never_pads() {
        assert_eq!(clip_to_width("Press <q> for quit", 5), "Press");
        assert_eq!(clip_to_width("short", 40), "short");
    }
}
