// Line splitting with CRLF normalization.

/// Replace every CRLF pair with a single LF.
/// Applied exactly once when text enters the engine; content produced by
/// the reconciler is already normalized and must not go through this again.
pub fn normalize_breaks(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// Split normalized text on `'\n'`.
/// Splitting `""` yields `[""]`, so the result length is always
/// (number of line breaks) + 1.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(String::from).collect()
}

pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_normalizes_to_lf() {
        assert_eq!(normalize_breaks("a\r\nb\r\nc"), "a\nb\nc");
    }

    #[test]
    fn crlf_text_splits_into_three_lines() {
        let lines = split_lines(&normalize_breaks("a\r\nb\r\nc"));
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn trailing_break_yields_trailing_empty_line() {
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
    }

    #[test]
    fn join_inverts_split() {
        let text = "one\ntwo\n\nfour";
        assert_eq!(join_lines(&split_lines(text)), text);
    }

    #[test]
    fn lone_cr_is_left_alone() {
        // Only the two-character CRLF sequence is rewritten.
        assert_eq!(normalize_breaks("a\rb"), "a\rb");
    }
}
