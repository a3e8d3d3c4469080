// src/core/sanitize.rs

/// Collapse runs of whitespace (including non-breaking spaces) into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Remove `[ ... ]` footnote markers (e.g. `[1]`, `[a]`, `[note 2]`).
/// No nesting; an unterminated `[` is kept as text.
pub fn strip_footnotes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending: Option<String> = None;
    for ch in s.chars() {
        match (ch, pending.as_mut()) {
            ('[', Some(buf)) => {
                out.push('[');
                out.push_str(buf);
                buf.clear();
            }
            ('[', None) => pending = Some(String::new()),
            (']', Some(_)) => pending = None,
            (_, Some(buf)) => buf.push(ch),
            (_, None) => out.push(ch),
        }
    }
    if let Some(buf) = pending {
        out.push('[');
        out.push_str(&buf);
    }
    out
}

/// Cell text as shown to users: footnotes dropped, whitespace normalized.
pub fn clean_cell(s: &str) -> String {
    normalize_ws(&strip_footnotes(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleans_wiki_cells() {
        assert_eq!(clean_cell("  City\u{a0}Ground[3]\n"), "City Ground");
        assert_eq!(clean_cell("Stadium[a][b]"), "Stadium");
        assert_eq!(clean_cell("Hull   City"), "Hull City");
    }

    #[test]
    fn unterminated_bracket_is_kept() {
        assert_eq!(strip_footnotes("Stadium [note"), "Stadium [note");
        assert_eq!(strip_footnotes("A [x [1] B"), "A [x  B");
        assert_eq!(clean_cell("Kenilworth Road[1] [shared"), "Kenilworth Road [shared");
    }
}
