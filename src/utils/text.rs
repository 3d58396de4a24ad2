/// Splices `insertion` into `text` over the current selection, the way a
/// textarea replaces selected content when a placeholder chip is clicked.
/// Offsets are character offsets; out-of-range values are clamped and an
/// inverted selection is treated as its normalized form. Returns the new
/// text and the caret position just after the inserted fragment.
pub fn splice_selection(
    text: &str,
    selection_start: usize,
    selection_end: usize,
    insertion: &str,
) -> (String, usize) {
    let char_count = text.chars().count();
    let start = selection_start.min(char_count);
    let end = selection_end.min(char_count);
    let (start, end) = if start <= end { (start, end) } else { (end, start) };

    let before: String = text.chars().take(start).collect();
    let after: String = text.chars().skip(end).collect();

    let new_cursor = start + insertion.chars().count();
    (format!("{}{}{}", before, insertion, after), new_cursor)
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splice_inserts_at_collapsed_cursor() {
        let (text, cursor) = splice_selection("Dear ,", 5, 5, "{{candidate.name}}");
        assert_eq!(text, "Dear {{candidate.name}},");
        assert_eq!(cursor, 5 + "{{candidate.name}}".chars().count());
    }

    #[test]
    fn splice_replaces_active_selection() {
        let (text, cursor) = splice_selection("Hello NAME!", 6, 10, "{{candidate.name}}");
        assert_eq!(text, "Hello {{candidate.name}}!");
        assert_eq!(cursor, 6 + "{{candidate.name}}".chars().count());
    }

    #[test]
    fn splice_clamps_out_of_range_offsets() {
        let (text, cursor) = splice_selection("Hi", 10, 40, "!");
        assert_eq!(text, "Hi!");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn splice_normalizes_inverted_selection() {
        let (text, _) = splice_selection("abcdef", 4, 2, "-");
        assert_eq!(text, "ab-ef");
    }

    #[test]
    fn splice_respects_multibyte_boundaries() {
        let (text, cursor) = splice_selection("héllo", 2, 2, "x");
        assert_eq!(text, "héxllo");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn initials_from_full_name() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("Michael"), "M");
    }
}
