/// Try to parse a single-backtick code span at the start of `rest`.
/// Returns the consumed length and the raw span content (not trimmed).
/// An unterminated span runs to end of input.
pub(crate) fn try_parse_code_span(rest: &str) -> Option<(usize, String)> {
    let body = rest.strip_prefix('`')?;
    match body.find('`') {
        Some(i) => Some((i + 2, body[..i].to_string())),
        None => Some((rest.len(), body.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_span() {
        assert_eq!(try_parse_code_span("`x+y` z"), Some((5, "x+y".to_string())));
    }

    #[test]
    fn test_unterminated_span() {
        assert_eq!(try_parse_code_span("`open"), Some((5, "open".to_string())));
    }
}
