use std::sync::LazyLock;

use regex::Regex;

static DEFINITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\^([^\]]+)\]:\s*(.*)$").expect("valid regex"));

/// Try to parse a `[^id]: content` definition line. Only called at line
/// start; the whole line belongs to the definition.
pub(crate) fn try_parse_definition(line: &str) -> Option<(String, String)> {
    let caps = DEFINITION_RE.captures(line)?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

/// Try to parse a `[^id]` reference at the start of `rest`. Returns the
/// consumed length and the id; an unterminated reference runs to end of
/// input.
pub(crate) fn try_parse_reference(rest: &str) -> Option<(usize, String)> {
    let body = rest.strip_prefix("[^")?;
    match body.find(']') {
        Some(i) => Some((2 + i + 1, body[..i].to_string())),
        None => Some((rest.len(), body.to_string())),
    }
}
