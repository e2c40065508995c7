pub(crate) struct FencedBlock {
    pub len: usize,
    pub lang: String,
    pub content: String,
}

/// Try to parse a backtick-fenced code block at the start of `rest`.
///
/// The language tag runs from the opening fence to the end of its line; the
/// content runs to the closing fence, or to end of input when the fence is
/// never closed.
pub(crate) fn try_parse_fenced(rest: &str) -> Option<FencedBlock> {
    let after_fence = rest.strip_prefix("```")?;

    let (lang_raw, content_start) = match after_fence.find('\n') {
        Some(i) => (&after_fence[..i], 3 + i + 1),
        None => (after_fence, rest.len()),
    };

    let tail = &rest[content_start.min(rest.len())..];
    let (content_raw, len) = match tail.find("```") {
        Some(i) => (&tail[..i], content_start + i + 3),
        None => (tail, rest.len()),
    };

    Some(FencedBlock {
        len,
        lang: lang_raw.trim().to_string(),
        content: content_raw.trim_end().to_string(),
    })
}
