pub(crate) enum LinkMatch {
    Link {
        len: usize,
        text: String,
        href: String,
    },
    /// No `(url)` part followed the brackets; the bracketed text stays
    /// literal.
    Literal {
        len: usize,
        text: String,
    },
}

/// Try to parse `[text](url)` at the start of `rest`.
pub(crate) fn try_parse_link(rest: &str) -> Option<LinkMatch> {
    let body = rest.strip_prefix('[')?;
    parse_bracketed(rest, body, 1)
}

/// Try to parse `![alt](src)` at the start of `rest`.
pub(crate) fn try_parse_image(rest: &str) -> Option<LinkMatch> {
    let body = rest.strip_prefix("![")?;
    parse_bracketed(rest, body, 2)
}

fn parse_bracketed(rest: &str, body: &str, prefix_len: usize) -> Option<LinkMatch> {
    let (text, after_bracket) = match body.find(']') {
        Some(i) => (&body[..i], prefix_len + i + 1),
        None => (body, rest.len()),
    };

    let tail = &rest[after_bracket.min(rest.len())..];
    if let Some(url_body) = tail.strip_prefix('(') {
        let matched = match url_body.find(')') {
            Some(i) => LinkMatch::Link {
                len: after_bracket + 1 + i + 1,
                text: text.to_string(),
                href: url_body[..i].to_string(),
            },
            None => LinkMatch::Link {
                len: rest.len(),
                text: text.to_string(),
                href: url_body.to_string(),
            },
        };
        return Some(matched);
    }

    Some(LinkMatch::Literal {
        len: after_bracket.min(rest.len()),
        text: text.to_string(),
    })
}
