pub(crate) enum HeadingMatch {
    /// A `#` run of 1–6 plus one optional following space.
    Heading { len: usize, level: u8 },
    /// A run longer than six hashes has no heading level; the whole run
    /// stays literal text.
    Literal { len: usize },
}

pub(crate) fn try_parse_heading(rest: &str) -> Option<HeadingMatch> {
    let run = rest.chars().take_while(|&c| c == '#').count();
    if run == 0 {
        return None;
    }
    if run > 6 {
        return Some(HeadingMatch::Literal { len: run });
    }
    let mut len = run;
    if rest[run..].starts_with(' ') {
        len += 1;
    }
    Some(HeadingMatch::Heading {
        len,
        level: run as u8,
    })
}
