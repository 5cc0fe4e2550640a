//! Markdown-lite resolver.
//!
//! Rewrites `**bold**`, `__bold__`, `*italic*`, `_italic_` and
//! `~~underlined~~` into tag markup before parsing. Each marker spelling is
//! its own family, so `*a_` does not pair. A marker without a partner stays
//! literal text.
//!
//! Resolution runs in two phases. The first scans the input once, splitting
//! runs of marker characters greedily and pairing markers per family as it
//! goes. The second replays the tokens, writing paired markers as tags and
//! unpaired ones as the characters they were written with. Paired markers
//! with no text between them are written closers first, so `*a***b**`
//! becomes `<italic>a</italic><bold>b</bold>`.
//!
//! Tags already present in the input are copied through untouched, so
//! names such as `<dark_red>` are not read as markers. A `<` followed by
//! whitespace before its `>` is plain text. `\` escapes the next
//! character; before a marker the backslash itself is dropped.

/// A marker spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Family {
    DoubleStar,
    DoubleUnderscore,
    Star,
    Underscore,
    DoubleTilde,
}

const FAMILY_COUNT: usize = 5;

impl Family {
    fn index(self) -> usize {
        self as usize
    }

    fn marker(self) -> &'static str {
        match self {
            Family::DoubleStar => "**",
            Family::DoubleUnderscore => "__",
            Family::Star => "*",
            Family::Underscore => "_",
            Family::DoubleTilde => "~~",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Family::DoubleStar | Family::DoubleUnderscore => "bold",
            Family::Star | Family::Underscore => "italic",
            Family::DoubleTilde => "underlined",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Role {
    Unpaired,
    Open,
    Close,
}

#[derive(Clone, Copy, Debug)]
enum Token<'a> {
    Literal(&'a str),
    Marker { family: Family, role: Role },
}

/// Rewrite markdown markers in `input` as tags.
///
/// ```
/// assert_eq!(markup::markdown::parse("**bold** text"), "<bold>bold</bold> text");
/// assert_eq!(markup::markdown::parse("*a"), "*a");
/// ```
pub fn parse(input: &str) -> String {
    render(&tokenize(input), false)
}

/// Remove recognized markdown markers from `input`.
///
/// ```
/// assert_eq!(markup::markdown::strip("*a***a**"), "aa");
/// ```
pub fn strip(input: &str) -> String {
    render(&tokenize(input), true)
}

/// Phase one: split marker runs and pair markers per family.
fn tokenize(input: &str) -> Vec<Token<'_>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut open = [None; FAMILY_COUNT];
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' if matches!(bytes.get(i + 1), Some(b'*' | b'_' | b'~')) => {
                if literal_start < i {
                    tokens.push(Token::Literal(&input[literal_start..i]));
                }
                literal_start = i + 1;
                i += 2;
            }
            b'\\' => i += 2,
            b'<' => i += tag_len(&input[i..]).unwrap_or(1),
            c @ (b'*' | b'_' | b'~') => {
                if literal_start < i {
                    tokens.push(Token::Literal(&input[literal_start..i]));
                }
                let run = bytes[i..].iter().take_while(|&&b| b == c).count();
                split_run(c, &input[i..i + run], &mut tokens, &mut open);
                i += run;
                literal_start = i;
            }
            _ => i += 1,
        }
    }

    if literal_start < input.len() {
        tokens.push(Token::Literal(&input[literal_start..]));
    }

    tokens
}

/// Length of the tag starting at `input[0] == '<'`, or `None` when the
/// bracket does not start one. Quoted arguments may hold spaces and `>`.
fn tag_len(input: &str) -> Option<usize> {
    let mut quote = None;
    let mut chars = input.char_indices().skip(1);
    while let Some((index, c)) = chars.next() {
        match (quote, c) {
            (Some(_), '\\') => {
                chars.next();
            }
            (Some(open), c) if c == open => quote = None,
            (Some(_), _) => {}
            (None, '>') => return Some(index + 1),
            (None, '"' | '\'') => quote = Some(c),
            (None, '<') => return None,
            (None, c) if c.is_whitespace() => return None,
            (None, _) => {}
        }
    }
    None
}

/// Read a run of one marker character: close an open single-width marker
/// first, then take double-width markers, then a final single leftover.
fn split_run<'a>(
    c: u8,
    run: &'a str,
    tokens: &mut Vec<Token<'a>>,
    open: &mut [Option<usize>; FAMILY_COUNT],
) {
    let (single, double) = match c {
        b'*' => (Some(Family::Star), Family::DoubleStar),
        b'_' => (Some(Family::Underscore), Family::DoubleUnderscore),
        _ => (None, Family::DoubleTilde),
    };

    let mut remaining = run.len();
    if let Some(single) = single {
        if open[single.index()].is_some() {
            push_marker(single, tokens, open);
            remaining -= 1;
        }
    }

    for _ in 0..remaining / 2 {
        push_marker(double, tokens, open);
    }

    if remaining % 2 == 1 {
        match single {
            Some(single) => push_marker(single, tokens, open),
            None => tokens.push(Token::Literal(&run[..1])),
        }
    }
}

fn push_marker<'a>(
    family: Family,
    tokens: &mut Vec<Token<'a>>,
    open: &mut [Option<usize>; FAMILY_COUNT],
) {
    let index = tokens.len();
    match open[family.index()].take() {
        Some(opener) => {
            tokens[opener] = Token::Marker {
                family,
                role: Role::Open,
            };
            tokens.push(Token::Marker {
                family,
                role: Role::Close,
            });
        }
        None => {
            tokens.push(Token::Marker {
                family,
                role: Role::Unpaired,
            });
            open[family.index()] = Some(index);
        }
    }
}

/// Phase two: write tokens, demoting unpaired markers to text.
fn render(tokens: &[Token<'_>], strip: bool) -> String {
    let mut out = String::new();
    let mut group: Vec<(Family, Role)> = Vec::new();

    for token in tokens {
        match *token {
            Token::Marker {
                role: Role::Unpaired,
                family,
            } => {
                log::trace!("unpaired {:?} marker kept as text", family.marker());
                flush_group(&mut group, strip, &mut out);
                out.push_str(family.marker());
            }
            Token::Marker { family, role } => group.push((family, role)),
            Token::Literal(text) => {
                flush_group(&mut group, strip, &mut out);
                out.push_str(text);
            }
        }
    }

    flush_group(&mut group, strip, &mut out);
    out
}

/// Write a run of adjacent paired markers, closers first. A pair that
/// opens and closes inside the group encloses nothing and is dropped.
fn flush_group(group: &mut Vec<(Family, Role)>, strip: bool, out: &mut String) {
    let mut dropped = vec![false; group.len()];
    for (open, &(family, role)) in group.iter().enumerate() {
        if role != Role::Open {
            continue;
        }
        let close = group[open + 1..]
            .iter()
            .position(|&marker| marker == (family, Role::Close));
        if let Some(offset) = close {
            dropped[open] = true;
            dropped[open + 1 + offset] = true;
        }
    }

    if !strip {
        let written = || {
            group
                .iter()
                .zip(&dropped)
                .filter(|(_, dropped)| !**dropped)
                .map(|(marker, _)| *marker)
        };
        for (family, _) in written().filter(|(_, role)| *role == Role::Close) {
            out.push_str("</");
            out.push_str(family.tag());
            out.push('>');
        }
        for (family, _) in written().filter(|(_, role)| *role == Role::Open) {
            out.push('<');
            out.push_str(family.tag());
            out.push('>');
        }
    }
    group.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_are_distinct() {
        assert_eq!(parse("*a_"), "*a_");
        assert_eq!(parse("**a__"), "**a__");
        assert_eq!(parse("_a_"), "<italic>a</italic>");
        assert_eq!(parse("__a__"), "<bold>a</bold>");
    }

    #[test]
    fn lone_tilde_is_literal() {
        assert_eq!(parse("~a~"), "~a~");
        assert_eq!(parse("~~~a~~"), "<underlined>~a</underlined>");
    }

    #[test]
    fn tags_pass_through() {
        assert_eq!(
            parse("<dark_red>*a*</dark_red>"),
            "<dark_red><italic>a</italic></dark_red>"
        );
        assert_eq!(parse("<click:open_url:https://a_b_c>x"), "<click:open_url:https://a_b_c>x");
    }

    #[test]
    fn escaped_markers_are_literal() {
        assert_eq!(parse(r"\*a*"), "*a*");
        assert_eq!(parse(r"\~~a~~"), "~~a~~");
        assert_eq!(parse(r"\\*a*"), r"\\<italic>a</italic>");
        assert_eq!(parse(r"\<red>"), r"\<red>");
    }

    #[test]
    fn bracket_before_whitespace_is_text() {
        assert_eq!(parse("1 < 2 **b** > 0"), "1 < 2 <bold>b</bold> > 0");
        assert_eq!(
            parse(r#"<hover:show_text:"a *b* > c">*x*"#),
            r#"<hover:show_text:"a *b* > c"><italic>x</italic>"#
        );
    }

    #[test]
    fn empty_pairs_are_dropped() {
        assert_eq!(parse("****"), "");
        assert_eq!(parse("a____b"), "ab");
        assert_eq!(parse("~~~~"), "");
    }

    #[test]
    fn unclosed_angle_bracket_is_text() {
        assert_eq!(parse("1 < 2 *a*"), "1 < 2 <italic>a</italic>");
    }

    #[test]
    fn strip_keeps_unpaired() {
        assert_eq!(strip("**a** *b"), "a *b");
    }
}
