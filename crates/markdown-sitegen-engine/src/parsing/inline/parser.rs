use crate::error::{MarkdownError, Result};

use super::{
    cursor::Cursor,
    kinds::{Delimiter, Image, Link},
    types::Span,
};

/// Tokenizes inline Markdown into a sequence of [`Span`]s.
///
/// The input starts as one `Text` span and goes through ordered passes:
/// images, then links, then `**`, `_` and `` ` `` delimiters. Each pass only
/// touches spans that are still `Text`, so URLs and alt text are never split
/// by a stray delimiter. Matched content is not tokenized again.
///
/// # Errors
/// [`MarkdownError::MalformedInline`] when a delimiter occurs an odd number of
/// times inside a text span.
pub fn tokenize(text: &str) -> Result<Vec<Span>> {
    if text.is_empty() {
        return Ok(vec![]);
    }

    let mut spans = vec![Span::Text(text.to_string())];
    spans = split_bracketed(spans, try_parse_image);
    spans = split_bracketed(spans, try_parse_link);
    for delimiter in Delimiter::ORDER {
        spans = split_delimiter(spans, delimiter)?;
    }

    log::trace!("tokenized {text:?} into {} spans", spans.len());
    Ok(spans)
}

/// Splits every `Text` span on a paired delimiter.
///
/// Parts alternate between text (even indices) and the delimiter's kind (odd
/// indices). Empty parts are dropped.
pub fn split_delimiter(spans: Vec<Span>, delimiter: Delimiter) -> Result<Vec<Span>> {
    let marker = delimiter.marker();
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            Span::Text(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let parts: Vec<&str> = text.split(marker).collect();
        if parts.len() == 1 {
            out.push(Span::Text(text));
            continue;
        }
        if parts.len() % 2 == 0 {
            return Err(MarkdownError::MalformedInline {
                delimiter: marker.to_string(),
                text,
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(Span::Text(part.to_string()));
            } else if let Some(span) = Span::delimited(delimiter.kind(), part) {
                out.push(span);
            }
        }
    }

    Ok(out)
}

/// Runs a bracket-construct parser over every `Text` span.
///
/// Scans left to right; the first position where `try_parse` succeeds wins,
/// and scanning resumes after the match. Text between matches is kept when
/// non-empty.
fn split_bracketed(spans: Vec<Span>, try_parse: fn(&mut Cursor<'_>) -> Option<Span>) -> Vec<Span> {
    fn flush_text(out: &mut Vec<Span>, text: &str) {
        if !text.is_empty() {
            out.push(Span::Text(text.to_string()));
        }
    }

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let text = match span {
            Span::Text(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let mut cur = Cursor::new(&text);
        let mut text_start = cur.pos();
        while !cur.eof() {
            let start = cur.pos();
            if let Some(node) = try_parse(&mut cur) {
                flush_text(&mut out, &text[text_start..start]);
                out.push(node);
                text_start = cur.pos();
                continue;
            }
            cur.bump();
        }
        flush_text(&mut out, &text[text_start..]);
    }
    out
}

/// Attempts to parse `![alt](url)` at the cursor.
///
/// On failure the cursor is restored.
fn try_parse_image(cur: &mut Cursor<'_>) -> Option<Span> {
    if !cur.starts_with(Image::OPEN) {
        return None;
    }
    let saved = cur.clone();
    cur.bump(); // !
    match parse_text_and_url(cur) {
        Some((alt, url)) => Some(Span::Image { alt, url }),
        None => {
            *cur = saved;
            None
        }
    }
}

/// Attempts to parse `[text](url)` at the cursor, refusing a `[` that follows `!`.
///
/// On failure the cursor is restored.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<Span> {
    if cur.peek() != Some(Link::TEXT_OPEN) || cur.prev() == Some(Image::BANG) {
        return None;
    }
    let saved = cur.clone();
    match parse_text_and_url(cur) {
        Some((text, url)) => Some(Span::Link { text, url }),
        None => {
            *cur = saved;
            None
        }
    }
}

/// Parses `[text](url)` with the cursor on the `[`. Leaves the cursor after `)`.
fn parse_text_and_url(cur: &mut Cursor<'_>) -> Option<(String, String)> {
    cur.bump(); // [
    let text_start = cur.pos();
    if cur.skip_until(Link::TEXT_STOPS) != Some(Link::TEXT_CLOSE) {
        return None;
    }
    let text = cur.since(text_start).to_string();
    cur.bump(); // ]

    if cur.peek() != Some(Link::URL_OPEN) {
        return None;
    }
    cur.bump(); // (
    let url_start = cur.pos();
    if cur.skip_until(Link::URL_STOPS) != Some(Link::URL_CLOSE) {
        return None;
    }
    let url = cur.since(url_start).to_string();
    cur.bump(); // )

    Some((text, url))
}
