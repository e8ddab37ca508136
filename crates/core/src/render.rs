//! Markdown render transform for wiki-links.
//!
//! Rewrites `[[Title]]` markers into HTML while leaving every other markdown
//! construct to `pulldown-cmark`. A marker whose (normalized) title appears
//! in the resolved-link map becomes a navigable internal link; anything else
//! becomes a non-interactive "missing" span carrying the attempted title.
//!
//! The rewrite operates on the parser's event stream rather than the raw
//! source, so markers inside fenced code blocks and inline code spans pass
//! through untouched.

use std::collections::HashMap;

use pulldown_cmark::{html, CowStr, Event, Parser, Tag, TagEnd};

use crate::article::normalize_title;
use crate::types::DbId;

/// Resolved wiki-links keyed by normalized title. Titles absent from the map
/// render as missing.
pub type ResolvedLinks = HashMap<String, DbId>;

/// Render markdown content to HTML, transforming `[[Title]]` markers
/// according to the given resolution map.
pub fn render_html(content: &str, links: &ResolvedLinks) -> String {
    let parser = Parser::new(content);

    let mut events: Vec<Event> = Vec::new();
    // Inline text accumulates here so a marker split across adjacent text
    // events (brackets are tokenized separately) is still seen whole.
    let mut text_run = String::new();
    let mut in_code_block = false;

    for event in parser {
        match event {
            Event::Text(text) if !in_code_block => {
                text_run.push_str(&text);
            }
            other => {
                flush_text_run(&mut events, &mut text_run, links);
                match &other {
                    Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
                    Event::End(TagEnd::CodeBlock) => in_code_block = false,
                    _ => {}
                }
                events.push(other);
            }
        }
    }
    flush_text_run(&mut events, &mut text_run, links);

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    out
}

/// Split an accumulated text run around wiki-link markers and append the
/// resulting events.
fn flush_text_run<'a>(events: &mut Vec<Event<'a>>, text_run: &mut String, links: &ResolvedLinks) {
    if text_run.is_empty() {
        return;
    }

    let run = std::mem::take(text_run);
    let mut rest = run.as_str();

    while let Some((before, title, after)) = split_at_marker(rest) {
        if !before.is_empty() {
            events.push(Event::Text(CowStr::from(before.to_string())));
        }
        events.push(Event::Html(CowStr::from(marker_html(title, links))));
        rest = after;
    }

    if !rest.is_empty() {
        events.push(Event::Text(CowStr::from(rest.to_string())));
    }
}

/// Find the first `[[Title]]` marker in `text`, returning the text before it,
/// the trimmed title, and the text after it.
fn split_at_marker(text: &str) -> Option<(&str, &str, &str)> {
    let mut search_from = 0;
    loop {
        let start = search_from + text[search_from..].find("[[")?;
        let inner_start = start + 2;
        let close = text[inner_start..].find("]]")?;
        let inner = &text[inner_start..inner_start + close];
        // A marker title cannot contain `]` or span a line break; the
        // extractor applies the same rule.
        if inner.contains(']') || inner.contains('\n') {
            search_from = inner_start;
            continue;
        }
        let title = inner.trim();
        if title.is_empty() {
            search_from = inner_start + close + 2;
            continue;
        }
        return Some((&text[..start], title, &text[inner_start + close + 2..]));
    }
}

/// Produce the HTML for one marker: an internal link when resolved, a styled
/// placeholder span when not.
fn marker_html(title: &str, links: &ResolvedLinks) -> String {
    match links.get(&normalize_title(title)) {
        Some(id) => format!(
            r#"<a href="/article/{id}" class="wiki-link">{}</a>"#,
            escape_html(title)
        ),
        None => format!(
            r#"<span class="wiki-link-missing" title="Article &quot;{}&quot; does not exist yet">{}</span>"#,
            escape_html(title),
            escape_html(title)
        ),
    }
}

/// Minimal HTML escape for text and double-quoted attribute values.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
