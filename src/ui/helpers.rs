//! Shared rendering utilities and helpers.
//!
//! Components write ANSI-styled text into a frame `String` instead of printing
//! directly; the renderer prints the finished frame once. This module holds the
//! low-level pieces they share: cursor positioning, query match highlighting,
//! word wrapping, and the HTML-to-text conversion used by the article page.
//!
//! All width and index arithmetic operates on characters, not bytes.

use crate::ui::theme::Theme;

/// Appends a cursor move to `row`/`col` (1-indexed).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Appends `count` spaces.
pub fn pad(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}

/// Number of characters in `text`.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` characters, marking the cut with `…`.
///
/// ```
/// use inkpane::ui::helpers::truncate;
///
/// assert_eq!(truncate("inkpane", 10), "inkpane");
/// assert_eq!(truncate("inkpane", 4), "ink…");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Removes ANSI escape sequences, leaving the visible text.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // CSI: ESC [ params final-byte
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Character ranges of non-overlapping, case-insensitive occurrences of
/// `query` in `text`.
///
/// ```
/// use inkpane::ui::helpers::match_ranges;
///
/// assert_eq!(match_ranges("Design for design", "DESIGN"), vec![(0, 6), (11, 17)]);
/// assert!(match_ranges("anything", "").is_empty());
/// ```
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let haystack: Vec<char> = text.chars().collect();
    let needle: Vec<char> = query.chars().collect();
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }

    let same = |a: char, b: char| a == b || a.to_lowercase().eq(b.to_lowercase());

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()]
            .iter()
            .zip(&needle)
            .all(|(&a, &b)| same(a, b))
        {
            ranges.push((i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Appends `text` with the given character ranges highlighted.
///
/// `restore` is the styling re-applied after each highlighted section, so the
/// rest of the line keeps its colors. Selected rows skip highlighting to avoid
/// fighting the selection background.
pub fn push_highlighted(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    restore: &str,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            out.extend(&chars[current_pos..start]);
        }

        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(restore);

        current_pos = end;
    }

    if current_pos < chars.len() {
        out.extend(&chars[current_pos..]);
    }
}

/// Greedy word wrap to `max` characters per line. Words longer than a line
/// are split.
#[must_use]
pub fn wrap(text: &str, max: usize) -> Vec<String> {
    let max = max.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while width(&word) > max {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let head: String = word.chars().take(max).collect();
            word = word.chars().skip(max).collect();
            lines.push(head);
        }

        let needed = if line.is_empty() { width(&word) } else { width(&line) + 1 + width(&word) };
        if needed > max && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// A block of article text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    Paragraph(String),
}

const BLOCK_TAGS: &[&str] = &["p", "div", "li", "br", "ul", "ol", "blockquote", "h1", "h2", "h3", "h4", "h5", "h6"];

/// Converts article HTML into headings and paragraphs.
///
/// Block-level tags split the text; inline tags are dropped; the common
/// entities are decoded. Anything that does not parse as a tag is kept as text.
///
/// ```
/// use inkpane::ui::helpers::{html_to_blocks, Block};
///
/// let blocks = html_to_blocks("<h2>Intro</h2><p>Rust &amp; <em>Zellij</em></p>");
/// assert_eq!(blocks, vec![
///     Block::Heading("Intro".to_string()),
///     Block::Paragraph("Rust & Zellij".to_string()),
/// ]);
/// ```
#[must_use]
pub fn html_to_blocks(html: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut text = String::new();
    let mut heading = false;
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        let Some(close) = rest[open..].find('>') else {
            text.push_str(&rest[open..]);
            rest = "";
            break;
        };

        let tag = &rest[open + 1..open + close];
        let name = tag
            .trim_start_matches('/')
            .split(|c: char| c.is_whitespace() || c == '/')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        if BLOCK_TAGS.contains(&name.as_str()) {
            flush_block(&mut text, heading, &mut blocks);
            heading = !tag.starts_with('/') && name.starts_with('h') && name.len() == 2;
            if name == "li" && !tag.starts_with('/') {
                text.push_str("• ");
            }
        }

        rest = &rest[open + close + 1..];
    }
    text.push_str(rest);
    flush_block(&mut text, heading, &mut blocks);

    blocks
}

fn flush_block(text: &mut String, heading: bool, blocks: &mut Vec<Block>) {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    text.clear();
    if collapsed.is_empty() {
        return;
    }
    let collapsed = decode_entities(&collapsed);
    blocks.push(if heading { Block::Heading(collapsed) } else { Block::Paragraph(collapsed) });
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_ansi_keeps_visible_text() {
        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted(&mut out, "Mastering CSS", &[(10, 13)], &theme, "", false);
        assert_ne!(out, "Mastering CSS");
        assert_eq!(strip_ansi(&out), "Mastering CSS");
    }

    #[test]
    fn selected_rows_are_not_highlighted() {
        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted(&mut out, "abc", &[(0, 1)], &theme, "", true);
        assert_eq!(out, "abc");
    }

    #[test]
    fn match_ranges_handle_multibyte_text() {
        assert_eq!(match_ranges("café Café", "CAFÉ"), vec![(0, 4), (5, 9)]);
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
        assert!(lines.iter().all(|l| width(l) <= 10));
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert!(wrap("   ", 5).is_empty());
    }

    #[test]
    fn list_items_get_bullets() {
        let blocks = html_to_blocks("<ul><li>one</li><li>two</li></ul>");
        assert_eq!(
            blocks,
            vec![Block::Paragraph("• one".to_string()), Block::Paragraph("• two".to_string())]
        );
    }

    #[test]
    fn unterminated_tag_is_text() {
        assert_eq!(html_to_blocks("a < b"), vec![Block::Paragraph("a < b".to_string())]);
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("héllo wörld", 6), "héllo…");
        assert_eq!(truncate("abc", 0), "");
    }
}
