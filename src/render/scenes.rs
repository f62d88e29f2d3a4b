use std::sync::LazyLock;

use regex::Regex;

use super::{escape, paragraphs};
use crate::parser::lines::{classify_line, classify_lines, Marker};

const PIN: char = '📍';

static TRANSLATION_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\n?（和訳）\n").unwrap());
static TRAILING_RULE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n---\s*$").unwrap());
static DIALOGUE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([A-Z]): (.+)$").unwrap());

/// 📍-introduced scenes: title line, dialogue, optional `（和訳）` translation.
/// Text before the first pin renders as paragraphs.
pub fn render(content: &str) -> String {
    let mut parts = Vec::new();

    for chunk in split_scenes(content) {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        if chunk.starts_with(PIN) {
            parts.push(render_scene(chunk));
        } else {
            parts.push(paragraphs::render(chunk).trim_end().to_string());
        }
    }

    parts.join("\n") + "\n"
}

/// Cut before every pin; the text ahead of the first one is its own chunk.
fn split_scenes(content: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut last = 0;
    for (i, _) in content.match_indices(PIN) {
        if i > last {
            chunks.push(&content[last..i]);
        }
        last = i;
    }
    chunks.push(&content[last..]);
    chunks
}

fn render_scene(chunk: &str) -> String {
    let (first, rest) = chunk.split_once('\n').unwrap_or((chunk, ""));
    let title = classify_line(first);
    debug_assert_eq!(title.marker, Marker::Pin);

    let mut halves = TRANSLATION_SPLIT_RE.splitn(rest.trim(), 2);
    let dialogue = strip_trailing_rule(halves.next().unwrap_or_default());
    let translation = strip_trailing_rule(halves.next().unwrap_or_default());

    let mut parts = vec![
        "<div class=\"scenario-block\">".to_string(),
        format!("<p class=\"scenario-title\">{}</p>", escape(title.text)),
        "<div class=\"dialogue\">".to_string(),
        render_dialogue(dialogue),
        "</div>".to_string(),
    ];
    if !translation.is_empty() {
        parts.push("<div class=\"ja-translation\">".to_string());
        parts.push(render_dialogue(translation));
        parts.push("</div>".to_string());
    }
    parts.push("</div>".to_string());
    parts.join("\n")
}

fn strip_trailing_rule(text: &str) -> &str {
    let text = text.trim();
    match TRAILING_RULE_RE.find(text) {
        Some(m) => text[..m.start()].trim(),
        None => text,
    }
}

/// `X: text` lines become speaker/speech pairs; anything else is a paragraph.
fn render_dialogue(text: &str) -> String {
    classify_lines(text)
        .into_iter()
        .map(|line| match DIALOGUE_RE.captures(line.raw) {
            Some(caps) if line.marker == Marker::Plain => format!(
                "<div class=\"dialogue-line\"><span class=\"speaker\">{}:</span> <span class=\"speech\">{}</span></div>",
                escape(&caps[1]),
                escape(caps[2].trim())
            ),
            _ => format!("<p>{}</p>", escape(line.raw)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
