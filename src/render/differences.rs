use std::sync::LazyLock;

use regex::Regex;

use super::{escape, paragraphs};

static BLOCK_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"[^"]*" との違い"#).unwrap());
static COMPARISON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)^"([^"]+)" との違い: (.+)"#).unwrap());

/// `"X" との違い: …` blocks, one titled sub-block per compared phrase.
pub fn render(content: &str) -> String {
    let mut parts = vec!["<div class=\"differences\">".to_string()];

    for block in split_comparisons(content) {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }
        match COMPARISON_RE.captures(block) {
            Some(caps) => {
                let title = format!("\"{}\" との違い", &caps[1]);
                parts.push("<div class=\"diff-block\">".to_string());
                parts.push(format!("<p class=\"diff-title\">{}</p>", escape(&title)));
                parts.push(paragraphs::render(caps[2].trim()));
                parts.push("</div>".to_string());
            }
            None => parts.push(paragraphs::render(block)),
        }
    }

    parts.push("</div>".to_string());
    parts.join("\n") + "\n"
}

/// A new block starts at every line that opens with a quoted phrase.
fn split_comparisons(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.split('\n') {
        if BLOCK_START_RE.is_match(line) && !current.is_empty() {
            blocks.push(current.join("\n"));
            current.clear();
        }
        current.push(line);
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_block_per_phrase() {
        let html = render(
            "\"FYI\" との違い: FYI is written.\nMostly email.\n\n\"Just so you know\" との違い: Slightly defensive.",
        );
        assert_eq!(html.matches("diff-block").count(), 2);
        assert!(html.contains("<p class=\"diff-title\">&quot;FYI&quot; との違い</p>"));
        assert!(html.contains("<p>FYI is written. Mostly email.</p>"));
        assert!(html.contains("<p class=\"diff-title\">&quot;Just so you know&quot; との違い</p>"));
    }

    #[test]
    fn leading_prose_is_paragraphs() {
        let html = render("Compare these:\n\"FYI\" との違い: shorter");
        assert!(html.contains("<p>Compare these:</p>"));
        assert_eq!(html.matches("diff-block").count(), 1);
    }

    #[test]
    fn missing_colon_degrades() {
        let html = render("\"FYI\" との違い is subtle");
        assert!(!html.contains("diff-block"));
        assert!(html.contains("<p>&quot;FYI&quot; との違い is subtle</p>"));
    }

    #[test]
    fn empty_quotes_degrade() {
        let html = render("\"\" との違い: nothing");
        assert!(!html.contains("diff-block"));
    }
}
