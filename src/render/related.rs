use std::sync::LazyLock;

use regex::Regex;

use super::escape;

/// Lead-in lines that only introduce the list.
const HEADING_LEADS: &[&str] = &["この表現と", "このカテゴリ"];
/// Content outside the phrase collection; such lines are dropped.
const OUT_OF_SCOPE_PATH: &str = "/blog/";

static PHRASE_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^"?([^"→]+?)"? の意味・使い方 → (/real-phrases/\S+)"#).unwrap()
});

pub fn render(content: &str) -> String {
    let mut parts = vec!["<div class=\"related-phrases\"><ul>".to_string()];

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || HEADING_LEADS.iter().any(|lead| line.starts_with(lead)) {
            continue;
        }
        let line = line.strip_prefix('-').map(str::trim).unwrap_or(line);

        if let Some(caps) = PHRASE_LINK_RE.captures(line) {
            let phrase = caps[1].trim().trim_matches('"');
            let href = format!("{}/", caps[2].trim_end_matches('/'));
            parts.push(format!(
                "<li><a href=\"{}\">{} の意味・使い方</a></li>",
                escape(&href),
                escape(phrase)
            ));
        } else if line.contains(OUT_OF_SCOPE_PATH) {
            continue;
        } else if !line.is_empty() {
            parts.push(format!("<li>{}</li>", escape(line)));
        }
    }

    parts.push("</ul></div>".to_string());
    parts.join("\n") + "\n"
}
