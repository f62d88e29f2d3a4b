use super::escape;
use crate::parser::lines::{classify_lines, Marker};

/// How one marker renders: element name and CSS class.
type Style = (Marker, &'static str, &'static str);

const BEFORE_AFTER: &[Style] = &[
    (Marker::Cross, "div", "ba-bad"),
    (Marker::Check, "div", "ba-good"),
    (Marker::Arrow, "p", "ba-note"),
];

const USAGE_NOTES: &[Style] = &[
    (Marker::Go, "div", "usage-ok"),
    (Marker::Stop, "div", "usage-ng"),
    (Marker::Arrow, "p", "usage-note"),
];

/// ❌/✅/→ lines as bad/good/note.
pub fn before_after(content: &str) -> String {
    styled_lines(content, "before-after", BEFORE_AFTER)
}

/// 🟢/🔴/→ lines as ok/ng/note.
pub fn usage_notes(content: &str) -> String {
    styled_lines(content, "usage-notes", USAGE_NOTES)
}

fn styled_lines(content: &str, wrapper: &str, styles: &[Style]) -> String {
    let mut parts = vec![format!("<div class=\"{}\">", wrapper)];

    for line in classify_lines(content) {
        match styles.iter().find(|(m, _, _)| *m == line.marker) {
            Some((_, tag, class)) => parts.push(format!(
                "<{tag} class=\"{class}\">{}</{tag}>",
                escape(line.text)
            )),
            None => parts.push(format!("<p>{}</p>", escape(line.raw))),
        }
    }

    parts.push("</div>".to_string());
    parts.join("\n") + "\n"
}
