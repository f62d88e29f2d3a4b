use super::escape;

/// Blank-line-delimited runs of lines become one `<p>` each, lines joined by a
/// single space.
pub fn render(text: &str) -> String {
    let mut paragraphs = Vec::new();
    let mut buf: Vec<String> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !buf.is_empty() {
                paragraphs.push(format!("<p>{}</p>", buf.join(" ")));
                buf.clear();
            }
            continue;
        }
        buf.push(escape(line).into_owned());
    }
    if !buf.is_empty() {
        paragraphs.push(format!("<p>{}</p>", buf.join(" ")));
    }

    if paragraphs.is_empty() {
        return String::new();
    }
    paragraphs.join("\n") + "\n"
}
