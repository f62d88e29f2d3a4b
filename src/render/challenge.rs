use super::escape;
use crate::parser::lines::{classify_lines, Marker};

const HINT_PREFIX: &str = "ヒント";
const PRACTICE_PHRASE: &str = "もっと練習";
const PRACTICE_CTA: &str = "<p class=\"challenge-cta\"><a href=\"/listening/\">→ もっと練習したい？リスニングクイズで毎日トレーニング</a></p>";

pub fn render(content: &str) -> String {
    let mut parts = vec!["<div class=\"challenge-box\">".to_string()];

    for line in classify_lines(content) {
        let html = match line.marker {
            Marker::Prompt => format!("<p class=\"challenge-prompt\">{}</p>", escape(line.text)),
            Marker::Bracketed => format!("<p class=\"challenge-sentence\">{}</p>", escape(line.text)),
            Marker::Arrow if line.text.starts_with(HINT_PREFIX) => {
                format!("<p class=\"challenge-hint\">{}</p>", escape(line.text))
            }
            // Wording varies between documents; the link is always the same.
            _ if line.raw.contains(PRACTICE_PHRASE) => PRACTICE_CTA.to_string(),
            _ => format!("<p>{}</p>", escape(line.raw)),
        };
        parts.push(html);
    }

    parts.push("</div>".to_string());
    parts.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHALLENGE: &str = "💬 次の日本語を英語にしてみよう\n\
        「明日は雨らしいから、言っておくね。」\n\
        → ヒント: Heads up で始めてみよう\n\
        → もっと練習したい？リスニングクイズへ";

    #[test]
    fn four_styles_in_order() {
        let html = render(CHALLENGE);
        let lines: Vec<&str> = html.lines().collect();
        assert_eq!(lines[0], "<div class=\"challenge-box\">");
        assert_eq!(lines[1], "<p class=\"challenge-prompt\">次の日本語を英語にしてみよう</p>");
        assert_eq!(lines[2], "<p class=\"challenge-sentence\">「明日は雨らしいから、言っておくね。」</p>");
        assert_eq!(lines[3], "<p class=\"challenge-hint\">ヒント: Heads up で始めてみよう</p>");
        assert_eq!(lines[4], PRACTICE_CTA);
        assert_eq!(lines[5], "</div>");
    }

    #[test]
    fn practice_wording_ignored() {
        let a = render("もっと練習しよう！");
        let b = render("👉 毎日もっと練習したい人はこちら <b>now</b>");
        assert!(a.contains(PRACTICE_CTA));
        assert!(b.contains(PRACTICE_CTA));
        assert!(!b.contains("now"));
    }

    #[test]
    fn hint_with_or_without_space() {
        let spaced = render("→ ヒント: start with Heads up");
        let tight = render("→ヒント: start with Heads up");
        assert!(spaced.contains("<p class=\"challenge-hint\">ヒント: start with Heads up</p>"));
        assert_eq!(spaced, tight);
    }

    #[test]
    fn plain_arrow_is_paragraph() {
        let html = render("→ Answer: Heads up, it's going to rain.");
        assert!(html.contains("<p>→ Answer: Heads up, it&apos;s going to rain.</p>"));
    }

    #[test]
    fn other_lines_plain() {
        assert!(render("Try it out").contains("<p>Try it out</p>"));
    }
}
