pub mod challenge;
pub mod differences;
pub mod marked;
pub mod paragraphs;
pub mod related;
pub mod scenes;

use std::borrow::Cow;

use crate::parser::sections::BlockKind;

/// The one escape applied to source-derived text before it reaches HTML.
/// Covers `& < > " '`.
pub fn escape(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}

/// `<h2>` anchor plus the block body for one section.
pub fn render_section(kind: BlockKind, header: &str, content: &str, id: &str) -> String {
    format!(
        "<h2 id=\"{}\">{}</h2>\n{}",
        id,
        escape(header),
        render_block(kind, content)
    )
}

pub fn render_block(kind: BlockKind, content: &str) -> String {
    match kind {
        BlockKind::Summary => summary(content),
        BlockKind::SceneExamples => scenes::render(content),
        BlockKind::BeforeAfter => marked::before_after(content),
        BlockKind::Differences => differences::render(content),
        BlockKind::UsageNotes => marked::usage_notes(content),
        BlockKind::Challenge => challenge::render(content),
        BlockKind::RelatedLinks => related::render(content),
        BlockKind::Generic => paragraphs::render(content),
    }
}

fn summary(content: &str) -> String {
    format!("<div class=\"phrase-summary\">{}</div>\n", escape(content.trim()))
}
