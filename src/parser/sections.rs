/// One `##`-delimited chunk of the body. `header` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub header: String,
    pub content: String,
}

/// Which renderer owns a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Summary,
    SceneExamples,
    BeforeAfter,
    Differences,
    UsageNotes,
    Challenge,
    RelatedLinks,
    Generic,
}

impl BlockKind {
    /// Map a header to its kind. Tests run in a fixed order and the first hit
    /// wins; anything unrecognised is `Generic`.
    pub fn classify(header: &str) -> BlockKind {
        match header {
            h if h.contains("一言で言うと") => BlockKind::Summary,
            h if h.contains("リアル例文") => BlockKind::SceneExamples,
            h if h.contains("Before") && h.contains("After") => BlockKind::BeforeAfter,
            h if h.contains("似た表現") => BlockKind::Differences,
            h if h.contains("使うときの注意") => BlockKind::UsageNotes,
            h if h.contains("瞬間英作文") => BlockKind::Challenge,
            h if h.contains("関連表現") => BlockKind::RelatedLinks,
            _ => BlockKind::Generic,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Summary => "summary",
            BlockKind::SceneExamples => "scene_examples",
            BlockKind::BeforeAfter => "before_after",
            BlockKind::Differences => "differences",
            BlockKind::UsageNotes => "usage_notes",
            BlockKind::Challenge => "challenge",
            BlockKind::RelatedLinks => "related_links",
            BlockKind::Generic => "generic",
        }
    }
}

/// Split a body into sections at `## ` boundaries.
///
/// The first line of each chunk (with any leading `#`s removed) is the header
/// and the rest is content. Empty chunks and chunks whose header is blank are
/// dropped.
pub fn segment_body(body: &str) -> Vec<Section> {
    let mut sections = Vec::new();

    for part in body.split("\n## ") {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let (first, rest) = part.split_once('\n').unwrap_or((part, ""));
        let header = first.trim().trim_start_matches('#').trim();
        if header.is_empty() {
            continue;
        }

        sections.push(Section {
            header: header.to_string(),
            content: rest.trim().to_string(),
        });
    }

    sections
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::meta::extract_body;

    #[test]
    fn every_label() {
        let cases = [
            ("一言で言うと", BlockKind::Summary),
            ("リアル例文", BlockKind::SceneExamples),
            ("Before → After", BlockKind::BeforeAfter),
            ("似た表現との違い", BlockKind::Differences),
            ("使うときの注意", BlockKind::UsageNotes),
            ("瞬間英作文チャレンジ", BlockKind::Challenge),
            ("関連表現", BlockKind::RelatedLinks),
            ("どんな場面で使う？", BlockKind::Generic),
        ];
        for (header, kind) in cases {
            assert_eq!(BlockKind::classify(header), kind, "header {header:?}");
        }
    }

    #[test]
    fn before_alone_is_generic() {
        assert_eq!(BlockKind::classify("Before you start"), BlockKind::Generic);
    }

    #[test]
    fn earlier_label_wins() {
        assert_eq!(
            BlockKind::classify("一言で言うと：リアル例文つき"),
            BlockKind::Summary
        );
        assert_eq!(
            BlockKind::classify("リアル例文 Before/After"),
            BlockKind::SceneExamples
        );
        assert_eq!(
            BlockKind::classify("Before/After と似た表現"),
            BlockKind::BeforeAfter
        );
        assert_eq!(
            BlockKind::classify("似た表現と使うときの注意"),
            BlockKind::Differences
        );
        assert_eq!(
            BlockKind::classify("使うときの注意と瞬間英作文"),
            BlockKind::UsageNotes
        );
        assert_eq!(
            BlockKind::classify("瞬間英作文で関連表現を練習"),
            BlockKind::Challenge
        );
    }

    #[test]
    fn classification_is_stable() {
        let header = "リアル例文（職場編）";
        assert_eq!(BlockKind::classify(header), BlockKind::classify(header));
    }

    #[test]
    fn splits_in_order() {
        let sections = segment_body("## First\none\n\n## Second\ntwo\nlines");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].header, "First");
        assert_eq!(sections[0].content, "one");
        assert_eq!(sections[1].header, "Second");
        assert_eq!(sections[1].content, "two\nlines");
    }

    #[test]
    fn deeper_headings_stay_in_content() {
        let sections = segment_body("## Outer\n### Inner\ntext");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, "### Inner\ntext");
    }

    #[test]
    fn no_boundary_single_section() {
        let sections = segment_body("Just a line\nand another");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].header, "Just a line");
        assert_eq!(sections[0].content, "and another");
    }

    #[test]
    fn empty_body() {
        assert!(segment_body("").is_empty());
        assert!(segment_body("  \n\n ").is_empty());
    }

    #[test]
    fn blank_header_dropped() {
        let sections = segment_body("## Kept\nbody\n## \n\n## ##\norphan");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].header, "Kept");
    }

    #[test]
    fn header_without_content() {
        let sections = segment_body("## Lonely");
        assert_eq!(sections[0].header, "Lonely");
        assert!(sections[0].content.is_empty());
    }

    #[test]
    fn fixture_sections() {
        let text = std::fs::read_to_string("tests/fixtures/heads-up.md").unwrap();
        let sections = segment_body(extract_body(&text));
        let kinds: Vec<BlockKind> = sections
            .iter()
            .map(|s| BlockKind::classify(&s.header))
            .collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Summary,
                BlockKind::Generic,
                BlockKind::SceneExamples,
                BlockKind::BeforeAfter,
                BlockKind::Differences,
                BlockKind::UsageNotes,
                BlockKind::Challenge,
                BlockKind::RelatedLinks,
            ]
        );
    }
}
