use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

const META_HEADER: &str = "## 1. メタ情報\n";
const META_TERMINATORS: &[&str] = &["\n---", "\n## 2."];
const BODY_HEADER: &str = "## 2. 本文\n";
const BODY_TERMINATOR: &str = "\n## 3.";

static SLUG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)\*\*slug\*\*: (.+)").unwrap());
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)\*\*title タグ\*\*: "?(.+?)"?\s*$"#).unwrap());
static DESCRIPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)\*\*meta description\*\*: (.+)").unwrap());
static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)\*\*H1\*\*: (.+)").unwrap());
static PRIMARY_KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)\*\*primary keyword\*\*: (.+)").unwrap());
static SECONDARY_KEYWORDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)\*\*secondary keywords\*\*: (.+)").unwrap());
static STRUCTURED_DATA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)## 3\. 構造化データ.*?```json\n(.*?)```").unwrap());

/// Labelled fields of the metadata block. Every field is optional; a missing
/// `slug` is the caller's reason to skip the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentMeta {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub h1: Option<String>,
    pub primary_keyword: Option<String>,
    pub secondary_keywords: Option<String>,
}

impl DocumentMeta {
    /// Visible heading, falling back to the slug.
    pub fn heading(&self) -> &str {
        self.h1
            .as_deref()
            .or(self.slug.as_deref())
            .unwrap_or_default()
    }
}

/// Pull the metadata fields out of the block between the `メタ情報` header
/// and the first `---` rule or `## 2.` header. No block, no fields.
pub fn extract_meta(text: &str) -> DocumentMeta {
    let Some(block) = meta_block(text) else {
        return DocumentMeta::default();
    };

    DocumentMeta {
        slug: field(block, &SLUG_RE),
        title: field(block, &TITLE_RE),
        description: field(block, &DESCRIPTION_RE),
        h1: field(block, &H1_RE),
        primary_keyword: field(block, &PRIMARY_KEYWORD_RE),
        secondary_keywords: field(block, &SECONDARY_KEYWORDS_RE),
    }
}

fn meta_block(text: &str) -> Option<&str> {
    let start = text.find(META_HEADER)? + META_HEADER.len();
    let rest = &text[start..];
    let end = META_TERMINATORS.iter().filter_map(|t| rest.find(t)).min()?;
    Some(&rest[..end])
}

/// First match only; surrounding whitespace and quotes are trimmed.
fn field(block: &str, re: &Regex) -> Option<String> {
    let caps = re.captures(block)?;
    let value = caps[1].trim().trim_matches('"');
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Raw JSON text of the fenced block under `構造化データ`, or empty.
pub fn extract_structured_data(text: &str) -> String {
    STRUCTURED_DATA_RE
        .captures(text)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default()
}

/// Text after the `本文` header, up to the `## 3.` header or end of input.
pub fn extract_body(text: &str) -> &str {
    let Some(start) = text.find(BODY_HEADER) else {
        return "";
    };
    let rest = &text[start + BODY_HEADER.len()..];
    let end = rest.find(BODY_TERMINATOR).unwrap_or(rest.len());
    rest[..end].trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: &str = "## 1. メタ情報\n\
        - **slug**: heads-up\n\
        - **title タグ**: \"Heads up の意味 - Native Real\"\n\
        - **meta description**: 前もって知らせる表現\n\
        - **H1**: Heads up の意味・使い方\n\
        - **primary keyword**: heads up 意味\n\
        - **secondary keywords**: heads up 使い方, heads up 例文\n\
        \n---\n\n## 2. 本文\n\n## 一言で言うと\n予告のフレーズ。\n";

    #[test]
    fn all_fields() {
        let meta = extract_meta(BLOCK);
        assert_eq!(meta.slug.as_deref(), Some("heads-up"));
        assert_eq!(meta.title.as_deref(), Some("Heads up の意味 - Native Real"));
        assert_eq!(meta.description.as_deref(), Some("前もって知らせる表現"));
        assert_eq!(meta.h1.as_deref(), Some("Heads up の意味・使い方"));
        assert_eq!(meta.primary_keyword.as_deref(), Some("heads up 意味"));
        assert_eq!(
            meta.secondary_keywords.as_deref(),
            Some("heads up 使い方, heads up 例文")
        );
    }

    #[test]
    fn first_occurrence_wins() {
        let text = "## 1. メタ情報\n**slug**: first\n**slug**: second\n---\n";
        assert_eq!(extract_meta(text).slug.as_deref(), Some("first"));
    }

    #[test]
    fn quoted_values_trimmed() {
        let text = "## 1. メタ情報\n**slug**: \"quoted\"\n**H1**:  \"Big title\"  \n## 2. 本文\n";
        let meta = extract_meta(text);
        assert_eq!(meta.slug.as_deref(), Some("quoted"));
        assert_eq!(meta.h1.as_deref(), Some("Big title"));
    }

    #[test]
    fn labels_outside_block_ignored() {
        let text = "## 1. メタ情報\n**H1**: Title\n---\n**slug**: too-late\n";
        let meta = extract_meta(text);
        assert_eq!(meta.h1.as_deref(), Some("Title"));
        assert!(meta.slug.is_none());
    }

    #[test]
    fn missing_block_is_empty() {
        assert_eq!(extract_meta("**slug**: orphan\n"), DocumentMeta::default());
    }

    #[test]
    fn unterminated_block_is_empty() {
        assert_eq!(
            extract_meta("## 1. メタ情報\n**slug**: open-ended\n"),
            DocumentMeta::default()
        );
    }

    #[test]
    fn empty_slug_is_absent() {
        let meta = extract_meta("## 1. メタ情報\n**slug**: \"\"\n---\n");
        assert!(meta.slug.is_none());
    }

    #[test]
    fn heading_falls_back_to_slug() {
        let meta = DocumentMeta {
            slug: Some("my-bad".into()),
            ..Default::default()
        };
        assert_eq!(meta.heading(), "my-bad");
    }

    #[test]
    fn body_slice() {
        let text = "intro\n## 2. 本文\n\n## A\nbody\n\n## 3. 構造化データ\n```json\n{}\n```\n";
        assert_eq!(extract_body(text), "## A\nbody");
    }

    #[test]
    fn body_runs_to_end() {
        assert_eq!(extract_body("## 2. 本文\n## A\nlast"), "## A\nlast");
        assert_eq!(extract_body("no body here"), "");
    }

    #[test]
    fn structured_data_block() {
        let text = "## 3. 構造化データ\n\nSome note\n```json\n{\"@type\": \"Article\"}\n```\n";
        assert_eq!(extract_structured_data(text), "{\"@type\": \"Article\"}");
        assert_eq!(extract_structured_data("## 3. 構造化データ\nnone"), "");
    }
}
