use tracing::warn;

use crate::config::{Settings, PHRASES_PATH};
use crate::error::DocumentError;
use crate::parser::meta::DocumentMeta;
use crate::parser::sections::BlockKind;
use crate::parser::{parse_document, ParsedDocument};
use crate::render::{escape, render_section};
use crate::shell::{PageParts, PageShell};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub id: String,
    pub header: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub id: String,
    pub header: String,
    pub kind: BlockKind,
    pub html: String,
}

/// Everything a page is built from, derived once from the source document.
#[derive(Debug, Clone)]
pub struct PageModel {
    pub meta: DocumentMeta,
    pub structured_data: String,
    pub toc: Vec<TocEntry>,
    pub sections: Vec<RenderedSection>,
}

/// Anchor id for the section at 1-based `position`.
pub fn section_id(position: usize) -> String {
    format!("sec-{}", position)
}

pub fn build_model(doc: ParsedDocument) -> PageModel {
    let mut toc = Vec::with_capacity(doc.sections.len());
    let mut sections = Vec::with_capacity(doc.sections.len());

    for (i, section) in doc.sections.iter().enumerate() {
        let id = section_id(i + 1);
        let kind = BlockKind::classify(&section.header);
        toc.push(TocEntry {
            id: id.clone(),
            header: section.header.clone(),
        });
        sections.push(RenderedSection {
            html: render_section(kind, &section.header, &section.content, &id),
            id,
            header: section.header.clone(),
            kind,
        });
    }

    PageModel {
        meta: doc.meta,
        structured_data: doc.structured_data,
        toc,
        sections,
    }
}

/// Rewrite the source brand and make sure the site suffix appears exactly once.
pub fn compose_title(title: &str, settings: &Settings) -> String {
    let suffix = format!("| {}", settings.site_name);
    let title = title.replace(&format!("- {}", settings.brand_alias), &suffix);
    if title.contains(&suffix) {
        title
    } else {
        format!("{} {}", title, suffix).trim_start().to_string()
    }
}

/// Empty when there are no sections.
pub fn render_toc(entries: &[TocEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let items: String = entries
        .iter()
        .map(|e| format!("<li><a href=\"#{}\">{}</a></li>", e.id, escape(&e.header)))
        .collect();
    format!("<div class=\"toc\"><h4>目次</h4><ol>{}</ol></div>", items)
}

/// Structured data ready for a `<script>` element: brand rewritten, `</` and
/// `<!--` neutralised so the text can neither close the element nor switch the
/// parser into its escaped state.
pub fn embed_structured_data(raw: &str, settings: &Settings) -> String {
    if raw.is_empty() {
        return String::new();
    }
    if let Err(e) = serde_json::from_str::<serde_json::Value>(raw) {
        warn!(error = %e, "Structured data is not valid JSON; embedding verbatim");
    }
    raw.replace(&settings.brand_alias, &settings.site_name)
        .replace("</", "<\\/")
        .replace("<!--", "<\\!--")
}

/// The slug becomes both a URL segment and an output directory name, so it
/// must be one plain segment.
pub fn validate_slug(slug: &str) -> Result<&str, DocumentError> {
    let valid = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(slug)
    } else {
        Err(DocumentError::InvalidSlug(slug.to_string()))
    }
}

fn sidebar_html() -> String {
    format!(
        r#"<div class="sidebar-widget">
        <h4>🎧 リスニングで使えるようにしよう</h4>
        <p>フレーズを覚えたら、実際の音声で定着させよう。</p>
        <a href="/listening/" class="sidebar-cta">リスニングクイズで練習する →</a>
      </div>
      <div class="sidebar-widget">
        <h4>フレーズ集一覧</h4>
        <a href="{PHRASES_PATH}">→ フレーズ集トップへ</a>
      </div>"#
    )
}

/// Render the full page. A document without a slug is skipped here, before
/// any chrome is produced; one with an unusable slug fails.
pub fn assemble(
    model: &PageModel,
    settings: &Settings,
    shell: &dyn PageShell,
) -> Result<String, DocumentError> {
    let slug = model.meta.slug.as_deref().ok_or(DocumentError::MissingSlug)?;
    let slug = validate_slug(slug)?;

    let heading = model.meta.heading();
    let raw_title = model.meta.title.as_deref().unwrap_or(heading);
    let title = compose_title(raw_title, settings);
    let description = model.meta.description.as_deref().unwrap_or_default();
    let canonical = settings.canonical_url(slug);
    let structured_data = embed_structured_data(&model.structured_data, settings);
    let toc_html = render_toc(&model.toc);

    let mut body_html = format!("<h1>{}</h1>\n", escape(heading));
    for section in &model.sections {
        body_html.push_str(&section.html);
        body_html.push('\n');
    }

    Ok(shell.page(&PageParts {
        title: &title,
        description,
        canonical_url: &canonical,
        structured_data: &structured_data,
        heading,
        toc_html: &toc_html,
        body_html: &body_html,
        sidebar_html: &sidebar_html(),
    }))
}

/// Parse and render one source document, returning its metadata with the page.
pub fn render_document(
    text: &str,
    settings: &Settings,
    shell: &dyn PageShell,
) -> Result<(DocumentMeta, String), DocumentError> {
    let model = build_model(parse_document(text));
    let html = assemble(&model, settings, shell)?;
    Ok((model.meta, html))
}
