use crate::config::{Settings, PHRASES_PATH};
use crate::parser::meta::DocumentMeta;
use crate::render::escape;
use crate::shell::{IndexParts, PageShell};

const ELLIPSIS: char = '…';

/// One entry on the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexCard {
    pub slug: String,
    pub h1: String,
    pub description: String,
    pub primary_keyword: String,
}

impl IndexCard {
    /// `None` for documents without a slug.
    pub fn from_meta(meta: &DocumentMeta, budget: usize) -> Option<Self> {
        let slug = meta.slug.clone()?;
        Some(IndexCard {
            h1: meta.h1.clone().unwrap_or_else(|| slug.clone()),
            description: truncate(meta.description.as_deref().unwrap_or_default(), budget),
            primary_keyword: meta.primary_keyword.clone().unwrap_or_default(),
            slug,
        })
    }

    fn render(&self) -> String {
        format!(
            r#"<a href="{path}{slug}/" class="phrase-card">
  <div class="phrase-card-keyword">{keyword}</div>
  <div class="phrase-card-title">{title}</div>
  <div class="phrase-card-desc">{desc}</div>
</a>"#,
            path = PHRASES_PATH,
            slug = escape(&self.slug),
            keyword = escape(&self.primary_keyword),
            title = escape(&self.h1),
            desc = escape(&self.description),
        )
    }
}

/// Cut to `budget` characters plus an ellipsis; untouched when it already fits.
pub fn truncate(s: &str, budget: usize) -> String {
    if s.chars().count() <= budget {
        s.to_string()
    } else {
        let mut truncated: String = s.chars().take(budget).collect();
        truncated.push(ELLIPSIS);
        truncated
    }
}

/// Cards sorted by slug. Equal slugs keep their input order.
pub fn build_cards(metas: &[DocumentMeta], budget: usize) -> Vec<IndexCard> {
    let mut cards: Vec<IndexCard> = metas
        .iter()
        .filter_map(|m| IndexCard::from_meta(m, budget))
        .collect();
    cards.sort_by(|a, b| a.slug.cmp(&b.slug));
    cards
}

pub fn render_index(metas: &[DocumentMeta], settings: &Settings, shell: &dyn PageShell) -> String {
    let cards = build_cards(metas, settings.description_budget);
    let count = cards.len();

    let listing = cards
        .iter()
        .map(IndexCard::render)
        .collect::<Vec<_>>()
        .join("\n");
    let hero = format!(
        r#"<section class="phrases-hero">
  <div class="container">
    <h1>ネイティブ英語フレーズ集</h1>
    <p>日常・ビジネスで使われる{count}のリアルな英語表現。例文・使い方・類似表現との違いを徹底解説。</p>
  </div>
</section>"#
    );
    let title = format!("ネイティブ英語フレーズ集{}選 | {}", count, settings.site_name);
    let description = format!(
        "ネイティブが日常・ビジネスで使う英語フレーズ{}選。日本の教科書には出てこないリアルな表現を例文・解説付きで紹介。",
        count
    );

    shell.index(&IndexParts {
        title: &title,
        description: &description,
        canonical_url: &settings.listing_url(),
        hero_html: &hero,
        listing_html: &listing,
    })
}
