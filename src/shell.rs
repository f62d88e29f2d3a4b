//! Page chrome around the rendered body.
//!
//! The assemblers only produce the document-specific fragments; everything
//! site-wide (head, navigation, footer, stylesheet) comes from a [`PageShell`].

use chrono::Datelike;

use crate::config::{Settings, PHRASES_PATH};
use crate::render::escape;

const STYLESHEET: &str = include_str!("../assets/site.css");

const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "ランキング"),
    ("/articles/", "学習コラム"),
    (PHRASES_PATH, "フレーズ集"),
    ("/listening/", "リスニングクイズ"),
];

/// Fragments of one phrase page.
///
/// `title`, `description`, `canonical_url` and `heading` are plain text and must
/// be escaped by the shell. The `*_html` fields are finished markup.
/// `structured_data` is script content, already safe to embed.
#[derive(Debug, Clone, Copy)]
pub struct PageParts<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub canonical_url: &'a str,
    pub structured_data: &'a str,
    pub heading: &'a str,
    pub toc_html: &'a str,
    pub body_html: &'a str,
    pub sidebar_html: &'a str,
}

/// Fragments of the listing page. Same escaping rules as [`PageParts`].
#[derive(Debug, Clone, Copy)]
pub struct IndexParts<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub canonical_url: &'a str,
    pub hero_html: &'a str,
    pub listing_html: &'a str,
}

pub trait PageShell {
    fn page(&self, parts: &PageParts<'_>) -> String;
    fn index(&self, parts: &IndexParts<'_>) -> String;
}

/// The site's own chrome.
#[derive(Debug, Clone)]
pub struct SiteShell {
    site_name: String,
    year: i32,
}

impl SiteShell {
    pub fn new(settings: &Settings) -> Self {
        SiteShell {
            site_name: settings.site_name.clone(),
            year: chrono::Local::now().year(),
        }
    }

    fn head(&self, title: &str, description: &str, canonical: &str, og_type: &str) -> String {
        format!(
            r#"<meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <link rel="icon" type="image/svg+xml" href="/favicon.svg">
  <title>{title}</title>
  <meta name="description" content="{description}">
  <link rel="canonical" href="{canonical}">
  <meta property="og:title" content="{title}">
  <meta property="og:description" content="{description}">
  <meta property="og:type" content="{og_type}">
  <meta property="og:url" content="{canonical}">
  <meta property="og:site_name" content="{site}">
  <meta name="twitter:card" content="summary">"#,
            title = escape(title),
            description = escape(description),
            canonical = escape(canonical),
            og_type = og_type,
            site = escape(&self.site_name),
        )
    }

    fn header(&self) -> String {
        let links: String = NAV_ITEMS
            .iter()
            .map(|(href, label)| {
                let active = if *href == PHRASES_PATH { " class=\"active\"" } else { "" };
                format!("<a href=\"{href}\"{active}>{label}</a>")
            })
            .collect();
        format!(
            "<header class=\"site-header\">\n  <div class=\"container\">\n    <a href=\"/\" class=\"logo\">{}</a>\n    <nav>{}</nav>\n  </div>\n</header>",
            escape(&self.site_name),
            links
        )
    }

    fn footer(&self) -> String {
        format!(
            r#"<footer class="site-footer">
  <div class="container">
    <ul>
      <li><a href="/articles/">学習コラム一覧</a></li>
      <li><a href="{PHRASES_PATH}">フレーズ集</a></li>
      <li><a href="/listening/">リスニングクイズ</a></li>
      <li><a href="/">ランキングTOP</a></li>
    </ul>
    <div class="footer-bottom">
      <p>© {year} {site}. All rights reserved.</p>
    </div>
  </div>
</footer>"#,
            year = self.year,
            site = escape(&self.site_name),
        )
    }
}

impl PageShell for SiteShell {
    fn page(&self, parts: &PageParts<'_>) -> String {
        let structured = if parts.structured_data.is_empty() {
            String::new()
        } else {
            format!(
                "<script type=\"application/ld+json\">\n{}\n</script>",
                parts.structured_data
            )
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="ja">
<head>
  {head}
  {structured}
  <style>
{css}
  </style>
</head>
<body>
{header}
<div class="breadcrumb container">
  <a href="/">ホーム</a><span>›</span>
  <a href="{PHRASES_PATH}">フレーズ集</a><span>›</span>
  {heading}
</div>
<div class="container">
  <div class="article-layout">
    <main class="article-content">
      {toc}
      {body}
      <div class="disclaimer">
        ※当サイトはアフィリエイトリンクを含みます。サービスの詳細は各社公式サイトでご確認ください。
      </div>
    </main>
    <aside class="sidebar">
      {sidebar}
    </aside>
  </div>
</div>
{footer}
</body>
</html>
"#,
            head = self.head(parts.title, parts.description, parts.canonical_url, "article"),
            structured = structured,
            css = STYLESHEET,
            header = self.header(),
            heading = escape(parts.heading),
            toc = parts.toc_html,
            body = parts.body_html,
            sidebar = parts.sidebar_html,
            footer = self.footer(),
        )
    }

    fn index(&self, parts: &IndexParts<'_>) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="ja">
<head>
  {head}
  <style>
{css}
  </style>
</head>
<body>
{header}
{hero}
<div class="container">
  <div class="phrases-grid">
{listing}
  </div>
</div>
{footer}
</body>
</html>
"#,
            head = self.head(parts.title, parts.description, parts.canonical_url, "website"),
            css = STYLESHEET,
            header = self.header(),
            hero = parts.hero_html,
            listing = parts.listing_html,
            footer = self.footer(),
        )
    }
}
