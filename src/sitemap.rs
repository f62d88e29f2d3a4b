use std::io::Cursor;

use anyhow::Result;
use chrono::NaiveDate;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::config::Settings;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// `urlset` with the listing page followed by one `<url>` per slug.
pub fn render_sitemap(settings: &Settings, slugs: &[String], lastmod: NaiveDate) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    let lastmod = lastmod.format("%Y-%m-%d").to_string();

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    writer.write_event(Event::Start(urlset))?;

    let urls = std::iter::once(settings.listing_url())
        .chain(slugs.iter().map(|slug| settings.canonical_url(slug)));
    for loc in urls {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &loc)?;
        write_text_element(&mut writer, "lastmod", &lastmod)?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;
    let mut xml = String::from_utf8(writer.into_inner().into_inner())?;
    xml.push('\n');
    Ok(xml)
}

fn write_text_element(writer: &mut Writer<Cursor<Vec<u8>>>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_then_pages() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let xml = render_sitemap(
            &Settings::default(),
            &["fyi".to_string(), "heads-up".to_string()],
            date,
        )
        .unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert_eq!(xml.matches("<url>").count(), 3);
        assert_eq!(xml.matches("<lastmod>2026-03-01</lastmod>").count(), 3);

        let listing = xml.find("<loc>https://native-real.com/real-phrases/</loc>").unwrap();
        let fyi = xml.find("<loc>https://native-real.com/real-phrases/fyi/</loc>").unwrap();
        let heads_up = xml
            .find("<loc>https://native-real.com/real-phrases/heads-up/</loc>")
            .unwrap();
        assert!(listing < fyi && fyi < heads_up);
    }

    #[test]
    fn slugs_escaped() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let xml = render_sitemap(&Settings::default(), &["a&b".to_string()], date).unwrap();
        assert!(xml.contains("/real-phrases/a&amp;b/"));
    }
}
