pub mod lines;
pub mod meta;
pub mod sections;

use meta::DocumentMeta;
use sections::Section;

/// A source document split into its three parts.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub meta: DocumentMeta,
    pub structured_data: String,
    pub sections: Vec<Section>,
}

/// Metadata block, structured-data block, then the body's sections.
/// CRLF line endings are folded to `\n` first; every pattern below expects `\n`.
pub fn parse_document(text: &str) -> ParsedDocument {
    let text = text.replace("\r\n", "\n");
    ParsedDocument {
        meta: meta::extract_meta(&text),
        structured_data: meta::extract_structured_data(&text),
        sections: sections::segment_body(meta::extract_body(&text)),
    }
}
