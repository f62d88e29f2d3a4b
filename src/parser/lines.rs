/// Leading marker recognised on a content line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Pin,
    Check,
    Cross,
    Go,
    Stop,
    Prompt,
    Arrow,
    Bracketed,
    Plain,
}

/// One non-blank content line, tagged by its marker.
///
/// `text` is the line with the marker removed and trimmed; `raw` is the whole
/// trimmed line, kept for renderers that don't own the marker and fall back to
/// a plain paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub marker: Marker,
    pub text: &'a str,
    pub raw: &'a str,
}

const MARKERS: &[(char, Marker)] = &[
    ('📍', Marker::Pin),
    ('✅', Marker::Check),
    ('✓', Marker::Check),
    ('❌', Marker::Cross),
    ('✗', Marker::Cross),
    ('🟢', Marker::Go),
    ('🔴', Marker::Stop),
    ('💬', Marker::Prompt),
    ('→', Marker::Arrow),
];

/// Emoji presentation selector that sometimes trails a marker.
const VARIATION_SELECTOR: char = '\u{FE0F}';

pub fn classify_line(line: &str) -> Line<'_> {
    let raw = line.trim();

    for (ch, marker) in MARKERS {
        if let Some(rest) = raw.strip_prefix(*ch) {
            return Line {
                marker: *marker,
                text: rest.trim_start_matches(VARIATION_SELECTOR).trim(),
                raw,
            };
        }
    }

    let marker = if raw.starts_with('「') && raw.ends_with('」') {
        Marker::Bracketed
    } else {
        Marker::Plain
    };
    Line {
        marker,
        text: raw,
        raw,
    }
}

/// Classify every non-blank line of `content`, preserving order.
pub fn classify_lines(content: &str) -> Vec<Line<'_>> {
    content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(classify_line)
        .collect()
}
