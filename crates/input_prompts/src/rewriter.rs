//! Text rewriting: find delimited tags and substitute glyph references.
//!
//! `"Press [Player/Jump]"` becomes `"Press <sprite=\"Xbox\" name=\"a\">"` for
//! the default template. Replacement is a literal substring replace of
//! `open + tag + close`, so every occurrence of an identical tag receives the
//! same reference. This relies on resolution giving the same result for the
//! same tag text within one call.

use crate::dataset::GlyphRef;
use tracing::warn;

/// Placeholder replaced by the glyph id. Must occur exactly once in a template.
pub const SPRITE_TOKEN: &str = "{SPRITE}";
/// Optional placeholder replaced by the sprite sheet id.
pub const SHEET_TOKEN: &str = "{SHEET}";
/// Template used when none, or an invalid one, is configured.
pub const DEFAULT_TEMPLATE: &str = "<sprite=\"{SHEET}\" name=\"{SPRITE}\">";

/// Characters that open and close a tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagDelimiters {
    pub open: char,
    pub close: char,
}

impl Default for TagDelimiters {
    fn default() -> Self {
        Self {
            open: '[',
            close: ']',
        }
    }
}

impl TagDelimiters {
    pub fn new(open: char, close: char) -> Self {
        Self { open, close }
    }

    /// Wrap tag text in the delimiters.
    pub fn wrap(&self, tag: &str) -> String {
        format!("{}{}{}", self.open, tag, self.close)
    }

    /// Distinct tag texts in `text`, in order of first occurrence.
    ///
    /// A tag runs from an open delimiter to the next close delimiter. An open
    /// delimiter with no close after it ends the scan.
    pub fn scan<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut tags: Vec<&str> = Vec::new();
        let mut pos = 0;

        while let Some(found) = text[pos..].find(self.open) {
            let start = pos + found + self.open.len_utf8();
            let Some(len) = text[start..].find(self.close) else {
                break;
            };
            let tag = &text[start..start + len];
            if !tags.contains(&tag) {
                tags.push(tag);
            }
            pos = start + len + self.close.len_utf8();
        }

        tags
    }

    /// Replace every tag in `text` with what `replace` returns for it.
    ///
    /// `replace` is called once per distinct tag, in first-occurrence order.
    pub fn rewrite(&self, text: &str, mut replace: impl FnMut(&str) -> String) -> String {
        let mut output = text.to_string();
        for tag in self.scan(text) {
            let replacement = replace(tag);
            output = output.replace(&self.wrap(tag), &replacement);
        }
        output
    }
}

/// Formats glyph references for the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
    decoration: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            decoration: String::new(),
        }
    }
}

impl PromptTemplate {
    /// Build a template; `decoration` is appended after every reference.
    ///
    /// An empty template selects [`DEFAULT_TEMPLATE`]. A template without
    /// exactly one [`SPRITE_TOKEN`] is rejected with a warning and the default
    /// is used instead.
    pub fn new(template: &str, decoration: &str) -> Self {
        let template = if template.is_empty() {
            DEFAULT_TEMPLATE
        } else if Self::is_valid(template) {
            template
        } else {
            warn!(
                "Prompt template '{template}' must contain {SPRITE_TOKEN} exactly once, using '{DEFAULT_TEMPLATE}'"
            );
            DEFAULT_TEMPLATE
        };
        Self {
            template: template.to_string(),
            decoration: decoration.to_string(),
        }
    }

    pub fn is_valid(template: &str) -> bool {
        template.matches(SPRITE_TOKEN).count() == 1
    }

    /// The template in effect.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Reference string for one glyph.
    pub fn apply(&self, glyph: &GlyphRef) -> String {
        let mut reference = self
            .template
            .replace(SHEET_TOKEN, &glyph.sprite_sheet)
            .replace(SPRITE_TOKEN, &glyph.glyph_id);
        reference.push_str(&self.decoration);
        reference
    }

    /// Concatenated references for several glyphs, in order.
    pub fn render(&self, glyphs: &[GlyphRef]) -> String {
        glyphs.iter().map(|glyph| self.apply(glyph)).collect()
    }
}
