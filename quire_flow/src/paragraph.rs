// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styled paragraphs and per-character overrides.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use quire_region_tree::Color;

/// Horizontal alignment of lines within a container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlign {
    /// Align to the start of the line.
    #[default]
    Left,
    /// Center each line.
    Center,
    /// Align to the end of the line.
    Right,
}

/// Per-character overrides. Unset fields inherit from the paragraph.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterStyle {
    /// Glyph size as a percentage of the paragraph font size.
    pub ratio: Option<f64>,
    /// Extra space before the glyph, in thousandths of an em.
    pub kerning: Option<f64>,
    /// Baseline shift, in thousandths of an em.
    pub shift: Option<f64>,
    /// Font weight override.
    pub weight: Option<u16>,
}

impl CharacterStyle {
    /// Whether no field is overridden.
    pub fn is_empty(&self) -> bool {
        self.ratio.is_none() && self.kerning.is_none() && self.shift.is_none() && self.weight.is_none()
    }

    /// Overlay the fields set in `other` on top of `self`.
    #[must_use]
    pub fn merged(self, other: &Self) -> Self {
        Self {
            ratio: other.ratio.or(self.ratio),
            kerning: other.kerning.or(self.kerning),
            shift: other.shift.or(self.shift),
            weight: other.weight.or(self.weight),
        }
    }
}

/// A run of text with paragraph-level style.
///
/// `char_styles` runs parallel to the characters of `content` and may be
/// shorter; characters past its end have no overrides. All indices on this
/// type count `char`s, not bytes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paragraph {
    /// Font size in millimeters.
    pub font_size: f64,
    /// Line pitch as a multiple of the font size.
    pub line_height: f64,
    /// Space before the paragraph.
    pub line_before: f64,
    /// Space after the paragraph.
    pub line_after: f64,
    /// Extra advance between characters, in thousandths of an em.
    pub letter_spacing: f64,
    /// Font weight, 100 to 900.
    pub weight: u16,
    /// Line alignment.
    pub align: TextAlign,
    /// Text color.
    pub color: Color,
    /// The text.
    pub content: String,
    /// Per-character overrides.
    pub char_styles: Vec<CharacterStyle>,
}

impl Default for Paragraph {
    fn default() -> Self {
        Self {
            font_size: 3.0,
            line_height: 1.5,
            line_before: 0.0,
            line_after: 0.0,
            letter_spacing: 0.0,
            weight: 300,
            align: TextAlign::Left,
            color: Color::Cmyk([0.0, 0.0, 0.0, 100.0]),
            content: String::new(),
            char_styles: Vec::new(),
        }
    }
}

impl Paragraph {
    /// A default-styled paragraph with the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Number of characters.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Whether the paragraph has no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// The override for the character at `index`, if any.
    pub fn char_style(&self, index: usize) -> Option<&CharacterStyle> {
        self.char_styles.get(index)
    }

    /// A copy holding only the characters in `range`, with matching overrides.
    ///
    /// The range is clamped to the content.
    pub fn slice(&self, range: Range<usize>) -> Self {
        let end_char = range.end.max(range.start);
        let start = byte_offset(&self.content, range.start);
        let end = byte_offset(&self.content, end_char);
        let styles_end = end_char.min(self.char_styles.len());
        let styles_start = range.start.min(styles_end);
        Self {
            content: String::from(&self.content[start..end]),
            char_styles: self.char_styles[styles_start..styles_end].to_vec(),
            ..self.clone_style()
        }
    }

    /// Split into the first `mid` characters and the rest.
    pub fn split_at(&self, mid: usize) -> (Self, Self) {
        (self.slice(0..mid), self.slice(mid..usize::MAX))
    }

    /// A copy with `style` overlaid on the characters in `range`.
    ///
    /// `char_styles` is padded with empty overrides as needed.
    #[must_use]
    pub fn with_char_style(&self, range: Range<usize>, style: CharacterStyle) -> Self {
        let mut out = self.clone();
        if out.char_styles.len() < range.end {
            out.char_styles.resize(range.end, CharacterStyle::default());
        }
        for slot in out.char_styles.get_mut(range).into_iter().flatten() {
            *slot = slot.merged(&style);
        }
        out
    }

    /// Space before the first line, with half the extra leading removed.
    pub fn spacing_before(&self) -> f64 {
        self.line_before - self.half_leading()
    }

    /// Space after the last line, with half the extra leading added.
    pub fn spacing_after(&self) -> f64 {
        self.line_after + self.half_leading()
    }

    fn half_leading(&self) -> f64 {
        (self.line_height - 1.0) * self.font_size / 2.0
    }

    fn clone_style(&self) -> Self {
        Self {
            content: String::new(),
            char_styles: Vec::new(),
            ..*self
        }
    }
}

/// Byte offset of the `index`-th char, or the length when past the end.
fn byte_offset(s: &str, index: usize) -> usize {
    s.char_indices().nth(index).map_or(s.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slicing_counts_chars() {
        let p = Paragraph::new("テキスト入力");
        assert_eq!(p.char_len(), 6);
        let (head, tail) = p.split_at(4);
        assert_eq!(head.content, "テキスト");
        assert_eq!(tail.content, "入力");
        assert_eq!(p.slice(4..99).content, "入力");
        assert_eq!(p.slice(9..12).content, "");
    }

    #[test]
    fn slicing_carries_sparse_styles() {
        let bold = CharacterStyle {
            weight: Some(700),
            ..CharacterStyle::default()
        };
        let p = Paragraph::new("abcdef").with_char_style(1..3, bold);
        assert_eq!(p.char_styles.len(), 3);
        assert!(p.char_styles[0].is_empty());
        assert_eq!(p.char_style(2).and_then(|s| s.weight), Some(700));
        assert_eq!(p.char_style(4), None);

        let (head, tail) = p.split_at(2);
        assert_eq!(head.char_styles.len(), 2);
        assert_eq!(tail.char_styles.len(), 1);
        assert!(tail.char_styles.iter().all(|s| s.weight == Some(700)));
        assert_eq!(tail.font_size, p.font_size);
    }

    #[test]
    fn style_overlay_keeps_existing_fields() {
        let a = CharacterStyle {
            ratio: Some(50.0),
            ..CharacterStyle::default()
        };
        let b = CharacterStyle {
            kerning: Some(100.0),
            ..CharacterStyle::default()
        };
        let p = Paragraph::new("xy")
            .with_char_style(0..2, a)
            .with_char_style(1..2, b);
        assert_eq!(p.char_styles[1].ratio, Some(50.0));
        assert_eq!(p.char_styles[1].kerning, Some(100.0));
        assert_eq!(p.char_styles[0].kerning, None);
    }

    #[test]
    fn spacing_accounts_for_leading() {
        let p = Paragraph {
            font_size: 4.0,
            line_height: 1.5,
            line_before: 2.0,
            line_after: 1.0,
            ..Paragraph::default()
        };
        assert_eq!(p.spacing_before(), 1.0);
        assert_eq!(p.spacing_after(), 2.0);
    }
}
