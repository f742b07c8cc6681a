// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The text-measurement capability and a deterministic fixed-advance measurer.

use quire_region_tree::WritingDirection;

use crate::error::MeasureError;
use crate::paragraph::Paragraph;

/// Measures how much space a paragraph takes when laid out.
///
/// `measure` is the line length available: the container width for
/// horizontal writing, its height for vertical writing. The returned extent
/// is along the other axis (the height of the stacked lines, or their width).
///
/// Implementations must be monotonic: a prefix of a paragraph never measures
/// larger than the whole paragraph. Pagination relies on this for its binary
/// search.
pub trait TextMeasurer {
    /// Extent of `paragraph` laid out with lines of length `measure`.
    fn measure(
        &self,
        paragraph: &Paragraph,
        measure: f64,
        direction: WritingDirection,
    ) -> Result<f64, MeasureError>;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(
        &self,
        paragraph: &Paragraph,
        measure: f64,
        direction: WritingDirection,
    ) -> Result<f64, MeasureError> {
        (**self).measure(paragraph, measure, direction)
    }
}

/// A measurer that gives every character the same advance, scaled by its style.
///
/// Characters advance by `advance_em` ems of the paragraph font size, scaled
/// by the character's `ratio`, plus kerning and letter spacing (thousandths of
/// an em). Lines break greedily when the next character would overflow, and at
/// `'\n'`. The extent is the number of lines times the line pitch plus the
/// paragraph's spacing before and after. Writing direction does not change
/// the metrics.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AdvanceMeasurer {
    /// Advance of an unstyled character, in ems.
    pub advance_em: f64,
}

impl Default for AdvanceMeasurer {
    fn default() -> Self {
        Self { advance_em: 1.0 }
    }
}

impl AdvanceMeasurer {
    /// Number of lines `paragraph` occupies with lines of length `measure`.
    pub fn line_count(&self, paragraph: &Paragraph, measure: f64) -> usize {
        let em = paragraph.font_size;
        let mut lines = 0;
        let mut used = 0.0;
        let mut open = false;
        for (i, ch) in paragraph.content.chars().enumerate() {
            if ch == '\n' {
                lines += 1;
                used = 0.0;
                open = false;
                continue;
            }
            let style = paragraph.char_style(i).copied().unwrap_or_default();
            let advance = em * self.advance_em * style.ratio.unwrap_or(100.0) / 100.0
                + em * (style.kerning.unwrap_or(0.0) + paragraph.letter_spacing) / 1000.0;
            if open && used + advance > measure {
                lines += 1;
                used = 0.0;
            }
            used += advance;
            open = true;
        }
        if open {
            lines += 1;
        }
        lines
    }
}

impl TextMeasurer for AdvanceMeasurer {
    fn measure(
        &self,
        paragraph: &Paragraph,
        measure: f64,
        _direction: WritingDirection,
    ) -> Result<f64, MeasureError> {
        if !(measure.is_finite() && measure > 0.0) {
            return Err(MeasureError::InvalidMeasure(measure));
        }
        let lines = self.line_count(paragraph, measure);
        if lines == 0 {
            return Ok(0.0);
        }
        let body = lines as f64 * paragraph.font_size * paragraph.line_height;
        Ok((paragraph.spacing_before() + body + paragraph.spacing_after()).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paragraph::CharacterStyle;

    fn para(content: &str) -> Paragraph {
        Paragraph {
            font_size: 5.0,
            line_height: 1.0,
            ..Paragraph::new(content)
        }
    }

    #[test]
    fn greedy_lines() {
        let m = AdvanceMeasurer::default();
        assert_eq!(m.line_count(&para(""), 50.0), 0);
        assert_eq!(m.line_count(&para("abcdefghij"), 50.0), 1);
        assert_eq!(m.line_count(&para("abcdefghijk"), 50.0), 2);
        assert_eq!(m.line_count(&para("ab\ncd"), 50.0), 2);
        // An oversized character still occupies one line.
        assert_eq!(m.line_count(&para("a"), 1.0), 1);
    }

    #[test]
    fn char_styles_widen_glyphs() {
        let m = AdvanceMeasurer::default();
        let wide = CharacterStyle {
            ratio: Some(200.0),
            ..CharacterStyle::default()
        };
        let p = para("abcdefghi").with_char_style(0..2, wide);
        // 2 double-width + 7 normal = 11 ems of 5mm.
        assert_eq!(m.line_count(&p, 50.0), 2);
    }

    #[test]
    fn extent_is_lines_times_pitch() {
        let m = AdvanceMeasurer::default();
        let p = para(&"x".repeat(25));
        let extent = m.measure(&p, 50.0, WritingDirection::Horizontal).unwrap();
        assert_eq!(extent, 15.0);
    }

    #[test]
    fn rejects_degenerate_measure() {
        let m = AdvanceMeasurer::default();
        assert_eq!(
            m.measure(&para("a"), 0.0, WritingDirection::Vertical),
            Err(MeasureError::InvalidMeasure(0.0))
        );
    }
}
