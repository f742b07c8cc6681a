// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paginating paragraphs into an ordered list of containers.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use quire_region_tree::{TextInfo, WritingDirection};

use crate::error::{FlowError, MeasureError};
use crate::measure::TextMeasurer;
use crate::paragraph::Paragraph;

/// Result of [`search_flowable_right`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlowableRight {
    /// Number of leading characters that fit.
    pub split: usize,
    /// Measured extent of that prefix; zero when nothing fits.
    pub extent: f64,
}

/// Paragraph chunks per container, plus whatever did not fit anywhere.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlowResult {
    /// One list of chunks per container, in container order.
    pub containers: Vec<Vec<Paragraph>>,
    /// Paragraphs (or remainders) left after the last container filled up.
    pub overflow: Vec<Paragraph>,
}

impl FlowResult {
    /// All emitted chunks followed by the overflow, in reading order.
    pub fn chunks(&self) -> impl Iterator<Item = &Paragraph> + '_ {
        self.containers.iter().flatten().chain(&self.overflow)
    }
}

/// Line length and flow extent of a container for its writing direction.
fn container_axes(info: &TextInfo) -> (f64, f64) {
    match info.direction {
        WritingDirection::Horizontal => (info.rect.width(), info.rect.height()),
        WritingDirection::Vertical => (info.rect.height(), info.rect.width()),
    }
}

/// Find the longest prefix of `paragraph` whose measured extent fits in `remaining`.
///
/// Binary search over the character count in `0..=len`, probing the upper
/// middle so the search always makes progress. Relies on the measurer being
/// monotonic in the prefix length.
pub fn search_flowable_right<M: TextMeasurer + ?Sized>(
    measurer: &M,
    paragraph: &Paragraph,
    measure: f64,
    remaining: f64,
    direction: WritingDirection,
) -> Result<FlowableRight, MeasureError> {
    let mut lo = 0;
    let mut hi = paragraph.char_len();
    let mut extent = 0.0;
    while lo < hi {
        let mid = lo + (hi - lo).div_ceil(2);
        let probe = measurer.measure(&paragraph.slice(0..mid), measure, direction)?;
        log::trace!("probe {mid} chars: extent {probe} of {remaining}");
        if probe > remaining {
            hi = mid - 1;
        } else {
            lo = mid;
            extent = probe;
        }
    }
    Ok(FlowableRight { split: lo, extent })
}

/// Distribute `paragraphs` across `containers` in order.
///
/// Each container is filled until the next paragraph no longer fits. A
/// paragraph that fits only partly is split: the fitting prefix closes the
/// current container and the remainder opens the next. If not a single
/// character fits into an empty container, the whole paragraph is forced into
/// it so flow always advances. Paragraphs left when the containers run out
/// are returned in [`FlowResult::overflow`].
///
/// Measurer failures abort the flow and are reported with the container
/// being filled.
pub fn flow_text<M: TextMeasurer + ?Sized>(
    measurer: &M,
    paragraphs: &[Paragraph],
    containers: &[TextInfo],
) -> Result<FlowResult, FlowError> {
    let mut queue: VecDeque<Paragraph> = paragraphs.iter().cloned().collect();
    let mut result = FlowResult::default();

    for info in containers {
        let (measure, mut remaining) = container_axes(info);
        let mut chunks: Vec<Paragraph> = Vec::new();
        let wrap = |source| FlowError::Measure {
            container: info.id,
            source,
        };

        while let Some(paragraph) = queue.front_mut() {
            if paragraph.is_empty() {
                let extent = measurer
                    .measure(paragraph, measure, info.direction)
                    .map_err(wrap)?;
                if extent > remaining && !chunks.is_empty() {
                    break;
                }
                remaining -= extent;
                chunks.extend(queue.pop_front());
                continue;
            }

            let fit = search_flowable_right(measurer, paragraph, measure, remaining, info.direction)
                .map_err(wrap)?;
            let len = paragraph.char_len();
            if fit.split == len {
                remaining -= fit.extent;
                chunks.extend(queue.pop_front());
            } else if fit.split > 0 {
                let (head, tail) = paragraph.split_at(fit.split);
                *paragraph = tail;
                chunks.push(head);
                break;
            } else {
                if chunks.is_empty() {
                    log::debug!("forcing {len} chars into container {:?}", info.id);
                    chunks.extend(queue.pop_front());
                }
                break;
            }
        }
        result.containers.push(chunks);
    }

    result.overflow = queue.into();
    if !result.overflow.is_empty() {
        log::warn!(
            "{} paragraphs did not fit into {} containers",
            result.overflow.len(),
            containers.len()
        );
    }
    log::debug!(
        "flowed {} paragraphs into {} containers",
        paragraphs.len(),
        containers.len()
    );
    Ok(result)
}
