//! Sections and the boundary recalculation engine.
//!
//! The participant-facing runtime renders one section per screen, so the
//! editor keeps sections normalized continuously: after any mutation,
//! every section boundary must fall at a designated split point, and
//! oversized sections are split to restore that invariant. The engine
//! only ever preserves or increases the section count; merging and
//! removal happen exclusively through explicit user actions on the
//! editor.

use crate::items::Question;
use crate::reorder::{DragTag, Draggable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for sections.
pub type SectionId = Uuid;

/// An ordered, contiguous grouping of questions rendered together as one
/// page downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub title: Option<String>,
    pub items: Vec<Question>,
}

impl Default for Section {
    fn default() -> Self {
        Self::new()
    }
}

impl Section {
    /// Create an empty untitled section.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: None,
            items: Vec::new(),
        }
    }

    /// Create a section owning the given questions.
    pub fn with_items(items: Vec<Question>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: None,
            items,
        }
    }

    /// Check if the section holds no questions.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Deep-copy the section with fresh identifiers throughout.
    pub fn duplicate(&self) -> Section {
        Section {
            id: Uuid::new_v4(),
            title: self.title.clone(),
            items: self.items.iter().map(Question::duplicate).collect(),
        }
    }
}

impl Draggable for Section {
    fn key(&self) -> Uuid {
        self.id
    }

    fn drag_tag(&self) -> DragTag {
        DragTag::Section
    }
}

/// Candidate end-of-chunk indices for a run of questions: a section
/// boundary may only fall immediately after one of these positions.
///
/// The current rule treats every question's end as a candidate, so
/// recalculation splits any multi-question section into one-question
/// chunks. Richer grouping rules (skip logic keeping dependent questions
/// on one page) would narrow this set without touching the chunking
/// pass below.
pub fn split_points(items: &[Question]) -> Vec<usize> {
    (0..items.len()).collect()
}

/// Result of a recalculation pass.
#[derive(Debug, Clone)]
pub struct Recalculated {
    pub sections: Vec<Section>,
    /// How many sections were synthesized beyond the input count.
    pub added: usize,
}

/// Restore the boundary invariant by splitting each section at its split
/// points.
///
/// The first chunk of a split keeps the original section's identity (id
/// and title); later chunks get fresh ids and no title. Sections already
/// forming a single chunk pass through untouched, which makes the pass a
/// fixed point of itself: recalculating its own output adds nothing.
pub fn recalculate(sections: Vec<Section>) -> Recalculated {
    let before = sections.len();
    let mut out: Vec<Section> = Vec::with_capacity(before);

    for mut section in sections {
        let points = split_points(&section.items);
        let chunks = chunk_at(&points, section.items.len());
        if chunks <= 1 {
            out.push(section);
            continue;
        }

        let items = std::mem::take(&mut section.items);
        let mut boundaries = points.iter().map(|p| p + 1).collect::<Vec<_>>();
        if boundaries.last() != Some(&items.len()) {
            boundaries.push(items.len());
        }

        let mut rest = items;
        let mut first = true;
        let mut consumed = 0;
        for boundary in boundaries {
            let take = boundary - consumed;
            if take == 0 {
                continue;
            }
            let tail = rest.split_off(take);
            let chunk_items = std::mem::replace(&mut rest, tail);
            consumed = boundary;

            if first {
                out.push(Section {
                    id: section.id,
                    title: section.title.clone(),
                    items: chunk_items,
                });
                first = false;
            } else {
                out.push(Section::with_items(chunk_items));
            }
        }
    }

    let added = out.len() - before;
    if added > 0 {
        log::debug!("recalculation synthesized {added} section(s)");
    }
    Recalculated {
        sections: out,
        added,
    }
}

/// Number of chunks the given split points produce for `len` items.
fn chunk_at(points: &[usize], len: usize) -> usize {
    if len == 0 {
        return 1;
    }
    // Boundaries strictly inside the run create one extra chunk each.
    points.iter().filter(|&&p| p + 1 < len).count() + 1
}
