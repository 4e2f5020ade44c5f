//! Generic drag-reorder engine.
//!
//! Maintains an ordered list of items and at most one in-flight drag
//! session. Reordering is applied optimistically while the pointer moves
//! over drop targets, so the list reflows live; dropping only clears the
//! session. Presentation (grid vs. stacked layout) lives with the owner,
//! which supplies a render callback over [`RenderProps`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Marker deciding which drop targets accept a dragged item. An item may
/// only be dropped among items carrying the same tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragTag {
    Question,
    ActivityStep,
    Section,
}

/// Trait for items a [`ReorderableList`] can manage.
pub trait Draggable {
    /// Stable key correlating the item across reorders. Must be unique
    /// within the list.
    fn key(&self) -> Uuid;

    /// Which drop targets accept this item.
    fn drag_tag(&self) -> DragTag;
}

/// Pointer offset in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Transient state for the one in-flight reorder gesture. Created on
/// gesture start, destroyed on drop or cancel, never persisted.
#[derive(Debug, Clone)]
pub struct DragSession {
    /// Key of the dragged item.
    pub key: Uuid,
    /// Index the item occupied when the gesture began.
    pub origin: usize,
    /// Tag filtering which targets accept the item.
    pub tag: DragTag,
    /// Pointer offset when the gesture began.
    pub initial_offset: Offset,
    /// Live pointer offset, updated as the pointer moves.
    pub current_offset: Offset,
}

impl DragSession {
    /// Pointer movement since the gesture began.
    pub fn delta(&self) -> Offset {
        Offset::new(
            self.current_offset.x - self.initial_offset.x,
            self.current_offset.y - self.initial_offset.y,
        )
    }
}

/// Everything the owner's render callback needs for one entry: the item,
/// its siblings, its position, and the drag flags. While a drag is
/// active one extra entry is produced for the floating preview.
#[derive(Debug)]
pub struct RenderProps<'a, T> {
    pub item: &'a T,
    pub items: &'a [T],
    pub index: usize,
    /// This entry is the item currently being dragged.
    pub is_dragging: bool,
    /// This entry is the floating preview, not a list slot.
    pub is_preview: bool,
    /// Live pointer offset; only set on the preview entry.
    pub offset: Option<Offset>,
}

/// An ordered collection supporting one drag-initiated reorder at a time.
#[derive(Debug, Clone)]
pub struct ReorderableList<T> {
    items: Vec<T>,
    session: Option<DragSession>,
    /// Read-only lists render normally but ignore every gesture.
    editable: bool,
}

impl<T: Draggable> ReorderableList<T> {
    /// Create an editable list.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            session: None,
            editable: true,
        }
    }

    /// Create a read-only list: dragging is visually inert, never an error.
    pub fn read_only(items: Vec<T>) -> Self {
        Self {
            items,
            session: None,
            editable: false,
        }
    }

    /// Current order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the list, returning the items in their current order.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// The active drag session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Check if a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Begin a drag gesture on the item at `index`.
    ///
    /// Returns false (and changes nothing) when another session is
    /// already active, the list is read-only, or the index is out of
    /// range. At most one session exists per list.
    pub fn begin_drag(&mut self, index: usize, pointer: Offset) -> bool {
        if !self.editable {
            return false;
        }
        if self.session.is_some() {
            log::warn!("begin_drag ignored: a drag session is already active");
            return false;
        }
        let Some(item) = self.items.get(index) else {
            log::warn!("begin_drag ignored: index {index} out of range");
            return false;
        };
        log::debug!("drag started at index {index}");
        self.session = Some(DragSession {
            key: item.key(),
            origin: index,
            tag: item.drag_tag(),
            initial_offset: pointer,
            current_offset: pointer,
        });
        true
    }

    /// Update the live pointer offset of the active session.
    pub fn update_pointer(&mut self, pointer: Offset) {
        if let Some(session) = &mut self.session {
            session.current_offset = pointer;
        }
    }

    /// React to the dragged item's bounding box overlapping the drop
    /// target at `hover_index`.
    ///
    /// Moves the item from `drag_index` to `hover_index` and immediately
    /// reports the new order through `on_change`; the caller persists it
    /// right away rather than waiting for the drop. Equal indices, a
    /// read-only list, a missing session, an out-of-range index, or a
    /// target with a different drag tag all leave the list untouched.
    ///
    /// Returns true when a reorder was applied.
    pub fn hover(
        &mut self,
        drag_index: usize,
        hover_index: usize,
        on_change: impl FnOnce(&[T]),
    ) -> bool {
        if drag_index == hover_index || !self.editable {
            return false;
        }
        let Some(session) = &self.session else {
            return false;
        };
        if drag_index >= self.items.len() || hover_index >= self.items.len() {
            log::warn!("hover ignored: indices {drag_index}->{hover_index} out of range");
            return false;
        }
        if self.items[hover_index].drag_tag() != session.tag {
            return false;
        }

        let item = self.items.remove(drag_index);
        self.items.insert(hover_index, item);
        on_change(&self.items);
        true
    }

    /// End the drag gesture. The order was already committed by `hover`;
    /// this only clears the session.
    pub fn end_drag(&mut self) {
        if self.session.take().is_some() {
            log::debug!("drag ended");
        }
    }

    /// Invoke the owner's render callback once per item, plus once more
    /// for the floating preview while a drag is active.
    pub fn render_with<R>(&self, mut render: impl FnMut(RenderProps<'_, T>) -> R) -> Vec<R> {
        let dragged_key = self.session.as_ref().map(|s| s.key);
        let mut out = Vec::with_capacity(self.items.len() + 1);
        for (index, item) in self.items.iter().enumerate() {
            out.push(render(RenderProps {
                item,
                items: &self.items,
                index,
                is_dragging: dragged_key == Some(item.key()),
                is_preview: false,
                offset: None,
            }));
        }
        if let Some(session) = &self.session {
            if let Some((index, item)) = self
                .items
                .iter()
                .enumerate()
                .find(|(_, item)| item.key() == session.key)
            {
                out.push(render(RenderProps {
                    item,
                    items: &self.items,
                    index,
                    is_dragging: true,
                    is_preview: true,
                    offset: Some(session.current_offset),
                }));
            }
        }
        out
    }
}
