//! Drag-to-reorder primitives shared by the project list and the team editor.
//!
//! Reordering is always *remove then insert*: the dragged item is taken out
//! of its current slot and re-inserted at the hovered index. The list reflects
//! the hover position continuously, so the drag source follows the item.

use serde::{Deserialize, Serialize};

use crate::types::ProjectId;

/// Move the item at `from` so that it ends up at index `to`.
///
/// Returns `false` (and leaves `items` untouched) when `from == to` or either
/// index is out of bounds.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// Pointer-drag state for one reorderable sequence.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    source: Option<usize>,
}

impl DragState {
    /// Begin dragging the row at `index`.
    pub fn start(&mut self, index: usize) {
        self.source = Some(index);
    }

    /// Index of the row currently attached to the pointer, if any.
    pub fn source(&self) -> Option<usize> {
        self.source
    }

    pub fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    /// The pointer moved over row `target`.
    ///
    /// Moves the dragged item to `target` and makes `target` the new source.
    /// Returns `true` when `items` changed. Hovering the source itself, or
    /// hovering while nothing is being dragged, is a no-op.
    pub fn over<T>(&mut self, items: &mut Vec<T>, target: usize) -> bool {
        let Some(source) = self.source else {
            return false;
        };
        if !move_item(items, source, target) {
            return false;
        }
        self.source = Some(target);
        true
    }

    /// Finish the gesture, returning the final index of the dragged row.
    pub fn end(&mut self) -> Option<usize> {
        self.source.take()
    }
}

/// One `(id, order)` pair of a reorder batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderEntry {
    pub id: ProjectId,
    pub order: i32,
}

/// Assign dense ranks `0..n-1` to `items` in their current order.
pub fn dense_assignment<T>(items: &[T], id_of: impl Fn(&T) -> &str) -> Vec<ReorderEntry> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| ReorderEntry {
            id: id_of(item).to_string(),
            order: index as i32,
        })
        .collect()
}
