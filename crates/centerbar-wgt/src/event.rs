//! Pointer event types.

use centerbar_unit::{Px, PxPoint};
use serde::{Deserialize, Serialize};

/// Identifier for a continuous pointer contact.
///
/// Multiple points of contact can happen at the same time, this ID identifies each uninterrupted contact.
/// IDs are unique only among other concurrent contacts, after a contact ends an ID may be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointerId(pub u32);

/// Kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerAction {
    /// First pointer touched down, no other pointer is in contact.
    Down,
    /// One or more pointers moved.
    Move,
    /// Last pointer lifted.
    Up,
    /// A secondary pointer touched down while others are in contact.
    ///
    /// The new pointer is the last in the batch.
    PointerDown,
    /// A non-last pointer lifted while others remain in contact.
    PointerUp {
        /// Index of the lifted pointer in the batch.
        index: usize,
    },
    /// The host cancelled the gesture.
    Cancel,
}

/// Position of one pointer in an event batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    /// Pointer contact.
    pub id: PointerId,
    /// Position relative to the widget top-left.
    pub position: PxPoint,
}
impl PointerSample {
    /// New sample.
    pub fn new(id: PointerId, position: PxPoint) -> Self {
        Self { id, position }
    }
}

/// A pointer event delivered to a widget.
///
/// Carries the action and the positions of every pointer currently in contact, in the order
/// the host tracks them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Event kind.
    pub action: PointerAction,
    /// Every pointer in contact.
    pub pointers: Vec<PointerSample>,
}
impl PointerEvent {
    /// New event.
    pub fn new(action: PointerAction, pointers: Vec<PointerSample>) -> Self {
        Self { action, pointers }
    }

    /// New event with a single pointer `0` at `(x, y)`.
    pub fn single(action: PointerAction, x: Px, y: Px) -> Self {
        Self::new(action, vec![PointerSample::new(PointerId(0), PxPoint::new(x, y))])
    }

    /// Number of pointers in the batch.
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Index of the last pointer in the batch.
    pub fn last_index(&self) -> Option<usize> {
        self.pointers.len().checked_sub(1)
    }

    /// Pointer ID at the `index`.
    pub fn pointer_id(&self, index: usize) -> Option<PointerId> {
        self.pointers.get(index).map(|p| p.id)
    }

    /// Pointer *x* at the `index`.
    pub fn x(&self, index: usize) -> Option<Px> {
        self.pointers.get(index).map(|p| p.position.x)
    }

    /// Find the batch index of the pointer `id`.
    pub fn find_index(&self, id: PointerId) -> Option<usize> {
        self.pointers.iter().position(|p| p.id == id)
    }

    /// Pointer *x* for the pointer `id`.
    pub fn x_of(&self, id: PointerId) -> Option<Px> {
        self.find_index(id).and_then(|i| self.x(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: u32, x: f32) -> PointerSample {
        PointerSample::new(PointerId(id), PxPoint::new(Px(x), Px(0.0)))
    }

    #[test]
    fn lookup() {
        let ev = PointerEvent::new(PointerAction::Move, vec![sample(4, 10.0), sample(9, 30.0)]);
        assert_eq!(Some(1), ev.last_index());
        assert_eq!(Some(1), ev.find_index(PointerId(9)));
        assert_eq!(Some(Px(10.0)), ev.x_of(PointerId(4)));
        assert_eq!(None, ev.x_of(PointerId(1)));
        assert_eq!(None, ev.pointer_id(2));
    }

    #[test]
    fn empty_batch() {
        let ev = PointerEvent::new(PointerAction::Cancel, vec![]);
        assert_eq!(None, ev.last_index());
    }
}
