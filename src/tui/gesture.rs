//! The drag gesture state machine.
//!
//! At most one drag is live at a time. The gesture holds only an id and
//! indices into the board — never a copy of the card — and is the only
//! path that mutates the board during a drag: `hover` is read-only,
//! `drop_on` commits, `cancel` discards.

use crate::model::{Board, BoardError, Lane};

/// Error type for gesture lifecycle violations
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum GestureError {
    #[error("a drag is already in progress")]
    AlreadyActive,
}

/// What a completed drop did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropOutcome {
    pub item_id: String,
    pub lane: Lane,
    pub index: usize,
    /// False when the card landed back where it started
    pub moved: bool,
}

#[derive(Debug, Clone)]
struct ActiveDrag {
    item_id: String,
    origin_lane: Lane,
    origin_index: usize,
    /// Proposed drop slot; None while the pointer is outside every lane.
    /// The index is relative to the lane with the dragged card excluded.
    placeholder: Option<(Lane, usize)>,
}

/// Lifecycle of one pointer drag: Idle → Dragging → Idle.
/// Drop and cancel both return to Idle; cancel means "revert to origin".
#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    active: Option<ActiveDrag>,
}

impl DragGesture {
    pub fn new() -> Self {
        DragGesture::default()
    }

    /// Idle → Dragging. Records where the card started so cancel and
    /// outside-drop can revert. Starting while another drag is live is
    /// rejected rather than silently overwriting, which would orphan
    /// the previous placeholder.
    pub fn start(
        &mut self,
        item_id: &str,
        origin_lane: Lane,
        origin_index: usize,
    ) -> Result<(), GestureError> {
        if self.active.is_some() {
            return Err(GestureError::AlreadyActive);
        }
        self.active = Some(ActiveDrag {
            item_id: item_id.to_string(),
            origin_lane,
            origin_index,
            placeholder: Some((origin_lane, origin_index)),
        });
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Id of the card being dragged, if any. Renderers use this to
    /// suppress the source card; hit-testing uses it to exclude the
    /// card's own box from insertion candidates.
    pub fn dragging_id(&self) -> Option<&str> {
        self.active.as_ref().map(|d| d.item_id.as_str())
    }

    /// Current proposed drop slot. There is only ever one: hovering a
    /// new lane relocates the placeholder, never duplicates it.
    pub fn placeholder(&self) -> Option<(Lane, usize)> {
        self.active.as_ref().and_then(|d| d.placeholder)
    }

    /// Dragging → Dragging: update the placeholder. Fires on every
    /// pointer move, so it must stay cheap and must not touch the board.
    pub fn hover(&mut self, lane: Lane, index: usize) {
        if let Some(drag) = &mut self.active {
            drag.placeholder = Some((lane, index));
        }
    }

    /// Pointer left all lanes: no valid drop slot until it re-enters.
    pub fn clear_hover(&mut self) {
        if let Some(drag) = &mut self.active {
            drag.placeholder = None;
        }
    }

    /// Dragging → Idle, committing the reorder/move to the board.
    ///
    /// With no placeholder (released outside every lane) the card goes
    /// back to its origin slot — a no-op commit that still counts as a
    /// mutation for re-render and save purposes. Returns None when no
    /// drag was active.
    pub fn drop_on(&mut self, board: &mut Board) -> Option<Result<DropOutcome, BoardError>> {
        let drag = self.active.take()?;
        let (lane, index) = drag
            .placeholder
            .unwrap_or((drag.origin_lane, drag.origin_index));

        let result = if lane == drag.origin_lane {
            board.move_within(&drag.item_id, index)
        } else {
            board.move_across(&drag.item_id, lane, index)
        };

        Some(result.map(|()| DropOutcome {
            moved: (lane, index) != (drag.origin_lane, drag.origin_index),
            item_id: drag.item_id,
            lane,
            index,
        }))
    }

    /// Dragging → Idle without touching the board. The card stays at
    /// its origin; the board is byte-for-byte what it was before start.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}
