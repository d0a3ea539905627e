//! Insertion-index computation for drag hover.
//!
//! Pure function over a lane's card geometry: no board access, no
//! rendering, so drag targeting is unit-testable on its own.

/// Vertical extent of one rendered card, in screen cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardBox {
    pub top: u16,
    pub height: u16,
}

impl CardBox {
    pub fn new(top: u16, height: u16) -> Self {
        CardBox { top, height }
    }
}

/// Given the hovered lane's card boxes (top to bottom, with the dragged
/// card already excluded) and the pointer row, compute where a drop
/// would insert.
///
/// For each box the signed offset `pointer_y - top - height/2` measures
/// the pointer's distance from the card's vertical midpoint. Boxes with
/// a negative offset (pointer above their midpoint) are candidates for
/// "insert before this card"; the candidate with the largest offset is
/// the nearest midpoint the pointer is still above, and its position is
/// the insertion index. If the pointer sits below every midpoint, or
/// the lane is empty, the card appends at the end.
///
/// Ties (identical midpoints) resolve to the first box in lane order:
/// a later equal offset is not strictly greater, so it never replaces
/// an earlier candidate.
pub fn insertion_index(boxes: &[CardBox], pointer_y: u16) -> usize {
    let mut closest: Option<(i32, usize)> = None;
    for (i, b) in boxes.iter().enumerate() {
        let offset = i32::from(pointer_y) - i32::from(b.top) - i32::from(b.height) / 2;
        if offset < 0 && closest.is_none_or(|(best, _)| offset > best) {
            closest = Some((offset, i));
        }
    }
    closest.map_or(boxes.len(), |(_, i)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three cards, 3 rows tall each, stacked from row 0:
    /// midpoints at rows 1, 4, 7.
    fn stack() -> Vec<CardBox> {
        vec![CardBox::new(0, 3), CardBox::new(3, 3), CardBox::new(6, 3)]
    }

    #[test]
    fn empty_lane_appends() {
        assert_eq!(insertion_index(&[], 5), 0);
    }

    #[test]
    fn pointer_above_first_midpoint_inserts_at_front() {
        assert_eq!(insertion_index(&stack(), 0), 0);
    }

    #[test]
    fn pointer_between_midpoints_inserts_between() {
        // Row 2: below midpoint 1, above midpoint 4
        assert_eq!(insertion_index(&stack(), 2), 1);
        // Row 5: below midpoint 4, above midpoint 7
        assert_eq!(insertion_index(&stack(), 5), 2);
    }

    #[test]
    fn pointer_below_all_midpoints_appends() {
        assert_eq!(insertion_index(&stack(), 7), 3);
        assert_eq!(insertion_index(&stack(), 50), 3);
    }

    #[test]
    fn pointer_exactly_on_midpoint_belongs_after() {
        // offset == 0 is not a candidate (strictly negative required),
        // so the slot after the card wins
        assert_eq!(insertion_index(&stack(), 1), 1);
    }

    #[test]
    fn ties_resolve_to_first_box() {
        // Two zero-height boxes at the same row share a midpoint
        let boxes = vec![CardBox::new(4, 0), CardBox::new(4, 0)];
        assert_eq!(insertion_index(&boxes, 2), 0);
    }

    #[test]
    fn deterministic_for_same_input() {
        let boxes = stack();
        for y in 0..12 {
            assert_eq!(insertion_index(&boxes, y), insertion_index(&boxes, y));
        }
    }

    #[test]
    fn irregular_heights() {
        // Tall card then short card: midpoints at 2 and 5
        let boxes = vec![CardBox::new(0, 5), CardBox::new(5, 1)];
        assert_eq!(insertion_index(&boxes, 1), 0);
        assert_eq!(insertion_index(&boxes, 3), 1);
        assert_eq!(insertion_index(&boxes, 6), 2);
    }
}
