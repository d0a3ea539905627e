//! Screen layout for the board: three lane columns, each a bordered
//! block with a stack of card slots.
//!
//! The same `BoardLayout` is used for drawing and for event-time
//! hit-testing, so the geometry the drag resolver sees is exactly the
//! geometry on screen.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::model::{Board, Lane};

use super::geometry::{CardBox, insertion_index};

/// Rows a card occupies: title + description
pub const CARD_ROWS: u16 = 2;
/// Blank row between cards
pub const CARD_GAP: u16 = 1;

/// One visible card's place on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSlot {
    /// Index into the full lane (including any suppressed card)
    pub lane_index: usize,
    pub id: String,
    /// Title + description rows
    pub rect: Rect,
}

/// One lane column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneLayout {
    pub lane: Lane,
    /// Whole column including the border
    pub area: Rect,
    /// Inside the border
    pub content: Rect,
    /// Visible cards, top to bottom, suppressed card excluded
    pub cards: Vec<CardSlot>,
    /// Non-suppressed cards scrolled off above the window
    pub hidden_above: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardLayout {
    pub lanes: Vec<LaneLayout>,
}

impl BoardLayout {
    /// Compute the layout for `board` in `area`. `suppress` is the id of
    /// a card being dragged (drawn as a ghost instead of in its lane);
    /// `scroll` is the per-lane first visible card index.
    pub fn compute(
        board: &Board,
        area: Rect,
        suppress: Option<&str>,
        scroll: &[usize; 3],
    ) -> BoardLayout {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        let mut lanes = Vec::with_capacity(3);
        for lane in Lane::ALL {
            let column = columns[lane.index()];
            let content = inner(column);
            let offset = scroll[lane.index()].min(board.lane_len(lane));

            let mut cards = Vec::new();
            let mut hidden_above = 0;
            let mut y = content.y;
            for (lane_index, item) in board.lane(lane).iter().enumerate() {
                if suppress == Some(item.id.as_str()) {
                    continue;
                }
                if lane_index < offset {
                    hidden_above += 1;
                    continue;
                }
                if y + CARD_ROWS > content.y + content.height {
                    break;
                }
                cards.push(CardSlot {
                    lane_index,
                    id: item.id.clone(),
                    rect: Rect::new(content.x, y, content.width, CARD_ROWS),
                });
                y += CARD_ROWS + CARD_GAP;
            }

            lanes.push(LaneLayout {
                lane,
                area: column,
                content,
                cards,
                hidden_above,
            });
        }
        BoardLayout { lanes }
    }

    pub fn lane_layout(&self, lane: Lane) -> &LaneLayout {
        &self.lanes[lane.index()]
    }

    /// Which lane column contains the point, if any
    pub fn lane_at(&self, x: u16, y: u16) -> Option<Lane> {
        self.lanes
            .iter()
            .find(|l| contains(l.area, x, y))
            .map(|l| l.lane)
    }

    /// Which visible card contains the point, if any
    pub fn card_at(&self, x: u16, y: u16) -> Option<&CardSlot> {
        self.lanes
            .iter()
            .flat_map(|l| l.cards.iter())
            .find(|c| contains(c.rect, x, y))
    }

    /// Where a drop at `pointer_y` over `lane` would insert, as an index
    /// into the lane with the dragged card excluded. Pure pass-through
    /// to the geometry resolver plus the scroll correction.
    pub fn insertion_slot(&self, lane: Lane, pointer_y: u16) -> usize {
        let ll = self.lane_layout(lane);
        let boxes: Vec<CardBox> = ll
            .cards
            .iter()
            .map(|c| CardBox::new(c.rect.y, c.rect.height))
            .collect();
        ll.hidden_above + insertion_index(&boxes, pointer_y)
    }
}

fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    fn card(id: &str) -> Item {
        Item {
            id: id.into(),
            title: id.to_uppercase(),
            description: String::new(),
        }
    }

    fn board_abc() -> Board {
        let mut board = Board::new();
        for (i, id) in ["a", "b", "c"].iter().enumerate() {
            board.insert(card(id), Lane::Todo, i);
        }
        board
    }

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 90,
        height: 20,
    };

    #[test]
    fn lanes_tile_the_area() {
        let layout = BoardLayout::compute(&Board::new(), AREA, None, &[0; 3]);
        assert_eq!(layout.lanes.len(), 3);
        assert_eq!(layout.lanes[0].area.x, 0);
        for w in layout.lanes.windows(2) {
            assert_eq!(w[1].area.x, w[0].area.x + w[0].area.width);
        }
        let total: u16 = layout.lanes.iter().map(|l| l.area.width).sum();
        assert_eq!(total, AREA.width);
    }

    #[test]
    fn cards_stack_with_gap() {
        let board = board_abc();
        let layout = BoardLayout::compute(&board, AREA, None, &[0; 3]);
        let todo = layout.lane_layout(Lane::Todo);
        assert_eq!(todo.cards.len(), 3);
        assert_eq!(todo.cards[0].rect.y, todo.content.y);
        assert_eq!(todo.cards[1].rect.y, todo.content.y + CARD_ROWS + CARD_GAP);
        assert_eq!(todo.cards[0].lane_index, 0);
        assert_eq!(todo.cards[2].id, "c");
    }

    #[test]
    fn suppressed_card_is_excluded() {
        let board = board_abc();
        let layout = BoardLayout::compute(&board, AREA, Some("b"), &[0; 3]);
        let todo = layout.lane_layout(Lane::Todo);
        let ids: Vec<&str> = todo.cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        // remaining cards keep their full-lane indices
        assert_eq!(todo.cards[1].lane_index, 2);
    }

    #[test]
    fn scrolled_cards_count_as_hidden() {
        let board = board_abc();
        let layout = BoardLayout::compute(&board, AREA, None, &[1, 0, 0]);
        let todo = layout.lane_layout(Lane::Todo);
        assert_eq!(todo.hidden_above, 1);
        assert_eq!(todo.cards[0].id, "b");
        // insertion above the first visible card lands after the hidden one
        assert_eq!(layout.insertion_slot(Lane::Todo, todo.content.y), 1);
    }

    #[test]
    fn overflow_cards_are_dropped_from_view() {
        let mut board = Board::new();
        for i in 0..20 {
            board.insert(card(&format!("c-{}", i)), Lane::Todo, i);
        }
        let layout = BoardLayout::compute(&board, AREA, None, &[0; 3]);
        let todo = layout.lane_layout(Lane::Todo);
        assert!(todo.cards.len() < 20);
        let last = todo.cards.last().unwrap();
        assert!(last.rect.y + last.rect.height <= todo.content.y + todo.content.height);
    }

    #[test]
    fn hit_testing_points() {
        let board = board_abc();
        let layout = BoardLayout::compute(&board, AREA, None, &[0; 3]);
        let todo = layout.lane_layout(Lane::Todo);
        let first = &todo.cards[0];

        assert_eq!(layout.lane_at(first.rect.x, first.rect.y), Some(Lane::Todo));
        assert_eq!(layout.card_at(first.rect.x, first.rect.y).unwrap().id, "a");
        // gap row between cards belongs to the lane but no card
        assert!(layout.card_at(first.rect.x, first.rect.y + CARD_ROWS).is_none());
        // outside every column
        assert_eq!(layout.lane_at(0, AREA.height + 5), None);
    }

    #[test]
    fn insertion_slot_matches_screen_positions() {
        let board = board_abc();
        let layout = BoardLayout::compute(&board, AREA, Some("c"), &[0; 3]);
        let todo = layout.lane_layout(Lane::Todo);
        // Above the first card's midpoint → front
        assert_eq!(layout.insertion_slot(Lane::Todo, todo.cards[0].rect.y), 0);
        // Below every midpoint → append (2 visible cards, c excluded)
        let bottom = todo.content.y + todo.content.height - 1;
        assert_eq!(layout.insertion_slot(Lane::Todo, bottom), 2);
    }

    #[test]
    fn empty_lane_inserts_at_zero() {
        let board = board_abc();
        let layout = BoardLayout::compute(&board, AREA, None, &[0; 3]);
        let done = layout.lane_layout(Lane::Done);
        assert_eq!(layout.insertion_slot(Lane::Done, done.content.y + 5), 0);
    }
}
