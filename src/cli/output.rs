use serde::Serialize;

use crate::model::{Board, Item, Lane};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct CardJson {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub status: Lane,
    pub position: usize,
}

#[derive(Serialize)]
pub struct LaneJson {
    pub lane: Lane,
    pub cards: Vec<CardJson>,
}

#[derive(Serialize)]
pub struct BoardJson {
    pub lanes: Vec<LaneJson>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn card_to_json(item: &Item, lane: Lane, position: usize) -> CardJson {
    CardJson {
        id: item.id.clone(),
        title: item.title.clone(),
        description: item.description.clone(),
        status: lane,
        position,
    }
}

pub fn lane_to_json(board: &Board, lane: Lane) -> LaneJson {
    LaneJson {
        lane,
        cards: board
            .lane(lane)
            .iter()
            .enumerate()
            .map(|(i, item)| card_to_json(item, lane, i))
            .collect(),
    }
}

pub fn board_to_json(board: &Board) -> BoardJson {
    BoardJson {
        lanes: Lane::ALL.iter().map(|&l| lane_to_json(board, l)).collect(),
    }
}

/// One card as a plain listing row: "c-3  [inprogress:0] Fix the bug"
pub fn card_row(item: &Item, lane: Lane, position: usize) -> String {
    format!("{}  [{}:{}] {}", item.id, lane, position, item.title)
}
