use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error type for board mutations
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("no card with id \"{0}\"")]
    ItemNotFound(String),
    #[error("unknown lane \"{0}\" — expected todo, inprogress, or done")]
    UnknownLane(String),
}

/// The three fixed lanes of the board.
///
/// The set is closed: lane membership is always one of these, so the board
/// itself cannot be handed an invalid lane. Parsing an arbitrary string
/// (CLI argument, edited board.json) is where `UnknownLane` surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Todo,
    InProgress,
    Done,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Todo, Lane::InProgress, Lane::Done];

    /// The `status` string used in board.json and on the CLI
    pub fn as_str(self) -> &'static str {
        match self {
            Lane::Todo => "todo",
            Lane::InProgress => "inprogress",
            Lane::Done => "done",
        }
    }

    /// Display title for lane headers
    pub fn title(self) -> &'static str {
        match self {
            Lane::Todo => "To Do",
            Lane::InProgress => "In Progress",
            Lane::Done => "Done",
        }
    }

    /// Position in `Lane::ALL` (also the storage index inside `Board`)
    pub fn index(self) -> usize {
        match self {
            Lane::Todo => 0,
            Lane::InProgress => 1,
            Lane::Done => 2,
        }
    }

    /// Lane to the left, saturating at `Todo`
    pub fn prev(self) -> Lane {
        match self {
            Lane::Todo => Lane::Todo,
            Lane::InProgress => Lane::Todo,
            Lane::Done => Lane::InProgress,
        }
    }

    /// Lane to the right, saturating at `Done`
    pub fn next(self) -> Lane {
        match self {
            Lane::Todo => Lane::InProgress,
            Lane::InProgress => Lane::Done,
            Lane::Done => Lane::Done,
        }
    }
}

impl FromStr for Lane {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Lane, BoardError> {
        match s {
            "todo" => Ok(Lane::Todo),
            "inprogress" => Ok(Lane::InProgress),
            "done" => Ok(Lane::Done),
            other => Err(BoardError::UnknownLane(other.to_string())),
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One card on the board. Lane membership is not stored on the card —
/// it is implied by which lane vector holds it, so a card can never
/// claim one lane while sitting in another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// One record in the persisted board.json array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: Lane,
}

/// A value copy of the whole board at a point in time.
///
/// Array order is significant: filtering on `status` yields each lane's
/// cards in lane order. Mutating the live board never touches a snapshot
/// already taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    pub records: Vec<Record>,
}

impl Snapshot {
    /// Per-lane card count
    pub fn lane_count(&self, lane: Lane) -> usize {
        self.records.iter().filter(|r| r.status == lane).count()
    }
}

/// The three ordered lanes and their cards. Sole owner of card data:
/// everything else holds ids and indices into it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    lanes: [Vec<Item>; 3],
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    /// A fresh board with one sample card per lane, used when no
    /// board.json exists yet.
    pub fn seeded() -> Self {
        let mut board = Board::new();
        board.insert(
            Item {
                id: "c-1".into(),
                title: "Plan the week".into(),
                description: "Drag cards between lanes with the mouse".into(),
            },
            Lane::Todo,
            0,
        );
        board.insert(
            Item {
                id: "c-2".into(),
                title: "Try plank".into(),
                description: "Press ? for keys".into(),
            },
            Lane::InProgress,
            0,
        );
        board.insert(
            Item {
                id: "c-3".into(),
                title: "Install plank".into(),
                description: String::new(),
            },
            Lane::Done,
            0,
        );
        board
    }

    /// Cards in a lane, in order
    pub fn lane(&self, lane: Lane) -> &[Item] {
        &self.lanes[lane.index()]
    }

    pub fn lane_len(&self, lane: Lane) -> usize {
        self.lanes[lane.index()].len()
    }

    /// Total card count across all lanes
    pub fn len(&self) -> usize {
        self.lanes.iter().map(|l| l.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.iter().all(|l| l.is_empty())
    }

    /// Which lane holds a card, and at what index
    pub fn locate(&self, item_id: &str) -> Option<(Lane, usize)> {
        for lane in Lane::ALL {
            if let Some(idx) = self.lanes[lane.index()].iter().position(|i| i.id == item_id) {
                return Some((lane, idx));
            }
        }
        None
    }

    pub fn get(&self, item_id: &str) -> Option<&Item> {
        let (lane, idx) = self.locate(item_id)?;
        Some(&self.lanes[lane.index()][idx])
    }

    /// Insert a card at `index` (clamped to `[0, len]`)
    pub fn insert(&mut self, item: Item, lane: Lane, index: usize) {
        let cards = &mut self.lanes[lane.index()];
        let index = index.min(cards.len());
        cards.insert(index, item);
    }

    /// Remove and reinsert a card within its current lane.
    ///
    /// Equal-index calls are a no-op on the data but still return `Ok`,
    /// so the caller re-renders and saves like any other commit.
    pub fn move_within(&mut self, item_id: &str, new_index: usize) -> Result<(), BoardError> {
        let (lane, idx) = self
            .locate(item_id)
            .ok_or_else(|| BoardError::ItemNotFound(item_id.to_string()))?;
        let cards = &mut self.lanes[lane.index()];
        let new_index = new_index.min(cards.len() - 1);
        if new_index == idx {
            return Ok(());
        }
        let item = cards.remove(idx);
        cards.insert(new_index, item);
        Ok(())
    }

    /// Remove a card from its current lane and insert it into `target`
    /// at `new_index` (clamped). The card is never observable in zero
    /// or two lanes: remove and insert happen in one call.
    pub fn move_across(
        &mut self,
        item_id: &str,
        target: Lane,
        new_index: usize,
    ) -> Result<(), BoardError> {
        let (lane, idx) = self
            .locate(item_id)
            .ok_or_else(|| BoardError::ItemNotFound(item_id.to_string()))?;
        if lane == target {
            return self.move_within(item_id, new_index);
        }
        let item = self.lanes[lane.index()].remove(idx);
        self.insert(item, target, new_index);
        Ok(())
    }

    /// Delete a card from whichever lane holds it. Idempotent: deleting
    /// an unknown id is a no-op and returns `false`.
    pub fn remove(&mut self, item_id: &str) -> bool {
        match self.locate(item_id) {
            Some((lane, idx)) => {
                self.lanes[lane.index()].remove(idx);
                true
            }
            None => false,
        }
    }

    /// Replace a card's title and description in place
    pub fn update_text(
        &mut self,
        item_id: &str,
        title: String,
        description: String,
    ) -> Result<(), BoardError> {
        let (lane, idx) = self
            .locate(item_id)
            .ok_or_else(|| BoardError::ItemNotFound(item_id.to_string()))?;
        let item = &mut self.lanes[lane.index()][idx];
        item.title = title;
        item.description = description;
        Ok(())
    }

    /// Next unused id of the form `c-<n>`. Ids from hand-edited
    /// board.json files that don't match the pattern are skipped.
    pub fn next_id(&self) -> String {
        let max = self
            .lanes
            .iter()
            .flatten()
            .filter_map(|i| i.id.strip_prefix("c-"))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        format!("c-{}", max + 1)
    }

    /// Immutable value copy of the whole board, lane by lane
    pub fn snapshot(&self) -> Snapshot {
        let mut records = Vec::with_capacity(self.len());
        for lane in Lane::ALL {
            for item in self.lane(lane) {
                records.push(Record {
                    id: item.id.clone(),
                    title: item.title.clone(),
                    description: item.description.clone(),
                    status: lane,
                });
            }
        }
        Snapshot { records }
    }

    /// Rebuild a board from a snapshot by filtering on `status`,
    /// preserving array order within each lane.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut board = Board::new();
        for record in &snapshot.records {
            board.lanes[record.status.index()].push(Item {
                id: record.id.clone(),
                title: record.title.clone(),
                description: record.description.clone(),
            });
        }
        board
    }
}
