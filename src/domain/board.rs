//! Normalized kanban board
//!
//! A [`Board`] owns every column and card and refers to them by id only.
//! Operations never mutate a board in place: they return a new value that
//! shares every untouched column, the card map and the column order with
//! the board it was derived from.

use std::{collections::HashMap, fmt, sync::Arc};

use color_eyre::eyre::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::domain::drag::{DragEnd, DraggableLocation};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A unit of work. Content is fixed once the card exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub content: String,
}

impl Card {
    pub fn new(id: CardId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }
}

/// A titled, ordered list of card ids. `card_ids` order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub card_ids: Vec<CardId>,
}

impl Column {
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            card_ids: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.card_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.card_ids.is_empty()
    }

    pub fn position(&self, card_id: &CardId) -> Option<usize> {
        self.card_ids.iter().position(|id| id == card_id)
    }

    fn with_card_ids(&self, card_ids: Vec<CardId>) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            card_ids,
        }
    }
}

/// Issues `card-<n>` identifiers.
///
/// The counter starts right after the number of cards the board was built
/// with and only ever moves forward. Candidates that are already present on
/// the board are skipped, so an issued id never collides with an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardIdSequence {
    next: u64,
}

impl CardIdSequence {
    pub fn starting_after(count: usize) -> Self {
        Self {
            next: count as u64 + 1,
        }
    }

    pub fn peek(&self) -> u64 {
        self.next
    }

    pub fn issue(&mut self, is_taken: impl Fn(&CardId) -> bool) -> CardId {
        loop {
            let candidate = CardId::new(format!("card-{}", self.next));
            self.next += 1;
            if !is_taken(&candidate) {
                return candidate;
            }
        }
    }
}

/// Initial board layout, usually read from the `board` section of the config.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardSeed {
    #[serde(default)]
    pub columns: Vec<ColumnSeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSeed {
    pub id: ColumnId,
    pub title: String,
    /// Card contents, top to bottom
    #[serde(default)]
    pub cards: Vec<String>,
}

impl BoardSeed {
    /// To Do / In Progress / Done with three sample tasks
    pub fn sample() -> Self {
        let column = |id: &str, title: &str, cards: &[&str]| ColumnSeed {
            id: ColumnId::from(id),
            title: title.to_string(),
            cards: cards.iter().map(|c| c.to_string()).collect(),
        };
        Self {
            columns: vec![
                column("column-1", "To Do", &["Task 1", "Task 2"]),
                column("column-2", "In Progress", &["Task 3"]),
                column("column-3", "Done", &[]),
            ],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// The whole kanban state: columns, cards and column display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: Arc<HashMap<ColumnId, Arc<Column>>>,
    cards: Arc<HashMap<CardId, Arc<Card>>>,
    column_order: Arc<[ColumnId]>,
    card_ids: CardIdSequence,
}

impl Board {
    /// The sample board from [`BoardSeed::sample`]
    pub fn initial() -> Self {
        Self::build(&BoardSeed::sample())
    }

    /// Build a board from a seed. Cards are numbered `card-1`, `card-2`, ...
    /// in column order, top to bottom.
    pub fn from_seed(seed: &BoardSeed) -> Result<Self> {
        if seed.is_empty() {
            bail!("board must have at least one column");
        }
        let mut seen = Vec::with_capacity(seed.columns.len());
        for column in &seed.columns {
            if column.id.as_str().is_empty() {
                bail!("column '{}' has an empty id", column.title);
            }
            if seen.contains(&&column.id) {
                bail!("duplicate column id: {}", column.id);
            }
            seen.push(&column.id);
        }

        let board = Self::build(seed);
        board.validate()?;
        Ok(board)
    }

    fn build(seed: &BoardSeed) -> Self {
        let mut columns = HashMap::with_capacity(seed.columns.len());
        let mut cards = HashMap::new();
        let mut column_order = Vec::with_capacity(seed.columns.len());

        for column_seed in &seed.columns {
            let mut column = Column::new(column_seed.id.clone(), column_seed.title.clone());
            for content in &column_seed.cards {
                let id = CardId::new(format!("card-{}", cards.len() + 1));
                column.card_ids.push(id.clone());
                cards.insert(id.clone(), Arc::new(Card::new(id, content.clone())));
            }
            column_order.push(column.id.clone());
            columns.insert(column.id.clone(), Arc::new(column));
        }

        let card_ids = CardIdSequence::starting_after(cards.len());
        Self {
            columns: Arc::new(columns),
            cards: Arc::new(cards),
            column_order: Arc::from(column_order),
            card_ids,
        }
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id).map(Arc::as_ref)
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.get(id).map(Arc::as_ref)
    }

    pub fn column_order(&self) -> &[ColumnId] {
        &self.column_order
    }

    pub fn columns_in_order(&self) -> impl Iterator<Item = &Column> + '_ {
        self.column_order.iter().filter_map(|id| self.column(id))
    }

    /// Cards of a column in display order
    pub fn cards_in(&self, column_id: &ColumnId) -> Vec<&Card> {
        self.column(column_id)
            .map(|column| column.card_ids.iter().filter_map(|id| self.card(id)).collect())
            .unwrap_or_default()
    }

    pub fn column_count(&self) -> usize {
        self.column_order.len()
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn next_card_number(&self) -> u64 {
        self.card_ids.peek()
    }

    pub fn position_of(&self, card_id: &CardId) -> Option<DraggableLocation> {
        self.columns_in_order().find_map(|column| {
            column
                .position(card_id)
                .map(|index| DraggableLocation::new(column.id.clone(), index))
        })
    }

    /// True when both boards hold the very same allocation for `column_id`.
    pub fn shares_column(&self, other: &Board, column_id: &ColumnId) -> bool {
        match (self.columns.get(column_id), other.columns.get(column_id)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// True when both boards hold the very same card map.
    pub fn shares_cards(&self, other: &Board) -> bool {
        Arc::ptr_eq(&self.cards, &other.cards)
    }

    /// True when `other` is a plain copy of this board, which is what every
    /// refused or no-op operation returns.
    pub fn same_allocation(&self, other: &Board) -> bool {
        Arc::ptr_eq(&self.columns, &other.columns) && self.shares_cards(other)
    }

    /// Apply a finished drag.
    ///
    /// Returns an identical board when the drop has no destination, lands on
    /// its own source slot, or does not describe a card that is actually at
    /// the source position. A destination index past the end appends.
    pub fn move_card(&self, drag: &DragEnd) -> Board {
        let Some(destination) = drag.destination.as_ref() else {
            log::debug!("{} dropped outside of any column", drag.draggable_id);
            return self.clone();
        };
        if drag.is_noop() {
            return self.clone();
        }

        let source = &drag.source;
        let Some(start) = self.columns.get(&source.droppable_id) else {
            log::warn!("move ignored: unknown source column {}", source.droppable_id);
            return self.clone();
        };
        if start.card_ids.get(source.index) != Some(&drag.draggable_id) {
            log::warn!(
                "move ignored: {} is not at {}[{}]",
                drag.draggable_id,
                source.droppable_id,
                source.index
            );
            return self.clone();
        }
        let Some(finish) = self.columns.get(&destination.droppable_id) else {
            log::warn!(
                "move ignored: unknown destination column {}",
                destination.droppable_id
            );
            return self.clone();
        };

        let mut columns = (*self.columns).clone();
        if source.droppable_id == destination.droppable_id {
            let mut card_ids = start.card_ids.clone();
            let card_id = card_ids.remove(source.index);
            let index = destination.index.min(card_ids.len());
            card_ids.insert(index, card_id);
            columns.insert(start.id.clone(), Arc::new(start.with_card_ids(card_ids)));
        } else {
            let mut start_card_ids = start.card_ids.clone();
            start_card_ids.remove(source.index);

            let mut finish_card_ids = finish.card_ids.clone();
            let index = destination.index.min(finish_card_ids.len());
            finish_card_ids.insert(index, drag.draggable_id.clone());

            columns.insert(
                start.id.clone(),
                Arc::new(start.with_card_ids(start_card_ids)),
            );
            columns.insert(
                finish.id.clone(),
                Arc::new(finish.with_card_ids(finish_card_ids)),
            );
        }

        Self {
            columns: Arc::new(columns),
            cards: Arc::clone(&self.cards),
            column_order: Arc::clone(&self.column_order),
            card_ids: self.card_ids,
        }
    }

    /// Append a new card to the tail of `column_id`.
    ///
    /// Returns the new board and the id issued for the card, or `None` when
    /// the column does not exist.
    pub fn add_card(
        &self,
        column_id: &ColumnId,
        content: impl Into<String>,
    ) -> Option<(Board, CardId)> {
        let Some(column) = self.columns.get(column_id) else {
            log::warn!("add ignored: unknown column {column_id}");
            return None;
        };

        let mut card_ids = self.card_ids;
        let id = card_ids.issue(|candidate| self.cards.contains_key(candidate));

        let mut cards = (*self.cards).clone();
        cards.insert(id.clone(), Arc::new(Card::new(id.clone(), content)));

        let mut column_card_ids = column.card_ids.clone();
        column_card_ids.push(id.clone());
        let mut columns = (*self.columns).clone();
        columns.insert(
            column.id.clone(),
            Arc::new(column.with_card_ids(column_card_ids)),
        );

        let board = Self {
            columns: Arc::new(columns),
            cards: Arc::new(cards),
            column_order: Arc::clone(&self.column_order),
            card_ids,
        };
        Some((board, id))
    }

    /// Check the structural invariants and report the first violation.
    pub fn validate(&self) -> Result<()> {
        let mut ordered: Vec<&ColumnId> = Vec::with_capacity(self.column_order.len());
        for id in self.column_order.iter() {
            if !self.columns.contains_key(id) {
                bail!("column order references unknown column {id}");
            }
            if ordered.contains(&id) {
                bail!("column {id} appears twice in the column order");
            }
            ordered.push(id);
        }

        let mut owners: HashMap<&CardId, &ColumnId> = HashMap::new();
        for (key, column) in self.columns.iter() {
            if key != &column.id {
                bail!("column {} is stored under {key}", column.id);
            }
            for card_id in &column.card_ids {
                if !self.cards.contains_key(card_id) {
                    bail!("column {key} references unknown card {card_id}");
                }
                if let Some(previous) = owners.insert(card_id, key) {
                    if previous == key {
                        bail!("card {card_id} appears twice in column {key}");
                    }
                    bail!("card {card_id} appears in both {previous} and {key}");
                }
            }
        }

        for (key, card) in self.cards.iter() {
            if key != &card.id {
                bail!("card {} is stored under {key}", card.id);
            }
        }
        Ok(())
    }
}
