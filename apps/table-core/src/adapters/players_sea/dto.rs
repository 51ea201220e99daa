//! DTOs for players_sea adapter.

/// DTO for seating a new player.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub name: String,
    pub room_id: String,
    pub position: i32,
    pub stack: i64,
    pub cards: Option<String>,
}

impl PlayerCreate {
    pub fn new(
        name: impl Into<String>,
        position: i32,
        stack: i64,
        room_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            room_id: room_id.into(),
            position,
            stack,
            cards: None,
        }
    }

    pub fn with_cards(mut self, cards: impl Into<String>) -> Self {
        self.cards = Some(cards.into());
        self
    }
}

/// Closed set of mutable player fields.
///
/// `None` = no change. Identity fields (name, room, position) are not
/// updatable; a player who wants another seat leaves and is seated again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerUpdate {
    pub id: i64,
    pub stack: Option<i64>,
    pub last_bet: Option<i64>,
    pub fold: Option<bool>,
    pub all_in: Option<bool>,
    pub make_turn: Option<bool>,
    pub is_current_player: Option<bool>,
    pub cards: Option<String>,
}

impl PlayerUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn with_stack(mut self, stack: i64) -> Self {
        self.stack = Some(stack);
        self
    }

    pub fn with_last_bet(mut self, last_bet: i64) -> Self {
        self.last_bet = Some(last_bet);
        self
    }

    pub fn with_fold(mut self, fold: bool) -> Self {
        self.fold = Some(fold);
        self
    }

    pub fn with_all_in(mut self, all_in: bool) -> Self {
        self.all_in = Some(all_in);
        self
    }

    pub fn with_make_turn(mut self, make_turn: bool) -> Self {
        self.make_turn = Some(make_turn);
        self
    }

    pub fn with_current(mut self, is_current_player: bool) -> Self {
        self.is_current_player = Some(is_current_player);
        self
    }

    pub fn with_cards(mut self, cards: impl Into<String>) -> Self {
        self.cards = Some(cards.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_none()
            && self.last_bet.is_none()
            && self.fold.is_none()
            && self.all_in.is_none()
            && self.make_turn.is_none()
            && self.is_current_player.is_none()
            && self.cards.is_none()
    }
}
