//! Game state module - one play session
//!
//! Ties together the board, the active piece, the randomizer, and scoring. It handles
//! gravity timing, player actions, locking, line clears, hold/swap, and top-out.
//!
//! The session ends (game over) when a freshly spawned piece already collides. After
//! that, ticks and actions no longer change anything.

use crate::board::Board;
use crate::piece::Piece;
use crate::randomizer::{Preview, Randomizer};
use crate::scoring::{drop_score, fall_interval_ms, level_for_lines, line_clear_score};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, PieceKind, Variant};

/// Emitted each time a piece locks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    /// Cells the piece added to the board
    pub cells_added: usize,
    pub lines_cleared: usize,
    /// Line clear points awarded (always 0 in the simple variant)
    pub line_clear_score: u32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    variant: Variant,
    board: Board,
    active: Piece,
    /// Held piece, kept in the orientation it had when it was held
    hold: Option<Piece>,
    hold_used: bool,
    randomizer: Randomizer,
    score: u32,
    lines: u32,
    level: u32,
    fall_timer_ms: u32,
    game_over: bool,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Start a session on an empty board
    pub fn new(variant: Variant, seed: u64) -> Self {
        Self::with_board(variant, seed, Board::new())
    }

    /// Start a session on a prepared board.
    ///
    /// The first spawn is checked like any other, so a blocked spawn area ends the
    /// session immediately.
    pub fn with_board(variant: Variant, seed: u64, board: Board) -> Self {
        let mut randomizer = Randomizer::for_variant(variant, seed);
        let active = Piece::new(randomizer.draw());
        let game_over = active.collides(&board);

        Self {
            variant,
            board,
            active,
            hold: None,
            hold_used: false,
            randomizer,
            score: 0,
            lines: 0,
            level: 1,
            fall_timer_ms: 0,
            game_over,
            last_event: None,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn hold_piece(&self) -> Option<Piece> {
        self.hold
    }

    /// Whether hold was already used since the last lock
    pub fn hold_used(&self) -> bool {
        self.hold_used
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Upcoming kinds (empty in the simple variant)
    pub fn next_queue(&self) -> Preview {
        self.randomizer.preview()
    }

    /// Current gravity interval
    pub fn fall_interval_ms(&self) -> u32 {
        fall_interval_ms(self.level)
    }

    /// Where the active piece would land if hard-dropped now
    pub fn ghost(&self) -> Piece {
        self.active.ghost(&self.board)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let guides = self.variant.shows_guides();

        out.variant = self.variant;
        self.board.write_grid(&mut out.grid);
        out.active = self.active;
        out.ghost = guides.then(|| self.ghost());
        out.hold = self.hold;
        out.next_queue = self.randomizer.preview();
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Replace the active piece with the next one from the randomizer.
    ///
    /// Returns false (and ends the session) if the new piece collides at spawn.
    pub fn spawn_piece(&mut self) -> bool {
        self.active = Piece::new(self.randomizer.draw());
        if self.active.collides(&self.board) {
            self.game_over = true;
        }
        !self.game_over
    }

    /// Advance the gravity clock by `elapsed_ms`.
    ///
    /// Once the accumulated time reaches the fall interval the timer restarts from
    /// zero and the piece either falls one row or locks. Returns true on a gravity
    /// step.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.fall_interval_ms() {
            return false;
        }

        self.fall_timer_ms = 0;
        if !self.active.try_move(0, 1, &self.board) {
            self.lock_piece();
        }
        true
    }

    /// Apply a game action. Returns true if it changed the session.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.active.try_move(-1, 0, &self.board),
            GameAction::MoveRight => self.active.try_move(1, 0, &self.board),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.active.try_rotate(&self.board),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::Hold => self.hold(),
        }
    }

    /// Move down one row, scoring a point in the extended variant
    pub(crate) fn soft_drop(&mut self) -> bool {
        let moved = self.active.try_move(0, 1, &self.board);
        if moved && self.variant.scores() {
            self.score += drop_score(1, false);
        }
        moved
    }

    /// Drop to the lowest legal row and lock. Returns the rows fallen.
    pub(crate) fn hard_drop(&mut self) -> u32 {
        let distance = self.active.drop_distance(&self.board);
        self.active.y += distance as i8;

        if self.variant.scores() {
            self.score += drop_score(distance as u32, true);
        }

        self.lock_piece();
        distance as u32
    }

    /// Hold the active piece, or swap it with the held one.
    ///
    /// With an empty slot the next piece spawns (and may top out). With a held piece
    /// the two trade places and the incoming one is re-centered at the top without a
    /// collision check. Allowed once per lock, extended variant only.
    pub fn hold(&mut self) -> bool {
        if !self.variant.holds() || self.hold_used || self.game_over {
            return false;
        }

        match self.hold.replace(self.active) {
            Some(held) => {
                self.active = Piece::with_shape(held.kind, held.shape);
            }
            None => {
                self.spawn_piece();
            }
        }

        self.hold_used = true;
        true
    }

    /// Commit the active piece, clear rows, score, and spawn the next piece
    pub fn lock_piece(&mut self) {
        let active = self.active;
        let cells_added = self
            .board
            .lock_piece(&active.shape, active.x, active.y, active.kind);
        let lines_cleared = self.board.clear_full_rows().len();

        let mut points = 0;
        if self.variant.scores() && lines_cleared > 0 {
            points = line_clear_score(lines_cleared, self.level);
            self.score += points;
            self.lines += lines_cleared as u32;
            self.level = level_for_lines(self.lines);
        }

        self.hold_used = false;
        self.last_event = Some(LockEvent {
            kind: active.kind,
            cells_added,
            lines_cleared,
            line_clear_score: points,
        });

        self.spawn_piece();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Variant::Extended, 1)
    }
}
