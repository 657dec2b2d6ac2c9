//! Game state module - the game loop state machine
//!
//! Ties together the board, the active piece and the spawner. The host calls
//! [`GameState::tick`] once per frame with the commands it collected and the
//! time that passed; the core never reads a clock or an input device itself.

use tracing::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::piece::Piece;
use crate::snapshot::{ActiveSnapshot, RenderSnapshot};
use crate::spawner::Spawner;
use crate::types::{cell_color_id, Command};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Running,
    /// Terminal: no further input or gravity is applied.
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Piece,
    spawner: Spawner,
    phase: GamePhase,
    fall_timer_ms: u32,
    fall_interval_ms: u32,
    lines_cleared: u32,
    quit_requested: bool,
}

impl GameState {
    /// Create a new game and spawn the first piece.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.cols, config.rows)?;
        Ok(Self::with_board(board, config.seed, config.fall_interval_ms))
    }

    /// Start a game on an existing board (e.g. one prepared by a test).
    pub fn with_board(board: Board, seed: u32, fall_interval_ms: u32) -> Self {
        let mut spawner = Spawner::new(seed);
        let (active, blocked) = spawner.spawn(&board);
        let phase = if blocked {
            info!("first piece is blocked, game over");
            GamePhase::GameOver
        } else {
            GamePhase::Running
        };

        Self {
            board,
            active,
            spawner,
            phase,
            fall_timer_ms: 0,
            fall_interval_ms,
            lines_cleared: 0,
            quit_requested: false,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// Total rows removed since the game started
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Shift the active piece if the target position is free.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.is_game_over() {
            return false;
        }
        let (x, y) = (self.active.x + dx, self.active.y + dy);
        if self.board.collides(&self.active.shape, x, y) {
            return false;
        }
        self.active.x = x;
        self.active.y = y;
        true
    }

    /// Rotate the active piece clockwise in place. A colliding rotation is
    /// discarded; there are no wall kicks.
    pub fn try_rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        let rotated = self.active.rotated();
        if self.board.collides(&rotated, self.active.x, self.active.y) {
            return false;
        }
        self.active.shape = rotated;
        true
    }

    /// Apply one player command. Returns whether anything changed.
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            Command::SoftDrop => self.try_move(0, 1),
            Command::Rotate => self.try_rotate(),
            Command::Quit => {
                self.quit_requested = true;
                true
            }
        }
    }

    /// Accumulate elapsed time and apply gravity once the fall interval is
    /// exceeded. Returns true if a gravity step ran.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms <= self.fall_interval_ms {
            return false;
        }
        self.fall_timer_ms = 0;
        self.gravity_step();
        true
    }

    /// Move down one row, or lock the piece and bring in the next one.
    fn gravity_step(&mut self) {
        if self.try_move(0, 1) {
            return;
        }
        self.lock_piece();
    }

    /// Merge the active piece, clear full rows and spawn the next piece.
    fn lock_piece(&mut self) {
        if self.is_game_over() {
            return;
        }
        let piece = &self.active;
        self.board.merge(&piece.shape, piece.x, piece.y, piece.kind);
        debug!(kind = piece.kind.as_str(), x = piece.x, y = piece.y, "piece locked");

        let cleared = self.board.clear_lines();
        if cleared > 0 {
            self.lines_cleared += cleared as u32;
            debug!(cleared, total = self.lines_cleared, "rows cleared");
        }

        let (next, blocked) = self.spawner.spawn(&self.board);
        self.active = next;
        self.fall_timer_ms = 0;
        if blocked {
            self.phase = GamePhase::GameOver;
            info!(lines = self.lines_cleared, "game over");
        }
    }

    /// One host-loop iteration: commands in arrival order, then gravity,
    /// then a snapshot for the renderer.
    pub fn tick(&mut self, commands: &[Command], elapsed_ms: u32) -> RenderSnapshot {
        let mut out = RenderSnapshot::default();
        self.tick_into(commands, elapsed_ms, &mut out);
        out
    }

    /// [`GameState::tick`] writing into a snapshot the host keeps across frames.
    pub fn tick_into(&mut self, commands: &[Command], elapsed_ms: u32, out: &mut RenderSnapshot) {
        for &command in commands {
            self.apply_command(command);
        }
        self.advance(elapsed_ms);
        self.snapshot_into(out);
    }

    /// Fill `out` with the current frame, reusing its allocations.
    pub fn snapshot_into(&self, out: &mut RenderSnapshot) {
        out.cols = self.board.cols();
        out.rows = self.board.rows();
        out.board.clear();
        out.board
            .extend(self.board.cells().iter().map(|&cell| cell_color_id(cell)));
        out.game_over = self.is_game_over();
        out.lines_cleared = self.lines_cleared;
        out.quit_requested = self.quit_requested;

        if out.game_over {
            out.active = None;
            return;
        }
        let active = out.active.get_or_insert_with(|| ActiveSnapshot {
            kind: self.active.kind,
            color_id: 0,
            cells: Vec::new(),
        });
        active.kind = self.active.kind;
        active.color_id = self.active.color_id();
        active.cells.clear();
        active.cells.extend(self.active.cells());
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let mut out = RenderSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_board(Board::default(), 1, crate::types::FALL_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    fn game(seed: u32) -> GameState {
        GameState::new(&GameConfig::default().with_seed(seed)).unwrap()
    }

    #[test]
    fn new_game_is_running_with_centered_piece() {
        let state = game(1);
        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.active().y, 0);
        assert_eq!(state.fall_timer_ms(), 0);
    }

    #[test]
    fn invalid_config_fails_fast() {
        let cfg = GameConfig::default().with_size(0, 0);
        assert!(matches!(
            GameState::new(&cfg),
            Err(ConfigError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn oversized_config_fails_fast() {
        let cfg = GameConfig::default().with_size(40_000, 4);
        assert!(matches!(
            GameState::new(&cfg),
            Err(ConfigError::BoardTooLarge { cols: 40_000, .. })
        ));
    }

    #[test]
    fn resting_piece_locks_only_on_gravity() {
        let mut state = game(5);
        while state.apply_command(Command::SoftDrop) {}
        let resting = state.active().clone();

        // Commands and short frames never lock a resting piece.
        state.tick(&[Command::SoftDrop, Command::SoftDrop], 0);
        state.tick(&[], state.fall_interval_ms());
        assert_eq!(state.active(), &resting);
        assert!(state.board().cells().iter().all(|c| c.is_none()));

        state.tick(&[], 1);
        assert_eq!(state.active().y, 0);
        for (x, y) in resting.cells() {
            assert_eq!(state.board().get(x, y), Some(Some(resting.kind)));
        }
    }

    #[test]
    fn moves_stop_at_walls() {
        let mut state = game(2);
        while state.apply_command(Command::MoveLeft) {}
        assert_eq!(state.active().x, 0);

        while state.apply_command(Command::MoveRight) {}
        let width = state.active().shape.width() as i32;
        assert_eq!(state.active().x + width, 10);
        assert!(!state.apply_command(Command::MoveRight));
    }

    #[test]
    fn soft_drop_stops_at_floor() {
        let mut state = game(3);
        while state.apply_command(Command::SoftDrop) {}
        let height = state.active().shape.height() as i32;
        assert_eq!(state.active().y + height, 20);
    }

    #[test]
    fn rotation_rejected_against_wall() {
        let mut board = Board::default();
        // A floor at row 2 leaves no room for a vertical bar.
        for x in 0..10 {
            board.set(x, 2, Some(ShapeKind::O));
        }
        let mut state = GameState::with_board(board, 1, 500);
        assert_eq!(state.phase(), GamePhase::Running);
        state.active = Piece::new(ShapeKind::I, 0, 0);

        assert!(!state.apply_command(Command::Rotate));
        assert_eq!(state.active().shape.width(), 4);
    }

    #[test]
    fn gravity_waits_for_interval_to_be_exceeded() {
        let mut state = game(4);
        let y0 = state.active().y;

        assert!(!state.advance(500));
        assert_eq!(state.active().y, y0);
        assert_eq!(state.fall_timer_ms(), 500);

        assert!(state.advance(1));
        assert_eq!(state.active().y, y0 + 1);
        assert_eq!(state.fall_timer_ms(), 0);
    }

    #[test]
    fn quit_is_recorded_even_after_game_over() {
        let mut state = game(5);
        state.phase = GamePhase::GameOver;
        let snap = state.tick(&[Command::Quit], 16);
        assert!(snap.quit_requested);
        assert!(snap.game_over);
        assert!(snap.active.is_none());
    }

    #[test]
    fn snapshot_into_reuses_buffer() {
        let state = game(6);
        let mut snap = RenderSnapshot::default();
        state.snapshot_into(&mut snap);
        state.snapshot_into(&mut snap);

        assert_eq!(snap.board.len(), 200);
        let active = snap.active.as_ref().unwrap();
        assert_eq!(active.cells.len(), 4);
        assert_eq!(active.color_id, state.active().kind.color_id());
    }
}
