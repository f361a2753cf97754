use alloc::vec::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// How a round ended. Every ending is followed by an automatic reset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Lost,
    Won,
}

impl GameOutcome {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Lost => "You lost!",
            Self::Won => "You won!",
        }
    }
}

/// Receives round endings, after the final board is drawn and before it is replaced.
pub trait Notifier {
    fn notify(&mut self, outcome: GameOutcome, board: &Board);
}

impl Notifier for () {
    fn notify(&mut self, _outcome: GameOutcome, _board: &Board) {}
}

impl Notifier for Vec<GameOutcome> {
    fn notify(&mut self, outcome: GameOutcome, _board: &Board) {
        self.push(outcome);
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, outcome: GameOutcome, board: &Board) {
        (**self).notify(outcome, board)
    }
}

/// Owns the board and the surface it is drawn on, and applies player commands to both.
#[derive(Debug)]
pub struct BoardEngine<S, N = ()> {
    config: GameConfig,
    board: Board,
    surface: Option<S>,
    notifier: N,
    rng: SmallRng,
    round: u32,
}

/// Builds an engine with a freshly generated board and draws it.
///
/// Every later layout comes from the same seeded generator, so `seed` fixes the whole sequence of rounds.
pub fn create_engine<S: Surface, N: Notifier>(
    config: GameConfig,
    surface: Option<S>,
    notifier: N,
    seed: u64,
) -> BoardEngine<S, N> {
    BoardEngine::new(config, surface, notifier, seed)
}

impl<S: Surface, N: Notifier> BoardEngine<S, N> {
    pub fn new(config: GameConfig, surface: Option<S>, notifier: N, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = generate_board(&config, &mut rng);
        log::debug!(
            "engine created: {:?}, {} mines placed",
            config,
            board.mine_count()
        );

        let mut engine = Self {
            config,
            board,
            surface,
            notifier,
            rng,
            round: 0,
        };
        engine.render();
        engine
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.board.get(coords).copied()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Number of resets so far, every finished round counts once.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Repaints the whole board, no-op without a surface.
    pub fn render(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            render_board(&self.board, self.config.cell_size, surface);
        }
    }

    pub fn check_win(&self) -> bool {
        self.board.check_win()
    }

    /// Reveals exactly one cell. Hitting a mine or uncovering the last safe cell ends the round, which notifies and
    /// resets before returning.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        let cell = self.board[coords];

        if cell.is_revealed() {
            return Ok(RevealOutcome::NoChange);
        }

        self.board[coords].reveal();
        self.render();

        if cell.is_mine() {
            self.finish(GameOutcome::Lost);
            Ok(RevealOutcome::HitMine)
        } else if self.check_win() {
            self.finish(GameOutcome::Won);
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;

        Ok(if self.board[coords].toggle_flag() {
            self.render();
            MarkOutcome::Changed
        } else {
            MarkOutcome::NoChange
        })
    }

    /// Replaces the board with a new layout for the same configuration and draws it.
    pub fn reset(&mut self) {
        self.board = generate_board(&self.config, &mut self.rng);
        self.round = self.round.saturating_add(1);
        log::debug!(
            "board reset, round {}, {} mines placed",
            self.round,
            self.board.mine_count()
        );
        self.render();
    }

    /// Applies one command. Commands outside the grid are dropped without touching the board.
    pub fn dispatch(&mut self, command: Command) -> Option<GameOutcome> {
        log::trace!("dispatch: {:?}", command);

        let result = match command {
            Command::Reveal { x, y } => self.reveal((x, y)).map(RevealOutcome::game_outcome),
            Command::ToggleFlag { x, y } => self.toggle_flag((x, y)).map(|_| None),
        };

        result.unwrap_or_else(|err| {
            log::trace!("ignored {:?}: {}", command, err);
            None
        })
    }

    /// Dispatches `commands` in order, collecting every round ending they cause.
    pub fn replay(&mut self, commands: impl IntoIterator<Item = Command>) -> Vec<GameOutcome> {
        commands
            .into_iter()
            .filter_map(|command| self.dispatch(command))
            .collect()
    }

    fn finish(&mut self, outcome: GameOutcome) {
        log::debug!("round {} finished: {:?}", self.round, outcome);
        self.notifier.notify(outcome, &self.board);
        self.reset();
    }
}
