use std::fmt;

use log::{debug, info, trace};

use crate::constants::BOARD_SIZE;
use crate::movegen::reachable_cells;
use crate::stage::{Stage, StageError, StageSet};
use crate::types::{Bounds, Cell, Destinations, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl Status {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A result is waiting to be acknowledged.
    Finished,
    NoMovesLeft,
    Unreachable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Won,
    Lost,
    Rejected(Rejection),
}

impl MoveOutcome {
    pub const fn is_rejected(self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub stage_index: usize,
    pub player: Cell,
    pub moves_remaining: u8,
    /// Empty whenever `moves_remaining` is 0 or `status` is terminal.
    pub destinations: Destinations,
    pub status: Status,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub stage_index: usize,
    pub stage_id: String,
    pub piece: PieceKind,
    pub player: Cell,
    pub goal: Cell,
    pub blocked: Vec<Cell>,
    pub moves_remaining: u8,
    pub move_budget: u8,
    pub destinations: Vec<Cell>,
    pub status: Status,
}

#[derive(Debug, Clone)]
pub struct Game {
    stages: StageSet,
    state: GameState,
}

impl Game {
    pub fn new(stages: StageSet) -> Self {
        let state = fresh_state(&stages, 0).expect("stage sets are never empty");
        debug!("starting at stage 0 of {}", stages.len());
        Self { stages, state }
    }

    pub fn builtin() -> Self {
        Self::new(StageSet::builtin())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn stages(&self) -> &StageSet {
        &self.stages
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn stage(&self) -> &Stage {
        self.stages
            .get(self.state.stage_index)
            .expect("current stage index is always in range")
    }

    /// Resets play to the start of stage `index`. An out-of-range index is
    /// rejected and leaves the current state untouched.
    pub fn load_stage(&mut self, index: usize) -> Result<&GameState, StageError> {
        self.state = fresh_state(&self.stages, index)?;
        debug!(
            "loaded stage {} ({}), {} moves",
            self.stage().id,
            self.stage().piece.label(),
            self.state.moves_remaining
        );
        Ok(&self.state)
    }

    pub fn move_player_to(&mut self, target: Cell) -> MoveOutcome {
        if let Some(rejection) = self.check_move(target) {
            trace!("move to {target} rejected: {rejection:?}");
            return MoveOutcome::Rejected(rejection);
        }

        self.state.player = target;
        self.state.moves_remaining -= 1;
        debug!(
            "moved to {target}, {} moves remaining",
            self.state.moves_remaining
        );

        // Goal first: landing on it with the last move is still a win.
        let outcome = if target == self.stage().goal {
            info!("stage {} cleared", self.stage().id);
            self.state.status = Status::Won;
            MoveOutcome::Won
        } else if self.state.moves_remaining == 0 {
            info!("stage {} failed: out of moves", self.stage().id);
            self.state.status = Status::Lost;
            MoveOutcome::Lost
        } else {
            MoveOutcome::Moved
        };

        self.state.destinations = if outcome == MoveOutcome::Moved {
            destinations_for(self.stage(), target)
        } else {
            Destinations::new()
        };
        outcome
    }

    /// Closes a finished stage: a win moves on to the next stage (wrapping to
    /// the first), a loss replays the same one. Returns the acknowledged
    /// result, or `None` while the stage is still being played.
    pub fn acknowledge_result(&mut self) -> Option<Status> {
        let status = self.state.status;
        let next = match status {
            Status::Playing => return None,
            Status::Won => self.stages.next_index(self.state.stage_index),
            Status::Lost => self.state.stage_index,
        };
        self.reload(next);
        Some(status)
    }

    pub fn restart(&mut self) -> &GameState {
        self.reload(self.state.stage_index);
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        let stage = self.stage();
        Snapshot {
            stage_index: self.state.stage_index,
            stage_id: stage.id.clone(),
            piece: stage.piece,
            player: self.state.player,
            goal: stage.goal,
            blocked: stage.blocked.clone(),
            moves_remaining: self.state.moves_remaining,
            move_budget: stage.moves,
            destinations: self.state.destinations.to_vec(),
            status: self.state.status,
        }
    }

    pub fn moves_used(&self) -> u8 {
        self.stage().moves - self.state.moves_remaining
    }

    /// Still playing, but the piece has nowhere to go. Only a restart helps.
    pub fn is_stuck(&self) -> bool {
        self.state.status == Status::Playing
            && self.state.moves_remaining > 0
            && self.state.destinations.is_empty()
    }

    fn check_move(&self, target: Cell) -> Option<Rejection> {
        if self.state.status.is_terminal() {
            Some(Rejection::Finished)
        } else if self.state.moves_remaining == 0 {
            Some(Rejection::NoMovesLeft)
        } else if !self.state.destinations.contains(&target) {
            Some(Rejection::Unreachable)
        } else {
            None
        }
    }

    fn reload(&mut self, index: usize) {
        self.load_stage(index)
            .expect("current and next stage indices are always in range");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::builtin()
    }
}

fn fresh_state(stages: &StageSet, index: usize) -> Result<GameState, StageError> {
    let stage = stages.get(index)?;
    Ok(GameState {
        stage_index: index,
        player: stage.start,
        moves_remaining: stage.moves,
        destinations: destinations_for(stage, stage.start),
        status: Status::Playing,
    })
}

fn destinations_for(stage: &Stage, from: Cell) -> Destinations {
    reachable_cells(stage.piece, from, &stage.blocked, Bounds::BOARD)
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = self.stage();
        writeln!(
            f,
            "stage {} [{}] moves {}/{}",
            stage.id,
            stage.piece.kanji(),
            self.state.moves_remaining,
            stage.moves
        )?;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let cell = Cell::new_unchecked(row, col);
                let glyph = if cell == self.state.player {
                    'P'
                } else if cell == stage.goal {
                    'G'
                } else if stage.is_blocked(cell) {
                    '#'
                } else if self.state.destinations.contains(&cell) {
                    '*'
                } else {
                    '.'
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_playing_stage_zero() {
        let game = Game::builtin();
        let state = game.state();
        assert_eq!(state.stage_index, 0);
        assert_eq!(state.player, Cell::new_unchecked(4, 2));
        assert_eq!(state.moves_remaining, 5);
        assert_eq!(state.status, Status::Playing);
        assert_eq!(state.destinations.len(), 5);
        assert_eq!(game.moves_used(), 0);
    }

    #[test]
    fn render_marks_every_layer() {
        let game = Game::builtin();
        let text = game.to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "stage 1 [金] moves 5/5");
        assert_eq!(rows[1], "..G..");
        assert_eq!(rows[4], ".***.");
        assert_eq!(rows[5], ".*P*.");
    }

    #[test]
    fn terminal_states_report_terminal() {
        assert!(!Status::Playing.is_terminal());
        assert!(Status::Won.is_terminal());
        assert!(Status::Lost.is_terminal());
    }
}
