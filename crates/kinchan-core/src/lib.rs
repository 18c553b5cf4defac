pub mod audit;
pub mod constants;
pub mod game;
pub mod logging;
pub mod movegen;
pub mod stage;
pub mod types;

pub use audit::{audit_stage, audit_stages, StageAudit};
pub use constants::{BOARD_SIZE, CELLS, MAX_BOARD_SIZE, MAX_DESTINATIONS};
pub use game::{Game, GameState, MoveOutcome, Rejection, Snapshot, Status};
pub use logging::init_logging;
pub use movegen::{is_reachable, reachable_cells, rule_for, Probe, Rule, PIECE_RULES};
pub use stage::{Stage, StageError, StageSet};
pub use types::{Bounds, Cell, Destinations, PieceKind};
