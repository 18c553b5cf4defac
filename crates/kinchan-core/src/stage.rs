use thiserror::Error;

use crate::types::{Bounds, Cell, PieceKind};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StageError {
    #[error("stage list is empty")]
    Empty,
    #[error("stage index {index} out of range (have {count} stages)")]
    InvalidIndex { index: usize, count: usize },
    #[error("stage {stage}: cell {cell} is off the board")]
    OutOfBounds { stage: String, cell: Cell },
    #[error("stage {stage}: start cell is blocked")]
    StartBlocked { stage: String },
    #[error("stage {stage}: goal cell is blocked")]
    GoalBlocked { stage: String },
    #[error("stage {stage}: move budget must be positive")]
    ZeroBudget { stage: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub id: String,
    pub piece: PieceKind,
    pub start: Cell,
    pub goal: Cell,
    pub blocked: Vec<Cell>,
    pub moves: u8,
}

impl Stage {
    pub fn new(
        id: impl Into<String>,
        piece: PieceKind,
        start: Cell,
        goal: Cell,
        blocked: Vec<Cell>,
        moves: u8,
    ) -> Self {
        Self {
            id: id.into(),
            piece,
            start,
            goal,
            blocked,
            moves,
        }
    }

    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.blocked.contains(&cell)
    }

    /// Checks the layout is playable at all. Whether the goal can be reached
    /// within the budget is left to [`crate::audit`].
    pub fn validate(&self) -> Result<(), StageError> {
        let bounds = Bounds::BOARD;
        for cell in [self.start, self.goal]
            .into_iter()
            .chain(self.blocked.iter().copied())
        {
            if !bounds.contains(cell) {
                return Err(StageError::OutOfBounds {
                    stage: self.id.clone(),
                    cell,
                });
            }
        }
        if self.is_blocked(self.start) {
            return Err(StageError::StartBlocked {
                stage: self.id.clone(),
            });
        }
        if self.is_blocked(self.goal) {
            return Err(StageError::GoalBlocked {
                stage: self.id.clone(),
            });
        }
        if self.moves == 0 {
            return Err(StageError::ZeroBudget {
                stage: self.id.clone(),
            });
        }
        Ok(())
    }
}

struct StageDef {
    id: &'static str,
    piece: PieceKind,
    start: (u8, u8),
    goal: (u8, u8),
    blocked: &'static [(u8, u8)],
    moves: u8,
}

const BUILTIN_STAGES: [StageDef; 8] = [
    StageDef {
        id: "1",
        piece: PieceKind::Gold,
        start: (4, 2),
        goal: (0, 2),
        blocked: &[],
        moves: 5,
    },
    StageDef {
        id: "2",
        piece: PieceKind::Gold,
        start: (4, 4),
        goal: (0, 0),
        blocked: &[(2, 2), (2, 3), (1, 3)],
        moves: 7,
    },
    // Pawn cannot leave the start cell. Kept as authored; the audit reports it.
    StageDef {
        id: "3",
        piece: PieceKind::Pawn,
        start: (4, 2),
        goal: (0, 2),
        blocked: &[(1, 2), (2, 2), (3, 2)],
        moves: 6,
    },
    StageDef {
        id: "4",
        piece: PieceKind::Silver,
        start: (4, 1),
        goal: (0, 3),
        blocked: &[(2, 2), (3, 1), (1, 3)],
        moves: 5,
    },
    StageDef {
        id: "5",
        piece: PieceKind::Knight,
        start: (4, 1),
        goal: (0, 1),
        blocked: &[(2, 0)],
        moves: 2,
    },
    StageDef {
        id: "6",
        piece: PieceKind::Lance,
        start: (4, 3),
        goal: (1, 3),
        blocked: &[(0, 3)],
        moves: 1,
    },
    StageDef {
        id: "7",
        piece: PieceKind::Rook,
        start: (4, 0),
        goal: (0, 4),
        blocked: &[(0, 0), (4, 4), (2, 1), (1, 3), (3, 0)],
        moves: 4,
    },
    StageDef {
        id: "8",
        piece: PieceKind::Bishop,
        start: (4, 0),
        goal: (0, 2),
        blocked: &[(1, 1), (2, 2)],
        moves: 5,
    },
];

impl StageDef {
    fn to_stage(&self) -> Stage {
        let cell = |(row, col): (u8, u8)| Cell::new_unchecked(row, col);
        Stage::new(
            self.id,
            self.piece,
            cell(self.start),
            cell(self.goal),
            self.blocked.iter().copied().map(cell).collect(),
            self.moves,
        )
    }
}

/// A non-empty, validated, ordered list of stages. Play cycles through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSet {
    stages: Vec<Stage>,
}

impl StageSet {
    pub fn new(stages: Vec<Stage>) -> Result<Self, StageError> {
        if stages.is_empty() {
            return Err(StageError::Empty);
        }
        for stage in &stages {
            stage.validate()?;
        }
        Ok(Self { stages })
    }

    pub fn builtin() -> Self {
        Self {
            stages: BUILTIN_STAGES.iter().map(StageDef::to_stage).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Stage, StageError> {
        self.stages.get(index).ok_or(StageError::InvalidIndex {
            index,
            count: self.stages.len(),
        })
    }

    /// The stage after `index`, wrapping to 0 after the last one.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.stages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stage> + '_ {
        self.stages.iter()
    }
}

impl Default for StageSet {
    fn default() -> Self {
        Self::builtin()
    }
}
