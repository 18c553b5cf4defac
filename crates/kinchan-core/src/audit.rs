//! Stage sanity checks.
//!
//! Stages are plain configuration and nothing stops an author from writing
//! one that cannot be cleared. The audit measures the shortest route to the
//! goal so such stages can be flagged instead of silently patched.

use std::collections::VecDeque;

use log::warn;

use crate::constants::MAX_BOARD_SIZE;
use crate::movegen::reachable_cells;
use crate::stage::{Stage, StageSet};
use crate::types::{Bounds, Cell};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageAudit {
    pub stage_id: String,
    /// Fewest moves from start to goal, ignoring the budget. `None` when the
    /// goal is unreachable from the start.
    pub min_moves: Option<u8>,
    pub budget: u8,
    /// Destinations available from the start cell.
    pub opening_moves: usize,
}

impl StageAudit {
    pub fn is_solvable(&self) -> bool {
        self.min_moves.is_some_and(|n| n <= self.budget)
    }

    /// Moves to spare on the shortest route.
    pub fn slack(&self) -> Option<u8> {
        self.min_moves
            .and_then(|n| self.budget.checked_sub(n))
    }
}

pub fn audit_stage(stage: &Stage) -> StageAudit {
    let bounds = Bounds::BOARD;
    let opening_moves = reachable_cells(stage.piece, stage.start, &stage.blocked, bounds).len();

    StageAudit {
        stage_id: stage.id.clone(),
        min_moves: shortest_route(stage, bounds),
        budget: stage.moves,
        opening_moves,
    }
}

pub fn audit_stages(stages: &StageSet) -> Vec<StageAudit> {
    stages
        .iter()
        .map(|stage| {
            let audit = audit_stage(stage);
            if !audit.is_solvable() {
                warn!(
                    "stage {} cannot be cleared: shortest route {:?}, budget {}",
                    audit.stage_id, audit.min_moves, audit.budget
                );
            }
            audit
        })
        .collect()
}

fn shortest_route(stage: &Stage, bounds: Bounds) -> Option<u8> {
    let width = usize::from(MAX_BOARD_SIZE);
    let index = |cell: Cell| usize::from(cell.row) * width + usize::from(cell.col);

    let mut distance = [None::<u8>; (MAX_BOARD_SIZE as usize) * (MAX_BOARD_SIZE as usize)];
    let mut queue = VecDeque::from([stage.start]);
    distance[index(stage.start)] = Some(0);

    while let Some(cell) = queue.pop_front() {
        let depth = distance[index(cell)]?;
        if cell == stage.goal {
            return Some(depth);
        }
        for next in reachable_cells(stage.piece, cell, &stage.blocked, bounds) {
            let slot = &mut distance[index(next)];
            if slot.is_none() {
                *slot = Some(depth + 1);
                queue.push_back(next);
            }
        }
    }
    None
}
