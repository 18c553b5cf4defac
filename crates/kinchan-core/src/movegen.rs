use crate::types::{Bounds, Cell, Destinations, PieceKind};

/// Offsets are `(row delta, col delta)`. Forward is toward row 0.
pub const FORWARD: (i8, i8) = (-1, 0);
pub const BACKWARD: (i8, i8) = (1, 0);
pub const LEFT: (i8, i8) = (0, -1);
pub const RIGHT: (i8, i8) = (0, 1);
pub const FORWARD_LEFT: (i8, i8) = (-1, -1);
pub const FORWARD_RIGHT: (i8, i8) = (-1, 1);
pub const BACKWARD_LEFT: (i8, i8) = (1, -1);
pub const BACKWARD_RIGHT: (i8, i8) = (1, 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// Each offset is applied once. Knight jumps are steps too: the cells
    /// between origin and target are never inspected.
    Step,
    /// Each offset is repeated until the first blocked or off-board cell.
    Slide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub probe: Probe,
    pub offsets: &'static [(i8, i8)],
}

pub const PIECE_RULES: [Rule; 7] = [
    Rule {
        probe: Probe::Step,
        offsets: &[FORWARD, BACKWARD, LEFT, RIGHT, FORWARD_LEFT, FORWARD_RIGHT],
    },
    Rule {
        probe: Probe::Step,
        offsets: &[
            FORWARD,
            FORWARD_LEFT,
            FORWARD_RIGHT,
            BACKWARD_LEFT,
            BACKWARD_RIGHT,
        ],
    },
    Rule {
        probe: Probe::Step,
        offsets: &[FORWARD],
    },
    Rule {
        probe: Probe::Step,
        offsets: &[(-2, -1), (-2, 1)],
    },
    Rule {
        probe: Probe::Slide,
        offsets: &[FORWARD],
    },
    Rule {
        probe: Probe::Slide,
        offsets: &[FORWARD, BACKWARD, LEFT, RIGHT],
    },
    Rule {
        probe: Probe::Slide,
        offsets: &[FORWARD_LEFT, FORWARD_RIGHT, BACKWARD_LEFT, BACKWARD_RIGHT],
    },
];

pub const fn rule_for(kind: PieceKind) -> Rule {
    PIECE_RULES[kind as usize]
}

/// Every cell `kind` may move to from `from` in one move.
///
/// Candidates off the board or in `blocked` are dropped; a slide stops just
/// before the first such cell. The result is ordered by the rule table's
/// offsets, each ray nearest-first, so identical inputs give identical lists.
pub fn reachable_cells(
    kind: PieceKind,
    from: Cell,
    blocked: &[Cell],
    bounds: Bounds,
) -> Destinations {
    let rule = rule_for(kind);
    let mut out = Destinations::new();
    for &(dr, dc) in rule.offsets {
        match rule.probe {
            Probe::Step => step_target(&mut out, from, (dr, dc), blocked, bounds),
            Probe::Slide => slide_targets(&mut out, from, (dr, dc), blocked, bounds),
        }
    }
    out
}

pub fn is_reachable(
    kind: PieceKind,
    from: Cell,
    target: Cell,
    blocked: &[Cell],
    bounds: Bounds,
) -> bool {
    reachable_cells(kind, from, blocked, bounds).contains(&target)
}

fn step_target(
    out: &mut Destinations,
    from: Cell,
    (dr, dc): (i8, i8),
    blocked: &[Cell],
    bounds: Bounds,
) {
    if let Some(cell) = open_cell(from, dr, dc, blocked, bounds) {
        out.push(cell);
    }
}

fn slide_targets(
    out: &mut Destinations,
    from: Cell,
    (dr, dc): (i8, i8),
    blocked: &[Cell],
    bounds: Bounds,
) {
    let mut cursor = from;
    while let Some(cell) = open_cell(cursor, dr, dc, blocked, bounds) {
        out.push(cell);
        cursor = cell;
    }
}

fn open_cell(from: Cell, dr: i8, dc: i8, blocked: &[Cell], bounds: Bounds) -> Option<Cell> {
    from.offset(dr, dc)
        .filter(|&cell| bounds.contains(cell) && !blocked.contains(&cell))
}
