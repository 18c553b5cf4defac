use kinchan_core::{reachable_cells, Bounds, Cell, Game, PieceKind, Stage, StageSet, Status, CELLS};
use proptest::prelude::*;

fn any_kind() -> impl Strategy<Value = PieceKind> {
    (0..PieceKind::ALL.len()).prop_map(|idx| PieceKind::ALL[idx])
}

fn any_cell() -> impl Strategy<Value = Cell> {
    (0..CELLS.len()).prop_map(|idx| CELLS[idx])
}

fn block_list() -> impl Strategy<Value = Vec<Cell>> {
    prop::collection::vec(any_cell(), 0..10)
}

fn ray_offsets(kind: PieceKind) -> &'static [(i8, i8)] {
    kinchan_core::rule_for(kind).offsets
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn destinations_are_on_board_and_open(kind in any_kind(), from in any_cell(), blocked in block_list()) {
        let got = reachable_cells(kind, from, &blocked, Bounds::BOARD);
        for target in &got {
            prop_assert!(Bounds::BOARD.contains(*target));
            prop_assert!(!blocked.contains(target));
            prop_assert_ne!(*target, from);
        }
    }

    #[test]
    fn destinations_are_deterministic(kind in any_kind(), from in any_cell(), blocked in block_list()) {
        let a = reachable_cells(kind, from, &blocked, Bounds::BOARD);
        let b = reachable_cells(kind, from, &blocked, Bounds::BOARD);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn nothing_past_a_block_on_a_ray(from in any_cell(), blocked in block_list()) {
        for kind in [PieceKind::Lance, PieceKind::Rook, PieceKind::Bishop] {
            let got = reachable_cells(kind, from, &blocked, Bounds::BOARD);
            for &(dr, dc) in ray_offsets(kind) {
                let mut cursor = from;
                let mut obstructed = false;
                while let Some(next) = cursor.offset(dr, dc).filter(|c| Bounds::BOARD.contains(*c)) {
                    if blocked.contains(&next) {
                        obstructed = true;
                    }
                    if obstructed {
                        prop_assert!(!got.contains(&next));
                    } else {
                        prop_assert!(got.contains(&next));
                    }
                    cursor = next;
                }
            }
        }
    }

    #[test]
    fn random_play_keeps_state_invariants(
        kind in any_kind(),
        start in any_cell(),
        goal in any_cell(),
        blocked in block_list(),
        budget in 1u8..8,
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..12),
    ) {
        let blocked: Vec<Cell> = blocked.into_iter().filter(|c| *c != start && *c != goal).collect();
        let stage = Stage::new("p", kind, start, goal, blocked.clone(), budget);
        let mut game = Game::new(StageSet::new(vec![stage]).expect("valid stage"));

        for pick in picks {
            let state = game.state().clone();
            if state.destinations.is_empty() {
                break;
            }
            let target = state.destinations[pick.index(state.destinations.len())];
            game.move_player_to(target);

            let next = game.state();
            prop_assert_eq!(next.moves_remaining, state.moves_remaining - 1);
            prop_assert!(!blocked.contains(&next.player));
            prop_assert!(Bounds::BOARD.contains(next.player));
            if next.player == goal {
                prop_assert_eq!(next.status, Status::Won);
            } else if next.moves_remaining == 0 {
                prop_assert_eq!(next.status, Status::Lost);
            } else {
                prop_assert_eq!(next.status, Status::Playing);
            }
            if next.status != Status::Playing {
                prop_assert!(next.destinations.is_empty());
            }
        }
    }
}
