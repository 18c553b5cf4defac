use kinchan_core::{audit_stages, init_logging, Game, StageSet};

fn main() {
    init_logging();

    let stages = StageSet::builtin();
    let audits = audit_stages(&stages);

    println!("{:<6} {:<7} {:>6} {:>8} {:>7}", "stage", "piece", "budget", "shortest", "opening");
    for (stage, audit) in stages.iter().zip(&audits) {
        let shortest = audit
            .min_moves
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<6} {:<7} {:>6} {:>8} {:>7}{}",
            audit.stage_id,
            stage.piece.label(),
            audit.budget,
            shortest,
            audit.opening_moves,
            if audit.is_solvable() { "" } else { "  UNSOLVABLE" }
        );
    }

    let unsolvable = audits.iter().filter(|a| !a.is_solvable()).count();
    println!("{} stages, {} unsolvable", audits.len(), unsolvable);

    if std::env::args().any(|arg| arg == "--boards") {
        let mut game = Game::new(stages);
        for index in 0..game.stage_count() {
            if game.load_stage(index).is_ok() {
                println!();
                print!("{game}");
            }
        }
    }
}
