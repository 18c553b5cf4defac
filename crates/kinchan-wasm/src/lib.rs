use wasm_bindgen::prelude::*;

use kinchan_core::{
    Cell, Game, MoveOutcome, PieceKind, Snapshot, Stage, StageSet, Status,
};
use serde::{Deserialize, Serialize};

mod logging;

pub use logging::init_logging;

/// Initialize panic hook and console logging for the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logging::install(log::LevelFilter::Info);
}

/// Serializable game state for the renderer.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsState {
    stage_index: usize,
    stage_id: String,
    piece: &'static str,
    piece_kanji: String,
    player: [u8; 2],
    goal: [u8; 2],
    blocked: Vec<[u8; 2]>,
    moves_remaining: u8,
    move_budget: u8,
    legal_destinations: Vec<[u8; 2]>,
    result_status: &'static str,
}

impl From<Snapshot> for JsState {
    fn from(snap: Snapshot) -> Self {
        Self {
            stage_index: snap.stage_index,
            stage_id: snap.stage_id,
            piece: snap.piece.label(),
            piece_kanji: snap.piece.kanji().to_string(),
            player: snap.player.as_pair(),
            goal: snap.goal.as_pair(),
            blocked: snap.blocked.iter().map(|c| c.as_pair()).collect(),
            moves_remaining: snap.moves_remaining,
            move_budget: snap.move_budget,
            legal_destinations: snap.destinations.iter().map(|c| c.as_pair()).collect(),
            result_status: status_str(snap.status),
        }
    }
}

/// Stage record as authored in JSON. `piece` takes a label ("gold"), a
/// one-letter code ("g") or a kanji. Cells are `[r, c]` pairs or `"r,c"` text.
#[derive(Deserialize)]
struct JsStage {
    #[serde(alias = "name")]
    id: String,
    piece: String,
    start: JsCell,
    goal: JsCell,
    #[serde(default, alias = "blocks")]
    blocked: Vec<JsCell>,
    moves: u8,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsCell {
    Pair([u8; 2]),
    Text(String),
}

impl JsCell {
    /// Pairs pass through unchecked so that `StageSet::new` reports them as
    /// out of bounds; text must already name a board cell.
    fn to_cell(&self, stage: &str) -> Result<Cell, JsError> {
        match self {
            Self::Pair([row, col]) => Ok(Cell::new_unchecked(*row, *col)),
            Self::Text(text) => Cell::parse(text)
                .ok_or_else(|| JsError::new(&format!("stage {stage}: bad cell '{text}'"))),
        }
    }
}

impl TryFrom<JsStage> for Stage {
    type Error = JsError;

    fn try_from(js: JsStage) -> Result<Self, Self::Error> {
        let piece = parse_piece(&js.piece)
            .ok_or_else(|| JsError::new(&format!("stage {}: unknown piece '{}'", js.id, js.piece)))?;
        let start = js.start.to_cell(&js.id)?;
        let goal = js.goal.to_cell(&js.id)?;
        let blocked = js
            .blocked
            .iter()
            .map(|cell| cell.to_cell(&js.id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Stage::new(js.id, piece, start, goal, blocked, js.moves))
    }
}

fn parse_piece(input: &str) -> Option<PieceKind> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(code), None) => PieceKind::from_code(code).or_else(|| PieceKind::from_kanji(code)),
        _ => PieceKind::from_label(input),
    }
}

fn status_str(status: Status) -> &'static str {
    match status {
        Status::Playing => "playing",
        Status::Won => "won",
        Status::Lost => "lost",
    }
}

fn outcome_str(outcome: MoveOutcome) -> &'static str {
    match outcome {
        MoveOutcome::Moved => "moved",
        MoveOutcome::Won => "won",
        MoveOutcome::Lost => "lost",
        MoveOutcome::Rejected(_) => "rejected",
    }
}

/// Main WASM-exported puzzle controller. Construct it once the page's image
/// preload has settled; construction loads the first stage.
#[wasm_bindgen]
pub struct KinchanGame {
    game: Game,
}

#[wasm_bindgen]
impl KinchanGame {
    /// Start with the built-in stage table.
    #[wasm_bindgen(constructor)]
    pub fn new() -> KinchanGame {
        Self {
            game: Game::builtin(),
        }
    }

    /// Start with stages from a JSON array of
    /// `{ id, piece, start: [r, c], goal: [r, c], blocked: [[r, c]...], moves }`.
    /// `name` and `blocks` are accepted in place of `id` and `blocked`.
    #[wasm_bindgen(js_name = "withStages")]
    pub fn with_stages(stages_json: &str) -> Result<KinchanGame, JsError> {
        let raw: Vec<JsStage> = serde_json::from_str(stages_json)
            .map_err(|e| JsError::new(&format!("invalid JSON: {}", e)))?;
        let stages = raw
            .into_iter()
            .map(Stage::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let stages = StageSet::new(stages).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self {
            game: Game::new(stages),
        })
    }

    /// Current state as `{ stageIndex, stageId, piece, pieceKanji, player, goal,
    /// blocked, movesRemaining, moveBudget, legalDestinations, resultStatus }`.
    pub fn state(&self) -> Result<JsValue, JsError> {
        let state = JsState::from(self.game.snapshot());
        serde_wasm_bindgen::to_value(&state).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Load stage `index`. Out-of-range indices error and leave play untouched.
    #[wasm_bindgen(js_name = "loadStage")]
    pub fn load_stage(&mut self, index: usize) -> Result<JsValue, JsError> {
        self.game
            .load_stage(index)
            .map_err(|e| JsError::new(&e.to_string()))?;
        self.state()
    }

    /// Move to `(row, col)`. Returns "moved", "won", "lost" or "rejected".
    /// Coordinates off the board are rejected before they reach the game.
    #[wasm_bindgen(js_name = "movePlayerTo")]
    pub fn move_player_to(&mut self, row: u32, col: u32) -> String {
        let target = u8::try_from(row)
            .ok()
            .zip(u8::try_from(col).ok())
            .and_then(|(row, col)| Cell::new(row, col));
        match target {
            Some(cell) => outcome_str(self.game.move_player_to(cell)).to_string(),
            None => "rejected".to_string(),
        }
    }

    /// Close the result popup. Returns the acknowledged result ("won" or
    /// "lost"), or `undefined` if no stage had finished.
    #[wasm_bindgen(js_name = "acknowledgeResult")]
    pub fn acknowledge_result(&mut self) -> Option<String> {
        self.game
            .acknowledge_result()
            .map(|status| status_str(status).to_string())
    }

    /// Restart the current stage.
    pub fn restart(&mut self) {
        self.game.restart();
    }

    #[wasm_bindgen(js_name = "stageCount")]
    pub fn stage_count(&self) -> usize {
        self.game.stage_count()
    }

    /// Returns true if the piece has moves left but nowhere to go.
    #[wasm_bindgen(js_name = "isStuck")]
    pub fn is_stuck(&self) -> bool {
        self.game.is_stuck()
    }

    /// Plain-text board, handy for debugging in the console.
    pub fn render(&self) -> String {
        self.game.to_string()
    }
}

impl Default for KinchanGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_accepts_label_code_and_kanji() {
        assert_eq!(parse_piece("gold"), Some(PieceKind::Gold));
        assert_eq!(parse_piece("Knight"), Some(PieceKind::Knight));
        assert_eq!(parse_piece("l"), Some(PieceKind::Lance));
        assert_eq!(parse_piece("角"), Some(PieceKind::Bishop));
        assert_eq!(parse_piece("king"), None);
        assert_eq!(parse_piece(""), None);
    }

    #[test]
    fn state_uses_pairs_and_status_strings() {
        let game = Game::builtin();
        let state = JsState::from(game.snapshot());
        assert_eq!(state.piece, "gold");
        assert_eq!(state.player, [4, 2]);
        assert_eq!(state.goal, [0, 2]);
        assert_eq!(state.legal_destinations.len(), 5);
        assert_eq!(state.result_status, "playing");
    }

    #[test]
    fn moves_report_outcomes() {
        let mut game = KinchanGame::new();
        assert_eq!(game.move_player_to(0, 0), "rejected");
        assert_eq!(game.move_player_to(3, 2), "moved");
        assert_eq!(game.acknowledge_result(), None);
        game.restart();
        assert_eq!(game.stage_count(), 8);
        assert!(!game.is_stuck());
    }

    #[test]
    fn off_board_targets_do_not_wrap() {
        let mut game = KinchanGame::new();
        let before = game.game.state().clone();
        // 259 truncates to 3, which would be a legal gold step.
        assert_eq!(game.move_player_to(259, 2), "rejected");
        assert_eq!(game.move_player_to(3, 258), "rejected");
        assert_eq!(game.move_player_to(5, 2), "rejected");
        assert_eq!(game.move_player_to(u32::MAX, 0), "rejected");
        assert_eq!(game.game.state(), &before);
        assert_eq!(game.game.state().player, Cell::new_unchecked(4, 2));
        assert_eq!(game.game.state().moves_remaining, 5);
    }

    #[test]
    fn stage_json_accepts_aliases_codes_and_text_cells() {
        let json = r#"{
            "name": "k1",
            "piece": "n",
            "start": [4, 1],
            "goal": "2,2",
            "blocks": [[2, 0], "1, 3"],
            "moves": 2
        }"#;
        let raw: JsStage = serde_json::from_str(json).expect("stage json");
        let Ok(stage) = Stage::try_from(raw) else {
            panic!("stage should convert");
        };
        assert_eq!(stage.id, "k1");
        assert_eq!(stage.piece, PieceKind::Knight);
        assert_eq!(stage.start, Cell::new_unchecked(4, 1));
        assert_eq!(stage.goal, Cell::new_unchecked(2, 2));
        assert_eq!(
            stage.blocked,
            vec![Cell::new_unchecked(2, 0), Cell::new_unchecked(1, 3)]
        );
        assert_eq!(stage.moves, 2);

        let mut game = Game::new(StageSet::new(vec![stage]).expect("valid stage"));
        assert_eq!(game.move_player_to(Cell::new_unchecked(2, 2)), MoveOutcome::Won);
    }

    #[test]
    fn kanji_and_label_stages_convert() {
        let raw: Vec<JsStage> = serde_json::from_str(
            r#"[
                {"id": "a", "piece": "飛", "start": [4, 0], "goal": [0, 0], "moves": 1},
                {"id": "b", "piece": "Bishop", "start": "4,0", "goal": "0,4", "blocked": [], "moves": 1}
            ]"#,
        )
        .expect("stage json");
        let kinds: Vec<PieceKind> = raw
            .into_iter()
            .filter_map(|js| Stage::try_from(js).ok())
            .map(|stage| stage.piece)
            .collect();
        assert_eq!(kinds, vec![PieceKind::Rook, PieceKind::Bishop]);
    }
}
