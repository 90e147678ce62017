// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

pub mod app;
pub mod board;
pub mod components;
pub mod config;
pub mod ecs;
pub mod error;
pub mod logging;
pub mod logic;
pub mod systems;

pub use app::{CardSnapshot, DragStart, GameEvent, KlondikeGame, PileSnapshot};
pub use components::{Card, GameStatus, Rank, StackType, Suit};
pub use config::rules::GameConfig;
pub use ecs::Entity;
pub use error::{GameError, GameResult};
pub use systems::{MoveOutcome, StockOutcome};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if logging::init(log::LevelFilter::Info).is_ok() {
        log::info!("Panic hook and console logger set!");
    }
}

/// `GameError` を JS 側に投げる `Error` に変換する。ここに来るのは呼び出し側のバグ。
fn to_js_error(err: GameError) -> JsValue {
    log::error!("GameApp: {}", err);
    js_sys::Error::new(&err.to_string()).into()
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| {
        let msg = format!("Failed to serialize: {}", e);
        log::error!("{}", msg);
        JsValue::from(js_sys::Error::new(&msg))
    })
}

fn from_json<'a, T: serde::Deserialize<'a>>(json: &'a str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(|e| {
        let msg = format!("Failed to parse {:?}: {}", json, e);
        log::warn!("{}", msg);
        JsValue::from(js_sys::Error::new(&msg))
    })
}

// --- JS から触るためのゲーム本体 ---
// 戻り値が複雑なものは JSON 文字列で返すよ。
#[wasm_bindgen]
pub struct GameApp {
    game: KlondikeGame,
}

#[wasm_bindgen]
impl GameApp {
    /// ランダムなシャッフルで新しいゲームを作る。
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { game: KlondikeGame::new(GameConfig::default()) }
    }

    /// `{"seed": 42, "record_events": true}` みたいな JSON で設定して作る。
    pub fn with_config(config_json: &str) -> Result<GameApp, JsValue> {
        let config = GameConfig::from_json(config_json).map_err(|e| {
            JsValue::from(js_sys::Error::new(&format!("Invalid game config: {}", e)))
        })?;
        Ok(Self { game: KlondikeGame::new(config) })
    }

    pub fn new_game(&mut self) {
        self.game.new_game();
    }

    /// 山札クリック。`StockOutcome` の JSON を返す。
    pub fn on_stock_activated(&mut self) -> Result<String, JsValue> {
        let outcome = self.game.on_stock_activated().map_err(to_js_error)?;
        to_json(&outcome)
    }

    pub fn on_card_clicked(&mut self, entity: usize) -> Result<String, JsValue> {
        let outcome = self.game.on_card_clicked(Entity(entity)).map_err(to_js_error)?;
        to_json(&outcome)
    }

    /// `target_json` は `"Waste"` や `{"Tableau":3}` の形。動いたら true。
    pub fn attempt_move(&mut self, entity: usize, target_json: &str) -> Result<bool, JsValue> {
        let target: StackType = from_json(target_json)?;
        let outcome = self.game.attempt_move(Entity(entity), target).map_err(to_js_error)?;
        Ok(outcome == MoveOutcome::Applied)
    }

    pub fn auto_move(&mut self, entity: usize) -> Result<bool, JsValue> {
        let outcome = self.game.auto_move_to_foundation(Entity(entity)).map_err(to_js_error)?;
        Ok(outcome == MoveOutcome::Applied)
    }

    /// 持ち上がったカードの id 一覧 (JSON 配列)。持ち上げられなければ `null`。
    pub fn begin_drag(&mut self, entity: usize) -> Result<String, JsValue> {
        match self.game.begin_drag(Entity(entity)).map_err(to_js_error)? {
            DragStart::Started(group) => to_json(&group),
            DragStart::Rejected => Ok("null".to_string()),
        }
    }

    /// `targets_json` はドロップ位置に重なっている山の JSON 配列。
    pub fn commit_drag(&mut self, targets_json: &str) -> Result<bool, JsValue> {
        let targets: Vec<StackType> = match from_json(targets_json) {
            Ok(targets) => targets,
            Err(e) => {
                self.game.cancel_drag();
                return Err(e);
            }
        };
        let outcome = self.game.commit_drag(&targets).map_err(to_js_error)?;
        Ok(outcome == MoveOutcome::Applied)
    }

    pub fn cancel_drag(&mut self) {
        self.game.cancel_drag();
    }

    pub fn is_won(&self) -> bool {
        self.game.is_won()
    }

    /// 13 山ぶんの `PileSnapshot` を JSON で。
    pub fn piles_snapshot_json(&self) -> Result<String, JsValue> {
        let piles = self.game.piles_snapshot().map_err(to_js_error)?;
        to_json(&piles)
    }

    /// 溜まった移動ログを文字列の JSON 配列で返して空にする。
    pub fn drain_events(&mut self) -> Result<String, JsValue> {
        let lines: Vec<String> = self.game.drain_events().iter().map(ToString::to_string).collect();
        to_json(&lines)
    }
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}
