//! クロンダイクの盤面ルールに関する定数と、ゲーム開始時の設定を定義するよ！

use serde::Deserialize;

/// 1 デッキのカード枚数。
pub const DECK_SIZE: usize = 52;
/// 組札 (Foundation) の数。スートの数と同じ。
pub const FOUNDATION_COUNT: usize = 4;
/// 場札 (Tableau) の列数。
pub const TABLEAU_COUNT: usize = 7;
/// 配った直後に場札に並ぶ枚数 (1 + 2 + ... + 7)。
pub const TABLEAU_DEAL_SIZE: usize = TABLEAU_COUNT * (TABLEAU_COUNT + 1) / 2;
/// 配った直後の山札の枚数。
pub const STOCK_SIZE_AFTER_DEAL: usize = DECK_SIZE - TABLEAU_DEAL_SIZE;

/// 新しいゲームを始める時の設定。
///
/// JS 側からは JSON 文字列で渡せる。足りないフィールドはデフォルト値になるよ。
/// ```json
/// { "seed": 42, "record_events": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// シャッフルの乱数シード。同じシードなら同じ配り方・同じ引き順になる。
    /// `None` ならスレッドローカルの乱数を使う。
    pub seed: Option<u64>,
    /// "Placed 7♦ to 8♠." みたいな移動ログを溜めるかどうか。
    pub record_events: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { seed: None, record_events: true }
    }
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    /// JSON から読み込む。空文字列はデフォルト設定として扱う。
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json)
    }
}
