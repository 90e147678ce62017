// src/app/game.rs
//! ゲーム 1 回分の状態と、表示側から来るコマンドをまとめたエンジン本体だよ！🃏
//!
//! 盤面 (`Board`) とドラッグ中の情報、移動ログを持っていて、
//! コマンドごとに各システムを呼んでから勝利判定を走らせる。

use log::{debug, error, info, warn};
use serde::Serialize;

use crate::app::events::GameEvent;
use crate::app::snapshot::{self, PileSnapshot};
use crate::board::Board;
use crate::components::dragging_info::DraggingInfo;
use crate::components::game_state::GameStatus;
use crate::components::stack::StackType;
use crate::config::rules::GameConfig;
use crate::ecs::entity::Entity;
use crate::ecs::system::System;
use crate::error::{GameError, GameResult};
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::systems::{
    AppliedMove, DealInitialCardsSystem, MoveCardSystem, MoveOutcome, StockOutcome, StockSystem,
    WinConditionSystem,
};

/// `begin_drag` の結果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DragStart {
    /// 持ち上げたカード (下から上)。
    Started(Vec<Entity>),
    Rejected,
}

pub struct KlondikeGame {
    board: Board,
    config: GameConfig,
    dragging: Option<DraggingInfo>,
    events: Vec<GameEvent>,
}

impl KlondikeGame {
    /// シャッフルして配った直後のゲームを作る。
    pub fn new(config: GameConfig) -> Self {
        let mut game = Self { board: Board::new(), config, dragging: None, events: Vec::new() };
        game.deal();
        game
    }

    /// 今の盤面を捨てて、同じ設定で配り直す。
    /// シードが固定されていれば同じ配置になるよ。
    pub fn new_game(&mut self) {
        self.board = Board::new();
        self.dragging = None;
        self.events.clear();
        self.deal();
    }

    fn deal(&mut self) {
        DealInitialCardsSystem::new(self.config.seed).run(&mut self.board);
        if cfg!(debug_assertions) {
            if let Err(e) = self.board.verify_integrity() {
                error!("KlondikeGame: board is inconsistent right after the deal: {}", e);
            }
        }
        info!("KlondikeGame: new game dealt (seed: {:?})", self.config.seed);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.board.status
    }

    pub fn is_won(&self) -> bool {
        self.board.status == GameStatus::Won
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    /// 山札がクリックされた。引けるなら 1 枚引き、空なら捨て札を戻す。
    pub fn on_stock_activated(&mut self) -> GameResult<StockOutcome> {
        if self.is_won() {
            return Ok(StockOutcome::Nothing);
        }
        self.drop_stale_drag();
        let outcome = StockSystem.activate(&mut self.board)?;
        match outcome {
            StockOutcome::Drew(entity) => {
                let card = self.board.card(entity)?.clone();
                self.record(GameEvent::DrewToWaste { card });
            }
            StockOutcome::Recycled(count) => self.record(GameEvent::StockRefilled { count }),
            StockOutcome::Nothing => debug!("KlondikeGame: Stock and Waste are both empty"),
        }
        self.after_command();
        Ok(outcome)
    }

    /// カードがクリックされた。山札のカードなら山札の一番上を引く。
    /// それ以外のカードのクリックは何もしない (`Nothing`)。
    pub fn on_card_clicked(&mut self, card: Entity) -> GameResult<StockOutcome> {
        if self.board.locate(card)? != StackType::Stock || self.is_won() {
            return Ok(StockOutcome::Nothing);
        }
        self.drop_stale_drag();
        match StockSystem.deal_one_card_from_stock(&mut self.board)? {
            Some(entity) => {
                let card = self.board.card(entity)?.clone();
                self.record(GameEvent::DrewToWaste { card });
                self.after_command();
                Ok(StockOutcome::Drew(entity))
            }
            None => Ok(StockOutcome::Nothing),
        }
    }

    /// `card` (と、その上に乗っているカード全部) を `target` に動かす。
    pub fn attempt_move(&mut self, card: Entity, target: StackType) -> GameResult<MoveOutcome> {
        if self.is_won() {
            return Ok(MoveOutcome::Rejected);
        }
        self.drop_stale_drag();
        let applied = MoveCardSystem.try_move(&mut self.board, card, target)?;
        self.finish_move(applied)
    }

    /// ダブルクリック用。置ける組札があればそこへ送る。
    pub fn auto_move_to_foundation(&mut self, card: Entity) -> GameResult<MoveOutcome> {
        if self.is_won() {
            return Ok(MoveOutcome::Rejected);
        }
        self.drop_stale_drag();
        match find_automatic_foundation_move(&self.board, card)? {
            Some(target) => self.attempt_move(card, target),
            None => Ok(MoveOutcome::Rejected),
        }
    }

    /// ドラッグ開始。持ち上げられないカードはここで `Rejected`。
    /// 前のドラッグが残っていたら捨てて、新しいのに置き換える。
    pub fn begin_drag(&mut self, card: Entity) -> GameResult<DragStart> {
        if let Some(previous) = self.dragging.take() {
            warn!("begin_drag: replacing unfinished drag of {:?}", previous.dragged_group);
        }
        if self.is_won() {
            return Ok(DragStart::Rejected);
        }
        match MoveCardSystem.pick_up(&self.board, card)? {
            Some(info) => {
                debug!("begin_drag: picked up {:?} from {}", info.dragged_group, info.original_stack_type);
                let group = info.dragged_group.clone();
                self.dragging = Some(info);
                Ok(DragStart::Started(group))
            }
            None => Ok(DragStart::Rejected),
        }
    }

    /// ドロップ。`overlapping` は落とした位置に重なっている山。
    ///
    /// 組札の候補を先に、次に場札の候補を (それぞれ渡された順に) 試して、
    /// 最初に置けたところで確定。どこにも置けなければ `Rejected` で、カードは元の場所のまま。
    /// 成否にかかわらずドラッグ状態はここで消える。
    pub fn commit_drag(&mut self, overlapping: &[StackType]) -> GameResult<MoveOutcome> {
        let dragging = self.dragging.take().ok_or(GameError::NoDragInProgress)?;

        let candidates = overlapping
            .iter()
            .filter(|s| s.is_foundation())
            .chain(overlapping.iter().filter(|s| s.is_tableau()));
        for &target in candidates {
            if let Some(applied) = MoveCardSystem.execute(&mut self.board, &dragging, target)? {
                return self.finish_move(Some(applied));
            }
        }
        debug!("commit_drag: no legal target among {:?}", overlapping);
        Ok(MoveOutcome::Rejected)
    }

    /// ドラッグを取り消す。盤面は何も変わらない。
    pub fn cancel_drag(&mut self) {
        if let Some(dragging) = self.dragging.take() {
            debug!("cancel_drag: {:?} stays in {}", dragging.dragged_group, dragging.original_stack_type);
        }
    }

    pub fn piles_snapshot(&self) -> GameResult<Vec<PileSnapshot>> {
        snapshot::piles_snapshot(&self.board)
    }

    /// 溜まった移動ログを取り出す (取り出した分は消える)。
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn verify_integrity(&self) -> GameResult<()> {
        self.board.verify_integrity()
    }

    fn finish_move(&mut self, applied: Option<AppliedMove>) -> GameResult<MoveOutcome> {
        let Some(applied) = applied else {
            return Ok(MoveOutcome::Rejected);
        };
        if let Some(&moved) = applied.cards.first() {
            let card = self.board.card(moved)?.clone();
            self.record(GameEvent::Placed { card, to: applied.to, onto: applied.onto });
        }
        if let Some(revealed) = applied.revealed {
            let card = self.board.card(revealed)?.clone();
            self.record(GameEvent::Revealed { card, stack: applied.from });
        }
        self.after_command();
        Ok(MoveOutcome::Applied)
    }

    /// 盤面を変えるコマンドの前に、残っているドラッグを捨てる。
    /// 持ち上げた時と盤面が変わると、そのドラッグは置けなくなるので。
    fn drop_stale_drag(&mut self) {
        if let Some(dragging) = self.dragging.take() {
            debug!("dropping in-flight drag of {:?}", dragging.dragged_group);
        }
    }

    fn after_command(&mut self) {
        let before = self.board.status;
        WinConditionSystem.run(&mut self.board);
        if before == GameStatus::Playing && self.board.status == GameStatus::Won {
            self.record(GameEvent::Won);
        }
    }

    fn record(&mut self, event: GameEvent) {
        info!("{}", event);
        if self.config.record_events {
            self.events.push(event);
        }
    }
}

impl Default for KlondikeGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
