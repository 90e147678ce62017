// tests/game_flow.rs
//! 公開 API だけで 1 ゲームを通しで動かすテスト。

use ecs_wasm_klondike::config::rules::{DECK_SIZE, STOCK_SIZE_AFTER_DEAL};
use ecs_wasm_klondike::{
    DragStart, GameConfig, GameStatus, KlondikeGame, MoveOutcome, StackType, StockOutcome,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn game(seed: u64) -> KlondikeGame {
    KlondikeGame::new(GameConfig::with_seed(seed))
}

#[test]
fn deal_shows_only_tableau_tops() {
    let game = game(11);
    let piles = game.piles_snapshot().unwrap();
    assert_eq!(piles.len(), 13);

    let stock = &piles[0];
    assert_eq!(stock.cards.len(), STOCK_SIZE_AFTER_DEAL);
    assert!(stock.cards.iter().all(|c| !c.is_face_up && !c.draggable));

    for (i, pile) in piles[6..].iter().enumerate() {
        assert_eq!(pile.stack_type, StackType::Tableau(i as u8));
        assert_eq!(pile.cards.len(), i + 1);
        let (top, rest) = pile.cards.split_last().unwrap();
        assert!(top.is_face_up && top.draggable);
        assert!(rest.iter().all(|c| !c.is_face_up));
    }
}

#[test]
fn full_stock_cycle_returns_to_start() {
    let mut game = game(5);
    let stock_before: Vec<_> = game.board().stock().cards().to_vec();

    for _ in 0..STOCK_SIZE_AFTER_DEAL {
        assert!(matches!(game.on_stock_activated().unwrap(), StockOutcome::Drew(_)));
    }
    assert!(game.board().stock().is_empty());
    assert_eq!(game.board().waste().size(), STOCK_SIZE_AFTER_DEAL);

    assert_eq!(
        game.on_stock_activated().unwrap(),
        StockOutcome::Recycled(STOCK_SIZE_AFTER_DEAL)
    );
    assert_eq!(game.board().stock().cards(), &stock_before[..]);
    game.verify_integrity().unwrap();
}

/// ランダムな操作を大量に流しても、52 枚がちょうど 1 回ずつどこかの山にいる。
#[test]
fn random_play_keeps_every_card_in_exactly_one_pile() {
    for seed in 0..8u64 {
        let mut game = game(seed);
        let mut rng = StdRng::seed_from_u64(seed ^ 0xC0FFEE);
        let targets = StackType::all();

        for _ in 0..400 {
            let piles = game.piles_snapshot().unwrap();
            let cards: Vec<_> = piles.iter().flat_map(|p| p.cards.iter()).collect();
            assert_eq!(cards.len(), DECK_SIZE);
            let card = cards.choose(&mut rng).unwrap().entity;

            match rng.gen_range(0..5) {
                0 => {
                    game.on_stock_activated().unwrap();
                }
                1 => {
                    let target = *targets.choose(&mut rng).unwrap();
                    game.attempt_move(card, target).unwrap();
                }
                2 => {
                    game.auto_move_to_foundation(card).unwrap();
                }
                3 => {
                    if let DragStart::Started(_) = game.begin_drag(card).unwrap() {
                        let overlapping: Vec<_> =
                            targets.choose_multiple(&mut rng, 3).copied().collect();
                        game.commit_drag(&overlapping).unwrap();
                    }
                }
                _ => {
                    game.on_card_clicked(card).unwrap();
                }
            }
            game.verify_integrity().unwrap();
        }
    }
}

#[test]
fn rejected_moves_change_nothing() {
    let mut game = game(21);
    let before = game.piles_snapshot().unwrap();
    let hidden = game.board().tableaus()[6].cards()[0];

    assert_eq!(game.attempt_move(hidden, StackType::Foundation(0)).unwrap(), MoveOutcome::Rejected);
    assert_eq!(game.attempt_move(hidden, StackType::Waste).unwrap(), MoveOutcome::Rejected);
    assert_eq!(game.begin_drag(hidden).unwrap(), DragStart::Rejected);
    assert_eq!(before, game.piles_snapshot().unwrap());
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn events_read_like_a_move_log() {
    let mut game = game(2);
    game.on_stock_activated().unwrap();
    for _ in 1..STOCK_SIZE_AFTER_DEAL {
        game.on_stock_activated().unwrap();
    }
    game.on_stock_activated().unwrap();

    let log: Vec<String> = game.drain_events().iter().map(ToString::to_string).collect();
    assert_eq!(log.len(), STOCK_SIZE_AFTER_DEAL + 1);
    assert!(log[0].starts_with("Placed ") && log[0].ends_with(" to the waste."));
    assert_eq!(log.last().unwrap(), "Stock refilled from discard pile.");
}
