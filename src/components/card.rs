// src/components/card.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// カードのスート（マーク）だよ！❤️♦️♣️♠️
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,
    Diamond,
    Club,
    Spade,
}

/// 全スート。デッキを作る時にループで使う。
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

impl Suit {
    /// スートの色。ハートとダイヤが赤、クラブとスペードが黒。
    pub fn color(self) -> CardColor {
        match self {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
            Suit::Spade => '♠',
        }
    }
}

/// カードの色（赤か黒か）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

/// カードのランク。A = 1 ... K = 13 で、`as u8` でそのまま数値になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// 1..=13 の数値。
    pub fn value(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// カードそのものを表すコンポーネントだよ！🃏
///
/// スートとランクは作った後は変わらない。変わるのは表裏 (`is_face_up`) だけ。
/// どの山にいるかは `StackInfo` コンポーネントの方が持ってるよ。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Component for Card {}

impl Card {
    /// 裏向きのカードを作る。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    /// 表裏をひっくり返す。
    pub fn flip(&mut self) {
        self.is_face_up = !self.is_face_up;
    }

    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    pub fn is_face_down(&self) -> bool {
        !self.is_face_up
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    pub fn is_opposite_color(&self, other: &Card) -> bool {
        self.color() != other.color()
    }
}

/// `7♦` とか `A♠` みたいに表示する。ログのメッセージで使うよ。
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}
