// src/components/mod.rs

pub mod card;
pub mod dragging_info;
pub mod game_state;
pub mod pile;
pub mod stack;

pub use card::{Card, CardColor, Rank, Suit};
pub use dragging_info::DraggingInfo;
pub use game_state::GameStatus;
pub use pile::Pile;
pub use stack::{StackInfo, StackType};
