// src/systems/mod.rs
//! World を書き換えるシステムたち。

pub mod auto_complete_system;
pub mod deal_system;
pub mod move_card_system;
pub mod win_condition_system;

pub use auto_complete_system::AutoCompleteSystem;
pub use deal_system::DealInitialCardsSystem;
pub use move_card_system::{MoveCardSystem, MoveOutcome};
pub use win_condition_system::WinConditionSystem;
