// src/logic/mod.rs
//! World に依存しない (または読むだけの) ゲームロジックを置くモジュールだよ。

pub mod auto_move;
pub mod deck;
pub mod history;
pub mod rules;
