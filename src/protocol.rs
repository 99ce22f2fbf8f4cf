// src/protocol.rs

// このファイルは、Rust 側 (WASM) から JavaScript 側の描画コードに渡す
// ゲーム状態のデータ形式を定義するよ！💌
// JS 側は get_state_json() で受け取った JSON をそのまま描画に使うんだ。
// `Serialize` は Rust のデータ構造 -> JSON 文字列 にするやつ、
// `Deserialize` は JSON 文字列 -> Rust のデータ構造 にするやつだよ。
use serde::{Deserialize, Serialize};

use crate::components::card::{Rank, Suit};
use crate::components::position::Position;
// パイル ID は StackType の JSON 表現 ("Stock", {"Tableau":5} など) をそのまま使う。
pub use crate::components::stack::StackType;

/// 座標データ。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PositionData {
    pub x: f32,
    pub y: f32,
}

impl From<Position> for PositionData {
    fn from(pos: Position) -> Self {
        Self { x: pos.x, y: pos.y }
    }
}

/// カード1枚の表示用データ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CardData {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
    /// カード左上の描画位置。
    pub position: PositionData,
}

/// パイル1つ分の表示用データ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PileData {
    pub stack_type: StackType,
    /// 空のパイルの枠を描く位置。
    pub anchor: PositionData,
    /// 下 → 上の順。
    pub cards: Vec<CardData>,
}

/// ドラッグ中のカード列。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DraggingData {
    pub source: StackType,
    pub cards: Vec<CardData>,
}

/// ゲーム全体の状態を表すデータ。JS はこれを丸ごと描き直す。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameStateData {
    pub score: u32,
    /// アンドゥできる回数 (履歴の深さ)。
    pub moves: usize,
    pub won: bool,
    /// Stock, Waste, Foundation 0..4, Tableau 0..7 の順。
    pub piles: Vec<PileData>,
    pub dragging: Option<DraggingData>,
}
