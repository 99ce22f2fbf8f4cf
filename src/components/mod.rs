// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
pub mod card;
pub mod dragging_info; // ドラッグ中のカード列 🖱️
pub mod game_state;
pub mod pile; // 山札・捨て札・組札・場札 🃏
pub mod position; // 座標と当たり判定 📍
pub mod stack;
