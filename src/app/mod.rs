// src/app/mod.rs
//! GameApp の内部ロジックを役割ごとに分割して置くモジュールだよ！

pub mod drag_handler;
pub mod event_handler;
pub mod game_app;
pub mod layout_calculator;
pub mod state_getter;
pub mod stock_handler;
