// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod logger;
pub mod logic;
pub mod protocol;
pub mod system;
pub mod systems;
pub mod world;

// よく使う型はルートから使えるようにしておく
pub use app::game_app::GameApp;
pub use components::card::{Card, Rank, Suit};
pub use components::position::Position;
pub use components::stack::StackType;
pub use world::World;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
// パニックをコンソールに出すフックと、log マクロの出力先を登録する。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if logger::init(log::LevelFilter::Info).is_ok() {
        log::info!("klondike_wasm_game: logger ready");
    }
}
