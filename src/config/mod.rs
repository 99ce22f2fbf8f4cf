//! ゲーム全体の設定値 (コンパイル時定数) をまとめるモジュール。

pub mod input;
pub mod layout;
pub mod scoring;
