// src/system.rs

use crate::world::World;

/// System（システム）トレイトだよ！
///
/// システムは、ゲームのロジック（ルールや振る舞い）を実行する役割を持つんだ。
/// 「カードを配る」「勝ったかどうか調べる」みたいに、
/// 特定の関心事に特化したロジックをひとまとめにするよ。
///
/// `&mut World` を引数に取るのは、システムが World の中身を自由に変更できるようにするため。
pub trait System {
    /// このシステムを実行するよ！
    fn run(&mut self, world: &mut World);
}
