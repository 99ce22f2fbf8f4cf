// src/components/stack.rs

use serde::{Serialize, Deserialize};
use std::fmt;

/// 組札 (Foundation) の数。
pub const FOUNDATION_COUNT: usize = 4;
/// 場札 (Tableau) の列数。
pub const TABLEAU_COUNT: usize = 7;

/// カードが存在する場所（パイル）を指す ID だよ。
/// 山札なのか、場札の何列目なのか、などを区別するよ。
///
/// JS 側とはこの enum を JSON にしてやり取りする！
/// `"Stock"`, `"Waste"`, `{"Foundation":2}`, `{"Tableau":5}` みたいな形になるよ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 山札 (Stock)。プレイヤーがカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
    /// 組札 (Foundation)。0-3 の番号を持つ。
    /// スートは最初に置かれたエースで決まるので、番号とスートは固定しないよ。
    Foundation(u8),
    /// 場札 (Tableau)。0-6 の列番号を持つ。
    Tableau(u8),
}

impl StackType {
    /// 盤面にある全パイルを、描画・スナップショットと同じ順番で返す。
    pub fn all() -> impl Iterator<Item = StackType> {
        [StackType::Stock, StackType::Waste]
            .into_iter()
            .chain((0..FOUNDATION_COUNT as u8).map(StackType::Foundation))
            .chain((0..TABLEAU_COUNT as u8).map(StackType::Tableau))
    }

    /// 番号が範囲内かどうか。JSON から来た値はこれでチェックする。
    pub fn is_valid(self) -> bool {
        match self {
            StackType::Stock | StackType::Waste => true,
            StackType::Foundation(index) => (index as usize) < FOUNDATION_COUNT,
            StackType::Tableau(index) => (index as usize) < TABLEAU_COUNT,
        }
    }

    pub fn is_foundation(self) -> bool {
        matches!(self, StackType::Foundation(_))
    }

    pub fn is_tableau(self) -> bool {
        matches!(self, StackType::Tableau(_))
    }
}

impl fmt::Display for StackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackType::Stock => write!(f, "stock"),
            StackType::Waste => write!(f, "waste"),
            StackType::Foundation(i) => write!(f, "foundation[{}]", i),
            StackType::Tableau(i) => write!(f, "tableau[{}]", i),
        }
    }
}
