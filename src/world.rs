// src/world.rs

//! World（ワールド）は、ゲーム世界の全パイルとスコア・勝敗を持つ中心的な存在だよ！
//!
//! 山札・捨て札・組札4つ・場札7列、それにスコアとゲーム状態。
//! どのカードも必ずどれか1つのパイルにだけ入っている、というのがこの World の約束だよ。
//! World を書き換えるのは systems と app の各ハンドラだけ。

use std::array;

use crate::components::card::Card;
use crate::components::game_state::GameStatus;
use crate::components::pile::Pile;
use crate::components::stack::{StackType, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::logic::history::Snapshot;

#[derive(Debug, Clone, PartialEq)]
pub struct World {
    stock: Pile,
    waste: Pile,
    foundations: [Pile; FOUNDATION_COUNT],
    tableaus: [Pile; TABLEAU_COUNT],
    score: u32,
    status: GameStatus,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// 全部空っぽの World を作るよ。カードを配るのは `DealInitialCardsSystem` の仕事。
    pub fn new() -> Self {
        World {
            stock: Pile::stock(),
            waste: Pile::waste(),
            foundations: array::from_fn(|_| Pile::foundation()),
            tableaus: array::from_fn(|_| Pile::tableau()),
            score: 0,
            status: GameStatus::Playing,
        }
    }

    // --- パイルの取得 ---

    /// 指定したパイルを取得する。番号が範囲外なら None。
    pub fn pile(&self, stack: StackType) -> Option<&Pile> {
        match stack {
            StackType::Stock => Some(&self.stock),
            StackType::Waste => Some(&self.waste),
            StackType::Foundation(i) => self.foundations.get(i as usize),
            StackType::Tableau(i) => self.tableaus.get(i as usize),
        }
    }

    pub fn pile_mut(&mut self, stack: StackType) -> Option<&mut Pile> {
        match stack {
            StackType::Stock => Some(&mut self.stock),
            StackType::Waste => Some(&mut self.waste),
            StackType::Foundation(i) => self.foundations.get_mut(i as usize),
            StackType::Tableau(i) => self.tableaus.get_mut(i as usize),
        }
    }

    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    pub fn foundations(&self) -> &[Pile] {
        &self.foundations
    }

    pub fn tableaus(&self) -> &[Pile] {
        &self.tableaus
    }

    /// 山札と捨て札を同時に書き換えたいとき用 (配る・戻す処理)。
    pub(crate) fn stock_and_waste_mut(&mut self) -> (&mut Pile, &mut Pile) {
        (&mut self.stock, &mut self.waste)
    }

    /// 移動元と移動先を同時に可変で借りる。同じパイルや範囲外なら None。
    pub(crate) fn two_piles_mut(&mut self, a: StackType, b: StackType) -> Option<(&mut Pile, &mut Pile)> {
        if a == b || !a.is_valid() || !b.is_valid() {
            return None;
        }
        // 13個のパイルを順番に見て、欲しい2つだけ拾う。
        let World { stock, waste, foundations, tableaus, .. } = self;
        let piles = [stock, waste]
            .into_iter()
            .chain(foundations.iter_mut())
            .chain(tableaus.iter_mut());
        let mut first = None;
        let mut second = None;
        for (stack, pile) in StackType::all().zip(piles) {
            if stack == a {
                first = Some(pile);
            } else if stack == b {
                second = Some(pile);
            }
        }
        Some((first?, second?))
    }

    /// 組札ごとの枚数。勝利判定に使う。
    pub fn foundation_sizes(&self) -> [usize; FOUNDATION_COUNT] {
        array::from_fn(|i| self.foundations[i].len())
    }

    /// 全パイルのカード枚数の合計 (配り終わったら常に52枚のはず)。
    pub fn card_count(&self) -> usize {
        StackType::all()
            .filter_map(|s| self.pile(s))
            .map(Pile::len)
            .sum()
    }

    // --- スコア ---

    pub fn score(&self) -> u32 {
        self.score
    }

    /// スコアに `delta` を足す。0 より下には絶対にならないよ。
    pub fn add_score(&mut self, delta: i32) {
        self.score = self.score.saturating_add_signed(delta);
    }

    // --- ゲーム状態 ---

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_won(&self) -> bool {
        self.status.is_won()
    }

    pub fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    // --- 新しいゲーム / スナップショット ---

    /// 全パイルを空にして、スコアと状態をリセットする。
    pub fn reset(&mut self) {
        *self = World::new();
    }

    /// 今の状態をまるごとコピーしたスナップショットを作る。
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            score: self.score,
            stock: self.stock.cards().to_vec(),
            waste: self.waste.cards().to_vec(),
            foundations: array::from_fn(|i| self.foundations[i].cards().to_vec()),
            tableaus: array::from_fn(|i| self.tableaus[i].cards().to_vec()),
        }
    }

    /// スナップショットの内容で全パイルとスコアを上書きする。
    /// ゲーム状態はここでは触らないよ (アンドゥ側で決める)。
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.score = snapshot.score;
        self.stock.replace_cards(snapshot.stock.clone());
        self.waste.replace_cards(snapshot.waste.clone());
        for (pile, cards) in self.foundations.iter_mut().zip(snapshot.foundations.iter()) {
            pile.replace_cards(cards.clone());
        }
        for (pile, cards) in self.tableaus.iter_mut().zip(snapshot.tableaus.iter()) {
            pile.replace_cards(cards.clone());
        }
    }

    /// テストや盤面の組み立て用: 指定パイルの中身を差し替える。
    pub fn set_pile_cards(&mut self, stack: StackType, cards: Vec<Card>) -> bool {
        match self.pile_mut(stack) {
            Some(pile) => {
                pile.replace_cards(cards);
                true
            }
            None => false,
        }
    }
}
