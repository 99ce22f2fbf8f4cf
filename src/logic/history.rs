// src/logic/history.rs
//! アンドゥのためのスナップショット履歴だよ！⏪
//!
//! 手を打つ直前に World をまるごとコピーして積んでおき、
//! アンドゥで一番新しいものを取り出して書き戻すだけのシンプルな仕組み。

use std::collections::VecDeque;

use crate::components::card::Card;
use crate::components::stack::{FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::config::scoring::HISTORY_LIMIT;

/// ある時点のスコアと全パイルの中身。
/// カードは (スート, ランク, 表裏) のただの値なので、丸ごと clone して比較できるよ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub score: u32,
    pub stock: Vec<Card>,
    pub waste: Vec<Card>,
    pub foundations: [Vec<Card>; FOUNDATION_COUNT],
    pub tableaus: [Vec<Card>; TABLEAU_COUNT],
}

/// 上限付きのスナップショットの積み上げ。あふれたら一番古いものを捨てる。
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Snapshot>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self { entries: VecDeque::with_capacity(limit.min(HISTORY_LIMIT) + 1), limit }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push_back(snapshot);
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    /// 一番新しいスナップショットを取り出す。空なら None。
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop_back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
