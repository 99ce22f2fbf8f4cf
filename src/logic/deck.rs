// src/logic/deck.rs

use itertools::iproduct;
use rand::{seq::SliceRandom, Rng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};

/// 標準的な52枚のカードデッキ（ソリティア用）を生成する関数だよ！🃏
///
/// スートとランクの全組み合わせを1枚ずつ。生成された時点ではすべて裏向き。
pub fn create_standard_deck() -> Vec<Card> {
    iproduct!(ALL_SUITS, ALL_RANKS)
        .map(|(suit, rank)| Card::new(suit, rank))
        .collect()
}

/// 乱数生成器を指定してシャッフルする。シード付きの `StdRng` を渡せば毎回同じ並びになるよ。
pub fn shuffle_deck_with<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// ゲーム開始時だけ使う山。配り終わったら捨てる。
///
/// 「上」は Vec の末尾。`deal` は末尾から1枚ずつ取り出すよ。
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// スート順・ランク順に並んだ52枚の山。
    pub fn new() -> Self {
        Self { cards: create_standard_deck() }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle_deck_with(&mut self.cards, rng);
    }

    /// 一番上のカードを1枚取り出す。空なら None。
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
