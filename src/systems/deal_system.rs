// src/systems/deal_system.rs

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

use crate::components::stack::{StackType, TABLEAU_COUNT};
use crate::logic::deck::Deck;
use crate::system::System;
use crate::world::World;

/// 初期カード配置システム！🃏
///
/// ゲーム開始時に、山札と7つの場札にカードを配る役割を担うシステムだよ。
/// シードを指定すると、同じ配り方を何度でも再現できる (テストや「同じ配りでもう一回」用)。
#[derive(Debug, Default, Clone, Copy)]
pub struct DealInitialCardsSystem {
    seed: Option<u64>,
}

impl DealInitialCardsSystem {
    /// 毎回ちがう配り方 (thread_rng でシャッフル)。
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// シード付き。同じシードなら同じ配り方になるよ。
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// 指定した乱数生成器でシャッフルして配る。
    ///
    /// # 処理の流れ
    /// 1. World を空に戻す (スコア 0、状態 Playing)。
    /// 2. 52枚のデッキを作ってシャッフル。
    /// 3. 7ラウンドに分けて場札に配る。ラウンド `i` では `j >= i` の場札 `j` に1枚ずつ。
    ///    場札 `j` にとって最後の1枚 (ラウンド `j`) だけ表向き。
    /// 4. 残り24枚は裏向きのまま、配った順に山札へ。
    pub fn deal_with_rng<R: Rng + ?Sized>(&self, world: &mut World, rng: &mut R) {
        world.reset();

        let mut deck = Deck::new();
        deck.shuffle(rng);
        info!("🃏 デッキ作成完了！ ({}枚)", deck.len());

        // --- 場札 (Tableau) への配置 ---
        for round in 0..TABLEAU_COUNT {
            for column in round..TABLEAU_COUNT {
                let Some(mut card) = deck.deal() else {
                    warn!("DealInitialCardsSystem: デッキが足りません！(場札 {} のラウンド {})", column, round);
                    return;
                };
                card.is_face_up = column == round;
                if let Some(pile) = world.pile_mut(StackType::Tableau(column as u8)) {
                    pile.add(card);
                }
            }
        }

        // --- 山札 (Stock) への配置 ---
        let (stock, _) = world.stock_and_waste_mut();
        while let Some(card) = deck.deal() {
            stock.add(card);
        }

        info!("✅ 初期カード配置完了！ 山札 {} 枚", world.stock().len());
    }
}

impl System for DealInitialCardsSystem {
    fn run(&mut self, world: &mut World) {
        match self.seed {
            Some(seed) => {
                info!("DealInitialCardsSystem: seed = {} で配るよ", seed);
                self.deal_with_rng(world, &mut StdRng::seed_from_u64(seed));
            }
            None => self.deal_with_rng(world, &mut thread_rng()),
        }
    }
}
