// src/app/stock_handler.rs
//! Handles clicks on the Stock pile (dealing to Waste, recycling Waste back).

use log::{debug, info};

use crate::components::card::Card;
use crate::config::scoring::SCORE_RECYCLE_WASTE;
use crate::logic::history::History;
use crate::logic::rules::stock_waste;
use crate::world::World;

/// 山札クリックで何が起きたか。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockAction {
    /// 1枚めくって捨て札へ。
    Dealt(Card),
    /// 捨て札を全部山札に戻した (枚数)。
    Recycled(usize),
    /// 山札も捨て札も空で、何もしなかった。
    Nothing,
}

/// 山札をクリックしたときの処理。
///
/// どの場合でも、先にアンドゥ用のスナップショットを取るよ。
pub fn draw_from_stock(world: &mut World, history: &mut History) -> StockAction {
    history.push(world.snapshot());

    if let Some(card) = deal_one_card_from_stock(world) {
        return StockAction::Dealt(card);
    }
    match reset_waste_to_stock(world) {
        0 => {
            debug!("Stock and Waste are both empty. Nothing to draw.");
            StockAction::Nothing
        }
        count => StockAction::Recycled(count),
    }
}

/// Deals one card from the Stock pile to the Waste pile, face up.
/// Returns the dealt card, or None if the Stock is empty.
pub fn deal_one_card_from_stock(world: &mut World) -> Option<Card> {
    let (stock, waste) = world.stock_and_waste_mut();
    if !stock_waste::can_deal_from_stock(stock.is_empty()) {
        return None;
    }
    let mut card = stock.remove_top()?;
    card.is_face_up = true;
    debug!("  Dealing card {} to Waste.", card);
    waste.add(card.clone());
    Some(card)
}

/// Moves every Waste card back to the Stock face down, when the Stock is empty.
///
/// The Waste top goes in first, so the card drawn first ends up on top of the Stock
/// and drawing again repeats the same sequence. Applies the recycle penalty once.
/// Returns the number of cards moved (0 if nothing happened).
pub fn reset_waste_to_stock(world: &mut World) -> usize {
    let (stock, waste) = world.stock_and_waste_mut();
    if !stock_waste::can_reset_stock_from_waste(stock.is_empty(), waste.is_empty()) {
        return 0;
    }

    let mut count = 0;
    while let Some(mut card) = waste.remove_top() {
        card.is_face_up = false;
        stock.add(card);
        count += 1;
    }

    world.add_score(SCORE_RECYCLE_WASTE);
    info!("Waste pile reset to Stock: {} cards (score {})", count, world.score());
    count
}
