// src/app/layout_calculator.rs
//! Calculates where piles and cards are drawn and where they can be hit.

use crate::components::pile::Pile;
use crate::components::position::{Position, Rect};
use crate::components::stack::StackType;
use crate::config::layout::{
    CARD_HEIGHT, CARD_WIDTH,
    FOUNDATION_START_X, FOUNDATION_START_Y, FOUNDATION_X_OFFSET,
    STOCK_POS_X, STOCK_POS_Y, WASTE_POS_X, WASTE_POS_Y,
    TABLEAU_START_X, TABLEAU_START_Y, TABLEAU_X_OFFSET,
    TABLEAU_Y_OFFSET_FACE_DOWN, TABLEAU_Y_OFFSET_FACE_UP,
};
use crate::world::World;

/// パイルの基準位置 (一番下のカードの左上)。
pub fn pile_anchor(stack_type: StackType) -> Position {
    match stack_type {
        StackType::Stock => Position::new(STOCK_POS_X, STOCK_POS_Y),
        StackType::Waste => Position::new(WASTE_POS_X, WASTE_POS_Y),
        StackType::Foundation(index) => {
            Position::new(FOUNDATION_START_X + FOUNDATION_X_OFFSET * index as f32, FOUNDATION_START_Y)
        }
        StackType::Tableau(index) => {
            Position::new(TABLEAU_START_X + TABLEAU_X_OFFSET * index as f32, TABLEAU_START_Y)
        }
    }
}

/// パイル内の全カードの描画位置 (下 → 上)。
///
/// 場札だけは下のカードの表裏に応じて少しずつ下にずらす。
/// 裏向きの上は詰めて、表向きの上は広めに。それ以外のパイルは全部基準位置に重ねるよ。
pub fn card_positions(stack_type: StackType, pile: &Pile) -> Vec<Position> {
    let anchor = pile_anchor(stack_type);
    if !stack_type.is_tableau() {
        return vec![anchor; pile.len()];
    }

    let mut y = anchor.y;
    pile.cards()
        .iter()
        .map(|card| {
            let pos = Position::new(anchor.x, y);
            y += if card.is_face_up { TABLEAU_Y_OFFSET_FACE_UP } else { TABLEAU_Y_OFFSET_FACE_DOWN };
            pos
        })
        .collect()
}

/// 指定パイルの `index` 番目のカードの位置。範囲外なら None。
pub fn card_position(world: &World, stack_type: StackType, index: usize) -> Option<Position> {
    let pile = world.pile(stack_type)?;
    card_positions(stack_type, pile).get(index).copied()
}

/// カード1枚分の当たり判定。
pub fn card_rect(top_left: Position) -> Rect {
    Rect::new(top_left, CARD_WIDTH, CARD_HEIGHT)
}

/// カードが無くても使える、パイルの基準位置のカード1枚分の矩形。
pub fn pile_base_rect(stack_type: StackType) -> Rect {
    card_rect(pile_anchor(stack_type))
}
