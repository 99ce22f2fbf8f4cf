//! Gets the current game state from the World and converts it to the JSON view model.

use log::{debug, error};

use crate::app::layout_calculator::{card_positions, pile_anchor};
use crate::components::card::Card;
use crate::components::dragging_info::DragSession;
use crate::components::position::Position;
use crate::components::stack::StackType;
use crate::logic::history::History;
use crate::protocol::{CardData, DraggingData, GameStateData, PileData};
use crate::world::World;

fn card_data(card: &Card, position: Position) -> CardData {
    CardData {
        suit: card.suit,
        rank: card.rank,
        is_face_up: card.is_face_up,
        position: position.into(),
    }
}

/// ワールドの状態を描画用のデータにまとめる。
pub fn build_game_state(world: &World, history: &History, drag: &DragSession) -> GameStateData {
    let piles = StackType::all()
        .filter_map(|stack_type| {
            let pile = world.pile(stack_type)?;
            let cards = pile
                .cards()
                .iter()
                .zip(card_positions(stack_type, pile))
                .map(|(card, pos)| card_data(card, pos))
                .collect();
            Some(PileData { stack_type, anchor: pile_anchor(stack_type).into(), cards })
        })
        .collect();

    let dragging = drag.info().map(|info| DraggingData {
        source: info.source,
        cards: info.card_positions().map(|(card, pos)| card_data(card, pos)).collect(),
    });

    GameStateData {
        score: world.score(),
        moves: history.len(),
        won: world.is_won(),
        piles,
        dragging,
    }
}

/// ワールドの状態を取得し、JSON 文字列として返します。
pub fn get_world_state_json(world: &World, history: &History, drag: &DragSession) -> Result<String, serde_json::Error> {
    let state = build_game_state(world, history, drag);
    match serde_json::to_string(&state) {
        Ok(json) => {
            debug!("Serialized game state ({} bytes).", json.len());
            Ok(json)
        }
        Err(e) => {
            error!("Failed to serialize game state: {}", e);
            Err(e)
        }
    }
}
