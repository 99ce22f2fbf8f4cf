//! GameApp を Rust の API だけで動かして、1ゲーム分の流れを確かめるテスト。

use klondike_wasm_game::app::layout_calculator::pile_anchor;
use klondike_wasm_game::components::game_state::GameStatus;
use klondike_wasm_game::config::layout::{TABLEAU_Y_OFFSET_FACE_DOWN, TABLEAU_Y_OFFSET_FACE_UP};
use klondike_wasm_game::{Card, GameApp, Position, Rank, StackType, Suit, World};

fn up(suit: Suit, rank: Rank) -> Card {
    Card::face_up(suit, rank)
}

fn down(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// パイルの基準位置から少し内側の点。
fn on_pile(stack: StackType, dy: f32) -> Position {
    let anchor = pile_anchor(stack);
    Position::new(anchor.x + 10.0, anchor.y + dy)
}

fn suit_run(suit: Suit, ranks: &[Rank]) -> Vec<Card> {
    ranks.iter().map(|&rank| up(suit, rank)).collect()
}

const ALL: [Rank; 13] = [
    Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven,
    Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King,
];

#[test]
fn new_game_deals_a_klondike_layout() {
    let mut app = GameApp::new();
    app.new_game_with_seed(2024);
    let world = app.world();

    for (j, tableau) in world.tableaus().iter().enumerate() {
        assert_eq!(tableau.len(), j + 1);
        let face_up: Vec<bool> = tableau.cards().iter().map(|c| c.is_face_up).collect();
        assert_eq!(face_up.iter().filter(|&&f| f).count(), 1);
        assert_eq!(face_up.last(), Some(&true));
    }
    assert_eq!(world.stock().len(), 24);
    assert!(world.waste().is_empty());
    assert!(world.foundations().iter().all(|f| f.is_empty()));
    assert_eq!(app.score(), 0);
    assert_eq!(app.moves(), 0);
    assert!(!app.is_won());
    assert!(app.is_running());
}

#[test]
fn seeded_games_are_reproducible() {
    let mut a = GameApp::new();
    let mut b = GameApp::new();
    a.new_game_with_seed(77);
    b.new_game_with_seed(77);
    assert_eq!(a.state(), b.state());

    a.draw_from_stock();
    b.draw_from_stock();
    assert_eq!(a.world().waste().top(), b.world().waste().top());
}

#[test]
fn draw_then_undo_restores_everything() {
    let mut app = GameApp::new();
    app.new_game_with_seed(3);
    let before = app.world().clone();

    assert!(app.draw_from_stock());
    assert_eq!(app.world().waste().len(), 1);
    assert_eq!(app.moves(), 1);

    assert!(app.undo());
    assert_eq!(app.world(), &before);
    assert_eq!(app.moves(), 0);
    assert!(!app.undo(), "履歴が空なら false");
}

#[test]
fn dragging_seven_of_spades_to_foundation_reveals_and_scores() {
    let mut world = World::new();
    world.set_pile_cards(StackType::Tableau(0), vec![down(Suit::Heart, Rank::Eight), up(Suit::Spade, Rank::Seven)]);
    world.set_pile_cards(StackType::Foundation(0), suit_run(Suit::Spade, &ALL[..6]));
    let mut app = GameApp::from_world(world);

    let seven = on_pile(StackType::Tableau(0), TABLEAU_Y_OFFSET_FACE_DOWN + 30.0);
    assert!(app.pointer_down(seven.x, seven.y, 0.0));
    assert!(app.is_dragging());
    assert!(app.pointer_move(400.0, 100.0));

    let foundation = on_pile(StackType::Foundation(0), 10.0);
    assert!(app.pointer_up(foundation.x, foundation.y));

    assert!(!app.is_dragging());
    assert_eq!(app.score(), 10 + 5);
    assert_eq!(app.world().tableaus()[0].cards(), &[up(Suit::Heart, Rank::Eight)]);
    assert_eq!(app.world().foundations()[0].top(), Some(&up(Suit::Spade, Rank::Seven)));
    assert_eq!(app.moves(), 1);

    assert!(app.undo());
    assert_eq!(app.score(), 0);
    assert_eq!(app.world().tableaus()[0].cards(), &[down(Suit::Heart, Rank::Eight), up(Suit::Spade, Rank::Seven)]);
}

#[test]
fn dragging_a_run_onto_an_empty_tableau_fails_cleanly() {
    let mut world = World::new();
    world.set_pile_cards(
        StackType::Tableau(0),
        vec![up(Suit::Diamond, Rank::Ten), up(Suit::Spade, Rank::Nine), up(Suit::Diamond, Rank::Eight)],
    );
    let mut app = GameApp::from_world(world.clone());

    let ten = on_pile(StackType::Tableau(0), 5.0);
    assert!(app.begin_drag(StackType::Tableau(0), ten));
    assert_eq!(app.drag_session().info().map(|i| i.cards.len()), Some(3));

    let empty = on_pile(StackType::Tableau(4), 5.0);
    assert!(app.update_drag(empty));
    assert!(!app.end_drag(empty));

    assert_eq!(app.world(), &world);
    assert_eq!(app.moves(), 0);
    assert!(!app.is_dragging());
}

#[test]
fn moving_a_run_between_tableaus() {
    let mut world = World::new();
    world.set_pile_cards(
        StackType::Tableau(0),
        vec![down(Suit::Club, Rank::Two), up(Suit::Diamond, Rank::Ten), up(Suit::Spade, Rank::Nine)],
    );
    world.set_pile_cards(StackType::Tableau(1), vec![up(Suit::Club, Rank::Jack)]);
    let mut app = GameApp::from_world(world);

    let ten = on_pile(StackType::Tableau(0), TABLEAU_Y_OFFSET_FACE_DOWN + 5.0);
    assert!(app.begin_drag(StackType::Tableau(0), ten));
    let jack = on_pile(StackType::Tableau(1), TABLEAU_Y_OFFSET_FACE_UP);
    assert!(app.end_drag(jack));

    assert_eq!(app.world().tableaus()[1].len(), 3);
    assert_eq!(app.world().tableaus()[0].cards(), &[up(Suit::Club, Rank::Two)]);
    assert_eq!(app.score(), 5, "場札どうし 0 + めくり 5");
}

#[test]
fn double_click_sends_the_waste_ace_home() {
    let mut world = World::new();
    world.set_pile_cards(StackType::Waste, vec![up(Suit::Club, Rank::Five), up(Suit::Heart, Rank::Ace)]);
    let mut app = GameApp::from_world(world);
    let waste = on_pile(StackType::Waste, 10.0);

    assert!(app.pointer_down(waste.x, waste.y, 1000.0), "1回目はドラッグ開始");
    assert!(!app.pointer_up(waste.x, waste.y), "その場で離しても何も起きない");
    assert!(app.pointer_down(waste.x + 3.0, waste.y + 3.0, 1200.0), "2回目でダブルクリック");

    assert!(!app.is_dragging());
    assert_eq!(app.world().foundations()[0].cards(), &[up(Suit::Heart, Rank::Ace)]);
    assert_eq!(app.world().waste().top(), Some(&up(Suit::Club, Rank::Five)));
    assert_eq!(app.score(), 10);
}

#[test]
fn double_click_without_a_foundation_target_does_not_drag() {
    let mut world = World::new();
    world.set_pile_cards(StackType::Waste, vec![up(Suit::Club, Rank::Five)]);
    let before = world.clone();
    let mut app = GameApp::from_world(world);
    let waste = on_pile(StackType::Waste, 10.0);

    assert!(app.pointer_down(waste.x, waste.y, 1000.0));
    assert!(!app.pointer_up(waste.x, waste.y));
    assert!(!app.pointer_down(waste.x + 2.0, waste.y + 2.0, 1100.0), "置き場所が無いダブルクリックは何もしない");

    assert!(!app.is_dragging(), "ダブルクリックでドラッグは始まらない");
    assert_eq!(app.world(), &before);
    assert_eq!(app.world().waste().len(), 1);
    assert_eq!(app.moves(), 0);
}

#[test]
fn clicking_the_stock_draws_and_recycles() {
    let mut world = World::new();
    world.set_pile_cards(StackType::Waste, vec![up(Suit::Club, Rank::Five), up(Suit::Heart, Rank::Six), up(Suit::Spade, Rank::Two)]);
    let mut app = GameApp::from_world(world);
    let stock = on_pile(StackType::Stock, 10.0);

    assert!(app.pointer_down(stock.x, stock.y, 0.0));
    assert!(app.world().waste().is_empty());
    assert_eq!(app.world().stock().len(), 3);
    assert_eq!(app.score(), 0, "ペナルティでも 0 より下がらない");

    assert!(app.pointer_down(stock.x, stock.y, 100.0));
    assert_eq!(app.world().waste().top(), Some(&up(Suit::Club, Rank::Five)), "最初にめくったカードがまた最初に出る");
}

#[test]
fn winning_move_and_undo_clears_the_win() {
    let mut world = World::new();
    world.set_pile_cards(StackType::Foundation(0), suit_run(Suit::Heart, &ALL));
    world.set_pile_cards(StackType::Foundation(1), suit_run(Suit::Diamond, &ALL));
    world.set_pile_cards(StackType::Foundation(2), suit_run(Suit::Club, &ALL));
    world.set_pile_cards(StackType::Foundation(3), suit_run(Suit::Spade, &ALL[..12]));
    world.set_pile_cards(StackType::Waste, vec![up(Suit::Spade, Rank::King)]);
    let mut app = GameApp::from_world(world);

    assert!(app.attempt_move_from_click(StackType::Waste, on_pile(StackType::Waste, 10.0)));
    assert!(app.is_won());
    assert_eq!(app.world().status(), GameStatus::Won);
    assert!(app.state().won);

    assert!(app.undo());
    assert!(!app.is_won());
    assert_eq!(app.world().waste().len(), 1);
}

#[test]
fn undo_into_a_complete_position_still_clears_the_win() {
    let mut world = World::new();
    world.set_pile_cards(StackType::Foundation(0), suit_run(Suit::Heart, &ALL));
    world.set_pile_cards(StackType::Foundation(1), suit_run(Suit::Diamond, &ALL));
    world.set_pile_cards(StackType::Foundation(2), suit_run(Suit::Club, &ALL));
    world.set_pile_cards(StackType::Foundation(3), suit_run(Suit::Spade, &ALL[..12]));
    world.set_pile_cards(StackType::Waste, vec![up(Suit::Spade, Rank::King)]);
    let mut app = GameApp::from_world(world);

    assert!(app.attempt_move_from_click(StackType::Waste, on_pile(StackType::Waste, 10.0)));
    assert!(app.is_won());

    // 動かすものが無くても自動完成はスナップショットを1つ積む
    assert_eq!(app.auto_complete(), 0);
    assert!(app.is_won());

    assert!(app.undo());
    assert!(app.world().foundations().iter().all(|f| f.len() == 13), "盤面は揃ったまま");
    assert!(!app.is_won(), "アンドゥ後はクリア扱いにしない");
    assert_eq!(app.world().status(), GameStatus::Playing);
}

#[test]
fn click_must_land_on_the_named_pile() {
    let mut world = World::new();
    world.set_pile_cards(StackType::Waste, vec![up(Suit::Heart, Rank::Ace)]);
    let mut app = GameApp::from_world(world);
    assert!(!app.attempt_move_from_click(StackType::Waste, on_pile(StackType::Tableau(3), 5.0)));
    assert!(app.world().foundations()[0].is_empty());
}

#[test]
fn auto_complete_is_one_undo_step() {
    let mut world = World::new();
    world.set_pile_cards(StackType::Waste, vec![up(Suit::Heart, Rank::Two)]);
    world.set_pile_cards(StackType::Tableau(0), vec![up(Suit::Heart, Rank::Ace)]);
    world.set_pile_cards(StackType::Tableau(1), vec![up(Suit::Spade, Rank::Ace)]);
    let before = world.clone();
    let mut app = GameApp::from_world(world);

    assert_eq!(app.auto_complete(), 3);
    assert_eq!(app.moves(), 1);
    assert_eq!(app.score(), 30);

    assert!(app.undo());
    assert_eq!(app.world(), &before);
}

#[test]
fn whole_state_commands_cancel_an_active_drag() {
    let mut app = GameApp::new();
    app.new_game_with_seed(11);
    let top_of_last = on_pile(StackType::Tableau(6), 6.0 * TABLEAU_Y_OFFSET_FACE_DOWN + 5.0);
    assert!(app.begin_drag(StackType::Tableau(6), top_of_last));
    assert_eq!(app.world().card_count(), 51);

    assert!(app.draw_from_stock());
    assert!(!app.is_dragging());
    assert_eq!(app.world().card_count(), 52);
    assert_eq!(app.world().tableaus()[6].len(), 7);

    assert!(app.begin_drag(StackType::Tableau(6), top_of_last));
    app.new_game();
    assert!(!app.is_dragging());
    assert_eq!(app.world().card_count(), 52);
}

#[test]
fn history_keeps_the_latest_hundred_moves() {
    let mut app = GameApp::new();
    app.new_game_with_seed(5);
    for _ in 0..120 {
        app.draw_from_stock();
    }
    assert_eq!(app.moves(), 100);
}

#[test]
fn keyboard_commands() {
    let mut app = GameApp::new();
    app.new_game_with_seed(8);
    app.draw_from_stock();
    assert_eq!(app.moves(), 1);

    assert!(app.key_down("u", false));
    assert_eq!(app.moves(), 0);

    app.draw_from_stock();
    assert!(app.key_down("z", true));
    assert_eq!(app.moves(), 0);

    app.draw_from_stock();
    assert!(app.key_down("n", false));
    assert_eq!(app.moves(), 0, "新しいゲームで履歴は空");
    assert_eq!(app.world().waste().len(), 0);

    assert!(app.key_down("a", false));
    assert_eq!(app.moves(), 1, "自動完成は動かなくてもスナップショットを1つ取る");

    assert!(!app.key_down("q", false));
    assert!(!app.is_running());
    assert!(!app.pointer_down(60.0, 60.0, 0.0), "終了後は入力を受け付けない");
    assert!(!app.key_down("n", false));
}

#[test]
fn state_json_round_trips_through_serde() {
    let mut app = GameApp::new();
    app.new_game_with_seed(42);
    let json = app.get_state_json().expect("serializable");
    let parsed: klondike_wasm_game::protocol::GameStateData = serde_json::from_str(&json).expect("parse");
    assert_eq!(parsed, app.state());
    assert_eq!(parsed.piles.iter().map(|p| p.cards.len()).sum::<usize>(), 52);
}
