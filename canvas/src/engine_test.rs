#![allow(clippy::float_cmp)]

use super::*;
use crate::hit::ResizeAnchor;

// =============================================================
// Helpers
// =============================================================

fn bounded_core() -> EngineCore {
    EngineCore::with_bounds(Bounds::new(500, 500))
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn added_id(action: &Action) -> CardId {
    match action {
        Action::CardAdded(card) => card.id,
        other => panic!("expected CardAdded, got {other:?}"),
    }
}

fn updates(actions: &[Action]) -> Vec<&Card> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::CardUpdated(card) => Some(card),
            _ => None,
        })
        .collect()
}

fn has_render_needed(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::RenderNeeded))
}

fn cursor(actions: &[Action]) -> Option<&str> {
    actions.iter().rev().find_map(|a| match a {
        Action::SetCursor(c) => Some(c.as_str()),
        _ => None,
    })
}

/// Click a card body without moving, leaving it selected.
fn click(core: &mut EngineCore, at: Point) -> Vec<Action> {
    let mut actions = core.on_pointer_down(at, Button::Primary);
    actions.extend(core.on_pointer_up(at, Button::Primary));
    actions
}

// =============================================================
// EngineCore: construction and defaults
// =============================================================

#[test]
fn core_new_is_empty_and_unbounded() {
    let core = EngineCore::new();
    assert!(core.cards.is_empty());
    assert!(core.selection().is_none());
    assert_eq!(core.bounds, Bounds::default());
    assert_eq!(core.dpr, 1.0);
    assert!(matches!(core.input, InputState::Idle));
}

#[test]
fn core_starts_with_remove_affordance() {
    let core = EngineCore::new();
    assert_eq!(core.affordances().len(), 1);
    assert_eq!(core.affordances()[0].name(), "removeable");
}

// =============================================================
// EngineCore: add / update / remove
// =============================================================

#[test]
fn add_card_places_default_card_at_origin() {
    let mut core = bounded_core();
    let action = core.add_card("#abcdef".into(), Fit::Contain);
    let Action::CardAdded(card) = action else {
        panic!("expected CardAdded");
    };
    assert_eq!(card.rect(), Rect::new(0, 0, 100, 100));
    assert_eq!(card.color, "#abcdef");
    assert_eq!(card.fit, Fit::Contain);
    assert!(card.update_end);
    assert_eq!(core.cards.len(), 1);
}

#[test]
fn add_card_twice_preserves_order_and_unique_ids() {
    let mut core = bounded_core();
    let first = added_id(&core.add_card("#111111".into(), Fit::Auto));
    let second = added_id(&core.add_card("#222222".into(), Fit::Auto));
    assert_ne!(first, second);
    let ids: Vec<CardId> = core.cards.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn add_card_clamps_to_small_container() {
    let mut core = EngineCore::with_bounds(Bounds::new(60, 80));
    let Action::CardAdded(card) = core.add_card("#000000".into(), Fit::Auto) else {
        panic!("expected CardAdded");
    };
    assert_eq!((card.width, card.height), (60, 80));
}

#[test]
fn add_card_before_viewport_keeps_default_size() {
    let mut core = EngineCore::new();
    let Action::CardAdded(card) = core.add_card("#000000".into(), Fit::Auto) else {
        panic!("expected CardAdded");
    };
    assert_eq!((card.width, card.height), (100, 100));
}

#[test]
fn update_card_returns_replaced_card() {
    let mut core = bounded_core();
    let id = added_id(&core.add_card("#000000".into(), Fit::Auto));
    let patch = CardPatch::from_card(core.card(id).unwrap()).with_rect(Rect::new(5, 6, 7, 8));
    let Some(Action::CardUpdated(card)) = core.update_card(id, &patch, false) else {
        panic!("expected CardUpdated");
    };
    assert_eq!(card.rect(), Rect::new(5, 6, 7, 8));
    assert!(!card.update_end);
}

#[test]
fn update_card_unknown_id_is_none() {
    let mut core = bounded_core();
    core.add_card("#000000".into(), Fit::Auto);
    let before = core.cards.clone();
    let patch = CardPatch::from_card(core.cards.as_slice().first().unwrap());
    assert!(core.update_card(CardId(999), &patch, true).is_none());
    assert_eq!(core.cards, before);
}

#[test]
fn remove_card_unknown_id_is_noop() {
    let mut core = bounded_core();
    core.add_card("#000000".into(), Fit::Auto);
    assert!(core.remove_card(CardId(999)).is_empty());
    assert_eq!(core.cards.len(), 1);
}

#[test]
fn add_then_remove_returns_to_prior_state() {
    let mut core = bounded_core();
    core.add_card("#000000".into(), Fit::Auto);
    let before = core.cards.clone();
    let id = added_id(&core.add_card("#ffffff".into(), Fit::Cover));
    let actions = core.remove_card(id);
    assert!(actions.contains(&Action::CardRemoved { id }));
    assert_eq!(core.cards, before);
}

#[test]
fn remove_selected_card_clears_selection() {
    let mut core = bounded_core();
    let id = added_id(&core.add_card("#000000".into(), Fit::Auto));
    click(&mut core, pt(50.0, 50.0));
    assert_eq!(core.selection(), Some(id));
    let actions = core.remove_card(id);
    assert!(core.selection().is_none());
    assert!(actions.contains(&Action::SelectionChanged(None)));
}

// =============================================================
// EngineCore: viewport
// =============================================================

#[test]
fn set_viewport_updates_bounds_and_dpr() {
    let mut core = EngineCore::new();
    let actions = core.set_viewport(640.7, 480.2, 2.0);
    assert_eq!(core.bounds, Bounds::new(640, 480));
    assert_eq!(core.dpr, 2.0);
    assert!(has_render_needed(&actions));
}

#[test]
fn set_viewport_ignores_empty_size() {
    let mut core = bounded_core();
    assert!(core.set_viewport(0.0, 300.0, 1.0).is_empty());
    assert_eq!(core.bounds, Bounds::new(500, 500));
}

#[test]
fn set_viewport_invalid_dpr_falls_back_to_one() {
    let mut core = bounded_core();
    core.set_viewport(500.0, 500.0, 0.0);
    assert_eq!(core.dpr, 1.0);
}

#[test]
fn set_viewport_refits_cards_that_overflow() {
    let mut core = bounded_core();
    let id = added_id(&core.add_card("#000000".into(), Fit::Auto));
    let patch = CardPatch::from_card(core.card(id).unwrap()).with_rect(Rect::new(400, 400, 100, 100));
    core.update_card(id, &patch, true);

    let actions = core.set_viewport(300.0, 450.0, 1.0);
    let updated = updates(&actions);
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].rect(), Rect::new(200, 350, 100, 100));
    assert!(updated[0].update_end);
    assert!(core.card(id).unwrap().rect().within(core.bounds));
}

#[test]
fn set_viewport_leaves_fitting_cards_alone() {
    let mut core = bounded_core();
    core.add_card("#000000".into(), Fit::Auto);
    let actions = core.set_viewport(800.0, 600.0, 1.0);
    assert!(updates(&actions).is_empty());
}

// =============================================================
// EngineCore: selection
// =============================================================

#[test]
fn pointer_down_on_card_selects_it() {
    let mut core = bounded_core();
    let id = added_id(&core.add_card("#000000".into(), Fit::Auto));
    let actions = core.on_pointer_down(pt(50.0, 50.0), Button::Primary);
    assert_eq!(core.selection(), Some(id));
    assert!(actions.contains(&Action::SelectionChanged(Some(id))));
    assert!(has_render_needed(&actions));
}

#[test]
fn pointer_down_on_empty_area_clears_selection() {
    let mut core = bounded_core();
    core.add_card("#000000".into(), Fit::Auto);
    click(&mut core, pt(50.0, 50.0));
    let actions = core.on_pointer_down(pt(400.0, 400.0), Button::Primary);
    assert!(core.selection().is_none());
    assert!(actions.contains(&Action::SelectionChanged(None)));
}

#[test]
fn pointer_down_with_secondary_button_is_ignored() {
    let mut core = bounded_core();
    core.add_card("#000000".into(), Fit::Auto);
    assert!(core.on_pointer_down(pt(50.0, 50.0), Button::Secondary).is_empty());
    assert!(core.selection().is_none());
}

#[test]
fn clicking_topmost_of_overlapping_cards_selects_it() {
    let mut core = bounded_core();
    core.add_card("#000000".into(), Fit::Auto);
    let top = added_id(&core.add_card("#ffffff".into(), Fit::Auto));
    click(&mut core, pt(10.0, 10.0));
    assert_eq!(core.selection(), Some(top));
}

// =============================================================
// EngineCore: drag gesture
// =============================================================

#[test]
fn drag_emits_previews_then_commit() {
    let mut core = bounded_core();
    let id = added_id(&core.add_card("#000000".into(), Fit::Auto));
    core.on_pointer_down(pt(50.0, 50.0), Button::Primary);
    assert!(matches!(core.input, InputState::DraggingCard { .. }));

    let moved = core.on_pointer_move(pt(80.0, 90.0));
    let preview = updates(&moved);
    assert_eq!(preview.len(), 1);
    assert_eq!(preview[0].rect(), Rect::new(30, 40, 100, 100));
    assert!(!preview[0].update_end);

    let up = core.on_pointer_up(pt(80.0, 90.0), Button::Primary);
    let commit = updates(&up);
    assert_eq!(commit.len(), 1);
    assert_eq!(commit[0].rect(), Rect::new(30, 40, 100, 100));
    assert!(commit[0].update_end);
    assert!(matches!(core.input, InputState::Idle));
    assert!(core.card(id).unwrap().update_end);
}

#[test]
fn drag_commit_matches_last_preview() {
    let mut core = bounded_core();
    core.add_card("#000000".into(), Fit::Auto);
    core.on_pointer_down(pt(50.0, 50.0), Button::Primary);
    let moved = core.on_pointer_move(pt(-200.0, 900.0));
    let preview = updates(&moved)[0].rect();
    let up = core.on_pointer_up(pt(-200.0, 900.0), Button::Primary);
    assert_eq!(updates(&up)[0].rect(), preview);
}

#[test]
fn drag_is_clamped_inside_container() {
    let mut core = bounded_core();
    let id = added_id(&core.add_card("#000000".into(), Fit::Auto));
    core.on_pointer_down(pt(50.0, 50.0), Button::Primary);
    core.on_pointer_move(pt(-100.0, -100.0));
    assert_eq!(core.card(id).unwrap().rect(), Rect::new(0, 0, 100, 100));
    core.on_pointer_move(pt(1_000.0, 1_000.0));
    assert_eq!(core.card(id).unwrap().rect(), Rect::new(400, 400, 100, 100));
}

#[test]
fn drag_repeated_same_position_emits_nothing_new() {
    let mut core = bounded_core();
    core.add_card("#000000".into(), Fit::Auto);
    core.on_pointer_down(pt(50.0, 50.0), Button::Primary);
    core.on_pointer_move(pt(60.0, 60.0));
    assert!(core.on_pointer_move(pt(60.2, 59.8)).is_empty());
}

#[test]
fn pointer_up_without_gesture_is_noop() {
    let mut core = bounded_core();
    assert!(core.on_pointer_up(pt(0.0, 0.0), Button::Primary).is_empty());
}

// =============================================================
// EngineCore: resize gesture
// =============================================================

#[test]
fn resize_from_se_handle_is_clamped_to_container() {
    let mut core = bounded_core();
    let id = added_id(&core.add_card("#000000".into(), Fit::Auto));
    click(&mut core, pt(50.0, 50.0));

    let down = core.on_pointer_down(pt(100.0, 100.0), Button::Primary);
    assert!(matches!(core.input, InputState::ResizingCard { anchor: ResizeAnchor::Se, .. }));
    assert_eq!(cursor(&down), Some("nwse-resize"));

    core.on_pointer_move(pt(700.0, 100.0));
    assert_eq!(core.card(id).unwrap().rect(), Rect::new(0, 0, 500, 100));
    assert!(!core.card(id).unwrap().update_end);

    let up = core.on_pointer_up(pt(700.0, 100.0), Button::Primary);
    assert_eq!(updates(&up)[0].rect(), Rect::new(0, 0, 500, 100));
    assert!(core.card(id).unwrap().update_end);
}

#[test]
fn resize_from_west_handle_keeps_right_edge() {
    let mut core = bounded_core();
    let id = added_id(&core.add_card("#000000".into(), Fit::Auto));
    core.on_pointer_down(pt(50.0, 50.0), Button::Primary);
    core.on_pointer_move(pt(150.0, 50.0));
    core.on_pointer_up(pt(150.0, 50.0), Button::Primary);
    assert_eq!(core.card(id).unwrap().rect(), Rect::new(100, 0, 100, 100));

    core.on_pointer_down(pt(100.0, 50.0), Button::Primary);
    core.on_pointer_move(pt(40.0, 50.0));
    core.on_pointer_up(pt(40.0, 50.0), Button::Primary);
    let rect = core.card(id).unwrap().rect();
    assert_eq!(rect, Rect::new(40, 0, 160, 100));
    assert_eq!(rect.right(), 200);
}

// =============================================================
// EngineCore: affordances and keys
// =============================================================

#[test]
fn remove_button_click_removes_selected_card() {
    let mut core = bounded_core();
    let id = added_id(&core.add_card("#000000".into(), Fit::Auto));
    click(&mut core, pt(50.0, 50.0));

    // Button sits centered under the 100x100 card at the origin.
    let actions = core.on_pointer_down(pt(50.0, 118.0), Button::Primary);
    assert!(actions.contains(&Action::CardRemoved { id }));
    assert!(core.cards.is_empty());
    assert!(core.selection().is_none());
}

#[test]
fn delete_key_removes_selected_card() {
    let mut core = bounded_core();
    let keep = added_id(&core.add_card("#000000".into(), Fit::Auto));
    let doomed = added_id(&core.add_card("#ffffff".into(), Fit::Auto));
    click(&mut core, pt(50.0, 50.0));
    assert_eq!(core.selection(), Some(doomed));

    let actions = core.on_key_down(&Key("Delete".into()));
    assert!(actions.contains(&Action::CardRemoved { id: doomed }));
    assert!(core.card(keep).is_some());
    assert!(core.card(doomed).is_none());
}

#[test]
fn delete_key_mid_gesture_resets_input() {
    let mut core = bounded_core();
    core.add_card("#000000".into(), Fit::Auto);
    core.on_pointer_down(pt(50.0, 50.0), Button::Primary);
    core.on_key_down(&Key("Backspace".into()));
    assert!(matches!(core.input, InputState::Idle));
    assert!(core.on_pointer_up(pt(60.0, 60.0), Button::Primary).is_empty());
}

#[test]
fn escape_clears_selection() {
    let mut core = bounded_core();
    core.add_card("#000000".into(), Fit::Auto);
    click(&mut core, pt(50.0, 50.0));
    let actions = core.on_key_down(&Key("Escape".into()));
    assert!(core.selection().is_none());
    assert!(actions.contains(&Action::SelectionChanged(None)));
}

#[test]
fn escape_mid_drag_restores_card_and_commits() {
    let mut core = bounded_core();
    let id = added_id(&core.add_card("#000000".into(), Fit::Auto));
    core.on_pointer_down(pt(50.0, 50.0), Button::Primary);
    core.on_pointer_move(pt(150.0, 120.0));
    assert_eq!(core.card(id).unwrap().rect(), Rect::new(100, 70, 100, 100));

    let actions = core.on_key_down(&Key("Escape".into()));
    let restored = updates(&actions);
    assert_eq!(restored.len(), 1);
    assert_eq!(restored[0].rect(), Rect::new(0, 0, 100, 100));
    assert!(restored[0].update_end);
    assert!(matches!(core.input, InputState::Idle));
    assert!(core.selection().is_none());

    assert!(core.on_pointer_up(pt(150.0, 120.0), Button::Primary).is_empty());
    let card = core.card(id).unwrap();
    assert_eq!(card.rect(), Rect::new(0, 0, 100, 100));
    assert!(card.update_end);
}

#[test]
fn escape_mid_resize_restores_original_size() {
    let mut core = bounded_core();
    let id = added_id(&core.add_card("#000000".into(), Fit::Auto));
    click(&mut core, pt(50.0, 50.0));
    core.on_pointer_down(pt(100.0, 100.0), Button::Primary);
    assert!(matches!(core.input, InputState::ResizingCard { anchor: ResizeAnchor::Se, .. }));
    core.on_pointer_move(pt(180.0, 160.0));

    core.on_key_down(&Key("Escape".into()));
    let card = core.card(id).unwrap();
    assert_eq!(card.rect(), Rect::new(0, 0, 100, 100));
    assert!(card.update_end);
}

#[test]
fn escape_without_gesture_emits_no_card_update() {
    let mut core = bounded_core();
    core.add_card("#000000".into(), Fit::Auto);
    click(&mut core, pt(50.0, 50.0));
    let actions = core.on_key_down(&Key("Escape".into()));
    assert!(updates(&actions).is_empty());
}

#[test]
fn second_pointer_down_mid_drag_commits_first_gesture() {
    let mut core = bounded_core();
    let id = added_id(&core.add_card("#000000".into(), Fit::Auto));
    core.on_pointer_down(pt(50.0, 50.0), Button::Primary);
    core.on_pointer_move(pt(150.0, 150.0));

    let actions = core.on_pointer_down(pt(400.0, 400.0), Button::Primary);
    let committed = updates(&actions);
    assert_eq!(committed.len(), 1);
    assert_eq!(committed[0].rect(), Rect::new(100, 100, 100, 100));
    assert!(committed[0].update_end);
    assert!(matches!(core.input, InputState::Idle));
    assert!(core.selection().is_none());
    assert!(core.card(id).unwrap().update_end);
}

#[test]
fn second_pointer_down_on_other_card_commits_then_starts_new_drag() {
    let mut core = bounded_core();
    let first = added_id(&core.add_card("#111111".into(), Fit::Auto));
    let second = added_id(&core.add_card("#222222".into(), Fit::Auto));
    let patch = CardPatch::from_card(core.card(second).unwrap()).with_rect(Rect::new(300, 300, 100, 100));
    core.update_card(second, &patch, true);

    core.on_pointer_down(pt(50.0, 50.0), Button::Primary);
    core.on_pointer_move(pt(60.0, 60.0));
    assert!(!core.card(first).unwrap().update_end);

    core.on_pointer_down(pt(350.0, 350.0), Button::Primary);
    assert!(core.card(first).unwrap().update_end);
    assert_eq!(core.card(first).unwrap().rect(), Rect::new(10, 10, 100, 100));
    assert_eq!(core.input.active_card(), Some(second));
    assert_eq!(core.selection(), Some(second));
}

#[test]
fn keys_without_selection_do_nothing() {
    let mut core = bounded_core();
    core.add_card("#000000".into(), Fit::Auto);
    assert!(core.on_key_down(&Key("Delete".into())).is_empty());
    assert_eq!(core.cards.len(), 1);
}

// =============================================================
// EngineCore: hover cursor
// =============================================================

#[test]
fn hover_reports_cursor_for_part_under_pointer() {
    let mut core = bounded_core();
    core.add_card("#000000".into(), Fit::Auto);
    assert_eq!(cursor(&core.on_pointer_move(pt(50.0, 50.0))), Some("move"));
    assert_eq!(cursor(&core.on_pointer_move(pt(300.0, 300.0))), Some("default"));

    click(&mut core, pt(50.0, 50.0));
    assert_eq!(cursor(&core.on_pointer_move(pt(100.0, 50.0))), Some("ew-resize"));
    assert_eq!(cursor(&core.on_pointer_move(pt(50.0, 118.0))), Some("pointer"));
}
