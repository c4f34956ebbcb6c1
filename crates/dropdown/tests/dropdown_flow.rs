//! End-to-end tests of the open, select and close cycle.

use dropdown::prelude::*;
use dropdown_test::{init_logging, DrawCommand, Harness, Recorded, ScriptedLayout};
use proptest::prelude::*;

const ANCHOR: Rect = Rect::new(16.0, 100.0, 328.0, 64.0);
const WINDOW: Size = Size::new(360.0, 640.0);

fn letters() -> Vec<Option<Item>> {
    ["A", "B", "C", "D", "E", "F"]
        .into_iter()
        .map(|s| Some(Item::new(s)))
        .collect()
}

fn harness(dropdown: Dropdown) -> Harness {
    init_logging();
    Harness::new(dropdown, ANCHOR, WINDOW)
}

// =============================================================================
// Opening
// =============================================================================

#[test]
fn test_trailing_selection_scrolls_to_end() {
    let mut h = harness(Dropdown::default().data(letters()).with_value("E"));
    h.open();

    let geometry = *h.dropdown().geometry().unwrap();
    assert_eq!(geometry.scroll_offset, 80.0);
    assert_eq!(h.dropdown().picker().scroll_offset(), 80.0);
    assert_eq!(h.dropdown().opacity(), 1.0);
}

#[test]
fn test_fixed_position_from_bottom() {
    let config = DropdownConfig {
        dropdown_position: Some(-1),
        ..DropdownConfig::default()
    };
    let mut h = harness(Dropdown::new(config).data(letters()).with_value("C"));
    h.open();
    assert_eq!(h.dropdown().geometry().unwrap().scroll_offset, 0.0);
}

#[test]
fn test_selected_row_is_drawn_over_anchor_text() {
    let mut h = harness(Dropdown::default().data(letters()).with_value("D"));
    h.open();

    let config = h.dropdown().config().clone();
    let row = h.item_position(3).unwrap();
    let row_top = row.y - config.item_size() / 2.0;
    let anchor_text_line = ANCHOR.y + config.offset_top();
    assert!((row_top + config.item_padding - anchor_text_line).abs() < 1e-3);
}

#[test]
fn test_zero_items_never_focuses() {
    let mut h = harness(Dropdown::default());
    h.tap_anchor().settle(1_000);
    assert_eq!(h.dropdown().phase(), Phase::Closed);
    assert!(!h.dropdown().is_focused());
    assert_eq!(h.focus_count(), 0);
}

#[test]
fn test_slow_layout_delays_overlay() {
    init_logging();
    let layout = ScriptedLayout::new(ANCHOR, WINDOW).pending(20);
    let mut h = Harness::with_layout(Dropdown::default().data(letters()), layout);

    h.tap_anchor().run_for(16 * 10);
    assert!(h.dropdown().is_focused());
    assert!(!h.dropdown().is_open());

    h.settle(2_000);
    assert_eq!(h.dropdown().phase(), Phase::Open);
}

#[test]
fn test_rtl_layout_mirrors_overlay() {
    init_logging();
    let anchor = Rect::new(20.0, 100.0, 100.0, 64.0);
    let layout = ScriptedLayout::new(anchor, Size::new(400.0, 800.0)).rtl(true);
    let mut h = Harness::with_layout(Dropdown::default().data(letters()), layout);
    h.open();
    assert_eq!(h.dropdown().geometry().unwrap().left, 264.0);
}

#[test]
fn test_geometry_serializes_for_hosts() {
    let mut h = harness(Dropdown::default().data(letters()).with_value("E"));
    h.open();

    let json = serde_json::to_value(h.dropdown().geometry().unwrap()).unwrap();
    assert_eq!(json["scroll_offset"], 80.0);
    assert_eq!(json["left"], 8.0);
    let back: OverlayGeometry = serde_json::from_value(json).unwrap();
    assert_eq!(&back, h.dropdown().geometry().unwrap());
}

// =============================================================================
// Selection and closing
// =============================================================================

#[test]
fn test_pick_item_commits_then_closes() {
    let mut h = harness(Dropdown::default().data(letters()));
    h.open();

    let changed = h.tap_item(2).unwrap();
    assert_eq!(changed.value, Value::from("C"));
    assert_eq!(h.dropdown().value(), Some(&Value::from("C")));
    assert!(h.dropdown().is_open());

    h.settle(1_000);
    assert!(!h.dropdown().is_open());
    assert_eq!(
        h.recorded(),
        vec![
            Recorded::Focus,
            Recorded::Change {
                value: Value::from("C"),
                index: 2
            },
            Recorded::Blur,
        ]
    );
}

#[test]
fn test_long_list_scrolls_to_every_row() {
    let mut h = harness(Dropdown::default().data((0..10).map(|i| Some(Item::new(i)))));
    h.open();

    let reachable: Vec<usize> = (0..10).filter(|&i| h.item_position(i).is_some()).collect();
    assert_eq!(reachable, vec![0, 1, 2, 3]);

    h.scroll(120.0).scroll(500.0);
    assert_eq!(h.dropdown().picker().scroll_offset(), 240.0);
    assert!(h.item_position(0).is_none());

    let changed = h.tap_item(9).unwrap();
    assert_eq!(changed.index, 9);
    assert_eq!(h.dropdown().value(), Some(&Value::from(9)));
}

#[test]
fn test_disabled_item_ignores_taps() {
    let data = vec![Some(Item::new("a")), Some(Item::new("b").disabled(true))];
    let mut h = harness(Dropdown::default().data(data));
    h.open();
    assert!(h.tap_item(1).is_none());
    assert_eq!(h.dropdown().phase(), Phase::Open);
    assert!(h.changes().is_empty());
}

#[test]
fn test_focus_and_blur_once_per_cycle() {
    let mut h = harness(Dropdown::default().data(letters()));

    h.open().back().back().settle(1_000);
    h.open().tap_backdrop().tap_backdrop().settle(1_000);
    h.open();
    h.tap_item(0);
    h.back().settle(1_000);

    assert_eq!(h.focus_count(), 3);
    assert_eq!(h.blur_count(), 3);
}

#[test]
fn test_unmount_mid_close_drops_callbacks() {
    let mut h = harness(Dropdown::default().data(letters()));
    h.open();
    h.tap_item(1);
    h.dropdown_mut().unmount();
    h.run_for(2_000);

    assert_eq!(h.blur_count(), 0);
    assert_eq!(h.dropdown().phase(), Phase::Open);
}

#[test]
fn test_external_value_round_trip() {
    let mut h = harness(Dropdown::default().data(letters()));
    h.dropdown_mut().set_value(Some(Value::from("D")));
    h.open();
    assert_eq!(h.dropdown().selected_index(), Some(3));
    assert_eq!(h.dropdown().opened_selection(), Some(3));
}

// =============================================================================
// Painting
// =============================================================================

#[test]
fn test_paint_open_picker() {
    let mut h = harness(Dropdown::default().data(letters()).with_value("B"));
    h.open();

    let canvas = h.paint();
    assert!(canvas.is_balanced());
    let texts = canvas.texts();
    assert_eq!(texts.first(), Some(&"B"));
    for letter in ["A", "B", "C", "D"] {
        assert!(texts.contains(&letter));
    }
    // Clipped below the last visible row
    assert!(!texts.contains(&"F"));

    let config = DropdownConfig::default();
    let selected = canvas
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { content, style, .. } if content == "B" => Some(style.color),
            _ => None,
        })
        .last();
    assert_eq!(selected, Some(config.selected_color()));
}

#[test]
fn test_paint_closed_has_no_picker() {
    let h = harness(Dropdown::default().data(letters()).with_value("A"));
    let canvas = h.paint();
    assert_eq!(canvas.texts(), vec!["A"]);
    assert!(canvas.is_balanced());
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_overlay_stays_in_viewport(
        vw in 100.0f32..1600.0,
        x_frac in 0.0f32..1.0,
        w_frac in 0.0f32..1.0,
        count in 1usize..40,
        sel in 0usize..40,
    ) {
        let x = vw * x_frac;
        let w = (vw - x) * w_frac;
        let input = PlacementInput::from_config(
            &DropdownConfig::default(),
            Rect::new(x, 200.0, w, 64.0),
            Size::new(vw, 800.0),
            false,
            count,
            Some(sel % count),
        );
        let g = dropdown::widgets::place(&input).unwrap();
        prop_assert!(g.left >= 8.0);
        prop_assert!(g.left + g.width <= vw + 1e-3);
    }

    #[test]
    fn prop_select_then_value(index in 0usize..6) {
        let mut h = Harness::new(Dropdown::default().data(letters()), ANCHOR, WINDOW);
        h.open();
        h.dropdown_mut().select(index);
        let expected = letters()[index].clone().unwrap().value;
        prop_assert_eq!(h.dropdown().value(), Some(&expected));
        prop_assert!(h.dropdown().is_open());
    }
}
