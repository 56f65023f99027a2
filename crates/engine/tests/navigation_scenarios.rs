// End-to-end navigation scenarios: parse a command list, apply it to a
// viewport, check the resulting selection, anchor and home.

use gridnav_config::NavigationSettings;
use gridnav_core::{
    AnchoredSelection, ColumnOrRowReference, ColumnReference, GridColumn, GridRow, ReferenceKind,
    Selection, SelectionAnchor,
};
use gridnav_engine::*;

const ROW_HEIGHT: u32 = 24;

fn context() -> BasicNavigationContext {
    BasicNavigationContext::from_settings(&NavigationSettings::default())
}

fn viewport(home: &str, selection: Option<(&str, SelectionAnchor)>) -> Viewport {
    let anchored = selection
        .map(|(text, anchor)| AnchoredSelection::with(text.parse().unwrap(), anchor).unwrap());
    Viewport::new(ViewportRectangle::new(home.parse().unwrap(), 1280, 720), anchored)
}

fn apply(viewport: &Viewport, commands: &str, context: &BasicNavigationContext) -> Viewport {
    commands
        .parse::<NavigationList>()
        .unwrap()
        .apply(viewport, context)
}

fn selection_of(viewport: &Viewport) -> (String, SelectionAnchor) {
    let anchored = viewport.anchored_selection().unwrap();
    (anchored.selection().to_string(), anchored.anchor())
}

// ---------------------------------------------------------------------------
// Cell steps
// ---------------------------------------------------------------------------

#[test]
fn down_row_moves_cell() {
    let start = viewport("A1", Some(("C3", SelectionAnchor::None)));
    let result = apply(&start, "down-row", &context());
    assert_eq!(selection_of(&result), ("C4".to_string(), SelectionAnchor::None));
}

#[test]
fn down_row_on_column_is_noop() {
    let start = viewport("A1", Some(("C", SelectionAnchor::None)));
    let result = apply(&start, "down-row", &context());
    assert_eq!(result, start);
}

#[test]
fn extend_right_column_from_cell() {
    let start = viewport("A1", Some(("C3", SelectionAnchor::None)));
    let result = apply(&start, "extend-right-column", &context());
    assert_eq!(selection_of(&result), ("C3:D3".to_string(), SelectionAnchor::TopLeft));
    assert_eq!(result.selection().unwrap().kind().name(), "cell-range");
}

#[test]
fn commands_apply_left_to_right() {
    let start = viewport("A1", Some(("B2", SelectionAnchor::None)));
    let result = apply(
        &start,
        "right,right,down,extend-left,extend-left,extend-left",
        &context(),
    );
    assert_eq!(selection_of(&result), ("A3:D3".to_string(), SelectionAnchor::TopRight));
}

#[test]
fn moving_left_from_column_a_stays() {
    let start = viewport("A1", Some(("A5", SelectionAnchor::None)));
    let result = apply(&start, "left,left,left", &context());
    assert_eq!(result, start);
}

// ---------------------------------------------------------------------------
// Hidden lines and pixels
// ---------------------------------------------------------------------------

#[test]
fn down_pixel_skips_hidden_row() {
    let mut context = context();
    context.apply_rows([GridRow::new("4".parse().unwrap(), true)]);

    let start = viewport("C3", None);
    let command = format!("down-pixel {}", 2 * ROW_HEIGHT - 1);
    let result = apply(&start, &command, &context);
    assert_eq!(result.home().to_string(), "C6");
    assert!(result.anchored_selection().is_none());
}

#[test]
fn down_row_skips_hidden_rows() {
    let mut context = context();
    context.apply_rows([
        GridRow::new("4".parse().unwrap(), true),
        GridRow::new("5".parse().unwrap(), true),
    ]);
    let start = viewport("A1", Some(("C3", SelectionAnchor::None)));
    let result = apply(&start, "down", &context);
    assert_eq!(selection_of(&result).0, "C6");
}

#[test]
fn extend_over_hidden_columns() {
    let mut context = context();
    context.apply_columns([GridColumn::new("D".parse().unwrap(), true)]);
    let start = viewport("A1", Some(("C", SelectionAnchor::None)));
    let result = apply(&start, "extend-right", &context);
    assert_eq!(selection_of(&result), ("C:E".to_string(), SelectionAnchor::Left));
}

#[test]
fn extend_pixels_skips_hidden_lines() {
    let mut context = context();
    context.apply_rows([GridRow::new("4".parse().unwrap(), true)]);
    context.apply_columns([GridColumn::new("C".parse().unwrap(), true)]);

    // Row 3 uses 24px, hidden row 4 none, row 5 the rest: lands on row 6.
    let start = viewport("A1", Some(("C3", SelectionAnchor::None)));
    let command = format!("extend-down-pixel {}", 2 * ROW_HEIGHT - 1);
    let result = apply(&start, &command, &context);
    assert_eq!(selection_of(&result), ("C3:C6".to_string(), SelectionAnchor::TopLeft));
    assert_eq!(result.home(), start.home());

    // Column B's 80px are used up, hidden C is stepped over.
    let start = viewport("A1", Some(("B", SelectionAnchor::None)));
    let result = apply(&start, "extend-right-pixel 80", &context);
    assert_eq!(selection_of(&result), ("B:D".to_string(), SelectionAnchor::Left));
}

#[test]
fn selecting_far_cell_rebases_home() {
    let start = viewport("A1", None);
    let result = apply(&start, "select cell Z100", &context());
    let rectangle = result.rectangle();
    assert_eq!((rectangle.width, rectangle.height), (1280, 720));

    // The target is now the last fully visible cell.
    let visible = rectangle.visible_cells(&context());
    assert_eq!(visible.end().to_string(), "Z100");
    assert!(visible.contains("Z100".parse().unwrap()));
}

#[test]
fn home_keeps_its_reference_kind() {
    let home = "$A$1".parse().unwrap();
    let start = Viewport::new(ViewportRectangle::new(home, 1280, 720), None);
    let result = apply(&start, "select column $AZ", &context());
    assert_eq!(result.home().column().reference_kind(), ReferenceKind::Absolute);
    assert!(result.home().column().value() > ColumnReference::FIRST.value());
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

fn labelled_context() -> BasicNavigationContext {
    let mut labels = LabelStore::new();
    labels
        .set(LabelMapping::new("Block".parse().unwrap(), "B2:C3".parse::<Selection>().unwrap()))
        .unwrap();
    labels
        .set(LabelMapping::new("Alias".parse().unwrap(), "Block".parse::<Selection>().unwrap()))
        .unwrap();
    context().with_labels(labels)
}

#[test]
fn label_resolution_is_one_hop() {
    let context = labelled_context();
    let alias = "Alias".parse().unwrap();
    assert_eq!(
        context.labels().resolve_label(&alias),
        Some("Block".parse::<Selection>().unwrap())
    );
    assert_eq!(context.labels().resolve_label(&"Nothing".parse().unwrap()), None);
}

#[test]
fn navigation_chases_labels() {
    let context = labelled_context();
    let start = viewport("A1", Some(("Alias", SelectionAnchor::TopLeft)));
    let result = apply(&start, "extend-right", &context);
    assert_eq!(selection_of(&result), ("B2:D3".to_string(), SelectionAnchor::TopLeft));
}

#[test]
fn unknown_label_is_noop() {
    let start = viewport("A1", Some(("Nowhere", SelectionAnchor::None)));
    let result = apply(&start, "down,extend-right", &labelled_context());
    assert_eq!(result, start);

    let selected = apply(&start, "select row 3", &labelled_context());
    assert_eq!(selection_of(&selected).0, "3");
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

#[test]
fn navigation_list_round_trip() {
    let list: NavigationList = "left,extend-right,down-pixel 42".parse().unwrap();
    let canonical = list.to_string();
    assert_eq!(canonical, "left-column,extend-right-column,down-pixel 42");
    assert_eq!(canonical.parse::<NavigationList>().unwrap(), list);
}

#[test]
fn unknown_command_is_named() {
    let err = "left,wiggle 3".parse::<NavigationList>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown navigation \"wiggle 3\"");
}
