// Property-based tests for navigation text and the update algorithm.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use gridnav_core::{CellReference, ColumnOrRowReference, ColumnReference, GridColumn, GridRow, RowReference};
use gridnav_engine::*;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

/// Cells near the top-left corner so edges and hidden lines come into play.
fn arb_cell() -> impl Strategy<Value = CellReference> {
    (0u32..12, 0u32..40).prop_map(|(c, r)| CellReference::at(c, r).unwrap())
}

fn arb_navigation() -> impl Strategy<Value = Navigation> {
    prop_oneof![
        arb_direction().prop_map(Navigation::Move),
        arb_direction().prop_map(Navigation::Extend),
        (arb_direction(), 0u32..400).prop_map(|(d, p)| Navigation::MovePixel(d, p)),
        (arb_direction(), 0u32..400).prop_map(|(d, p)| Navigation::ExtendPixel(d, p)),
        arb_cell().prop_map(Navigation::SelectCell),
        arb_cell().prop_map(|c| Navigation::SelectColumn(c.column())),
        arb_cell().prop_map(|c| Navigation::SelectRow(c.row())),
        arb_cell().prop_map(Navigation::ExtendCell),
        arb_cell().prop_map(|c| Navigation::ExtendColumn(c.column())),
        arb_cell().prop_map(|c| Navigation::ExtendRow(c.row())),
    ]
}

fn arb_list() -> impl Strategy<Value = NavigationList> {
    prop::collection::vec(arb_navigation(), 0..12).prop_map(NavigationList::new)
}

fn hidden_context(columns: &[u32], rows: &[u32]) -> BasicNavigationContext {
    let mut context = BasicNavigationContext::new(60, 20);
    context.apply_columns(
        columns
            .iter()
            .map(|c| GridColumn::new(ColumnReference::relative(*c).unwrap(), true)),
    );
    context.apply_rows(
        rows.iter()
            .map(|r| GridRow::new(RowReference::relative(*r).unwrap(), true)),
    );
    context
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]
    #[test]
    fn list_text_round_trips(list in arb_list()) {
        let text = list.to_string();
        let back: NavigationList = text.parse().unwrap();
        prop_assert_eq!(back, list);
    }
}

proptest! {
    #![proptest_config(config_256())]
    #[test]
    fn anchors_fit_and_size_is_kept(
        list in arb_list(),
        hidden_columns in prop::collection::vec(1u32..12, 0..4),
        hidden_rows in prop::collection::vec(1u32..40, 0..6),
    ) {
        let context = hidden_context(&hidden_columns, &hidden_rows);
        let start = Viewport::new(ViewportRectangle::new(CellReference::A1, 600, 400), None);
        let result = list.apply(&start, &context);

        // Anchors always fit the selection kind.
        if let Some(anchored) = result.anchored_selection() {
            prop_assert!(anchored.anchor().is_compatible(anchored.selection().kind()));
        }

        // Rectangle size never changes.
        prop_assert_eq!(result.rectangle().width, 600);
        prop_assert_eq!(result.rectangle().height, 400);
    }
}

proptest! {
    #![proptest_config(config_256())]
    #[test]
    fn single_step_never_lands_on_hidden_line(
        start in arb_cell(),
        direction in arb_direction(),
        hidden_columns in prop::collection::vec(0u32..12, 0..4),
        hidden_rows in prop::collection::vec(0u32..40, 0..6),
    ) {
        let context = hidden_context(&hidden_columns, &hidden_rows);
        let viewport = Navigation::SelectCell(start).apply(
            &Viewport::new(ViewportRectangle::new(CellReference::A1, 600, 400), None),
            &context,
        );
        let moved = Navigation::Move(direction).apply(&viewport, &context);
        let cell = match moved.selection() {
            Some(gridnav_core::Selection::Cell(cell)) => *cell,
            other => return Err(TestCaseError::fail(format!("unexpected {:?}", other))),
        };

        if cell != start {
            if direction.is_horizontal() {
                prop_assert!(!hidden_columns.contains(&cell.column().value()));
                prop_assert_eq!(cell.row(), start.row());
            } else {
                prop_assert!(!hidden_rows.contains(&cell.row().value()));
                prop_assert_eq!(cell.column(), start.column());
            }
        }
    }
}
