//! What the navigation engine needs to know about the grid: which columns and
//! rows are hidden, how wide and tall they are, and what labels mean.

use rustc_hash::{FxHashMap, FxHashSet};

use gridnav_config::NavigationSettings;
use gridnav_core::{
    ColumnOrRowReference, ColumnReference, GridColumn, GridRow, LabelName, RowReference, Selection,
};

use crate::label::{LabelNameResolver, LabelStore, DEFAULT_MAX_LABEL_HOPS};

pub trait NavigationContext {
    fn is_column_hidden(&self, column: ColumnReference) -> bool;

    fn is_row_hidden(&self, row: RowReference) -> bool;

    /// Width in pixels.
    fn column_width(&self, column: ColumnReference) -> u32;

    /// Height in pixels.
    fn row_height(&self, row: RowReference) -> u32;

    /// One hop of label lookup. Contexts without labels resolve nothing.
    fn resolve_label(&self, _label: &LabelName) -> Option<Selection> {
        None
    }

    fn max_label_hops(&self) -> usize {
        DEFAULT_MAX_LABEL_HOPS
    }

    /// Follow labels until a non-label selection is reached. `None` when a
    /// label is unknown or the chain is longer than [`max_label_hops`].
    ///
    /// [`max_label_hops`]: NavigationContext::max_label_hops
    fn resolve_selection(&self, selection: &Selection) -> Option<Selection> {
        let mut current = selection.clone();
        for _ in 0..self.max_label_hops() {
            match current {
                Selection::Label(label) => current = self.resolve_label(&label)?,
                resolved => return Some(resolved),
            }
        }
        if current.is_label() {
            log::warn!(
                "Label chain from {} exceeds {} hops",
                selection,
                self.max_label_hops()
            );
            return None;
        }
        Some(current)
    }
}

/// A column or row as seen through a [`NavigationContext`].
pub trait GridLine: ColumnOrRowReference {
    fn is_hidden_in<C: NavigationContext + ?Sized>(self, context: &C) -> bool;

    fn extent_in<C: NavigationContext + ?Sized>(self, context: &C) -> u32;

    /// Pixels the line occupies on screen; hidden lines take none.
    fn visible_extent_in<C: NavigationContext + ?Sized>(self, context: &C) -> u32 {
        if self.is_hidden_in(context) {
            0
        } else {
            self.extent_in(context)
        }
    }

    /// The nearest visible line `delta` steps away in one direction
    /// (`delta` is `1` or `-1`), or `None` when only hidden lines or the grid
    /// edge remain.
    fn next_visible<C: NavigationContext + ?Sized>(self, delta: i64, context: &C) -> Option<Self> {
        let mut current = self;
        loop {
            let next = current.add_saturated(delta);
            if next.eq_ignoring_kind(&current) {
                return None;
            }
            if !next.is_hidden_in(context) {
                return Some(next);
            }
            current = next;
        }
    }
}

impl GridLine for ColumnReference {
    fn is_hidden_in<C: NavigationContext + ?Sized>(self, context: &C) -> bool {
        context.is_column_hidden(self)
    }

    fn extent_in<C: NavigationContext + ?Sized>(self, context: &C) -> u32 {
        context.column_width(self)
    }
}

impl GridLine for RowReference {
    fn is_hidden_in<C: NavigationContext + ?Sized>(self, context: &C) -> bool {
        context.is_row_hidden(self)
    }

    fn extent_in<C: NavigationContext + ?Sized>(self, context: &C) -> u32 {
        context.row_height(self)
    }
}

/// In-memory context: default extents with per-line overrides, hidden sets
/// and an optional label store.
#[derive(Debug, Clone)]
pub struct BasicNavigationContext {
    default_column_width: u32,
    default_row_height: u32,
    column_widths: FxHashMap<u32, u32>,
    row_heights: FxHashMap<u32, u32>,
    hidden_columns: FxHashSet<u32>,
    hidden_rows: FxHashSet<u32>,
    labels: LabelStore,
    max_label_hops: usize,
}

impl Default for BasicNavigationContext {
    fn default() -> Self {
        Self::from_settings(&NavigationSettings::default())
    }
}

impl BasicNavigationContext {
    pub fn new(default_column_width: u32, default_row_height: u32) -> Self {
        Self {
            default_column_width,
            default_row_height,
            column_widths: FxHashMap::default(),
            row_heights: FxHashMap::default(),
            hidden_columns: FxHashSet::default(),
            hidden_rows: FxHashSet::default(),
            labels: LabelStore::new(),
            max_label_hops: DEFAULT_MAX_LABEL_HOPS,
        }
    }

    pub fn from_settings(settings: &NavigationSettings) -> Self {
        let mut context = Self::new(settings.default_column_width, settings.row_height);
        context.max_label_hops = settings.max_label_hops;
        context
    }

    pub fn with_labels(mut self, labels: LabelStore) -> Self {
        self.labels = labels;
        self
    }

    pub fn labels(&self) -> &LabelStore {
        &self.labels
    }

    pub fn labels_mut(&mut self) -> &mut LabelStore {
        &mut self.labels
    }

    pub fn set_column_hidden(&mut self, column: ColumnReference, hidden: bool) {
        if hidden {
            self.hidden_columns.insert(column.value());
        } else {
            self.hidden_columns.remove(&column.value());
        }
    }

    pub fn set_row_hidden(&mut self, row: RowReference, hidden: bool) {
        if hidden {
            self.hidden_rows.insert(row.value());
        } else {
            self.hidden_rows.remove(&row.value());
        }
    }

    /// Apply the hidden state of each column entity.
    pub fn apply_columns(&mut self, columns: impl IntoIterator<Item = GridColumn>) {
        for column in columns {
            self.set_column_hidden(column.reference, column.hidden);
        }
    }

    /// Apply the hidden state of each row entity.
    pub fn apply_rows(&mut self, rows: impl IntoIterator<Item = GridRow>) {
        for row in rows {
            self.set_row_hidden(row.reference, row.hidden);
        }
    }

    pub fn set_column_width(&mut self, column: ColumnReference, width: u32) {
        self.column_widths.insert(column.value(), width);
    }

    pub fn set_row_height(&mut self, row: RowReference, height: u32) {
        self.row_heights.insert(row.value(), height);
    }

    pub fn set_max_label_hops(&mut self, hops: usize) {
        self.max_label_hops = hops;
    }
}

impl NavigationContext for BasicNavigationContext {
    fn is_column_hidden(&self, column: ColumnReference) -> bool {
        self.hidden_columns.contains(&column.value())
    }

    fn is_row_hidden(&self, row: RowReference) -> bool {
        self.hidden_rows.contains(&row.value())
    }

    fn column_width(&self, column: ColumnReference) -> u32 {
        self.column_widths
            .get(&column.value())
            .copied()
            .unwrap_or(self.default_column_width)
    }

    fn row_height(&self, row: RowReference) -> u32 {
        self.row_heights
            .get(&row.value())
            .copied()
            .unwrap_or(self.default_row_height)
    }

    fn resolve_label(&self, label: &LabelName) -> Option<Selection> {
        self.labels.resolve_label(label)
    }

    fn max_label_hops(&self) -> usize {
        self.max_label_hops
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::LabelMapping;

    fn column(text: &str) -> ColumnReference {
        text.parse().unwrap()
    }

    fn row(text: &str) -> RowReference {
        text.parse().unwrap()
    }

    #[test]
    fn test_extents_and_overrides() {
        let mut context = BasicNavigationContext::new(80, 24);
        context.set_column_width(column("B"), 120);
        assert_eq!(context.column_width(column("A")), 80);
        assert_eq!(context.column_width(column("$B")), 120);
        assert_eq!(context.row_height(row("7")), 24);
    }

    #[test]
    fn test_hidden_lines_have_no_visible_extent() {
        let mut context = BasicNavigationContext::default();
        context.apply_rows([GridRow::new(row("4"), true), GridRow::new(row("5"), false)]);
        assert!(context.is_row_hidden(row("4")));
        assert_eq!(row("4").visible_extent_in(&context), 0);
        assert_eq!(row("5").visible_extent_in(&context), 24);

        context.apply_rows([GridRow::new(row("4"), false)]);
        assert!(!context.is_row_hidden(row("4")));
    }

    #[test]
    fn test_next_visible_skips_hidden() {
        let mut context = BasicNavigationContext::default();
        context.apply_columns([
            GridColumn::new(column("D"), true),
            GridColumn::new(column("E"), true),
        ]);
        assert_eq!(column("C").next_visible(1, &context), Some(column("F")));
        assert_eq!(column("F").next_visible(-1, &context), Some(column("C")));
        assert_eq!(column("A").next_visible(-1, &context), None);
        assert_eq!(ColumnReference::LAST.next_visible(1, &context), None);
    }

    #[test]
    fn test_next_visible_all_hidden_to_edge() {
        let mut context = BasicNavigationContext::default();
        context.apply_columns([GridColumn::new(column("A"), true), GridColumn::new(column("B"), true)]);
        assert_eq!(column("C").next_visible(-1, &context), None);
    }

    #[test]
    fn test_from_settings() {
        let settings = NavigationSettings {
            default_column_width: 64,
            row_height: 20,
            max_label_hops: 3,
            ..NavigationSettings::default()
        };
        let context = BasicNavigationContext::from_settings(&settings);
        assert_eq!(context.column_width(column("A")), 64);
        assert_eq!(context.row_height(row("1")), 20);
        assert_eq!(context.max_label_hops(), 3);
    }

    #[test]
    fn test_resolve_selection_chases_labels() {
        let mut labels = LabelStore::new();
        labels
            .set(LabelMapping::new("Inner".parse().unwrap(), "B2:C3".parse::<Selection>().unwrap()))
            .unwrap();
        labels
            .set(LabelMapping::new("Outer".parse().unwrap(), "Inner".parse::<Selection>().unwrap()))
            .unwrap();
        let context = BasicNavigationContext::default().with_labels(labels);

        let resolved = context.resolve_selection(&"outer".parse().unwrap()).unwrap();
        assert_eq!(resolved.to_string(), "B2:C3");
        assert_eq!(context.resolve_selection(&"Missing".parse().unwrap()), None);
        assert_eq!(
            context.resolve_selection(&"C4".parse().unwrap()),
            Some("C4".parse().unwrap())
        );
    }

    #[test]
    fn test_resolve_selection_hop_limit() {
        let mut labels = LabelStore::new();
        labels
            .set(LabelMapping::new("Ping".parse().unwrap(), "Pong".parse::<Selection>().unwrap()))
            .unwrap();
        labels
            .set(LabelMapping::new("Pong".parse().unwrap(), "Ping".parse::<Selection>().unwrap()))
            .unwrap();
        let mut context = BasicNavigationContext::default().with_labels(labels);
        context.set_max_label_hops(4);
        assert_eq!(context.resolve_selection(&"Ping".parse().unwrap()), None);
    }
}
