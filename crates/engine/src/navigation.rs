//! Navigation commands and the viewport update algorithm.
//!
//! A [`Navigation`] is one user gesture: an arrow key, a scroll or drag by a
//! number of pixels, or a click/shift-click on a cell, column or row. Applying
//! it to a [`Viewport`] yields the next viewport. Nothing here fails at
//! runtime: stepping saturates at the grid edges and skips hidden lines, and
//! gestures that do not fit the current selection leave the viewport as is.
//!
//! Command text:
//!
//! ```text
//! left-column  right-column  up-row  down-row          (aliases: left right up down)
//! extend-left-column ... extend-down-row               (aliases: extend-left ...)
//! left-pixel 40  extend-down-pixel 120
//! select cell A1  select column B  select row 456
//! extend-cell A1  extend-column B  extend-row 456
//! ```
//!
//! Lists are comma separated: `left,extend-right,down-pixel 42`.

use std::fmt;
use std::str::FromStr;

use gridnav_core::{
    AnchoredSelection, CellRange, CellReference, ColumnOrRowReference, ColumnRange,
    ColumnReference, Horizontal, RowRange, RowReference, Selection, SelectionAnchor, Vertical,
};

use crate::context::{GridLine, NavigationContext};
use crate::error::NavigationError;
use crate::viewport::{last_fully_visible, Viewport, ViewportRectangle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    pub fn name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// `-1` towards `A`/`1`, `1` away from it.
    pub fn delta(self) -> i64 {
        match self {
            Direction::Left | Direction::Up => -1,
            Direction::Right | Direction::Down => 1,
        }
    }

    /// The line a single step crosses.
    fn unit(self) -> &'static str {
        if self.is_horizontal() {
            "column"
        } else {
            "row"
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// Replace the selection with the cell, column or row one step away.
    Move(Direction),
    /// Move the edge opposite the anchor one step.
    Extend(Direction),
    /// Scroll the home by a number of pixels; the selection stays.
    MovePixel(Direction, u32),
    /// Move the edge opposite the anchor across a number of pixels.
    ExtendPixel(Direction, u32),
    SelectCell(CellReference),
    SelectColumn(ColumnReference),
    SelectRow(RowReference),
    ExtendCell(CellReference),
    ExtendColumn(ColumnReference),
    ExtendRow(RowReference),
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Navigation::Move(d) => write!(f, "{}-{}", d, d.unit()),
            Navigation::Extend(d) => write!(f, "extend-{}-{}", d, d.unit()),
            Navigation::MovePixel(d, pixels) => write!(f, "{}-pixel {}", d, pixels),
            Navigation::ExtendPixel(d, pixels) => write!(f, "extend-{}-pixel {}", d, pixels),
            Navigation::SelectCell(cell) => write!(f, "select cell {}", cell),
            Navigation::SelectColumn(column) => write!(f, "select column {}", column),
            Navigation::SelectRow(row) => write!(f, "select row {}", row),
            Navigation::ExtendCell(cell) => write!(f, "extend-cell {}", cell),
            Navigation::ExtendColumn(column) => write!(f, "extend-column {}", column),
            Navigation::ExtendRow(row) => write!(f, "extend-row {}", row),
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

enum StepUnit {
    Line,
    Pixel,
}

/// `[extend-]<direction>[-column|-row|-pixel]`
fn parse_step(verb: &str) -> Option<(bool, Direction, StepUnit)> {
    let (extend, rest) = match verb.strip_prefix("extend-") {
        Some(rest) => (true, rest),
        None => (false, verb),
    };
    let (direction, suffix) = match rest.split_once('-') {
        Some((direction, suffix)) => (direction, Some(suffix)),
        None => (rest, None),
    };
    let direction = Direction::ALL.into_iter().find(|d| d.name() == direction)?;
    let unit = match suffix {
        None => StepUnit::Line,
        Some("pixel") => StepUnit::Pixel,
        Some(line) if line == direction.unit() => StepUnit::Line,
        Some(_) => return None,
    };
    Some((extend, direction, unit))
}

fn unknown(token: &str) -> NavigationError {
    NavigationError::UnknownToken {
        token: token.to_string(),
    }
}

fn missing(token: &str, what: &'static str) -> NavigationError {
    NavigationError::MissingValue {
        command: token.to_string(),
        what,
    }
}

fn parse_pixels(token: &str, value: &str) -> Result<u32, NavigationError> {
    value.parse().map_err(|_| NavigationError::InvalidValue {
        command: token.to_string(),
        what: "pixel count",
        value: value.to_string(),
    })
}

fn parse_select(token: &str, kind: &str, address: &str) -> Result<Navigation, NavigationError> {
    Ok(match kind {
        "cell" => Navigation::SelectCell(address.parse()?),
        "column" => Navigation::SelectColumn(address.parse()?),
        "row" => Navigation::SelectRow(address.parse()?),
        _ => return Err(unknown(token)),
    })
}

fn parse_extend_to(token: &str, verb: &str, address: &str) -> Result<Navigation, NavigationError> {
    Ok(match verb {
        "extend-cell" => Navigation::ExtendCell(address.parse()?),
        "extend-column" => Navigation::ExtendColumn(address.parse()?),
        "extend-row" => Navigation::ExtendRow(address.parse()?),
        _ => return Err(unknown(token)),
    })
}

impl FromStr for Navigation {
    type Err = NavigationError;

    fn from_str(text: &str) -> Result<Self, NavigationError> {
        let token = text.trim();
        let words: Vec<String> = token.split_whitespace().map(|w| w.to_ascii_lowercase()).collect();
        let raw: Vec<&str> = token.split_whitespace().collect();

        match words.as_slice() {
            [select] if select == "select" => Err(missing(token, "selection kind")),
            [select, kind] if select == "select" => match kind.as_str() {
                "cell" | "column" | "row" => Err(missing(token, "address")),
                _ => Err(unknown(token)),
            },
            [select, kind, _] if select == "select" => parse_select(token, kind, raw[2]),
            [verb] => match parse_step(verb) {
                Some((false, direction, StepUnit::Line)) => Ok(Navigation::Move(direction)),
                Some((true, direction, StepUnit::Line)) => Ok(Navigation::Extend(direction)),
                Some((_, _, StepUnit::Pixel)) => Err(missing(token, "pixel count")),
                None if matches!(verb.as_str(), "extend-cell" | "extend-column" | "extend-row") => {
                    Err(missing(token, "address"))
                }
                None => Err(unknown(token)),
            },
            [verb, _] => match parse_step(verb) {
                Some((extend, direction, StepUnit::Pixel)) => {
                    let pixels = parse_pixels(token, raw[1])?;
                    Ok(if extend {
                        Navigation::ExtendPixel(direction, pixels)
                    } else {
                        Navigation::MovePixel(direction, pixels)
                    })
                }
                Some(_) => Err(unknown(token)),
                None => parse_extend_to(token, verb, raw[1]),
            },
            _ => Err(unknown(token)),
        }
    }
}

// ============================================================================
// Update algorithm
// ============================================================================

/// The selection and anchor a command produces, plus the cell to bring into
/// view (per axis).
struct Update {
    selection: Selection,
    anchor: SelectionAnchor,
    column: Option<ColumnReference>,
    row: Option<RowReference>,
}

impl Update {
    fn cell(cell: CellReference) -> Self {
        Self {
            selection: Selection::Cell(cell),
            anchor: SelectionAnchor::None,
            column: Some(cell.column()),
            row: Some(cell.row()),
        }
    }

    fn column(column: ColumnReference) -> Self {
        Self {
            selection: Selection::Column(column),
            anchor: SelectionAnchor::None,
            column: Some(column),
            row: None,
        }
    }

    fn row(row: RowReference) -> Self {
        Self {
            selection: Selection::Row(row),
            anchor: SelectionAnchor::None,
            column: None,
            row: Some(row),
        }
    }

    fn cell_range(fixed: CellReference, moving: CellReference, anchor: SelectionAnchor) -> Self {
        Self {
            selection: Selection::CellRange(CellRange::new(fixed, moving)),
            anchor,
            column: Some(moving.column()),
            row: Some(moving.row()),
        }
    }

    fn column_range(fixed: ColumnReference, moving: ColumnReference, anchor: SelectionAnchor) -> Self {
        Self {
            selection: Selection::ColumnRange(ColumnRange::new(fixed, moving)),
            anchor,
            column: Some(moving),
            row: None,
        }
    }

    fn row_range(fixed: RowReference, moving: RowReference, anchor: SelectionAnchor) -> Self {
        Self {
            selection: Selection::RowRange(RowRange::new(fixed, moving)),
            anchor,
            column: None,
            row: Some(moving),
        }
    }

    fn into_viewport<C: NavigationContext + ?Sized>(self, viewport: &Viewport, context: &C) -> Viewport {
        let anchored = match AnchoredSelection::with(self.selection.clone(), self.anchor) {
            Ok(anchored) => anchored,
            Err(e) => {
                log::warn!("{}, using the default anchor", e);
                AnchoredSelection::with_default_anchor(self.selection)
            }
        };
        let rectangle = rebase(viewport.rectangle(), self.column, self.row, context);
        Viewport::new(rectangle, Some(anchored))
    }
}

/// How far an extend gesture moves the edge.
#[derive(Clone, Copy)]
enum Amount {
    Step,
    Pixels(u32),
}

impl Navigation {
    /// Apply this command to `viewport`.
    pub fn apply<C: NavigationContext + ?Sized>(&self, viewport: &Viewport, context: &C) -> Viewport {
        log::trace!("Applying {} to {}", self, viewport);

        let update = match *self {
            Navigation::MovePixel(direction, pixels) => {
                return scroll(viewport, direction, pixels, context);
            }
            Navigation::SelectCell(cell) => Some(Update::cell(cell)),
            Navigation::SelectColumn(column) => Some(Update::column(column)),
            Navigation::SelectRow(row) => Some(Update::row(row)),
            _ => {
                let current = match viewport.anchored_selection() {
                    None => None,
                    Some(anchored) => match context.resolve_selection(anchored.selection()) {
                        Some(selection) => {
                            let anchor = fit_anchor(anchored.anchor(), &selection);
                            Some((selection, anchor))
                        }
                        None => {
                            log::debug!("Cannot resolve {}, ignoring {}", anchored.selection(), self);
                            return viewport.clone();
                        }
                    },
                };
                self.update(current, viewport.home(), context)
            }
        };

        match update {
            Some(update) => update.into_viewport(viewport, context),
            None => viewport.clone(),
        }
    }

    /// Commands that depend on the current selection. `None` means the
    /// command does not apply and the viewport stays as it is.
    fn update<C: NavigationContext + ?Sized>(
        &self,
        current: Option<(Selection, SelectionAnchor)>,
        home: CellReference,
        context: &C,
    ) -> Option<Update> {
        let promoted = || (Selection::Cell(home), SelectionAnchor::None);

        match *self {
            Navigation::Move(direction) => match current {
                None => Some(Update::cell(home)),
                Some((selection, anchor)) => move_selection(&selection, anchor, direction, context),
            },
            Navigation::Extend(direction) => {
                let (selection, anchor) = current.unwrap_or_else(promoted);
                extend_selection(&selection, anchor, direction, Amount::Step, context)
            }
            Navigation::ExtendPixel(direction, pixels) => {
                let (selection, anchor) = current.unwrap_or_else(promoted);
                extend_selection(&selection, anchor, direction, Amount::Pixels(pixels), context)
            }
            Navigation::ExtendCell(cell) => {
                let (selection, anchor) = current.unwrap_or_else(promoted);
                Some(extend_to_cell(&selection, anchor, cell))
            }
            Navigation::ExtendColumn(column) => Some(match current {
                Some((Selection::Column(c), _)) => extend_to_column(ColumnRange::single(c), SelectionAnchor::None, column),
                Some((Selection::ColumnRange(columns), anchor)) => extend_to_column(columns, anchor, column),
                _ => Update::column(column),
            }),
            Navigation::ExtendRow(row) => Some(match current {
                Some((Selection::Row(r), _)) => extend_to_row(RowRange::single(r), SelectionAnchor::None, row),
                Some((Selection::RowRange(rows), anchor)) => extend_to_row(rows, anchor, row),
                _ => Update::row(row),
            }),
            Navigation::MovePixel(..)
            | Navigation::SelectCell(_)
            | Navigation::SelectColumn(_)
            | Navigation::SelectRow(_) => None,
        }
    }
}

/// Fit an anchor carried over from a label onto the selection it resolved to.
fn fit_anchor(anchor: SelectionAnchor, selection: &Selection) -> SelectionAnchor {
    let kind = selection.kind();
    if anchor.is_compatible(kind) {
        return anchor;
    }
    let fitted = match selection {
        Selection::ColumnRange(_) => SelectionAnchor::from_parts(anchor.horizontal(), None),
        Selection::RowRange(_) => SelectionAnchor::from_parts(None, anchor.vertical()),
        _ => SelectionAnchor::None,
    };
    if fitted.is_compatible(kind) {
        fitted
    } else {
        selection.default_anchor()
    }
}

fn advance<L, C>(line: L, direction: Direction, amount: Amount, context: &C) -> L
where
    L: GridLine,
    C: NavigationContext + ?Sized,
{
    match amount {
        Amount::Step => line.next_visible(direction.delta(), context).unwrap_or(line),
        Amount::Pixels(pixels) => pixel_walk(line, direction.delta(), pixels, context),
    }
}

/// Walk `pixels` from `start`. Each visible line passed uses up its extent and
/// a partially covered line counts as passed.
fn pixel_walk<L, C>(start: L, delta: i64, pixels: u32, context: &C) -> L
where
    L: GridLine,
    C: NavigationContext + ?Sized,
{
    let mut current = start;
    let mut remaining = u64::from(pixels);

    if delta > 0 {
        while remaining > 0 {
            remaining = remaining.saturating_sub(u64::from(current.visible_extent_in(context)));
            match current.next_visible(delta, context) {
                Some(next) => current = next,
                None => break,
            }
        }
    } else {
        while remaining > 0 {
            match current.next_visible(delta, context) {
                Some(previous) => {
                    remaining = remaining.saturating_sub(u64::from(previous.extent_in(context)));
                    current = previous;
                }
                None => break,
            }
        }
    }
    current
}

fn step_cell<C: NavigationContext + ?Sized>(cell: CellReference, direction: Direction, amount: Amount, context: &C) -> CellReference {
    if direction.is_horizontal() {
        cell.set_column(advance(cell.column(), direction, amount, context))
    } else {
        cell.set_row(advance(cell.row(), direction, amount, context))
    }
}

fn move_selection<C: NavigationContext + ?Sized>(
    selection: &Selection,
    anchor: SelectionAnchor,
    direction: Direction,
    context: &C,
) -> Option<Update> {
    match selection {
        Selection::Cell(cell) => Some(Update::cell(step_cell(*cell, direction, Amount::Step, context))),
        Selection::CellRange(range) => {
            let fixed = anchor.fixed_cell(range);
            Some(Update::cell(step_cell(fixed, direction, Amount::Step, context)))
        }
        Selection::Column(_) | Selection::ColumnRange(_) if !direction.is_horizontal() => None,
        Selection::Column(column) => Some(Update::column(advance(*column, direction, Amount::Step, context))),
        Selection::ColumnRange(columns) => {
            let fixed = anchor.fixed_column(columns);
            Some(Update::column(advance(fixed, direction, Amount::Step, context)))
        }
        Selection::Row(_) | Selection::RowRange(_) if direction.is_horizontal() => None,
        Selection::Row(row) => Some(Update::row(advance(*row, direction, Amount::Step, context))),
        Selection::RowRange(rows) => {
            let fixed = anchor.fixed_row(rows);
            Some(Update::row(advance(fixed, direction, Amount::Step, context)))
        }
        Selection::Label(_) => None,
    }
}

/// The side that stays fixed once the moving column lands at `moving`.
fn horizontal_after(fixed: ColumnReference, moving: ColumnReference, previous: Option<Horizontal>) -> Horizontal {
    match moving.cmp_ignoring_kind(&fixed) {
        std::cmp::Ordering::Greater => Horizontal::Left,
        std::cmp::Ordering::Less => Horizontal::Right,
        std::cmp::Ordering::Equal => previous.unwrap_or(Horizontal::Left),
    }
}

fn vertical_after(fixed: RowReference, moving: RowReference, previous: Option<Vertical>) -> Vertical {
    match moving.cmp_ignoring_kind(&fixed) {
        std::cmp::Ordering::Greater => Vertical::Top,
        std::cmp::Ordering::Less => Vertical::Bottom,
        std::cmp::Ordering::Equal => previous.unwrap_or(Vertical::Top),
    }
}

fn extend_selection<C: NavigationContext + ?Sized>(
    selection: &Selection,
    anchor: SelectionAnchor,
    direction: Direction,
    amount: Amount,
    context: &C,
) -> Option<Update> {
    match selection {
        Selection::Cell(cell) => Some(extend_cells(CellRange::with_single(*cell), anchor, direction, amount, context)),
        Selection::CellRange(range) => Some(extend_cells(*range, anchor, direction, amount, context)),
        Selection::Column(_) | Selection::ColumnRange(_) if !direction.is_horizontal() => None,
        Selection::Column(column) => Some(extend_columns(ColumnRange::single(*column), anchor, direction, amount, context)),
        Selection::ColumnRange(columns) => Some(extend_columns(*columns, anchor, direction, amount, context)),
        Selection::Row(_) | Selection::RowRange(_) if direction.is_horizontal() => None,
        Selection::Row(row) => Some(extend_rows(RowRange::single(*row), anchor, direction, amount, context)),
        Selection::RowRange(rows) => Some(extend_rows(*rows, anchor, direction, amount, context)),
        Selection::Label(_) => None,
    }
}

fn extend_cells<C: NavigationContext + ?Sized>(
    range: CellRange,
    anchor: SelectionAnchor,
    direction: Direction,
    amount: Amount,
    context: &C,
) -> Update {
    let moving = step_cell(anchor.moving_cell(&range), direction, amount, context);
    extend_to_cell(&Selection::CellRange(range), anchor, moving)
}

fn extend_columns<C: NavigationContext + ?Sized>(
    columns: ColumnRange,
    anchor: SelectionAnchor,
    direction: Direction,
    amount: Amount,
    context: &C,
) -> Update {
    let moving = advance(anchor.moving_column(&columns), direction, amount, context);
    extend_to_column(columns, anchor, moving)
}

fn extend_rows<C: NavigationContext + ?Sized>(
    rows: RowRange,
    anchor: SelectionAnchor,
    direction: Direction,
    amount: Amount,
    context: &C,
) -> Update {
    let moving = advance(anchor.moving_row(&rows), direction, amount, context);
    extend_to_row(rows, anchor, moving)
}

/// Span from the fixed corner of a cell selection to `target`. Column and row
/// selections are replaced by `target` alone.
fn extend_to_cell(selection: &Selection, anchor: SelectionAnchor, target: CellReference) -> Update {
    let range = match selection {
        Selection::Cell(cell) => CellRange::with_single(*cell),
        Selection::CellRange(range) => *range,
        _ => return Update::cell(target),
    };
    let fixed = anchor.fixed_cell(&range);
    let horizontal = horizontal_after(fixed.column(), target.column(), anchor.horizontal());
    let vertical = vertical_after(fixed.row(), target.row(), anchor.vertical());
    let anchor = SelectionAnchor::from_parts(Some(horizontal), Some(vertical));
    Update::cell_range(fixed, target, anchor)
}

fn extend_to_column(columns: ColumnRange, anchor: SelectionAnchor, target: ColumnReference) -> Update {
    let fixed = anchor.fixed_column(&columns);
    let horizontal = horizontal_after(fixed, target, anchor.horizontal());
    Update::column_range(fixed, target, SelectionAnchor::from_parts(Some(horizontal), None))
}

fn extend_to_row(rows: RowRange, anchor: SelectionAnchor, target: RowReference) -> Update {
    let fixed = anchor.fixed_row(&rows);
    let vertical = vertical_after(fixed, target, anchor.vertical());
    Update::row_range(fixed, target, SelectionAnchor::from_parts(None, Some(vertical)))
}

/// Move the home by `pixels`; the selection is left alone.
fn scroll<C: NavigationContext + ?Sized>(
    viewport: &Viewport,
    direction: Direction,
    pixels: u32,
    context: &C,
) -> Viewport {
    let home = viewport.home();
    let moved = step_cell(home, direction, Amount::Pixels(pixels), context);
    if moved == home {
        return viewport.clone();
    }
    viewport.clone().set_home(moved)
}

/// Pan the rectangle so the target column and row are fully visible.
fn rebase<C: NavigationContext + ?Sized>(
    rectangle: ViewportRectangle,
    column: Option<ColumnReference>,
    row: Option<RowReference>,
    context: &C,
) -> ViewportRectangle {
    let mut home = rectangle.home;
    if let Some(column) = column {
        home = home.set_column(rebase_line(home.column(), column, rectangle.width, context));
    }
    if let Some(row) = row {
        home = home.set_row(rebase_line(home.row(), row, rectangle.height, context));
    }
    if home == rectangle.home {
        return rectangle;
    }
    log::debug!("Re-basing home {} -> {}", rectangle.home, home);
    rectangle.set_home(home)
}

/// The new first line so that `target` is fully visible within `span`
/// pixels, or `home` when it already is.
fn rebase_line<L, C>(home: L, target: L, span: u32, context: &C) -> L
where
    L: GridLine,
    C: NavigationContext + ?Sized,
{
    let kind = home.reference_kind();
    if target.cmp_ignoring_kind(&home) == std::cmp::Ordering::Less {
        return L::saturated(i64::from(target.value()), kind);
    }
    let last = last_fully_visible(home, span, context);
    if target.cmp_ignoring_kind(&last) != std::cmp::Ordering::Greater {
        return home;
    }

    let mut first = target;
    let mut used = u64::from(target.visible_extent_in(context));
    while let Some(previous) = first.next_visible(-1, context) {
        used += u64::from(previous.extent_in(context));
        if used > u64::from(span) {
            break;
        }
        first = previous;
    }
    L::saturated(i64::from(first.value()), kind)
}

// ============================================================================
// Lists
// ============================================================================

/// Commands applied left to right.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NavigationList {
    navigations: Vec<Navigation>,
}

impl NavigationList {
    pub const EMPTY: NavigationList = NavigationList {
        navigations: Vec::new(),
    };

    pub fn new(navigations: Vec<Navigation>) -> Self {
        Self { navigations }
    }

    /// Parse comma-separated commands. Empty or whitespace-only text is the
    /// empty list.
    pub fn parse(text: &str) -> Result<Self, NavigationError> {
        if text.trim().is_empty() {
            return Ok(Self::EMPTY);
        }
        text.split(',')
            .map(str::parse::<Navigation>)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Navigation> + '_ {
        self.navigations.iter()
    }

    pub fn len(&self) -> usize {
        self.navigations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.navigations.is_empty()
    }

    pub fn as_slice(&self) -> &[Navigation] {
        &self.navigations
    }

    /// Apply each command to the viewport produced by the one before.
    pub fn apply<C: NavigationContext + ?Sized>(&self, viewport: &Viewport, context: &C) -> Viewport {
        log::debug!("Applying {} navigation(s) to {}", self.len(), viewport);
        let result = self
            .navigations
            .iter()
            .fold(viewport.clone(), |current, navigation| navigation.apply(&current, context));
        log::debug!("Navigation result {}", result);
        result
    }
}

impl fmt::Display for NavigationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, navigation) in self.navigations.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            fmt::Display::fmt(navigation, f)?;
        }
        Ok(())
    }
}

impl FromStr for NavigationList {
    type Err = NavigationError;

    fn from_str(text: &str) -> Result<Self, NavigationError> {
        Self::parse(text)
    }
}

impl FromIterator<Navigation> for NavigationList {
    fn from_iter<I: IntoIterator<Item = Navigation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for NavigationList {
    type Item = Navigation;
    type IntoIter = std::vec::IntoIter<Navigation>;

    fn into_iter(self) -> Self::IntoIter {
        self.navigations.into_iter()
    }
}

impl serde::Serialize for NavigationList {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for NavigationList {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
