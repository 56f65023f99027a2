//! The visible window onto the grid plus the current anchored selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use gridnav_config::NavigationSettings;
use gridnav_core::{AnchoredSelection, CellRange, CellReference, ColumnRange, RowRange, Selection};

use crate::context::{GridLine, NavigationContext};

/// A window of `width` x `height` pixels whose top-left cell is `home`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewportRectangle {
    pub home: CellReference,
    pub width: u32,
    pub height: u32,
}

impl ViewportRectangle {
    pub fn new(home: CellReference, width: u32, height: u32) -> Self {
        Self { home, width, height }
    }

    pub fn set_home(self, home: CellReference) -> Self {
        Self { home, ..self }
    }

    /// Columns that fit entirely inside the window. Always includes the
    /// home column even when it is wider than the window.
    pub fn visible_columns<C: NavigationContext + ?Sized>(&self, context: &C) -> ColumnRange {
        ColumnRange::new(
            self.home.column(),
            last_fully_visible(self.home.column(), self.width, context),
        )
    }

    /// Rows that fit entirely inside the window.
    pub fn visible_rows<C: NavigationContext + ?Sized>(&self, context: &C) -> RowRange {
        RowRange::new(
            self.home.row(),
            last_fully_visible(self.home.row(), self.height, context),
        )
    }

    pub fn visible_cells<C: NavigationContext + ?Sized>(&self, context: &C) -> CellRange {
        CellRange::from_ranges(self.visible_columns(context), self.visible_rows(context))
    }
}

/// The last line, starting at `home`, whose far edge is still within `span`
/// pixels.
pub(crate) fn last_fully_visible<L, C>(home: L, span: u32, context: &C) -> L
where
    L: GridLine,
    C: NavigationContext + ?Sized,
{
    let mut last = home;
    let mut used = u64::from(home.visible_extent_in(context));
    while let Some(next) = last.next_visible(1, context) {
        used += u64::from(next.extent_in(context));
        if used > u64::from(span) {
            break;
        }
        last = next;
    }
    last
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    rectangle: ViewportRectangle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    anchored_selection: Option<AnchoredSelection>,
}

impl Viewport {
    pub fn new(rectangle: ViewportRectangle, anchored_selection: Option<AnchoredSelection>) -> Self {
        Self {
            rectangle,
            anchored_selection,
        }
    }

    /// A viewport at `A1` sized from the settings, with nothing selected.
    pub fn from_settings(settings: &NavigationSettings) -> Self {
        Self::new(
            ViewportRectangle::new(
                CellReference::A1,
                settings.viewport_width,
                settings.viewport_height,
            ),
            None,
        )
    }

    pub fn rectangle(&self) -> ViewportRectangle {
        self.rectangle
    }

    pub fn home(&self) -> CellReference {
        self.rectangle.home
    }

    pub fn anchored_selection(&self) -> Option<&AnchoredSelection> {
        self.anchored_selection.as_ref()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.anchored_selection.as_ref().map(|a| a.selection())
    }

    pub fn set_rectangle(self, rectangle: ViewportRectangle) -> Self {
        Self { rectangle, ..self }
    }

    pub fn set_home(self, home: CellReference) -> Self {
        let rectangle = self.rectangle.set_home(home);
        self.set_rectangle(rectangle)
    }

    pub fn set_anchored_selection(self, anchored_selection: Option<AnchoredSelection>) -> Self {
        Self {
            anchored_selection,
            ..self
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "home {} {}x{}",
            self.rectangle.home, self.rectangle.width, self.rectangle.height
        )?;
        if let Some(anchored) = &self.anchored_selection {
            write!(f, " {}", anchored)?;
        }
        Ok(())
    }
}
