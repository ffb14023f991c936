use std::collections::BTreeSet;

use crate::color::ColorMap;
use crate::data::filter::filtered_indices;
use crate::data::model::QcTable;
use crate::render::{render_plan, RenderPlan};

// ---------------------------------------------------------------------------
// Selection – the live values of the five sidebar widgets
// ---------------------------------------------------------------------------

/// Current widget values. This is the only mutable state of the application;
/// everything else is derived from it and the immutable table.
#[derive(Debug, Clone)]
pub struct Selection {
    /// X axis column (`None` only when the table has no numeric columns).
    pub x_col: Option<String>,
    /// Y axis column (`None` when fewer than two numeric columns exist).
    pub y_col: Option<String>,
    /// Tissues currently filtered in.
    pub tissues: BTreeSet<String>,
    /// Colour points by tissue.
    pub by_tissue: bool,
    /// Attach marginal histograms to the scatter.
    pub show_margins: bool,
}

impl Selection {
    /// Defaults: first two numeric columns as axes, all tissues selected,
    /// both toggles on.
    pub fn defaults(table: &QcTable) -> Self {
        Selection {
            x_col: table.numeric_columns.first().cloned(),
            y_col: table.numeric_columns.get(1).cloned(),
            tissues: table.group_values.iter().cloned().collect(),
            by_tissue: true,
            show_margins: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset. Read-only after construction.
    pub table: QcTable,
    /// Live widget values.
    pub selection: Selection,
    /// Tissue → colour, keyed by the full sorted tissue list.
    pub color_map: ColorMap,
    /// Memoized filtered view: indices of rows passing the tissue filter,
    /// `None` while the selection is empty. Recomputed only when the tissue
    /// subset changes, via the mutators below.
    visible: Option<Vec<usize>>,
}

impl AppState {
    pub fn new(table: QcTable) -> Self {
        let selection = Selection::defaults(&table);
        let visible = filtered_indices(&table, &selection.tissues);
        let color_map = ColorMap::new(&table.group_values);
        AppState {
            table,
            selection,
            color_map,
            visible,
        }
    }

    /// Indices of the currently visible rows; `None` while the tissue
    /// selection is empty (render pipeline suspended).
    pub fn visible_indices(&self) -> Option<&[usize]> {
        self.visible.as_deref()
    }

    /// The render call for this cycle.
    pub fn render_plan(&self) -> RenderPlan<'_> {
        render_plan(&self.table, &self.selection, self.visible_indices())
    }

    /// Toggle a single tissue in the filter.
    pub fn toggle_tissue(&mut self, tissue: &str) {
        if !self.selection.tissues.remove(tissue) {
            self.selection.tissues.insert(tissue.to_string());
        }
        self.refilter();
    }

    /// Select every tissue.
    pub fn select_all_tissues(&mut self) {
        self.selection.tissues = self.table.group_values.iter().cloned().collect();
        self.refilter();
    }

    /// Clear the tissue filter.
    pub fn select_no_tissues(&mut self) {
        self.selection.tissues.clear();
        self.refilter();
    }

    /// Recompute the cached filtered view after a tissue-subset change.
    /// Axis and toggle changes never call this: they do not affect the view.
    fn refilter(&mut self) {
        self.visible = filtered_indices(&self.table, &self.selection.tissues);
    }
}
