use std::collections::BTreeSet;

use super::model::QcTable;

// ---------------------------------------------------------------------------
// Tissue filter
// ---------------------------------------------------------------------------

/// Return indices of rows whose tissue is in `selected`, or `None` when the
/// selection is empty.
///
/// `None` is the suspension guard: an empty selection means "awaiting valid
/// input", so no filtered view exists and the renderer skips the cycle
/// instead of drawing a degenerate empty plot.
pub fn filtered_indices(table: &QcTable, selected: &BTreeSet<String>) -> Option<Vec<usize>> {
    if selected.is_empty() {
        return None;
    }
    Some(
        table
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.group().is_some_and(|g| selected.contains(&g)))
            .map(|(i, _)| i)
            .collect(),
    )
}
