use crate::data::model::QcTable;
use crate::state::Selection;

// ---------------------------------------------------------------------------
// Render plan
// ---------------------------------------------------------------------------

/// What the plot panel should do this cycle. Derived from current state,
/// consumed by `ui::plot` — keeping this a plain value keeps the whole
/// filter → render decision testable without a GUI.
#[derive(Debug, PartialEq)]
pub enum RenderPlan<'a> {
    /// Tissue selection is empty: no filtered view exists, skip the cycle
    /// (nothing drawn, no error shown).
    Suspended,
    /// Fewer than two numeric columns existed at load, so an axis default
    /// is undefined. Surfaced as a generic inline error.
    MissingAxes,
    /// Draw a scatterplot.
    Scatter(ScatterSpec<'a>),
}

/// A fully-resolved scatterplot call: which columns, which rows, whether to
/// colour by tissue and whether to attach marginal histograms.
#[derive(Debug, PartialEq)]
pub struct ScatterSpec<'a> {
    pub x: &'a str,
    pub y: &'a str,
    /// Indices of the rows passing the tissue filter.
    pub rows: &'a [usize],
    /// Colour points by tissue.
    pub hue: bool,
    /// Fixed colour ordering: always the full sorted tissue list, even when
    /// `rows` covers a strict subset, so colours never shift across filters.
    pub hue_order: &'a [String],
    pub show_margins: bool,
}

/// Decide the render call from the current selection and the (memoized)
/// filtered view. `visible` is `None` while the tissue selection is empty.
pub fn render_plan<'a>(
    table: &'a QcTable,
    selection: &'a Selection,
    visible: Option<&'a [usize]>,
) -> RenderPlan<'a> {
    let Some(rows) = visible else {
        return RenderPlan::Suspended;
    };
    let (Some(x), Some(y)) = (selection.x_col.as_deref(), selection.y_col.as_deref()) else {
        return RenderPlan::MissingAxes;
    };
    RenderPlan::Scatter(ScatterSpec {
        x,
        y,
        rows,
        hue: selection.by_tissue,
        hue_order: &table.group_values,
        show_margins: selection.show_margins,
    })
}

// ---------------------------------------------------------------------------
// Histogram binning (marginal plots)
// ---------------------------------------------------------------------------

/// One histogram bar.
#[derive(Debug, Clone, PartialEq)]
pub struct HistBin {
    pub center: f64,
    pub width: f64,
    pub count: usize,
}

/// Bin `values` into `bins` equal-width bins over their min..max range.
/// Returns an empty vec for empty input; a single degenerate value yields one
/// bin containing everything.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range.abs() < f64::EPSILON {
        return vec![HistBin {
            center: min,
            width: 1.0,
            count: values.len(),
        }];
    }

    let width = range / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistBin {
            center: min + (i as f64 + 0.5) * width,
            width,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::filtered_indices;
    use crate::data::model::tests::demo_table;
    use std::collections::BTreeSet;

    fn select(tissues: &[&str]) -> BTreeSet<String> {
        tissues.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn scatter_call_for_a_tissue_subset() {
        // X=ReadsMapped, Y=MappingRate, filter={Blood,Liver}, hue on,
        // margins off: expect a plain scatter over exactly the Blood/Liver
        // rows with the full tissue list as colour order.
        let table = demo_table();
        let selection = Selection {
            x_col: Some("ReadsMapped".to_string()),
            y_col: Some("MappingRate".to_string()),
            tissues: select(&["Blood", "Liver"]),
            by_tissue: true,
            show_margins: false,
        };
        let visible = filtered_indices(&table, &selection.tissues).unwrap();

        match render_plan(&table, &selection, Some(&visible)) {
            RenderPlan::Scatter(spec) => {
                assert_eq!(spec.x, "ReadsMapped");
                assert_eq!(spec.y, "MappingRate");
                assert_eq!(spec.rows, &[0usize, 1, 3][..]);
                assert!(spec.hue);
                assert!(!spec.show_margins);
                assert_eq!(spec.hue_order, &["Blood", "Brain", "Liver"]);
            }
            other => panic!("expected scatter, got {other:?}"),
        }
    }

    #[test]
    fn cleared_filter_suspends_the_render() {
        let table = demo_table();
        let selection = Selection {
            x_col: Some("ReadsMapped".to_string()),
            y_col: Some("MappingRate".to_string()),
            tissues: BTreeSet::new(),
            by_tissue: true,
            show_margins: true,
        };
        let plan = render_plan(&table, &selection, None);
        assert_eq!(plan, RenderPlan::Suspended);
    }

    #[test]
    fn hue_toggle_changes_only_the_hue() {
        let table = demo_table();
        let mut selection = Selection {
            x_col: Some("ReadsMapped".to_string()),
            y_col: Some("MappingRate".to_string()),
            tissues: select(&["Blood", "Brain", "Liver"]),
            by_tissue: true,
            show_margins: true,
        };
        let visible = filtered_indices(&table, &selection.tissues).unwrap();

        let rows_colored = match render_plan(&table, &selection, Some(&visible)) {
            RenderPlan::Scatter(spec) => {
                assert!(spec.hue);
                spec.rows.to_vec()
            }
            other => panic!("expected scatter, got {other:?}"),
        };

        selection.by_tissue = false;
        match render_plan(&table, &selection, Some(&visible)) {
            RenderPlan::Scatter(spec) => {
                assert!(!spec.hue);
                assert_eq!(spec.rows, rows_colored.as_slice());
                assert!(spec.show_margins);
            }
            other => panic!("expected scatter, got {other:?}"),
        }
    }

    #[test]
    fn hue_order_is_the_full_list_for_any_subset() {
        let table = demo_table();
        for subset in [
            &["Blood"][..],
            &["Brain", "Liver"][..],
            &["Blood", "Brain", "Liver"][..],
        ] {
            let selection = Selection {
                x_col: Some("ReadsMapped".to_string()),
                y_col: Some("MappingRate".to_string()),
                tissues: select(subset),
                by_tissue: true,
                show_margins: true,
            };
            let visible = filtered_indices(&table, &selection.tissues).unwrap();
            match render_plan(&table, &selection, Some(&visible)) {
                RenderPlan::Scatter(spec) => {
                    assert_eq!(spec.hue_order, &["Blood", "Brain", "Liver"]);
                }
                other => panic!("expected scatter, got {other:?}"),
            }
        }
    }

    #[test]
    fn undefined_axis_is_a_render_error() {
        let table = demo_table();
        let selection = Selection {
            x_col: Some("ReadsMapped".to_string()),
            y_col: None,
            tissues: select(&["Blood"]),
            by_tissue: false,
            show_margins: false,
        };
        let visible = filtered_indices(&table, &selection.tissues).unwrap();
        let plan = render_plan(&table, &selection, Some(&visible));
        assert_eq!(plan, RenderPlan::MissingAxes);
    }

    #[test]
    fn histogram_bins_cover_the_range() {
        let values = [0.0, 0.1, 0.2, 0.9, 1.0];
        let bins = histogram(&values, 2);
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].count, 3);
        assert_eq!(bins[1].count, 2);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
    }

    #[test]
    fn histogram_degenerate_cases() {
        assert!(histogram(&[], 10).is_empty());
        let constant = histogram(&[2.5, 2.5, 2.5], 10);
        assert_eq!(constant.len(), 1);
        assert_eq!(constant[0].count, 3);
    }
}
