use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – axis pickers, tissue filter, toggles
// ---------------------------------------------------------------------------

/// Render the sidebar. Widget domains come from the table's column facts;
/// the widgets themselves are the only thing that mutates `Selection`.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            axis_picker(ui, state, Axis::X);
            axis_picker(ui, state, Axis::Y);
            ui.separator();
            tissue_filter(ui, state);
            ui.separator();
            ui.checkbox(&mut state.selection.by_tissue, "Color by tissue");
            ui.checkbox(&mut state.selection.show_margins, "Show marginal plots");
        });
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

/// Single-choice combo box over the numeric columns.
fn axis_picker(ui: &mut Ui, state: &mut AppState, axis: Axis) {
    let (label, id) = match axis {
        Axis::X => ("X variable (QC metric)", "x_axis"),
        Axis::Y => ("Y variable (QC metric)", "y_axis"),
    };
    ui.strong(label);

    let current = match axis {
        Axis::X => state.selection.x_col.clone(),
        Axis::Y => state.selection.y_col.clone(),
    };
    let columns = state.table.numeric_columns.clone();

    egui::ComboBox::from_id_salt(id)
        .selected_text(current.clone().unwrap_or_default())
        .show_ui(ui, |ui: &mut Ui| {
            for col in &columns {
                if ui
                    .selectable_label(current.as_deref() == Some(col), col)
                    .clicked()
                {
                    match axis {
                        Axis::X => state.selection.x_col = Some(col.clone()),
                        Axis::Y => state.selection.y_col = Some(col.clone()),
                    }
                }
            }
        });
    ui.add_space(4.0);
}

/// Multi-choice tissue filter with All/None shortcuts. Checkbox labels carry
/// the tissue's colour swatch while "Color by tissue" is on.
fn tissue_filter(ui: &mut Ui, state: &mut AppState) {
    let tissues = state.table.group_values.clone();
    let n_selected = state.selection.tissues.len();
    let n_total = tissues.len();

    ui.strong(format!("Filter by tissue  ({n_selected}/{n_total})"));

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all_tissues();
        }
        if ui.small_button("None").clicked() {
            state.select_no_tissues();
        }
    });

    for tissue in &tissues {
        let mut text = RichText::new(tissue);
        if state.selection.by_tissue {
            text = text.color(state.color_map.color_for(tissue));
        }

        let mut checked = state.selection.tissues.contains(tissue);
        if ui.checkbox(&mut checked, text).changed() {
            state.toggle_tissue(tissue);
        }
    }
}
