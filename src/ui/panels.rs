use std::sync::Arc;

use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::config::DashboardConfig;
use crate::data::model::Gender;
use crate::state::{AppState, Dimension};
use crate::ui::format::format_count;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState, header: &str) {
    ui.heading(header);
    ui.separator();

    // The option lists never change; hold our own handle so `state` can be
    // mutated while iterating them.
    let dataset = Arc::clone(&state.dataset);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let n_years = state.selection.years.len();
            multi_select(
                ui,
                state,
                "Select Year(s):",
                Dimension::Year,
                n_years,
                dataset.years.len(),
                |ui, state| {
                    for &year in &dataset.years {
                        let mut checked = state.selection.years.contains(&year);
                        if ui.checkbox(&mut checked, year.to_string()).changed() {
                            state.toggle_year(year);
                        }
                    }
                },
            );

            let n_months = state.selection.months.len();
            multi_select(
                ui,
                state,
                "Select Month(s):",
                Dimension::Month,
                n_months,
                dataset.months.len(),
                |ui, state| {
                    for &month in &dataset.months {
                        let mut checked = state.selection.months.contains(&month);
                        if ui.checkbox(&mut checked, month.name()).changed() {
                            state.toggle_month(month);
                        }
                    }
                },
            );

            ui.add_space(4.0);
            ui.strong("Select Gender:");
            let current = state.selection.gender;
            egui::ComboBox::from_id_salt("gender")
                .selected_text(current.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for gender in Gender::ALL {
                        if ui.selectable_label(current == gender, gender.label()).clicked() {
                            state.set_gender(gender);
                        }
                    }
                });
            ui.add_space(4.0);

            let n_states = state.selection.states.len();
            multi_select(
                ui,
                state,
                "Select State(s):",
                Dimension::State,
                n_states,
                dataset.states.len(),
                |ui, state| {
                    for name in &dataset.states {
                        let mut checked = state.selection.states.contains(name);
                        if ui.checkbox(&mut checked, name.as_str()).changed() {
                            state.toggle_state(name);
                        }
                    }
                },
            );
        });
}

/// Collapsible multi-select with All / None shortcuts.
fn multi_select(
    ui: &mut Ui,
    state: &mut AppState,
    label: &str,
    dimension: Dimension,
    n_selected: usize,
    n_total: usize,
    options: impl FnOnce(&mut Ui, &mut AppState),
) {
    let header_text = format!("{label}  ({n_selected}/{n_total})");

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(label)
        .default_open(dimension == Dimension::Year)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all(dimension);
                }
                if ui.small_button("None").clicked() {
                    state.select_none(dimension);
                }
            });
            options(ui, state);
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the page title and the status line.
pub fn header(ui: &mut Ui, state: &AppState, config: &DashboardConfig) {
    ui.add_space(4.0);
    ui.heading(RichText::new(&config.title).size(24.0).strong());
    ui.label(RichText::new(&config.subtitle).size(15.0));

    ui.horizontal(|ui: &mut Ui| {
        let summary = &state.summary;
        ui.label(format!(
            "{} of {} records selected",
            format_count(summary.records as f64),
            format_count(state.dataset.len() as f64)
        ));
        ui.separator();
        ui.label(format!(
            "{} arrivals: {}",
            state.selection.gender,
            format_count(summary.gender_arrivals)
        ));
        ui.separator();
        ui.label(format!(
            "Total arrivals: {}",
            format_count(summary.total_arrivals)
        ));
        if let Some((first, last)) = state.dataset.date_range() {
            ui.separator();
            ui.label(format!(
                "Data from {} to {}",
                first.format("%d %b %Y"),
                last.format("%d %b %Y")
            ));
        }
    });
    ui.add_space(4.0);
}
