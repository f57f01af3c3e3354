use std::ops::RangeInclusive;

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, GridMark, HLine, Legend, Line, MarkerShape, Plot, Points};

use crate::color::ChartPalette;
use crate::data::aggregate::AggregateViews;
use crate::state::AppState;
use crate::ui::format::{format_change, format_count};

// ---------------------------------------------------------------------------
// Central panel – the three charts
// ---------------------------------------------------------------------------

/// Render all charts for the current selection.
pub fn dashboard(ui: &mut Ui, state: &AppState, palette: &ChartPalette, chart_height: f32) {
    let views = &state.views;
    let gender = state.selection.gender.label();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            if views.is_empty() {
                ui.label(
                    RichText::new("No records match the current filters.")
                        .color(Color32::GRAY),
                );
            }

            ui.heading("Total Foreign Entries by Gender and Year");
            year_bar_chart(
                ui,
                "gender_totals",
                &views.gender_totals,
                state.selection.gender.column(),
                palette.gender_bars,
                chart_height,
            );
            ui.add_space(12.0);

            ui.heading("Percentage Change of Foreign Entries by Gender and Year");
            change_chart(ui, views, palette, chart_height);
            ui.add_space(12.0);

            ui.heading("Total Foreign Nationals Entering Malaysia by Year");
            year_bar_chart(
                ui,
                "total_arrivals",
                &views.total_arrivals,
                "Total arrivals",
                palette.total_bars,
                chart_height,
            );
            ui.add_space(12.0);

            ui.heading("Yearly Summary");
            summary_table(ui, views, gender);
        });
}

fn year_tick(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    if mark.value.fract() == 0.0 {
        format!("{}", mark.value as i64)
    } else {
        String::new()
    }
}

fn count_tick(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    if mark.value.fract() == 0.0 {
        format_count(mark.value)
    } else {
        format!("{:.1}", mark.value)
    }
}

fn percent_tick(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    format!("{}%", mark.value)
}

fn year_bar_chart(
    ui: &mut Ui,
    id: &str,
    series: &[(i32, f64)],
    name: &str,
    color: Color32,
    height: f32,
) {
    let bars: Vec<Bar> = series
        .iter()
        .map(|&(year, value)| {
            Bar::new(year as f64, value)
                .width(0.6)
                .name(format!("{year}: {}", format_count(value)))
        })
        .collect();
    let chart = BarChart::new(bars).color(color).name(name);

    Plot::new(id)
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label(name)
        .x_axis_formatter(year_tick)
        .y_axis_formatter(count_tick)
        .allow_scroll(false)
        .allow_drag(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

/// Split a change series into runs of defined points; each run is drawn as
/// its own line so undefined years show up as gaps.
pub fn defined_segments(series: &[(i32, Option<f64>)]) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();
    for &(year, change) in series {
        match change {
            Some(c) => current.push([year as f64, c]),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

fn change_chart(ui: &mut Ui, views: &AggregateViews, palette: &ChartPalette, height: f32) {
    let segments = defined_segments(&views.percentage_change);

    let (mut up, mut down): (Vec<[f64; 2]>, Vec<[f64; 2]>) = (Vec::new(), Vec::new());
    for point in segments.iter().flatten() {
        if point[1] < 0.0 {
            down.push(*point);
        } else {
            up.push(*point);
        }
    }
    let up_color = palette.trend_color(1.0);
    let down_color = palette.trend_color(-1.0);

    Plot::new("percentage_change")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("Percentage change")
        .x_axis_formatter(year_tick)
        .y_axis_formatter(percent_tick)
        .allow_scroll(false)
        .allow_drag(false)
        .show(ui, |plot_ui| {
            plot_ui.hline(HLine::new(0.0).color(Color32::GRAY).width(1.0));
            for segment in segments {
                plot_ui.line(
                    Line::new(segment)
                        .name("Percentage change")
                        .color(palette.change_line)
                        .width(2.0),
                );
            }
            plot_ui.points(
                Points::new(up)
                    .name("Increase")
                    .shape(MarkerShape::Circle)
                    .radius(4.0)
                    .filled(true)
                    .color(up_color),
            );
            plot_ui.points(
                Points::new(down)
                    .name("Decrease")
                    .shape(MarkerShape::Circle)
                    .radius(4.0)
                    .filled(true)
                    .color(down_color),
            );
        });
}

fn summary_table(ui: &mut Ui, views: &AggregateViews, gender: &str) {
    let rows: Vec<(i32, f64, Option<f64>, f64)> = views
        .gender_totals
        .iter()
        .zip(&views.percentage_change)
        .zip(&views.total_arrivals)
        .map(|((&(year, g), &(_, change)), &(_, total))| (year, g, change, total))
        .collect();

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Year");
            });
            header.col(|ui| {
                ui.strong(format!("{gender} arrivals"));
            });
            header.col(|ui| {
                ui.strong("Change");
            });
            header.col(|ui| {
                ui.strong("Total arrivals");
            });
        })
        .body(|mut body| {
            for (year, g, change, total) in rows {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(year.to_string());
                    });
                    row.col(|ui| {
                        ui.label(format_count(g));
                    });
                    row.col(|ui| {
                        ui.label(format_change(change));
                    });
                    row.col(|ui| {
                        ui.label(format_count(total));
                    });
                });
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defined_segments_split_on_gaps() {
        let series = vec![
            (2018, None),
            (2019, Some(10.0)),
            (2020, Some(-5.0)),
            (2021, None),
            (2022, Some(3.0)),
        ];
        assert_eq!(
            defined_segments(&series),
            vec![
                vec![[2019.0, 10.0], [2020.0, -5.0]],
                vec![[2022.0, 3.0]],
            ]
        );
    }

    #[test]
    fn test_defined_segments_empty() {
        assert!(defined_segments(&[]).is_empty());
        assert!(defined_segments(&[(2019, None), (2020, None)]).is_empty());
    }
}
