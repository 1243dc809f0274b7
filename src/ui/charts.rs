use eframe::egui::{self, Pos2, RichText, Sense, Stroke, Ui, Vec2};
use egui_extras::{Column, Size, StripBuilder, TableBuilder};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::data::model::TransactionSet;
use crate::data::summary::{self, BarGroup, CategoryShare, Summary};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel – charts, statistics, table
// ---------------------------------------------------------------------------

/// Render the dashboard outputs. All aggregates are recomputed from the
/// visible rows on every frame; there is no cached chart state.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let Some(set) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a sales CSV to begin  (File → Open…)");
        });
        return;
    };

    let bars = summary::bar_data(set, &state.visible_indices);
    let shares = summary::pie_data(set, &state.visible_indices);
    let stats = summary::summarize(set, &state.visible_indices);

    StripBuilder::new(ui)
        .size(Size::relative(0.45))
        .size(Size::exact(52.0))
        .size(Size::remainder())
        .vertical(|mut strip| {
            strip.strip(|builder| {
                builder
                    .size(Size::relative(0.6))
                    .size(Size::remainder())
                    .horizontal(|mut strip| {
                        strip.cell(|ui| bar_chart(ui, state, &bars));
                        strip.cell(|ui| pie_chart(ui, state, &shares));
                    });
            });
            strip.cell(|ui| statistics(ui, &stats, &state.config.currency));
            strip.cell(|ui| transaction_table(ui, state, set));
        });
}

// ---------------------------------------------------------------------------
// Grouped bar chart – amount per date, grouped by category
// ---------------------------------------------------------------------------

fn bar_chart(ui: &mut Ui, state: &AppState, bars: &[BarGroup]) {
    ui.strong("Sales by date");

    // One x slot per distinct date; `bars` is already in (date, category)
    // order so the slots come out sorted.
    let mut dates = Vec::new();
    for group in bars {
        if dates.last() != Some(&group.date) {
            dates.push(group.date);
        }
    }

    let mut categories: Vec<&str> = bars.iter().map(|g| g.category.as_str()).collect();
    categories.sort_unstable();
    categories.dedup();

    let group_width = 0.8;
    let bar_width = group_width / categories.len().max(1) as f64;

    let mut charts = Vec::new();
    for (cat_idx, category) in categories.iter().enumerate() {
        let color = state.category_colors.color_for(category);
        let offset = -group_width / 2.0 + bar_width * (cat_idx as f64 + 0.5);

        let cat_bars: Vec<Bar> = bars
            .iter()
            .filter(|g| g.category == *category)
            .map(|g| {
                let slot = dates.iter().position(|d| *d == g.date).unwrap_or(0);
                let mut hover = format!("{} — {}", g.category, g.date.format("%Y-%m-%d"));
                for p in &g.products {
                    hover.push_str(&format!("\n{}: {:.2}", p.product, p.amount));
                }
                Bar::new(slot as f64 + offset, g.total)
                    .width(bar_width)
                    .fill(color)
                    .name(hover)
            })
            .collect();

        charts.push(BarChart::new(cat_bars).name(*category).color(color));
    }

    let labels: Vec<String> = dates
        .iter()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect();

    Plot::new("sales_by_date")
        .legend(Legend::default())
        .y_axis_label("Amount")
        .x_axis_formatter(move |mark, _range| {
            let slot = mark.value.round();
            if (mark.value - slot).abs() > 1e-3 || slot < 0.0 {
                return String::new();
            }
            labels.get(slot as usize).cloned().unwrap_or_default()
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Pie chart – category share of the filtered total
// ---------------------------------------------------------------------------

fn pie_chart(ui: &mut Ui, state: &AppState, shares: &[CategoryShare]) {
    ui.strong("Category share");

    if shares.iter().all(|s| s.fraction <= 0.0) {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No matching rows.");
        });
        return;
    }

    let side = ui.available_width().min(ui.available_height() * 0.7);
    let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    let radius = rect.width().min(rect.height()) * 0.45;

    // Slices start at twelve o'clock and run clockwise. A slice wider than
    // a half turn is not convex, so draw each one in quarter-turn chunks.
    let mut angle = -std::f64::consts::FRAC_PI_2;
    for share in shares {
        if share.fraction <= 0.0 {
            continue;
        }
        let color = state.category_colors.color_for(&share.category);
        let mut remaining = share.fraction * std::f64::consts::TAU;

        while remaining > 0.0 {
            let sweep = remaining.min(std::f64::consts::FRAC_PI_2);
            let steps = ((sweep / 0.05).ceil() as usize).max(2);

            let mut points = vec![center];
            for step in 0..=steps {
                let a = angle + sweep * step as f64 / steps as f64;
                points.push(Pos2::new(
                    center.x + radius * a.cos() as f32,
                    center.y + radius * a.sin() as f32,
                ));
            }
            painter.add(egui::Shape::convex_polygon(points, color, Stroke::NONE));

            angle += sweep;
            remaining -= sweep;
        }
    }

    for share in shares {
        ui.horizontal(|ui: &mut Ui| {
            let color = state.category_colors.color_for(&share.category);
            ui.label(RichText::new("■").color(color));
            ui.label(format!(
                "{}: {:.2} ({:.1}%)",
                share.category,
                share.total,
                share.fraction * 100.0
            ));
        });
    }
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

fn statistics(ui: &mut Ui, stats: &Summary, currency: &str) {
    ui.separator();
    let [total, mean] = stats.lines(currency);
    ui.label(RichText::new(total).strong());
    ui.label(RichText::new(mean).strong());
}

// ---------------------------------------------------------------------------
// Transaction table
// ---------------------------------------------------------------------------

fn transaction_table(ui: &mut Ui, state: &AppState, set: &TransactionSet) {
    ui.separator();
    let table = &state.config.table;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder())
        .column(Column::auto().at_least(80.0))
        .header(20.0, |mut header| {
            for title in [
                &table.date_column,
                &table.category_column,
                &table.product_column,
                &table.amount_column,
            ] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            let date_format = table.date_format.clone();
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let tx = &set.rows[state.visible_indices[row.index()]];
                row.col(|ui: &mut Ui| {
                    ui.label(tx.date.format(&date_format).to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&tx.category);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&tx.product);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.2}", tx.amount));
                });
            });
        });
}
