use eframe::egui::{Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::table::Table;

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Table grid (bottom panel)
// ---------------------------------------------------------------------------

/// Render the table as a striped, scrollable grid with one row per sample.
pub fn table_view(ui: &mut Ui, table: &Table) {
    let names = table.column_names();
    let xs = table.x_values();
    let ys = table.y_values();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::right_to_left(Align::Center))
        .column(Column::auto().at_least(48.0))
        .column(Column::initial(140.0).at_least(80.0))
        .column(Column::remainder().at_least(80.0))
        .header(ROW_HEIGHT + 2.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            for name in &names {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, table.num_rows(), |mut row| {
                let i = row.index();
                row.col(|ui| {
                    ui.label(i.to_string());
                });
                row.col(|ui| {
                    ui.monospace(format!("{:.6}", xs.value(i)));
                });
                row.col(|ui| {
                    ui.monospace(format!("{:.6}", ys.value(i)));
                });
            });
        });
}
