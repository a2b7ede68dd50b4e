use eframe::egui::{self, Color32, DragValue, RichText, ScrollArea, Ui};

use crate::data::export::export_table;
use crate::session::{HelperOutcome, Session};

// ---------------------------------------------------------------------------
// Left side panel – range controls and helper call
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, session: &mut Session) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            range_controls(ui, session);
            ui.add_space(8.0);
            helper_controls(ui, session);
        });
}

fn range_controls(ui: &mut Ui, session: &mut Session) {
    ui.heading("Range");
    ui.separator();

    // Edit a copy; only apply when something changed.
    let mut range = session.range;
    let mut changed = false;

    egui::Grid::new("range_grid")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("lower");
            changed |= ui
                .add(DragValue::new(&mut range.lower).speed(0.05))
                .changed();
            ui.end_row();

            ui.label("upper");
            changed |= ui
                .add(DragValue::new(&mut range.upper).speed(0.05))
                .changed();
            ui.end_row();

            ui.label("count");
            changed |= ui
                .add(DragValue::new(&mut range.count).range(1..=100_000))
                .changed();
            ui.end_row();
        });

    if changed {
        session.set_range(range);
    }

    ui.label(format!("step = {:.6}", session.range.step()));

    if ui.button("Reset").clicked() {
        session.set_range(session.config.range);
    }
}

fn helper_controls(ui: &mut Ui, session: &mut Session) {
    ui.heading("ext_list");
    ui.separator();

    let call = session.config.helper.call();
    ui.label(format!("helper: {}", session.helper_name()));
    ui.monospace(format!("ext_list({:?}, {}, {})", call.list, call.a, call.b));

    if ui.button("Call").clicked() {
        session.invoke_helper();
    }

    match &session.helper_outcome {
        Some(HelperOutcome::Returned(value)) => {
            ui.label(RichText::new("returned").strong());
            ui.monospace(value.to_string());
        }
        Some(HelperOutcome::Failed(msg)) => {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
        None => {
            ui.label("not called");
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, session: &mut Session) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            let has_table = session.table.is_some();
            if ui
                .add_enabled(has_table, egui::Button::new("Export table…"))
                .clicked()
            {
                export_file_dialog(session);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(curve) = &session.curve {
            ui.label(format!(
                "{} samples over [{}, {}]",
                curve.len(),
                session.range.lower,
                session.range.upper
            ));
            if let Some(ys) = curve.y().bounds() {
                ui.label(format!("y in [{:.4}, {:.4}]", ys.start(), ys.end()));
            }
        }

        ui.separator();

        if ui
            .selectable_label(session.show_table, "Table")
            .clicked()
        {
            session.show_table = !session.show_table;
            if session.show_table && session.table.is_none() {
                if let Err(e) = session.build_table() {
                    log::error!("Failed to build table: {e}");
                    session.status_message = Some(format!("Error: {e}"));
                }
            }
        }

        if let Some(msg) = &session.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn export_file_dialog(session: &mut Session) {
    let Some(table) = &session.table else {
        return;
    };

    let file = rfd::FileDialog::new()
        .set_title("Export table")
        .set_file_name("table.csv")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .save_file();

    if let Some(path) = file {
        match export_table(table, &path) {
            Ok(()) => {
                session.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export table: {e:#}");
                session.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
