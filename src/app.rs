use eframe::egui;

use crate::session::Session;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct QuadViewApp {
    pub session: Session,
}

impl QuadViewApp {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl eframe::App for QuadViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.session);
        });

        // ---- Left side panel: range and helper ----
        egui::SidePanel::left("controls_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.session);
            });

        // ---- Bottom panel: table (optional) ----
        if self.session.show_table {
            if let Some(t) = &self.session.table {
                egui::TopBottomPanel::bottom("table_panel")
                    .default_height(220.0)
                    .resizable(true)
                    .show(ctx, |ui| {
                        table::table_view(ui, t);
                    });
            }
        }

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::curve_plot(ui, &self.session);
        });
    }
}
