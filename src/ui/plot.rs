use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::session::Session;

// ---------------------------------------------------------------------------
// Curve plot (central panel)
// ---------------------------------------------------------------------------

/// Render `y = x²` as a connected line in the central panel.
pub fn curve_plot(ui: &mut Ui, session: &Session) {
    let curve = match &session.curve {
        Some(c) => c,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Nothing computed yet");
            });
            return;
        }
    };

    let plot_cfg = &session.config.plot;

    Plot::new("curve_plot")
        .legend(Legend::default())
        .x_axis_label(plot_cfg.x_label.clone())
        .y_axis_label(plot_cfg.y_label.clone())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let points: PlotPoints = curve.points().collect();
            let line = Line::new(points)
                .name(&plot_cfg.title)
                .color(Color32::LIGHT_BLUE)
                .width(1.5);
            plot_ui.line(line);
        });
}
