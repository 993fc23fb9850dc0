use interpolator_core::{Phase, StatusView};

pub fn show(ui: &mut egui::Ui, status: &StatusView) {
    if status.phase == Phase::Idle {
        return;
    }

    ui.add_space(8.0);
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.strong(status.title);
        ui.add(
            egui::ProgressBar::new(f32::from(status.progress) / 100.0)
                .text(format!("{}%", status.progress)),
        );
        ui.label(&status.message);

        if let Some(minutes) = status.eta_minutes {
            ui.label(
                egui::RichText::new(format!("Estimated time remaining: ~{minutes} min")).weak(),
            );
        }

        if !status.steps.is_empty() {
            ui.horizontal(|ui| {
                for step in &status.steps {
                    let text = egui::RichText::new(step.label);
                    if step.reached {
                        ui.label(text.strong().color(ui.visuals().selection.bg_fill));
                    } else {
                        ui.label(text.weak());
                    }
                }
            });
        }

        if let Some(banner) = status.banner {
            ui.add_space(4.0);
            ui.colored_label(egui::Color32::from_rgb(60, 170, 90), banner);
        }
    });
}
