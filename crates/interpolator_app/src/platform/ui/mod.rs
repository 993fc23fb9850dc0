//! egui rendering. Every function draws from the view model and returns the
//! messages the user produced this frame; nothing here touches state.

mod actions;
mod info;
mod preview;
mod settings_panel;
mod status;
mod upload;

use interpolator_core::{AppViewModel, Msg};

pub fn render(ctx: &egui::Context, view: &AppViewModel) -> Vec<Msg> {
    let mut msgs = Vec::new();

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.heading("RIFE Video Interpolator");
        ui.label("Increase the frame rate of your videos with AI frame interpolation");
        ui.add_space(6.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            if let Some(notice) = &view.notice {
                ui.label(egui::RichText::new(notice).italics());
                ui.separator();
            }

            if view.media.is_none() {
                msgs.extend(upload::show(ui, &view.upload));
                return;
            }

            upload::feedback(ui, &view.upload);
            ui.columns(2, |columns| {
                msgs.extend(preview::show(&mut columns[0], view));
                status::show(&mut columns[0], &view.status);

                msgs.extend(actions::show(&mut columns[1], view));
                if view.show_settings {
                    msgs.extend(settings_panel::show(&mut columns[1], &view.config));
                }
                if let Some(media) = &view.media {
                    info::show(&mut columns[1], media);
                }
            });
        });
    });

    msgs
}
