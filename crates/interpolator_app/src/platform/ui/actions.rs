use interpolator_core::{AppViewModel, Msg};

pub fn show(ui: &mut egui::Ui, view: &AppViewModel) -> Vec<Msg> {
    let mut msgs = Vec::new();
    let actions = view.actions;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            if actions.can_cancel {
                if ui.button("Cancel").clicked() {
                    msgs.push(Msg::CancelClicked);
                }
            } else if ui
                .add_enabled(actions.can_start, egui::Button::new("Start Interpolation"))
                .clicked()
            {
                msgs.push(Msg::StartClicked);
            }

            if actions.can_download && ui.button("Download Result").clicked() {
                msgs.push(Msg::DownloadClicked);
            }

            let settings_label = if view.show_settings {
                "Hide Settings"
            } else {
                "Show Settings"
            };
            if ui.button(settings_label).clicked() {
                msgs.push(Msg::SettingsToggled);
            }

            if ui.button("Upload New Video").clicked() {
                msgs.push(Msg::ResetClicked);
            }
        });
    });

    msgs
}
