use interpolator_core::{Msg, UploadSurface};

const PICKER_EXTENSIONS: [&str; 5] = ["mp4", "avi", "mov", "mkv", "webm"];

pub fn show(ui: &mut egui::Ui, upload: &UploadSurface) -> Vec<Msg> {
    let mut msgs = Vec::new();

    let stroke = if upload.drag_hover {
        egui::Stroke::new(2.0, ui.visuals().selection.bg_fill)
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke
    };

    egui::Frame::group(ui.style()).stroke(stroke).show(ui, |ui| {
        ui.set_min_height(220.0);
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            if let Some(name) = &upload.loading {
                ui.spinner();
                ui.label(format!("Loading {name}..."));
                return;
            }

            let heading = if upload.drag_hover {
                "Drop your video here"
            } else {
                "Drag and drop a video file"
            };
            ui.heading(heading);
            ui.label("Supports MP4, AVI, MOV, MKV, WebM (max 100MB)");
            ui.add_space(12.0);
            if ui.button("Choose File").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .set_title("Select a video")
                    .add_filter("Video", &PICKER_EXTENSIONS)
                    .add_filter("All files", &["*"])
                    .pick_file()
                {
                    msgs.push(Msg::FilePicked(path));
                }
            }
        });
    });

    if let Some(error) = &upload.error {
        ui.add_space(8.0);
        ui.colored_label(ui.visuals().error_fg_color, error);
    }

    msgs
}

/// Drops are accepted while media is shown, so their outcome needs a home there too.
pub fn feedback(ui: &mut egui::Ui, upload: &UploadSurface) {
    if let Some(name) = &upload.loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(format!("Loading {name}..."));
        });
    }
    if let Some(error) = &upload.error {
        ui.colored_label(ui.visuals().error_fg_color, error);
    }
}
