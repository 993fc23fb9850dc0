use interpolator_core::MediaInfoView;

pub fn show(ui: &mut egui::Ui, media: &MediaInfoView) {
    ui.add_space(8.0);
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.strong("Video Information");
        egui::Grid::new("video_info")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                for (label, value) in [
                    ("Name", &media.name),
                    ("Size", &media.size),
                    ("Type", &media.media_type),
                    ("Interpolation", &media.interpolation),
                    ("Model", &media.model),
                ] {
                    ui.label(label);
                    ui.label(value);
                    ui.end_row();
                }
            });
    });
}
