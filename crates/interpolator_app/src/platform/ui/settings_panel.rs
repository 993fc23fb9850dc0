use interpolator_core::{
    InterpolationConfig, InterpolationMode, Msg, RifeModel, Scale, DEFAULT_TARGET_FPS,
    MULTIPLIER_CHOICES, PROCESSING_TIPS, TARGET_FPS_CHOICES,
};

/// Every edit emits a whole new snapshot via `Msg::ConfigReplaced`.
pub fn show(ui: &mut egui::Ui, config: &InterpolationConfig) -> Vec<Msg> {
    let mut next = *config;

    ui.add_space(8.0);
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.strong("Interpolation Settings");
        ui.add_space(4.0);

        let mode = config.mode();
        ui.horizontal(|ui| {
            let by_multiplier = matches!(mode, InterpolationMode::Multiplier(_));
            if ui.selectable_label(by_multiplier, "Frame Multiplier").clicked() && !by_multiplier {
                next = next.with_target_fps(None);
            }
            if ui.selectable_label(!by_multiplier, "Target FPS").clicked() && by_multiplier {
                next = next.with_target_fps(Some(DEFAULT_TARGET_FPS));
            }
        });

        match mode {
            InterpolationMode::Multiplier(current) => {
                egui::ComboBox::from_label("Multiplier")
                    .selected_text(format!("{current}x"))
                    .show_ui(ui, |ui| {
                        for choice in MULTIPLIER_CHOICES {
                            if ui
                                .selectable_label(current == choice, format!("{choice}x"))
                                .clicked()
                            {
                                next = next.with_multiplier(choice);
                            }
                        }
                    });
            }
            InterpolationMode::TargetFps(current) => {
                egui::ComboBox::from_label("Target frame rate")
                    .selected_text(format!("{current} fps"))
                    .show_ui(ui, |ui| {
                        for choice in TARGET_FPS_CHOICES {
                            if ui
                                .selectable_label(current == choice, format!("{choice} fps"))
                                .clicked()
                            {
                                next = next.with_target_fps(Some(choice));
                            }
                        }
                    });
            }
        }

        egui::ComboBox::from_label("Processing scale")
            .selected_text(config.scale.label())
            .show_ui(ui, |ui| {
                for scale in Scale::ALL {
                    if ui
                        .selectable_label(config.scale == scale, scale.label())
                        .clicked()
                    {
                        next = next.with_scale(scale);
                    }
                }
            });

        egui::ComboBox::from_label("Model")
            .selected_text(config.model.display_name())
            .show_ui(ui, |ui| {
                for model in RifeModel::ALL {
                    if ui
                        .selectable_label(config.model == model, model.display_name())
                        .on_hover_text(model.description())
                        .clicked()
                    {
                        next = next.with_model(model);
                    }
                }
            });
        ui.label(egui::RichText::new(config.model.description()).weak());

        ui.add_space(6.0);
        egui::CollapsingHeader::new("Processing Tips").show(ui, |ui| {
            for tip in PROCESSING_TIPS {
                ui.label(format!("• {tip}"));
            }
        });
    });

    if next != *config {
        vec![Msg::ConfigReplaced(next)]
    } else {
        Vec::new()
    }
}
