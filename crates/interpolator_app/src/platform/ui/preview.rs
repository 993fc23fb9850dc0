use interpolator_core::{AppViewModel, Msg, PlaybackAction, PlaybackState, PreviewSurface, PreviewView};

pub fn show(ui: &mut egui::Ui, view: &AppViewModel) -> Vec<Msg> {
    let mut msgs = Vec::new();

    if let Some(source) = &view.source_preview {
        msgs.extend(surface(ui, "Original Video", PreviewSurface::Source, source));
    }
    if let Some(output) = &view.output_preview {
        ui.add_space(8.0);
        msgs.extend(surface(ui, "Interpolated Video", PreviewSurface::Output, output));
    }

    msgs
}

fn surface(
    ui: &mut egui::Ui,
    title: &str,
    surface: PreviewSurface,
    preview: &PreviewView,
) -> Vec<Msg> {
    let mut msgs = Vec::new();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_height(140.0);
        ui.strong(title);
        ui.label(egui::RichText::new(preview.locator.as_str()).monospace().weak());
        ui.label(match preview.playback {
            PlaybackState::Stopped => "Stopped",
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
        });

        ui.horizontal(|ui| {
            let playing = preview.playback == PlaybackState::Playing;
            let stopped = preview.playback == PlaybackState::Stopped;
            let mut action = None;
            if ui.add_enabled(!playing, egui::Button::new("Play")).clicked() {
                action = Some(PlaybackAction::Play);
            }
            if ui.add_enabled(playing, egui::Button::new("Pause")).clicked() {
                action = Some(PlaybackAction::Pause);
            }
            if ui.add_enabled(!stopped, egui::Button::new("Stop")).clicked() {
                action = Some(PlaybackAction::Stop);
            }
            if let Some(action) = action {
                msgs.push(Msg::Playback { surface, action });
            }
        });
    });

    msgs
}
