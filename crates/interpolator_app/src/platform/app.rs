use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use interp_logging::{interp_error, interp_info, interp_warn};
use interpolator_core::{update, AppState, AppViewModel, Msg, Phase};
use interpolator_engine::{EngineHandle, EngineSettings};

use super::effects::EffectRunner;
use super::settings::{AppSettings, LOG_FILENAME, SETTINGS_FILENAME};
use super::ui;

const REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub fn run_app() -> eframe::Result<()> {
    let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (settings, settings_error) = match AppSettings::load(&base_dir.join(SETTINGS_FILENAME)) {
        Ok(loaded) => (loaded.unwrap_or_default(), None),
        Err(err) => (AppSettings::default(), Some(err)),
    };

    interp_logging::initialize(
        settings.log_target.into(),
        settings.log_level.into(),
        &base_dir.join(LOG_FILENAME),
    );
    if let Some(err) = settings_error {
        interp_warn!("Using default settings: {:#}", err);
    }
    interp_info!("Starting interpolator with {:?}", settings);

    let native_options = eframe::NativeOptions {
        centered: true,
        viewport: egui::ViewportBuilder::default()
            .with_title("RIFE Video Interpolator")
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([720.0, 540.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "RIFE Video Interpolator",
        native_options,
        Box::new(move |_cc| {
            let engine = EngineHandle::new(EngineSettings {
                step_delay: settings.step_delay(),
                ..EngineSettings::default()
            })
            .map_err(|err| {
                interp_error!("Engine failed to start: {}", err);
                Box::new(err) as Box<dyn std::error::Error + Send + Sync>
            })?;
            let download_dir = settings.resolve_download_dir(&base_dir);
            Ok(Box::new(InterpolatorApp::new(engine, download_dir)))
        }),
    )
}

struct InterpolatorApp {
    state: AppState,
    view: AppViewModel,
    runner: EffectRunner,
    msg_tx: mpsc::Sender<Msg>,
    msg_rx: mpsc::Receiver<Msg>,
}

impl InterpolatorApp {
    fn new(engine: EngineHandle, download_dir: PathBuf) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let state = AppState::new();
        let view = state.view();
        Self {
            state,
            view,
            runner: EffectRunner::new(engine, download_dir, msg_tx.clone()),
            msg_tx,
            msg_rx,
        }
    }

    /// Returns true when at least one message was dispatched.
    fn process_pending_messages(&mut self) -> bool {
        self.runner.poll();
        let mut handled = false;
        // Dispatch can queue follow-up messages (probe results), so drain until empty.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch_msg(msg);
            handled = true;
        }
        handled
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.view = state.view();
        }
        self.state = state;
        self.runner.enqueue(effects);
    }

    fn handle_drag_and_drop(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw
                    .dropped_files
                    .iter()
                    .filter_map(|file| file.path.clone())
                    .collect::<Vec<_>>(),
            )
        });

        if hovering != self.view.upload.drag_hover {
            let _ = self.msg_tx.send(Msg::DragHoverChanged(hovering));
        }
        // Only the first dropped file is considered.
        if let Some(path) = dropped.into_iter().next() {
            let _ = self.msg_tx.send(Msg::FilePicked(path));
        }
    }
}

impl eframe::App for InterpolatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_drag_and_drop(ctx);
        self.process_pending_messages();

        let msgs = ui::render(ctx, &self.view);
        for msg in msgs {
            let _ = self.msg_tx.send(msg);
        }
        if self.process_pending_messages() {
            ctx.request_repaint();
        } else if self.view.status.phase == Phase::Running || self.runner.is_busy() {
            ctx.request_repaint_after(REPAINT_INTERVAL);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.runner.shutdown();
    }
}
