//! Chaikin-Editor.
//!
//! Kontrollpunkte per Klick setzen und ziehen, Enter animiert die
//! Chaikin-Unterteilung, Leertaste setzt zurück, Escape beendet.

use chaikin_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;
use std::time::Instant;

/// Ungefähre Höhe der Status-Bar für die initiale Fenstergröße.
const STATUS_BAR_HEIGHT: f32 = 24.0;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Chaikin-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);
        let [width, height] = editor_options.canvas_size;

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([width, height + STATUS_BAR_HEIGHT])
                .with_resizable(false)
                .with_title("Chaikin Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "Chaikin Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new(editor_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    /// Referenzzeitpunkt der Scheduler-Uhr
    started: Instant,
}

impl EditorApp {
    fn new(options: EditorOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            input: ui::InputState::new(),
            started: Instant::now(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let [width, height] = self.state.options.canvas_size;
                let (rect, response) = ui.allocate_exact_size(
                    egui::vec2(width, height),
                    egui::Sense::click_and_drag(),
                );

                let events = self.input.collect_canvas_events(ui, &response);
                let needs_repaint = self.process_frame(events);

                let scene = self.controller.build_render_scene(&self.state);
                render::render_scene(ui.painter(), rect, &scene);

                if needs_repaint {
                    ctx.request_repaint();
                }
            });

        self.schedule_next_repaint(ctx);
    }
}

impl EditorApp {
    /// Zieht die Scheduler-Uhr auf Wall-Clock-Zeit und verarbeitet danach die Events.
    fn process_frame(&mut self, events: Vec<AppIntent>) -> bool {
        let elapsed = self.started.elapsed();
        match self
            .controller
            .handle_frame(&mut self.state, elapsed, events)
        {
            Ok(needs_repaint) => needs_repaint,
            Err(e) => {
                log::error!("Frame handling failed: {:#}", e);
                true
            }
        }
    }

    /// Weckt die Event-Loop zum nächsten fälligen Animations-Tick.
    fn schedule_next_repaint(&self, ctx: &egui::Context) {
        if let Some(wait) = self.state.scheduler.time_until_next() {
            ctx.request_repaint_after(wait);
        }
    }
}
