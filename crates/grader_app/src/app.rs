use std::sync::mpsc;
use std::time::Duration;

use client_logging::client_warn;
use grader_client::ApiError;
use grader_core::{update, AppState, AppViewModel, Msg};

use crate::effects::EffectRunner;
use crate::session;
use crate::settings::AppSettings;
use crate::ui;

pub(crate) struct GraderApp {
    state: AppState,
    view: AppViewModel,
    runner: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
}

impl GraderApp {
    pub(crate) fn new(settings: AppSettings) -> Result<Self, ApiError> {
        let (msg_tx, msg_rx) = mpsc::channel();
        let runner = EffectRunner::new(
            settings.client,
            settings.auth,
            settings.session_dir.clone(),
            msg_tx.clone(),
        )?;

        // Resolve the auth context once at startup: an identity injected via
        // the environment is stored for the next launch; otherwise the stored
        // session decides.
        let resolution = match settings.bootstrap_identity {
            Some(identity) => {
                if let Err(err) = session::save_identity(&settings.session_dir, &identity) {
                    client_warn!("could not store bootstrap session: {}", err);
                }
                Ok(Some(identity))
            }
            None => session::load_identity(&settings.session_dir),
        };
        let _ = msg_tx.send(Msg::AuthResolved(resolution));

        let state = AppState::new();
        let view = state.view();
        Ok(Self {
            state,
            view,
            runner,
            msg_rx,
        })
    }

    fn dispatch(&mut self, msg: Msg, ctx: &egui::Context) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects, ctx);
    }
}

impl eframe::App for GraderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut inbox: Vec<Msg> = self.runner.poll_events();
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }

        ui::render(ctx, &self.view, &mut inbox);

        for msg in inbox {
            self.dispatch(msg, ctx);
        }
        if self.state.consume_dirty() {
            self.view = self.state.view();
        }

        // Engine events and ticker messages arrive over channels; poll for
        // them even while the user is idle.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
