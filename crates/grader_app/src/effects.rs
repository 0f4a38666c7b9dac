use std::path::PathBuf;
use std::sync::mpsc;

use client_logging::client_info;
use grader_client::{
    ApiError, Caller, ClientEvent, ClientHandle, ClientSettings, FeedbackScore, SubmissionInput,
};
use grader_core::{
    Effect, Evaluation, EvaluationOutcome, FeedbackValue, Identity, Msg, Operation, ShareOutcome,
    SubmissionPayload,
};

use crate::session;
use crate::settings::AuthSettings;
use crate::ticker::{ProgressTicker, TICK_PERIOD};

/// Executes core effects: engine commands, progress-ticker lifecycle,
/// browser handoffs, and stored-session maintenance.
pub(crate) struct EffectRunner {
    engine: ClientHandle,
    msg_tx: mpsc::Sender<Msg>,
    eval_ticker: Option<ProgressTicker>,
    share_ticker: Option<ProgressTicker>,
    auth: AuthSettings,
    session_dir: PathBuf,
}

impl EffectRunner {
    pub(crate) fn new(
        client_settings: ClientSettings,
        auth: AuthSettings,
        session_dir: PathBuf,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            engine: ClientHandle::new(client_settings)?,
            msg_tx,
            eval_ticker: None,
            share_ticker: None,
            auth,
            session_dir,
        })
    }

    /// Drains engine events into core messages.
    pub(crate) fn poll_events(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            msgs.push(match event {
                ClientEvent::EvaluationFinished(Ok(record)) => {
                    Msg::EvaluationFinished(EvaluationOutcome::Success(Evaluation {
                        message: record.message,
                        trace_id: record.trace_id,
                        session_id: record.session_id,
                    }))
                }
                // Failure detail is already logged by the engine; the core
                // only shows one static message.
                ClientEvent::EvaluationFinished(Err(_)) => {
                    Msg::EvaluationFinished(EvaluationOutcome::Failed)
                }
                ClientEvent::ShareTextReady(Ok(text)) => {
                    Msg::ShareTextFinished(ShareOutcome::Success(text))
                }
                ClientEvent::ShareTextReady(Err(_)) => {
                    Msg::ShareTextFinished(ShareOutcome::Failed)
                }
            });
        }
        msgs
    }

    pub(crate) fn run(&mut self, effects: Vec<Effect>, ctx: &egui::Context) {
        for effect in effects {
            match effect {
                Effect::SubmitEvaluation { payload, identity } => {
                    self.engine.submit(map_payload(payload), map_caller(identity));
                }
                Effect::RequestShareText {
                    eval_result,
                    session_id,
                    identity,
                } => {
                    self.engine
                        .derive_share_text(eval_result, session_id, map_caller(identity));
                }
                Effect::RecordFeedback { trace_id, value } => {
                    self.engine.record_feedback(trace_id, map_feedback(value));
                }
                Effect::StartProgress(operation) => {
                    let ticker =
                        ProgressTicker::start(operation, self.msg_tx.clone(), TICK_PERIOD);
                    // Replacing an old ticker drops and thereby cancels it.
                    *self.ticker_slot(operation) = Some(ticker);
                }
                Effect::StopProgress(operation) => {
                    if let Some(ticker) = self.ticker_slot(operation).take() {
                        ticker.cancel();
                    }
                }
                Effect::OpenUrl { url } => {
                    client_info!("opening {}", url);
                    ctx.open_url(egui::OpenUrl::new_tab(url));
                }
                Effect::BeginSignIn => {
                    ctx.open_url(egui::OpenUrl::new_tab(self.auth.sign_in_url()));
                }
                Effect::BeginSignOut => {
                    session::clear(&self.session_dir);
                    ctx.open_url(egui::OpenUrl::new_tab(self.auth.logout_url()));
                }
                Effect::ClearStoredSession => {
                    session::clear(&self.session_dir);
                }
            }
        }
    }

    fn ticker_slot(&mut self, operation: Operation) -> &mut Option<ProgressTicker> {
        match operation {
            Operation::Evaluation => &mut self.eval_ticker,
            Operation::Share => &mut self.share_ticker,
        }
    }
}

fn map_payload(payload: SubmissionPayload) -> SubmissionInput {
    match payload {
        SubmissionPayload::Text(text) => SubmissionInput::Text(text),
        SubmissionPayload::Url(url) => SubmissionInput::Url(url),
        SubmissionPayload::Document { file_name, bytes } => {
            SubmissionInput::Document { file_name, bytes }
        }
    }
}

fn map_caller(identity: Identity) -> Caller {
    Caller {
        id_token: identity.id_token,
        email: identity.email,
    }
}

fn map_feedback(value: FeedbackValue) -> FeedbackScore {
    match value {
        FeedbackValue::Up => FeedbackScore::Up,
        FeedbackValue::Down => FeedbackScore::Down,
    }
}
