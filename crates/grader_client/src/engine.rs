use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::{client_info, client_warn};

use crate::api::{ApiClient, ContentApi};
use crate::score::ScoreClient;
use crate::{ApiError, Caller, ClientEvent, ClientSettings, FeedbackScore, SubmissionInput};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    /// Normalize the input into plain text and run one evaluation.
    Submit {
        input: SubmissionInput,
        caller: Caller,
    },
    /// Derive a shareable post from a prior result.
    DeriveShareText {
        eval_result: String,
        session_id: String,
        caller: Caller,
    },
    /// Fire-and-forget judgment recording; failures are only logged.
    RecordFeedback {
        trace_id: String,
        score: FeedbackScore,
    },
}

/// Handle to the client worker thread. Commands go in over a channel; the
/// owning thread runs a tokio runtime and reports `ClientEvent`s back.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(ApiClient::new(settings.clone())?);
        let scores = ScoreClient::new(&settings)?;

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let scores = scores.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), &scores, command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, input: SubmissionInput, caller: Caller) {
        let _ = self.cmd_tx.send(ClientCommand::Submit { input, caller });
    }

    pub fn derive_share_text(&self, eval_result: String, session_id: String, caller: Caller) {
        let _ = self.cmd_tx.send(ClientCommand::DeriveShareText {
            eval_result,
            session_id,
            caller,
        });
    }

    pub fn record_feedback(&self, trace_id: String, score: FeedbackScore) {
        let _ = self
            .cmd_tx
            .send(ClientCommand::RecordFeedback { trace_id, score });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn ContentApi,
    scores: &ScoreClient,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Submit { input, caller } => {
            let result = normalize_and_evaluate(api, input, &caller).await;
            if let Err(err) = &result {
                client_warn!("evaluation failed: {}", err);
            }
            let _ = event_tx.send(ClientEvent::EvaluationFinished(result));
        }
        ClientCommand::DeriveShareText {
            eval_result,
            session_id,
            caller,
        } => {
            let result = api
                .derive_share_text(&eval_result, &session_id, &caller)
                .await;
            if let Err(err) = &result {
                client_warn!("share text generation failed: {}", err);
            }
            let _ = event_tx.send(ClientEvent::ShareTextReady(result));
        }
        ClientCommand::RecordFeedback { trace_id, score } => {
            match scores.record(&trace_id, score).await {
                Ok(()) => client_info!("recorded feedback for trace {}", trace_id),
                Err(err) => client_warn!("feedback recording failed: {}", err),
            }
        }
    }
}

/// Input Normalizer: collapses the three input modes into one plain-text
/// payload, then hands it to the evaluator.
async fn normalize_and_evaluate(
    api: &dyn ContentApi,
    input: SubmissionInput,
    caller: &Caller,
) -> Result<crate::EvaluationRecord, ApiError> {
    let text = match input {
        SubmissionInput::Text(text) => text,
        SubmissionInput::Url(url) => api.extract_url(&url, caller).await?,
        SubmissionInput::Document { file_name, bytes } => {
            client_info!("extracting text from {} ({} bytes)", file_name, bytes.len());
            api.extract_document(&bytes, caller).await?
        }
    };
    api.evaluate(&text, caller).await
}
