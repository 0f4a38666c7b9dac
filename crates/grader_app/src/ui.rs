use client_logging::client_warn;
use grader_core::{AppViewModel, AuthState, FeedbackValue, InputMode, Msg};

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(236, 72, 153);

/// Renders the current view model and collects user intents as messages.
pub(crate) fn render(ctx: &egui::Context, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| match &view.auth {
            AuthState::Resolving => render_resolving(ui),
            AuthState::Failed(reason) => render_auth_failed(ui, reason, msgs),
            AuthState::SignedOut => render_signed_out(ui, msgs),
            AuthState::SignedIn(_) => render_main(ui, view, msgs),
        });
    });
}

fn render_resolving(ui: &mut egui::Ui) {
    ui.heading("AWS Content-Level Grader");
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label("Signing you in…");
    });
}

fn render_auth_failed(ui: &mut egui::Ui, reason: &str, msgs: &mut Vec<Msg>) {
    ui.heading("AWS Content-Level Grader");
    ui.add_space(8.0);
    ui.label("Hm, sign-in did not work.");
    ui.colored_label(ERROR_COLOR, reason);
    ui.add_space(8.0);
    if ui.button("Sign in again").clicked() {
        msgs.push(Msg::ResetAuthClicked);
    }
}

fn render_signed_out(ui: &mut egui::Ui, msgs: &mut Vec<Msg>) {
    ui.heading("AWS Content-Level Grader");
    ui.add_space(8.0);
    ui.label("Rates the AWS level of your technical content.");
    ui.add_space(8.0);
    if ui.button("Sign in to get started").clicked() {
        msgs.push(Msg::SignInClicked);
    }
}

fn render_main(ui: &mut egui::Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
        if ui.link("Sign out").clicked() {
            msgs.push(Msg::SignOutClicked);
        }
    });
    ui.heading("AWS Content-Level Grader");
    ui.add_space(8.0);
    ui.label("Paste your output below and a rather clever model will rate its AWS level.");
    ui.add_space(8.0);

    render_mode_tabs(ui, view, msgs);
    ui.add_space(4.0);
    render_input(ui, view, msgs);
    ui.add_space(8.0);

    let submit_label = if view.evaluating {
        "⌛ Analyzing…"
    } else {
        "Rate my content!"
    };
    if ui
        .add_enabled(view.can_submit, egui::Button::new(submit_label))
        .clicked()
    {
        msgs.push(Msg::SubmitClicked);
    }
    if view.evaluating {
        if let Some(percent) = view.eval_percent {
            ui.add(egui::ProgressBar::new(f32::from(percent) / 100.0).show_percentage());
        }
    }

    if let Some(error) = &view.error {
        ui.add_space(4.0);
        ui.colored_label(ERROR_COLOR, error);
    }

    if view.has_result {
        ui.add_space(8.0);
        render_result(ui, view, msgs);
    }

    ui.add_space(12.0);
    render_rating_scale(ui);
}

fn render_mode_tabs(ui: &mut egui::Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    ui.horizontal(|ui| {
        for (mode, label) in [
            (InputMode::Text, "Paste text"),
            (InputMode::Url, "From URL"),
            (InputMode::Document, "PDF upload"),
        ] {
            if ui.selectable_label(view.mode == mode, label).clicked() {
                msgs.push(Msg::ModeSelected(mode));
            }
        }
    });
}

fn render_input(ui: &mut egui::Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    match view.mode {
        InputMode::Text => {
            let mut text = view.draft_text.clone();
            let response = ui.add(
                egui::TextEdit::multiline(&mut text)
                    .desired_rows(10)
                    .desired_width(f32::INFINITY)
                    .hint_text("Paste the blog post or talk material you want rated, as plain text"),
            );
            if response.changed() {
                msgs.push(Msg::DraftEdited(text));
            }
        }
        InputMode::Url => {
            let mut text = view.draft_text.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .desired_width(f32::INFINITY)
                    .hint_text("https://example.com/my-blog-post"),
            );
            if response.changed() {
                msgs.push(Msg::DraftEdited(text));
            }
        }
        InputMode::Document => {
            ui.horizontal(|ui| {
                if ui.button("Choose PDF…").clicked() {
                    if let Some(msg) = pick_document() {
                        msgs.push(msg);
                    }
                }
                match &view.document_name {
                    Some(name) => {
                        ui.label(name);
                        if ui.small_button("✖").clicked() {
                            msgs.push(Msg::DocumentCleared);
                        }
                    }
                    None => {
                        ui.weak("No file chosen (5 MiB max)");
                    }
                }
            });
        }
    }
}

fn pick_document() -> Option<Msg> {
    let path = rfd::FileDialog::new()
        .add_filter("PDF documents", &["pdf"])
        .pick_file()?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document.pdf".to_string());
    match std::fs::read(&path) {
        Ok(bytes) => Some(Msg::DocumentPicked { file_name, bytes }),
        Err(err) => {
            client_warn!("could not read {:?}: {}", path, err);
            None
        }
    }
}

fn render_result(ui: &mut egui::Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    ui.group(|ui| {
        for paragraph in &view.paragraphs {
            ui.label(paragraph);
            ui.add_space(4.0);
        }
        ui.separator();
        ui.horizontal(|ui| {
            let share_label = if view.sharing {
                "⌛ Writing your post…"
            } else {
                "Post on X"
            };
            if ui
                .add_enabled(view.can_share, egui::Button::new(share_label))
                .clicked()
            {
                msgs.push(Msg::ShareClicked);
            }

            let up_label = if view.feedback == Some(FeedbackValue::Up) {
                "✅"
            } else {
                "👍"
            };
            let down_label = if view.feedback == Some(FeedbackValue::Down) {
                "✅"
            } else {
                "👎"
            };
            if ui
                .add_enabled(view.can_give_feedback, egui::Button::new(up_label))
                .clicked()
            {
                msgs.push(Msg::FeedbackClicked(FeedbackValue::Up));
            }
            if ui
                .add_enabled(view.can_give_feedback, egui::Button::new(down_label))
                .clicked()
            {
                msgs.push(Msg::FeedbackClicked(FeedbackValue::Down));
            }
        });
        if view.sharing {
            if let Some(percent) = view.share_percent {
                ui.add(egui::ProgressBar::new(f32::from(percent) / 100.0).show_percentage());
            }
        }
    });
}

fn render_rating_scale(ui: &mut egui::Ui) {
    ui.weak("The rating scale, for reference only:");
    ui.weak("Level 100: introduces an AWS service at overview depth");
    ui.weak("Level 200: assumes introductory topic knowledge; covers best practices and service features");
    ui.weak("Level 300: a deep dive into the details of the chosen topic");
    ui.weak("Level 400: how the technology works across multiple services and architectures");
}
