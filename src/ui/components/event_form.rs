// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Registration form for the selected event: field state, validation and submission.

use std::path::Path;

use eframe::egui;
use serde_json::Value;

use crate::logic::submit::{batch, build_record};
use crate::models::form::{FieldKind, FieldSpec, FormConfig};
use crate::models::registry::FormRegistry;
use crate::models::submission::{FAILURE_MESSAGE, SUCCESS_MESSAGE, SubmissionState};
use crate::models::validation::{FormError, validate};
use crate::models::values::{COUNTRY_CODES, FieldValues};

/// State owned by the currently displayed form.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct EventFormModel {
    event_key: String,
    config: Option<FormConfig>,
    values: FieldValues,
    state: SubmissionState,
    /// Bumped whenever the form is replaced; results tagged with an older value are stale.
    generation: u64,
    completion_open: bool,
}

impl EventFormModel {
    pub fn event_key(&self) -> &str {
        &self.event_key
    }

    /// Active form, `None` for unknown events.
    pub fn config(&self) -> Option<&FormConfig> {
        self.config.as_ref()
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn completion_open(&self) -> bool {
        self.completion_open
    }
}

/// Messages emitted by the form view or routed from the worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventFormMsg {
    EventChanged(String),
    FieldChanged { name: String, value: String },
    CountryCodeChanged(String),
    SubmitRequested,
    SubmitFinished {
        generation: u64,
        result: Result<(), String>,
    },
    DismissCompletion,
}

/// Side effects requested by the form.
#[derive(Clone, Debug, PartialEq)]
pub enum EventFormCommand {
    Submit { generation: u64, body: Value },
}

/// Feedback surfaced as a transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventFormEvent {
    pub message: String,
    pub is_error: bool,
}

impl EventFormEvent {
    fn error(err: &FormError) -> Self {
        Self {
            message: err.notice(),
            is_error: true,
        }
    }
}

/// Apply a message to the model. Returns a notification when relevant.
pub fn update(
    model: &mut EventFormModel,
    msg: EventFormMsg,
    cmds: &mut Vec<EventFormCommand>,
) -> Option<EventFormEvent> {
    match msg {
        EventFormMsg::EventChanged(key) => {
            load_event(model, key);
            None
        }
        EventFormMsg::FieldChanged { name, value } => {
            if model.values.set(&name, value) {
                model.state.settle();
            } else {
                tracing::warn!(field = %name, event = %model.event_key, "ignoring edit for unknown field");
            }
            None
        }
        EventFormMsg::CountryCodeChanged(code) => {
            model.values.set_country_code(code);
            model.state.settle();
            None
        }
        EventFormMsg::SubmitRequested => submit(model, cmds),
        EventFormMsg::SubmitFinished { generation, result } => {
            finish_submission(model, generation, result)
        }
        EventFormMsg::DismissCompletion => {
            model.completion_open = false;
            None
        }
    }
}

/// Replace the form with the one registered for `key`.
fn load_event(model: &mut EventFormModel, key: String) {
    let config = FormRegistry::global().lookup(&key).cloned();
    match &config {
        Some(config) => tracing::debug!(event = %key, fields = config.fields.len(), "loaded form"),
        None => tracing::debug!(event = %key, "no form registered for event"),
    }

    model.values = config
        .as_ref()
        .map(FieldValues::for_config)
        .unwrap_or_default();
    model.config = config;
    model.event_key = key;
    model.state.reset();
    model.generation += 1;
    model.completion_open = false;
}

fn submit(model: &mut EventFormModel, cmds: &mut Vec<EventFormCommand>) -> Option<EventFormEvent> {
    let config = model.config.as_ref()?;

    if let Err(err) = validate(config, &model.values) {
        if model.state.is_pending() {
            return None;
        }
        tracing::debug!(event = %model.event_key, error = %err, "validation failed");
        model.state.fail(err.to_string());
        return Some(EventFormEvent::error(&err));
    }

    if !model.state.begin() {
        tracing::debug!(event = %model.event_key, "submission already in flight");
        return None;
    }
    let body = batch(build_record(&model.event_key, config, &model.values));
    tracing::info!(event = %model.event_key, generation = model.generation, "submitting registration");
    cmds.push(EventFormCommand::Submit {
        generation: model.generation,
        body,
    });
    None
}

fn finish_submission(
    model: &mut EventFormModel,
    generation: u64,
    result: Result<(), String>,
) -> Option<EventFormEvent> {
    if generation != model.generation {
        tracing::warn!(
            stale = generation,
            current = model.generation,
            "discarding result for a form that is no longer displayed"
        );
        return None;
    }

    match result {
        Ok(()) => {
            tracing::info!(event = %model.event_key, "registration accepted");
            model.state.succeed(SUCCESS_MESSAGE);
            model.values.clear();
            model.completion_open = true;
            Some(EventFormEvent {
                message: SUCCESS_MESSAGE.to_string(),
                is_error: false,
            })
        }
        Err(err) => {
            tracing::warn!(event = %model.event_key, error = %err, "registration failed");
            model.state.fail(FAILURE_MESSAGE);
            Some(EventFormEvent::error(&FormError::SubmissionFailed))
        }
    }
}

/// Render the form and return triggered messages. Unknown events render nothing.
pub fn view(ui: &mut egui::Ui, model: &EventFormModel, assets: &Path) -> Vec<EventFormMsg> {
    let mut msgs = Vec::new();
    let Some(config) = model.config() else {
        return msgs;
    };

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(24))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            render_header(ui, config, assets);
            ui.add_space(16.0);

            for field in &config.fields {
                render_field(ui, field, model.values(), &mut msgs);
                ui.add_space(10.0);
            }

            ui.add_space(6.0);
            render_submit(ui, model.state(), &mut msgs);
        });

    msgs
}

fn render_header(ui: &mut egui::Ui, config: &FormConfig, assets: &Path) {
    ui.horizontal(|ui| {
        ui.add(
            egui::Image::new(logo_uri(assets, config))
                .max_size(egui::vec2(100.0, 100.0))
                .corner_radius(12.0),
        );
        ui.add_space(16.0);
        ui.vertical(|ui| {
            ui.heading(egui::RichText::new(&config.title).size(28.0).strong());
            ui.add_space(4.0);
            ui.label(&config.description);
        });
    });
}

/// `file://` URI of the form's logo, resolved through the `egui_extras` file loader.
fn logo_uri(assets: &Path, config: &FormConfig) -> String {
    format!("file://{}", assets.join(&config.logo_path).display())
}

fn render_field(
    ui: &mut egui::Ui,
    field: &FieldSpec,
    values: &FieldValues,
    msgs: &mut Vec<EventFormMsg>,
) {
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.clone()
    };
    ui.label(egui::RichText::new(label).strong());
    ui.add_space(2.0);

    let mut value = values.get(&field.name).to_string();
    let hint = field.placeholder.as_deref().unwrap_or_default();

    let changed = match field.kind {
        FieldKind::Textarea => ui
            .add(
                egui::TextEdit::multiline(&mut value)
                    .id_salt(&field.name)
                    .hint_text(hint)
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            )
            .changed(),
        FieldKind::Phone => {
            ui.horizontal(|ui| {
                render_country_code(ui, values.country_code(), msgs);
                ui.add(
                    egui::TextEdit::singleline(&mut value)
                        .id_salt(&field.name)
                        .hint_text(hint)
                        .desired_width(f32::INFINITY),
                )
                .changed()
            })
            .inner
        }
        FieldKind::Text | FieldKind::Email | FieldKind::Url => ui
            .add(
                egui::TextEdit::singleline(&mut value)
                    .id_salt(&field.name)
                    .hint_text(hint)
                    .desired_width(f32::INFINITY),
            )
            .changed(),
    };

    if changed {
        msgs.push(EventFormMsg::FieldChanged {
            name: field.name.clone(),
            value,
        });
    }
}

fn render_country_code(ui: &mut egui::Ui, current: &str, msgs: &mut Vec<EventFormMsg>) {
    let mut selected = current.to_string();
    egui::ComboBox::from_id_salt("country_code")
        .selected_text(&selected)
        .width(72.0)
        .show_ui(ui, |ui| {
            for code in COUNTRY_CODES {
                ui.selectable_value(&mut selected, code.to_string(), code);
            }
        });
    if selected != current {
        msgs.push(EventFormMsg::CountryCodeChanged(selected));
    }
}

fn render_submit(ui: &mut egui::Ui, state: &SubmissionState, msgs: &mut Vec<EventFormMsg>) {
    let pending = state.is_pending();
    let text = if pending {
        "Submitting...".to_string()
    } else {
        format!("{} Register", egui_phosphor::regular::PAPER_PLANE_TILT)
    };
    let button = egui::Button::new(egui::RichText::new(text).size(18.0).strong())
        .min_size(egui::vec2(ui.available_width(), 40.0));

    if ui
        .add_enabled(!pending, button)
        .on_disabled_hover_text("Waiting for the registration to be accepted")
        .clicked()
    {
        msgs.push(EventFormMsg::SubmitRequested);
    }

    ui.horizontal(|ui| {
        if pending {
            ui.add(egui::Spinner::new().size(14.0));
        }
        if let Some(msg) = state.message() {
            let color = if matches!(state, SubmissionState::Error(_)) {
                ui.visuals().error_fg_color
            } else {
                egui::Color32::from_rgb(34, 139, 34)
            };
            ui.colored_label(color, msg);
        }
    });
}

/// Acknowledgment shown after a successful registration; only the Close button dismisses it.
pub fn completion_view(ctx: &egui::Context, model: &EventFormModel) -> Vec<EventFormMsg> {
    let mut msgs = Vec::new();
    if !model.completion_open() {
        return msgs;
    }

    egui::Window::new("Registration Successful!")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::CHECK_CIRCLE)
                        .size(56.0)
                        .color(egui::Color32::from_rgb(34, 197, 94)),
                );
                ui.add_space(8.0);
                ui.label("Thank you for registering. We will contact you soon.");
                ui.add_space(12.0);
                if ui.button("Close").clicked() {
                    msgs.push(EventFormMsg::DismissCompletion);
                }
            });
        });

    msgs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(event: &str) -> EventFormModel {
        let mut model = EventFormModel::default();
        let mut cmds = Vec::new();
        update(&mut model, EventFormMsg::EventChanged(event.into()), &mut cmds);
        assert!(cmds.is_empty());
        model
    }

    fn edit(model: &mut EventFormModel, name: &str, value: &str) {
        let mut cmds = Vec::new();
        update(
            model,
            EventFormMsg::FieldChanged {
                name: name.into(),
                value: value.into(),
            },
            &mut cmds,
        );
        assert!(cmds.is_empty(), "edits never enqueue commands");
    }

    fn fill_meetup(model: &mut EventFormModel) {
        edit(model, "name", "Ada Lovelace");
        edit(model, "email", "ada@example.com");
        edit(model, "phone", "7911123456");
    }

    #[test]
    fn unknown_event_has_no_form_and_no_error() {
        let model = loaded("conference");

        assert!(model.config().is_none());
        assert_eq!(model.state(), &SubmissionState::Idle);
        assert!(model.values().is_blank());
    }

    #[test]
    fn submit_without_form_is_ignored() {
        let mut model = loaded("conference");
        let mut cmds = Vec::new();

        let event = update(&mut model, EventFormMsg::SubmitRequested, &mut cmds);

        assert!(event.is_none());
        assert!(cmds.is_empty());
    }

    #[test]
    fn changing_event_resets_values_and_state() {
        let mut model = loaded("meetup");
        fill_meetup(&mut model);
        update(
            &mut model,
            EventFormMsg::CountryCodeChanged("+44".into()),
            &mut Vec::new(),
        );
        model.state.fail("Invalid email address");

        update(
            &mut model,
            EventFormMsg::EventChanged("hackathon".into()),
            &mut Vec::new(),
        );

        assert!(model.values().is_blank());
        assert_eq!(model.values().country_code(), "+91");
        assert_eq!(model.values().get("github"), "");
        assert_eq!(model.state(), &SubmissionState::Idle);
        assert_eq!(model.event_key(), "hackathon");
    }

    #[test]
    fn edit_clears_error_status() {
        let mut model = loaded("meetup");
        model.state.fail("Invalid email address");

        edit(&mut model, "email", "ada@example.com");

        assert_eq!(model.state(), &SubmissionState::Idle);
    }

    #[test]
    fn missing_required_field_never_submits() {
        let mut model = loaded("meetup");
        edit(&mut model, "email", "ada@example.com");
        let mut cmds = Vec::new();

        let event = update(&mut model, EventFormMsg::SubmitRequested, &mut cmds).unwrap();

        assert!(cmds.is_empty());
        assert!(event.is_error);
        assert_eq!(
            model.state(),
            &SubmissionState::Error("Please fill in Full Name.".into())
        );
        assert_eq!(model.values().get("email"), "ada@example.com");
    }

    #[test]
    fn invalid_email_sets_error_and_keeps_values() {
        let mut model = loaded("meetup");
        edit(&mut model, "name", "Ada");
        edit(&mut model, "email", "ada@");
        let mut cmds = Vec::new();

        let event = update(&mut model, EventFormMsg::SubmitRequested, &mut cmds).unwrap();

        assert!(cmds.is_empty());
        assert_eq!(event.message, "Invalid email address");
        assert_eq!(
            model.state(),
            &SubmissionState::Error("Invalid email address".into())
        );
        assert_eq!(model.values().get("email"), "ada@");
    }

    #[test]
    fn invalid_phone_shows_digit_hint() {
        let mut model = loaded("team");
        edit(&mut model, "name", "Ada");
        edit(&mut model, "email", "ada@example.com");
        edit(&mut model, "phone", "12-34");
        let mut cmds = Vec::new();

        let event = update(&mut model, EventFormMsg::SubmitRequested, &mut cmds).unwrap();

        assert!(cmds.is_empty());
        assert_eq!(event.message, "Phone must be 7–15 digits");
        assert_eq!(
            model.state(),
            &SubmissionState::Error("Invalid phone number".into())
        );
    }

    #[test]
    fn valid_submit_goes_pending_with_payload() {
        let mut model = loaded("meetup");
        fill_meetup(&mut model);
        update(
            &mut model,
            EventFormMsg::CountryCodeChanged("+44".into()),
            &mut Vec::new(),
        );
        let mut cmds = Vec::new();

        let event = update(&mut model, EventFormMsg::SubmitRequested, &mut cmds);

        assert!(event.is_none());
        assert!(model.state().is_pending());
        assert_eq!(cmds.len(), 1);
        let EventFormCommand::Submit { generation, body } = &cmds[0];
        assert_eq!(*generation, model.generation());
        assert_eq!(body["data"][0]["phone"], "+447911123456");
        assert_eq!(body["data"][0]["event"], "meetup");
    }

    #[test]
    fn second_submit_while_pending_is_rejected() {
        let mut model = loaded("meetup");
        fill_meetup(&mut model);
        let mut cmds = Vec::new();

        update(&mut model, EventFormMsg::SubmitRequested, &mut cmds);
        update(&mut model, EventFormMsg::SubmitRequested, &mut cmds);

        assert_eq!(cmds.len(), 1);
        assert!(model.state().is_pending());
    }

    #[test]
    fn edit_while_pending_keeps_submit_locked() {
        let mut model = loaded("meetup");
        fill_meetup(&mut model);
        update(&mut model, EventFormMsg::SubmitRequested, &mut Vec::new());

        edit(&mut model, "expectations", "Networking");

        assert!(model.state().is_pending());
    }

    #[test]
    fn invalid_resubmit_while_pending_keeps_lock() {
        let mut model = loaded("meetup");
        fill_meetup(&mut model);
        let mut cmds = Vec::new();
        update(&mut model, EventFormMsg::SubmitRequested, &mut cmds);

        edit(&mut model, "email", "not-an-email");
        let event = update(&mut model, EventFormMsg::SubmitRequested, &mut cmds);

        assert!(event.is_none());
        assert_eq!(cmds.len(), 1);
        assert!(model.state().is_pending());
    }

    #[test]
    fn failure_keeps_entered_values() {
        let mut model = loaded("meetup");
        fill_meetup(&mut model);
        update(&mut model, EventFormMsg::SubmitRequested, &mut Vec::new());
        let before = model.values().clone();

        let generation = model.generation();

        let event = update(
            &mut model,
            EventFormMsg::SubmitFinished {
                generation,
                result: Err("status 500".into()),
            },
            &mut Vec::new(),
        )
        .unwrap();

        assert!(event.is_error);
        assert_eq!(event.message, "Submission failed!");
        assert_eq!(
            model.state(),
            &SubmissionState::Error("Submission failed!".into())
        );
        assert_eq!(model.values(), &before);
        assert!(!model.completion_open());
    }

    #[test]
    fn success_clears_fields_but_not_country_code() {
        let mut model = loaded("meetup");
        fill_meetup(&mut model);
        update(
            &mut model,
            EventFormMsg::CountryCodeChanged("+61".into()),
            &mut Vec::new(),
        );
        update(&mut model, EventFormMsg::SubmitRequested, &mut Vec::new());

        let generation = model.generation();

        let event = update(
            &mut model,
            EventFormMsg::SubmitFinished {
                generation,
                result: Ok(()),
            },
            &mut Vec::new(),
        )
        .unwrap();

        assert!(!event.is_error);
        assert_eq!(event.message, "Registered successfully!");
        assert_eq!(
            model.state(),
            &SubmissionState::Success("Registered successfully!".into())
        );
        assert!(model.values().is_blank());
        assert_eq!(model.values().country_code(), "+61");
        assert!(model.completion_open());
    }

    #[test]
    fn dismissing_completion_keeps_state_and_values() {
        let mut model = loaded("meetup");
        fill_meetup(&mut model);
        update(&mut model, EventFormMsg::SubmitRequested, &mut Vec::new());
        let generation = model.generation();
        update(
            &mut model,
            EventFormMsg::SubmitFinished {
                generation,
                result: Ok(()),
            },
            &mut Vec::new(),
        );
        let state = model.state().clone();
        let values = model.values().clone();

        update(&mut model, EventFormMsg::DismissCompletion, &mut Vec::new());

        assert!(!model.completion_open());
        assert_eq!(model.state(), &state);
        assert_eq!(model.values(), &values);
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut model = loaded("meetup");
        fill_meetup(&mut model);
        update(&mut model, EventFormMsg::SubmitRequested, &mut Vec::new());
        let stale = model.generation();

        update(
            &mut model,
            EventFormMsg::EventChanged("team".into()),
            &mut Vec::new(),
        );
        edit(&mut model, "name", "Grace");

        let event = update(
            &mut model,
            EventFormMsg::SubmitFinished {
                generation: stale,
                result: Ok(()),
            },
            &mut Vec::new(),
        );

        assert!(event.is_none());
        assert_eq!(model.state(), &SubmissionState::Idle);
        assert_eq!(model.values().get("name"), "Grace");
        assert!(!model.completion_open());
    }

    #[test]
    fn unknown_field_edits_are_ignored() {
        let mut model = loaded("workshop");
        edit(&mut model, "phone", "1234567");

        assert_eq!(model.values().get("phone"), "");
        assert!(model.values().is_blank());
    }

    #[test]
    fn every_registered_logo_loads_from_assets() {
        let ctx = egui::Context::default();
        egui_extras::install_image_loaders(&ctx);
        let assets = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");

        for key in FormRegistry::global().keys() {
            let config = FormRegistry::global().lookup(key).unwrap();
            let uri = logo_uri(&assets, config);

            let mut ready = false;
            for _ in 0..200 {
                match ctx.try_load_bytes(&uri) {
                    Ok(egui::load::BytesPoll::Ready { bytes, .. }) => {
                        assert!(!bytes.is_empty(), "{uri} is empty");
                        ready = true;
                        break;
                    }
                    Ok(egui::load::BytesPoll::Pending { .. }) => {
                        std::thread::sleep(std::time::Duration::from_millis(10));
                    }
                    Err(err) => panic!("{key}: failed to load {uri}: {err}"),
                }
            }
            assert!(ready, "{uri} never finished loading");
        }
    }
}
