// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use std::time::Instant;

use serde_json::Value;

use crate::logic::submit::Endpoint;
use crate::ui::components::event_form::{
    self, EventFormCommand, EventFormEvent, EventFormModel, EventFormMsg,
};
use crate::ui::components::toasts::{self, ToastsModel, ToastsMsg};

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Registration form for the selected event.
    pub form: EventFormModel,
    /// Transient notifications.
    pub toasts: ToastsModel,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

/// Application messages routed through the update function.
pub enum Msg {
    Form(EventFormMsg),
    Toasts(ToastsMsg),
}

/// Commands represent side-effects executed between frames.
pub enum Command {
    SubmitRegistration { generation: u64, body: Value },
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Form(m) => {
            let mut form_cmds = Vec::new();
            if let Some(event) = event_form::update(&mut model.form, m, &mut form_cmds) {
                surface_event(model, event);
            }
            for c in form_cmds {
                match c {
                    EventFormCommand::Submit { generation, body } => {
                        cmds.push(Command::SubmitRegistration { generation, body })
                    }
                }
            }
        }
        Msg::Toasts(m) => toasts::update(&mut model.toasts, m),
    }
}

/// Execute a command on a worker thread and return the resulting message.
pub fn run_command(cmd: Command, endpoint: &dyn Endpoint) -> Msg {
    match cmd {
        Command::SubmitRegistration { generation, body } => {
            let result = endpoint.submit(&body).map_err(|err| format!("{err:#}"));
            Msg::Form(EventFormMsg::SubmitFinished { generation, result })
        }
    }
}

/// Turn component feedback into a notification.
fn surface_event(model: &mut AppModel, event: EventFormEvent) {
    toasts::update(
        &mut model.toasts,
        ToastsMsg::Push {
            message: event.message,
            is_error: event.is_error,
            now: Instant::now(),
        },
    );
}
