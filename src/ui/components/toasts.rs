// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Short-lived, non-blocking notifications in the top-right corner.

use std::time::{Duration, Instant};

use eframe::egui;

/// How long a notification stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub is_error: bool,
    pub shown_at: Instant,
}

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct ToastsModel {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastsModel {
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastsMsg {
    Push {
        message: String,
        is_error: bool,
        now: Instant,
    },
    Expire(Instant),
    Dismiss(u64),
}

pub fn update(model: &mut ToastsModel, msg: ToastsMsg) {
    match msg {
        ToastsMsg::Push {
            message,
            is_error,
            now,
        } => {
            model.items.push(Toast {
                id: model.next_id,
                message,
                is_error,
                shown_at: now,
            });
            model.next_id += 1;
        }
        ToastsMsg::Expire(now) => model
            .items
            .retain(|t| now.saturating_duration_since(t.shown_at) < TOAST_TTL),
        ToastsMsg::Dismiss(id) => model.items.retain(|t| t.id != id),
    }
}

/// Render the stack; clicking a notification dismisses it early.
pub fn view(ctx: &egui::Context, model: &ToastsModel) -> Vec<ToastsMsg> {
    let mut msgs = Vec::new();
    if model.items.is_empty() {
        return msgs;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 48.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for toast in model.items() {
                let (icon, color) = if toast.is_error {
                    (egui_phosphor::regular::X_CIRCLE, ui.visuals().error_fg_color)
                } else {
                    (
                        egui_phosphor::regular::CHECK_CIRCLE,
                        egui::Color32::from_rgb(34, 139, 34),
                    )
                };
                let response = egui::Frame::popup(ui.style())
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(icon).color(color).size(18.0));
                            ui.label(&toast.message);
                        });
                    })
                    .response
                    .interact(egui::Sense::click());
                if response.clicked() {
                    msgs.push(ToastsMsg::Dismiss(toast.id));
                }
                ui.add_space(6.0);
            }
        });

    msgs
}
