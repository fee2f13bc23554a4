// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the registration form.
//! Handles layout, the event switcher, and wiring to the submission workers.

pub mod components;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;

use crate::logic::submit::Endpoint;
use crate::models::registry::FormRegistry;
use crate::mvu::{self, AppModel, Command, Msg};
use crate::ui::components::event_form::{self, EventFormMsg};
use crate::ui::components::toasts::{self, ToastsMsg};

/// How often to poll while work is in flight or notifications are visible.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Stateful egui application showing one event's registration form.
pub struct EventFormApp {
    model: AppModel,
    inbox: Vec<Msg>,
    assets: PathBuf,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl EventFormApp {
    /// Spawn `workers` submission threads and load the form for `event`.
    pub fn new(
        event: &str,
        assets: PathBuf,
        endpoint: Arc<dyn Endpoint>,
        workers: usize,
    ) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        for _ in 0..workers.max(1) {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            let endpoint = Arc::clone(&endpoint);
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd, endpoint.as_ref());
                    let _ = msg_tx.send(msg);
                }
            });
        }

        let mut app = Self {
            model: AppModel::default(),
            inbox: Vec::new(),
            assets,
            cmd_tx,
            msg_rx,
        };
        // Load before the first frame so no stale values are ever drawn.
        app.dispatch(Msg::Form(EventFormMsg::EventChanged(event.to_string())));
        app
    }

    /// Apply one message and hand resulting commands to the workers.
    fn dispatch(&mut self, msg: Msg) {
        let mut commands = Vec::new();
        mvu::update(&mut self.model, msg, &mut commands);
        for cmd in commands {
            if self.cmd_tx.send(cmd).is_ok() {
                self.model.pending_commands += 1;
            }
        }
    }
}

impl eframe::App for EventFormApp {
    /// Required by eframe 0.34; all rendering happens in `update`, which eframe
    /// still invokes right before this method each frame.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    /// Drives a single UI frame: drains worker results, applies queued messages,
    /// then renders the top bar, form, footer, notifications and completion modal.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        self.drain_worker_results();
        self.inbox.push(Msg::Toasts(ToastsMsg::Expire(Instant::now())));

        for msg in std::mem::take(&mut self.inbox) {
            self.dispatch(msg);
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let heading = self
                    .model
                    .form
                    .config()
                    .map_or("Event Registration", |c| c.title.as_str());
                ui.heading(heading);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_theme_controls(ui);
                    ui.separator();
                    self.render_event_switcher(ui);
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("footer")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_footer(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(12.0);
                let msgs = event_form::view(ui, &self.model.form, &self.assets);
                self.inbox.extend(msgs.into_iter().map(Msg::Form));
                ui.add_space(12.0);
            });
        });

        let modal_msgs = event_form::completion_view(ctx, &self.model.form);
        self.inbox.extend(modal_msgs.into_iter().map(Msg::Form));

        let toast_msgs = toasts::view(ctx, &self.model.toasts);
        self.inbox.extend(toast_msgs.into_iter().map(Msg::Toasts));

        if self.model.pending_commands > 0 || !self.model.toasts.is_empty() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
        if !self.inbox.is_empty() {
            ctx.request_repaint();
        }
    }
}

impl EventFormApp {
    /// Move finished command results into the inbox.
    fn drain_worker_results(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }
    }

    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    fn render_theme_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(2.0);
        egui::widgets::global_theme_preference_switch(ui);
    }

    /// Combo box standing in for URL routing: picking an entry reloads the form.
    fn render_event_switcher(&mut self, ui: &mut egui::Ui) {
        let current = self.model.form.event_key().to_string();
        let mut selected = current.clone();
        egui::ComboBox::from_id_salt("event_switcher")
            .selected_text(format!("{} {}", egui_phosphor::regular::CALENDAR, current))
            .show_ui(ui, |ui| {
                for key in FormRegistry::global().keys() {
                    ui.selectable_value(&mut selected, key.to_string(), key);
                }
            });
        ui.label("Event");
        if selected != current {
            self.inbox
                .push(Msg::Form(EventFormMsg::EventChanged(selected)));
        }
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.label("Powered by");
                ui.label(egui::RichText::new("Resourcio Community").strong());
                if self.model.pending_commands > 0 {
                    ui.separator();
                    ui.add(egui::Spinner::new().size(12.0))
                        .on_hover_text(format!(
                            "{} submission(s) in flight",
                            self.model.pending_commands
                        ));
                }
            });
        });
        ui.add_space(6.0);
    }
}
