// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Static table of event forms, fixed at startup.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::models::form::{FieldKind, FieldSpec, FormConfig};

/// Identifier used when the caller does not name an event.
pub const DEFAULT_EVENT: &str = "meetup";

static REGISTRY: LazyLock<FormRegistry> = LazyLock::new(FormRegistry::builtin);

/// Immutable mapping from lowercase event identifier to its form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormRegistry {
    forms: BTreeMap<String, FormConfig>,
}

impl FormRegistry {
    /// Shared process-wide registry.
    pub fn global() -> &'static FormRegistry {
        &REGISTRY
    }

    /// Resolve a form. Unknown identifiers yield `None`.
    pub fn lookup(&self, event_key: &str) -> Option<&FormConfig> {
        self.forms.get(event_key)
    }

    /// Recognized identifiers in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.forms.keys().map(String::as_str)
    }

    fn builtin() -> Self {
        let forms = [
            (
                "hackathon",
                FormConfig {
                    logo_path: "logos/resourciologo.svg".into(),
                    title: "Hackathon 2025".into(),
                    description: "Innovate, code, and compete in 36 hours!".into(),
                    fields: vec![
                        full_name(),
                        email(),
                        FieldSpec::new("Team Name", "team", FieldKind::Text)
                            .placeholder("Enter your team name"),
                        FieldSpec::new("GitHub Link", "github", FieldKind::Url)
                            .placeholder("https://github.com/username"),
                        expectations("What do you expect from this event?"),
                    ],
                },
            ),
            (
                "workshop",
                FormConfig {
                    logo_path: "logos/resourciologo.svg".into(),
                    title: "Workshop 2025".into(),
                    description: "Learn hands-on skills with expert guidance.".into(),
                    fields: vec![
                        full_name(),
                        email(),
                        FieldSpec::new("College / Organization", "organization", FieldKind::Text)
                            .placeholder("Enter your college/organization"),
                        FieldSpec::new("Skill Level", "skill", FieldKind::Text)
                            .placeholder("Beginner / Intermediate / Advanced"),
                        expectations("What do you expect from this workshop?"),
                    ],
                },
            ),
            (
                "meetup",
                FormConfig {
                    logo_path: "logos/apertrelogo.svg".into(),
                    title: "Meetup 2025".into(),
                    description: "Connect with experts and enthusiasts.".into(),
                    fields: vec![
                        full_name(),
                        email(),
                        phone(),
                        expectations("What do you expect from this meetup?"),
                    ],
                },
            ),
            (
                "team",
                FormConfig {
                    logo_path: "logos/resourciologo.svg".into(),
                    title: "Team Registration".into(),
                    description: "Join our team and collaborate on exciting projects!".into(),
                    fields: vec![
                        full_name(),
                        email(),
                        phone(),
                        expectations("What do you expect from joining this team?"),
                    ],
                },
            ),
        ];

        Self {
            forms: forms
                .into_iter()
                .map(|(key, config)| (key.to_string(), config))
                .collect(),
        }
    }
}

fn full_name() -> FieldSpec {
    FieldSpec::new("Full Name", "name", FieldKind::Text)
        .required()
        .placeholder("Enter your full name")
}

fn email() -> FieldSpec {
    FieldSpec::new("Email", "email", FieldKind::Email)
        .required()
        .placeholder("Enter your email")
}

fn phone() -> FieldSpec {
    FieldSpec::new("Phone Number", "phone", FieldKind::Phone).placeholder("1234567890")
}

fn expectations(prompt: &str) -> FieldSpec {
    FieldSpec::new("Expectations", "expectations", FieldKind::Textarea).placeholder(prompt)
}
