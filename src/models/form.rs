// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Form definitions: field kinds, field specs and per-event form configs.

/// Input kinds the form knows how to render and validate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Url,
    /// Rendered with a paired country-code selector.
    Phone,
    Textarea,
}

/// Single input control within a form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: String,
    /// Key into the field values and the submitted record.
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<String>,
}

impl FieldSpec {
    /// Optional field without a placeholder.
    pub fn new(label: &str, name: &str, kind: FieldKind) -> Self {
        Self {
            label: label.to_string(),
            name: name.to_string(),
            kind,
            required: false,
            placeholder: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, text: &str) -> Self {
        self.placeholder = Some(text.to_string());
        self
    }
}

/// Display metadata and ordered field list for one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormConfig {
    /// Logo path relative to the assets directory.
    pub logo_path: String,
    pub title: String,
    pub description: String,
    /// Rendering order.
    pub fields: Vec<FieldSpec>,
}

impl FormConfig {
    /// First phone field, if the form asks for one.
    pub fn phone_field(&self) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.kind == FieldKind::Phone)
    }
}
