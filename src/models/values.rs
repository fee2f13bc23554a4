// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Current input values of the displayed form.

use std::collections::BTreeMap;

use crate::models::form::FormConfig;

/// Country code preselected for phone fields.
pub const DEFAULT_COUNTRY_CODE: &str = "+91";

/// Choices offered by the country-code selector.
pub const COUNTRY_CODES: [&str; 6] = ["+91", "+1", "+44", "+61", "+81", "+49"];

/// Field name to value, plus the country code paired with phone fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldValues {
    values: BTreeMap<String, String>,
    country_code: String,
}

impl Default for FieldValues {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }
}

impl FieldValues {
    /// Empty value for every field of `config` and the default country code.
    pub fn for_config(config: &FormConfig) -> Self {
        Self {
            values: config
                .fields
                .iter()
                .map(|f| (f.name.clone(), String::new()))
                .collect(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    /// Replace one known field's value. Returns `false` for names this form does not have.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn set_country_code(&mut self, code: String) {
        self.country_code = code;
    }

    /// Blank every field, keeping the country code.
    pub fn clear(&mut self) {
        self.values.values_mut().for_each(String::clear);
    }

    #[cfg(test)]
    pub fn is_blank(&self) -> bool {
        self.values.values().all(String::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::registry::FormRegistry;

    fn meetup_values() -> FieldValues {
        FieldValues::for_config(FormRegistry::global().lookup("meetup").unwrap())
    }

    #[test]
    fn initializes_every_field_empty() {
        let mut values = meetup_values();

        for name in ["name", "email", "phone", "expectations"] {
            assert!(values.set(name, String::new()), "{name} missing");
        }
        assert!(values.is_blank());
        assert_eq!(values.country_code(), "+91");
    }

    #[test]
    fn set_only_touches_one_field() {
        let mut values = meetup_values();
        assert!(values.set("name", "Ada".into()));

        assert_eq!(values.get("name"), "Ada");
        assert_eq!(values.get("email"), "");
        assert_eq!(values.get("phone"), "");
    }

    #[test]
    fn set_rejects_unknown_names() {
        let mut values = meetup_values();
        assert!(!values.set("github", "x".into()));
        assert_eq!(values.get("github"), "");
    }

    #[test]
    fn clear_keeps_country_code() {
        let mut values = meetup_values();
        values.set("phone", "7911123456".into());
        values.set_country_code("+44".into());

        values.clear();

        assert!(values.is_blank());
        assert_eq!(values.country_code(), "+44");
    }
}
