// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: form definitions, values, submission status and validation (UI-agnostic).

pub mod form;
pub mod registry;
pub mod submission;
pub mod validation;
pub mod values;
