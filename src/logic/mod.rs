// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Side-effecting business logic executed off the UI thread.

pub mod submit;
