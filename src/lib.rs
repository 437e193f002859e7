// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Chord sheet ingestion into the Nashville Number System.
//!
//! Facade crate that re-exports the workspace crates behind features.

pub use leadsheet_core as core;

#[cfg(feature = "json")]
pub use leadsheet_core_json as core_json;

#[cfg(feature = "usecases")]
pub use leadsheet_usecases as usecases;
