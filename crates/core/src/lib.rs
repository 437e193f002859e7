// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Core domain model of chord sheets.
//!
//! - [`music`]: pitches, keys, chord symbols and their conversion from and
//!   into key-relative Nashville numbers.
//! - [`layout`]: recognized text tokens with their spatial layout and the
//!   structured lines derived from them.
//! - [`sheet`]: the preliminary (reviewable) and final (hashed) song model.

pub mod layout;
pub mod music;
pub mod sheet;
pub mod util;

pub mod prelude {
    // Re-export trait methods from semval
    pub use semval::{IntoValidated as _, IsValid, Validate as _, ValidatedFrom as _};
    pub(crate) use semval::prelude::*;
}
