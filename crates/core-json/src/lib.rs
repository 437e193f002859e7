// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! JSON representation of the boundary types.
//!
//! All keys use `snake_case`.

pub mod prelude {
    pub(crate) use serde::{Deserialize, Serialize};
}

pub mod api;
pub mod layout;
pub mod sheet;
