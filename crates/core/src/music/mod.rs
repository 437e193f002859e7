// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod chord;
pub mod key;
pub mod nashville;
pub mod pitch;
