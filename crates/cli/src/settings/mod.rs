// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fs, io, path::Path};

use leadsheet_usecases::config::Config;

pub(crate) fn load(file_path: &Path) -> anyhow::Result<Config> {
    log::info!("Loading configuration from file: {}", file_path.display());
    match fs::read_to_string(file_path) {
        Ok(content) => ron::de::from_str(&content).map_err(Into::into),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::info!("Configuration file not found");
            Ok(Default::default())
        }
        Err(err) => Err(err.into()),
    }
}

/// Falls back to the default configuration if loading fails.
pub(crate) fn load_or_default(file_path: &Path) -> Config {
    load(file_path)
        .map_err(|err| {
            log::warn!("Failed to load configuration: {err}");
        })
        .unwrap_or_default()
}

pub(crate) fn to_pretty_string(config: &Config) -> anyhow::Result<String> {
    ron::ser::to_string_pretty(config, Default::default()).map_err(Into::into)
}
