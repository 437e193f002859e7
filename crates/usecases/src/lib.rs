// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Recognizing, reviewing and finalizing chord sheets.
//!
//! Both recognized images and pasted text end up as preliminary
//! sections that are finalized into a song document with chords
//! written as Nashville numbers.

use std::result::Result as StdResult;

use leadsheet_core::music::key::InvalidKeyError;
use thiserror::Error;

pub mod classify;
pub mod config;
pub mod ocr;
pub mod render;
pub mod sheet;

#[derive(Error, Debug)]
#[error(transparent)]
pub struct InputError(#[from] pub anyhow::Error);

pub type InputResult<T> = StdResult<T, InputError>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    InvalidKey(#[from] InvalidKeyError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = StdResult<T, Error>;
