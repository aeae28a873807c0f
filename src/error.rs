// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Errors raised while turning form input into records.
//!
//! There are only two kinds:
//!
//! - [`NotANumber`] when a numeric text field does not parse as a decimal.
//! - [`MissingField`] when the profile is absent or a required field is unset.
//!
//! [`NotANumber`]: ValidationError::NotANumber
//! [`MissingField`]: ValidationError::MissingField
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("`{field}` is not a number: '{input}'")]
    NotANumber { field: &'static str, input: String },
    #[error("`{0}` is missing")]
    MissingField(&'static str),
}

impl ValidationError {
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::NotANumber { .. } => "NotANumber",
            ValidationError::MissingField(_) => "MissingField",
        }
    }
}
