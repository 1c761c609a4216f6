// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for request validation.

use thiserror::Error;

/// Errors produced while validating a visualization request.
///
/// All variants are invalid-input class: they are surfaced to the caller
/// synchronously, before any cache lookup or render is attempted.
#[derive(Debug, Error)]
pub enum Error {
    /// The request carried no input path.
    #[error("missing input path")]
    MissingInputPath,

    /// The arguments field was present but is not syntactically valid JSON.
    #[error("invalid arguments, arguments must be valid JSON: {0}")]
    InvalidArguments(#[from] serde_json::Error),
}

/// Result alias for validation operations.
pub type Result<T> = std::result::Result<T, Error>;
