// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request validation and renderer argument translation.

use crate::error::{Error, Result};
use crate::types::VisualizationType;

/// Arguments value applied when a request carries none.
///
/// Some visualization types need no extra parameters, so an absent
/// arguments field is equivalent to the empty JSON object.
const EMPTY_ARGUMENTS: &str = "{}";

/// A visualization request that has passed validation.
///
/// Constructed via [`ValidatedVisualization::from_request`]; the caller's
/// input is never mutated, defaulting produces a new value. Once built,
/// `arguments` is always syntactically valid JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedVisualization {
    pub visualization_type: VisualizationType,
    pub input_path: String,
    pub arguments: String,
}

impl ValidatedVisualization {
    /// Validate the raw request fields.
    ///
    /// Fails if `input_path` is empty or if a non-empty `arguments` string
    /// is not valid JSON. An empty `arguments` string defaults to `"{}"`.
    pub fn from_request(
        visualization_type: VisualizationType,
        input_path: &str,
        arguments: &str,
    ) -> Result<Self> {
        if input_path.is_empty() {
            return Err(Error::MissingInputPath);
        }
        let arguments = if arguments.is_empty() {
            EMPTY_ARGUMENTS
        } else {
            arguments
        };
        // Syntactic check only; the blob reaches the renderer opaquely.
        serde_json::from_str::<serde::de::IgnoredAny>(arguments)?;
        Ok(Self {
            visualization_type,
            input_path: input_path.to_string(),
            arguments: arguments.to_string(),
        })
    }

    /// Flag-style argument string consumed by the external renderer.
    ///
    /// The JSON blob is single-quoted: it contains spaces and the renderer
    /// shell-splits the line before parsing flags.
    pub fn renderer_arguments(&self) -> String {
        format!(
            "--type {} --input_path {} --arguments '{}'",
            self.visualization_type.name(),
            self.input_path,
            self.arguments
        )
    }
}
