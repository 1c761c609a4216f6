// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Visualization type taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of visualization the external rendering service generates.
///
/// The wire form matches the public API (`"ROC_CURVE"`, `"TABLE"`, ...);
/// [`VisualizationType::name`] is the lowercase form used for renderer
/// flags and artifact-store path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisualizationType {
    /// Receiver operating characteristic curve.
    RocCurve,
    /// TensorFlow Data Validation statistics view.
    Tfdv,
    /// TensorFlow Model Analysis report.
    Tfma,
    /// Tabular report over a CSV-like input.
    Table,
    /// Caller-supplied rendering code.
    Custom,
}

impl VisualizationType {
    /// Lowercase name, stable across releases.
    ///
    /// Used as the `--type` flag value and as the type segment of the
    /// artifact cache key, so the value must never change for an existing
    /// variant.
    pub fn name(&self) -> &'static str {
        match self {
            VisualizationType::RocCurve => "roc_curve",
            VisualizationType::Tfdv => "tfdv",
            VisualizationType::Tfma => "tfma",
            VisualizationType::Table => "table",
            VisualizationType::Custom => "custom",
        }
    }
}

impl fmt::Display for VisualizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
