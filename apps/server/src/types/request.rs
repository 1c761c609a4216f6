// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request types for the API.

use pipeviz_core::VisualizationType;
use serde::Deserialize;

/// Body of a visualization generation request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVisualizationRequest {
    /// Path to the input data the visualization is generated from.
    #[serde(default)]
    pub input_path: String,

    /// Kind of visualization to generate.
    #[serde(rename = "type")]
    pub visualization_type: VisualizationType,

    /// JSON arguments forwarded to the renderer; empty means none.
    #[serde(default)]
    pub arguments: String,
}
