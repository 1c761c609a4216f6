// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Pipeviz Core
//!
//! Domain logic for pipeline visualization requests: request validation,
//! renderer argument translation, and artifact storage-path derivation.
//!
//! ## Overview
//!
//! This crate provides the pure (no I/O, no async) pieces of pipeviz:
//!
//! - **Validation**: turn a raw visualization request into a
//!   [`ValidatedVisualization`] or reject it before any network call
//! - **Translation**: produce the flag-style argument string the external
//!   rendering service consumes
//! - **Storage paths**: derive the deterministic artifact-store key under
//!   which a rendered visualization is cached
//!
//! ## Quick Start
//!
//! ```rust
//! use pipeviz_core::{visualization_path, ValidatedVisualization, VisualizationType};
//!
//! let v = ValidatedVisualization::from_request(
//!     VisualizationType::Table,
//!     "gs://bucket/Output/Predictions.csv",
//!     "",
//! )
//! .unwrap();
//!
//! assert_eq!(v.arguments, "{}");
//!
//! let key = visualization_path(v.visualization_type, &v.input_path);
//! assert_eq!(key, "visualizations/table/gs:_bucket_output_predictions.csv");
//! ```

pub mod error;
pub mod path;
pub mod request;
pub mod types;

pub use error::{Error, Result};
pub use path::{clean, pipeline_path, visualization_path};
pub use request::ValidatedVisualization;
pub use types::VisualizationType;
