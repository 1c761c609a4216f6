// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Artifact-store path construction.
//!
//! Storage paths are the sole addressing scheme for stored artifacts: no
//! other metadata accompanies a blob, so the derivation here must be
//! deterministic and stable across processes and releases.

use crate::types::VisualizationType;

/// Namespace segment for pipeline specs.
const PIPELINE_FOLDER: &str = "pipelines";

/// Namespace segment for rendered visualizations.
const VISUALIZATION_FOLDER: &str = "visualizations";

/// Lexically normalize a slash-separated path.
///
/// Collapses duplicate separators, drops `.` elements, resolves `..`
/// against preceding elements where possible (leading `..` survives in
/// relative paths, is dropped at the root of absolute ones), and strips
/// any trailing separator. The empty path cleans to `"."`.
///
/// Purely lexical: the filesystem is never consulted.
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let rooted = path.starts_with('/');
    let mut elements: Vec<&str> = Vec::new();
    for element in path.split('/') {
        match element {
            "" | "." => {}
            ".." => match elements.last() {
                Some(&last) if last != ".." => {
                    elements.pop();
                }
                _ => {
                    if !rooted {
                        elements.push("..");
                    }
                }
            },
            other => elements.push(other),
        }
    }
    let joined = elements.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Storage path for a pipeline spec.
pub fn pipeline_path(pipeline_id: &str) -> String {
    format!("{PIPELINE_FOLDER}/{pipeline_id}")
}

/// Storage path (cache key) for a rendered visualization.
///
/// Built from the lowercase type name and the cleaned, lowercased input
/// path with every separator replaced by an underscore. Same `(type,
/// input_path)` always yields a byte-identical key; inputs differing only
/// by case or redundant separators collapse to the same key.
pub fn visualization_path(
    visualization_type: VisualizationType,
    input_path: &str,
) -> String {
    let segment = clean(input_path).to_lowercase().replace('/', "_");
    format!(
        "{VISUALIZATION_FOLDER}/{}/{segment}",
        visualization_type.name()
    )
}
