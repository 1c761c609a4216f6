// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Service modules for rendering and artifact storage.

pub mod renderer;
pub mod store;

pub use renderer::RendererClient;
pub use store::ArtifactStore;
