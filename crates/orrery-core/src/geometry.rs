// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the geometry scene object.

use crate::{
    identity::{Guid, IdentityService},
    mesh::SceneObjectMesh,
    object::{impl_scene_object, SceneObjectHeader},
    tag::SceneObjectType,
};

/// An ordered collection of meshes, e.g. the levels of detail or sub-meshes
/// of one model. Meshes are appended and never removed.
#[derive(Debug)]
pub struct SceneObjectGeometry {
    header: SceneObjectHeader,
    meshes: Vec<SceneObjectMesh>,
}

impl SceneObjectGeometry {
    /// Creates an empty geometry with a fresh identity.
    pub fn new(ids: &dyn IdentityService) -> Self {
        Self {
            header: SceneObjectHeader::new(SceneObjectType::Geometry, ids),
            meshes: Vec::new(),
        }
    }

    /// Creates an empty geometry that keeps an existing identity.
    pub fn with_guid(guid: Guid) -> Self {
        Self {
            header: SceneObjectHeader::with_guid(guid, SceneObjectType::Geometry),
            meshes: Vec::new(),
        }
    }

    /// Appends a mesh, taking ownership of it.
    pub fn add_mesh(&mut self, mesh: SceneObjectMesh) {
        log::debug!(
            "Geometry {}: adding mesh #{}",
            self.header.guid(),
            self.meshes.len()
        );
        self.meshes.push(mesh);
    }

    /// The meshes, in insertion order.
    pub fn meshes(&self) -> &[SceneObjectMesh] {
        &self.meshes
    }
}

impl_scene_object!(SceneObjectGeometry);
