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

//! Defines the mesh scene object.

use crate::{
    buffer::{SceneObjectIndexArray, SceneObjectVertexArray},
    identity::{Guid, IdentityService},
    object::{impl_scene_object, SceneObjectHeader},
    tag::SceneObjectType,
};

/// A mesh: vertex attribute streams, index groups and render flags.
///
/// Arrays are appended in order and never removed. The order of the index
/// arrays is the draw-call order a renderer should follow.
#[derive(Debug)]
pub struct SceneObjectMesh {
    header: SceneObjectHeader,
    vertex_arrays: Vec<SceneObjectVertexArray>,
    index_arrays: Vec<SceneObjectIndexArray>,
    visible: bool,
    casts_shadow: bool,
    motion_blur: bool,
}

impl SceneObjectMesh {
    /// Creates an empty, visible, shadow-casting, motion-blurred mesh.
    pub fn new(ids: &dyn IdentityService) -> Self {
        Self::from_header(SceneObjectHeader::new(SceneObjectType::Mesh, ids))
    }

    /// Creates an empty mesh that keeps an existing identity.
    pub fn with_guid(guid: Guid) -> Self {
        Self::from_header(SceneObjectHeader::with_guid(guid, SceneObjectType::Mesh))
    }

    fn from_header(header: SceneObjectHeader) -> Self {
        Self {
            header,
            vertex_arrays: Vec::new(),
            index_arrays: Vec::new(),
            visible: true,
            casts_shadow: true,
            motion_blur: true,
        }
    }

    /// Sets the three render flags at once.
    pub fn with_flags(mut self, visible: bool, casts_shadow: bool, motion_blur: bool) -> Self {
        self.visible = visible;
        self.casts_shadow = casts_shadow;
        self.motion_blur = motion_blur;
        self
    }

    /// Appends a vertex attribute stream, taking ownership of it.
    pub fn add_vertex_array(&mut self, array: SceneObjectVertexArray) {
        log::debug!(
            "Mesh {}: adding vertex array '{}'",
            self.header.guid(),
            array.attribute()
        );
        self.vertex_arrays.push(array);
    }

    /// Appends an index group, taking ownership of it.
    pub fn add_index_array(&mut self, array: SceneObjectIndexArray) {
        log::debug!(
            "Mesh {}: adding index array for material {}",
            self.header.guid(),
            array.material_index()
        );
        self.index_arrays.push(array);
    }

    /// The vertex attribute streams, in insertion order.
    pub fn vertex_arrays(&self) -> &[SceneObjectVertexArray] {
        &self.vertex_arrays
    }

    /// The index groups, in insertion order.
    pub fn index_arrays(&self) -> &[SceneObjectIndexArray] {
        &self.index_arrays
    }

    /// Finds the base-shape stream for `attribute`.
    pub fn vertex_array(&self, attribute: &str) -> Option<&SceneObjectVertexArray> {
        self.vertex_arrays
            .iter()
            .find(|a| a.morph_target_index() == 0 && a.attribute() == attribute)
    }

    /// Whether the mesh is drawn.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the mesh casts shadows.
    pub fn casts_shadow(&self) -> bool {
        self.casts_shadow
    }

    /// Whether the mesh receives motion blur.
    pub fn motion_blur(&self) -> bool {
        self.motion_blur
    }
}

impl_scene_object!(SceneObjectMesh);
