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

//! Raw vertex and index buffers with a declared element format.
//!
//! Both containers own their bytes outright and are immutable once built.
//! The element format tells a consumer how to stride through the bytes; the
//! containers only check that the byte length is a whole number of elements
//! (a debug assertion, plus a warning in release builds).

use crate::{
    identity::{Guid, IdentityService},
    object::{impl_scene_object, SceneObjectHeader},
    tag::{IndexDataType, SceneObjectType, VertexDataType},
};
use bytemuck::Pod;

fn check_stride(what: &str, byte_length: usize, stride: usize) {
    let aligned = byte_length % stride == 0;
    if !aligned {
        log::warn!(
            "{what}: {byte_length} bytes is not a multiple of the {stride}-byte element stride"
        );
    }
    debug_assert!(
        aligned,
        "{what}: byte length {byte_length} is not a multiple of stride {stride}"
    );
}

/// One vertex attribute stream (positions, normals, UVs, ...) of a mesh.
#[derive(Debug)]
pub struct SceneObjectVertexArray {
    header: SceneObjectHeader,
    attribute: String,
    morph_target_index: u32,
    data_type: VertexDataType,
    data: Box<[u8]>,
}

impl SceneObjectVertexArray {
    /// Creates a vertex array with a fresh identity.
    ///
    /// `data` must hold a whole number of `data_type` elements.
    pub fn new(
        ids: &dyn IdentityService,
        attribute: impl Into<String>,
        data_type: VertexDataType,
        data: Vec<u8>,
    ) -> Self {
        Self::from_header(
            SceneObjectHeader::new(SceneObjectType::VertexArray, ids),
            attribute.into(),
            data_type,
            data,
        )
    }

    /// Creates a vertex array that keeps an existing identity.
    pub fn with_guid(
        guid: Guid,
        attribute: impl Into<String>,
        data_type: VertexDataType,
        data: Vec<u8>,
    ) -> Self {
        Self::from_header(
            SceneObjectHeader::with_guid(guid, SceneObjectType::VertexArray),
            attribute.into(),
            data_type,
            data,
        )
    }

    /// Creates a vertex array from typed elements, e.g. a `&[Vec3]` of
    /// positions with [`VertexDataType::Float3`].
    pub fn from_elements<T: Pod>(
        ids: &dyn IdentityService,
        attribute: impl Into<String>,
        data_type: VertexDataType,
        elements: &[T],
    ) -> Self {
        Self::new(
            ids,
            attribute,
            data_type,
            bytemuck::cast_slice(elements).to_vec(),
        )
    }

    fn from_header(
        header: SceneObjectHeader,
        attribute: String,
        data_type: VertexDataType,
        data: Vec<u8>,
    ) -> Self {
        check_stride("vertex array", data.len(), data_type.stride());
        Self {
            header,
            attribute,
            morph_target_index: 0,
            data_type,
            data: data.into_boxed_slice(),
        }
    }

    /// Marks this stream as belonging to morph target `index` (0 is the base
    /// shape).
    pub fn with_morph_target(mut self, index: u32) -> Self {
        self.morph_target_index = index;
        self
    }

    /// The attribute name, e.g. `"position"`.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// The morph target this stream belongs to.
    pub fn morph_target_index(&self) -> u32 {
        self.morph_target_index
    }

    /// The element format.
    pub fn data_type(&self) -> VertexDataType {
        self.data_type
    }

    /// The raw bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Length of the raw data in bytes.
    pub fn byte_length(&self) -> usize {
        self.data.len()
    }

    /// Number of whole elements in the buffer.
    pub fn element_count(&self) -> usize {
        self.data.len() / self.data_type.stride()
    }

    /// Returns `true` if the byte length is a whole number of elements.
    pub fn is_stride_aligned(&self) -> bool {
        self.data.len() % self.data_type.stride() == 0
    }

    /// Copies the bytes out as typed values. `T` should match the element
    /// format, e.g. `Vec3` for `Float3` or `f64` for `Double1`.
    pub fn read_elements<T: Pod>(&self) -> Vec<T> {
        bytemuck::pod_collect_to_vec(&self.data[..])
    }
}

/// The index buffer of one draw group of a mesh.
#[derive(Debug)]
pub struct SceneObjectIndexArray {
    header: SceneObjectHeader,
    material_index: u32,
    restart_index: usize,
    data_type: IndexDataType,
    data: Box<[u8]>,
}

impl SceneObjectIndexArray {
    /// Creates an index array with a fresh identity.
    ///
    /// `material_index` selects the material the indexed primitives are
    /// drawn with. `data` must hold a whole number of `data_type` indices.
    pub fn new(
        ids: &dyn IdentityService,
        material_index: u32,
        data_type: IndexDataType,
        data: Vec<u8>,
    ) -> Self {
        Self::from_header(
            SceneObjectHeader::new(SceneObjectType::IndexArray, ids),
            material_index,
            data_type,
            data,
        )
    }

    /// Creates an index array that keeps an existing identity.
    pub fn with_guid(
        guid: Guid,
        material_index: u32,
        data_type: IndexDataType,
        data: Vec<u8>,
    ) -> Self {
        Self::from_header(
            SceneObjectHeader::with_guid(guid, SceneObjectType::IndexArray),
            material_index,
            data_type,
            data,
        )
    }

    /// Creates a 16-bit index array from `u16` indices.
    pub fn from_u16(ids: &dyn IdentityService, material_index: u32, indices: &[u16]) -> Self {
        Self::new(
            ids,
            material_index,
            IndexDataType::Int16,
            bytemuck::cast_slice(indices).to_vec(),
        )
    }

    /// Creates a 32-bit index array from `u32` indices.
    pub fn from_u32(ids: &dyn IdentityService, material_index: u32, indices: &[u32]) -> Self {
        Self::new(
            ids,
            material_index,
            IndexDataType::Int32,
            bytemuck::cast_slice(indices).to_vec(),
        )
    }

    fn from_header(
        header: SceneObjectHeader,
        material_index: u32,
        data_type: IndexDataType,
        data: Vec<u8>,
    ) -> Self {
        check_stride("index array", data.len(), data_type.stride());
        Self {
            header,
            material_index,
            restart_index: 0,
            data_type,
            data: data.into_boxed_slice(),
        }
    }

    /// Sets the primitive-restart index value.
    pub fn with_restart_index(mut self, restart_index: usize) -> Self {
        self.restart_index = restart_index;
        self
    }

    /// The material used by these primitives.
    pub fn material_index(&self) -> u32 {
        self.material_index
    }

    /// The primitive-restart index value.
    pub fn restart_index(&self) -> usize {
        self.restart_index
    }

    /// The index format.
    pub fn data_type(&self) -> IndexDataType {
        self.data_type
    }

    /// The raw bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Length of the raw data in bytes.
    pub fn byte_length(&self) -> usize {
        self.data.len()
    }

    /// Number of whole indices in the buffer.
    pub fn index_count(&self) -> usize {
        self.data.len() / self.data_type.stride()
    }

    /// Returns `true` if the byte length is a whole number of indices.
    pub fn is_stride_aligned(&self) -> bool {
        self.data.len() % self.data_type.stride() == 0
    }

    /// Returns the indices widened to `u32`, whatever the stored format.
    pub fn indices(&self) -> Vec<u32> {
        match self.data_type {
            IndexDataType::Int16 => bytemuck::pod_collect_to_vec::<u8, u16>(&self.data[..])
                .into_iter()
                .map(u32::from)
                .collect(),
            IndexDataType::Int32 => bytemuck::pod_collect_to_vec(&self.data[..]),
        }
    }
}

impl_scene_object!(SceneObjectVertexArray, SceneObjectIndexArray);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{identity::SequentialIdentity, math::Vec3, object::SceneObject};

    #[test]
    fn test_vertex_array_metadata() {
        let ids = SequentialIdentity::default();
        let array = SceneObjectVertexArray::new(&ids, "position", VertexDataType::Float3, vec![0; 12]);

        assert_eq!(array.kind(), SceneObjectType::VertexArray);
        assert_eq!(array.attribute(), "position");
        assert_eq!(array.morph_target_index(), 0);
        assert_eq!(array.data_type(), VertexDataType::Float3);
        assert_eq!(array.byte_length(), 12);
        assert_eq!(array.element_count(), 1);
        assert!(array.is_stride_aligned());
    }

    #[test]
    fn test_vertex_array_from_elements() {
        let ids = SequentialIdentity::default();
        let positions = [Vec3::new(0.0, 1.0, 2.0), Vec3::new(3.0, 4.0, 5.0)];
        let array =
            SceneObjectVertexArray::from_elements(&ids, "position", VertexDataType::Float3, &positions)
                .with_morph_target(2);

        assert_eq!(array.byte_length(), 24);
        assert_eq!(array.element_count(), 2);
        assert_eq!(array.morph_target_index(), 2);
        assert_eq!(array.read_elements::<Vec3>(), positions.to_vec());
    }

    #[test]
    fn test_vertex_array_doubles() {
        let ids = SequentialIdentity::default();
        let values = [1.5f64, -2.0, 8.25, 0.0];
        let array = SceneObjectVertexArray::from_elements(&ids, "weights", VertexDataType::Double4, &values);
        assert_eq!(array.element_count(), 1);
        assert_eq!(array.read_elements::<f64>(), values.to_vec());
    }

    #[test]
    fn test_empty_index_array() {
        let ids = SequentialIdentity::default();
        let array = SceneObjectIndexArray::new(&ids, 0, IndexDataType::Int16, Vec::new());

        assert_eq!(array.kind(), SceneObjectType::IndexArray);
        assert_eq!(array.byte_length(), 0);
        assert_eq!(array.index_count(), 0);
        assert!(array.indices().is_empty());
        assert!(array.is_stride_aligned());
    }

    #[test]
    fn test_index_array_widening() {
        let ids = SequentialIdentity::default();
        let short = SceneObjectIndexArray::from_u16(&ids, 1, &[0, 1, 2, 2, 1, 3]);
        let long = SceneObjectIndexArray::from_u32(&ids, 1, &[0, 70_000, 2]).with_restart_index(0xFFFF_FFFF);

        assert_eq!(short.data_type(), IndexDataType::Int16);
        assert_eq!(short.index_count(), 6);
        assert_eq!(short.indices(), vec![0, 1, 2, 2, 1, 3]);
        assert_eq!(short.material_index(), 1);

        assert_eq!(long.data_type(), IndexDataType::Int32);
        assert_eq!(long.indices(), vec![0, 70_000, 2]);
        assert_eq!(long.restart_index(), 0xFFFF_FFFF);
    }

    #[test]
    fn test_preserved_identity() {
        let guid = Guid::from_name("mesh/0/indices");
        let array = SceneObjectIndexArray::with_guid(guid, 0, IndexDataType::Int32, vec![0; 8]);
        assert_eq!(array.guid(), guid);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not a multiple of stride")]
    fn test_misaligned_vertex_data_asserts_in_debug() {
        let ids = SequentialIdentity::default();
        let _ = SceneObjectVertexArray::new(&ids, "position", VertexDataType::Float3, vec![0; 10]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not a multiple of stride")]
    fn test_misaligned_index_data_asserts_in_debug() {
        let ids = SequentialIdentity::default();
        let _ = SceneObjectIndexArray::new(&ids, 0, IndexDataType::Int32, vec![0; 6]);
    }
}
