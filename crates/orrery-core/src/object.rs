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

//! The identity and kind shared by every scene object.
//!
//! Each concrete entity embeds a [`SceneObjectHeader`] and implements
//! [`SceneObject`] to expose it. [`AnySceneObject`] closes the set of
//! entities into one sum type for code that handles them uniformly.
//!
//! None of these types implement `Clone` or `Copy`. A scene object can only
//! be moved, so two live objects never share an identity:
//!
//! ```compile_fail
//! use orrery_core::{identity::RandomIdentity, mesh::SceneObjectMesh};
//!
//! let mesh = SceneObjectMesh::new(&RandomIdentity);
//! let copy = mesh.clone();
//! ```

use crate::{
    buffer::{SceneObjectIndexArray, SceneObjectVertexArray},
    camera::SceneObjectCamera,
    geometry::SceneObjectGeometry,
    identity::{Guid, IdentityService},
    light::SceneObjectLight,
    material::SceneObjectMaterial,
    mesh::SceneObjectMesh,
    tag::SceneObjectType,
    texture::SceneObjectTexture,
};
use std::fmt;

/// The identity and kind of one scene object.
///
/// Both fields are fixed at construction. The header is move-only.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SceneObjectHeader {
    guid: Guid,
    kind: SceneObjectType,
}

impl SceneObjectHeader {
    /// Creates a header with a fresh identity drawn from `ids`.
    pub fn new(kind: SceneObjectType, ids: &dyn IdentityService) -> Self {
        Self::with_guid(ids.new_identifier(), kind)
    }

    /// Creates a header with a preserved identity, e.g. when an object is
    /// reconstructed from a file and must keep its cross-file references.
    pub fn with_guid(guid: Guid, kind: SceneObjectType) -> Self {
        log::trace!("Creating scene object {kind} with GUID {guid}");
        Self { guid, kind }
    }

    /// Returns the object's identity.
    #[inline]
    pub fn guid(&self) -> Guid {
        self.guid
    }

    /// Returns the object's kind.
    #[inline]
    pub fn kind(&self) -> SceneObjectType {
        self.kind
    }
}

impl fmt::Display for SceneObjectHeader {
    /// Writes the dump block parsed by external tooling. The labels and
    /// line order are fixed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SceneObject")?;
        writeln!(f, "-----------")?;
        writeln!(f, "GUID: {}", self.guid)?;
        writeln!(f, "Type: {}", self.kind.tag())
    }
}

/// The read-only surface common to every scene object.
pub trait SceneObject {
    /// Returns the embedded header.
    fn header(&self) -> &SceneObjectHeader;

    /// Returns the object's identity, stable for its whole lifetime.
    fn guid(&self) -> Guid {
        self.header().guid()
    }

    /// Returns the object's kind, stable for its whole lifetime.
    fn kind(&self) -> SceneObjectType {
        self.header().kind()
    }

    /// Produces the human-readable dump block:
    ///
    /// ```text
    /// SceneObject
    /// -----------
    /// GUID: <identity text>
    /// Type: <4-character tag>
    /// ```
    fn dump(&self) -> String {
        self.header().to_string()
    }
}

/// Implements [`SceneObject`] for a struct with a `header` field.
macro_rules! impl_scene_object {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::object::SceneObject for $ty {
                #[inline]
                fn header(&self) -> &$crate::object::SceneObjectHeader {
                    &self.header
                }
            }
        )+
    };
}
pub(crate) use impl_scene_object;

/// Any scene object, as a closed set of variants.
#[derive(Debug)]
pub enum AnySceneObject {
    /// A mesh.
    Mesh(SceneObjectMesh),
    /// A material.
    Material(SceneObjectMaterial),
    /// A texture.
    Texture(SceneObjectTexture),
    /// An omni or spot light.
    Light(SceneObjectLight),
    /// A camera.
    Camera(SceneObjectCamera),
    /// A geometry.
    Geometry(SceneObjectGeometry),
    /// A vertex array.
    VertexArray(SceneObjectVertexArray),
    /// An index array.
    IndexArray(SceneObjectIndexArray),
}

impl SceneObject for AnySceneObject {
    fn header(&self) -> &SceneObjectHeader {
        match self {
            AnySceneObject::Mesh(o) => o.header(),
            AnySceneObject::Material(o) => o.header(),
            AnySceneObject::Texture(o) => o.header(),
            AnySceneObject::Light(o) => o.header(),
            AnySceneObject::Camera(o) => o.header(),
            AnySceneObject::Geometry(o) => o.header(),
            AnySceneObject::VertexArray(o) => o.header(),
            AnySceneObject::IndexArray(o) => o.header(),
        }
    }
}

macro_rules! any_from {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for AnySceneObject {
                fn from(object: $ty) -> Self {
                    AnySceneObject::$variant(object)
                }
            }
        )+
    };
}

any_from! {
    Mesh => SceneObjectMesh,
    Material => SceneObjectMaterial,
    Texture => SceneObjectTexture,
    Light => SceneObjectLight,
    Camera => SceneObjectCamera,
    Geometry => SceneObjectGeometry,
    VertexArray => SceneObjectVertexArray,
    IndexArray => SceneObjectIndexArray,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::SequentialIdentity;
    use std::collections::HashSet;

    #[test]
    fn test_header_fresh_identity() {
        let ids = SequentialIdentity::starting_at(5);
        let header = SceneObjectHeader::new(SceneObjectType::Mesh, &ids);
        assert_eq!(header.guid(), Guid::from_u128(5));
        assert_eq!(header.kind(), SceneObjectType::Mesh);
    }

    #[test]
    fn test_header_preserved_identity() {
        let guid = Guid::from_name("imported/cube");
        let header = SceneObjectHeader::with_guid(guid, SceneObjectType::Geometry);
        assert_eq!(header.guid(), guid);
    }

    #[test]
    fn test_dump_format() {
        let guid = Guid::from_u128(1);
        let header = SceneObjectHeader::with_guid(guid, SceneObjectType::Mesh);
        let expected = format!("SceneObject\n-----------\nGUID: {guid}\nType: MESH\n");
        assert_eq!(header.to_string(), expected);
    }

    #[test]
    fn test_move_keeps_identity_and_kind() {
        let ids = SequentialIdentity::default();
        let a = SceneObjectMesh::new(&ids);
        let (guid, kind) = (a.guid(), a.kind());
        let b = a;
        assert_eq!(b.guid(), guid);
        assert_eq!(b.kind(), kind);
    }

    #[test]
    fn test_any_scene_object_dispatch() {
        let ids = SequentialIdentity::default();
        let objects: Vec<AnySceneObject> = vec![
            SceneObjectMesh::new(&ids).into(),
            SceneObjectMaterial::new(&ids).into(),
            SceneObjectLight::omni(&ids).into(),
            SceneObjectCamera::new(&ids).into(),
            SceneObjectGeometry::new(&ids).into(),
        ];

        let kinds: Vec<_> = objects.iter().map(|o| o.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                SceneObjectType::Mesh,
                SceneObjectType::Material,
                SceneObjectType::Light,
                SceneObjectType::Camera,
                SceneObjectType::Geometry,
            ]
        );

        let guids: HashSet<_> = objects.iter().map(|o| o.guid()).collect();
        assert_eq!(guids.len(), objects.len());
        assert!(objects[2].dump().ends_with("Type: LGHT\n"));
    }
}
