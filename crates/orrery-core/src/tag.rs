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

//! Four-character type tags and the enumerations built on them.
//!
//! A [`TypeTag`] packs a four-character ASCII code into an `i32` by folding
//! each byte in from the left (`v = v * 256 + c`). The same value is used as
//! a runtime discriminant and, written in network byte order, as the 4-byte
//! record marker of the asset format. Decoding a tag back to text is exact:
//! `TypeTag::new("MESH").to_string() == "MESH"`.
//!
//! The codec does not guarantee uniqueness across arbitrary codes, only
//! determinism. The enumerations below use `#[repr(i32)]` discriminants, so
//! two members sharing a code is rejected by the compiler.

use crate::error::{Result, SceneError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Packs the bytes of `code` into an `i32`, left to right.
///
/// This is the raw codec: it accepts any length and never fails. Codes longer
/// than four bytes shift their leading bytes out. Use [`TypeTag::new`] or
/// [`TypeTag::parse`] when the input must be a proper four-character code.
///
/// # Examples
///
/// ```
/// use orrery_core::tag::encode;
/// assert_eq!(encode("MESH"), 0x4D45_5348);
/// assert_eq!(encode("MESH"), encode("MESH"));
/// ```
pub const fn encode(code: &str) -> i32 {
    let bytes = code.as_bytes();
    let mut value: i32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        value = value.wrapping_mul(256).wrapping_add(bytes[i] as i32);
        i += 1;
    }
    value
}

/// A 32-bit encoding of a four-character ASCII code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct TypeTag(i32);

impl TypeTag {
    /// Builds a tag from a four-character code.
    ///
    /// # Panics
    /// Panics if `code` is not exactly four bytes long. In a `const` context
    /// this is a compile-time error.
    pub const fn new(code: &str) -> Self {
        assert!(code.len() == 4, "type tag codes must be exactly 4 bytes");
        Self(encode(code))
    }

    /// Wraps an already-encoded value, e.g. one read from a file.
    #[inline]
    pub const fn from_value(value: i32) -> Self {
        Self(value)
    }

    /// Parses and validates a four-character ASCII code.
    pub fn parse(code: &str) -> Result<Self> {
        if !code.is_ascii() {
            return Err(SceneError::NonAsciiTag(code.to_owned()));
        }
        if code.len() != 4 {
            return Err(SceneError::InvalidTagLength {
                code: code.to_owned(),
                len: code.len(),
            });
        }
        Ok(Self(encode(code)))
    }

    /// Returns the encoded integer value.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Returns the tag in network byte order, i.e. the original code bytes.
    #[inline]
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Rebuilds a tag from four bytes in network byte order.
    #[inline]
    pub const fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(i32::from_be_bytes(bytes))
    }
}

impl fmt::Display for TypeTag {
    /// Writes the decoded four-character code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_be_bytes() {
            write!(f, "{}", byte as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeTag(\"{self}\")")
    }
}

/// The kinds of scene object, each identified by its own tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum SceneObjectType {
    /// A renderable mesh ("MESH").
    Mesh = encode("MESH"),
    /// A surface material ("MATL").
    Material = encode("MATL"),
    /// A texture referencing an image ("TXTU").
    Texture = encode("TXTU"),
    /// A light source ("LGHT").
    Light = encode("LGHT"),
    /// A camera ("CAMR").
    Camera = encode("CAMR"),
    /// Reserved for animators ("ANIM").
    Animator = encode("ANIM"),
    /// Reserved for animation clips ("CLIP").
    Clip = encode("CLIP"),
    /// A vertex attribute buffer ("VARR").
    VertexArray = encode("VARR"),
    /// An index buffer ("IARR").
    IndexArray = encode("IARR"),
    /// A collection of meshes ("GEOM").
    Geometry = encode("GEOM"),
}

impl SceneObjectType {
    /// Every scene object type, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Mesh,
        Self::Material,
        Self::Texture,
        Self::Light,
        Self::Camera,
        Self::Animator,
        Self::Clip,
        Self::VertexArray,
        Self::IndexArray,
        Self::Geometry,
    ];

    /// Returns the tag of this type.
    #[inline]
    pub const fn tag(self) -> TypeTag {
        TypeTag(self as i32)
    }
}

impl fmt::Display for SceneObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tag(), f)
    }
}

impl TryFrom<TypeTag> for SceneObjectType {
    type Error = SceneError;

    fn try_from(tag: TypeTag) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or(SceneError::UnknownTag {
                context: "scene object type",
                tag,
            })
    }
}

/// The element format of a vertex attribute buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum VertexDataType {
    /// One `f32` per element.
    Float1 = encode("FLT1"),
    /// Two `f32` per element.
    Float2 = encode("FLT2"),
    /// Three `f32` per element.
    Float3 = encode("FLT3"),
    /// Four `f32` per element.
    Float4 = encode("FLT4"),
    /// One `f64` per element.
    Double1 = encode("DUB1"),
    /// Two `f64` per element.
    Double2 = encode("DUB2"),
    /// Three `f64` per element.
    Double3 = encode("DUB3"),
    /// Four `f64` per element.
    Double4 = encode("DUB4"),
}

impl VertexDataType {
    /// Every vertex data type, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Float1,
        Self::Float2,
        Self::Float3,
        Self::Float4,
        Self::Double1,
        Self::Double2,
        Self::Double3,
        Self::Double4,
    ];

    /// Returns the tag of this data type.
    #[inline]
    pub const fn tag(self) -> TypeTag {
        TypeTag(self as i32)
    }

    /// Number of scalar components per element.
    pub const fn component_count(self) -> usize {
        match self {
            Self::Float1 | Self::Double1 => 1,
            Self::Float2 | Self::Double2 => 2,
            Self::Float3 | Self::Double3 => 3,
            Self::Float4 | Self::Double4 => 4,
        }
    }

    /// Size in bytes of one scalar component.
    pub const fn component_size(self) -> usize {
        match self {
            Self::Float1 | Self::Float2 | Self::Float3 | Self::Float4 => 4,
            Self::Double1 | Self::Double2 | Self::Double3 | Self::Double4 => 8,
        }
    }

    /// Size in bytes of one element.
    #[inline]
    pub const fn stride(self) -> usize {
        self.component_count() * self.component_size()
    }
}

impl TryFrom<TypeTag> for VertexDataType {
    type Error = SceneError;

    fn try_from(tag: TypeTag) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.tag() == tag)
            .ok_or(SceneError::UnknownTag {
                context: "vertex data type",
                tag,
            })
    }
}

/// The element format of an index buffer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum IndexDataType {
    /// 16-bit indices.
    #[default]
    Int16 = encode("_I16"),
    /// 32-bit indices.
    Int32 = encode("_I32"),
}

impl IndexDataType {
    /// Returns the tag of this data type.
    #[inline]
    pub const fn tag(self) -> TypeTag {
        TypeTag(self as i32)
    }

    /// Size in bytes of one index.
    pub const fn stride(self) -> usize {
        match self {
            Self::Int16 => 2,
            Self::Int32 => 4,
        }
    }
}

impl TryFrom<TypeTag> for IndexDataType {
    type Error = SceneError;

    fn try_from(tag: TypeTag) -> Result<Self> {
        [Self::Int16, Self::Int32]
            .into_iter()
            .find(|ty| ty.tag() == tag)
            .ok_or(SceneError::UnknownTag {
                context: "index data type",
                tag,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_encode_is_left_fold() {
        let expected = ((('M' as i32 * 256 + 'E' as i32) * 256 + 'S' as i32) * 256) + 'H' as i32;
        assert_eq!(encode("MESH"), expected);
        assert_eq!(encode("_I16"), 0x5F49_3136);
    }

    #[test]
    fn test_encode_is_deterministic() {
        for _ in 0..8 {
            assert_eq!(encode("GEOM"), encode("GEOM"));
        }
        assert_eq!(TypeTag::new("CAMR"), TypeTag::new("CAMR"));
    }

    #[test]
    fn test_display_recovers_code() {
        for code in ["MESH", "MATL", "TXTU", "LGHT", "CAMR", "VARR", "_I32"] {
            assert_eq!(TypeTag::new(code).to_string(), code);
        }
        assert_eq!(SceneObjectType::Mesh.to_string(), "MESH");
    }

    #[test]
    fn test_be_bytes_round_trip() {
        let tag = TypeTag::new("FLT3");
        assert_eq!(&tag.to_be_bytes(), b"FLT3");
        assert_eq!(TypeTag::from_be_bytes(*b"FLT3"), tag);
    }

    #[test]
    fn test_debug_shows_code() {
        assert_eq!(format!("{:?}", TypeTag::new("GEOM")), "TypeTag(\"GEOM\")");
    }

    #[test]
    fn test_parse_validates_input() {
        assert_eq!(TypeTag::parse("LGHT").unwrap(), TypeTag::new("LGHT"));
        assert!(matches!(
            TypeTag::parse("LIGHT"),
            Err(SceneError::InvalidTagLength { len: 5, .. })
        ));
        assert!(matches!(
            TypeTag::parse("ABC"),
            Err(SceneError::InvalidTagLength { len: 3, .. })
        ));
        assert!(matches!(TypeTag::parse("Ä12"), Err(SceneError::NonAsciiTag(_))));
    }

    #[test]
    #[should_panic]
    fn test_new_rejects_short_code() {
        let _ = TypeTag::new("ABC");
    }

    #[test]
    fn test_scene_object_tags_are_distinct() {
        let tags: HashSet<_> = SceneObjectType::ALL.iter().map(|k| k.tag()).collect();
        assert_eq!(tags.len(), SceneObjectType::ALL.len());
        assert_ne!(
            SceneObjectType::VertexArray.tag(),
            SceneObjectType::IndexArray.tag()
        );
    }

    #[test]
    fn test_vertex_tags_are_distinct() {
        let tags: HashSet<_> = VertexDataType::ALL.iter().map(|t| t.tag()).collect();
        assert_eq!(tags.len(), VertexDataType::ALL.len());
        assert_eq!(VertexDataType::Double4.tag().to_string(), "DUB4");
    }

    #[test]
    fn test_scene_object_type_from_tag() {
        for kind in SceneObjectType::ALL {
            assert_eq!(SceneObjectType::try_from(kind.tag()).unwrap(), kind);
        }
        let err = SceneObjectType::try_from(TypeTag::new("NOPE")).unwrap_err();
        assert!(err.to_string().contains("NOPE"));
    }

    #[test]
    fn test_data_type_from_tag() {
        assert_eq!(
            VertexDataType::try_from(TypeTag::new("DUB2")).unwrap(),
            VertexDataType::Double2
        );
        assert_eq!(
            IndexDataType::try_from(TypeTag::new("_I32")).unwrap(),
            IndexDataType::Int32
        );
        assert!(IndexDataType::try_from(TypeTag::new("_I08")).is_err());
    }

    #[test]
    fn test_strides() {
        assert_eq!(VertexDataType::Float1.stride(), 4);
        assert_eq!(VertexDataType::Float3.stride(), 12);
        assert_eq!(VertexDataType::Double3.stride(), 24);
        assert_eq!(VertexDataType::Double4.stride(), 32);
        assert_eq!(IndexDataType::Int16.stride(), 2);
        assert_eq!(IndexDataType::Int32.stride(), 4);
    }
}
