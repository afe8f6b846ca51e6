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

//! # Orrery Core
//!
//! The typed scene-object model: meshes, materials, geometries, textures,
//! lights and cameras, each carrying a globally unique identity and a
//! four-character type tag.
//!
//! Objects are built bottom-up and moved into their owners: vertex and index
//! arrays into a mesh, meshes into a geometry. Nothing is shared and nothing
//! points back up, so a finished scene is a plain tree that can be read from
//! any number of threads.
//!
//! ```
//! use orrery_core::prelude::*;
//!
//! let ids = SequentialIdentity::default();
//!
//! let mut mesh = SceneObjectMesh::new(&ids);
//! mesh.add_vertex_array(SceneObjectVertexArray::new(&ids, "position", VertexDataType::Float3, vec![0; 12]));
//! mesh.add_index_array(SceneObjectIndexArray::new(&ids, 0, IndexDataType::Int16, Vec::new()));
//!
//! let mut geometry = SceneObjectGeometry::new(&ids);
//! geometry.add_mesh(mesh);
//!
//! assert_eq!(geometry.meshes().len(), 1);
//! assert!(geometry.dump().ends_with("Type: GEOM\n"));
//! ```

#![warn(missing_docs)]

pub mod asset;
pub mod buffer;
pub mod camera;
pub mod error;
pub mod factory;
pub mod geometry;
pub mod identity;
pub mod light;
pub mod material;
pub mod math;
pub mod mesh;
pub mod object;
pub mod parameter;
pub mod settings;
pub mod tag;
pub mod texture;

pub use error::{Result, SceneError};

/// Commonly used types, for glob import.
pub mod prelude {
    pub use crate::{
        asset::{Asset, AssetHandle, Image, ImageHandle},
        buffer::{SceneObjectIndexArray, SceneObjectVertexArray},
        camera::SceneObjectCamera,
        factory::SceneObjectFactory,
        geometry::SceneObjectGeometry,
        identity::{
            Guid, IdentityService, NamespacedIdentity, RandomIdentity, SequentialIdentity,
        },
        light::{AttenuationFn, LightVariant, SceneObjectLight},
        material::SceneObjectMaterial,
        math::{Vec3, Vec4},
        mesh::SceneObjectMesh,
        object::{AnySceneObject, SceneObject, SceneObjectHeader},
        parameter::{Color, Normal, Parameter, ParameterMap},
        settings::SceneSettings,
        tag::{IndexDataType, SceneObjectType, TypeTag, VertexDataType},
        texture::SceneObjectTexture,
    };
}
