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

//! A single entry point for creating scene objects.
//!
//! [`SceneObjectFactory`] bundles an [`IdentityService`] with the
//! [`SceneSettings`] defaults, so authoring code does not have to thread both
//! through every constructor call.

use crate::{
    buffer::{SceneObjectIndexArray, SceneObjectVertexArray},
    camera::SceneObjectCamera,
    geometry::SceneObjectGeometry,
    identity::IdentityService,
    light::{LightVariant, SceneObjectLight},
    material::SceneObjectMaterial,
    mesh::SceneObjectMesh,
    settings::SceneSettings,
    tag::{IndexDataType, VertexDataType},
    texture::SceneObjectTexture,
};

/// Creates scene objects with fresh identities and configured defaults.
pub struct SceneObjectFactory {
    ids: Box<dyn IdentityService>,
    settings: SceneSettings,
}

impl SceneObjectFactory {
    /// Creates a factory using the identity strategy named in `settings`.
    pub fn from_settings(settings: SceneSettings) -> Self {
        log::info!("Scene object factory using {:?} identities", settings.identity);
        Self {
            ids: settings.identity.build(),
            settings,
        }
    }

    /// Creates a factory with an explicit identity service.
    pub fn with_identity(ids: Box<dyn IdentityService>, settings: SceneSettings) -> Self {
        Self { ids, settings }
    }

    /// The identity service used by this factory.
    pub fn identity(&self) -> &dyn IdentityService {
        self.ids.as_ref()
    }

    /// The settings used by this factory.
    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    /// Creates an empty mesh.
    pub fn mesh(&self) -> SceneObjectMesh {
        SceneObjectMesh::new(self.identity())
    }

    /// Creates an empty geometry.
    pub fn geometry(&self) -> SceneObjectGeometry {
        SceneObjectGeometry::new(self.identity())
    }

    /// Creates a material with default inputs.
    pub fn material(&self) -> SceneObjectMaterial {
        SceneObjectMaterial::new(self.identity())
    }

    /// Creates a texture with no image attached.
    pub fn texture(&self, name: impl Into<String>) -> SceneObjectTexture {
        SceneObjectTexture::new(self.identity(), name)
    }

    /// Creates an omni light with the configured defaults.
    pub fn omni_light(&self) -> SceneObjectLight {
        SceneObjectLight::new(self.identity(), LightVariant::Omni, &self.settings.light)
    }

    /// Creates a spot light with the configured defaults.
    pub fn spot_light(&self, cone_angle: f32, penumbra_angle: f32) -> SceneObjectLight {
        SceneObjectLight::new(
            self.identity(),
            LightVariant::Spot {
                cone_angle,
                penumbra_angle,
            },
            &self.settings.light,
        )
    }

    /// Creates a camera with the configured defaults.
    pub fn camera(&self) -> SceneObjectCamera {
        SceneObjectCamera::from_settings(self.identity(), &self.settings.camera)
    }

    /// Creates a vertex array.
    pub fn vertex_array(
        &self,
        attribute: impl Into<String>,
        data_type: VertexDataType,
        data: Vec<u8>,
    ) -> SceneObjectVertexArray {
        SceneObjectVertexArray::new(self.identity(), attribute, data_type, data)
    }

    /// Creates an index array.
    pub fn index_array(
        &self,
        material_index: u32,
        data_type: IndexDataType,
        data: Vec<u8>,
    ) -> SceneObjectIndexArray {
        SceneObjectIndexArray::new(self.identity(), material_index, data_type, data)
    }
}

impl Default for SceneObjectFactory {
    fn default() -> Self {
        Self::from_settings(SceneSettings::default())
    }
}
