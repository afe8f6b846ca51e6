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

//! Defines the PBR material scene object (metallic-roughness workflow).

use crate::{
    identity::{Guid, IdentityService},
    math::{Vec3, Vec4},
    object::{impl_scene_object, SceneObjectHeader},
    parameter::{Color, Normal, Parameter},
    tag::SceneObjectType,
};

/// A physically-based material using the metallic-roughness workflow.
///
/// Every input is a [`ParameterMap`](crate::parameter::ParameterMap), so it
/// can be a constant or sampled from an image.
///
/// # Defaults
///
/// - **Base color**: opaque white.
/// - **Metallic**, **roughness**, **specular**: `0.0`.
/// - **Normal**: `+Z` (unperturbed tangent-space normal).
/// - **Ambient occlusion**: `1.0` (fully lit).
///
/// # Examples
///
/// ```
/// use orrery_core::identity::RandomIdentity;
/// use orrery_core::material::SceneObjectMaterial;
/// use orrery_core::math::Vec4;
///
/// // A polished gold surface.
/// let gold = SceneObjectMaterial::new(&RandomIdentity)
///     .with_base_color(Vec4::new(1.0, 0.766, 0.336, 1.0))
///     .with_metallic(1.0)
///     .with_roughness(0.2);
///
/// assert_eq!(gold.metallic().as_value(), 1.0);
/// assert_eq!(gold.ambient_occlusion().as_value(), 1.0);
/// ```
#[derive(Debug)]
pub struct SceneObjectMaterial {
    header: SceneObjectHeader,
    base_color: Color,
    metallic: Parameter,
    roughness: Parameter,
    normal: Normal,
    specular: Parameter,
    ambient_occlusion: Parameter,
}

impl SceneObjectMaterial {
    /// Creates a material with default inputs and a fresh identity.
    pub fn new(ids: &dyn IdentityService) -> Self {
        Self::from_header(SceneObjectHeader::new(SceneObjectType::Material, ids))
    }

    /// Creates a material with default inputs that keeps an existing identity.
    pub fn with_guid(guid: Guid) -> Self {
        Self::from_header(SceneObjectHeader::with_guid(guid, SceneObjectType::Material))
    }

    fn from_header(header: SceneObjectHeader) -> Self {
        Self {
            header,
            base_color: Color::from(Vec4::ONE),
            metallic: Parameter::from(0.0),
            roughness: Parameter::from(0.0),
            normal: Normal::from(Vec3::Z),
            specular: Parameter::from(0.0),
            ambient_occlusion: Parameter::from(1.0),
        }
    }

    /// Sets the base color (albedo).
    pub fn with_base_color(mut self, base_color: impl Into<Color>) -> Self {
        self.base_color = base_color.into();
        self
    }

    /// Sets the metallic factor (0.0 = dielectric, 1.0 = metal).
    pub fn with_metallic(mut self, metallic: impl Into<Parameter>) -> Self {
        self.metallic = metallic.into();
        self
    }

    /// Sets the roughness factor (0.0 = smooth, 1.0 = rough).
    pub fn with_roughness(mut self, roughness: impl Into<Parameter>) -> Self {
        self.roughness = roughness.into();
        self
    }

    /// Sets the tangent-space normal.
    pub fn with_normal(mut self, normal: impl Into<Normal>) -> Self {
        self.normal = normal.into();
        self
    }

    /// Sets the specular factor.
    pub fn with_specular(mut self, specular: impl Into<Parameter>) -> Self {
        self.specular = specular.into();
        self
    }

    /// Sets the ambient occlusion factor (1.0 = fully lit).
    pub fn with_ambient_occlusion(mut self, ambient_occlusion: impl Into<Parameter>) -> Self {
        self.ambient_occlusion = ambient_occlusion.into();
        self
    }

    /// The base color input.
    pub fn base_color(&self) -> &Color {
        &self.base_color
    }

    /// The metallic input.
    pub fn metallic(&self) -> &Parameter {
        &self.metallic
    }

    /// The roughness input.
    pub fn roughness(&self) -> &Parameter {
        &self.roughness
    }

    /// The normal input.
    pub fn normal(&self) -> &Normal {
        &self.normal
    }

    /// The specular input.
    pub fn specular(&self) -> &Parameter {
        &self.specular
    }

    /// The ambient occlusion input.
    pub fn ambient_occlusion(&self) -> &Parameter {
        &self.ambient_occlusion
    }
}

impl_scene_object!(SceneObjectMaterial);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        asset::{Asset, Image, ImageHandle},
        identity::SequentialIdentity,
        object::SceneObject,
    };

    struct NormalMap;
    impl Asset for NormalMap {}
    impl Image for NormalMap {}

    #[test]
    fn test_material_defaults() {
        let material = SceneObjectMaterial::new(&SequentialIdentity::default());

        assert_eq!(material.kind(), SceneObjectType::Material);
        assert_eq!(material.base_color().as_value(), Vec4::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(material.metallic().as_value(), 0.0);
        assert_eq!(material.roughness().as_value(), 0.0);
        assert_eq!(material.normal().as_value(), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(material.specular().as_value(), 0.0);
        assert_eq!(material.ambient_occlusion().as_value(), 1.0);
    }

    #[test]
    fn test_material_custom_values() {
        let material = SceneObjectMaterial::new(&SequentialIdentity::default())
            .with_base_color(Vec4::new(1.0, 0.0, 0.0, 1.0))
            .with_roughness(0.9)
            .with_specular(0.5)
            .with_ambient_occlusion(0.8);

        assert_eq!(material.base_color().as_value(), Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(material.roughness().as_value(), 0.9);
        assert_eq!(material.specular().as_value(), 0.5);
        assert_eq!(material.ambient_occlusion().as_value(), 0.8);
        assert_eq!(material.metallic().as_value(), 0.0);
    }

    #[test]
    fn test_material_image_inputs() {
        let map = ImageHandle::from_image(NormalMap);
        let material = SceneObjectMaterial::new(&SequentialIdentity::default())
            .with_normal(map.clone());

        assert!(!material.normal().is_value());
        assert!(material.normal().as_resource().ptr_eq(&map));
        assert!(material.base_color().is_value());
    }
}
