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

//! Defines the light scene object and its variants.
//!
//! A light is always created as a concrete variant (omni or spot); there is
//! no way to build a "plain" light. The properties shared by every variant
//! live on [`SceneObjectLight`], the variant-specific beam shape lives in
//! [`LightVariant`].

use crate::{
    identity::{Guid, IdentityService},
    math::Vec4,
    object::{impl_scene_object, SceneObjectHeader},
    parameter::Color,
    settings::LightSettings,
    tag::SceneObjectType,
};

/// Computes the attenuated intensity of a light at a distance.
///
/// Arguments are `(intensity, distance)`. Concrete formulas are supplied by
/// the lighting setup; the scene model only stores and calls them.
pub type AttenuationFn = fn(f32, f32) -> f32;

/// The beam shape of a light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightVariant {
    /// Emits in every direction from a point.
    Omni,
    /// Emits in a cone.
    Spot {
        /// Full cone angle in radians.
        cone_angle: f32,
        /// Angle in radians over which the edge of the cone fades out.
        penumbra_angle: f32,
    },
}

/// A light source.
///
/// # Examples
///
/// ```
/// use orrery_core::identity::RandomIdentity;
/// use orrery_core::light::SceneObjectLight;
///
/// fn inverse_square(intensity: f32, distance: f32) -> f32 {
///     intensity / (distance * distance)
/// }
///
/// let flashlight = SceneObjectLight::spot(&RandomIdentity, 30f32.to_radians(), 5f32.to_radians())
///     .with_intensity(200.0)
///     .with_attenuation(inverse_square)
///     .with_shadows(true);
///
/// assert_eq!(flashlight.attenuate(2.0), Some(50.0));
/// assert!(flashlight.cone_angle().is_some());
/// ```
#[derive(Debug)]
pub struct SceneObjectLight {
    header: SceneObjectHeader,
    variant: LightVariant,
    color: Color,
    intensity: f32,
    attenuation: Option<AttenuationFn>,
    near_clip: f32,
    far_clip: f32,
    casts_shadows: bool,
}

impl SceneObjectLight {
    /// Creates an omni light with default settings.
    pub fn omni(ids: &dyn IdentityService) -> Self {
        Self::new(ids, LightVariant::Omni, &LightSettings::default())
    }

    /// Creates a spot light with default settings.
    pub fn spot(ids: &dyn IdentityService, cone_angle: f32, penumbra_angle: f32) -> Self {
        Self::new(
            ids,
            LightVariant::Spot {
                cone_angle,
                penumbra_angle,
            },
            &LightSettings::default(),
        )
    }

    /// Creates a light of the given variant with a fresh identity.
    pub fn new(ids: &dyn IdentityService, variant: LightVariant, settings: &LightSettings) -> Self {
        Self::from_header(
            SceneObjectHeader::new(SceneObjectType::Light, ids),
            variant,
            settings,
        )
    }

    /// Creates a light of the given variant that keeps an existing identity.
    pub fn with_guid(guid: Guid, variant: LightVariant, settings: &LightSettings) -> Self {
        Self::from_header(
            SceneObjectHeader::with_guid(guid, SceneObjectType::Light),
            variant,
            settings,
        )
    }

    fn from_header(header: SceneObjectHeader, variant: LightVariant, settings: &LightSettings) -> Self {
        Self {
            header,
            variant,
            color: Color::from(Vec4::ONE),
            intensity: settings.intensity,
            attenuation: None,
            near_clip: settings.near_clip,
            far_clip: settings.far_clip,
            casts_shadows: settings.casts_shadows,
        }
    }

    /// Sets the light color.
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the intensity multiplier.
    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    /// Sets the attenuation function.
    pub fn with_attenuation(mut self, attenuation: AttenuationFn) -> Self {
        self.attenuation = Some(attenuation);
        self
    }

    /// Sets the near and far clip distances of the shadow frustum.
    pub fn with_clip_distances(mut self, near_clip: f32, far_clip: f32) -> Self {
        self.near_clip = near_clip;
        self.far_clip = far_clip;
        self
    }

    /// Sets whether the light casts shadows.
    pub fn with_shadows(mut self, casts_shadows: bool) -> Self {
        self.casts_shadows = casts_shadows;
        self
    }

    /// The beam shape.
    pub fn variant(&self) -> LightVariant {
        self.variant
    }

    /// Returns `true` for spot lights.
    pub fn is_spot(&self) -> bool {
        matches!(self.variant, LightVariant::Spot { .. })
    }

    /// The light color.
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// The intensity multiplier.
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// The attenuation function, if one was supplied.
    pub fn attenuation(&self) -> Option<AttenuationFn> {
        self.attenuation
    }

    /// Evaluates the attenuation function for this light's intensity at
    /// `distance`. Returns `None` when no function was supplied.
    pub fn attenuate(&self, distance: f32) -> Option<f32> {
        self.attenuation.map(|f| f(self.intensity, distance))
    }

    /// Distance to the near clip plane.
    pub fn near_clip(&self) -> f32 {
        self.near_clip
    }

    /// Distance to the far clip plane.
    pub fn far_clip(&self) -> f32 {
        self.far_clip
    }

    /// Whether the light casts shadows.
    pub fn casts_shadows(&self) -> bool {
        self.casts_shadows
    }

    /// The cone angle of a spot light.
    pub fn cone_angle(&self) -> Option<f32> {
        match self.variant {
            LightVariant::Spot { cone_angle, .. } => Some(cone_angle),
            LightVariant::Omni => None,
        }
    }

    /// The penumbra angle of a spot light.
    pub fn penumbra_angle(&self) -> Option<f32> {
        match self.variant {
            LightVariant::Spot { penumbra_angle, .. } => Some(penumbra_angle),
            LightVariant::Omni => None,
        }
    }
}

impl_scene_object!(SceneObjectLight);
