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

//! Settings that control how scene objects are created.

use crate::{error::Result, identity::IdentityStrategy};
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_4;

/// Default parameters for newly created cameras.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in radians.
    pub field_of_view: f32,
    /// Distance to the near clip plane.
    pub near_clip: f32,
    /// Distance to the far clip plane.
    pub far_clip: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            field_of_view: FRAC_PI_4,
            near_clip: 1.0,
            far_clip: 100.0,
        }
    }
}

/// Default parameters for newly created lights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightSettings {
    /// Intensity multiplier.
    pub intensity: f32,
    /// Distance to the near clip plane of the shadow frustum.
    pub near_clip: f32,
    /// Distance to the far clip plane of the shadow frustum.
    pub far_clip: f32,
    /// Whether lights cast shadows.
    pub casts_shadows: bool,
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            near_clip: 1.0,
            far_clip: 100.0,
            casts_shadows: false,
        }
    }
}

/// Settings for a [`SceneObjectFactory`](crate::factory::SceneObjectFactory).
///
/// Every field is optional in the serialized form.
///
/// ```
/// use orrery_core::settings::SceneSettings;
///
/// let settings = SceneSettings::from_json(r#"{
///     "identity": { "strategy": "sequential", "start": 100 },
///     "camera": { "field_of_view": 1.2 }
/// }"#).unwrap();
/// assert_eq!(settings.camera.field_of_view, 1.2);
/// assert_eq!(settings.camera.far_clip, 100.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// How identifiers are generated.
    pub identity: IdentityStrategy,
    /// Camera defaults.
    pub camera: CameraSettings,
    /// Light defaults.
    pub light: LightSettings,
}

impl SceneSettings {
    /// Parses settings from a JSON document.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SceneError;

    #[test]
    fn test_empty_document_gives_defaults() {
        let settings = SceneSettings::from_json("{}").unwrap();
        assert_eq!(settings, SceneSettings::default());
        assert_eq!(settings.identity, IdentityStrategy::Random);
    }

    #[test]
    fn test_partial_light_settings() {
        let settings =
            SceneSettings::from_json(r#"{ "light": { "casts_shadows": true } }"#).unwrap();
        assert!(settings.light.casts_shadows);
        assert_eq!(settings.light.intensity, 1.0);
    }

    #[test]
    fn test_namespaced_identity_strategy() {
        let settings = SceneSettings::from_json(
            r#"{ "identity": { "strategy": "namespaced", "namespace": "level_03" } }"#,
        )
        .unwrap();
        assert_eq!(
            settings.identity,
            IdentityStrategy::Namespaced {
                namespace: "level_03".to_owned()
            }
        );
    }

    #[test]
    fn test_invalid_document() {
        let err = SceneSettings::from_json(r#"{ "identity": { "strategy": "magic" } }"#)
            .unwrap_err();
        assert!(matches!(err, SceneError::InvalidSettings(_)));
    }
}
