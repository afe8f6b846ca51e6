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

//! Defines the camera scene object.

use crate::{
    identity::{Guid, IdentityService},
    object::{impl_scene_object, SceneObjectHeader},
    settings::CameraSettings,
    tag::SceneObjectType,
};

/// A perspective camera's projection parameters.
#[derive(Debug)]
pub struct SceneObjectCamera {
    header: SceneObjectHeader,
    field_of_view: f32,
    near_clip: f32,
    far_clip: f32,
}

impl SceneObjectCamera {
    /// Creates a camera with default settings and a fresh identity.
    pub fn new(ids: &dyn IdentityService) -> Self {
        Self::from_settings(ids, &CameraSettings::default())
    }

    /// Creates a camera from `settings` with a fresh identity.
    pub fn from_settings(ids: &dyn IdentityService, settings: &CameraSettings) -> Self {
        Self::from_header(SceneObjectHeader::new(SceneObjectType::Camera, ids), settings)
    }

    /// Creates a camera that keeps an existing identity.
    pub fn with_guid(guid: Guid, settings: &CameraSettings) -> Self {
        Self::from_header(
            SceneObjectHeader::with_guid(guid, SceneObjectType::Camera),
            settings,
        )
    }

    fn from_header(header: SceneObjectHeader, settings: &CameraSettings) -> Self {
        Self {
            header,
            field_of_view: settings.field_of_view,
            near_clip: settings.near_clip,
            far_clip: settings.far_clip,
        }
    }

    /// Sets the vertical field of view in radians.
    pub fn with_field_of_view(mut self, field_of_view: f32) -> Self {
        self.field_of_view = field_of_view;
        self
    }

    /// Sets the near and far clip distances.
    pub fn with_clip_distances(mut self, near_clip: f32, far_clip: f32) -> Self {
        self.near_clip = near_clip;
        self.far_clip = far_clip;
        self
    }

    /// Vertical field of view in radians.
    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    /// Distance to the near clip plane.
    pub fn near_clip(&self) -> f32 {
        self.near_clip
    }

    /// Distance to the far clip plane.
    pub fn far_clip(&self) -> f32 {
        self.far_clip
    }
}

impl_scene_object!(SceneObjectCamera);
