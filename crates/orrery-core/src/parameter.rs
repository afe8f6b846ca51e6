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

//! Material parameters that are either an inline value or an image map.

use crate::{
    asset::ImageHandle,
    math::{Vec3, Vec4},
};

/// A material input that is either a constant value or sampled from an image.
///
/// Exactly one arm is live at a time. Pattern matching is the preferred way
/// to read it; [`as_value`](Self::as_value) and
/// [`as_resource`](Self::as_resource) are provided for call sites that have
/// already established which arm is live.
///
/// # Examples
///
/// ```
/// use orrery_core::parameter::Parameter;
///
/// let roughness = Parameter::from(0.25);
/// assert!(roughness.is_value());
/// assert_eq!(roughness.as_value(), 0.25);
/// ```
#[derive(Debug, Clone)]
pub enum ParameterMap<T> {
    /// A constant value.
    Value(T),
    /// A per-texel value read from an external image.
    Map(ImageHandle),
}

/// An RGBA color input.
pub type Color = ParameterMap<Vec4>;
/// A surface normal input.
pub type Normal = ParameterMap<Vec3>;
/// A scalar input such as metallic or roughness.
pub type Parameter = ParameterMap<f32>;

impl<T: Copy> ParameterMap<T> {
    /// Returns `true` if this parameter holds a constant value.
    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(self, ParameterMap::Value(_))
    }

    /// Returns the constant value, or `None` for an image map.
    #[inline]
    pub fn value(&self) -> Option<T> {
        match self {
            ParameterMap::Value(v) => Some(*v),
            ParameterMap::Map(_) => None,
        }
    }

    /// Returns the image handle, or `None` for a constant value.
    #[inline]
    pub fn image(&self) -> Option<&ImageHandle> {
        match self {
            ParameterMap::Value(_) => None,
            ParameterMap::Map(image) => Some(image),
        }
    }

    /// Returns the constant value.
    ///
    /// # Panics
    /// Panics if the parameter is an image map. Check [`is_value`](Self::is_value)
    /// first or use [`value`](Self::value).
    #[track_caller]
    pub fn as_value(&self) -> T {
        match self {
            ParameterMap::Value(v) => *v,
            ParameterMap::Map(_) => panic!("ParameterMap::as_value called on an image map"),
        }
    }

    /// Returns the image handle.
    ///
    /// # Panics
    /// Panics if the parameter is a constant value. Check
    /// [`is_value`](Self::is_value) first or use [`image`](Self::image).
    #[track_caller]
    pub fn as_resource(&self) -> &ImageHandle {
        match self {
            ParameterMap::Value(_) => panic!("ParameterMap::as_resource called on a constant value"),
            ParameterMap::Map(image) => image,
        }
    }

    /// Replaces the parameter with a constant value, releasing any image
    /// handle it held.
    pub fn set_value(&mut self, value: T) {
        *self = ParameterMap::Value(value);
    }

    /// Replaces the parameter with an image map.
    pub fn set_image(&mut self, image: ImageHandle) {
        *self = ParameterMap::Map(image);
    }
}

impl<T> From<ImageHandle> for ParameterMap<T> {
    fn from(image: ImageHandle) -> Self {
        ParameterMap::Map(image)
    }
}

impl From<f32> for Parameter {
    fn from(value: f32) -> Self {
        ParameterMap::Value(value)
    }
}

impl From<Vec3> for Normal {
    fn from(value: Vec3) -> Self {
        ParameterMap::Value(value)
    }
}

impl From<Vec4> for Color {
    fn from(value: Vec4) -> Self {
        ParameterMap::Value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{Asset, Image};

    struct Swatch;
    impl Asset for Swatch {}
    impl Image for Swatch {}

    #[test]
    fn test_value_construction() {
        let color = Color::from(Vec4::new(1.0, 0.5, 0.25, 1.0));
        assert!(color.is_value());
        assert_eq!(color.value(), Some(Vec4::new(1.0, 0.5, 0.25, 1.0)));
        assert!(color.image().is_none());
    }

    #[test]
    fn test_image_construction() {
        let image = ImageHandle::from_image(Swatch);
        let normal = Normal::from(image.clone());
        assert!(!normal.is_value());
        assert!(normal.value().is_none());
        assert!(normal.as_resource().ptr_eq(&image));
    }

    #[test]
    fn test_switching_arms() {
        let mut metallic = Parameter::from(0.0);
        metallic.set_image(ImageHandle::from_image(Swatch));
        assert!(!metallic.is_value());

        metallic.set_value(1.0);
        assert!(metallic.is_value());
        assert_eq!(metallic.as_value(), 1.0);
    }

    #[test]
    #[should_panic(expected = "as_resource called on a constant value")]
    fn test_as_resource_on_value_panics() {
        let param = Parameter::from(0.5);
        let _ = param.as_resource();
    }

    #[test]
    #[should_panic(expected = "as_value called on an image map")]
    fn test_as_value_on_map_panics() {
        let param = Parameter::from(ImageHandle::from_image(Swatch));
        let _ = param.as_value();
    }
}
