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

//! Defines the texture scene object.

use crate::{
    asset::ImageHandle,
    identity::{Guid, IdentityService},
    object::{impl_scene_object, SceneObjectHeader},
    tag::SceneObjectType,
};

/// A named texture entry in a scene.
///
/// The name is usually the source path of the image. The image itself is
/// attached once the loading layer has decoded it.
#[derive(Debug)]
pub struct SceneObjectTexture {
    header: SceneObjectHeader,
    name: String,
    tex_coord_index: u32,
    image: Option<ImageHandle>,
}

impl SceneObjectTexture {
    /// Creates a texture with a fresh identity and no image attached.
    pub fn new(ids: &dyn IdentityService, name: impl Into<String>) -> Self {
        Self::from_header(SceneObjectHeader::new(SceneObjectType::Texture, ids), name.into())
    }

    /// Creates a texture that keeps an existing identity.
    pub fn with_guid(guid: Guid, name: impl Into<String>) -> Self {
        Self::from_header(
            SceneObjectHeader::with_guid(guid, SceneObjectType::Texture),
            name.into(),
        )
    }

    fn from_header(header: SceneObjectHeader, name: String) -> Self {
        Self {
            header,
            name,
            tex_coord_index: 0,
            image: None,
        }
    }

    /// Selects which UV set samples this texture.
    pub fn with_tex_coord_index(mut self, index: u32) -> Self {
        self.tex_coord_index = index;
        self
    }

    /// Attaches the decoded image.
    pub fn with_image(mut self, image: ImageHandle) -> Self {
        self.image = Some(image);
        self
    }

    /// The texture name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The UV set index.
    pub fn tex_coord_index(&self) -> u32 {
        self.tex_coord_index
    }

    /// The attached image, if loaded.
    pub fn image(&self) -> Option<&ImageHandle> {
        self.image.as_ref()
    }
}

impl_scene_object!(SceneObjectTexture);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        asset::{Asset, Image},
        identity::SequentialIdentity,
        object::SceneObject,
    };

    struct Bricks;
    impl Asset for Bricks {}
    impl Image for Bricks {}

    #[test]
    fn test_texture_without_image() {
        let texture = SceneObjectTexture::new(&SequentialIdentity::default(), "bricks_albedo.png");
        assert_eq!(texture.kind(), SceneObjectType::Texture);
        assert_eq!(texture.name(), "bricks_albedo.png");
        assert_eq!(texture.tex_coord_index(), 0);
        assert!(texture.image().is_none());
        assert!(texture.dump().ends_with("Type: TXTU\n"));
    }

    #[test]
    fn test_texture_with_image() {
        let image = ImageHandle::from_image(Bricks);
        let texture = SceneObjectTexture::new(&SequentialIdentity::default(), "bricks_normal.png")
            .with_tex_coord_index(1)
            .with_image(image.clone());

        assert_eq!(texture.tex_coord_index(), 1);
        assert!(texture.image().is_some_and(|i| i.ptr_eq(&image)));
    }
}
