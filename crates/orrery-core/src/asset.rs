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

//! Handles to external resources referenced by scene objects.
//!
//! Images live outside the scene-object model; the model only stores and
//! passes along handles to them. Loading, decoding and GPU upload belong to
//! other layers.

use std::{fmt, ops::Deref, sync::Arc};

/// A marker trait for types that can be referenced through an [`AssetHandle`].
///
/// `Send + Sync + 'static` lets a completed scene be read from several
/// threads at once.
pub trait Asset: Send + Sync + 'static {}

/// An external image resource, opaque to the scene-object model.
///
/// # Examples
///
/// ```
/// use orrery_core::asset::{Asset, Image, ImageHandle};
///
/// struct Png {
///     bytes: Vec<u8>,
/// }
/// impl Asset for Png {}
/// impl Image for Png {}
///
/// let handle = ImageHandle::from_image(Png { bytes: vec![0x89, b'P'] });
/// let other = handle.clone();
/// assert!(handle.ptr_eq(&other));
/// ```
pub trait Image: Asset {}

/// A thread-safe, reference-counted handle to a loaded asset.
///
/// Cloning a handle only increments the reference count; the asset itself is
/// never duplicated and is released when the last handle is dropped.
pub struct AssetHandle<T: ?Sized + Asset>(Arc<T>);

/// A type-erased handle to an external image.
pub type ImageHandle = AssetHandle<dyn Image>;

impl<T: Asset> AssetHandle<T> {
    /// Creates a new `AssetHandle` that takes ownership of the asset data.
    pub fn new(asset: T) -> Self {
        Self(Arc::new(asset))
    }
}

impl<T: ?Sized + Asset> AssetHandle<T> {
    /// Wraps an existing shared pointer.
    pub fn from_arc(asset: Arc<T>) -> Self {
        Self(asset)
    }

    /// Returns `true` if both handles point at the same asset.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl ImageHandle {
    /// Creates a type-erased handle from a concrete image.
    pub fn from_image<I: Image>(image: I) -> Self {
        let shared: Arc<dyn Image> = Arc::new(image);
        Self(shared)
    }
}

impl<I: Image> AssetHandle<I> {
    /// Erases the concrete image type, keeping the same shared asset.
    pub fn into_image(self) -> ImageHandle {
        let shared: Arc<dyn Image> = self.0;
        AssetHandle(shared)
    }
}

impl<T: ?Sized + Asset> Clone for AssetHandle<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: ?Sized + Asset> Deref for AssetHandle<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: ?Sized + Asset> fmt::Debug for AssetHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AssetHandle")
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Checker(u32);
    impl Asset for Checker {}
    impl Image for Checker {}

    #[test]
    fn test_clone_shares_asset() {
        let handle = AssetHandle::new(Checker(8));
        let clone = handle.clone();
        assert!(handle.ptr_eq(&clone));
        assert_eq!((*clone).0, 8);
    }

    #[test]
    fn test_type_erasure_keeps_identity() {
        let concrete = AssetHandle::new(Checker(4));
        let erased = concrete.clone().into_image();
        let again = concrete.into_image();
        assert!(erased.ptr_eq(&again));
    }

    #[test]
    fn test_distinct_images_are_not_equal() {
        let a = ImageHandle::from_image(Checker(1));
        let b = ImageHandle::from_image(Checker(1));
        assert!(!a.ptr_eq(&b));
    }
}
