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

//! Defines the error type shared by the fallible parts of the scene-object model.
//!
//! Most contracts of the model are enforced by the type system. The errors here
//! cover the points where untrusted input (raw tags, identifier text, settings
//! documents) is turned back into typed values.

use crate::tag::TypeTag;
use thiserror::Error;

/// An error produced while decoding or validating scene-object data.
#[derive(Debug, Error)]
pub enum SceneError {
    /// A type tag code did not consist of exactly four bytes.
    #[error("type tag code '{code}' must be exactly 4 characters, got {len}")]
    InvalidTagLength {
        /// The offending code.
        code: String,
        /// Its length in bytes.
        len: usize,
    },

    /// A type tag code contained a non-ASCII character.
    #[error("type tag code '{0}' contains non-ASCII characters")]
    NonAsciiTag(String),

    /// A tag value did not correspond to any member of the expected enumeration.
    #[error("unknown {context} tag {tag} ({value:#010x})", value = .tag.value())]
    UnknownTag {
        /// The enumeration being decoded (e.g. "scene object type").
        context: &'static str,
        /// The tag that failed to decode.
        tag: TypeTag,
    },

    /// Identifier text could not be parsed as a GUID.
    #[error("invalid GUID: {0}")]
    InvalidGuid(#[from] uuid::Error),

    /// A settings document could not be parsed.
    #[error("invalid scene settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),
}

/// A specialized `Result` type for scene-object operations.
pub type Result<T> = std::result::Result<T, SceneError>;
