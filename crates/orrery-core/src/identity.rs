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

//! Globally unique identifiers and the services that hand them out.
//!
//! Every scene object draws its [`Guid`] from an [`IdentityService`] at
//! construction. The service is passed in explicitly, so tests can use a
//! deterministic generator while production code uses random UUIDs.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    str::FromStr,
    sync::atomic::{AtomicU64, Ordering},
};
use uuid::Uuid;

/// Namespace used by [`Guid::from_name`].
const NAME_NAMESPACE: Uuid = Uuid::from_u128(0x6f72_7265_7279_4f52_5245_5259_6e61_6d65);

/// A globally unique, persistent identifier for one scene object.
///
/// The identifier is decoupled from any file path or memory address, so
/// objects in different files can reference each other by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Guid(Uuid);

impl Guid {
    /// Creates a new, random (version 4) `Guid`.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a stable (version 5) `Guid` derived from a name.
    ///
    /// The same name always yields the same identifier.
    pub fn from_name(name: &str) -> Self {
        Self(Uuid::new_v5(&NAME_NAMESPACE, name.as_bytes()))
    }

    /// Builds a `Guid` from its 128-bit value.
    #[inline]
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// Wraps an existing UUID.
    #[inline]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The all-zero identifier. Never produced by an [`IdentityService`]
    /// shipped with this crate except [`SequentialIdentity`] started at zero.
    #[inline]
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Returns `true` if this is the all-zero identifier.
    #[inline]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Returns the underlying UUID.
    #[inline]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parses the textual form produced by `Display`.
    pub fn parse_str(text: &str) -> Result<Self> {
        Ok(Self(Uuid::parse_str(text)?))
    }
}

impl fmt::Display for Guid {
    /// Writes the hyphenated, lowercase form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for Guid {
    type Err = crate::error::SceneError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

/// A source of fresh identifiers.
///
/// Implementations must be safe to call from any thread that constructs
/// scene objects; synchronisation is the service's job, not the caller's.
pub trait IdentityService: Send + Sync {
    /// Returns an identifier not previously returned by this service.
    fn new_identifier(&self) -> Guid;
}

/// Random (version 4) identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdentity;

impl IdentityService for RandomIdentity {
    fn new_identifier(&self) -> Guid {
        Guid::new_random()
    }
}

/// Identifiers taken from a monotonically increasing counter.
///
/// Deterministic: two services started at the same value hand out the same
/// sequence.
#[derive(Debug, Default)]
pub struct SequentialIdentity {
    next: AtomicU64,
}

impl SequentialIdentity {
    /// Creates a service whose first identifier is `Guid::from_u128(start)`.
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl IdentityService for SequentialIdentity {
    fn new_identifier(&self) -> Guid {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        Guid::from_u128(u128::from(n))
    }
}

/// Name-based (version 5) identifiers scoped to a namespace.
///
/// The n-th identifier of a namespace is always the same, and different
/// namespaces never share identifiers in practice.
#[derive(Debug)]
pub struct NamespacedIdentity {
    namespace: Uuid,
    counter: AtomicU64,
}

impl NamespacedIdentity {
    /// Creates a service scoped to `namespace`.
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: Uuid::new_v5(&NAME_NAMESPACE, namespace.as_bytes()),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdentityService for NamespacedIdentity {
    fn new_identifier(&self) -> Guid {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        Guid(Uuid::new_v5(&self.namespace, &n.to_le_bytes()))
    }
}

/// Which [`IdentityService`] to build, as read from settings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum IdentityStrategy {
    /// Use [`RandomIdentity`].
    #[default]
    Random,
    /// Use [`SequentialIdentity`] starting at `start`.
    Sequential {
        /// First counter value.
        #[serde(default)]
        start: u64,
    },
    /// Use [`NamespacedIdentity`] scoped to `namespace`.
    Namespaced {
        /// Namespace name.
        namespace: String,
    },
}

impl IdentityStrategy {
    /// Builds the configured service.
    pub fn build(&self) -> Box<dyn IdentityService> {
        match self {
            IdentityStrategy::Random => Box::new(RandomIdentity),
            IdentityStrategy::Sequential { start } => {
                Box::new(SequentialIdentity::starting_at(*start))
            }
            IdentityStrategy::Namespaced { namespace } => {
                Box::new(NamespacedIdentity::new(namespace))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_identities_are_unique() {
        let ids = RandomIdentity;
        let set: HashSet<_> = (0..1000).map(|_| ids.new_identifier()).collect();
        assert_eq!(set.len(), 1000);
    }

    #[test]
    fn test_sequential_is_deterministic() {
        let a = SequentialIdentity::starting_at(7);
        let b = SequentialIdentity::starting_at(7);
        for _ in 0..5 {
            assert_eq!(a.new_identifier(), b.new_identifier());
        }
        assert_eq!(
            SequentialIdentity::default().new_identifier(),
            Guid::nil()
        );
    }

    #[test]
    fn test_sequential_counts_up() {
        let ids = SequentialIdentity::starting_at(1);
        assert_eq!(ids.new_identifier(), Guid::from_u128(1));
        assert_eq!(ids.new_identifier(), Guid::from_u128(2));
    }

    #[test]
    fn test_namespaced_is_deterministic_and_scoped() {
        let a = NamespacedIdentity::new("level_01");
        let b = NamespacedIdentity::new("level_01");
        let c = NamespacedIdentity::new("level_02");

        let first_a = a.new_identifier();
        assert_eq!(first_a, b.new_identifier());
        assert_ne!(first_a, c.new_identifier());
        assert_ne!(first_a, a.new_identifier());
    }

    #[test]
    fn test_from_name_is_stable() {
        assert_eq!(Guid::from_name("cube"), Guid::from_name("cube"));
        assert_ne!(Guid::from_name("cube"), Guid::from_name("sphere"));
    }

    #[test]
    fn test_display_and_parse_round_trip() {
        let guid = Guid::new_random();
        let text = guid.to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(Guid::parse_str(&text).unwrap(), guid);
        assert_eq!(text.parse::<Guid>().unwrap(), guid);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Guid::parse_str("not-a-guid").is_err());
    }

    #[test]
    fn test_strategy_builds_matching_service() {
        let seq = IdentityStrategy::Sequential { start: 42 }.build();
        assert_eq!(seq.new_identifier(), Guid::from_u128(42));

        let random = IdentityStrategy::default().build();
        assert_ne!(random.new_identifier(), random.new_identifier());
    }

    #[test]
    fn test_services_are_shareable_across_threads() {
        let ids = std::sync::Arc::new(SequentialIdentity::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = ids.clone();
                std::thread::spawn(move || {
                    (0..100).map(|_| ids.new_identifier()).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all = HashSet::new();
        for handle in handles {
            all.extend(handle.join().unwrap());
        }
        assert_eq!(all.len(), 400);
    }
}
