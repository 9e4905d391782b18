use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::Deref,
    str::FromStr,
};

use chrono::{DateTime, Utc};
use fxhash::FxHasher64;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::{players::Player, section::Section};

/// Creates an id (of any type) from a registration time and a hashable
/// value. Two callers that agree on the salt and value derive the same
/// id, which keeps replicated stores in agreement without coordination.
pub fn id_from_item<T, ID>(salt: DateTime<Utc>, item: T) -> TypeId<ID>
where
    T: Hash,
{
    let mut hasher = FxHasher64::default();
    salt.hash(&mut hasher);
    let upper = hasher.finish();
    item.hash(&mut hasher);
    let lower = hasher.finish();
    Uuid::from_u64_pair(upper, lower).into()
}

#[derive(Debug)]
#[repr(C)]
/// A generic type-checked wrapper around a Uuid (to reduce boilerplate and redundant code)
pub struct TypeId<T>(pub Uuid, PhantomData<T>);

/// A type-checked Uuid for players
pub type PlayerId = TypeId<Player>;
/// A type-checked Uuid for sections
pub type SectionId = TypeId<Section>;

#[derive(Serialize, Deserialize, Debug, Clone, Hash, PartialEq, Eq)]
/// An enum for identifying a player
pub enum PlayerIdentifier {
    /// The player's id
    Id(PlayerId),
    /// The player's name
    Name(String),
}

impl<T> TypeId<T> {
    /// Creates a new typed id from a Uuid
    pub fn new(id: Uuid) -> Self {
        Self(id, PhantomData)
    }
}

impl<T> Default for TypeId<T> {
    fn default() -> Self {
        Self(Uuid::default(), PhantomData)
    }
}

impl<T> Clone for TypeId<T> {
    fn clone(&self) -> Self {
        Self(self.0, PhantomData)
    }
}

impl<T> Copy for TypeId<T> {}

impl<T> Hash for TypeId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl<T> PartialEq for TypeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T> Eq for TypeId<T> {}

impl<T> Deref for TypeId<T> {
    type Target = Uuid;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> From<TypeId<T>> for Uuid {
    fn from(other: TypeId<T>) -> Uuid {
        other.0
    }
}

impl<T> From<Uuid> for TypeId<T> {
    fn from(other: Uuid) -> TypeId<T> {
        TypeId(other, PhantomData)
    }
}

impl From<PlayerId> for PlayerIdentifier {
    fn from(other: PlayerId) -> PlayerIdentifier {
        PlayerIdentifier::Id(other)
    }
}

impl<'de, T> Deserialize<'de> for TypeId<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Uuid::deserialize(deserializer).map(|id| id.into())
    }
}

impl<T> Serialize for TypeId<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> FromStr for TypeId<T> {
    type Err = <Uuid as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::from_str(s).map(Into::into)
    }
}

impl<T> Display for TypeId<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::{id_from_item, PlayerId};

    #[test]
    fn basic_serde() {
        let id = Uuid::new_v4();
        let p_id: PlayerId = id.into();
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            serde_json::to_string(&p_id).unwrap()
        );
        let new_p_id: PlayerId =
            serde_json::from_str(&serde_json::to_string(&id).unwrap()).unwrap();
        assert_eq!(id, new_p_id.0);
        assert_eq!(p_id, new_p_id);
    }

    #[test]
    fn salted_ids_are_reproducible() {
        let salt = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let a: PlayerId = id_from_item(salt, "Alice");
        let b: PlayerId = id_from_item(salt, "Alice");
        let c: PlayerId = id_from_item(salt, "Bob");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
