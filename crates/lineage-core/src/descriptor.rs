//! Sprite identity and descriptor types.
//!
//! A [`SpriteDescriptor`] is the raw record the host's data-fetch
//! collaborator hands over for every visual item. The layout engine never
//! interprets the embedded metadata payload; it only reads the identity,
//! the parent reference and the display name.

use serde_json::Value;

/// Fixed identity of the synthetic root every parentless sprite hangs from.
pub const ROOT_IDENTITY: &str = "parent_0";

/// Unique identity of a sprite (a content hash in practice).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteId(pub String);

impl SpriteId {
    /// The identity of the synthetic root node.
    pub fn root() -> Self {
        SpriteId(ROOT_IDENTITY.to_owned())
    }

    /// Whether this is the synthetic root identity.
    pub fn is_root(&self) -> bool {
        self.0 == ROOT_IDENTITY
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SpriteId {
    fn from(s: &str) -> Self {
        SpriteId(s.to_string())
    }
}

impl From<String> for SpriteId {
    fn from(s: String) -> Self {
        SpriteId(s)
    }
}

impl std::fmt::Display for SpriteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One visual item and its lineage, as delivered by the host.
///
/// A descriptor without a parent reference is rooted under the synthetic
/// root during layout. `metadata` is an opaque payload carried through to
/// the layout node untouched.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteDescriptor {
    /// Primary key of the sprite.
    pub id: SpriteId,
    /// Identity of the sprite this one was derived from, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parent: Option<SpriteId>,
    /// Display name; rewritten in place by name deduplication.
    pub name: String,
    /// Opaque payload (sprite JSON, tags, ...), never interpreted here.
    #[cfg_attr(feature = "serde", serde(default))]
    pub metadata: Value,
}

impl SpriteDescriptor {
    /// Create a descriptor with no parent and an empty metadata payload.
    pub fn new(id: impl Into<SpriteId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            name: name.into(),
            metadata: Value::Null,
        }
    }

    /// Set the parent identity.
    pub fn with_parent(mut self, parent: impl Into<SpriteId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Attach a metadata payload.
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = metadata;
        self
    }
}
