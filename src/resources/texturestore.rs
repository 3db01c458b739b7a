//! Texture handles and the store that resolves them.
//!
//! Sprites never hold GPU textures. Each frame keeps a [`TextureHandle`], a
//! cheap shared key, and only the render backend looks the key up in the
//! [`TextureStore`].

use std::fmt;
use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Opaque key naming one loaded texture.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextureHandle(Arc<str>);

impl TextureHandle {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TextureHandle {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for TextureHandle {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<Arc<str>> for TextureHandle {
    fn from(key: Arc<str>) -> Self {
        Self(key)
    }
}

impl fmt::Display for TextureHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Loaded textures keyed by handle.
#[derive(Resource, Default)]
pub struct TextureStore {
    map: FxHashMap<TextureHandle, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `texture` under `key` and return the handle frames should use.
    pub fn insert(&mut self, key: impl Into<TextureHandle>, texture: Texture2D) -> TextureHandle {
        let handle = key.into();
        self.map.insert(handle.clone(), texture);
        handle
    }

    pub fn get(&self, handle: &TextureHandle) -> Option<&Texture2D> {
        self.map.get(handle)
    }

    pub fn contains(&self, handle: &TextureHandle) -> bool {
        self.map.contains_key(handle)
    }

    pub fn remove(&mut self, handle: &TextureHandle) -> Option<Texture2D> {
        self.map.remove(handle)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
