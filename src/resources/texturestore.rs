//! Texture store resource.
//!
//! A non-send resource holding the textures loaded by the demo, keyed by the
//! same string used in [`Sprite::tex_key`](crate::components::sprite::Sprite::tex_key).
//!
//! Note: This is a non-send resource because Raylib textures must be accessed
//! from the main thread only.

use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Map of texture keys to loaded textures.
///
/// This is a non-send resource; use `NonSend<TextureStore>` in system parameters.
pub struct TextureStore {
    textures: FxHashMap<String, Texture2D>,
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureStore {
    /// Create an empty texture store.
    pub fn new() -> Self {
        Self {
            textures: FxHashMap::default(),
        }
    }

    /// Add a texture with the given key.
    pub fn insert(&mut self, id: impl Into<String>, texture: Texture2D) {
        self.textures.insert(id.into(), texture);
    }

    /// Get a texture by its key.
    pub fn get(&self, id: impl AsRef<str>) -> Option<&Texture2D> {
        self.textures.get(id.as_ref())
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
