//! Path-keyed memo of decoded textures and sounds.
//!
//! Cached entries are owned by the cache until it is dropped; uncached loads
//! are owned by the caller and dropped right after use.

use std::num::NonZeroUsize;
use std::ops::Deref;
use std::path::Path;

use pico_hash::HashTable;

use crate::core::PicoError;

/// Whether a load goes through the cache.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LoadMode {
    #[default]
    Cached,
    /// Decode for this call only.
    Uncached,
}

/// A resource borrowed from the cache or owned by the current call.
#[derive(Debug)]
pub enum Loaded<'a, T> {
    Cached(&'a T),
    Owned(T),
}

impl<T> Deref for Loaded<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Loaded::Cached(t) => t,
            Loaded::Owned(t) => t,
        }
    }
}

#[derive(Debug)]
enum Asset<T, S> {
    Texture(T),
    Sound(S),
}

impl<T, S> Asset<T, S> {
    fn kind(&self) -> &'static str {
        match self {
            Asset::Texture(_) => "texture",
            Asset::Sound(_) => "sound",
        }
    }
}

#[derive(Debug)]
pub struct AssetCache<T, S> {
    table: HashTable<Asset<T, S>>,
}

impl<T, S> AssetCache<T, S> {
    pub fn new(buckets: NonZeroUsize) -> Result<Self, PicoError> {
        Ok(Self { table: HashTable::new(buckets)? })
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.table.contains_key(&key(path))
    }

    /// Returns the texture cached under `path`, decoding it with `load` on a miss.
    pub fn texture(
        &mut self,
        path: &Path,
        load: impl FnOnce(&Path) -> anyhow::Result<T>,
    ) -> Result<&T, PicoError> {
        let key = self.fill(path, "texture", |p| load(p).map(Asset::Texture))?;
        match self.table.get(&key) {
            Some(Asset::Texture(t)) => Ok(t),
            other => Err(mismatch(path, "texture", other)),
        }
    }

    /// Returns the sound cached under `path`, decoding it with `load` on a miss.
    pub fn sound(
        &mut self,
        path: &Path,
        load: impl FnOnce(&Path) -> anyhow::Result<S>,
    ) -> Result<&S, PicoError> {
        let key = self.fill(path, "sound", |p| load(p).map(Asset::Sound))?;
        match self.table.get(&key) {
            Some(Asset::Sound(s)) => Ok(s),
            other => Err(mismatch(path, "sound", other)),
        }
    }

    fn fill(
        &mut self,
        path: &Path,
        what: &str,
        load: impl FnOnce(&Path) -> anyhow::Result<Asset<T, S>>,
    ) -> Result<String, PicoError> {
        let key = key(path);
        if self.table.contains_key(&key) {
            log::trace!("cache hit: {key}");
            return Ok(key);
        }

        log::trace!("cache miss: {key}");
        let asset = load(path).map_err(PicoError::resource(format!("cannot load {what} {key}")))?;
        self.table.add(&key, asset)?;
        Ok(key)
    }
}

fn key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn mismatch<T, S>(path: &Path, expected: &'static str, found: Option<&Asset<T, S>>) -> PicoError {
    PicoError::AssetKind {
        path: path.to_path_buf(),
        expected,
        found: found.map_or("nothing", Asset::kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn cache() -> AssetCache<u32, &'static str> {
        AssetCache::new(NonZeroUsize::new(4).unwrap()).unwrap()
    }

    // ── hits and misses ───────────────────────────────────────────────────

    #[test]
    fn second_lookup_does_not_decode() {
        let mut c = cache();
        let decodes = Cell::new(0);
        let load = |_: &Path| {
            decodes.set(decodes.get() + 1);
            Ok(7)
        };

        assert_eq!(*c.texture(Path::new("a.png"), load).unwrap(), 7);
        assert_eq!(*c.texture(Path::new("a.png"), load).unwrap(), 7);
        assert_eq!(decodes.get(), 1);
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn same_handle_is_returned() {
        let mut c = cache();
        let a = c.texture(Path::new("a.png"), |_| Ok(1)).unwrap() as *const u32;
        let b = c.texture(Path::new("a.png"), |_| Ok(2)).unwrap() as *const u32;
        assert_eq!(a, b);
    }

    #[test]
    fn failed_decode_is_not_cached() {
        let mut c = cache();
        let err = c.texture(Path::new("missing.png"), |_| anyhow::bail!("no such file"));
        assert!(matches!(err, Err(PicoError::Resource { .. })));
        assert!(!c.contains(Path::new("missing.png")));
    }

    // ── kinds ─────────────────────────────────────────────────────────────

    #[test]
    fn path_cached_as_sound_is_not_a_texture() {
        let mut c = cache();
        c.sound(Path::new("x"), |_| Ok("beep")).unwrap();

        let err = c.texture(Path::new("x"), |_| Ok(0)).unwrap_err();
        assert!(matches!(err, PicoError::AssetKind { expected: "texture", found: "sound", .. }));
    }

    #[test]
    fn loaded_derefs_either_way() {
        let v = 5u32;
        assert_eq!(*Loaded::Cached(&v), 5);
        assert_eq!(*Loaded::Owned(6u32), 6);
    }
}
