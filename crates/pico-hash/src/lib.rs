//! Fixed-bucket, string-keyed hash table.
//!
//! This crate is intentionally dependency-free. It backs the asset cache of
//! `pico-engine` but knows nothing about textures or sounds: values are opaque
//! and the caller decides what they are.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`table`] | `HashTable`, `djb2` |
//! | [`error`] | `HashError` |
//!
//! # Quick start
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use pico_hash::HashTable;
//!
//! let mut table = HashTable::new(NonZeroUsize::new(16).unwrap()).unwrap();
//! table.add("img/ship.png", 7).unwrap();
//! assert_eq!(table.get("img/ship.png"), Some(&7));
//! assert!(table.remove("img/ship.png").is_some());
//! assert_eq!(table.get("img/ship.png"), None);
//! ```

pub mod error;
pub mod table;

pub use error::HashError;
pub use table::{djb2, HashTable};
