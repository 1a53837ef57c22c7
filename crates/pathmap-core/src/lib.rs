//! Pathmap Core - declarative structure-remapping engine
//!
//! This crate maps a heterogeneous source value (nested keyed containers,
//! ordered sequences, or host objects exposing named accessors) through a
//! table of source-path → destination-path declarations, producing a new
//! nested destination structure.
//!
//! # Main Components
//!
//! - **Data model**: [`Value`], [`Key`], [`Map`] and the [`NamedAccessor`]
//!   capability trait for host objects
//! - **Mapping engine**: key decomposition, path resolution and destination
//!   building, driven by [`mapping`]
//! - **Configuration**: [`MappingOptions`] and [`PushOptions`], loadable with serde
//! - **Error Handling**: a single [`Error`] enum built with `thiserror`
//!
//! # Example
//!
//! ```
//! use pathmap_core::{mapping, Destination, Key, MappingOptions, MappingTable, Result, Value};
//! use serde_json::json;
//!
//! fn example() -> Result<()> {
//!     let source = Value::from(json!({"source": {"google": {"search_word": "ruby"}}}));
//!     let table = MappingTable::new().map("source.google.search_word", Destination::token("word"));
//!
//!     let destination = mapping(&source, &table, &MappingOptions::default())?;
//!     assert_eq!(destination.get(&Key::token("word")), Some(&Value::from("ruby")));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod error;
pub mod mapper;
pub mod options;
pub mod value;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use error::{Error, ErrorKind, Result};
pub use options::{KeyMode, MappingOptions, PushOptions};
pub use value::{Key, Map, NamedAccessor, NodeKind, Value};

pub use mapper::{
    // Entry points
    mapping, push, resolve, decompose,

    // Destination utilities
    compact, skeleton,

    // Table types
    Destination, Extractor, KeySpec, MappingEntry, MappingTable, ParsedKey,

    // Host sugar
    MapExt,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_error_creation() {
        let err = Error::InvalidKeySpec {
            message: "Invalid key type: float".to_string(),
        };
        assert!(err.to_string().contains("Invalid key type"));
        assert_eq!(err.kind(), ErrorKind::InvalidKeySpec);
    }

    #[test]
    fn test_key_mode_equality() {
        assert_eq!(KeyMode::Token, KeyMode::Token);
        assert_ne!(KeyMode::Token, KeyMode::String);
    }
}
