//! Structure-remapping engine
//!
//! This module turns a mapping table of source-path → destination-path
//! declarations into a freshly built destination structure.
//!
//! # Components
//!
//! - **key_spec**: decomposes key declarations into path segments, or
//!   recognizes computed extractors
//! - **resolver**: walks a source value along a segment path
//! - **builder**: writes values into nested destinations with collision checks
//! - **orchestrator**: runs a whole table, in declaration order
//!
//! Copyright (c) 2025 Pathmap Contributors
//! Licensed under the Apache-2.0 license

pub mod builder;
pub mod key_spec;
pub mod orchestrator;
pub mod resolver;
pub mod sequence;
pub mod table;


pub use builder::{compact, push, skeleton};
pub use key_spec::{decompose, Extractor, KeySpec, ParsedKey};
pub use orchestrator::{mapping, MapExt};
pub use resolver::resolve;
pub use sequence::SequenceAccessor;
pub use table::{Destination, MappingEntry, MappingTable};
