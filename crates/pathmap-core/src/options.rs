//! Configuration for mapping and destination writes
//!
//! Options derive serde traits so host applications can keep them in their
//! own configuration files, e.g. `{"strict": true, "keys": "token"}`.
//!
//! Copyright (c) 2025 Pathmap Contributors
//! Licensed under the Apache-2.0 license

use crate::Key;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How dotted destination paths are split into typed segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyMode {
    /// Plain string segments
    #[default]
    String,
    /// Atomic token segments
    Token,
}

impl KeyMode {
    /// Type a raw destination segment according to this mode
    pub fn key(self, segment: &str) -> Key {
        match self {
            KeyMode::String => Key::Str(segment.to_string()),
            KeyMode::Token => Key::Token(segment.to_string()),
        }
    }
}

impl fmt::Display for KeyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyMode::String => write!(f, "string"),
            KeyMode::Token => write!(f, "token"),
        }
    }
}

/// Options for a whole `mapping()` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingOptions {
    /// Fail with `KeyMissing` instead of yielding absence for unresolvable paths
    pub strict: bool,
    /// Probe the as-given, string and token forms of each key
    pub any_key_kind: bool,
    /// Typing of dotted destination segments
    pub keys: KeyMode,
    /// Allow later entries to overwrite populated destination leaves
    #[serde(rename = "override")]
    pub override_existing: bool,
}

impl MappingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn any_key_kind(mut self, any_key_kind: bool) -> Self {
        self.any_key_kind = any_key_kind;
        self
    }

    pub fn keys(mut self, keys: KeyMode) -> Self {
        self.keys = keys;
        self
    }

    pub fn override_existing(mut self, override_existing: bool) -> Self {
        self.override_existing = override_existing;
        self
    }

    /// Destination write options derived from these mapping options
    pub fn push_options(&self) -> PushOptions {
        PushOptions {
            keys: self.keys,
            override_existing: self.override_existing,
            build_structure: true,
        }
    }
}

/// Options for a single destination write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushOptions {
    /// Typing of dotted destination segments
    pub keys: KeyMode,
    /// Allow overwriting a populated leaf
    #[serde(rename = "override")]
    pub override_existing: bool,
    /// Create missing intermediate containers
    pub build_structure: bool,
}

impl Default for PushOptions {
    fn default() -> Self {
        Self {
            keys: KeyMode::String,
            override_existing: false,
            build_structure: true,
        }
    }
}

impl PushOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(mut self, keys: KeyMode) -> Self {
        self.keys = keys;
        self
    }

    pub fn override_existing(mut self, override_existing: bool) -> Self {
        self.override_existing = override_existing;
        self
    }

    pub fn build_structure(mut self, build_structure: bool) -> Self {
        self.build_structure = build_structure;
        self
    }
}
