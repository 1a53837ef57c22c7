//! Capability interface for host objects exposing named read accessors

use super::Value;
use std::fmt;

/// A host object that opts in to path traversal
///
/// Path segments reaching an object are looked up by name. An object that
/// reports `has_accessor(name)` is expected to answer `get_accessor(name)`;
/// a `None` answer is treated as absence.
///
/// ```
/// use pathmap_core::{NamedAccessor, Value};
///
/// #[derive(Debug)]
/// struct User {
///     email: String,
/// }
///
/// impl NamedAccessor for User {
///     fn has_accessor(&self, name: &str) -> bool {
///         name == "email"
///     }
///
///     fn get_accessor(&self, name: &str) -> Option<Value> {
///         match name {
///             "email" => Some(self.email.clone().into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait NamedAccessor: fmt::Debug + Send + Sync {
    /// Whether a read accessor with this name exists
    fn has_accessor(&self, name: &str) -> bool;

    /// Invoke the read accessor with this name
    fn get_accessor(&self, name: &str) -> Option<Value>;
}
