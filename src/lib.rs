//! # Nestmap
//!
//! Utilities for working with nested, insertion-ordered mappings. Three
//! independent, stateless pieces:
//!
//! - **Deep merge** ([`merge`]): combine two mappings, recursing where both
//!   sides hold a nested mapping and replacing otherwise.
//! - **Attribute-accessible mapping** ([`DotMap`], [`to_dot`]): a mapping
//!   whose keys double as named fields, with a reserved-name denylist guarding
//!   the mapping interface, plus a recursive converter from plain value trees.
//! - **Flatten / unflatten** ([`flatten`], [`unflatten`]): the reversible
//!   transform between a nested mapping and its flat, path-keyed form.
//!
//! Everything operates on the owned [`Value`] tree, whose mapping variants
//! are backed by [`indexmap::IndexMap`] so iteration order is insertion
//! order. Values convert to and from [`serde_json::Value`] for easy interop.
//!
//! All operations are pure and synchronous: no shared state, no I/O, and the
//! only error in the crate is [`ReservedKeyError`].
//!
//! ```
//! use nestmap::{flatten, merge, unflatten, Value};
//!
//! let base = Value::from(serde_json::json!({"db": {"host": "localhost"}}));
//! let overlay = Value::from(serde_json::json!({"db": {"port": 5432}}));
//!
//! let merged = merge(base.as_map().unwrap(), overlay.as_map().unwrap());
//! let flat = flatten(&merged);
//! assert_eq!(unflatten(&flat), merged);
//! ```

pub mod dot;
pub mod error;
pub mod flat;
pub mod merge;
pub mod value;

pub use dot::{is_reserved_key, to_dot, DotMap, RESERVED_KEYS};
pub use error::{ReservedKeyError, Result};
pub use flat::{flatten, unflatten, FlatKey, FlatMap, PathKey};
pub use merge::merge;
pub use value::{Map, Value};
