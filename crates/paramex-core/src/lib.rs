//! # Paramex Core
//!
//! The binding engine behind `paramex`: it fills the fields of a caller-owned record
//! from string parameters (HTTP headers, URL query values, form values), driven by a
//! per-field binding key.
//!
//! ## Architecture Overview
//!
//! The crate separates three concerns:
//!
//! 1. **Record Layer** ([`Record`], [`Field`], [`Slot`]) - the shape of what gets bound.
//!    Records are usually declared with [`param_record!`], which generates the
//!    field list at compile time instead of discovering it at runtime.
//! 2. **Source Layer** ([`Resolver`], [`Lookup`]) - where raw values come from. The
//!    engine only ever asks "what is stored under key K?".
//! 3. **Engine** ([`bind`], [`bind_record`]) - the field walk and the coercion table.
//!
//! ## Supported field types
//!
//! | Declared type | Accepted text |
//! |---------------|---------------|
//! | `String` | anything |
//! | `bool` | `1 t T TRUE true True`, `0 f F FALSE false False` |
//! | `i32`, `isize`, `i64` | base-10 integers within range |
//! | `f32`, `f64` | decimal or scientific notation |
//! | [`uuid::Uuid`] | canonical `8-4-4-4-12` hyphenated form |
//! | `Vec<String>` | every value of the key, in order (multi-value sources only) |
//!
//! ## Skip semantics
//!
//! A field is left untouched when its key is absent, empty or `-`, when the source has
//! no value for the key, or when the value is the empty string. Binding the same
//! record twice against a request lacking a key never disturbs the field.
//!
//! ## Errors
//!
//! See [`BindError`]. The first failure ends the call; fields bound before it are not
//! rolled back, so a record from a failed bind should be discarded.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockResolver`](mock::MockResolver), an
//! expectation-driven source for asserting exactly which keys the engine looks up.

mod macros;

pub mod binder;
pub mod coerce;
pub mod error;
pub mod field;
pub mod mock;
pub mod resolver;
pub mod target;

#[doc(hidden)]
pub use paste;

pub use binder::{bind, bind_record};
pub use error::{BindError, ErrorKind, ParseDiagnostic};
pub use field::{Field, ParamField, Slot, SKIP_TAG};
pub use resolver::{Lookup, Resolver};
pub use target::{Binding, Record, Target};
