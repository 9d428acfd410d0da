//! # Records and Bind Targets
//!
//! The [`Record`] trait is the contract every bindable aggregate implements: it lists
//! its fields, in declaration order, as [`Field`] descriptors. The engine never sees
//! the concrete type; it walks the descriptors and writes through their slots.
//!
//! The [`Target`] trait describes what a caller may hand to an entry point. Only a
//! mutable reference to a record can be bound. Everything else is rejected before a
//! single field is touched:
//!
//! | Argument | Result |
//! |----------|--------|
//! | `&mut R`, `Some(&mut R)` | bound |
//! | `R` by value, `&R`, `None` | [`BindError::NotAssignable`] |
//! | `&mut i64`, `&mut String`, ... | [`BindError::UnsupportedType`] |
//! | `i64`, `String`, ... by value | [`BindError::NotAssignable`] |
//!
//! # Concurrency
//! Binding writes to the record without any locking. Binding one record from two
//! threads at once is ruled out by the `&mut` borrow; records shared through interior
//! mutability must be locked by the caller for the whole call.

use crate::error::BindError;
use crate::field::Field;
use std::collections::HashMap;
use uuid::Uuid;

/// A caller-owned aggregate whose fields can be bound from request parameters.
///
/// Usually generated by [`param_record!`](crate::param_record). A hand-written
/// implementation must return the same field names and tags on every call; only the
/// values behind the slots may change.
///
/// ```rust
/// use paramex_core::{Field, ParamField, Record};
///
/// #[derive(Default)]
/// struct Paging {
///     page: i32,
///     cursor: String,
/// }
///
/// impl Record for Paging {
///     fn fields(&mut self) -> Vec<Field<'_>> {
///         vec![
///             Field::new("page", Some("page"), self.page.slot()),
///             Field::new("cursor", Some("-"), self.cursor.slot()),
///         ]
///     }
/// }
/// ```
pub trait Record {
    /// Field descriptors in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;

    fn record_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Outcome of inspecting a bind argument.
pub enum Binding<'a> {
    Record(&'a mut dyn Record),
    NotAssignable(&'static str),
    NotRecord(&'static str),
}

impl<'a> Binding<'a> {
    /// Returns the record to bind, or the matching argument error.
    pub fn into_record(self) -> Result<&'a mut dyn Record, BindError> {
        match self {
            Binding::Record(record) => Ok(record),
            Binding::NotAssignable(type_name) => Err(BindError::NotAssignable { type_name }),
            Binding::NotRecord(type_name) => Err(BindError::UnsupportedType { type_name }),
        }
    }
}

/// Anything that can be passed to an entry point.
pub trait Target<'a> {
    fn into_binding(self) -> Binding<'a>;
}

impl<'a, R: Record> Target<'a> for &'a mut R {
    fn into_binding(self) -> Binding<'a> {
        Binding::Record(self)
    }
}

impl<'a, R: Record> Target<'a> for &'a R {
    fn into_binding(self) -> Binding<'a> {
        Binding::NotAssignable(std::any::type_name::<&R>())
    }
}

impl<'a, R: Record> Target<'a> for Option<&'a mut R> {
    fn into_binding(self) -> Binding<'a> {
        match self {
            Some(record) => Binding::Record(record),
            None => Binding::NotAssignable(std::any::type_name::<Option<&mut R>>()),
        }
    }
}

macro_rules! non_record_target {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> Target<'a> for &'a mut $ty {
                fn into_binding(self) -> Binding<'a> {
                    Binding::NotRecord(std::any::type_name::<$ty>())
                }
            }

            impl<'a> Target<'a> for $ty {
                fn into_binding(self) -> Binding<'a> {
                    Binding::NotAssignable(std::any::type_name::<$ty>())
                }
            }
        )*
    };
}

non_record_target!(
    String,
    bool,
    i32,
    isize,
    i64,
    f32,
    f64,
    u32,
    u64,
    usize,
    Uuid,
    Vec<String>,
    HashMap<String, String>,
);
