//! # Field Descriptors
//!
//! A record exposes its fields to the engine as a list of [`Field`] descriptors. Each
//! descriptor pairs the field name and its binding tag with a [`Slot`]: a typed,
//! mutable view of the field's storage.
//!
//! The set of slot types is closed. A field type outside it can still be declared on
//! a record (it maps to [`Slot::Unsupported`]) but binding a value into it fails with
//! [`BindError::UnsupportedParamType`](crate::BindError::UnsupportedParamType).

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use uuid::Uuid;

/// Tag value that explicitly excludes a field from binding.
pub const SKIP_TAG: &str = "-";

/// A typed mutable view of one record field.
#[derive(Debug)]
pub enum Slot<'a> {
    Text(&'a mut String),
    Bool(&'a mut bool),
    Int32(&'a mut i32),
    Int(&'a mut isize),
    Int64(&'a mut i64),
    Float32(&'a mut f32),
    Float64(&'a mut f64),
    Uuid(&'a mut Uuid),
    TextArray(&'a mut Vec<String>),
    /// A declared type the engine has no coercion for; carries the type name.
    Unsupported(&'static str),
}

impl Slot<'_> {
    /// Name of the declared type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Slot::Text(_) => "String",
            Slot::Bool(_) => "bool",
            Slot::Int32(_) => "i32",
            Slot::Int(_) => "isize",
            Slot::Int64(_) => "i64",
            Slot::Float32(_) => "f32",
            Slot::Float64(_) => "f64",
            Slot::Uuid(_) => "Uuid",
            Slot::TextArray(_) => "Vec<String>",
            Slot::Unsupported(name) => *name,
        }
    }

    /// Only text sequences ask the resolver for every value of a key.
    pub fn wants_array(&self) -> bool {
        matches!(self, Slot::TextArray(_))
    }
}

/// Descriptor of one record field: (name, binding tag, storage).
#[derive(Debug)]
pub struct Field<'a> {
    pub name: &'static str,
    pub tag: Option<&'static str>,
    pub slot: Slot<'a>,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, tag: Option<&'static str>, slot: Slot<'a>) -> Self {
        Self { name, tag, slot }
    }

    /// The lookup key, or `None` when the field must be skipped.
    ///
    /// A missing tag, the empty tag and [`SKIP_TAG`] all skip the field.
    pub fn key(&self) -> Option<&'static str> {
        match self.tag {
            None | Some("") | Some(SKIP_TAG) => None,
            Some(key) => Some(key),
        }
    }
}

/// Maps a field type to its [`Slot`].
///
/// Implemented for the nine supported types and for common types that are declared
/// unsupported. Types that implement neither cannot appear in a [`param_record!`](crate::param_record)
/// declaration at all.
pub trait ParamField {
    fn slot(&mut self) -> Slot<'_>;
}

macro_rules! supported_field {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ParamField for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::$variant(self)
                }
            }
        )*
    };
}

supported_field! {
    String => Text,
    bool => Bool,
    i32 => Int32,
    isize => Int,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    Uuid => Uuid,
    Vec<String> => TextArray,
}

macro_rules! unsupported_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ParamField for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Unsupported(std::any::type_name::<Self>())
                }
            }
        )*
    };
}

unsupported_field!(u8, u16, u32, u64, u128, usize, i8, i16, i128, char, Vec<u8>);

impl<T> ParamField for Option<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(std::any::type_name::<Self>())
    }
}

impl<K, V, S> ParamField for HashMap<K, V, S> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(std::any::type_name::<Self>())
    }
}

impl<K, V> ParamField for BTreeMap<K, V> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(std::any::type_name::<Self>())
    }
}

impl<T, S> ParamField for HashSet<T, S> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(std::any::type_name::<Self>())
    }
}

impl<T> ParamField for BTreeSet<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(std::any::type_name::<Self>())
    }
}
