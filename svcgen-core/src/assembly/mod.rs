//! From entity metadata to a [`ClassDescriptor`](crate::model::ClassDescriptor).

pub mod class;
pub mod methods;

pub use class::{assemble_class, REPOSITORY_FIELD};
pub use methods::{assemble_methods, resolve_filter_fields, ALL, ALL_BY_FILTER, DELETE, ONE, SAVE};
