//! Shared helpers for derive macros

pub(crate) mod types;
