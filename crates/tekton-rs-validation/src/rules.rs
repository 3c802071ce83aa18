//! Independent rule evaluators.
//!
//! Each rule checks one thing and returns a possibly empty [`FieldError`];
//! callers merge the results in the order the rules ran.

use crate::{FieldError, FieldPath};

/// Whether a field holds a value, as opposed to its zero form.
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

/// Fails with a missing-field error when `value` is in its zero form.
pub fn required_field<T: Presence + ?Sized>(value: &T, path: FieldPath) -> FieldError {
    if value.is_present() {
        FieldError::default()
    } else {
        FieldError::missing([path])
    }
}

/// Requires exactly one member of a mutually exclusive group to be set.
///
/// `members` pairs each member's presence with its path, in declaration order;
/// both failure branches list every member path.
pub fn exactly_one_of(members: impl IntoIterator<Item = (bool, FieldPath)>) -> FieldError {
    let members: Vec<(bool, FieldPath)> = members.into_iter().collect();
    let set = members.iter().filter(|(present, _)| *present).count();
    let paths = members.into_iter().map(|(_, path)| path);
    match set {
        0 => FieldError::missing_one_of(paths),
        1 => FieldError::default(),
        _ => FieldError::multiple_one_of(paths),
    }
}

/// Fails when a non-empty `value` is not one of `allowed`.
///
/// An empty value passes; presence is checked by [`required_field`].
pub fn enum_value<S: AsRef<str>>(value: &str, allowed: &[S], path: FieldPath) -> FieldError {
    if value.is_empty() || allowed.iter().any(|candidate| candidate.as_ref() == value) {
        FieldError::default()
    } else {
        FieldError::invalid_value(value, path)
    }
}

/// Fails when `name` is not one of `allowed`.
pub fn key_whitelist<K: AsRef<str>>(
    name: &str,
    allowed: impl IntoIterator<Item = K>,
    path: FieldPath,
) -> FieldError {
    if allowed.into_iter().any(|candidate| candidate.as_ref() == name) {
        FieldError::default()
    } else {
        FieldError::invalid_key(name, path)
    }
}

/// Checks each comma-delimited entry of a parameter value against the
/// parameter's allowed values, reporting at `base.<name>[index]`.
///
/// `allowed` of `None` means the parameter accepts any value.
pub fn value_whitelist<S: AsRef<str>>(
    name: &str,
    value: &str,
    allowed: Option<&[S]>,
    base: &FieldPath,
) -> FieldError {
    let Some(allowed) = allowed else {
        return FieldError::default();
    };
    split_entries(value)
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| enum_value(entry, allowed, base.key_index(name, idx)))
        .collect()
}

/// Split a multi-valued parameter into its positional entries.
pub fn split_entries(value: &str) -> Vec<&str> {
    value.split(',').map(str::trim).collect()
}
