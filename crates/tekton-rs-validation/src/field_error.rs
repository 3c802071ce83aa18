//! Validation failures and their aggregation into one report.

use crate::FieldPath;
use std::fmt;

const MISSING_FIELDS: &str = "missing field(s)";
const ONE_OF_NEITHER: &str = "expected exactly one, got neither";
const ONE_OF_BOTH: &str = "expected exactly one, got both";

/// One line of a report: a reason and the paths it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrorEntry {
    reason: String,
    paths: Vec<FieldPath>,
}

impl FieldErrorEntry {
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Paths in first-observed order, without duplicates.
    pub fn paths(&self) -> &[FieldPath] {
        &self.paths
    }

    fn push_path(&mut self, path: FieldPath) {
        if !self.paths.contains(&path) {
            self.paths.push(path);
        }
    }
}

impl fmt::Display for FieldErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.reason)?;
        for (idx, path) in self.paths.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            f.write_str(path.as_str())?;
        }
        Ok(())
    }
}

/// An ordered set of validation failures.
///
/// An empty `FieldError` means validation succeeded; use
/// [`FieldError::into_result`] to turn it into a `Result`. Values are never
/// mutated in place: [`FieldError::merge`] consumes both sides and returns the
/// combined report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldError {
    entries: Vec<FieldErrorEntry>,
}

impl FieldError {
    /// Required fields with no value.
    pub fn missing(paths: impl IntoIterator<Item = FieldPath>) -> Self {
        Self::with_reason(MISSING_FIELDS, paths)
    }

    /// A value outside its allowed set.
    pub fn invalid_value(value: impl fmt::Display, path: FieldPath) -> Self {
        Self::with_reason(format!("invalid value: {value}"), [path])
    }

    /// An unrecognized key name under `path`.
    pub fn invalid_key(key: &str, path: FieldPath) -> Self {
        Self::with_reason(format!("invalid key name \"{key}\""), [path])
    }

    /// None of a mutually exclusive group was set.
    pub fn missing_one_of(paths: impl IntoIterator<Item = FieldPath>) -> Self {
        Self::with_reason(ONE_OF_NEITHER, paths)
    }

    /// More than one member of a mutually exclusive group was set.
    pub fn multiple_one_of(paths: impl IntoIterator<Item = FieldPath>) -> Self {
        Self::with_reason(ONE_OF_BOTH, paths)
    }

    /// Build a single-reason error. No paths yields an empty error.
    pub fn with_reason(
        reason: impl Into<String>,
        paths: impl IntoIterator<Item = FieldPath>,
    ) -> Self {
        let mut entry = FieldErrorEntry {
            reason: reason.into(),
            paths: Vec::new(),
        };
        for path in paths {
            entry.push_path(path);
        }
        if entry.paths.is_empty() {
            return Self::default();
        }
        Self {
            entries: vec![entry],
        }
    }

    /// Combine two reports.
    ///
    /// Entries of `other` whose reason already appears in `self` contribute
    /// their paths to that line; other entries are appended after it. Line
    /// order is therefore the order reasons were first observed.
    pub fn merge(mut self, other: FieldError) -> Self {
        for incoming in other.entries {
            match self
                .entries
                .iter_mut()
                .find(|entry| entry.reason == incoming.reason)
            {
                Some(entry) => {
                    for path in incoming.paths {
                        entry.push_path(path);
                    }
                }
                None => self.entries.push(incoming),
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of report lines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[FieldErrorEntry] {
        &self.entries
    }

    /// The multi-line report: one `<reason>: <path, path>` line per entry.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), FieldError> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, entry) in self.entries.iter().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldError {}

impl FromIterator<FieldError> for FieldError {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        iter.into_iter().fold(FieldError::default(), FieldError::merge)
    }
}
