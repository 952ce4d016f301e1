//! Dependency record model and the version update pass
//!
//! A dependency list is an ordered sequence of entries. Entries that are
//! mappings become [`DependencyRecord`]s; anything else (a bare role string in
//! a requirements file, say) is carried along untouched and never matches.

use serde_yaml::{Mapping, Value};
use tracing::{debug, trace};

/// Key holding the role name inside a dependency record
pub const NAME_KEY: &str = "name";

/// Key holding the pinned version inside a dependency record
pub const VERSION_KEY: &str = "version";

/// A dependency record: a YAML mapping with optional `name` and `version`
///
/// All fields, recognised or not, live in one ordered mapping so that the
/// record is written back with the same keys in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyRecord {
    fields: Mapping,
}

impl DependencyRecord {
    /// Creates a record from an existing mapping
    pub fn new(fields: Mapping) -> Self {
        DependencyRecord { fields }
    }

    /// Role name, when the record has a string `name`
    pub fn name(&self) -> Option<&str> {
        self.fields.get(NAME_KEY).and_then(Value::as_str)
    }

    /// Raw `version` value, if present
    pub fn version(&self) -> Option<&Value> {
        self.fields.get(VERSION_KEY)
    }

    /// Textual form of the `version` scalar
    ///
    /// Strings are returned as-is, numbers and booleans by their YAML
    /// rendering. Null, sequences and mappings yield `None`.
    ///
    /// Numbers are rendered from the parsed value, not the source text, so an
    /// unquoted `1.10` reads back as `1.1`. Pinning such a record to `1.10`
    /// therefore rewrites it once, as the string `1.10`.
    pub fn version_text(&self) -> Option<String> {
        self.version().and_then(scalar_text)
    }

    /// Sets `version` to a string scalar, keeping the key's position if it exists
    pub fn set_version(&mut self, version: &str) {
        self.fields.insert(
            Value::String(VERSION_KEY.to_string()),
            Value::String(version.to_string()),
        );
    }

    /// All fields of the record, in document order
    pub fn fields(&self) -> &Mapping {
        &self.fields
    }

    pub fn into_mapping(self) -> Mapping {
        self.fields
    }
}

/// One entry of a dependency list
#[derive(Debug, Clone, PartialEq)]
pub enum DependencyEntry {
    /// A mapping entry, eligible for matching
    Record(DependencyRecord),
    /// Any non-mapping entry, passed through unchanged
    Other(Value),
}

impl DependencyEntry {
    /// Classifies a YAML value as a record or an opaque entry
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Mapping(fields) => DependencyEntry::Record(DependencyRecord::new(fields)),
            other => DependencyEntry::Other(other),
        }
    }

    /// Converts the entry back into a YAML value
    pub fn into_value(self) -> Value {
        match self {
            DependencyEntry::Record(record) => Value::Mapping(record.into_mapping()),
            DependencyEntry::Other(value) => value,
        }
    }

    pub fn as_record(&self) -> Option<&DependencyRecord> {
        match self {
            DependencyEntry::Record(record) => Some(record),
            DependencyEntry::Other(_) => None,
        }
    }

    pub fn as_record_mut(&mut self) -> Option<&mut DependencyRecord> {
        match self {
            DependencyEntry::Record(record) => Some(record),
            DependencyEntry::Other(_) => None,
        }
    }
}

/// Result of an update pass over a dependency list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// At least one matching record had its version rewritten
    Updated {
        /// Prior version of the last matching record
        previous: Option<String>,
        /// Number of records rewritten
        changed: usize,
    },
    /// Every matching record already carries the target version
    AlreadyAtVersion,
    /// No record carries the role name
    NotFound,
}

impl UpdateOutcome {
    /// Returns true if the document must be written back
    pub fn needs_write(&self) -> bool {
        matches!(self, UpdateOutcome::Updated { .. })
    }
}

/// Rewrites the version of every record named `role_name` to `role_version`
///
/// Order and length of `entries` never change, and records that do not match
/// are left exactly as they were. When several records share the name, each
/// is updated and the prior version reported is the last one seen.
///
/// A matching record without a `version` key, or with an empty version, is
/// still a match: the key is added or overwritten.
pub fn update_dependencies(
    entries: &mut [DependencyEntry],
    role_name: &str,
    role_version: &str,
) -> UpdateOutcome {
    let mut found = false;
    let mut changed = 0;
    let mut previous = None;

    for (index, record) in entries
        .iter_mut()
        .enumerate()
        .filter_map(|(index, entry)| entry.as_record_mut().map(|record| (index, record)))
    {
        if record.name() != Some(role_name) {
            trace!(index, name = ?record.name(), "skipping dependency");
            continue;
        }

        found = true;
        previous = record.version_text();
        debug!(index, previous = ?previous, "found dependency {}", role_name);

        if previous.as_deref() != Some(role_version) {
            record.set_version(role_version);
            changed += 1;
        }
    }

    if changed > 0 {
        UpdateOutcome::Updated { previous, changed }
    } else if found {
        UpdateOutcome::AlreadyAtVersion
    } else {
        UpdateOutcome::NotFound
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
