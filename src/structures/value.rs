/*!
Values, and sets of values still considered possible.

A [Value] is a point of some attribute's domain.
A [ValueSet] is a finite, non-empty, unordered set of values for one (attribute, object) pair --- either a declared domain, or the values an ascription still admits.

The canonical representation of a value set is an ordered set, so equal sets have equal representations regardless of the order values were supplied in.
Maintaining the invariant at the single point of construction replaces any need to re-sort or deduplicate on inspection.

# Emptiness

A value set is never empty.
An empty set of admissible values signals an inconsistent ascription, and so is rejected at construction with [ValueSetError::Empty](crate::types::err::ValueSetError) rather than represented.
Operations which may shrink a set --- notably [without](ValueSet::without) --- return an optional for the same reason.
*/

use std::collections::BTreeSet;

use crate::types::err::{self};

/// A point of an attribute's domain.
///
/// The shapes are closed: domains in practice are drawn from integers and strings.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Value {
    Int(i64),
    Str(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}

/// A finite, non-empty set of values.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ValueSet {
    values: BTreeSet<Value>,
}

impl ValueSet {
    /// A value set over the given values, deduplicated.
    ///
    /// An empty collection of values is an error.
    pub fn new<V: Into<Value>>(
        values: impl IntoIterator<Item = V>,
    ) -> Result<Self, err::ValueSetError> {
        let values: BTreeSet<Value> = values.into_iter().map(Into::into).collect();

        if values.is_empty() {
            return Err(err::ValueSetError::Empty);
        }

        Ok(ValueSet { values })
    }

    /// The value set containing exactly the given value.
    pub fn singleton(value: impl Into<Value>) -> Self {
        ValueSet {
            values: BTreeSet::from([value.into()]),
        }
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.values.contains(value)
    }

    pub fn is_subset(&self, other: &ValueSet) -> bool {
        self.values.is_subset(&other.values)
    }

    pub fn is_superset(&self, other: &ValueSet) -> bool {
        self.values.is_superset(&other.values)
    }

    /// Whether the set admits exactly one value.
    pub fn is_singleton(&self) -> bool {
        self.values.len() == 1
    }

    /// The sole value of a singleton set, or nothing.
    pub fn the_value(&self) -> Option<&Value> {
        match self.values.len() {
            1 => self.values.first(),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: a value set is non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }

    /// The set with the given value removed, or nothing if the value was the last.
    pub fn without(&self, value: &Value) -> Option<ValueSet> {
        let mut values = self.values.clone();
        values.remove(value);

        match values.is_empty() {
            true => None,
            false => Some(ValueSet { values }),
        }
    }
}

impl std::fmt::Display for ValueSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (position, value) in self.values.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "}}")
    }
}
