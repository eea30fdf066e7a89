//! Named scalar rule parameters and their validation.
//!
//! Callers pass parameters as a [`RuleParams`] map from key to
//! [`ParamValue`]. Each rule declares the keys it needs as
//! [`ParamSpec`]s; resolving a spec against the map checks presence,
//! kind and range. Defaults are never substituted silently: a caller who
//! wants them asks explicitly via [`RuleParams::with_defaults`].

use indexmap::IndexMap;
use std::error::Error;
use std::fmt;
use std::ops::RangeInclusive;

/// A scalar parameter value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamValue {
    /// An integer value (neighbour-count thresholds).
    Int(i64),
    /// A real value (distances in grid cells).
    Real(f64),
}

impl ParamValue {
    /// The value as `f64`, whatever its kind.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Real(v) => v,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

/// What kind of quantity a parameter holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    /// A neighbour-count threshold: integer only.
    Count,
    /// A distance in grid cells: integer or real, must be finite.
    Distance,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count => write!(f, "integer count"),
            Self::Distance => write!(f, "distance"),
        }
    }
}

/// Declaration of one parameter a rule requires.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamSpec {
    /// Lookup key in [`RuleParams`].
    pub key: &'static str,
    /// Accepted kind.
    pub kind: ParamKind,
    /// Documented default, used only on explicit request.
    pub default: ParamValue,
    /// Inclusive valid range.
    pub range: RangeInclusive<f64>,
    /// One-line description for UIs.
    pub description: &'static str,
}

impl ParamSpec {
    /// Look up and validate this parameter in `params`.
    pub fn resolve(&self, params: &RuleParams) -> Result<ParamValue, ParamError> {
        let value = params.get(self.key).ok_or(ParamError::Missing { key: self.key })?;
        let v = match (self.kind, value) {
            (ParamKind::Count, ParamValue::Int(v)) => v as f64,
            (ParamKind::Count, ParamValue::Real(_)) => {
                return Err(ParamError::WrongKind {
                    key: self.key,
                    expected: self.kind,
                    got: value,
                })
            }
            (ParamKind::Distance, v) => v.as_f64(),
        };
        if !v.is_finite() || !self.range.contains(&v) {
            return Err(ParamError::OutOfRange {
                key: self.key,
                value,
                range: self.range.clone(),
            });
        }
        Ok(value)
    }

    /// Resolve a [`ParamKind::Count`] parameter as a neighbour threshold.
    pub fn count(&self, params: &RuleParams) -> Result<u8, ParamError> {
        let value = self.resolve(params)?;
        u8::try_from(value.as_f64() as i64).map_err(|_| ParamError::OutOfRange {
            key: self.key,
            value,
            range: 0.0..=f64::from(u8::MAX),
        })
    }

    /// Resolve a [`ParamKind::Distance`] parameter in grid cells.
    pub fn distance(&self, params: &RuleParams) -> Result<f64, ParamError> {
        Ok(self.resolve(params)?.as_f64())
    }
}

/// Errors from resolving a rule's parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamError {
    /// A required key is absent.
    Missing {
        /// The missing key.
        key: &'static str,
    },
    /// The value has the wrong kind (e.g. a real for a count).
    WrongKind {
        /// The offending key.
        key: &'static str,
        /// Kind the rule accepts.
        expected: ParamKind,
        /// The value supplied.
        got: ParamValue,
    },
    /// The value is outside the parameter's valid range.
    OutOfRange {
        /// The offending key.
        key: &'static str,
        /// The value supplied.
        value: ParamValue,
        /// Inclusive valid range.
        range: RangeInclusive<f64>,
    },
}

impl ParamError {
    /// The parameter key this error concerns.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Missing { key } | Self::WrongKind { key, .. } | Self::OutOfRange { key, .. } => {
                *key
            }
        }
    }
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { key } => write!(f, "missing parameter '{key}'"),
            Self::WrongKind { key, expected, got } => {
                write!(f, "parameter '{key}' expects {expected}, got {got}")
            }
            Self::OutOfRange { key, value, range } => {
                write!(
                    f,
                    "parameter '{key}' = {value} outside valid range [{}, {}]",
                    range.start(),
                    range.end()
                )
            }
        }
    }
}

impl Error for ParamError {}

/// Insertion-ordered map of named rule parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleParams {
    values: IndexMap<String, ParamValue>,
}

impl RuleParams {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// A map holding the documented default of every given spec.
    pub fn with_defaults<'s>(specs: impl IntoIterator<Item = &'s ParamSpec>) -> Self {
        let mut params = Self::new();
        params.fill_defaults(specs);
        params
    }

    /// Insert the default for every spec whose key is not already set.
    pub fn fill_defaults<'s>(&mut self, specs: impl IntoIterator<Item = &'s ParamSpec>) {
        for spec in specs {
            self.values
                .entry(spec.key.to_string())
                .or_insert(spec.default);
        }
    }

    /// Set a parameter, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Look up a parameter.
    pub fn get(&self, key: &str) -> Option<ParamValue> {
        self.values.get(key).copied()
    }

    /// Remove a parameter, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.values.shift_remove(key)
    }

    /// Number of parameters set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(key, value)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ParamValue)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for RuleParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}
