//! The fold applied to every sample file.
//!
//! A [`Reducer`] turns `(state, raw file contents)` into the next state. The
//! runner owns the directory walk; the reducer never sees a path or an I/O
//! error, only text.

pub mod sum_count;

use std::marker::PhantomData;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

pub use sum_count::{Rejected, SumCount};

/// A pure fold step. Implement this to aggregate samples differently.
pub trait Reducer: Send + Sync {
    type State: Default;

    fn step(&self, state: Self::State, raw: &str) -> Self::State;

    /// Why `step` would tally `raw` as a rejected sample, if it would.
    /// Only used for reporting; the fold itself never fails.
    fn rejection(&self, _state: &Self::State, _raw: &str) -> Option<String> {
        None
    }
}

/// Adapts a plain function into a [`Reducer`].
pub struct FnReducer<S, F> {
    f: F,
    _state: PhantomData<fn() -> S>,
}

/// Build a reducer from a closure, e.g. `from_fn(|n: u64, _raw: &str| n + 1)`.
pub fn from_fn<S, F>(f: F) -> FnReducer<S, F>
where
    S: Default,
    F: Fn(S, &str) -> S + Send + Sync,
{
    FnReducer {
        f,
        _state: PhantomData,
    }
}

impl<S, F> Reducer for FnReducer<S, F>
where
    S: Default,
    F: Fn(S, &str) -> S + Send + Sync,
{
    type State = S;

    fn step(&self, state: S, raw: &str) -> S {
        (self.f)(state, raw)
    }
}

/// Running aggregate of parsed samples.
///
/// All three fields always exist. `sum` stays finite: a value that would
/// overflow it is tallied as an error instead. The JSON form only shows the keys a run has
/// actually touched: `{}` before anything is folded, `{"errors": n}` while
/// only parse errors have been seen, and all three keys once a value parses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Accumulator {
    pub sum: f64,
    pub count: u64,
    pub errors: u64,
}

impl Accumulator {
    /// Number of files folded so far, parsed or not.
    pub fn processed(&self) -> u64 {
        self.count + self.errors
    }

    /// Streaming mean of the parsed values.
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Serialize for Accumulator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if self.count > 0 {
            map.serialize_entry("sum", &self.sum)?;
            map.serialize_entry("count", &self.count)?;
            map.serialize_entry("errors", &self.errors)?;
        } else if self.errors > 0 {
            map.serialize_entry("errors", &self.errors)?;
        }
        map.end()
    }
}
