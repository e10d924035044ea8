use thiserror::Error;

use crate::sample::{self, SampleError};

use super::{Accumulator, Reducer};

/// Why a sample was tallied under `errors` instead of being summed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejected {
    #[error(transparent)]
    Sample(#[from] SampleError),
    #[error("adding {value} to the running sum {sum} overflows")]
    Overflow { value: f64, sum: f64 },
}

/// Sums every sample that parses as a number and counts the ones that don't.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumCount;

impl SumCount {
    /// Parse `raw` and check it can be added to `acc` without leaving the finite range.
    pub fn check(acc: &Accumulator, raw: &str) -> Result<f64, Rejected> {
        let value = sample::parse(raw)?;
        if !(acc.sum + value).is_finite() {
            return Err(Rejected::Overflow {
                value,
                sum: acc.sum,
            });
        }
        Ok(value)
    }

    /// Fold an already-checked sample.
    pub fn apply(acc: Accumulator, checked: Result<f64, Rejected>) -> Accumulator {
        match checked {
            Ok(value) => Accumulator {
                sum: acc.sum + value,
                count: acc.count + 1,
                errors: acc.errors,
            },
            Err(Rejected::Sample(_) | Rejected::Overflow { .. }) => Accumulator {
                errors: acc.errors + 1,
                ..acc
            },
        }
    }
}

impl Reducer for SumCount {
    type State = Accumulator;

    fn step(&self, state: Accumulator, raw: &str) -> Accumulator {
        let checked = Self::check(&state, raw);
        Self::apply(state, checked)
    }

    fn rejection(&self, state: &Accumulator, raw: &str) -> Option<String> {
        Self::check(state, raw).err().map(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold(inputs: &[&str]) -> Accumulator {
        inputs
            .iter()
            .fold(Accumulator::default(), |acc, raw| SumCount.step(acc, raw))
    }

    #[test]
    fn value_adds_to_sum_and_count() {
        let acc = SumCount.step(Accumulator::default(), "0.5");
        assert_eq!(
            acc,
            Accumulator {
                sum: 0.5,
                count: 1,
                errors: 0
            }
        );
    }

    #[test]
    fn garbage_only_bumps_errors() {
        let start = Accumulator {
            sum: 2.0,
            count: 1,
            errors: 0,
        };
        let acc = SumCount.step(start, "not a number");
        assert_eq!(acc.sum, 2.0);
        assert_eq!(acc.count, 1);
        assert_eq!(acc.errors, 1);
    }

    #[test]
    fn mixed_inputs() {
        let acc = fold(&["1.0", "2.0", "abc", "3.5"]);
        assert_eq!(
            acc,
            Accumulator {
                sum: 6.5,
                count: 3,
                errors: 1
            }
        );
    }

    #[test]
    fn order_does_not_change_result() {
        assert_eq!(fold(&["3.5", "abc", "2.0", "1.0"]), fold(&["1.0", "2.0", "abc", "3.5"]));
    }

    #[test]
    fn count_plus_errors_is_files_seen() {
        let inputs = ["1", "", "x", "2", "inf", " 3 "];
        let acc = fold(&inputs);
        assert_eq!(acc.processed(), inputs.len() as u64);
        assert_eq!(acc.count, 3);
        assert_eq!(acc.errors, 3);
    }

    #[test]
    fn overflowing_value_is_an_error() {
        let acc = fold(&["1e308", "1e308", "-1e308"]);
        assert_eq!(acc.sum, 0.0);
        assert_eq!(acc.count, 2);
        assert_eq!(acc.errors, 1);
        assert!(acc.sum.is_finite());
    }

    #[test]
    fn rejection_explains_errors_only() {
        let acc = Accumulator::default();
        assert_eq!(SumCount.rejection(&acc, "0.5"), None);
        assert_eq!(
            SumCount.rejection(&acc, "abc").as_deref(),
            Some(r#"not a number: "abc""#)
        );

        let full = Accumulator {
            sum: f64::MAX,
            count: 1,
            errors: 0,
        };
        let reason = SumCount.rejection(&full, "1e308").unwrap();
        assert!(reason.contains("overflows"));
    }

    #[test]
    fn check_passes_sample_errors_through() {
        assert_eq!(
            SumCount::check(&Accumulator::default(), ""),
            Err(Rejected::Sample(SampleError::Empty))
        );
    }
}
