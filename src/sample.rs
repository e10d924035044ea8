//! Text format of a sample file: one floating-point value, nothing else.

use thiserror::Error;

/// Why a sample's contents could not be read as a number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    #[error("sample is empty")]
    Empty,
    #[error("not a number: {raw:?}")]
    Malformed { raw: String },
    #[error("value is not finite: {value}")]
    NonFinite { value: f64 },
}

/// Render a value the way it is stored in a sample file.
pub fn render(value: f64) -> String {
    value.to_string()
}

/// Parse the contents of a sample file.
///
/// Surrounding whitespace is ignored, so a trailing newline is fine.
/// `inf` and `NaN` parse as floats but are rejected: they have no JSON form.
pub fn parse(raw: &str) -> Result<f64, SampleError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SampleError::Empty);
    }
    let value: f64 = trimmed.parse().map_err(|_| SampleError::Malformed {
        raw: truncate(trimmed),
    })?;
    if !value.is_finite() {
        return Err(SampleError::NonFinite { value });
    }
    Ok(value)
}

/// Keep error messages bounded when a large non-numeric file is read.
fn truncate(raw: &str) -> String {
    const MAX_CHARS: usize = 64;
    if raw.chars().count() <= MAX_CHARS {
        raw.to_string()
    } else {
        let mut s: String = raw.chars().take(MAX_CHARS).collect();
        s.push('…');
        s
    }
}
