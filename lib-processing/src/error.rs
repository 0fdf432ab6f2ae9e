use core::fmt;
use std::error::Error;


#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError
{
    /// A parameter handed to a constructor or filter design is outside its valid domain.
    InvalidParameter { name: &'static str, reason: &'static str },
    /// Two arrays that must be index-aligned have different lengths.
    LengthMismatch { expected: usize, found: usize },
    /// Not a single sample was flagged as immobile.
    NoImmobility,
    /// Fewer immobility periods were found than static positions are needed for the fit.
    TooFewStaticPositions { found: usize, required: usize },
    /// The minimizer ran out of iterations before reaching its tolerances.
    NonConvergence { iterations: usize, residual: f64 },
}

impl Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidParameter { name, reason } => write!(f, "Invalid parameter `{}`: {}", name, reason),
            Self::LengthMismatch { expected, found } => write!(f, "Arrays are not index-aligned: expected length {}, found {}", expected, found),
            Self::NoImmobility => write!(f, "No immobility period found in the gyroscope data"),
            Self::TooFewStaticPositions { found, required } => write!(f, "Found {} immobility periods but {} static positions are required", found, required),
            Self::NonConvergence { iterations, residual } => write!(f, "Offset fit did not converge after {} iterations (residual {})", iterations, residual),
        }
    }
}

/// Fails with `LengthMismatch` unless both lengths are equal.
/// 
#[inline]
pub fn check_aligned(expected: usize, found: usize) -> Result<(), ProcessingError> {
    if expected != found {
        return Err(ProcessingError::LengthMismatch { expected, found });
    }
    Ok(())
}
