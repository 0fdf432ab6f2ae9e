use math::Vector;

use crate::*;

/// Anything that can turn a gyroscope norm time series (deg/s) into a mask flagging the samples
/// that belong to an immobility period.
/// 
pub trait ImmobilityDetector
{
    fn detect(&self, gyr_norm: &[f64]) -> Result<Vec<bool>, ProcessingError>;
}

/// Immobility from a hard threshold on the gyroscope norm, cleaned up with morphology: runs
/// closer than `merging_time` seconds are merged, then runs shorter than `minimal_duration`
/// seconds are dropped.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdImmobility
{
    /// In Hz; sampling rate of the gyroscope norm.
    pub sampling_rate: f64,

    /// In deg/s.
    pub threshold: f64,

    /// In seconds.
    pub merging_time: f64,

    /// In seconds.
    pub minimal_duration: f64,
}

impl Default for ThresholdImmobility {
    fn default() -> Self {
        Self {
            sampling_rate: 300.0,
            threshold: 12.0,
            merging_time: 0.1,
            minimal_duration: 0.5,
        }
    }
}

impl ImmobilityDetector for ThresholdImmobility {
    fn detect(&self, gyr_norm: &[f64]) -> Result<Vec<bool>, ProcessingError> {
        check_sampling_rate(self.sampling_rate)?;

        let is_immobile: Vec<bool> = gyr_norm.iter().map(|&norm| norm < self.threshold).collect();

        // Merge immobility periods close in time, then drop the short ones.
        let merging_width = seconds_to_width(self.merging_time / 2.0, self.sampling_rate);
        let is_immobile = close(&is_immobile, merging_width);
        let minimal_width = seconds_to_width(self.minimal_duration / 2.0, self.sampling_rate);
        let is_immobile = open(&is_immobile, minimal_width);

        log::debug!(
            "Threshold immobility: {} periods (merge width {}, minimal width {})",
            true_intervals(&is_immobile).len(), merging_width, minimal_width
        );
        Ok(is_immobile)
    }
}

/// Immobility from a threshold on the gyroscope norm after smoothing it with a Gaussian kernel
/// of `sigma` seconds. Simpler to tune than [`ThresholdImmobility`] at the cost of less explicit
/// control over merging and minimal durations.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothImmobility
{
    /// In Hz; sampling rate of the gyroscope norm.
    pub sampling_rate: f64,

    /// In deg/s.
    pub threshold: f64,

    /// In seconds; standard deviation of the smoothing kernel.
    pub sigma: f64,
}

impl Default for SmoothImmobility {
    fn default() -> Self {
        Self {
            sampling_rate: 300.0,
            threshold: 12.0,
            sigma: 0.5,
        }
    }
}

impl ImmobilityDetector for SmoothImmobility {
    fn detect(&self, gyr_norm: &[f64]) -> Result<Vec<bool>, ProcessingError> {
        check_sampling_rate(self.sampling_rate)?;

        let smoothed = gaussian_filter1d(gyr_norm, self.sigma * self.sampling_rate)?;
        let is_immobile: Vec<bool> = smoothed.iter().map(|&norm| norm < self.threshold).collect();

        log::debug!("Smooth immobility: {} periods", true_intervals(&is_immobile).len());
        Ok(is_immobile)
    }
}

/// Immobility mask from a threshold followed by a closing and an opening, see
/// [`ThresholdImmobility`].
/// 
pub fn get_immobility(gyr_norm: &[f64], sampling_rate: f64, threshold: f64, merging_time: f64, minimal_duration: f64) -> Result<Vec<bool>, ProcessingError> {
    ThresholdImmobility { sampling_rate, threshold, merging_time, minimal_duration }.detect(gyr_norm)
}

/// Immobility mask from a threshold on the Gaussian smoothed norm, see [`SmoothImmobility`].
/// 
pub fn get_immobility_smooth(gyr_norm: &[f64], sampling_rate: f64, threshold: f64, sigma: f64) -> Result<Vec<bool>, ProcessingError> {
    SmoothImmobility { sampling_rate, threshold, sigma }.detect(gyr_norm)
}

/// Euclidean norm of every sample.
/// 
pub fn norms(samples: &[Vector]) -> Vec<f64> {
    samples.iter().map(Vector::magnitude).collect()
}

pub(crate) fn check_sampling_rate(sampling_rate: f64) -> Result<(), ProcessingError> {
    if !sampling_rate.is_finite() || sampling_rate <= 0.0 {
        return Err(ProcessingError::InvalidParameter { name: "sampling_rate", reason: "must be a positive number of Hz" });
    }
    Ok(())
}
