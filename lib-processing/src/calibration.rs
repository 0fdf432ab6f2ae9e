use cfg_if::cfg_if;
use math::*;

use crate::*;
use crate::immobility::check_sampling_rate;

/// Norm, in g, the accelerometer should read in every static position.
pub const EXPECTED_ACC_NORM: f64 = 1.0;

/// Threshold, in deg/s, on the smoothed gyroscope norm used to find the static positions.
pub const DEFAULT_IMMOBILITY_THRESHOLD: f64 = 5.0;

/// Offsets value meaning "not computed yet".
pub const OFFSETS_UNSET: [f64; 3] = [f64::NAN; 3];

/// Result of a successful offset computation.
/// 
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetFit
{
    pub acc_offsets: Vector,
    pub gyr_offsets: Vector,

    /// Mean squared deviation of the corrected accelerometer norms from 1 g.
    pub residual: f64,

    /// Iterations used by the minimizer.
    pub iterations: usize,

    /// Immobility periods the accelerometer offsets were fitted on, longest last.
    pub selected: Vec<Interval>,
}

/// Estimates constant accelerometer and gyroscope offsets from a multi-position tumble test, i.e.
/// a recording in which the sensor is held still in `n_static_positions` different orientations
/// with movements in between.
/// 
/// The gyroscope offsets are the median gyroscope reading over every immobile sample. The
/// accelerometer offsets are chosen such that the mean accelerometer reading of each of the
/// longest immobility periods, once corrected, has a norm as close as possible to 1 g.
/// 
#[derive(Debug, Clone)]
pub struct Calibrator
{
    acc_offsets: Vector,
    gyr_offsets: Vector,

    /// In Hz.
    sampling_rate: f64,

    n_static_positions: usize,

    /// Immobility mask of the last successful computation.
    #[cfg(feature = "debug")]
    pub immobility: Vec<bool>,

    /// Immobility periods the last successful accelerometer fit used.
    #[cfg(feature = "debug")]
    pub selected: Vec<Interval>,
}

impl Default for Calibrator {
    fn default() -> Self {
        Calibrator {
            acc_offsets: Vector::nan(),
            gyr_offsets: Vector::nan(),
            sampling_rate: 300.0,
            n_static_positions: 3,
            #[cfg(feature = "debug")]
            immobility: Vec::new(),
            #[cfg(feature = "debug")]
            selected: Vec::new(),
        }
    }
}

impl Calibrator {

    /// Create a calibrator, optionally starting from known offsets. Pass [`OFFSETS_UNSET`] for
    /// offsets that are still to be computed.
    /// 
    pub fn new(acc_offsets: &[f64], gyr_offsets: &[f64], sampling_rate: f64, n_static_positions: usize) -> Result<Self, ProcessingError> {
        let acc_offsets = offsets_from_slice("acc_offsets", acc_offsets)?;
        let gyr_offsets = offsets_from_slice("gyr_offsets", gyr_offsets)?;
        check_sampling_rate(sampling_rate)?;
        if n_static_positions == 0 {
            return Err(ProcessingError::InvalidParameter { name: "n_static_positions", reason: "at least one static position is needed" });
        }

        Ok(Calibrator {
            acc_offsets,
            gyr_offsets,
            sampling_rate,
            n_static_positions,
            #[cfg(feature = "debug")]
            immobility: Vec::new(),
            #[cfg(feature = "debug")]
            selected: Vec::new(),
        })
    }

    /// Uncalibrated instance for the given recording settings.
    /// 
    pub fn with_settings(sampling_rate: f64, n_static_positions: usize) -> Result<Self, ProcessingError> {
        Self::new(&OFFSETS_UNSET, &OFFSETS_UNSET, sampling_rate, n_static_positions)
    }

    #[inline]
    pub fn acc_offsets(&self) -> Vector {
        self.acc_offsets
    }

    #[inline]
    pub fn gyr_offsets(&self) -> Vector {
        self.gyr_offsets
    }

    #[inline]
    pub fn sampling_rate(&self) -> f64 {
        self.sampling_rate
    }

    #[inline]
    pub fn n_static_positions(&self) -> usize {
        self.n_static_positions
    }

    /// True once both offsets hold actual values.
    /// 
    pub fn is_calibrated(&self) -> bool {
        !self.acc_offsets.is_nan() && !self.gyr_offsets.is_nan()
    }

    /// Compute both offsets from a tumble test recording, `acc` in g and `gyr` in deg/s, using a
    /// Gaussian smoothed threshold on the gyroscope norm to find the static positions.
    /// 
    /// On failure the previously stored offsets are left untouched.
    /// 
    pub fn compute_offsets(&mut self, acc: &[Vector], gyr: &[Vector], immobility_threshold: f64) -> Result<OffsetFit, ProcessingError> {
        let detector = SmoothImmobility {
            sampling_rate: self.sampling_rate,
            threshold: immobility_threshold,
            ..SmoothImmobility::default()
        };
        self.compute_offsets_with(acc, gyr, &detector, &NelderMead::default())
    }

    /// Same as [`Calibrator::compute_offsets`] with a custom immobility detector and minimizer.
    /// 
    pub fn compute_offsets_with<D, M>(&mut self, acc: &[Vector], gyr: &[Vector], detector: &D, minimizer: &M) -> Result<OffsetFit, ProcessingError>
    where
        D: ImmobilityDetector,
        M: Minimizer,
    {
        check_aligned(acc.len(), gyr.len())?;

        let is_immobile = detector.detect(&norms(gyr))?;
        check_aligned(gyr.len(), is_immobile.len())?;

        // Gyroscope offsets from every immobile sample at once, not per period.
        let immobile_gyr: Vec<Vector> = gyr
            .iter()
            .zip(&is_immobile)
            .filter_map(|(sample, &immobile)| immobile.then_some(*sample))
            .collect();
        let mut scratch = vec![0.0; immobile_gyr.len()];
        let Some(gyr_offsets) = median_per_axis(&immobile_gyr, &mut scratch) else {
            log::warn!("No immobile sample in {} samples", gyr.len());
            return Err(ProcessingError::NoImmobility);
        };

        // Keep the longest periods, one per static position.
        let lengths = apply_function_to_intervals(acc, &is_immobile, <[Vector]>::len)?;
        let selected = select_longest(&lengths, self.n_static_positions)?;

        let binned_acc = apply_function_to_intervals(acc, &is_immobile, Vector::mean_of)?;
        let data = selected
            .iter()
            .map(|&i| binned_acc[i].ok_or(ProcessingError::NoImmobility))
            .collect::<Result<Vec<Vector>, _>>()?;

        let fit = fit_offset(&data, EXPECTED_ACC_NORM, Vector::zero(), minimizer)?;
        let acc_offsets = Vector::from(fit.x);

        let intervals = true_intervals(&is_immobile);
        let selected: Vec<Interval> = selected.iter().map(|&i| intervals[i]).collect();
        log::info!("Fitted accelerometer offsets on {:?}", selected);
        log::info!(
            "acc offsets: {:?}, gyr offsets: {:?}, residual: {:e} after {} iterations",
            acc_offsets, gyr_offsets, fit.value, fit.iterations
        );

        self.acc_offsets = acc_offsets;
        self.gyr_offsets = gyr_offsets;
        cfg_if! { if #[cfg(feature = "debug")] {
            self.immobility = is_immobile;
            self.selected = selected.clone();
        }}

        Ok(OffsetFit {
            acc_offsets,
            gyr_offsets,
            residual: fit.value,
            iterations: fit.iterations,
            selected,
        })
    }

    /// Accelerometer samples with the offsets removed, `None` while uncalibrated.
    /// 
    pub fn correct_acc(&self, acc: &[Vector]) -> Option<Vec<Vector>> {
        if self.acc_offsets.is_nan() {
            return None;
        }
        Some(acc.iter().map(|sample| *sample - self.acc_offsets).collect())
    }

    /// Gyroscope samples with the offsets removed, `None` while uncalibrated.
    /// 
    pub fn correct_gyr(&self, gyr: &[Vector]) -> Option<Vec<Vector>> {
        if self.gyr_offsets.is_nan() {
            return None;
        }
        Some(gyr.iter().map(|sample| *sample - self.gyr_offsets).collect())
    }
}

/// Offsets must be three finite values, or all NaN for "unset".
/// 
fn offsets_from_slice(name: &'static str, values: &[f64]) -> Result<Vector, ProcessingError> {
    let Ok(values) = <[f64; 3]>::try_from(values) else {
        return Err(ProcessingError::InvalidParameter { name, reason: "offsets must be an array of length 3" });
    };
    let unset = values.iter().all(|v| v.is_nan());
    if !unset && !values.iter().all(|v| v.is_finite()) {
        return Err(ProcessingError::InvalidParameter { name, reason: "offsets must be finite, or all NaN when unset" });
    }
    Ok(Vector::from(values))
}

/// Indices of the `n` longest intervals, ordered by ascending (length, index) so that among equal
/// lengths the later intervals win.
/// 
pub fn select_longest(lengths: &[usize], n: usize) -> Result<Vec<usize>, ProcessingError> {
    if lengths.len() < n {
        log::warn!("Only {} immobility periods for {} static positions", lengths.len(), n);
        return Err(ProcessingError::TooFewStaticPositions { found: lengths.len(), required: n });
    }
    let mut ranked: Vec<usize> = (0..lengths.len()).collect();
    ranked.sort_by_key(|&i| (lengths[i], i));
    Ok(ranked.split_off(lengths.len() - n))
}

/// Mean squared difference between the norms of the offset-corrected samples and
/// `expected_norm`: `mean((|data - offsets| - expected_norm)^2)`.
/// 
pub fn offset_cost(offsets: &Vector, data: &[Vector], expected_norm: f64) -> f64 {
    let squared_errors: Vec<f64> = data
        .iter()
        .map(|sample| {
            let error = (sample - offsets).magnitude() - expected_norm;
            error * error
        })
        .collect();
    mean(&squared_errors).unwrap_or(f64::NAN)
}

/// Offsets that bring the norm of `data` as close as possible to `expected_norm`, starting the
/// search from `x0`.
/// 
pub fn fit_offset<M: Minimizer>(data: &[Vector], expected_norm: f64, x0: Vector, minimizer: &M) -> Result<Minimum<3>, ProcessingError> {
    let fit = minimizer.minimize(
        |x: &[f64; 3]| offset_cost(&Vector::from(*x), data, expected_norm),
        x0.into(),
    );
    if !fit.converged {
        log::warn!("Offset fit stopped after {} iterations", fit.iterations);
        return Err(ProcessingError::NonConvergence { iterations: fit.iterations, residual: fit.value });
    }
    Ok(fit)
}
