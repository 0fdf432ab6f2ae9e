//! Zero-phase smoothing filters for complete, in-memory time series.

use core::f64::consts::PI;

use crate::*;

/// Gaussian kernels are cut off at this many standard deviations.
const GAUSSIAN_TRUNCATE: f64 = 4.0;

/// Map any (possibly negative or past the end) index onto the signal by mirroring it around the
/// edges: `d c b a | a b c d | d c b a`.
/// 
#[inline]
fn reflect_index(i: isize, len: usize) -> usize {
    let period = 2 * len as isize;
    let i = i.rem_euclid(period) as usize;
    if i >= len { 2 * len - 1 - i } else { i }
}

/// Normalized Gaussian kernel with standard deviation `sigma` (in samples), truncated at four
/// standard deviations.
/// 
pub fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let radius = libm::floor(GAUSSIAN_TRUNCATE * sigma + 0.5) as usize;
    let mut kernel: Vec<f64> = (0..=2 * radius)
        .map(|i| {
            let x = i as f64 - radius as f64;
            libm::exp(-0.5 * x * x / (sigma * sigma))
        })
        .collect();
    let sum: f64 = kernel.iter().sum();
    kernel.iter_mut().for_each(|k| *k /= sum);
    kernel
}

/// Smooth `data` with a Gaussian kernel of standard deviation `sigma` samples. The kernel is
/// symmetric so the output has no phase shift. A `sigma` of zero returns the data unchanged.
/// 
pub fn gaussian_filter1d(data: &[f64], sigma: f64) -> Result<Vec<f64>, ProcessingError> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(ProcessingError::InvalidParameter { name: "sigma", reason: "must be a finite, non-negative number of samples" });
    }
    if sigma == 0.0 || data.is_empty() {
        return Ok(data.to_vec());
    }

    let kernel = gaussian_kernel(sigma);
    let radius = (kernel.len() / 2) as isize;
    let len = data.len();

    let smoothed = (0..len as isize)
        .map(|i| {
            kernel
                .iter()
                .enumerate()
                .map(|(k, weight)| weight * data[reflect_index(i + k as isize - radius, len)])
                .sum::<f64>()
        })
        .collect();
    Ok(smoothed)
}

/// One second order section in transposed direct form II, `a0` normalized to 1.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biquad
{
    pub b: [f64; 3],
    pub a: [f64; 2],
}

impl Biquad
{
    /// Gain of the section for a constant input.
    /// 
    pub fn dc_gain(&self) -> f64 {
        (self.b[0] + self.b[1] + self.b[2]) / (1.0 + self.a[0] + self.a[1])
    }

    /// Filter state reached after an infinitely long constant `input`.
    /// 
    fn steady_state(&self, input: f64) -> [f64; 2] {
        let output = input * self.dc_gain();
        let z2 = self.b[2] * input - self.a[1] * output;
        let z1 = self.b[1] * input - self.a[0] * output + z2;
        [z1, z2]
    }

    fn run(&self, data: &mut [f64]) {
        let Some(&first) = data.first() else { return };
        let [mut z1, mut z2] = self.steady_state(first);
        for x in data.iter_mut() {
            let input = *x;
            let output = self.b[0] * input + z1;
            z1 = self.b[1] * input - self.a[0] * output + z2;
            z2 = self.b[2] * input - self.a[1] * output;
            *x = output;
        }
    }
}

/// Design a digital Butterworth lowpass filter of the given order as a cascade of second order
/// sections (odd orders get one first order section). `cutoff` and `fs` are both in Hz.
/// 
pub fn butter_lowpass(cutoff: f64, fs: f64, order: usize) -> Result<Vec<Biquad>, ProcessingError> {
    if !fs.is_finite() || fs <= 0.0 {
        return Err(ProcessingError::InvalidParameter { name: "fs", reason: "sampling rate must be positive" });
    }
    if !cutoff.is_finite() || cutoff <= 0.0 || cutoff >= fs / 2.0 {
        return Err(ProcessingError::InvalidParameter { name: "cutoff", reason: "must lie strictly between 0 and the Nyquist frequency" });
    }
    if order == 0 {
        return Err(ProcessingError::InvalidParameter { name: "order", reason: "must be at least 1" });
    }

    // Pre-warped analog cutoff, bilinear transform with s = (1 - z^-1) / (k (1 + z^-1)).
    let k = libm::tan(PI * cutoff / fs);
    let k2 = k * k;
    let mut sections = Vec::with_capacity((order + 1) / 2);

    for pair in 0..order / 2 {
        // Conjugate pole pair of the analog prototype, s^2 + q s + 1.
        let theta = PI * (2 * pair + order + 1) as f64 / (2 * order) as f64;
        let q = -2.0 * libm::cos(theta);
        let a0 = 1.0 + q * k + k2;
        sections.push(Biquad {
            b: [k2 / a0, 2.0 * k2 / a0, k2 / a0],
            a: [(2.0 * k2 - 2.0) / a0, (1.0 - q * k + k2) / a0],
        });
    }
    if order % 2 == 1 {
        let a0 = 1.0 + k;
        sections.push(Biquad {
            b: [k / a0, k / a0, 0.0],
            a: [(k - 1.0) / a0, 0.0],
        });
    }
    Ok(sections)
}

fn run_cascade(sections: &[Biquad], data: &mut [f64]) {
    for section in sections {
        section.run(data);
    }
}

/// Lowpass filter `data` forward and then backward with a Butterworth filter, cancelling the
/// phase shift of a single pass. The signal is padded with an odd extension of `3 * (order + 1)`
/// samples on both ends to limit edge transients.
/// 
pub fn butter_lowpass_filter(data: &[f64], cutoff: f64, fs: f64, order: usize) -> Result<Vec<f64>, ProcessingError> {
    let sections = butter_lowpass(cutoff, fs, order)?;
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let len = data.len();
    let pad = (3 * (order + 1)).min(len - 1);
    let first = data[0];
    let last = data[len - 1];

    let mut extended = Vec::with_capacity(len + 2 * pad);
    extended.extend((1..=pad).rev().map(|i| 2.0 * first - data[i]));
    extended.extend_from_slice(data);
    extended.extend((1..=pad).map(|i| 2.0 * last - data[len - 1 - i]));

    run_cascade(&sections, &mut extended);
    extended.reverse();
    run_cascade(&sections, &mut extended);
    extended.reverse();

    Ok(extended[pad..pad + len].to_vec())
}
