//! One dimensional binary morphology on boolean masks.
//! 
//! Every operator works on the runs found in its *input* mask, so extensions or retractions of
//! neighbouring runs never feed back into each other. Widths are in samples; a width larger than
//! the mask simply saturates.

use crate::*;

/// Extend every `true` run by `width` samples on both sides (clipped to the mask bounds). Runs
/// whose extensions overlap end up merged.
/// 
pub fn dilate(mask: &[bool], width: usize) -> Vec<bool> {
    let mut out = mask.to_vec();
    if width == 0 {
        return out;
    }
    for interval in true_intervals(mask) {
        out[interval.left.saturating_sub(width)..interval.left].fill(true);
        let end = interval.right.saturating_add(width).min(mask.len() - 1);
        out[interval.right + 1..=end].fill(true);
    }
    out
}

/// Retract every `true` run by `width` samples from both ends. A run that is at most
/// `2 * width` samples long disappears.
/// 
pub fn erode(mask: &[bool], width: usize) -> Vec<bool> {
    let mut out = mask.to_vec();
    if width == 0 {
        return out;
    }
    for interval in true_intervals(mask) {
        let left_end = interval.left.saturating_add(width).min(interval.right + 1);
        out[interval.left..left_end].fill(false);
        let right_start = (interval.right + 1).saturating_sub(width).max(interval.left);
        out[right_start..=interval.right].fill(false);
    }
    out
}

/// Erosion followed by a dilation: drops runs of at most `2 * width` samples and leaves the
/// others at their original extent.
/// 
pub fn open(mask: &[bool], width: usize) -> Vec<bool> {
    dilate(&erode(mask, width), width)
}

/// Dilation followed by an erosion: merges runs separated by gaps of at most `2 * width`
/// samples.
/// 
/// The erosion treats the ends of the mask like any other run end, so a run touching the first
/// or last sample loses `width` samples on that side: `close(11111_00000, 2)` is `00111_00000`.
/// 
pub fn close(mask: &[bool], width: usize) -> Vec<bool> {
    erode(&dilate(mask, width), width)
}

/// Convert a duration in seconds to a width in samples, flooring and clamping at zero.
/// 
#[inline]
pub fn seconds_to_width(seconds: f64, sampling_rate: f64) -> usize {
    let samples = seconds * sampling_rate;
    if samples.is_nan() || samples <= 0.0 {
        return 0;
    }
    libm::floor(samples) as usize
}
