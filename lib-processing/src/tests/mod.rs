mod morphology;
mod filters;
mod minimize;
mod head_tilt;

/// Deterministic pseudo random masks with runs of varying lengths.
pub fn masks() -> Vec<Vec<bool>> {
    let mut state: u32 = 0x2545_f491;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    (1..40)
        .map(|len| (0..len).map(|_| next() % 3 != 0).collect())
        .collect()
}

pub fn mask(pattern: &str) -> Vec<bool> {
    pattern.chars().map(|c| c == '1').collect()
}
