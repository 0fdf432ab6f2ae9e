//! Derivative free minimization of small, smooth objectives.

/// Outcome of a minimization.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimum<const N: usize>
{
    /// Best point found.
    pub x: [f64; N],

    /// Objective value at `x`.
    pub value: f64,

    pub iterations: usize,

    /// Whether the tolerances were met before the iteration budget ran out.
    pub converged: bool,
}

/// A generic unconstrained minimizer over `N` parameters.
/// 
pub trait Minimizer
{
    fn minimize<const N: usize, F>(&self, objective: F, x0: [f64; N]) -> Minimum<N>
    where
        F: Fn(&[f64; N]) -> f64;
}

/// Nelder-Mead downhill simplex. Converged once every vertex lies within `xatol` of the best
/// one on every coordinate and their objective values within `fatol`.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NelderMead
{
    pub max_iterations: usize,
    pub xatol: f64,
    pub fatol: f64,

    /// Relative size of the initial simplex along non zero coordinates of the starting point,
    /// absolute size along zero coordinates.
    pub initial_step: f64,
}

impl Default for NelderMead {
    fn default() -> Self {
        Self {
            max_iterations: 5000,
            xatol: 1e-10,
            fatol: 1e-14,
            initial_step: 0.05,
        }
    }
}

const REFLECTION: f64 = 1.0;
const EXPANSION: f64 = 2.0;
const CONTRACTION: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// `origin + factor * (towards - origin)`
#[inline]
fn along<const N: usize>(origin: &[f64; N], towards: &[f64; N], factor: f64) -> [f64; N] {
    core::array::from_fn(|i| origin[i] + factor * (towards[i] - origin[i]))
}

impl NelderMead
{
    fn initial_simplex<const N: usize>(&self, x0: [f64; N]) -> Vec<[f64; N]> {
        let mut simplex = Vec::with_capacity(N + 1);
        simplex.push(x0);
        for i in 0..N {
            let mut vertex = x0;
            vertex[i] = if x0[i] != 0.0 { x0[i] * (1.0 + self.initial_step) } else { self.initial_step };
            simplex.push(vertex);
        }
        simplex
    }

    fn has_converged<const N: usize>(&self, simplex: &[[f64; N]], values: &[f64]) -> bool {
        let best = &simplex[0];
        let x_spread = simplex[1..]
            .iter()
            .flat_map(|vertex| vertex.iter().zip(best).map(|(a, b)| libm::fabs(a - b)))
            .fold(0.0, f64::max);
        let f_spread = values[1..]
            .iter()
            .map(|v| libm::fabs(v - values[0]))
            .fold(0.0, f64::max);
        x_spread <= self.xatol && f_spread <= self.fatol
    }
}

impl Minimizer for NelderMead {
    fn minimize<const N: usize, F>(&self, objective: F, x0: [f64; N]) -> Minimum<N>
    where
        F: Fn(&[f64; N]) -> f64,
    {
        let mut simplex = self.initial_simplex(x0);
        let mut values: Vec<f64> = simplex.iter().map(&objective).collect();
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iterations {
            // Keep the vertices sorted from best to worst.
            let mut order: Vec<usize> = (0..=N).collect();
            order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
            simplex = order.iter().map(|&i| simplex[i]).collect();
            values = order.iter().map(|&i| values[i]).collect();

            if self.has_converged(&simplex, &values) {
                converged = true;
                break;
            }
            iterations += 1;

            let centroid: [f64; N] = core::array::from_fn(|i| {
                simplex[..N].iter().map(|vertex| vertex[i]).sum::<f64>() / N as f64
            });
            let worst = simplex[N];

            let reflected = along(&centroid, &worst, -REFLECTION);
            let f_reflected = objective(&reflected);

            if f_reflected < values[0] {
                let expanded = along(&centroid, &worst, -REFLECTION * EXPANSION);
                let f_expanded = objective(&expanded);
                if f_expanded < f_reflected {
                    simplex[N] = expanded;
                    values[N] = f_expanded;
                } else {
                    simplex[N] = reflected;
                    values[N] = f_reflected;
                }
                continue;
            }
            if f_reflected < values[N - 1] {
                simplex[N] = reflected;
                values[N] = f_reflected;
                continue;
            }

            // Contract, outside when the reflection still improved on the worst vertex.
            let (contracted, bound) = if f_reflected < values[N] {
                (along(&centroid, &reflected, CONTRACTION), f_reflected)
            } else {
                (along(&centroid, &worst, CONTRACTION), values[N])
            };
            let f_contracted = objective(&contracted);
            if f_contracted <= bound {
                simplex[N] = contracted;
                values[N] = f_contracted;
                continue;
            }

            let best = simplex[0];
            for j in 1..=N {
                simplex[j] = along(&best, &simplex[j], SHRINK);
                values[j] = objective(&simplex[j]);
            }
        }

        if !converged {
            // Budget exhausted, still report the best vertex.
            let best = (0..=N).min_by(|&a, &b| values[a].total_cmp(&values[b])).unwrap_or(0);
            return Minimum { x: simplex[best], value: values[best], iterations, converged };
        }
        Minimum { x: simplex[0], value: values[0], iterations, converged }
    }
}
