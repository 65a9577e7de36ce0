// Probability-based target selection against an opponent's hidden fleet.

use rand::Rng;

use crate::common::Cell;
use crate::grid::Grid;
use crate::ship::{Orientation, Placement};
use crate::target::Target;

/// Placements covering more observed hits receive this much more weight per
/// hit, so cells next to confirmed hits stand out.
const HIT_BIAS: f64 = 10.0;

/// Lower temperature sharpens sampling towards likely ship cells.
const TEMPERATURE: f64 = 0.5;

/// Compute a probability density over the untargeted cells of `tracking`,
/// given the ship lengths the opponent fielded. Every run of each length that
/// avoids known misses contributes weight to its untargeted cells. The result
/// is row-major and sums to 1.
pub fn calc_pdf(tracking: &Grid, fleet: &[usize]) -> Vec<f64> {
    let size = tracking.size();
    let mut matrix = vec![0.0f64; size * size];

    for &len in fleet {
        if len == 0 || len > size {
            continue;
        }
        for orient in Orientation::ALL {
            let (max_row, max_col) = match orient {
                Orientation::Vertical => (size - len + 1, size),
                Orientation::Horizontal => (size, size - len + 1),
            };
            for r in 0..max_row {
                for c in 0..max_col {
                    let run = Placement::new(r, c, orient, len);
                    let mut n_hits = 0usize;
                    let valid = run.cells().all(|(rr, cc)| match tracking.get(rr, cc) {
                        Some(Cell::Miss) | None => false,
                        Some(Cell::Hit) => {
                            n_hits += 1;
                            true
                        }
                        Some(_) => true,
                    });
                    if !valid {
                        continue;
                    }
                    let weight = HIT_BIAS.powi(n_hits as i32);
                    for (rr, cc) in run.cells() {
                        if is_untargeted(tracking, rr, cc) {
                            matrix[rr * size + cc] += weight;
                        }
                    }
                }
            }
        }
    }

    normalize(tracking, matrix)
}

fn is_untargeted(tracking: &Grid, row: usize, col: usize) -> bool {
    matches!(tracking.get(row, col), Some(Cell::Water | Cell::Ship))
}

// Falls back to uniform over untargeted cells when no run survives.
fn normalize(tracking: &Grid, mut matrix: Vec<f64>) -> Vec<f64> {
    let total: f64 = matrix.iter().sum();
    if total == 0.0 {
        let open: Vec<usize> = tracking
            .cells()
            .filter(|&(r, c, _)| is_untargeted(tracking, r, c))
            .map(|(r, c, _)| r * tracking.size() + c)
            .collect();
        if !open.is_empty() {
            let uniform = 1.0 / open.len() as f64;
            for i in open {
                matrix[i] = uniform;
            }
        }
        return matrix;
    }
    for v in matrix.iter_mut() {
        *v /= total;
    }
    matrix
}

/// Sample a cell index from a probability vector using a temperature
/// parameter. Returns `None` when every entry is zero.
pub fn sample_pdf<R: Rng + ?Sized>(pdf: &[f64], temperature: f64, rng: &mut R) -> Option<usize> {
    let adjusted: Vec<f64> = pdf.iter().map(|v| v.powf(1.0 / temperature)).collect();
    let total: f64 = adjusted.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return None;
    }
    let threshold: f64 = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last = None;
    for (i, &v) in adjusted.iter().enumerate() {
        if v <= 0.0 {
            continue;
        }
        cumulative += v;
        last = Some(i);
        if threshold < cumulative {
            return Some(i);
        }
    }
    // rounding can leave the threshold just past the final weight
    last
}

/// Computer-controlled player that aims using [`calc_pdf`].
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    fleet: Vec<usize>,
}

impl ComputerPlayer {
    /// Create a computer player hunting a fleet of the given ship lengths.
    pub fn new(fleet: &[usize]) -> Self {
        Self {
            fleet: fleet.to_vec(),
        }
    }

    /// Choose the next target given the guess history on `tracking`. Never
    /// picks a cell already fired at; `None` once every cell has been tried.
    pub fn select_target<R: Rng + ?Sized>(&mut self, tracking: &Grid, rng: &mut R) -> Option<Target> {
        let pdf = calc_pdf(tracking, &self.fleet);
        let index = sample_pdf(&pdf, TEMPERATURE, rng)?;
        let size = tracking.size();
        Some(Target::new(index / size, index % size))
    }
}
