//! Block matrices for the batched dot product.
//!
//! `A` has `J` rows and `B` has `K` rows, each of `length` elements and
//! stored row after row, so row `j` of `A` and row `k` of `B` are both
//! contiguous. Output cell `C[j][k]` is the dot product of those two rows.

use crate::utils::validate::within_tolerance;

/// Rows of the left operand.
pub const J: usize = 8;
/// Rows of the right operand.
pub const K: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct BlockInput {
    length: usize,
    a: Vec<f64>,
    b: Vec<f64>,
}

impl BlockInput {
    /// `A[j][i] = 1000 * (i + 1) + (j + 1)` and
    /// `B[k][i] = 1 / (1000 * (i + 1) + (k + 1))`.
    pub fn generate(length: usize) -> Self {
        let mut a = vec![0.0; J * length];
        let mut b = vec![0.0; K * length];

        for i in 0..length {
            for j in 0..J {
                a[j * length + i] = (1000 * (i + 1) + j + 1) as f64;
            }
            for k in 0..K {
                b[k * length + i] = 1.0 / (1000 * (i + 1) + k + 1) as f64;
            }
        }

        Self { length, a, b }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn row_a(&self, j: usize) -> &[f64] {
        &self.a[j * self.length..(j + 1) * self.length]
    }

    pub fn row_b(&self, k: usize) -> &[f64] {
        &self.b[k * self.length..(k + 1) * self.length]
    }

    /// One multiply and one add per element of every output cell.
    pub fn flops(&self) -> u64 {
        2 * (J * K) as u64 * self.length as u64
    }
}

/// `J x K` output matrix, row-major.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockResult {
    cells: [f64; J * K],
}

impl Default for BlockResult {
    fn default() -> Self {
        Self {
            cells: [0.0; J * K],
        }
    }
}

impl BlockResult {
    pub fn get(&self, j: usize, k: usize) -> f64 {
        self.cells[j * K + k]
    }

    pub fn set(&mut self, j: usize, k: usize, value: f64) {
        self.cells[j * K + k] = value;
    }

    pub fn cells_mut(&mut self) -> &mut [f64] {
        &mut self.cells
    }

    /// One message per cell that differs from `reference` beyond tolerance.
    pub fn mismatches(&self, reference: &BlockResult) -> Vec<String> {
        let mut messages = Vec::new();
        for j in 0..J {
            for k in 0..K {
                let (got, expected) = (self.get(j, k), reference.get(j, k));
                if !within_tolerance(got, expected) {
                    messages.push(format!(
                        "Result[{},{}] = {:.6} failed to validate with expected value {:.6}",
                        j, k, got, expected
                    ));
                }
            }
        }
        messages
    }
}
