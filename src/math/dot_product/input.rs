//! Deterministic inputs with a closed-form dot product.

/// Two vectors with `a[i] = 2 * (i + 1)` and `b[i] = 1 / (i + 1)`.
///
/// Every product `a[i] * b[i]` is 2, so the exact dot product is
/// `2 * length`.
#[derive(Clone, Debug, PartialEq)]
pub struct DotInput {
    a: Vec<f64>,
    b: Vec<f64>,
}

impl DotInput {
    pub fn generate(length: usize) -> Self {
        let a = (0..length).map(|i| 2.0 * (i + 1) as f64).collect();
        let b = (0..length).map(|i| 1.0 / (i + 1) as f64).collect();
        Self { a, b }
    }

    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    pub fn a(&self) -> &[f64] {
        &self.a
    }

    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Exact dot product of the generated vectors.
    pub fn expected(&self) -> f64 {
        2.0 * self.len() as f64
    }

    /// One multiply and one add per element.
    pub fn flops(&self) -> u64 {
        2 * self.len() as u64
    }
}
