//! Inputs for `a[i] = b[i] + scalar * c[i]` with a closed-form result.

/// Scalar multiplier used by every triad run.
pub const SCALAR: f64 = 3.0;

/// `b[i] = i + 1` and `c[i] = 2`, so `a[i] = i + 1 + 2 * SCALAR`.
#[derive(Clone, Debug, PartialEq)]
pub struct TriadInput {
    b: Vec<f64>,
    c: Vec<f64>,
}

impl TriadInput {
    pub fn generate(length: usize) -> Self {
        let b = (0..length).map(|i| (i + 1) as f64).collect();
        let c = vec![2.0; length];
        Self { b, c }
    }

    pub fn len(&self) -> usize {
        self.b.len()
    }

    pub fn is_empty(&self) -> bool {
        self.b.is_empty()
    }

    pub fn b(&self) -> &[f64] {
        &self.b
    }

    pub fn c(&self) -> &[f64] {
        &self.c
    }

    /// Exact value of `a[i]`.
    pub fn expected(i: usize) -> f64 {
        (i + 1) as f64 + 2.0 * SCALAR
    }

    /// One multiply and one add per element.
    pub fn flops(&self) -> u64 {
        2 * self.len() as u64
    }

    /// Largest absolute error of `a` against the closed form.
    pub fn max_error(a: &[f64]) -> f64 {
        a.iter()
            .enumerate()
            .map(|(i, &x)| (x - Self::expected(i)).abs())
            .fold(0.0, |worst, err| if err.is_nan() || err > worst { err } else { worst })
    }
}
