use super::Triad;

#[inline(never)]
pub fn triad_ref(a: &mut [f64], b: &[f64], scalar: f64, c: &[f64]) {
    assert!(a.len() == b.len() && b.len() == c.len(), "Vectors must have the same length");

    for i in 0..a.len() {
        a[i] = b[i] + scalar * c[i];
    }
}

pub struct Reference;

impl Triad for Reference {
    fn triad(&self, a: &mut [f64], b: &[f64], scalar: f64, c: &[f64]) {
        triad_ref(a, b, scalar, c)
    }
}
