//! Vector kernels: plain and block dot products, STREAM triad.

pub mod block_dot;
pub mod dot_product;
pub mod triad;
