//! Task-parallel kernels.

pub mod fib;
