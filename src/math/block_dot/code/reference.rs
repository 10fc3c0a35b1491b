//! Reference block dot product: one sequential dot product per cell.

use super::BlockDot;
use crate::math::block_dot::input::{BlockInput, BlockResult, J, K};
use crate::math::dot_product::dot_ref;

pub struct ReferenceBlock;

impl BlockDot for ReferenceBlock {
    #[inline(never)]
    fn compute(&self, input: &BlockInput) -> BlockResult {
        let mut result = BlockResult::default();
        for j in 0..J {
            for k in 0..K {
                result.set(j, k, dot_ref(input.row_a(j), input.row_b(k)));
            }
        }
        result
    }
}
