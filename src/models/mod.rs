pub mod leetcode;
pub mod stats;

pub use leetcode::*;
pub use stats::*;
