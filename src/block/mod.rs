pub mod tree;
pub mod types;

pub use tree::*;
