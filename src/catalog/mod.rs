pub mod capability;
pub mod descriptor;

pub use capability::*;
pub use descriptor::*;
