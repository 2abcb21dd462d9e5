pub mod land;
pub mod land_cell;
pub mod deposit;
pub mod asset;
pub mod placement;
pub mod registry;

pub use land::*;
pub use land_cell::*;
pub use deposit::*;
pub use asset::*;
pub use placement::*;
pub use registry::*;
