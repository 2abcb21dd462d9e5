#![allow(ambiguous_glob_reexports)]

pub mod initialize;
pub mod update_config;
pub mod create_land_cell;
pub mod open_deposit;
pub mod deposit;
pub mod close_deposit;
pub mod register_land;
pub mod place_external_asset;
pub mod update_placement;
pub mod delete_placement;

pub use initialize::*;
pub use update_config::*;
pub use create_land_cell::*;
pub use open_deposit::*;
pub use deposit::*;
pub use close_deposit::*;
pub use register_land::*;
pub use place_external_asset::*;
pub use update_placement::*;
pub use delete_placement::*;
