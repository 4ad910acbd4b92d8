//! Data types for the sticky grid.

mod config;
mod item_data;
mod mounted;
mod range;

pub use config::*;
pub use item_data::*;
pub use mounted::*;
pub use range::*;
