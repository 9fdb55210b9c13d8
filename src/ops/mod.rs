pub mod block;
pub mod classify;
pub mod interpolate;
pub mod prepare;
pub mod reposition;

pub use block::extend_block;
pub use classify::{PositionClass, classify};
pub use interpolate::interpolate;
pub use prepare::prepare_list;
pub use reposition::reposition;
