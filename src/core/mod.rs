pub mod actions;
pub mod data;
pub mod fractals;
pub mod util;
