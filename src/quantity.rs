#[macro_use]
mod macros;

pub mod power;
pub mod proportions;
pub mod voltage;
