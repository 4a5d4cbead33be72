pub mod general;
pub mod process;
