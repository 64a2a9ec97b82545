//! Command implementations

pub mod info;
pub mod scripts;
pub mod shape;
