//! Business domain entities. Pure data with no store or transport concerns.

pub mod product;

pub use product::*;
