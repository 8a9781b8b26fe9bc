//! Core types for dramatis.

mod document;
mod entity;
mod graph;
mod linkage;
mod mention;
mod result;

pub use document::*;
pub use entity::*;
pub use graph::*;
pub use linkage::*;
pub use mention::*;
pub use result::*;
