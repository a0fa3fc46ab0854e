pub mod common;
pub mod resolver;
pub mod script;

pub use common::ImportSpecifier;
