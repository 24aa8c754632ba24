pub mod context;
pub mod engine;
pub mod matrix;
pub mod reference;

#[cfg(test)]
mod tests;

pub use context::*;
pub use engine::*;
pub use matrix::*;
pub use reference::*;
