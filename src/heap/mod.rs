pub mod container;
pub mod engine;
pub mod error;


pub use container::*;
pub use engine::*;
pub use error::*;
