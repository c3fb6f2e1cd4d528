pub mod chain;
pub mod command;
pub mod error;
pub mod parser;
pub mod point;

pub use chain::{Chain, Knot};
pub use command::{Command, Direction};
pub use error::{Error, Result};
pub use point::Point;
