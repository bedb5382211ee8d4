pub mod args;
pub mod command;
pub mod error;
pub mod input;
pub mod session;

pub use command::Command;
pub use error::DriverError;
pub use session::{RunOptions, Session, run};
