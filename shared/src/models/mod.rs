//! Domain models for the Farm Assist platform

mod advisory;
mod directory;
mod disease;
mod weather;

pub use advisory::*;
pub use directory::*;
pub use disease::*;
pub use weather::*;
