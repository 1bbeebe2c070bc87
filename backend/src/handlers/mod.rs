//! HTTP handlers for the Farm Assist platform

mod directory;
mod disease;
mod health;
mod weather;

pub use directory::*;
pub use disease::*;
pub use health::*;
pub use weather::*;
