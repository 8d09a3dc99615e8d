pub mod classification;
pub mod constructors;
mod conversions;
pub mod helpers;
pub mod types;

pub use constructors::*;
pub(crate) use conversions::{from_connect, from_read, from_write};
pub use helpers::{ConnectionClosed, HeadTooLarge, NoAddresses, TimedOut};
pub use types::{Error, Kind, Result};
