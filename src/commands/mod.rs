//! Command implementations over the marquee library.

pub mod check;
pub mod init;
pub mod languages;
pub mod play;
pub mod resolve;
pub mod shared;

pub use check::CheckOutcome;
