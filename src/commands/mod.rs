//! Command implementations
//!
//! Commands are implemented on [`Session`](crate::areas::session::Session):
//!
//! - `compare`: Compare two configuration files and print the context diff

pub mod compare;
