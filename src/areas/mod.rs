//! Comparison run components
//!
//! This module contains the I/O-facing building blocks of one run:
//!
//! - `ignore_list`: Devices excluded from reporting
//! - `session`: Settings, workspace and output writer of a run
//! - `settings`: Resolved command line and environment configuration
//! - `workspace`: Reading input files relative to a base directory

pub mod ignore_list;
pub mod session;
pub mod settings;
pub mod workspace;
