//! Centralized constants for the rudder project.
//!
//! All project-wide constant values live here.
//! Change a value in one place and it applies everywhere.

pub mod cluster;
pub mod paths;
pub mod pki;
