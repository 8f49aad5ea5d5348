//! filecase CLI library.
//!
//! Holds the command implementations behind the `filecase` binary so they
//! can be driven from tests.

pub mod commands;
