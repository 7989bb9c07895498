//! Utility modules for common functionality
//!
//! This module provides logging and argument helpers used by the CLI.

pub mod logger;
pub mod arg_utils;
