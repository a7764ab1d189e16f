// ABOUTME: Configuration constants shared by Tasklist packages
// ABOUTME: Re-exports environment variable names so callers never hard-code them

pub mod constants;

pub use constants::*;
