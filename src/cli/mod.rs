pub mod commands;

/// Binary name used in usage text.
pub const PROGRAM: &str = "umi-scaffold";
