//! Command-line interface for newtext
//!
//! This crate provides the `newtext` binary for shaping text and inspecting
//! fonts and script tags. The library portion only exposes the argument
//! definitions and command runners so they can be driven from tests.

pub mod cli;
pub mod commands;
