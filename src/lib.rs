// ABOUTME: Library crate for ccrun exposing the launch logic for testing and reuse

#![allow(missing_docs)]

pub mod claude;
pub mod cli;
pub mod config;
pub mod error;
pub mod headless;
pub mod interactive;
pub mod locator;
pub mod mode;
pub mod tmux;
