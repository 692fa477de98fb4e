//! Core library for the `volley` CLI.
//!
//! This crate provides the internal building blocks used by the binary:
//! CLI argument types, the request template, the transport seam, the
//! lock-free statistics recorder, and the dispatch engine. The primary
//! user-facing interface is the `volley` command-line application.
pub mod app;
pub mod args;
pub mod error;
pub mod http;
pub mod metrics;
