//! Ordered RouterOS script primitives used by higher-level generators.
//!
//! A RouterOS export script is a sequence of section headers (`/ip route`,
//! `/interface bridge port`, ...) each followed by the commands that belong to
//! it. [`RouterConfig`] models that as an insertion-ordered map from section
//! path to an ordered list of command strings, and this crate provides the
//! merge monoid, post-processing, and text rendering on top of it. Nothing in
//! here knows about topologies; domain logic lives in the crates built on top.

pub mod config;
pub mod script;

pub use config::{merge, merge_all, shorten, RouterConfig, COMMENT_BLOCK};
pub use script::{format_json, parse, render, write_file, WriteError};
