//! RouterOS configuration script generation from declarative topology files.
//!
//! A topology file describes what the network should look like: WAN uplinks,
//! LAN segmentation, VPN servers, trunked slave routers. This library compiles
//! that description into an ordered RouterOS CLI script. Generation is pure
//! and total: the same topology always yields the same script, and partial or
//! odd topologies yield smaller scripts (plus inline WARNING comments), never
//! errors.
//!
//! # Architecture
//!
//! ## Data model
//!
//! - [`model`] — The topology state: mode/router inventory, WAN link lists,
//!   LAN ports/radios/tunnels/subnets, VPN server settings and users
//! - [`tables`] — Fixed allocation tables: VLAN IDs, bridge names, interface
//!   lists, reachability-check hosts
//! - [`ifname`] — Interface-name family classification
//!
//! ## Generators
//!
//! - [`generate::wan`] — Uplink interface stacking and connection protocols
//! - [`generate::routing`] — Single-link default routes and the multi-WAN
//!   engine (load-balance, failover, round-robin, both)
//! - [`generate::vpn`] — Six parallel VPN server generators plus static
//!   address bindings
//! - [`generate::lan`] — IPv6 baseline, wireless APs, tunnels, category
//!   bridges, subnet addressing
//! - [`generate::trunk`] — Master-side VLAN fan-out, wired or wireless
//!
//! ## Orchestration & reporting
//!
//! - [`compose`] — LAN-level, trunk-level and full-script assembly
//! - [`summary`] — Post-generation counts for the `inspect` command
//! - [`report`] — Terminal-friendly colored script preview
//!
//! # Built on ros-script-core
//!
//! This library uses `ros-script-core` for the ordered section/command model,
//! the merge/shorten combinators, and script rendering. All topology-specific
//! logic is contained in this crate.

pub mod compose;
pub mod generate;
pub mod ifname;
pub mod model;
pub mod report;
pub mod summary;
pub mod tables;
