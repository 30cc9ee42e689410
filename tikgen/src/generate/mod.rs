//! Script generators, one module per topology area. All pure functions from
//! state fragments to [`ros_script_core::RouterConfig`] values.

pub mod lan;
pub mod routing;
pub mod trunk;
pub mod vpn;
pub mod wan;
