//! Layout engines for swarm charts.
//!
//! [`dodge`](crate::layout::dodge) is the core packing algorithm; [`swarm`]
//! wraps it with value filtering, domain projection, and chart sizing to
//! produce positioned circles a rendering surface can consume.

pub mod dodge;
pub mod swarm;
