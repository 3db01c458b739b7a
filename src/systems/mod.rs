//! Per-tick drivers.
//!
//! - [`time`] – advances [`WorldTime`](crate::resources::worldtime::WorldTime)
//! - [`sprites`] – runs the manager's update pass
//! - [`render`] – draw calls, batching and the raylib backend
pub mod render;
pub mod sprites;
pub mod time;
