//! Message types exchanged with the host and scripting surface.
//!
//! Overview
//! - [`camera`] – camera commands a scripting layer writes into the queue

pub mod camera;
