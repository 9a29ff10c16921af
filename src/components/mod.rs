//! ECS components for scene objects.
//!
//! Submodules overview:
//! - [`transform2d`] – the pure 2D affine transform value type and its math
//! - [`stagetransform`] – an object's stage-frame transform plus sync flag
//! - [`renderpose`] – an object's screen-frame pose plus sync flag
//! - [`anchoroffset`] – rotation/registration point offset in pixels

pub mod anchoroffset;
pub mod renderpose;
pub mod stagetransform;
pub mod transform2d;
