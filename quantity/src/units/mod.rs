/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Dimension markers and their catalogued scales.
//!
//! Every constant is derived from the standard scale of its dimension,
//! so each one can be checked against its defining conversion factor.

pub mod chemistry;
pub mod density;
pub mod geometry;
pub mod heat;
pub mod mechanics;
pub mod radiation;

pub use chemistry::*;
pub use density::*;
pub use geometry::*;
pub use heat::*;
pub use mechanics::*;
pub use radiation::*;
