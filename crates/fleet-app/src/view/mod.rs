//! View layer: pure functions from store slices to displayable text

pub mod html;
pub mod text;
