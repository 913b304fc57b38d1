use super::args::*;

pub mod champions;
pub mod dispatch;
pub(crate) mod render;
pub mod roll;
pub mod seed;
pub(crate) mod source;

pub use dispatch::dispatch;
