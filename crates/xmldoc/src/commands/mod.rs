//! CLI command implementations.

pub(crate) mod members;
pub(crate) mod render;

pub(crate) use members::MembersArgs;
pub(crate) use render::RenderArgs;
