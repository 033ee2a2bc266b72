//! The whole-tree passes run by the pipeline, in their fixed order.

pub mod block;
pub mod cleanup;
pub mod hydrate;
pub mod inline;
pub mod split;
pub mod tooltip;
