mod arena;
mod handle;
mod node;
mod raw_bstree;

pub(crate) use raw_bstree::{InOrder, RawBSTree};
