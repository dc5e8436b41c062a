//! Sources that fill a [`Registry`](crate::Registry).

pub mod dir;

pub use dir::DirProvider;
