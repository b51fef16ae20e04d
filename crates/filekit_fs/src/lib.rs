//! # FileKitFS
//!
//! Blocking filesystem primitives used by file handles.
//!
//! Each method wraps one `std::fs` call and classifies its failure into
//! [`filekit_domain::Error`], keeping the path and the original
//! `io::Error`. Nothing is retried and no descriptor outlives the call that
//! opened it.

mod meta;
mod read;
mod transfer;
mod write;

pub struct FileKitFS;
