pub mod env;
mod txt_file;

pub use txt_file::*;
