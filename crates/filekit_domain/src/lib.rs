mod error;
mod extension;
mod handle;
mod identity;
mod options;

pub use error::*;
pub use extension::*;
pub use handle::*;
pub use identity::*;
pub use options::*;
