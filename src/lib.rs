pub mod bitmap;
pub mod codec;
pub mod column;
pub mod convert;
pub mod error;
pub mod ffi;
pub mod host;
pub mod logging;
pub mod schema;
pub mod validate;

pub use bitmap::{Mask, MaskBatch};
pub use convert::{convert, ConvertConfig, Converter, Parallelism};
pub use error::{ErrorKind, MaskError, Result};
