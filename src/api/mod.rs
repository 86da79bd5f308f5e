//! Remote Store Bindings
//!
//! Frontend bindings to the `/todos` HTTP resource.

mod error;
mod todo;

pub use error::{ApiError, ApiResult};
pub use todo::HttpRemoteStore;
