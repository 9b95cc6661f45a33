pub mod error;
pub mod log;
pub mod serde_func;

pub use error::{http::HttpError, serde::SerdeError, Error};
pub use log::init_test_log;
