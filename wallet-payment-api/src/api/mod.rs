pub mod payment_account;

#[cfg(not(feature = "result"))]
pub type ReturnType<T> = crate::response::Response<T>;
#[cfg(feature = "result")]
pub type ReturnType<T> = Result<T, crate::ServiceError>;
