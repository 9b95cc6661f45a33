#[derive(serde::Serialize, serde::Deserialize, Debug, Default, PartialEq, Eq, Clone)]
pub struct Response<T> {
    pub code: u32,
    pub message: String,
    pub result: Option<T>,
}

impl<T> Response<T> {
    pub fn ok(result: T) -> Self {
        Self { code: 200, message: String::new(), result: Some(result) }
    }

    pub fn is_ok(&self) -> bool {
        self.code == 200
    }
}

impl<T> From<Result<T, crate::ServiceError>> for Response<T>
where
    T: serde::Serialize + Sized,
{
    fn from(res: Result<T, crate::ServiceError>) -> Self {
        match res {
            Ok(ok) => Response::ok(ok),
            Err(err) => {
                tracing::error!("[response] {err}");
                let (code, message) = err.into();
                Response { code, message, result: None }
            }
        }
    }
}

impl From<crate::ServiceError> for (u32, String) {
    fn from(err: crate::ServiceError) -> Self {
        // 网络的错误类型单独提出来
        if err.is_network_error() {
            return (502, err.to_string());
        }

        match err {
            // 给前端展示的错误
            crate::ServiceError::Business(msg) => (msg.get_status_code(), msg.to_string()),
            crate::ServiceError::Parameter(_) => (422, err.to_string()),
            // 不给前端展示的错误
            crate::ServiceError::System(_) => (500, err.to_string()),
            crate::ServiceError::Utils(_) => (520, err.to_string()),
            crate::ServiceError::TransportBackend(_) => (530, err.to_string()),
            crate::ServiceError::Transport(_) => (531, err.to_string()),
        }
    }
}
