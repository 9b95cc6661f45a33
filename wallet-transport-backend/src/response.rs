use std::fmt::Debug;

/// Envelope every backend endpoint answers with.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct BackendResponse {
    pub code: Option<String>,
    pub data: Option<serde_json::Value>,
    pub success: bool,
    pub msg: Option<String>,
}

impl BackendResponse {
    pub fn process<T: serde::de::DeserializeOwned + Debug>(self) -> Result<T, crate::Error> {
        if !self.success {
            tracing::error!("backend response: code = {:?}, msg = {:?}", self.code, self.msg);
            return Err(match self.code {
                Some(code) => Self::match_error_code(&code, self.msg),
                None => crate::Error::Backend(self.msg),
            });
        }

        let data = self.data.unwrap_or(serde_json::Value::Null);
        let res = wallet_utils::serde_func::serde_from_value::<T>(data);
        if let Err(e) = &res {
            tracing::error!("utils serde_from_value: {e}");
        }
        let res = res?;
        tracing::debug!("backend response: {:?}", res);
        Ok(res)
    }

    /// match backend error code.
    fn match_error_code(code: &str, msg: Option<String>) -> crate::Error {
        match code {
            crate::consts::code::ACCOUNT_NOT_FOUND => crate::Error::BackendServiceError(
                crate::error::BackendServiceError::AccountNotFound,
            ),
            _ => crate::Error::Backend(msg),
        }
    }
}
