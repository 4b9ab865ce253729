use contracts::system::auth::ErrorBody;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Backend answered with a non-2xx status
    #[error("server responded with HTTP {status}")]
    Server {
        status: u16,
        message: Option<String>,
    },
    /// Aborted by our own request timer
    #[error("request timed out")]
    Timeout,
    /// Fetch failed before any response (backend unreachable, CORS, offline)
    #[error("network error: {0}")]
    Network(String),
    /// Owning page was unmounted
    #[error("request cancelled")]
    Cancelled,
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("{0}")]
    Other(String),
}

impl ApiError {
    /// Build from a non-2xx response; the body's `message`/`error` field wins
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message);
        ApiError::Server { status, message }
    }

    /// Classify a failed fetch by the JS error name.
    ///
    /// `timed_out` / `cancelled` come from the request scope and take
    /// precedence, because an aborted fetch always rejects with `AbortError`.
    pub fn classify_transport(name: &str, message: &str, timed_out: bool, cancelled: bool) -> Self {
        if timed_out {
            ApiError::Timeout
        } else if cancelled || name == "AbortError" {
            ApiError::Cancelled
        } else if name == "TypeError" || name == "NetworkError" {
            ApiError::Network(message.to_string())
        } else {
            ApiError::Other(format!("{}: {}", name, message))
        }
    }

    pub fn from_gloo(err: gloo_net::Error, timed_out: bool, cancelled: bool) -> Self {
        #[allow(unreachable_patterns)]
        match err {
            gloo_net::Error::JsError(js) => {
                Self::classify_transport(&js.name, &js.message, timed_out, cancelled)
            }
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            gloo_net::Error::GlooError(msg) => {
                Self::classify_transport("GlooError", &msg, timed_out, cancelled)
            }
            other => Self::classify_transport("Error", &other.to_string(), timed_out, cancelled),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message for alerts and inline error boxes
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { status, message } => message
                .clone()
                .unwrap_or_else(|| status_message(*status)),
            ApiError::Timeout => "Kết nối quá thời gian, vui lòng thử lại.".to_string(),
            ApiError::Network(_) => {
                "Không thể kết nối đến máy chủ. Vui lòng kiểm tra kết nối mạng.".to_string()
            }
            ApiError::Cancelled => "Yêu cầu đã bị hủy.".to_string(),
            ApiError::Decode(_) => "Dữ liệu máy chủ trả về không hợp lệ.".to_string(),
            ApiError::Other(_) => "Đã xảy ra lỗi, vui lòng thử lại.".to_string(),
        }
    }

    /// Message for the login form: rejected credentials, timeout, unreachable backend
    pub fn login_message(&self) -> String {
        match self {
            ApiError::Server {
                status: 400 | 401 | 403,
                message,
            } => message
                .clone()
                .unwrap_or_else(|| "Tên đăng nhập hoặc mật khẩu không đúng.".to_string()),
            ApiError::Timeout => {
                "Kết nối đến máy chủ quá thời gian. Vui lòng thử lại sau.".to_string()
            }
            ApiError::Network(_) => {
                "Không thể kết nối đến máy chủ. Vui lòng kiểm tra máy chủ đã được khởi động."
                    .to_string()
            }
            other => other.user_message(),
        }
    }
}

fn status_message(status: u16) -> String {
    match status {
        401 => "Phiên đăng nhập không hợp lệ hoặc đã hết hạn.".to_string(),
        403 => "Bạn không có quyền thực hiện thao tác này.".to_string(),
        404 => "Không tìm thấy dữ liệu.".to_string(),
        500..=599 => "Máy chủ gặp sự cố, vui lòng thử lại sau.".to_string(),
        _ => format!("Yêu cầu không hợp lệ (HTTP {}).", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_from_body() {
        let err = ApiError::from_response(409, r#"{"message":"Mã SKU đã tồn tại"}"#);
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.user_message(), "Mã SKU đã tồn tại");
    }

    #[test]
    fn test_server_message_fallback_for_html_body() {
        let err = ApiError::from_response(502, "<html>Bad gateway</html>");
        assert_eq!(err.user_message(), "Máy chủ gặp sự cố, vui lòng thử lại sau.");
    }

    #[test]
    fn test_transport_classification() {
        assert_eq!(
            ApiError::classify_transport("AbortError", "aborted", true, false),
            ApiError::Timeout
        );
        assert_eq!(
            ApiError::classify_transport("AbortError", "aborted", false, true),
            ApiError::Cancelled
        );
        assert_eq!(
            ApiError::classify_transport("TypeError", "Failed to fetch", false, false),
            ApiError::Network("Failed to fetch".into())
        );
        assert!(matches!(
            ApiError::classify_transport("SyntaxError", "x", false, false),
            ApiError::Other(_)
        ));
    }

    #[test]
    fn test_login_messages_are_distinct() {
        let rejected = ApiError::from_response(401, "");
        let timeout = ApiError::Timeout;
        let unreachable = ApiError::Network("Failed to fetch".into());

        let messages = [
            rejected.login_message(),
            timeout.login_message(),
            unreachable.login_message(),
        ];
        assert_eq!(messages[0], "Tên đăng nhập hoặc mật khẩu không đúng.");
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }

    #[test]
    fn test_login_prefers_server_text() {
        let err = ApiError::from_response(401, r#"{"message":"Tài khoản đã bị khóa"}"#);
        assert_eq!(err.login_message(), "Tài khoản đã bị khóa");
    }
}
