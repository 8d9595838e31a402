use crate::api::error::RequestError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_request_error(&self, error: &RequestError) -> LogLevel {
        match error.status() {
            // Rejected input or stale ids: the user can fix these
            Some(400..=499) => LogLevel::Warn,
            // Backend broken or unreachable
            _ => LogLevel::Error,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_warnings() {
        let classifier = ErrorClassifier::new();
        for status in [400, 404, 422] {
            let err = RequestError::from_status_and_body(status, "");
            assert_eq!(classifier.classify_request_error(&err), LogLevel::Warn);
        }
    }

    #[test]
    fn server_and_decode_errors_are_errors() {
        let classifier = ErrorClassifier::new();
        let err = RequestError::from_status_and_body(503, "");
        assert_eq!(classifier.classify_request_error(&err), LogLevel::Error);

        let err: RequestError = serde_json::from_str::<u8>("x").unwrap_err().into();
        assert_eq!(classifier.classify_request_error(&err), LogLevel::Error);
    }
}
