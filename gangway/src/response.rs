use std::any::Any;

use bytes::Bytes;

/// The router's native HTTP response type.
pub type Response<T = Bytes> = http::Response<T>;

/// Returns whether `value` is a native [`Response`].
///
/// Answers false for any other value, there is no error case.
pub fn is_framework_response(value: &dyn Any) -> bool {
    value.is::<Response>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_response_detected() {
        let response = Response::new(Bytes::from_static(b"ok"));
        assert!(is_framework_response(&response));

        let empty = Response::new(Bytes::new());
        assert!(is_framework_response(&empty));
    }

    #[test]
    fn test_plain_values_rejected() {
        assert!(!is_framework_response(&42_i32));
        assert!(!is_framework_response(&"not a response"));
        assert!(!is_framework_response(&vec![1_u8, 2, 3]));
        assert!(!is_framework_response(&()));
    }

    #[test]
    fn test_absent_value_rejected() {
        assert!(!is_framework_response(&None::<Response>));
    }

    #[test]
    fn test_foreign_body_type_rejected() {
        let response = http::Response::new("ok".to_string());
        assert!(!is_framework_response(&response));
    }
}
