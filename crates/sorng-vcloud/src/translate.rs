//! Non-success HTTP responses → [`VcdError`].

use crate::codec;
use crate::error::VcdError;
use crate::media;
use crate::types::ErrorDetail;

/// Longest body excerpt kept in a generic error message.
const BODY_EXCERPT: usize = 256;

/// Classify a non-2xx response. Total: never fails, and a body that cannot
/// be decoded only downgrades the detail to a generic message.
pub fn translate(status: u16, body: &[u8]) -> VcdError {
    match status {
        400..=499 => VcdError::ClientRequest {
            status,
            detail: error_detail(status, body),
        },
        500..=599 => VcdError::Server {
            status,
            detail: error_detail(status, body),
        },
        _ => VcdError::UnexpectedStatus {
            status,
            body: excerpt(body),
        },
    }
}

/// Decode the vCloud `<Error>` element, falling back to `HTTP {status}: …`.
fn error_detail(status: u16, body: &[u8]) -> ErrorDetail {
    match codec::decode::<ErrorDetail>(body, media::ERROR) {
        Ok(detail) => detail,
        Err(e) => {
            log::trace!("error body for HTTP {status} not decodable: {e}");
            let text = excerpt(body);
            if text.is_empty() {
                ErrorDetail::new(format!("HTTP {status}"))
            } else {
                ErrorDetail::new(format!("HTTP {status}: {text}"))
            }
        }
    }
}

fn excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    match text.char_indices().nth(BODY_EXCERPT) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}
