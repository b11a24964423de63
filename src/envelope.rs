use serde::Serialize;

/// Uniform wrapper returned by every data-client operation. The client never
/// lets a network error escape as an error value; a dead backend shows up as
/// `is_fallback = true` with fixture data instead.
///
/// The dashboard still reads this flag under its historical wire name
/// `fromCache`, even though nothing is ever actually cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    #[serde(rename = "fromCache")]
    pub is_fallback: bool,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            is_fallback: false,
        }
    }

    pub fn fallback(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            is_fallback: true,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            is_fallback: false,
        }
    }
}
