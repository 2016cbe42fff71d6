use http::StatusCode;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// High-level classification of a failure
///
/// Identifiers are stable strings so they can be logged and sent over the
/// wire. `ServerError` keeps the `Unknown/Unexpected` identifier used by
/// existing remote services and also accepts `ServerError` on input.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum Category {
    /// No classification could be determined
    #[default]
    Unknown,
    /// Persistence layer failure
    Database,
    /// Failure talking to another service
    Communication,
    /// Requested entity does not exist
    NotFound,
    /// Entity is in a state that forbids the operation
    InvalidState,
    /// Unexpected internal fault
    #[serde(rename = "Unknown/Unexpected", alias = "ServerError")]
    #[strum(to_string = "Unknown/Unexpected", serialize = "ServerError")]
    ServerError,
    /// A size or quota limit was exceeded
    LimitExceeded,
}

impl Category {
    /// Stable wire identifier
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// HTTP status used when an error of this category reaches a response boundary
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::Unknown | Self::Database | Self::ServerError | Self::Communication => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidState => StatusCode::CONFLICT,
            Self::LimitExceeded => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_category_has_a_status() {
        let table: Vec<_> = Category::iter().map(|kind| (kind, kind.status_code())).collect();

        assert_eq!(
            table,
            vec![
                (Category::Unknown, StatusCode::INTERNAL_SERVER_ERROR),
                (Category::Database, StatusCode::INTERNAL_SERVER_ERROR),
                (Category::Communication, StatusCode::INTERNAL_SERVER_ERROR),
                (Category::NotFound, StatusCode::NOT_FOUND),
                (Category::InvalidState, StatusCode::CONFLICT),
                (Category::ServerError, StatusCode::INTERNAL_SERVER_ERROR),
                (Category::LimitExceeded, StatusCode::PAYLOAD_TOO_LARGE),
            ]
        );
    }

    #[test]
    fn identifiers_round_trip_through_from_str() {
        for kind in Category::iter() {
            assert_eq!(Category::from_str(kind.as_str()).unwrap(), kind);
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn server_error_uses_legacy_identifier() {
        assert_eq!(Category::ServerError.as_str(), "Unknown/Unexpected");
        assert_eq!(
            serde_json::to_string(&Category::ServerError).unwrap(),
            "\"Unknown/Unexpected\""
        );
        assert_eq!(Category::from_str("ServerError").unwrap(), Category::ServerError);
        assert_eq!(
            serde_json::from_str::<Category>("\"ServerError\"").unwrap(),
            Category::ServerError
        );
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(Category::default(), Category::Unknown);
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        assert!(Category::from_str("Teapot").is_err());
        assert!(serde_json::from_str::<Category>("\"Teapot\"").is_err());
    }
}
