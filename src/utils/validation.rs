use uuid::Uuid;
use validator::Validate;

use crate::error::{Error, Result};

pub fn validate<T: Validate>(val: &T) -> Result<()> {
    val.validate().map_err(Error::from)
}

/// Structural UUID check used before any lookup touches storage.
pub fn is_valid_identifier(raw: &str) -> bool {
    Uuid::parse_str(raw.trim()).is_ok()
}

pub fn parse_identifier(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| Error::InvalidIdentifier(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_uuid_shapes() {
        let id = Uuid::new_v4();
        assert!(is_valid_identifier(&id.to_string()));
        assert!(is_valid_identifier(&id.simple().to_string()));
        assert!(!is_valid_identifier("not-a-uuid"));
        assert!(!is_valid_identifier("123"));
        assert!(!is_valid_identifier(""));
    }

    #[test]
    fn parse_reports_the_raw_value() {
        let err = parse_identifier("abc").unwrap_err();
        assert_eq!(err.to_string(), "Invalid UUID structure for id: abc.");
    }
}
