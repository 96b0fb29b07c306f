use axum::http::HeaderMap;
use sha2::{Digest, Sha256};

use crate::config::AdminConfig;
use crate::error::ApiError;

/// Proof that a request passed the admin gate, stored in request extensions
#[derive(Clone, Debug)]
pub struct AdminGrant {
    pub policy: &'static str,
}

/// Capability that decides whether a request may use admin routes.
/// Handlers never see the policy, only the resulting grant.
pub trait AdminAuthority: Send + Sync {
    fn authorize(&self, headers: &HeaderMap) -> Result<AdminGrant, ApiError>;
}

/// Grants access when one header carries an exact marker value
#[derive(Debug, Clone)]
pub struct HeaderMarkerAuthority {
    header: String,
    marker: String,
}

impl HeaderMarkerAuthority {
    pub fn new(header: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            header: header.into().to_ascii_lowercase(),
            marker: marker.into(),
        }
    }

    pub fn from_config(config: &AdminConfig) -> Self {
        Self::new(&config.header, &config.marker)
    }
}

impl AdminAuthority for HeaderMarkerAuthority {
    fn authorize(&self, headers: &HeaderMap) -> Result<AdminGrant, ApiError> {
        let value = headers
            .get(self.header.as_str())
            .ok_or_else(|| ApiError::unauthorized("Unauthorized"))?;

        match value.to_str() {
            Ok(v) if v == self.marker => Ok(AdminGrant { policy: "header-marker" }),
            _ => Err(ApiError::unauthorized("Unauthorized")),
        }
    }
}

/// Hex SHA-256 of the submitted password
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(v) = value {
            headers.insert("x-admin-auth", HeaderValue::from_str(v).unwrap());
        }
        headers
    }

    #[test]
    fn exact_marker_is_granted() {
        let gate = HeaderMarkerAuthority::new("X-Admin-Auth", "true");
        assert!(gate.authorize(&headers(Some("true"))).is_ok());
    }

    #[test]
    fn anything_else_is_refused() {
        let gate = HeaderMarkerAuthority::new("x-admin-auth", "true");
        for value in [None, Some("TRUE"), Some("1"), Some("true "), Some(""), Some("false")] {
            let err = gate.authorize(&headers(value)).unwrap_err();
            assert!(matches!(err, ApiError::Unauthorized(_)), "value {:?} was granted", value);
        }
    }

    #[test]
    fn password_hash_is_stable_hex() {
        let h = hash_password("abcdef");
        assert_eq!(h.len(), 64);
        assert_eq!(h, hash_password("abcdef"));
        assert_ne!(h, "abcdef");
    }
}
