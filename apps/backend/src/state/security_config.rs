use jsonwebtoken::Algorithm;

/// Configuration for token signing and verification.
///
/// Constructed once at process start from `JWT_SECRET`; read-only afterwards
/// and shared across workers. Nothing mutates the secret at runtime.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Symmetric secret used for both signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// Signing algorithm (HS256)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
