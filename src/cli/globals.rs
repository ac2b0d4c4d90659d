use secrecy::SecretString;

/// Runtime configuration shared with every request handler.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub jwt_secret: SecretString,
    pub token_ttl_minutes: i64,
    pub cors_origin: Option<String>,
    pub dev: bool,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(jwt_secret: SecretString, token_ttl_minutes: i64) -> Self {
        Self {
            jwt_secret,
            token_ttl_minutes,
            cors_origin: None,
            dev: false,
        }
    }

    #[must_use]
    pub fn with_cors_origin(mut self, origin: Option<String>) -> Self {
        self.cors_origin = origin;
        self
    }

    #[must_use]
    pub fn with_dev(mut self, dev: bool) -> Self {
        self.dev = dev;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new(SecretString::from("hush".to_string()), 60);
        assert_eq!(args.jwt_secret.expose_secret(), "hush");
        assert_eq!(args.token_ttl_minutes, 60);
        assert_eq!(args.cors_origin, None);
        assert!(!args.dev);
    }

    #[test]
    fn test_global_args_builders() {
        let args = GlobalArgs::new(SecretString::from("hush".to_string()), 15)
            .with_cors_origin(Some("https://labs.example.edu".to_string()))
            .with_dev(true);
        assert_eq!(
            args.cors_origin.as_deref(),
            Some("https://labs.example.edu")
        );
        assert!(args.dev);
    }

    #[test]
    fn test_global_args_debug_redacts_secret() {
        let args = GlobalArgs::new(SecretString::from("hush".to_string()), 60);
        let debug = format!("{args:?}");
        assert!(!debug.contains("hush"));
    }
}
