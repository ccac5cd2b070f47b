
// Environment resolution for AuthConfig. Serial: these tests mutate process
// env vars.

#[cfg(test)]
mod test {

    use std::env;

    use serial_test::serial;

    use crate::config::settings::AuthConfig;
    use crate::error::Error;
    use crate::utils::constants::*;

    fn clear_env() {
        for var in [
            ENV_TOKEN_URL,
            ENV_CLIENT_ID,
            ENV_CLIENT_SECRET,
            ENV_USER_LOGIN_ID,
            ENV_HTTP_TIMEOUT_MS,
        ] {
            env::remove_var(var);
        }
    }

    fn set_required_env() {
        env::set_var(ENV_CLIENT_ID, "client-id");
        env::set_var(ENV_CLIENT_SECRET, "client-secret");
        env::set_var(ENV_USER_LOGIN_ID, "42");
    }

    #[test]
    #[serial]
    fn reads_full_configuration() {
        clear_env();
        set_required_env();
        env::set_var(ENV_TOKEN_URL, "https://auth.example.com/token");
        env::set_var(ENV_HTTP_TIMEOUT_MS, "2500");

        let cfg = AuthConfig::from_env().unwrap();
        assert_eq!(cfg.token_url, "https://auth.example.com/token");
        assert_eq!(cfg.client_id, "client-id");
        assert_eq!(cfg.client_secret, "client-secret");
        assert_eq!(cfg.user_login_id, "42");
        assert_eq!(cfg.timeout_ms, 2500);

        clear_env();
    }

    #[test]
    #[serial]
    fn endpoint_and_timeout_have_defaults() {
        clear_env();
        set_required_env();

        let cfg = AuthConfig::from_env().unwrap();
        assert_eq!(cfg.token_url, DEFAULT_TOKEN_URL);
        assert_eq!(cfg.timeout_ms, DEFAULT_HTTP_TIMEOUT_MS);

        clear_env();
    }

    #[test]
    #[serial]
    fn missing_credential_is_a_config_error() {
        clear_env();
        set_required_env();
        env::remove_var(ENV_CLIENT_SECRET);

        let err = AuthConfig::from_env().unwrap_err();
        match err {
            Error::Config(message) => assert!(message.contains(ENV_CLIENT_SECRET)),
            other => panic!("expected config error, got {:?}", other),
        }

        clear_env();
    }

    #[test]
    #[serial]
    fn missing_user_login_id_is_a_config_error() {
        clear_env();
        set_required_env();
        env::remove_var(ENV_USER_LOGIN_ID);

        let err = AuthConfig::from_env().unwrap_err();
        match err {
            Error::Config(message) => assert!(message.contains(ENV_USER_LOGIN_ID)),
            other => panic!("expected config error, got {:?}", other),
        }

        clear_env();
    }

    #[test]
    #[serial]
    fn non_numeric_timeout_is_a_config_error() {
        clear_env();
        set_required_env();
        env::set_var(ENV_HTTP_TIMEOUT_MS, "soon");

        let err = AuthConfig::from_env().unwrap_err();
        assert!(matches!(err, Error::Config(_)), "got {:?}", err);

        clear_env();
    }
}
