#[cfg(test)]
mod test {
    use push_contact_reconciler::error::ErrorKind;
    use push_contact_reconciler::messaging_error_code::MessagingErrorCode;
    use push_contact_reconciler::push_contact_api_token_getter::{PushContactApiTokenGetter, StaticPushContactApiTokenGetter};
    use push_contact_reconciler::settings::ReconcilerSettings;
    use serial_test::serial;
    use std::collections::HashSet;
    use std::env;

    fn clear_env() {
        env::remove_var("PUSH_CONTACT_API_URL");
        env::remove_var("PUSH_CONTACT_API_TOKEN");
        env::remove_var("FATAL_MESSAGING_ERROR_CODES");
        env::remove_var("HTTP_TIMEOUT_IN_MILLIS");
    }

    #[test]
    #[serial]
    fn should_load_settings_from_env() {
        clear_env();
        env::set_var("PUSH_CONTACT_API_URL", "https://push-contacts.local");
        env::set_var("FATAL_MESSAGING_ERROR_CODES", "UNREGISTERED, invalid_token ,");
        env::set_var("HTTP_TIMEOUT_IN_MILLIS", "1500");

        let settings = ReconcilerSettings::from_env().unwrap();

        assert_eq!("https://push-contacts.local", settings.push_contact_api_url);
        assert_eq!(Some(1500), settings.http_timeout_in_millis);
        assert_eq!(
            HashSet::from([MessagingErrorCode::Unregistered, MessagingErrorCode::Other("INVALID_TOKEN".to_string())]),
            settings.fatal_messaging_error_codes
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn should_use_default_fatal_codes() {
        clear_env();
        env::set_var("PUSH_CONTACT_API_URL", "https://push-contacts.local");

        let settings = ReconcilerSettings::from_env().unwrap();

        assert!(settings.is_fatal(&MessagingErrorCode::Unregistered));
        assert!(settings.is_fatal(&MessagingErrorCode::InvalidArgument));
        assert!(!settings.is_fatal(&MessagingErrorCode::Internal));
        assert_eq!(Some(3000), settings.http_timeout_in_millis);

        clear_env();
    }

    #[test]
    #[serial]
    fn should_fail_when_fatal_codes_are_blank() {
        for blank in ["", " , ,"] {
            clear_env();
            env::set_var("PUSH_CONTACT_API_URL", "https://push-contacts.local");
            env::set_var("FATAL_MESSAGING_ERROR_CODES", blank);

            let error = ReconcilerSettings::from_env().unwrap_err();

            assert_eq!(ErrorKind::Configuration, error.kind);
        }

        clear_env();
    }

    #[test]
    #[serial]
    fn should_fail_without_push_contact_api_url() {
        clear_env();

        let error = ReconcilerSettings::from_env().unwrap_err();

        assert_eq!(ErrorKind::Configuration, error.kind);
    }

    #[test]
    #[serial]
    fn should_fail_with_invalid_timeout() {
        clear_env();
        env::set_var("PUSH_CONTACT_API_URL", "https://push-contacts.local");
        env::set_var("HTTP_TIMEOUT_IN_MILLIS", "soon");

        let error = ReconcilerSettings::from_env().unwrap_err();

        assert_eq!(ErrorKind::Configuration, error.kind);

        clear_env();
    }

    #[tokio::test]
    #[serial]
    async fn should_load_token_from_env() {
        clear_env();
        env::set_var("PUSH_CONTACT_API_TOKEN", "secret");

        let token_getter = StaticPushContactApiTokenGetter::from_env().unwrap();

        assert_eq!("secret", token_getter.get_token().await.unwrap());

        clear_env();
    }

    #[tokio::test]
    async fn should_fail_with_blank_token() {
        let token_getter = StaticPushContactApiTokenGetter::new("  ");

        let error = token_getter.get_token().await.unwrap_err();

        assert_eq!(ErrorKind::CredentialFailure, error.kind);
    }
}
