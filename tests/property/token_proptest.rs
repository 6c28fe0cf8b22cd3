//! Property-based tests for token issuance and validation

use bookshelf::backend::auth::sessions::{TokenError, TokenService};
use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

fn service() -> TokenService {
    TokenService::new(b"property-test-secret", "bookshelf-api")
}

proptest! {
    #[test]
    fn test_any_subject_round_trips(subject in ".*") {
        let tokens = service();
        let token = tokens.generate_token(&subject).unwrap();

        let first = tokens.validate_token(&token).unwrap();
        prop_assert_eq!(&first.user_id, &subject);
        prop_assert_eq!(&first.iss, "bookshelf-api");

        let second = tokens.validate_token(&token).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_any_subject_expires_after_a_year(subject in "\\PC{0,32}", days in 0i64..5000) {
        let issued = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap() + Duration::days(days);
        let tokens = service();
        let token = tokens.generate_token_at(&subject, issued).unwrap();

        prop_assert!(tokens.validate_token_at(&token, issued + Duration::days(364)).is_ok());
        prop_assert_eq!(
            tokens.validate_token_at(&token, issued + Duration::days(367)),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_foreign_secret_never_validates(subject in ".*") {
        let token = TokenService::new(b"another-secret", "bookshelf-api")
            .generate_token(&subject)
            .unwrap();

        prop_assert_eq!(service().validate_token(&token), Err(TokenError::BadSignature));
    }
}
