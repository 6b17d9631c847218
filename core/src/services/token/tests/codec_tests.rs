//! Unit tests for the token codec

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{Duration, Utc};
use courier_shared::config::SecretString;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use uuid::Uuid;

use crate::domain::entities::RefreshClaims;
use crate::errors::TokenError;
use crate::services::token::{TokenCodec, TokenCodecConfig};

fn codec() -> TokenCodec {
    TokenCodec::new(TokenCodecConfig::default()).unwrap()
}

fn access_secret() -> SecretString {
    SecretString::new("access-secret-for-tests")
}

fn refresh_secret() -> SecretString {
    SecretString::new("refresh-secret-for-tests")
}

fn issue(codec: &TokenCodec) -> (Uuid, String) {
    let id = Uuid::new_v4();
    let token = codec
        .issue_access(id, "alice", "alice@example.com", &access_secret(), Duration::hours(1))
        .unwrap();
    (id, token)
}

#[test]
fn test_access_token_round_trip() {
    let codec = codec();
    let (id, token) = issue(&codec);

    let claims = codec.verify_access(&token, &access_secret()).unwrap();

    assert_eq!(claims.user_id, id);
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.email, "alice@example.com");
    assert_eq!(claims.exp - claims.iat, 3600);
    assert_eq!(claims.nbf, claims.iat);
    assert!(Uuid::parse_str(&claims.jti).is_ok());
}

#[test]
fn test_refresh_subject_round_trip() {
    let codec = codec();
    let id = Uuid::new_v4();
    let token = codec.issue_refresh(id, &refresh_secret(), Duration::days(7)).unwrap();

    assert_eq!(codec.verify_subject(&token, &refresh_secret()).unwrap(), id);
}

#[test]
fn test_refresh_tokens_for_same_account_differ() {
    let codec = codec();
    let id = Uuid::new_v4();
    let now = Utc::now();

    let a = codec.issue_refresh_at(id, &refresh_secret(), Duration::days(7), now).unwrap();
    let b = codec.issue_refresh_at(id, &refresh_secret(), Duration::days(7), now).unwrap();

    assert_ne!(a, b);
}

#[test]
fn test_flipped_signature_character_rejected() {
    let codec = codec();
    let (_, token) = issue(&codec);

    let sig_start = token.rfind('.').unwrap() + 1;
    let flip_at = sig_start + (token.len() - sig_start) / 2;
    let original = token.as_bytes()[flip_at];
    let replacement = if original == b'A' { 'B' } else { 'A' };

    let mut tampered = token.clone();
    tampered.replace_range(flip_at..flip_at + 1, &replacement.to_string());

    assert_eq!(
        codec.verify_access(&tampered, &access_secret()),
        Err(TokenError::SignatureMismatch)
    );
}

#[test]
fn test_wrong_secret_rejected() {
    let codec = codec();
    let (_, token) = issue(&codec);

    assert_eq!(
        codec.verify_access(&token, &refresh_secret()),
        Err(TokenError::SignatureMismatch)
    );
}

#[test]
fn test_refresh_token_not_accepted_as_access_token() {
    let codec = codec();
    let refresh = codec
        .issue_refresh(Uuid::new_v4(), &refresh_secret(), Duration::days(7))
        .unwrap();

    assert!(codec.verify_access(&refresh, &access_secret()).is_err());
}

#[test]
fn test_expired_token_rejected() {
    let codec = codec();
    let token = codec
        .issue_access_at(
            Uuid::new_v4(),
            "alice",
            "alice@example.com",
            &access_secret(),
            Duration::hours(1),
            Utc::now() - Duration::hours(2),
        )
        .unwrap();

    assert_eq!(
        codec.verify_access(&token, &access_secret()),
        Err(TokenError::Expired)
    );
}

#[test]
fn test_not_yet_valid_token_rejected() {
    let codec = codec();
    let token = codec
        .issue_refresh_at(
            Uuid::new_v4(),
            &refresh_secret(),
            Duration::days(7),
            Utc::now() + Duration::hours(1),
        )
        .unwrap();

    assert_eq!(
        codec.verify_subject(&token, &refresh_secret()),
        Err(TokenError::NotYetValid)
    );
}

#[test]
fn test_leeway_tolerates_small_skew() {
    let codec = TokenCodec::new(TokenCodecConfig {
        algorithm: Algorithm::HS256,
        leeway_secs: 300,
    })
    .unwrap();

    let token = codec
        .issue_access_at(
            Uuid::new_v4(),
            "alice",
            "alice@example.com",
            &access_secret(),
            Duration::minutes(10),
            Utc::now() - Duration::minutes(12),
        )
        .unwrap();

    assert!(codec.verify_access(&token, &access_secret()).is_ok());
}

#[test]
fn test_asymmetric_algorithm_header_rejected() {
    let codec = codec();
    let (_, token) = issue(&codec);
    let mut parts = token.split('.');
    let _header = parts.next().unwrap();
    let payload = parts.next().unwrap();
    let signature = parts.next().unwrap();

    let forged_header = URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256","typ":"JWT"}"#);
    let forged = format!("{}.{}.{}", forged_header, payload, signature);

    assert_eq!(
        codec.verify_access(&forged, &access_secret()),
        Err(TokenError::UnexpectedAlgorithm)
    );
}

#[test]
fn test_none_algorithm_rejected() {
    let codec = codec();
    let (_, token) = issue(&codec);
    let payload = token.split('.').nth(1).unwrap();

    let forged_header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none","typ":"JWT"}"#);
    let forged = format!("{}.{}.", forged_header, payload);

    let result = codec.verify_access(&forged, &access_secret());
    assert!(matches!(
        result,
        Err(TokenError::Malformed) | Err(TokenError::UnexpectedAlgorithm)
    ));
}

#[test]
fn test_other_hmac_variant_rejected() {
    let pinned = codec();
    let hs384 = TokenCodec::new(TokenCodecConfig {
        algorithm: Algorithm::HS384,
        leeway_secs: 0,
    })
    .unwrap();
    let (_, token) = issue(&hs384);

    assert_eq!(
        pinned.verify_access(&token, &access_secret()),
        Err(TokenError::UnexpectedAlgorithm)
    );
}

#[test]
fn test_non_hmac_codec_rejected() {
    let result = TokenCodec::new(TokenCodecConfig {
        algorithm: Algorithm::RS256,
        leeway_secs: 0,
    });

    assert!(matches!(result, Err(TokenError::UnsupportedAlgorithm(_))));
}

#[test]
fn test_garbage_is_malformed() {
    let codec = codec();

    assert_eq!(codec.verify_access("", &access_secret()), Err(TokenError::Malformed));
    assert_eq!(
        codec.verify_access("not.a.jwt", &access_secret()),
        Err(TokenError::Malformed)
    );
}

#[test]
fn test_non_uuid_subject_rejected() {
    let now = Utc::now().timestamp();
    let claims = RefreshClaims {
        sub: "not-an-account-id".to_string(),
        exp: now + 3600,
        iat: now,
        nbf: now,
        jti: Uuid::new_v4().to_string(),
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(refresh_secret().expose_bytes()),
    )
    .unwrap();

    assert_eq!(
        codec().verify_subject(&token, &refresh_secret()),
        Err(TokenError::InvalidSubject)
    );
}

#[test]
fn test_unrepresentable_lifetime_fails_without_panicking() {
    let ttl = Duration::seconds(i64::MAX / 1000);

    assert_eq!(
        codec().issue_refresh(Uuid::new_v4(), &refresh_secret(), ttl),
        Err(TokenError::Signing)
    );
    assert_eq!(
        codec().issue_access(Uuid::new_v4(), "alice", "a@b.co", &access_secret(), ttl),
        Err(TokenError::Signing)
    );
}
