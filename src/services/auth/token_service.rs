//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 로그인 성공 시 사용자 스냅샷을 담은 토큰을 발급하고,
//! 보호 라우트 접근 시 토큰을 검증합니다.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::AuthConfig;
use crate::domain::{TokenClaims, User};
use crate::errors::AppError;

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 JWT 토큰을 생성하고 검증합니다.
/// 토큰 수명은 설정의 `jwt.expiration_days`를 따릅니다 (기본 7일).
pub struct TokenService {
    config: Arc<AuthConfig>,
}

impl TokenService {
    /// 주어진 설정으로 토큰 서비스를 생성합니다.
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// 사용자를 위한 JWT 토큰 발급
    ///
    /// 클레임에는 사용자 스냅샷이 그대로 담기므로 보호 라우트에서
    /// 저장소 조회 없이 요청 컨텍스트 사용자를 복원할 수 있습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 인코딩 실패
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::days(self.config.jwt.expiration_days);

        let claims = TokenClaims::for_user(user, now.timestamp(), expiration.timestamp());

        let encoding_key = EncodingKey::from_secret(self.config.jwt.secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식 또는 서명
    /// * `AppError::InternalError` - 기타 시스템 오류
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(self.config.jwt.secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("토큰 검증 실패: {}", e)),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서
    /// 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GoogleProfile;

    fn test_config() -> Arc<AuthConfig> {
        Arc::new(
            AuthConfig::from_lookup(|key| match key {
                "GOOGLE_CLIENT_ID" => Some("test-client".to_string()),
                "GOOGLE_CLIENT_SECRET" => Some("test-secret".to_string()),
                "JWT_SECRET" => Some("unit-test-jwt-secret".to_string()),
                _ => None,
            })
            .unwrap(),
        )
    }

    fn test_user() -> User {
        User::from_profile(&GoogleProfile {
            id: "g-42".to_string(),
            email: "alice@gmail.com".to_string(),
            name: "Alice Kim".to_string(),
            picture: Some("https://example.com/a.jpg".to_string()),
            verified_email: true,
        })
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let service = TokenService::new(test_config());
        let user = test_user();

        let token = service.issue(&user).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.google_id, "g-42");
        assert_eq!(claims.email, "alice@gmail.com");
        assert_eq!(claims.name, "Alice Kim");
        assert_eq!(claims.picture, user.picture);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = TokenService::new(test_config());
        let user = test_user();

        // 만료 시각이 과거인 토큰을 같은 비밀키로 직접 인코딩
        let now = Utc::now().timestamp();
        let claims = TokenClaims::for_user(&user, now - 7200, now - 3600);
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("unit-test-jwt-secret".as_ref()),
        )
        .unwrap();

        match service.verify(&token) {
            Err(AppError::AuthenticationError(msg)) => assert!(msg.contains("만료")),
            other => panic!("Expected AuthenticationError, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = TokenService::new(test_config());
        let user = test_user();

        let now = Utc::now().timestamp();
        let claims = TokenClaims::for_user(&user, now, now + 3600);
        let forged = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("attacker-secret".as_ref()),
        )
        .unwrap();

        assert!(service.verify(&forged).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = TokenService::new(test_config());

        assert!(service.verify("not-a-jwt").is_err());
        assert!(service.verify("").is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::new(test_config());

        assert_eq!(
            service.extract_bearer_token("Bearer abc.def.ghi").unwrap(),
            "abc.def.ghi"
        );
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("abc.def.ghi").is_err());
    }
}
