//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버 바인딩, 실행 환경, 비밀번호 해싱, 세션 쿠키 관련 설정을 관리합니다.

use actix_web::cookie::Key;
use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        match env::var("ENVIRONMENT") {
            Ok(value) => Self::from_str(&value),
            Err(_) => Environment::Production,
        }
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST` 환경 변수로 재정의할 수 있으며, 유효 범위는 4-15입니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if cost >= 4 && cost <= 15 {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 호스트를 반환합니다. (기본값: 127.0.0.1)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 서버가 바인딩할 포트를 반환합니다. (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080)
    }
}

/// 세션 쿠키 설정
///
/// 세션은 서명된 쿠키 하나에 저장되므로 서명 키 관리가 핵심입니다.
pub struct SessionConfig;

impl SessionConfig {
    /// 세션 쿠키 서명 키를 반환합니다.
    ///
    /// `SECRET_KEY` 환경 변수에서 키를 파생하며, 32바이트 미만이거나
    /// 없는 경우 임시 키를 생성합니다. 임시 키는 재시작 시마다 바뀌므로
    /// 기존 세션이 모두 무효화됩니다. 프로덕션에서는 반드시 설정하세요.
    pub fn cookie_key() -> Key {
        match env::var("SECRET_KEY") {
            Ok(secret) if secret.len() >= 32 => Key::derive_from(secret.as_bytes()),
            Ok(_) => {
                log::warn!("SECRET_KEY가 32바이트 미만입니다. 임시 세션 키를 생성합니다");
                Key::generate()
            }
            Err(_) => {
                log::warn!("SECRET_KEY가 없습니다. 임시 세션 키를 생성합니다 (개발용)");
                Key::generate()
            }
        }
    }

    /// 세션 쿠키의 Secure 플래그 여부를 반환합니다.
    ///
    /// `SESSION_COOKIE_SECURE` 환경 변수로 재정의할 수 있으며("0"이면
    /// 비활성), 기본값은 환경에 따릅니다 (스테이징/프로덕션에서만 활성).
    pub fn cookie_secure() -> bool {
        if let Ok(value) = env::var("SESSION_COOKIE_SECURE") {
            return value != "0";
        }

        matches!(
            Environment::current(),
            Environment::Staging | Environment::Production
        )
    }
}
