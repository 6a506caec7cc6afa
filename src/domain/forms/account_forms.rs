//! 계정 관련 폼 DTO
//!
//! 회원가입, 로그인, 역할 선택, 프로필 수정 폼의 요청 데이터 구조를
//! 정의합니다. 사용자에게 그대로 노출되는 검증 메시지를 이 파일에서
//! 관리합니다.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::utils::string_utils::is_blank;

pub const MSG_USERNAME_REQUIRED: &str = "Username is required.";
pub const MSG_EMAIL_REQUIRED: &str = "Email is required.";
pub const MSG_PASSWORD_REQUIRED: &str = "Password is required.";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
pub const MSG_EMAIL_TAKEN: &str = "An account with that email already exists.";
pub const MSG_USERNAME_TAKEN: &str = "That username is already taken.";
pub const MSG_LOGIN_FAILED: &str = "Invalid email or password.";

/// 회원가입 폼
///
/// 필드 선언 순서가 곧 검증 순서입니다. 첫 번째로 실패한 검사의
/// 메시지만 사용자에게 보여줍니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupForm {
    #[serde(default)]
    #[validate(custom(function = "validate_username_present"))]
    pub username: String,

    #[serde(default)]
    #[validate(custom(function = "validate_email_present"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

impl SignupForm {
    /// 필드 선언 순서 기준으로 첫 번째 검증 실패 메시지를 반환합니다.
    pub fn first_error(&self) -> Option<String> {
        match self.validate() {
            Ok(()) => None,
            Err(errors) => super::first_message(&errors, &["username", "email", "password"]),
        }
    }

    /// 저장/중복 확인에 사용할 정규화된 사용자 이름
    pub fn normalized_username(&self) -> String {
        self.username.trim().to_string()
    }

    /// 저장/중복 확인에 사용할 정규화된 이메일 (소문자)
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }
}

/// 사용자 이름 존재 검증
fn validate_username_present(username: &str) -> Result<(), ValidationError> {
    if is_blank(username) {
        return Err(ValidationError::new("username_required")
            .with_message(MSG_USERNAME_REQUIRED.into()));
    }
    Ok(())
}

/// 이메일 존재 검증
fn validate_email_present(email: &str) -> Result<(), ValidationError> {
    if is_blank(email) {
        return Err(ValidationError::new("email_required").with_message(MSG_EMAIL_REQUIRED.into()));
    }
    Ok(())
}

/// 비밀번호 검증 (존재 → 최소 길이 순)
///
/// 비밀번호는 공백도 유효한 문자이므로 trim하지 않습니다.
fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::new("password_required")
            .with_message(MSG_PASSWORD_REQUIRED.into()));
    }
    if password.chars().count() < 6 {
        return Err(ValidationError::new("password_too_short")
            .with_message(MSG_PASSWORD_TOO_SHORT.into()));
    }
    Ok(())
}

/// 로그인 폼
///
/// 존재하지 않는 이메일과 틀린 비밀번호를 구분할 수 없도록,
/// 필드 단위 검증 없이 인증 결과 하나의 메시지로만 실패를 알립니다.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    /// 조회에 사용할 정규화된 이메일 (소문자)
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }
}

/// 역할 선택 폼
#[derive(Debug, Clone, Deserialize)]
pub struct RoleForm {
    #[serde(default)]
    pub role: String,
}

/// 프로필 수정 폼
///
/// 필드 형식 검증은 하지 않습니다. 사장님 전용 필드는 HTML 폼의
/// 필드 이름(`shop-location`, `operation-hours`)을 그대로 따릅니다.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, rename = "shop-location")]
    pub shop_location: Option<String>,
    #[serde(default, rename = "operation-hours")]
    pub operation_hours: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, email: &str, password: &str) -> SignupForm {
        SignupForm {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_signup_valid() {
        assert_eq!(form("alice", "a@x.com", "secret1").first_error(), None);
    }

    #[test]
    fn test_signup_username_first() {
        // 모든 필드가 비어 있어도 사용자 이름 메시지가 먼저다
        let err = form("", "", "").first_error();
        assert_eq!(err.as_deref(), Some(MSG_USERNAME_REQUIRED));

        let err = form("   ", "a@x.com", "secret1").first_error();
        assert_eq!(err.as_deref(), Some(MSG_USERNAME_REQUIRED));
    }

    #[test]
    fn test_signup_email_second() {
        let err = form("alice", "", "").first_error();
        assert_eq!(err.as_deref(), Some(MSG_EMAIL_REQUIRED));
    }

    #[test]
    fn test_signup_password_required_before_length() {
        let err = form("alice", "a@x.com", "").first_error();
        assert_eq!(err.as_deref(), Some(MSG_PASSWORD_REQUIRED));
    }

    #[test]
    fn test_signup_password_length() {
        let err = form("alice", "a@x.com", "12345").first_error();
        assert_eq!(err.as_deref(), Some(MSG_PASSWORD_TOO_SHORT));

        // 내용과 무관하게 길이만 본다 (공백 6자도 통과)
        assert_eq!(form("alice", "a@x.com", "      ").first_error(), None);
    }

    #[test]
    fn test_signup_normalization() {
        let f = form("  alice  ", "  A@X.CoM ", "secret1");
        assert_eq!(f.normalized_username(), "alice");
        assert_eq!(f.normalized_email(), "a@x.com");
    }

    #[test]
    fn test_login_email_normalization() {
        let f = LoginForm {
            email: " A@X.com ".to_string(),
            password: "pw".to_string(),
        };
        assert_eq!(f.normalized_email(), "a@x.com");
    }
}
