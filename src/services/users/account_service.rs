//! # 계정 서비스 구현
//!
//! 사용자 계정의 생명주기(가입, 인증, 역할 선택, 프로필 수정)를 담당하는
//! 비즈니스 로직입니다.
//!
//! ## 검증 규칙
//!
//! - 가입: 필드 검증(첫 실패가 이긴다) → 이메일 중복 → 사용자 이름 중복
//!   순서로 검사하며, 전부 통과하기 전에는 레코드를 쓰지 않습니다.
//! - 인증: 존재하지 않는 이메일과 틀린 비밀번호를 같은 메시지로
//!   돌려줍니다. 계정 존재 여부를 응답으로 구분할 수 없게 하기 위함입니다.

use std::sync::Arc;

use bcrypt::hash;

use crate::config::PasswordConfig;
use crate::domain::entities::{Role, User};
use crate::domain::forms::account_forms::{MSG_EMAIL_TAKEN, MSG_LOGIN_FAILED, MSG_USERNAME_TAKEN};
use crate::domain::forms::{LoginForm, ProfileForm, SignupForm};
use crate::errors::{AppError, AppResult};
use crate::identity::CurrentUser;
use crate::repositories::{OwnerFields, ProfileUpdate, UserStore};
use crate::utils::string_utils::clean_optional_string;

/// 계정 관리 서비스
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserStore>,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// 새 계정을 만듭니다.
    ///
    /// 검증 실패는 `ValidationError`, 중복은 `ConflictError`로 구분해
    /// 반환합니다. 둘 다 사용자에게 보여줄 메시지를 그대로 담고 있습니다.
    ///
    /// 중복 확인과 저장은 별도 연산이므로 동시 가입 요청이 끼어들 수
    /// 있습니다. 그 경우 저장 단계에서 유니크 인덱스 위반으로 실패합니다.
    pub async fn signup(&self, form: &SignupForm) -> AppResult<User> {
        if let Some(message) = form.first_error() {
            return Err(AppError::ValidationError(message));
        }

        let username = form.normalized_username();
        let email = form.normalized_email();

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::ConflictError(MSG_EMAIL_TAKEN.to_string()));
        }
        if self.users.find_by_username(&username).await?.is_some() {
            return Err(AppError::ConflictError(MSG_USERNAME_TAKEN.to_string()));
        }

        let password_hash = hash(&form.password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        let user = self
            .users
            .insert(User::new(username, email, password_hash))
            .await?;

        log::info!("새 사용자 가입: {}", user.username);
        Ok(user)
    }

    /// 이메일/비밀번호로 사용자를 인증합니다.
    ///
    /// 실패 원인이 무엇이든 동일한 `AuthenticationError` 하나만
    /// 반환합니다.
    pub async fn authenticate(&self, form: &LoginForm) -> AppResult<User> {
        let email = form.normalized_email();

        let Some(user) = self.users.find_by_email(&email).await? else {
            return Err(AppError::AuthenticationError(MSG_LOGIN_FAILED.to_string()));
        };

        // 해시 검증 오류(손상된 해시 등)도 실패로 뭉갠다
        let valid = bcrypt::verify(&form.password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(AppError::AuthenticationError(MSG_LOGIN_FAILED.to_string()));
        }

        Ok(user)
    }

    /// 역할을 선택합니다.
    ///
    /// `customer`/`owner` 외의 값은 오류 없이 `Ok(None)`으로 끝납니다 —
    /// 호출 측은 같은 폼을 다시 보여줍니다.
    pub async fn select_role(&self, user_id: &str, raw_role: &str) -> AppResult<Option<Role>> {
        let Some(role) = Role::from_form_value(raw_role) else {
            return Ok(None);
        };

        self.users.set_role(user_id, role).await?;

        log::info!("역할 설정: 사용자 {} → {}", user_id, role.as_str());
        Ok(Some(role))
    }

    /// 프로필을 수정합니다.
    ///
    /// 사용자 이름과 연락처는 항상 적용하고, 매장 위치/영업시간은
    /// 사장님 계정일 때만 적용합니다. 필드 형식 검증은 하지 않습니다.
    pub async fn update_profile(&self, current: &CurrentUser, form: &ProfileForm) -> AppResult<()> {
        let owner_fields = if current.user.is_owner() {
            Some(OwnerFields {
                shop_location: clean_optional_string(form.shop_location.clone()),
                operation_hours: clean_optional_string(form.operation_hours.clone()),
            })
        } else {
            None
        };

        let update = ProfileUpdate {
            username: form.username.clone(),
            phone: clean_optional_string(Some(form.phone.clone())),
            owner_fields,
        };

        self.users
            .update_profile(&current.id_string(), update)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forms::account_forms::{
        MSG_PASSWORD_TOO_SHORT, MSG_USERNAME_REQUIRED,
    };
    use crate::repositories::memory::MemoryUserStore;

    fn service() -> (Arc<MemoryUserStore>, AccountService) {
        let store = Arc::new(MemoryUserStore::new());
        (store.clone(), AccountService::new(store))
    }

    fn signup_form(username: &str, email: &str, password: &str) -> SignupForm {
        SignupForm {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn login_form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_signup_creates_user_with_unset_role() {
        let (store, service) = service();

        let user = service
            .signup(&signup_form("alice", "A@X.com", "secret1"))
            .await
            .unwrap();

        assert!(user.id.is_some());
        assert_eq!(user.email, "a@x.com");
        assert!(user.role.is_none());
        // 평문 비밀번호는 어디에도 저장되지 않는다
        assert_ne!(user.password_hash, "secret1");
        assert!(bcrypt::verify("secret1", &user.password_hash).unwrap());
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_signup_rejects_invalid_fields_without_writing() {
        let (store, service) = service();

        let err = service
            .signup(&signup_form("", "a@x.com", "secret1"))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), MSG_USERNAME_REQUIRED);

        let err = service
            .signup(&signup_form("alice", "a@x.com", "12345"))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), MSG_PASSWORD_TOO_SHORT);

        assert_eq!(store.len(), 0);
    }

    #[actix_web::test]
    async fn test_signup_rejects_duplicate_email_then_username() {
        let (store, service) = service();

        service
            .signup(&signup_form("alice", "a@x.com", "secret1"))
            .await
            .unwrap();

        // 같은 이메일 (대소문자만 다른 경우 포함)
        let err = service
            .signup(&signup_form("bob", "A@X.COM", "secret1"))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), MSG_EMAIL_TAKEN);

        // 같은 사용자 이름
        let err = service
            .signup(&signup_form("alice", "b@x.com", "secret1"))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), MSG_USERNAME_TAKEN);

        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_authenticate_failure_is_indistinguishable() {
        let (_store, service) = service();

        service
            .signup(&signup_form("alice", "a@x.com", "secret1"))
            .await
            .unwrap();

        // 없는 이메일
        let unknown = service
            .authenticate(&login_form("nobody@x.com", "secret1"))
            .await
            .unwrap_err();

        // 틀린 비밀번호
        let wrong = service
            .authenticate(&login_form("a@x.com", "wrong-password"))
            .await
            .unwrap_err();

        assert_eq!(unknown.user_message(), MSG_LOGIN_FAILED);
        assert_eq!(wrong.user_message(), unknown.user_message());
    }

    #[actix_web::test]
    async fn test_authenticate_success_normalizes_email() {
        let (_store, service) = service();

        service
            .signup(&signup_form("alice", "a@x.com", "secret1"))
            .await
            .unwrap();

        let user = service
            .authenticate(&login_form("  A@X.com ", "secret1"))
            .await
            .unwrap();
        assert_eq!(user.username, "alice");
    }

    #[actix_web::test]
    async fn test_select_role_ignores_unknown_values() {
        let (store, service) = service();

        let user = service
            .signup(&signup_form("alice", "a@x.com", "secret1"))
            .await
            .unwrap();
        let user_id = user.id_string().unwrap();

        // 허용되지 않은 값은 조용히 무시된다
        assert_eq!(service.select_role(&user_id, "admin").await.unwrap(), None);
        let stored = store.find_by_id(&user_id).await.unwrap().unwrap();
        assert!(stored.role.is_none());

        // 유효한 값은 저장된다
        assert_eq!(
            service.select_role(&user_id, "owner").await.unwrap(),
            Some(Role::Owner)
        );
        let stored = store.find_by_id(&user_id).await.unwrap().unwrap();
        assert_eq!(stored.role, Some(Role::Owner));
    }
}
