//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일/비밀번호 기반 로컬 인증과 역할(손님/사장님) 구분을 지원합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 역할
///
/// 가입 직후에는 역할이 정해지지 않은 상태(`None`)이며,
/// 역할 선택 단계에서 한 번 설정됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 일반 손님 - 리뷰 작성/관리
    Customer,
    /// 카페 사장님 - 매장 위치/영업시간 프로필 필드 추가 제공
    Owner,
}

impl Role {
    /// 폼 입력값에서 역할을 파싱합니다.
    ///
    /// `customer` / `owner` 두 값만 유효하며, 그 외의 값은 `None`입니다.
    /// 잘못된 값은 오류가 아니라 "선택 안 함"으로 취급됩니다.
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "customer" => Some(Role::Customer),
            "owner" => Some(Role::Owner),
            _ => None,
        }
    }

    /// 저장소에 기록되는 소문자 표기
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Owner => "owner",
        }
    }

    /// 화면 표시용 표기 (첫 글자 대문자)
    pub fn label(&self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::Owner => "Owner",
        }
    }
}

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (unique)
    pub username: String,
    /// 사용자 이메일 (unique, 소문자로 정규화되어 저장)
    pub email: String,
    /// bcrypt로 해시된 비밀번호
    pub password_hash: String,
    /// 사용자 역할 (가입 직후에는 미정)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// 연락처
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// 매장 위치 (사장님 전용)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_location: Option<String>,
    /// 영업 시간 (사장님 전용)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_hours: Option<String>,
    /// 생성 시간
    pub created_at: DateTime,
}

impl User {
    /// 새 사용자 생성 (이메일/비밀번호)
    ///
    /// 역할이 정해지지 않은 상태로 시작하며, 역할 선택 단계에서 설정됩니다.
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: None,
            username,
            email,
            password_hash,
            role: None,
            phone: None,
            shop_location: None,
            operation_hours: None,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 사장님 계정인지 확인
    pub fn is_owner(&self) -> bool {
        matches!(self.role, Some(Role::Owner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_form_value() {
        assert_eq!(Role::from_form_value("customer"), Some(Role::Customer));
        assert_eq!(Role::from_form_value("owner"), Some(Role::Owner));
        // 그 외의 값은 조용히 무시된다
        assert_eq!(Role::from_form_value("admin"), None);
        assert_eq!(Role::from_form_value("Owner"), None);
        assert_eq!(Role::from_form_value(""), None);
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Customer.as_str(), "customer");
        assert_eq!(Role::Owner.as_str(), "owner");
        assert_eq!(Role::Customer.label(), "Customer");
        assert_eq!(Role::Owner.label(), "Owner");
    }

    #[test]
    fn test_new_user_starts_without_role() {
        let user = User::new(
            "alice".to_string(),
            "a@x.com".to_string(),
            "hash".to_string(),
        );

        assert!(user.id.is_none());
        assert!(user.role.is_none());
        assert!(!user.is_owner());
        assert!(user.id_string().is_none());
    }

    #[test]
    fn test_is_owner() {
        let mut user = User::new(
            "bob".to_string(),
            "b@x.com".to_string(),
            "hash".to_string(),
        );
        user.role = Some(Role::Owner);

        assert!(user.is_owner());

        user.role = Some(Role::Customer);
        assert!(!user.is_owner());
    }
}
