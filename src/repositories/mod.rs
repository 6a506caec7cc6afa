//! # Repository Layer
//!
//! 문서 저장소 접근 계층입니다. 핸들러와 서비스는 컬렉션별 저장소
//! 트레이트(capability)에만 의존하고, MongoDB 구현은 이 모듈의
//! 하위 모듈에 있습니다. 테스트는 인메모리 구현으로 대체합니다.
//!
//! ## 식별자 규칙
//!
//! 레코드 식별자는 경로/세션에서 온 불투명한 문자열로 주고받습니다.
//! 형식이 잘못된 식별자는 이 경계에서 "없는 레코드"로 접습니다 —
//! 호출자 입장에서 둘은 구분할 이유가 없고, 구분해서도 안 됩니다.

pub mod cafe_repo;
pub mod review_repo;
pub mod saved_repo;
pub mod user_repo;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::domain::entities::{Cafe, Review, Role, SavedPlace, User};
use crate::errors::AppResult;

pub use cafe_repo::CafeRepository;
pub use review_repo::ReviewRepository;
pub use saved_repo::SavedPlaceRepository;
pub use user_repo::UserRepository;

/// 프로필 수정 내용
///
/// `username`/`phone`은 항상 적용되고, `owner_fields`는 사장님 계정일
/// 때만 `Some`으로 채워 전달됩니다. 빈 입력은 빈 문자열 대신 "없음"으로
/// 정규화되어 도착합니다.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub username: String,
    pub phone: Option<String>,
    pub owner_fields: Option<OwnerFields>,
}

/// 사장님 전용 프로필 필드
#[derive(Debug, Clone)]
pub struct OwnerFields {
    pub shop_location: Option<String>,
    pub operation_hours: Option<String>,
}

/// `users` 컬렉션 저장소
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ID로 사용자 조회 (형식이 잘못된 ID는 `Ok(None)`)
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 이메일로 사용자 조회 (호출 전 소문자 정규화 필요)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 사용자 이름으로 사용자 조회
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 새 사용자 저장 (할당된 ID 포함 반환)
    async fn insert(&self, user: User) -> AppResult<User>;

    /// 역할 설정
    async fn set_role(&self, id: &str, role: Role) -> AppResult<Option<User>>;

    /// 프로필 수정 (수정 후 최신 레코드 반환)
    async fn update_profile(&self, id: &str, update: ProfileUpdate) -> AppResult<Option<User>>;
}

/// `cafes` 컬렉션 저장소 (읽기 전용)
#[async_trait]
pub trait CafeStore: Send + Sync {
    /// 전체 카페 목록
    async fn find_all(&self) -> AppResult<Vec<Cafe>>;

    /// ID로 카페 조회 (형식이 잘못된 ID는 `Ok(None)`)
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Cafe>>;

    /// 이름에 검색어가 포함된 카페 목록 (대소문자 무시, 리터럴 부분 일치)
    async fn search_by_name(&self, query: &str) -> AppResult<Vec<Cafe>>;
}

/// `reviews` 컬렉션 저장소
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// 특정 카페의 모든 리뷰
    async fn find_for_cafe(&self, cafe_id: &str) -> AppResult<Vec<Review>>;

    /// ID로 리뷰 조회 (형식이 잘못된 ID는 `Ok(None)`)
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Review>>;

    /// 새 리뷰 저장 (할당된 ID 포함 반환)
    async fn insert(&self, review: Review) -> AppResult<Review>;

    /// 별점과 본문을 한 번의 갱신으로 함께 수정
    async fn set_content(&self, id: &str, rating: i32, text: &str) -> AppResult<Option<Review>>;

    /// 리뷰 삭제 (삭제 여부 반환)
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// `saved_places` 컬렉션 저장소
#[async_trait]
pub trait SavedPlaceStore: Send + Sync {
    /// 사용자가 저장한 장소 목록
    async fn find_for_user(&self, user_id: &str) -> AppResult<Vec<SavedPlace>>;
}
