//! 테스트용 인메모리 저장소 구현
//!
//! MongoDB 없이 핸들러/서비스 시나리오를 끝까지 돌리기 위한 대역입니다.
//! 동작 계약(형식이 잘못된 ID는 없는 레코드, 유니크 제약, 원자적 갱신)은
//! 실제 구현과 동일하게 유지합니다.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::{Cafe, Review, Role, SavedPlace, User};
use crate::errors::{AppError, AppResult};
use crate::repositories::{
    CafeStore, OwnerFields, ProfileUpdate, ReviewStore, SavedPlaceStore, UserStore,
};

/// 인메모리 `users` 저장소
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 수 (검증용)
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.id_string().as_deref() == Some(id))
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();

        // 유니크 인덱스와 동일한 제약
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::DatabaseError("duplicate key: email".to_string()));
        }
        if users.iter().any(|u| u.username == user.username) {
            return Err(AppError::DatabaseError("duplicate key: username".to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn set_role(&self, id: &str, role: Role) -> AppResult<Option<User>> {
        let mut users = self.users.lock().unwrap();
        for user in users.iter_mut() {
            if user.id_string().as_deref() == Some(id) {
                user.role = Some(role);
                return Ok(Some(user.clone()));
            }
        }
        Ok(None)
    }

    async fn update_profile(&self, id: &str, update: ProfileUpdate) -> AppResult<Option<User>> {
        let mut users = self.users.lock().unwrap();
        for user in users.iter_mut() {
            if user.id_string().as_deref() == Some(id) {
                user.username = update.username.clone();
                user.phone = update.phone.clone();
                if let Some(OwnerFields {
                    shop_location,
                    operation_hours,
                }) = &update.owner_fields
                {
                    user.shop_location = shop_location.clone();
                    user.operation_hours = operation_hours.clone();
                }
                return Ok(Some(user.clone()));
            }
        }
        Ok(None)
    }
}

/// 인메모리 `cafes` 저장소
#[derive(Default)]
pub struct MemoryCafeStore {
    cafes: Mutex<Vec<Cafe>>,
}

impl MemoryCafeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 테스트 데이터 주입. 할당된 ID를 반환합니다.
    pub fn add(&self, name: &str) -> String {
        let cafe = Cafe {
            id: Some(ObjectId::new()),
            name: name.to_string(),
            location: None,
            description: None,
        };
        let id = cafe.id_string().unwrap();
        self.cafes.lock().unwrap().push(cafe);
        id
    }
}

#[async_trait]
impl CafeStore for MemoryCafeStore {
    async fn find_all(&self) -> AppResult<Vec<Cafe>> {
        Ok(self.cafes.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Cafe>> {
        let cafes = self.cafes.lock().unwrap();
        Ok(cafes
            .iter()
            .find(|c| c.id_string().as_deref() == Some(id))
            .cloned())
    }

    async fn search_by_name(&self, query: &str) -> AppResult<Vec<Cafe>> {
        let cafes = self.cafes.lock().unwrap();
        Ok(cafes
            .iter()
            .filter(|c| c.name_contains(query))
            .cloned()
            .collect())
    }
}

/// 인메모리 `reviews` 저장소
#[derive(Default)]
pub struct MemoryReviewStore {
    reviews: Mutex<Vec<Review>>,
}

impl MemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 리뷰 수 (검증용)
    pub fn len(&self) -> usize {
        self.reviews.lock().unwrap().len()
    }
}

#[async_trait]
impl ReviewStore for MemoryReviewStore {
    async fn find_for_cafe(&self, cafe_id: &str) -> AppResult<Vec<Review>> {
        let reviews = self.reviews.lock().unwrap();
        Ok(reviews
            .iter()
            .filter(|r| r.cafe_id_string() == cafe_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Review>> {
        let reviews = self.reviews.lock().unwrap();
        Ok(reviews
            .iter()
            .find(|r| r.id_string().as_deref() == Some(id))
            .cloned())
    }

    async fn insert(&self, mut review: Review) -> AppResult<Review> {
        let mut reviews = self.reviews.lock().unwrap();
        review.id = Some(ObjectId::new());
        reviews.push(review.clone());
        Ok(review)
    }

    async fn set_content(&self, id: &str, rating: i32, text: &str) -> AppResult<Option<Review>> {
        let mut reviews = self.reviews.lock().unwrap();
        for review in reviews.iter_mut() {
            if review.id_string().as_deref() == Some(id) {
                review.rating = rating;
                review.text = text.to_string();
                return Ok(Some(review.clone()));
            }
        }
        Ok(None)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let mut reviews = self.reviews.lock().unwrap();
        let before = reviews.len();
        reviews.retain(|r| r.id_string().as_deref() != Some(id));
        Ok(reviews.len() < before)
    }
}

/// 인메모리 `saved_places` 저장소
#[derive(Default)]
pub struct MemorySavedPlaceStore {
    places: Mutex<Vec<SavedPlace>>,
}

impl MemorySavedPlaceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SavedPlaceStore for MemorySavedPlaceStore {
    async fn find_for_user(&self, user_id: &str) -> AppResult<Vec<SavedPlace>> {
        let places = self.places.lock().unwrap();
        Ok(places
            .iter()
            .filter(|p| p.user_id.to_hex() == user_id)
            .cloned()
            .collect())
    }
}
