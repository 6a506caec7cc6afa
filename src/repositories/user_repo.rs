//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션의 MongoDB 데이터 액세스 계층입니다.
//! 이메일/사용자 이름의 유니크 제약은 컬렉션 인덱스로 보장합니다 —
//! 가입 시의 사전 중복 확인과 실제 저장은 별도 연산이라 동시 가입이
//! 끼어들 수 있는데, 그 틈은 인덱스가 막습니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};

use crate::db::Database;
use crate::domain::entities::{Role, User};
use crate::errors::{AppError, AppResult};
use crate::repositories::{ProfileUpdate, UserStore};

/// 사용자 데이터 액세스 리포지토리
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection("users")
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    ///
    /// 1. `email` 유니크 인덱스 - 중복 이메일 방지 및 로그인 조회 최적화
    /// 2. `username` 유니크 인덱스 - 중복 사용자 이름 방지
    /// 3. `created_at` 내림차순 인덱스 - 최근 가입 조회
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([email_index, username_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 수정 후 최신 레코드를 돌려받는 `$set` 갱신
    async fn apply_update(&self, id: ObjectId, update_doc: Document) -> AppResult<Option<User>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        // 형식이 잘못된 ID는 없는 레코드로 취급
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = Some(
            result
                .inserted_id
                .as_object_id()
                .ok_or_else(|| AppError::DatabaseError("inserted_id is not an ObjectId".to_string()))?,
        );

        Ok(user)
    }

    async fn set_role(&self, id: &str, role: Role) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.apply_update(object_id, doc! { "role": role.as_str() })
            .await
    }

    async fn update_profile(&self, id: &str, update: ProfileUpdate) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let mut update_doc = doc! { "username": update.username.as_str() };
        update_doc.insert("phone", optional_string(&update.phone));

        if let Some(owner_fields) = &update.owner_fields {
            update_doc.insert("shop_location", optional_string(&owner_fields.shop_location));
            update_doc.insert(
                "operation_hours",
                optional_string(&owner_fields.operation_hours),
            );
        }

        self.apply_update(object_id, update_doc).await
    }
}

/// `Option<String>`을 BSON 값으로 변환 (`None` → `null`)
fn optional_string(value: &Option<String>) -> Bson {
    match value {
        Some(text) => Bson::String(text.clone()),
        None => Bson::Null,
    }
}
