//! # 리뷰 리포지토리 구현
//!
//! `reviews` 컬렉션의 MongoDB 데이터 액세스 계층입니다.
//! 별점/본문 수정은 한 번의 `$set` 갱신으로 함께 적용됩니다 —
//! 둘 중 하나만 바뀐 중간 상태는 존재하지 않습니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::Collection;

use crate::db::Database;
use crate::domain::entities::Review;
use crate::errors::{AppError, AppResult};
use crate::repositories::ReviewStore;

/// 리뷰 데이터 액세스 리포지토리
pub struct ReviewRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl ReviewRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Review> {
        self.db.get_database().collection("reviews")
    }
}

#[async_trait]
impl ReviewStore for ReviewRepository {
    async fn find_for_cafe(&self, cafe_id: &str) -> AppResult<Vec<Review>> {
        let Ok(cafe_object_id) = ObjectId::parse_str(cafe_id) else {
            return Ok(Vec::new());
        };

        let cursor = self
            .collection()
            .find(doc! { "cafe_id": cafe_object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Review>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut review: Review) -> AppResult<Review> {
        let result = self
            .collection()
            .insert_one(&review)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        review.id = Some(
            result
                .inserted_id
                .as_object_id()
                .ok_or_else(|| AppError::DatabaseError("inserted_id is not an ObjectId".to_string()))?,
        );

        Ok(review)
    }

    async fn set_content(&self, id: &str, rating: i32, text: &str) -> AppResult<Option<Review>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": { "rating": rating, "text": text } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };

        let result = self
            .collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
