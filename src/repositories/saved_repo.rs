//! # 저장된 장소 리포지토리 구현
//!
//! `saved_places` 컬렉션의 MongoDB 데이터 액세스 계층입니다.
//! 현재 범위에서는 목록 조회만 사용됩니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;

use crate::db::Database;
use crate::domain::entities::SavedPlace;
use crate::errors::{AppError, AppResult};
use crate::repositories::SavedPlaceStore;

/// 저장된 장소 데이터 액세스 리포지토리
pub struct SavedPlaceRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl SavedPlaceRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<SavedPlace> {
        self.db.get_database().collection("saved_places")
    }
}

#[async_trait]
impl SavedPlaceStore for SavedPlaceRepository {
    async fn find_for_user(&self, user_id: &str) -> AppResult<Vec<SavedPlace>> {
        let Ok(user_object_id) = ObjectId::parse_str(user_id) else {
            return Ok(Vec::new());
        };

        let cursor = self
            .collection()
            .find(doc! { "user_id": user_object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
