//! # 카페 리포지토리 구현
//!
//! `cafes` 컬렉션의 MongoDB 데이터 액세스 계층입니다.
//! 이 서비스는 카페를 쓰지 않으므로 조회 연산만 제공합니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;

use crate::db::Database;
use crate::domain::entities::Cafe;
use crate::errors::{AppError, AppResult};
use crate::repositories::CafeStore;

/// 카페 데이터 액세스 리포지토리
pub struct CafeRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl CafeRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Cafe> {
        self.db.get_database().collection("cafes")
    }
}

#[async_trait]
impl CafeStore for CafeRepository {
    async fn find_all(&self) -> AppResult<Vec<Cafe>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Cafe>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn search_by_name(&self, query: &str) -> AppResult<Vec<Cafe>> {
        // 검색어는 정규식이 아니라 리터럴 부분 문자열이다
        let pattern = escape_regex(query);

        let cursor = self
            .collection()
            .find(doc! { "name": { "$regex": pattern, "$options": "i" } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

/// 정규식 메타 문자를 이스케이프해 리터럴 일치 패턴으로 만듭니다.
pub(crate) fn escape_regex(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());

    for c in raw.chars() {
        if matches!(
            c,
            '.' | '^' | '$' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|' | '\\' | '/'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}
