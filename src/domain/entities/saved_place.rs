//! SavedPlace Entity Implementation
//!
//! 사용자가 저장해 둔 카페를 표현합니다. 현재 범위에서는 목록 조회만
//! 제공되며 저장/해제 경로는 없습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 저장된 장소 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPlace {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 저장한 사용자
    pub user_id: ObjectId,
    /// 저장된 카페
    pub cafe_id: ObjectId,
    /// 저장 시간
    pub created_at: DateTime,
}
