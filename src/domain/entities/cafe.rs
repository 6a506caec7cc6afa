//! Cafe Entity Implementation
//!
//! 카페 엔티티입니다. 이 서비스에서는 읽기 전용이며,
//! 생성/수정 엔드포인트는 제공하지 않습니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 카페 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cafe {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 카페 이름
    pub name: String,
    /// 위치 설명
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// 소개 문구
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Cafe {
    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 이름에 검색어가 포함되는지 확인 (대소문자 무시)
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
