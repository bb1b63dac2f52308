//! MongoDB 사용자 저장소
//!
//! `users` 컬렉션에 사용자를 영속화합니다. 리졸브는
//! `find_one_and_update` 원자적 upsert 하나로 처리되어
//! 조회와 갱신 사이의 경쟁 조건이 없습니다.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::{ClientOptions, FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Client, Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::domain::{GoogleProfile, User};
use crate::errors::{AppError, AppResult};
use crate::store::UserStore;

/// 데이터베이스 이름 기본값
const DEFAULT_DATABASE_NAME: &str = "google_auth_gateway";

/// `users` 컬렉션 문서
///
/// 애플리케이션 레벨 [`User`]와는 `_id` 처리만 다릅니다.
/// 타임스탬프는 RFC 3339 문자열로 저장됩니다.
#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    google_id: String,
    email: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    picture: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_login_at: Option<DateTime<Utc>>,
}

impl UserDocument {
    /// 문서를 애플리케이션 사용자 레코드로 변환합니다.
    ///
    /// `_id`가 있으면 hex 문자열을 사용자 ID로 사용하고,
    /// 없으면 `google_id`로 대체합니다.
    fn into_user(self) -> User {
        User {
            id: self
                .id
                .map(|oid| oid.to_hex())
                .unwrap_or_else(|| self.google_id.clone()),
            google_id: self.google_id,
            email: self.email,
            name: self.name,
            picture: self.picture,
            created_at: self.created_at,
            updated_at: self.updated_at,
            last_login_at: self.last_login_at,
        }
    }
}

/// MongoDB 기반 사용자 저장소
pub struct MongoUserStore {
    collection: Collection<UserDocument>,
}

impl MongoUserStore {
    /// MongoDB에 연결하고 저장소를 초기화합니다.
    ///
    /// 연결 확인(ping)과 `google_id` 유니크 인덱스 생성까지 수행합니다.
    ///
    /// # Arguments
    ///
    /// * `uri` - MongoDB 연결 URI
    /// * `database_name` - 사용할 데이터베이스 이름. `None`이면 기본값 사용
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - URI 파싱 실패, 연결 실패, 인덱스 생성 실패
    pub async fn connect(uri: &str, database_name: Option<&str>) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB URI 파싱 실패: {}", e)))?;

        client_options.app_name = Some("google_auth_gateway".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(format!("MongoDB 클라이언트 생성 실패: {}", e)))?;

        let database_name = database_name.unwrap_or(DEFAULT_DATABASE_NAME);
        let database = client.database(database_name);

        // 연결 확인
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB 연결 실패: {}", e)))?;

        let collection = database.collection::<UserDocument>("users");

        let index = IndexModel::builder()
            .keys(doc! { "google_id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        collection
            .create_index(index)
            .await
            .map_err(|e| AppError::DatabaseError(format!("인덱스 생성 실패: {}", e)))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self { collection })
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn resolve(&self, profile: &GoogleProfile) -> AppResult<User> {
        let now = Utc::now();

        let filter = doc! { "google_id": &profile.id };
        let update = doc! {
            "$set": {
                "email": &profile.email,
                "name": &profile.name,
                "picture": profile.picture.clone(),
                "updated_at": now.to_rfc3339(),
                "last_login_at": now.to_rfc3339(),
            },
            "$setOnInsert": {
                "google_id": &profile.id,
                "created_at": now.to_rfc3339(),
            },
        };

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let document = self
            .collection
            .find_one_and_update(filter, update)
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| {
                AppError::DatabaseError("upsert가 문서를 반환하지 않았습니다".to_string())
            })?;

        Ok(document.into_user())
    }

    fn backend_name(&self) -> &'static str {
        "MongoDB"
    }
}
