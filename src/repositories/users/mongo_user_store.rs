//! # MongoDB 사용자 저장소 구현
//!
//! [`UserStore`] 포트의 MongoDB 어댑터입니다.
//!
//! ## 특징
//!
//! - **이메일 정규화**: 저장/조회 양쪽에서 소문자로 정규화
//! - **소프트 삭제 필터**: 모든 조회에 `deleted_at: null` 적용
//! - **데이터 무결성**: 이메일 유니크 인덱스 관리
//!
//! ## 인덱스
//!
//! - `email_unique`: email(unique) - 동시 가입 레이스의 최후 방어선
//! - `created_at_desc`: created_at(desc)

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppResult, DomainError};
use crate::db::Database;
use crate::domain::entities::users::user::{User, UserRole};
use crate::repositories::users::user_store::{NewUser, ProfilePatch, UserStore};
use crate::utils::string_utils::normalize_email;

/// `users` 컬렉션의 영속 문서
///
/// 도메인 [`User`]와 분리된 저장 전용 표현입니다. `deleted_at`은
/// 소프트 삭제 마커이며 도메인으로는 노출되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    email: String,
    password: String,
    first_name: String,
    last_name: String,
    role: UserRole,
    coins_balance: i64,
    created_at: DateTime,
    updated_at: DateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted_at: Option<DateTime>,
}

impl UserDocument {
    /// 도메인 엔티티로 변환합니다.
    fn into_domain(self) -> User {
        User {
            id: self.id.map(|id| id.to_hex()).unwrap_or_default(),
            email: self.email,
            password: self.password,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role,
            coins_balance: self.coins_balance,
            created_at: self.created_at.to_chrono(),
            updated_at: self.updated_at.to_chrono(),
        }
    }
}

/// 사용자 데이터 액세스 저장소 (MongoDB)
pub struct MongoUserStore {
    collection: Collection<UserDocument>,
}

impl MongoUserStore {
    const COLLECTION: &'static str = "users";

    /// 데이터베이스 연결로부터 저장소를 생성합니다.
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection(Self::COLLECTION),
        }
    }

    /// 컬렉션 인덱스를 생성합니다.
    ///
    /// 애플리케이션 시작 시 한 번 호출됩니다. 이메일 유니크 인덱스는
    /// 가입 유스케이스의 사전 확인이 놓치는 동시 중복 생성을
    /// 저장소 수준에서 거부합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([email_index, created_at_index])
            .await?;

        log::info!("User collection indexes ready");
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let document = self
            .collection
            .find_one(doc! {
                "email": normalize_email(email),
                "deleted_at": null,
            })
            .await?;

        Ok(document.map(UserDocument::into_domain))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        // ObjectId가 아닌 문자열은 어떤 사용자도 가리킬 수 없다
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let document = self
            .collection
            .find_one(doc! { "_id": object_id, "deleted_at": null })
            .await?;

        Ok(document.map(UserDocument::into_domain))
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let now = DateTime::now();
        let mut document = UserDocument {
            id: None,
            email: normalize_email(&new_user.email),
            password: new_user.password_hash,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            role: UserRole::default(),
            coins_balance: 0,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let result = self.collection.insert_one(&document).await?;
        document.id = result.inserted_id.as_object_id();

        Ok(document.into_domain())
    }

    async fn update_profile(&self, id: &str, patch: ProfilePatch) -> AppResult<User> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| DomainError::NotFound("Usuário não encontrado".to_string()))?;

        let mut update_doc = doc! { "updated_at": DateTime::now() };
        if let Some(first_name) = patch.first_name {
            update_doc.insert("first_name", first_name);
        }
        if let Some(last_name) = patch.last_name {
            update_doc.insert("last_name", last_name);
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection
            .find_one_and_update(
                doc! { "_id": object_id, "deleted_at": null },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await?;

        updated
            .map(UserDocument::into_domain)
            .ok_or_else(|| DomainError::NotFound("Usuário não encontrado".to_string()).into())
    }
}
