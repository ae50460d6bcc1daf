//! Session entity model for Sea-ORM database interaction.
//!
//! This module maps the `user_session` table. Column names keep the
//! camel-case spelling used by the rest of the booking schema
//! (`sessionID`, `userID`, `ipAddress`, ...), so every field carries an
//! explicit `column_name`.

use sea_orm::entity::prelude::*;

/// Sea-ORM entity model representing one row of `user_session`.
///
/// # Database Schema
///
/// | Column       | Type                 | Description                              |
/// |--------------|----------------------|------------------------------------------|
/// | sessionID    | VARCHAR (Primary Key)| Random session identifier                |
/// | userID       | BIGINT NULL          | Linked user, `NULL` until login          |
/// | ipAddress    | VARCHAR              | Last seen client address                 |
/// | userAgent    | TEXT                 | Last seen client user agent              |
/// | creationTime | BIGINT               | Unix timestamp (seconds) of creation     |
/// | lastActivity | BIGINT               | Unix timestamp (seconds) of last request |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_session")]
pub struct Model {
    /// The unique session identifier handed out to the client.
    #[sea_orm(primary_key, auto_increment = false, column_name = "sessionID")]
    pub session_id: String,

    /// The user this session is logged in as, if any.
    #[sea_orm(column_name = "userID")]
    pub user_id: Option<i64>,

    #[sea_orm(column_name = "ipAddress")]
    pub ip_address: String,

    #[sea_orm(column_name = "userAgent", column_type = "Text")]
    pub user_agent: String,

    /// Unix timestamp in seconds.
    #[sea_orm(column_name = "creationTime")]
    pub creation_time: i64,

    /// Unix timestamp in seconds, bumped by every update and login.
    #[sea_orm(column_name = "lastActivity")]
    pub last_activity: i64,
}

impl Model {
    /// Returns `true` once [`SessionHandler::login`](crate::SessionHandler::login)
    /// has linked this session to a user.
    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }
}

/// This entity doesn't have any relations to other entities.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
