use std::collections::VecDeque;
use std::sync::Mutex;

use booking_lib::entity::user_session::{self, Entity as UserSession};
use booking_lib::migration::{Migrator, MigratorTrait};
use booking_lib::SessionIdGenerator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, Set};

/// Fresh in-memory SQLite database with the session schema applied.
pub async fn test_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    // one connection, so every query sees the same in-memory database
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let conn = Database::connect(opt).await.expect("connect to sqlite");
    Migrator::up(&conn, None).await.expect("run migrations");
    conn
}

pub async fn all_sessions(conn: &DatabaseConnection) -> Vec<user_session::Model> {
    UserSession::find().all(conn).await.expect("list sessions")
}

pub async fn insert_session(
    conn: &DatabaseConnection,
    session_id: &str,
    user_id: Option<i64>,
    last_activity: i64,
) {
    let session = user_session::ActiveModel {
        session_id: Set(session_id.to_string()),
        user_id: Set(user_id),
        ip_address: Set("198.51.100.1".to_string()),
        user_agent: Set("seed".to_string()),
        creation_time: Set(last_activity),
        last_activity: Set(last_activity),
    };

    UserSession::insert(session)
        .exec_without_returning(conn)
        .await
        .expect("insert session");
}

/// Hands out a fixed list of ids, then falls back to the last one.
#[derive(Debug)]
pub struct ScriptedIds(Mutex<VecDeque<String>>);

impl ScriptedIds {
    pub fn new(ids: &[&str]) -> Self {
        Self(Mutex::new(ids.iter().map(|id| id.to_string()).collect()))
    }
}

impl SessionIdGenerator for ScriptedIds {
    fn generate(&self) -> String {
        let mut ids = self.0.lock().expect("scripted ids lock");
        if ids.len() > 1 {
            ids.pop_front().expect("non-empty")
        } else {
            ids.front().cloned().expect("at least one scripted id")
        }
    }
}
