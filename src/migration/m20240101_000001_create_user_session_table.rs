use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserSession::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserSession::SessionId)
                            .string_len(128)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserSession::UserId).big_integer().null())
                    .col(
                        ColumnDef::new(UserSession::IpAddress)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserSession::UserAgent).text().not_null())
                    .col(
                        ColumnDef::new(UserSession::CreationTime)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserSession::LastActivity)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // delete_inactive scans by last activity
        manager
            .create_index(
                Index::create()
                    .name("idx_user_session_last_activity")
                    .table(UserSession::Table)
                    .col(UserSession::LastActivity)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserSession {
    Table,
    #[sea_orm(iden = "sessionID")]
    SessionId,
    #[sea_orm(iden = "userID")]
    UserId,
    #[sea_orm(iden = "ipAddress")]
    IpAddress,
    #[sea_orm(iden = "userAgent")]
    UserAgent,
    #[sea_orm(iden = "creationTime")]
    CreationTime,
    #[sea_orm(iden = "lastActivity")]
    LastActivity,
}
