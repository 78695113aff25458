use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Contacts {
    Table,
    Id,
    FirstName,
    LastName,
    Phone,
    Email,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contacts::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Contacts::FirstName).text().not_null())
                    .col(ColumnDef::new(Contacts::LastName).text().not_null())
                    .col(ColumnDef::new(Contacts::Phone).text().not_null())
                    .col(ColumnDef::new(Contacts::Email).text().not_null())
                    .to_owned(),
            )
            .await?;

        // Lookup index for the email availability check. Uniqueness is
        // deliberately not enforced here.
        manager
            .create_index(
                Index::create()
                    .name("idx_contacts_email")
                    .table(Contacts::Table)
                    .col(Contacts::Email)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_contacts_email")
                    .table(Contacts::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Contacts::Table).if_exists().to_owned())
            .await
    }
}
