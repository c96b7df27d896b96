//! Create `employees` table.
//!
//! Column names are camelCase and quoted, matching the JSON field names.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_employees()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employees::Table).to_owned()).await
    }
}

fn create_employees() -> TableCreateStatement {
    Table::create()
        .table(Employees::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Employees::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Employees::FirstName).text().not_null())
        .col(ColumnDef::new(Employees::LastName).text().not_null())
        .col(ColumnDef::new(Employees::Patronymic).text().not_null())
        .col(ColumnDef::new(Employees::Telephone).text().not_null())
        .col(ColumnDef::new(Employees::Email).text().not_null())
        .col(ColumnDef::new(Employees::Country).text().not_null())
        .col(ColumnDef::new(Employees::City).text().not_null())
        .to_owned()
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
    #[sea_orm(iden = "firstName")]
    FirstName,
    #[sea_orm(iden = "lastName")]
    LastName,
    Patronymic,
    Telephone,
    Email,
    Country,
    City,
}
