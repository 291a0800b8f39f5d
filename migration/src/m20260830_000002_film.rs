use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Film::Table)
                    .if_not_exists()
                    .col(pk_auto(Film::Id))
                    .col(string(Film::Title))
                    .col(string_null(Film::Director))
                    .col(string_null(Film::Producer))
                    .col(integer_null(Film::EpisodeId))
                    .col(text_null(Film::OpeningCrawl))
                    .col(date_null(Film::ReleaseDate))
                    .col(string_null(Film::Url))
                    .col(timestamp(Film::Created))
                    .col(timestamp(Film::Edited))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Film::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Film {
    Table,
    Id,
    Title,
    Director,
    Producer,
    EpisodeId,
    OpeningCrawl,
    ReleaseDate,
    Url,
    Created,
    Edited,
}
