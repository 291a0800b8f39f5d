use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260830_000002_film::Film, m20260830_000003_character::Character};

static FK_FILM_CHARACTER_FILM_ID: &str = "fk_film_character_film_id";
static FK_FILM_CHARACTER_CHARACTER_ID: &str = "fk_film_character_character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FilmCharacter::Table)
                    .if_not_exists()
                    .col(integer(FilmCharacter::FilmId))
                    .col(integer(FilmCharacter::CharacterId))
                    .primary_key(
                        Index::create()
                            .col(FilmCharacter::FilmId)
                            .col(FilmCharacter::CharacterId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FILM_CHARACTER_FILM_ID)
                    .from_tbl(FilmCharacter::Table)
                    .from_col(FilmCharacter::FilmId)
                    .to_tbl(Film::Table)
                    .to_col(Film::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FILM_CHARACTER_CHARACTER_ID)
                    .from_tbl(FilmCharacter::Table)
                    .from_col(FilmCharacter::CharacterId)
                    .to_tbl(Character::Table)
                    .to_col(Character::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_FILM_CHARACTER_CHARACTER_ID, FK_FILM_CHARACTER_FILM_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(FilmCharacter::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(FilmCharacter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FilmCharacter {
    Table,
    FilmId,
    CharacterId,
}
