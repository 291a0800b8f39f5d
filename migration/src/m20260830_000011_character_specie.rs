use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260830_000003_character::Character, m20260830_000004_specie::Specie};

static FK_CHARACTER_SPECIE_CHARACTER_ID: &str = "fk_character_specie_character_id";
static FK_CHARACTER_SPECIE_SPECIE_ID: &str = "fk_character_specie_specie_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CharacterSpecie::Table)
                    .if_not_exists()
                    .col(integer(CharacterSpecie::CharacterId))
                    .col(integer(CharacterSpecie::SpecieId))
                    .primary_key(
                        Index::create()
                            .col(CharacterSpecie::CharacterId)
                            .col(CharacterSpecie::SpecieId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_SPECIE_CHARACTER_ID)
                    .from_tbl(CharacterSpecie::Table)
                    .from_col(CharacterSpecie::CharacterId)
                    .to_tbl(Character::Table)
                    .to_col(Character::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_SPECIE_SPECIE_ID)
                    .from_tbl(CharacterSpecie::Table)
                    .from_col(CharacterSpecie::SpecieId)
                    .to_tbl(Specie::Table)
                    .to_col(Specie::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_CHARACTER_SPECIE_SPECIE_ID,
            FK_CHARACTER_SPECIE_CHARACTER_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(CharacterSpecie::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(CharacterSpecie::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CharacterSpecie {
    Table,
    CharacterId,
    SpecieId,
}
