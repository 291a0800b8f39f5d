use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "film")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub episode_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub opening_crawl: Option<String>,
    pub release_date: Option<Date>,
    pub url: Option<String>,
    pub created: DateTime,
    pub edited: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_character::Relation::Character.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_character::Relation::Film.def().rev())
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_planet::Relation::Planet.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_planet::Relation::Film.def().rev())
    }
}

impl Related<super::specie::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_specie::Relation::Specie.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_specie::Relation::Film.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
