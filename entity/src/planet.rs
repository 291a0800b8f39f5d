use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub diameter: Option<i64>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
    pub url: Option<String>,
    pub created: DateTime,
    pub edited: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::character::Entity")]
    Character,
    #[sea_orm(has_many = "super::specie::Entity")]
    Specie,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl Related<super::specie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Specie.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_planet::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_planet::Relation::Planet.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
