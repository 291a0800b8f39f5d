use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub skin_color: Option<String>,
    pub homeworld_id: Option<i32>,
    pub url: Option<String>,
    pub created: DateTime,
    pub edited: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::HomeworldId",
        to = "super::planet::Column::Id",
        on_delete = "SetNull"
    )]
    Planet,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_character::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_character::Relation::Character.def().rev())
    }
}

impl Related<super::specie::Entity> for Entity {
    fn to() -> RelationDef {
        super::character_specie::Relation::Specie.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::character_specie::Relation::Character.def().rev())
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        super::vehicle_pilot::Relation::Vehicle.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::vehicle_pilot::Relation::Character.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
