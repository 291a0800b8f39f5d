use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "specie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub classification: Option<String>,
    pub designation: Option<String>,
    pub average_height: Option<i32>,
    pub average_lifespan: Option<i32>,
    pub eye_colors: Option<String>,
    pub hair_colors: Option<String>,
    pub skin_colors: Option<String>,
    pub language: Option<String>,
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
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        super::character_specie::Relation::Character.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::character_specie::Relation::Specie.def().rev())
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_specie::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_specie::Relation::Specie.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
