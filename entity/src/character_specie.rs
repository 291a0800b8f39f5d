use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character_specie")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub character_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub specie_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::character::Entity",
        from = "Column::CharacterId",
        to = "super::character::Column::Id",
        on_delete = "Cascade"
    )]
    Character,
    #[sea_orm(
        belongs_to = "super::specie::Entity",
        from = "Column::SpecieId",
        to = "super::specie::Column::Id",
        on_delete = "Cascade"
    )]
    Specie,
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

impl ActiveModelBehavior for ActiveModel {}
