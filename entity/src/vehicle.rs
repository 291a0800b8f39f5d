use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub model: String,
    pub vehicle_class: String,
    pub manufacturer: Option<String>,
    pub length_m: Option<f64>,
    pub cost_in_credits: Option<i64>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub max_atmosphering_speed: Option<i32>,
    pub cargo_capacity: Option<i64>,
    pub consumables: Option<String>,
    pub url: Option<String>,
    pub created: DateTime,
    pub edited: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        super::vehicle_pilot::Relation::Character.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::vehicle_pilot::Relation::Vehicle.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
