use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "collections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::collection_product::Entity")]
    CollectionProduct,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        super::collection_product::Relation::Product.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::collection_product::Relation::Collection.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
