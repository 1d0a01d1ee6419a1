use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "message")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub author_id: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::postboard_user::Entity",
        from = "Column::AuthorId",
        to = "super::postboard_user::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    PostboardUser,
}

impl Related<super::postboard_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostboardUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
