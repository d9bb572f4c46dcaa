//! Tag entity model

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Free-form label attachable to employees (unique per tenant by name)
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub tenant_id: Uuid,

    pub name: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tag_employee::Entity")]
    TagEmployee,
}

impl Related<super::tag_employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TagEmployee.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        super::tag_employee::Relation::Employee.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::tag_employee::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
