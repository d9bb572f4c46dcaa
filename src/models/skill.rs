//! Skill entity model

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Named skill attachable to employees (unique per tenant by name)
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
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
    #[sea_orm(has_many = "super::skill_employee::Entity")]
    SkillEmployee,
}

impl Related<super::skill_employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SkillEmployee.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        super::skill_employee::Relation::Employee.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::skill_employee::Relation::Skill.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
