//! Join entity for team membership
//!
//! Team membership is modeled as its own entity rather than a bare join
//! table so callers can read membership rows (and their timestamps)
//! directly.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "organization_team_employee")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub organization_team_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false)]
    pub employee_id: Uuid,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organization_team::Entity",
        from = "Column::OrganizationTeamId",
        to = "super::organization_team::Column::Id",
        on_delete = "Cascade"
    )]
    Team,

    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id",
        on_delete = "Cascade"
    )]
    Employee,
}

impl Related<super::organization_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
