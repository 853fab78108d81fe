//! NotaPeserta entity - ordered travellers of a memorandum
//!
//! Table: nota_peserta

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "nota_peserta")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub nota_id: Uuid,

    pub pegawai_id: Uuid,

    /// 1-based position within the memorandum
    pub no_urut: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::nota_dinas::Entity",
        from = "Column::NotaId",
        to = "super::nota_dinas::Column::Id",
        on_delete = "Cascade",
        fk_name = "fk-nota_peserta-nota"
    )]
    NotaDinas,
    #[sea_orm(
        belongs_to = "super::pegawai::Entity",
        from = "Column::PegawaiId",
        to = "super::pegawai::Column::Id",
        fk_name = "fk-nota_peserta-pegawai"
    )]
    Pegawai,
}

impl Related<super::nota_dinas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NotaDinas.def()
    }
}

impl Related<super::pegawai::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pegawai.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
