//! Permanent memorandum records
//!
//! A memorandum is written as one master row plus its ordered participant
//! and destination rows, inside a single transaction. Nothing is left behind
//! when any insert fails.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionError, TransactionTrait,
};
use serde::Serialize;
use uuid::Uuid;

use super::{draft, resolve};
use crate::entity::nota_dinas::{self, NotaStatus};
use crate::entity::{destinasi, nota_peserta, nota_tujuan, pegawai};
use crate::error::{constraint_violation, AppError, AppResult, Constraint, OptionExt};
use crate::nota::form::NewNota;

pub const NOMOR_TAKEN: &str = "Nomor Nota Dinas sudah terdaftar";
const NOT_FOUND: &str = "Nota Dinas tidak ditemukan";
const STALE_REFERENCE: &str = "Data pejabat, pegawai, atau destinasi pada draft sudah tidak tersedia";

/// Turn a draft into a permanent memorandum and drop the draft.
///
/// Returns the id of the new memorandum.
pub async fn persist_draft(db: &DatabaseConnection, draft_id: Uuid) -> AppResult<Uuid> {
    let resolved = resolve::resolve_draft(db, draft_id).await?;
    tracing::info!(
        "Persisting draft {} ({} tujuan, {} peserta resolved)",
        draft_id,
        resolved.tujuan_list.len(),
        resolved.peserta_list.len()
    );

    let input = NewNota::from_form(&resolved.form).map_err(AppError::Validation)?;
    let nota = create_nota(db, input).await?;

    // The memorandum is committed; a leftover draft is only logged
    match draft::delete_draft(db, draft_id).await {
        Ok(_) => tracing::debug!("Draft {} removed", draft_id),
        Err(e) => tracing::warn!("Failed to delete draft {}: {}", draft_id, e),
    }

    Ok(nota.id)
}

/// Insert a memorandum with its participants and destinations
pub async fn create_nota(db: &DatabaseConnection, input: NewNota) -> AppResult<nota_dinas::Model> {
    let result = db
        .transaction::<_, nota_dinas::Model, DbErr>(|txn| {
            Box::pin(async move {
                let now = Utc::now();
                let nota = nota_dinas::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    nomor: Set(input.nomor),
                    tanggal: Set(input.tanggal),
                    yth_pejabat_id: Set(input.yth_pejabat_id),
                    dari_pejabat_id: Set(input.dari_pejabat_id),
                    tembusan: Set(input.tembusan),
                    sifat: Set(input.sifat),
                    lampiran: Set(input.lampiran),
                    hal: Set(input.hal),
                    maksud: Set(input.maksud),
                    kegiatan_kode: Set(input.kegiatan_kode),
                    sub_kegiatan_kode: Set(input.sub_kegiatan_kode),
                    penandatangan_pejabat_id: Set(input.penandatangan_pejabat_id),
                    status: Set(NotaStatus::Draft),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(txn)
                .await?;

                if !input.peserta_pegawai_ids.is_empty() {
                    let rows = input
                        .peserta_pegawai_ids
                        .iter()
                        .enumerate()
                        .map(|(i, pegawai_id)| nota_peserta::ActiveModel {
                            id: Set(Uuid::new_v4()),
                            nota_id: Set(nota.id),
                            pegawai_id: Set(*pegawai_id),
                            no_urut: Set(i as i32 + 1),
                        });
                    nota_peserta::Entity::insert_many(rows)
                        .exec_without_returning(txn)
                        .await?;
                }

                if !input.tujuan_ids.is_empty() {
                    let rows = input
                        .tujuan_ids
                        .iter()
                        .enumerate()
                        .map(|(i, destinasi_id)| nota_tujuan::ActiveModel {
                            id: Set(Uuid::new_v4()),
                            nota_id: Set(nota.id),
                            destinasi_id: Set(*destinasi_id),
                            no_urut: Set(i as i32 + 1),
                        });
                    nota_tujuan::Entity::insert_many(rows)
                        .exec_without_returning(txn)
                        .await?;
                }

                Ok(nota)
            })
        })
        .await;

    match result {
        Ok(nota) => {
            tracing::info!("Nota Dinas created: {} ({})", nota.nomor, nota.id);
            Ok(nota)
        }
        Err(TransactionError::Connection(db_err)) | Err(TransactionError::Transaction(db_err)) => {
            Err(match constraint_violation(&db_err) {
                Some((Constraint::Unique, raw)) => {
                    tracing::warn!("Duplicate nomor rejected: {}", raw);
                    AppError::Duplicate {
                        field: "nomor".to_string(),
                        message: NOMOR_TAKEN.to_string(),
                    }
                }
                Some((Constraint::ForeignKey, raw)) => {
                    tracing::warn!("Nota Dinas references a missing row: {}", raw);
                    AppError::BadRequest(STALE_REFERENCE.to_string())
                }
                None => {
                    tracing::error!("Failed to create Nota Dinas: {}", db_err);
                    AppError::Database(db_err)
                }
            })
        }
    }
}

/// Row of the memorandum table
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotaListRow {
    pub id: Uuid,
    pub nomor: String,
    pub tanggal: NaiveDate,
    pub status: NotaStatus,
}

/// Newest first, then by number
pub async fn list_nota(db: &DatabaseConnection) -> AppResult<Vec<NotaListRow>> {
    let rows = nota_dinas::Entity::find()
        .order_by_desc(nota_dinas::Column::Tanggal)
        .order_by_asc(nota_dinas::Column::Nomor)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|m| NotaListRow {
            id: m.id,
            nomor: m.nomor,
            tanggal: m.tanggal,
            status: m.status,
        })
        .collect())
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TujuanItem {
    pub id: Uuid,
    pub nama: String,
    pub no_urut: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PesertaItem {
    pub id: Uuid,
    pub nama: String,
    pub nip: String,
    pub pangkat: String,
    pub golongan: String,
    pub jabatan: String,
    pub no_urut: i32,
}

/// A memorandum with its destinations and participants in stored order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotaDetail {
    pub id: Uuid,
    pub nomor: String,
    pub tanggal: NaiveDate,
    pub status: NotaStatus,
    pub tembusan: String,
    pub sifat: String,
    pub lampiran: String,
    pub hal: String,
    pub maksud: Option<String>,
    pub kegiatan_kode: Option<String>,
    pub sub_kegiatan_kode: Option<String>,
    pub tujuan: Vec<TujuanItem>,
    pub peserta: Vec<PesertaItem>,
}

pub async fn nota_detail(db: &DatabaseConnection, id: Uuid) -> AppResult<NotaDetail> {
    let nota = nota_dinas::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_not_found(NOT_FOUND)?;

    let tujuan = nota_tujuan::Entity::find()
        .filter(nota_tujuan::Column::NotaId.eq(id))
        .order_by_asc(nota_tujuan::Column::NoUrut)
        .find_also_related(destinasi::Entity)
        .all(db)
        .await?
        .into_iter()
        .filter_map(|(row, d)| {
            d.map(|d| TujuanItem {
                id: d.id,
                nama: d.nama,
                no_urut: row.no_urut,
            })
        })
        .collect();

    let peserta = nota_peserta::Entity::find()
        .filter(nota_peserta::Column::NotaId.eq(id))
        .order_by_asc(nota_peserta::Column::NoUrut)
        .find_also_related(pegawai::Entity)
        .all(db)
        .await?
        .into_iter()
        .filter_map(|(row, p)| {
            p.map(|p| PesertaItem {
                id: p.id,
                nama: p.nama,
                nip: p.nip,
                pangkat: p.pangkat,
                golongan: p.golongan,
                jabatan: p.jabatan,
                no_urut: row.no_urut,
            })
        })
        .collect();

    Ok(NotaDetail {
        id: nota.id,
        nomor: nota.nomor,
        tanggal: nota.tanggal,
        status: nota.status,
        tembusan: nota.tembusan,
        sifat: nota.sifat,
        lampiran: nota.lampiran,
        hal: nota.hal,
        maksud: nota.maksud,
        kegiatan_kode: nota.kegiatan_kode,
        sub_kegiatan_kode: nota.sub_kegiatan_kode,
        tujuan,
        peserta,
    })
}

pub async fn update_status(
    db: &DatabaseConnection,
    id: Uuid,
    status: NotaStatus,
) -> AppResult<nota_dinas::Model> {
    nota_dinas::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_not_found(NOT_FOUND)?;

    let model = nota_dinas::ActiveModel {
        id: Set(id),
        status: Set(status),
        updated_at: Set(Utc::now()),
        ..Default::default()
    };
    let updated = model
        .update(db)
        .await
        .map_err(|e| super::update_error(e, NOT_FOUND))?;

    tracing::info!("Nota Dinas {} status set to {:?}", updated.nomor, updated.status);
    Ok(updated)
}
