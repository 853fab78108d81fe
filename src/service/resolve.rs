//! Reference resolution
//!
//! Each reference kind is fetched with one batch lookup. Missing rows are
//! dropped silently; the id order of the form is kept.

use std::collections::HashMap;

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use super::draft;
use crate::entity::{destinasi, kegiatan_ref, pegawai, pejabat};
use crate::error::AppResult;
use crate::nota::resolved::{ResolvedDestinasi, ResolvedKegiatan, ResolvedPegawai, ResolvedPejabat};
use crate::nota::{NotaForm, ResolvedNota};

/// Resolve every reference of a form
pub async fn resolve_form<C: ConnectionTrait>(db: &C, form: NotaForm) -> AppResult<ResolvedNota> {
    let mut resolved = ResolvedNota::unresolved(form);
    let form = &resolved.form;

    // Officials
    let pejabat_ids: Vec<Uuid> = [
        form.yth_pejabat_id,
        form.dari_pejabat_id,
        form.penandatangan_pejabat_id,
    ]
    .into_iter()
    .flatten()
    .collect();
    let mut pejabat_map: HashMap<Uuid, ResolvedPejabat> = HashMap::new();
    if !pejabat_ids.is_empty() {
        pejabat_map = pejabat::Entity::find()
            .filter(pejabat::Column::Id.is_in(pejabat_ids.clone()))
            .all(db)
            .await?
            .into_iter()
            .map(|m| (m.id, ResolvedPejabat::from(m)))
            .collect();
    }
    let lookup_pejabat = |id: Option<Uuid>| id.and_then(|id| pejabat_map.get(&id).cloned());
    let yth_pejabat = lookup_pejabat(form.yth_pejabat_id);
    let dari_pejabat = lookup_pejabat(form.dari_pejabat_id);
    let penandatangan_pejabat = lookup_pejabat(form.penandatangan_pejabat_id);

    // Destinations
    let tujuan_list = if form.tujuan_ids.is_empty() {
        Vec::new()
    } else {
        let found: HashMap<Uuid, ResolvedDestinasi> = destinasi::Entity::find()
            .filter(destinasi::Column::Id.is_in(form.tujuan_ids.clone()))
            .all(db)
            .await?
            .into_iter()
            .map(|m| (m.id, ResolvedDestinasi::from(m)))
            .collect();
        in_order(&form.tujuan_ids, &found)
    };

    // Participants
    let peserta_list = if form.peserta_pegawai_ids.is_empty() {
        Vec::new()
    } else {
        let found: HashMap<Uuid, ResolvedPegawai> = pegawai::Entity::find()
            .filter(pegawai::Column::Id.is_in(form.peserta_pegawai_ids.clone()))
            .all(db)
            .await?
            .into_iter()
            .map(|m| (m.id, ResolvedPegawai::from(m)))
            .collect();
        in_order(&form.peserta_pegawai_ids, &found)
    };

    // Activity codes
    let kodes: Vec<String> = [form.kegiatan_kode.clone(), form.sub_kegiatan_kode.clone()]
        .into_iter()
        .flatten()
        .collect();
    let mut kegiatan_map: HashMap<String, ResolvedKegiatan> = HashMap::new();
    if !kodes.is_empty() {
        kegiatan_map = kegiatan_ref::Entity::find()
            .filter(kegiatan_ref::Column::Kode.is_in(kodes))
            .all(db)
            .await?
            .into_iter()
            .map(|m| (m.kode.clone(), ResolvedKegiatan::from(m)))
            .collect();
    }
    let kegiatan_data = form
        .kegiatan_kode
        .as_ref()
        .and_then(|k| kegiatan_map.get(k).cloned());
    let sub_kegiatan_data = form
        .sub_kegiatan_kode
        .as_ref()
        .and_then(|k| kegiatan_map.get(k).cloned());

    tracing::debug!(
        pejabat = pejabat_ids.len(),
        tujuan = tujuan_list.len(),
        peserta = peserta_list.len(),
        kegiatan = kegiatan_data.is_some(),
        sub_kegiatan = sub_kegiatan_data.is_some(),
        "Draft references resolved"
    );

    resolved.yth_pejabat = yth_pejabat;
    resolved.dari_pejabat = dari_pejabat;
    resolved.penandatangan_pejabat = penandatangan_pejabat;
    resolved.tujuan_list = tujuan_list;
    resolved.peserta_list = peserta_list;
    resolved.kegiatan_data = kegiatan_data;
    resolved.sub_kegiatan_data = sub_kegiatan_data;
    Ok(resolved)
}

/// Load a draft and resolve its references
pub async fn resolve_draft<C: ConnectionTrait>(db: &C, id: Uuid) -> AppResult<ResolvedNota> {
    let form = draft::load_draft(db, id).await?;
    resolve_form(db, form).await
}

// Project found rows onto the requested id order. A repeated id yields the
// row again.
fn in_order<T: Clone>(ids: &[Uuid], found: &HashMap<Uuid, T>) -> Vec<T> {
    ids.iter().filter_map(|id| found.get(id).cloned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{seed_destinasi, seed_kegiatan, seed_pegawai, seed_pejabat, setup_test_db};

    #[tokio::test]
    async fn test_resolution_keeps_order_and_drops_missing() {
        let db = setup_test_db().await;
        let a = seed_pegawai(&db, "Andi", "198001012006041001").await;
        let b = seed_pegawai(&db, "Budi", "198001012006041002").await;
        let pku = seed_destinasi(&db, "Pekanbaru").await;
        let jkt = seed_destinasi(&db, "Jakarta").await;

        let form = NotaForm {
            tujuan_ids: vec![jkt.id, Uuid::new_v4(), pku.id],
            peserta_pegawai_ids: vec![b.id, a.id, Uuid::new_v4()],
            ..NotaForm::default()
        };
        let resolved = resolve_form(&db, form.clone()).await.unwrap();

        let tujuan: Vec<&str> = resolved.tujuan_list.iter().map(|t| t.nama.as_str()).collect();
        assert_eq!(tujuan, vec!["Jakarta", "Pekanbaru"]);
        let peserta: Vec<&str> = resolved.peserta_list.iter().map(|p| p.nama.as_str()).collect();
        assert_eq!(peserta, vec!["Budi", "Andi"]);
        // the staged form itself is untouched
        assert_eq!(resolved.form, form);
    }

    #[tokio::test]
    async fn test_officials_and_codes() {
        let db = setup_test_db().await;
        let kaban = seed_pejabat(&db, "Kepala Badan").await;
        let sekban = seed_pejabat(&db, "Sekretaris").await;
        seed_kegiatan(&db, "5.02.02.2.03", "Koordinasi Akuntansi", 5).await;

        let form = NotaForm {
            yth_pejabat_id: Some(kaban.id),
            dari_pejabat_id: Some(sekban.id),
            penandatangan_pejabat_id: Some(Uuid::new_v4()),
            kegiatan_kode: Some("5.02.02.2.03".to_string()),
            sub_kegiatan_kode: Some("9.99".to_string()),
            ..NotaForm::default()
        };
        let resolved = resolve_form(&db, form).await.unwrap();

        assert_eq!(resolved.yth_pejabat.unwrap().nama, "Kepala Badan");
        assert_eq!(resolved.dari_pejabat.unwrap().id, sekban.id);
        assert!(resolved.penandatangan_pejabat.is_none());
        assert_eq!(resolved.kegiatan_data.unwrap().nama, "Koordinasi Akuntansi");
        assert!(resolved.sub_kegiatan_data.is_none());
    }

    #[tokio::test]
    async fn test_resolve_missing_draft() {
        let db = setup_test_db().await;
        assert!(matches!(
            resolve_draft(&db, Uuid::new_v4()).await,
            Err(crate::error::AppError::NotFound(_))
        ));
    }
}
