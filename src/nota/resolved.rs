//! Denormalized view of a staged form

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::form::NotaForm;
use crate::entity::{destinasi, kegiatan_ref, pegawai, pejabat};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPejabat {
    pub id: Uuid,
    pub nama: String,
    pub nip: Option<String>,
    pub jabatan: String,
    pub unit: Option<String>,
}

impl From<pejabat::Model> for ResolvedPejabat {
    fn from(m: pejabat::Model) -> Self {
        Self {
            id: m.id,
            nama: m.nama,
            nip: m.nip,
            jabatan: m.jabatan,
            unit: m.unit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPegawai {
    pub id: Uuid,
    pub nama: String,
    pub nip: String,
    pub pangkat: String,
    pub golongan: String,
    pub jabatan: String,
}

impl From<pegawai::Model> for ResolvedPegawai {
    fn from(m: pegawai::Model) -> Self {
        Self {
            id: m.id,
            nama: m.nama,
            nip: m.nip,
            pangkat: m.pangkat,
            golongan: m.golongan,
            jabatan: m.jabatan,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDestinasi {
    pub id: Uuid,
    pub nama: String,
}

impl From<destinasi::Model> for ResolvedDestinasi {
    fn from(m: destinasi::Model) -> Self {
        Self {
            id: m.id,
            nama: m.nama,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedKegiatan {
    pub kode: String,
    pub nama: String,
}

impl From<kegiatan_ref::Model> for ResolvedKegiatan {
    fn from(m: kegiatan_ref::Model) -> Self {
        Self {
            kode: m.kode,
            nama: m.nama,
        }
    }
}

/// A staged form together with every record it references.
///
/// References that no longer exist are absent; the lists may be shorter than
/// the id lists of the form but keep their order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedNota {
    #[serde(flatten)]
    pub form: NotaForm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yth_pejabat: Option<ResolvedPejabat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dari_pejabat: Option<ResolvedPejabat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penandatangan_pejabat: Option<ResolvedPejabat>,
    pub tujuan_list: Vec<ResolvedDestinasi>,
    pub peserta_list: Vec<ResolvedPegawai>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kegiatan_data: Option<ResolvedKegiatan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_kegiatan_data: Option<ResolvedKegiatan>,
}

impl ResolvedNota {
    /// A view with nothing resolved yet
    pub fn unresolved(form: NotaForm) -> Self {
        Self {
            form,
            yth_pejabat: None,
            dari_pejabat: None,
            penandatangan_pejabat: None,
            tujuan_list: Vec::new(),
            peserta_list: Vec::new(),
            kegiatan_data: None,
            sub_kegiatan_data: None,
        }
    }
}
