//! Request handlers module

pub mod config;
pub mod destinasi;
pub mod kegiatan;
pub mod nota;
pub mod pegawai;
pub mod pejabat;
pub mod preview;

use serde::Deserialize;
use uuid::Uuid;

/// `?id=` query of info and delete endpoints
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Uuid,
}
