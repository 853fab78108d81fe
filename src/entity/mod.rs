//! Entity module - SeaORM entity definitions
//!
//! One module per table of the memorandum schema

pub mod destinasi;
pub mod kegiatan_ref;
pub mod nota_dinas;
pub mod nota_peserta;
pub mod nota_preview;
pub mod nota_tujuan;
pub mod pegawai;
pub mod pejabat;
