//! Memorandum domain logic that needs no database
//!
//! - `form`: the staged form value object, its validation and completion gate
//! - `number`: the document number template
//! - `resolved`: the denormalized view a draft resolves into
//! - `render`: the printable document layout

pub mod form;
pub mod number;
pub mod render;
pub mod resolved;

pub use form::NotaForm;
pub use render::{render, NotaDocument};
pub use resolved::ResolvedNota;
