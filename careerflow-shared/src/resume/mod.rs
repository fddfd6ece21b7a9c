/// Profile aggregation and ATS export
///
/// - [`store`]: the [`ProfileStore`] read seam and its PostgreSQL implementation
/// - [`data`]: [`load_resume_data`] and the sorted [`ResumeData`] aggregate
/// - [`ats`]: the structured [`AtsResume`] projection
/// - [`text`], [`keywords`], [`score`]: pure renderings of the aggregate
/// - [`exporter`]: [`AtsExporter`], which loads and renders per user

pub mod ats;
pub mod data;
pub mod exporter;
pub mod keywords;
pub mod score;
pub mod store;
pub mod text;

#[cfg(test)]
pub(crate) mod fixtures;

pub use ats::AtsResume;
pub use data::{load_resume_data, ResumeData, ResumeError};
pub use exporter::AtsExporter;
pub use store::{PgProfileStore, ProfileStore};
