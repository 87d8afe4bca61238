//! Application services

pub mod catalog;

pub use catalog::{MovieCatalog, UploadedFile};
