//! HTTP handlers

pub mod health;
pub mod movie_download;
pub mod movie_list;
pub mod movie_update;
pub mod movie_upload;
pub mod sort_fields;
