//! Data models for document categories, extraction results and configuration.

pub mod category;
pub mod config;
pub mod document;
