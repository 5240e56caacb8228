//! Catsync Core
//!
//! Core types for the catalog sync client.
//!
//! This crate contains:
//! - Domain types: Catalog entities (Item, Job, JobStatus)
//! - DTOs: Wire-level request and response shapes for the catalog API

pub mod domain;
pub mod dto;
