//! Sextant API - Wire-boundary model definitions
//!
//! This crate provides:
//! - Catalog DTOs exchanged at the API boundary for registered applications
//! - Service-broker response models
//!
//! The models here are transport-agnostic: the resolver layer hands them in
//! and out, and the converter core maps them to and from the domain model.

pub mod broker;
pub mod catalog;
