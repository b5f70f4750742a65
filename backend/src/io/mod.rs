//! # IO Module
//!
//! Adapters between the domain layer and external collaborators: DTO mapping
//! for whatever UI consumes the services, and the image-input adapter that
//! turns raw image files into the opaque data-URL strings the photo gallery
//! stores.

pub mod mappers;
pub mod photos;
