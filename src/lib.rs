//! # Sello - Certificate Document Engine
//!
//! Sello turns declarative certificate templates into printable A4
//! documents. It provides:
//!
//! - **Template model**: one template per context (organization-wide
//!   default or per-cluster override), merged with defaults on load
//! - **Serial formatter**: the `{activityId}` / `{year}` / `{th_year}` /
//!   `{id}` / `{run:N}` placeholder mini-language
//! - **Font cascade**: six text roles resolved against one template-wide
//!   default
//! - **Layout compositor**: millimeter offsets and frame geometry
//! - **Document renderer**: standalone markup + embedded stylesheet
//!
//! ## Quick Start
//!
//! ```
//! use sello::{
//!     render::{self, RecipientSample},
//!     template::{Cluster, TemplateStore},
//! };
//!
//! let store = TemplateStore::new(vec![Cluster::new("cluster-1", "North Cluster")]);
//!
//! // Unconfigured contexts synthesize a ready-to-edit template.
//! let mut template = store.resolve("cluster-1");
//! template.event_name = "Scout Jamboree 2024".into();
//!
//! let sample = RecipientSample {
//!     name: "Somchai R.".into(),
//!     activity_id: "ACT01".into(),
//!     year: Some(2024),
//!     ..Default::default()
//! };
//!
//! let doc = render::render(&template, &sample, 1);
//! assert!(doc.html.contains("Scout Jamboree 2024"));
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`template`] | Template model and context store |
//! | [`serial`] | Serial-number mini-language |
//! | [`fonts`] | Font-role cascade |
//! | [`layout`] | Millimeter layout and frame geometry |
//! | [`render`] | Document renderer |
//! | [`boundary`] | External collaborator traits |
//! | [`error`] | Error types |
//!
//! The engine proper is pure and synchronous; image upload and persistence
//! are owned by external collaborators behind the [`boundary`] traits.

pub mod boundary;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod render;
pub mod serial;
pub mod template;

// Re-exports for convenience
pub use error::SelloError;
pub use render::{RecipientSample, RenderedDocument};
pub use template::{CertificateTemplate, FrameStyle, Signatory, TemplateStore};
