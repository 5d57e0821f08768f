//! Context-keyed template store.
//!
//! A flat mapping from context key (`"area"` or a cluster id) to
//! [`CertificateTemplate`]. Unconfigured keys resolve to a synthesized
//! default rather than an absence, and stored records merge with defaults
//! at load time. The store itself is in-memory only; the persistence call
//! belongs to an external collaborator (see [`crate::boundary`]).

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use super::{CertificateTemplate, FrameStyle};
use crate::boundary::TemplatePersistence;
use crate::error::SelloError;

/// Reserved context key for the organization-wide default template.
pub const AREA_KEY: &str = "area";

/// Display name for the organization-wide template.
const AREA_DISPLAY_NAME: &str = "Organization-wide default";

/// Placeholder display name when a cluster id has no match in the
/// externally supplied cluster list.
const UNKNOWN_CONTEXT_NAME: &str = "Unnamed context";

/// One entry of the externally supplied cluster list. The `"area"` key is
/// implicit and never part of this list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Cluster {
    pub id: String,
    pub name: String,
}

impl Cluster {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// In-memory mapping from context key to template.
///
/// Reads are referentially transparent: `resolve` never mutates the map,
/// and an unseen key synthesizes a fresh default instead of materializing
/// an entry. Concurrent edits to the same key are not arbitrated — the
/// last `upsert` wins.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: IndexMap<String, CertificateTemplate>,
    clusters: Vec<Cluster>,
}

impl TemplateStore {
    /// Create a store over an externally supplied cluster list.
    pub fn new(clusters: Vec<Cluster>) -> Self {
        Self {
            templates: IndexMap::new(),
            clusters,
        }
    }

    /// Return the template for `context_key`.
    ///
    /// A stored entry is cloned with its context key forced back to the map
    /// key it is filed under; an unseen key yields a synthesized template
    /// named after the matching cluster (or a generic placeholder).
    pub fn resolve(&self, context_key: &str) -> CertificateTemplate {
        match self.templates.get(context_key) {
            Some(stored) => {
                let mut template = stored.clone();
                template.context_key = context_key.to_string();
                template
            }
            None => CertificateTemplate::synthesized(
                context_key,
                self.display_name_for(context_key),
            ),
        }
    }

    /// Replace the entry for the template's context key. In-memory only.
    pub fn upsert(&mut self, mut template: CertificateTemplate) {
        sanitize(&mut template);
        debug!(context = %template.context_key, "upsert template");
        self.templates
            .insert(template.context_key.clone(), template);
    }

    /// Load a stored JSON record for `context_key`.
    ///
    /// Absent fields fall back to their serde defaults, which is exactly
    /// the field-wise union of the default template and the stored record.
    pub fn load_record(&mut self, context_key: &str, record: Value) -> Result<(), SelloError> {
        let mut template: CertificateTemplate = serde_json::from_value(record)?;
        template.context_key = context_key.to_string();
        if template.display_name.is_empty() {
            template.display_name = self.display_name_for(context_key);
        }
        self.upsert(template);
        Ok(())
    }

    /// Upsert `template` and hand it to the persistence collaborator.
    ///
    /// On failure the in-memory entry is kept so the operator can retry
    /// without re-entering data; the error is surfaced upward.
    pub fn save_with(
        &mut self,
        template: CertificateTemplate,
        sink: &mut dyn TemplatePersistence,
    ) -> Result<(), SelloError> {
        let key = template.context_key.clone();
        self.upsert(template);
        match self.templates.get(&key) {
            Some(stored) => sink.persist(&key, stored),
            None => Ok(()),
        }
    }

    /// Context keys with a materialized entry, in insertion order.
    pub fn contexts(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// The externally supplied cluster list.
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    fn display_name_for(&self, context_key: &str) -> String {
        if context_key == AREA_KEY {
            return AREA_DISPLAY_NAME.to_string();
        }
        self.clusters
            .iter()
            .find(|c| c.id == context_key)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| UNKNOWN_CONTEXT_NAME.to_string())
    }
}

/// Enforce template invariants on write: `thai-premium` stays reserved for
/// the organization-wide context, and the serial counter starts at 1.
fn sanitize(template: &mut CertificateTemplate) {
    if template.frame_style == FrameStyle::ThaiPremium && template.context_key != AREA_KEY {
        template.frame_style = FrameStyle::SimpleGold;
    }
    if template.serial_start == 0 {
        template.serial_start = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> TemplateStore {
        TemplateStore::new(vec![
            Cluster::new("cluster-1", "North Cluster"),
            Cluster::new("cluster-2", "South Cluster"),
        ])
    }

    #[test]
    fn test_resolve_unseen_cluster_synthesizes() {
        let s = store();
        let t = s.resolve("cluster-9");
        assert_eq!(t.context_key, "cluster-9");
        assert_eq!(t.frame_style, FrameStyle::SimpleGold);
        assert_eq!(t.serial_start, 1);
        assert_eq!(t.display_name, UNKNOWN_CONTEXT_NAME);
    }

    #[test]
    fn test_resolve_known_cluster_display_name() {
        let s = store();
        assert_eq!(s.resolve("cluster-1").display_name, "North Cluster");
    }

    #[test]
    fn test_resolve_area_display_name() {
        let s = store();
        let t = s.resolve(AREA_KEY);
        assert_eq!(t.context_key, AREA_KEY);
        assert_eq!(t.display_name, AREA_DISPLAY_NAME);
    }

    #[test]
    fn test_resolve_is_referentially_transparent() {
        let s = store();
        assert_eq!(s.resolve("cluster-1"), s.resolve("cluster-1"));
        // Resolving does not materialize an entry.
        assert_eq!(s.contexts().count(), 0);
    }

    #[test]
    fn test_upsert_then_resolve() {
        let mut s = store();
        let mut t = s.resolve("cluster-1");
        t.event_name = "Jamboree".into();
        s.upsert(t.clone());
        assert_eq!(s.resolve("cluster-1"), t);
    }

    #[test]
    fn test_context_key_never_diverges_from_map_key() {
        let mut s = store();
        // A record loaded under one key keeps that key even if the raw
        // record carried a different (stale) one.
        s.load_record("cluster-2", json!({"context_key": "stale"}))
            .unwrap();
        assert_eq!(s.resolve("cluster-2").context_key, "cluster-2");
        assert_eq!(s.contexts().collect::<Vec<_>>(), vec!["cluster-2"]);
    }

    #[test]
    fn test_thai_premium_downgraded_for_clusters() {
        let mut s = store();
        let mut t = s.resolve("cluster-1");
        t.frame_style = FrameStyle::ThaiPremium;
        s.upsert(t);
        assert_eq!(s.resolve("cluster-1").frame_style, FrameStyle::SimpleGold);
    }

    #[test]
    fn test_thai_premium_allowed_for_area() {
        let mut s = store();
        let mut t = s.resolve(AREA_KEY);
        t.frame_style = FrameStyle::ThaiPremium;
        s.upsert(t);
        assert_eq!(s.resolve(AREA_KEY).frame_style, FrameStyle::ThaiPremium);
    }

    #[test]
    fn test_load_partial_record() {
        let mut s = store();
        s.load_record(
            "cluster-2",
            json!({"event_name": "Science Fair", "serial_start": 0}),
        )
        .unwrap();
        let t = s.resolve("cluster-2");
        assert_eq!(t.event_name, "Science Fair");
        assert_eq!(t.display_name, "South Cluster");
        // serial_start clamped to 1 on load.
        assert_eq!(t.serial_start, 1);
        // Absent fields fell back to defaults.
        assert_eq!(t.serial_format, "{run:4}");
    }

    #[test]
    fn test_load_record_bad_json_is_error() {
        let mut s = store();
        let err = s.load_record("cluster-1", json!({"serial_start": "not-a-number"}));
        assert!(err.is_err());
    }

    #[test]
    fn test_save_with_failure_keeps_entry() {
        struct FailingSink;
        impl TemplatePersistence for FailingSink {
            fn persist(
                &mut self,
                _context_key: &str,
                _template: &CertificateTemplate,
            ) -> Result<(), SelloError> {
                Err(SelloError::Persistence("storage offline".into()))
            }
        }

        let mut s = store();
        let mut t = s.resolve("cluster-1");
        t.event_name = "Jamboree".into();
        let result = s.save_with(t.clone(), &mut FailingSink);
        assert!(result.is_err());
        // The edit survives for a retry.
        assert_eq!(s.resolve("cluster-1").event_name, "Jamboree");
    }

    #[test]
    fn test_last_writer_wins() {
        let mut s = store();
        let mut a = s.resolve("cluster-1");
        let mut b = s.resolve("cluster-1");
        a.event_name = "First".into();
        b.event_name = "Second".into();
        s.upsert(a);
        s.upsert(b);
        assert_eq!(s.resolve("cluster-1").event_name, "Second");
    }
}
