//! Font-role resolution.
//!
//! Six text roles resolve independently against a single template-wide
//! default: role override → template `font_family` → system default.
//! Exactly two fallback hops, deterministic, no traversal — a pure lookup.

use crate::template::CertificateTemplate;

/// Fallback family when neither a role override nor the template default
/// is set.
pub const SYSTEM_DEFAULT_FONT: &str = "Sarabun";

/// Concrete font family per text role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFonts {
    pub header: String,
    pub sub_header: String,
    pub name: String,
    pub body: String,
    pub date: String,
    pub signatures: String,
}

/// Resolve all six roles against `template`. Empty strings count as unset.
pub fn resolve(template: &CertificateTemplate) -> ResolvedFonts {
    let default = non_empty(template.font_family.as_deref()).unwrap_or(SYSTEM_DEFAULT_FONT);
    let pick = |role: Option<&str>| non_empty(role).unwrap_or(default).to_string();
    ResolvedFonts {
        header: pick(template.fonts.header.as_deref()),
        sub_header: pick(template.fonts.sub_header.as_deref()),
        name: pick(template.fonts.name.as_deref()),
        body: pick(template.fonts.body.as_deref()),
        date: pick(template.fonts.date.as_deref()),
        signatures: pick(template.fonts.signatures.as_deref()),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
