//! # Certificate Template Model
//!
//! The unit of configuration, keyed by a context identifier. All types
//! derive `Serialize + Deserialize` so the same structs work for Rust API
//! construction and for stored JSON records; `#[serde(default)]` on every
//! overridable field means deserializing a partial record *is* the
//! field-wise union with defaults — absent fields fall back without any
//! merge machinery.
//!
//! ```
//! use sello::template::CertificateTemplate;
//!
//! let partial = r#"{"event_name": "Scout Jamboree 2024", "serial_start": 12}"#;
//! let t: CertificateTemplate = serde_json::from_str(partial).unwrap();
//! assert_eq!(t.serial_start, 12);
//! assert_eq!(t.serial_format, "{run:4}"); // defaulted
//! ```

pub mod store;

pub use store::{AREA_KEY, Cluster, TemplateStore};

use serde::{Deserialize, Serialize};

use crate::serial;

/// Decorative border geometry used when no background image is supplied.
///
/// `thai-premium` is reserved for the organization-wide (`"area"`) context;
/// the store silently downgrades it elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameStyle {
    #[default]
    SimpleGold,
    InfiniteWave,
    OrnamentalCorners,
    ThaiPremium,
    None,
}

/// One named approver: name, multi-line position text, optional signature
/// image reference.
///
/// Signatories live only inside their parent template's ordered list and
/// are addressed by index — reordering renumbers them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Signatory {
    pub name: String,
    /// Position text; may contain embedded line breaks.
    #[serde(default)]
    pub position: String,
    /// Signature image reference (opaque URL).
    #[serde(default)]
    pub signature_url: Option<String>,
}

impl Signatory {
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            signature_url: None,
        }
    }
}

/// Per-role font-family overrides.
///
/// An unset (or empty) role falls back to the template-wide `font_family`,
/// then to the system default. Exactly two hops — see [`crate::fonts`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FontOverrides {
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub sub_header: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub signatures: Option<String>,
}

/// Millimeter layout parameters. Absent values resolve to documented
/// defaults in [`crate::layout::compose`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutOverrides {
    #[serde(default)]
    pub content_top: Option<f64>,
    #[serde(default)]
    pub footer_bottom: Option<f64>,
    #[serde(default)]
    pub logo_height: Option<f64>,
    #[serde(default)]
    pub signature_spacing: Option<f64>,
    #[serde(default)]
    pub signature_image_height: Option<f64>,
    /// Signature image width. Unset (or non-positive) means auto: the
    /// image keeps its intrinsic aspect ratio.
    #[serde(default)]
    pub signature_image_width: Option<f64>,
    #[serde(default)]
    pub serial_top: Option<f64>,
    #[serde(default)]
    pub serial_right: Option<f64>,
    #[serde(default)]
    pub qr_bottom: Option<f64>,
    #[serde(default)]
    pub qr_right: Option<f64>,
}

fn default_true() -> bool {
    true
}

fn default_header_text() -> String {
    "Certificate of Participation".into()
}

fn default_sub_header_text() -> String {
    "This certificate is presented to".into()
}

fn default_body_text() -> String {
    "for participating in".into()
}

fn default_serial_format() -> String {
    "{run:4}".into()
}

fn default_serial_start() -> u32 {
    1
}

/// A certificate template: everything needed to render one certificate
/// design, keyed by the context it applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateTemplate {
    /// Context key this template applies to (`"area"` or a cluster id).
    #[serde(default)]
    pub context_key: String,
    /// Display name shown by the editing surface.
    #[serde(default)]
    pub display_name: String,
    /// Background image reference. When set, no decorative frame is drawn.
    #[serde(default)]
    pub background_url: Option<String>,
    #[serde(default = "default_header_text")]
    pub header_text: String,
    #[serde(default = "default_sub_header_text")]
    pub sub_header_text: String,
    /// Name of the event or activity the certificate attests.
    #[serde(default)]
    pub event_name: String,
    /// Descriptive body text leading into the event name.
    #[serde(default = "default_body_text")]
    pub body_text: String,
    #[serde(default)]
    pub date_text: String,
    #[serde(default)]
    pub frame_style: FrameStyle,
    #[serde(default)]
    pub logo_left_url: Option<String>,
    #[serde(default)]
    pub logo_right_url: Option<String>,
    /// Ordered signatory list, index-addressed.
    #[serde(default)]
    pub signatories: Vec<Signatory>,
    /// Draw a rule above each signatory name. Default: true.
    #[serde(default = "default_true")]
    pub show_signature_line: bool,
    /// Apply the white outline effect to all text, for legibility over
    /// arbitrary backgrounds. Default: false.
    #[serde(default)]
    pub text_shadow: bool,
    /// Template-wide font family. Unset falls back to the system default.
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub fonts: FontOverrides,
    /// Placeholder-bearing format for the printed registration number.
    #[serde(default = "default_serial_format")]
    pub serial_format: String,
    /// First counter value, always >= 1.
    #[serde(default = "default_serial_start")]
    pub serial_start: u32,
    #[serde(default)]
    pub layout: LayoutOverrides,
}

impl Default for CertificateTemplate {
    fn default() -> Self {
        Self {
            context_key: String::new(),
            display_name: String::new(),
            background_url: None,
            header_text: default_header_text(),
            sub_header_text: default_sub_header_text(),
            event_name: String::new(),
            body_text: default_body_text(),
            date_text: String::new(),
            frame_style: FrameStyle::default(),
            logo_left_url: None,
            logo_right_url: None,
            signatories: Vec::new(),
            show_signature_line: true,
            text_shadow: false,
            font_family: None,
            fonts: FontOverrides::default(),
            serial_format: default_serial_format(),
            serial_start: default_serial_start(),
            layout: LayoutOverrides::default(),
        }
    }
}

impl CertificateTemplate {
    /// Fresh template for an unconfigured context.
    pub fn synthesized(context_key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            context_key: context_key.into(),
            display_name: display_name.into(),
            ..Default::default()
        }
    }

    /// Editing-surface toggle: include or drop the `-{id}` serial segment.
    /// Idempotent in both directions.
    pub fn set_include_team_id(&mut self, include: bool) {
        self.serial_format = if include {
            serial::with_team_id(&self.serial_format)
        } else {
            serial::without_team_id(&self.serial_format)
        };
    }

    /// Editing-surface toggle: include or drop the `{activityId}-` serial
    /// segment. Idempotent in both directions.
    pub fn set_include_activity_id(&mut self, include: bool) {
        self.serial_format = if include {
            serial::with_activity_id(&self.serial_format)
        } else {
            serial::without_activity_id(&self.serial_format)
        };
    }
}
