//! # Layout Compositor
//!
//! Converts a template's millimeter-denominated layout parameters into a
//! fully-defaulted [`LayoutPlan`] and resolves the decorative frame.
//! Numeric placement and frame geometry are independent: a caller can
//! reposition the serial badge without touching the frame, and vice versa.
//!
//! ## Page geometry
//!
//! ```text
//! A4 landscape: 297 x 210 mm, zero page margin.
//! All element positions are absolute offsets inside the page.
//! ```

pub mod frame;

pub use frame::{BorderLayer, BorderLineStyle, CornerMark, FramePlan, WaveBand};

use serde::Serialize;

use crate::template::CertificateTemplate;

/// Physical page width (A4 landscape).
pub const PAGE_WIDTH_MM: f64 = 297.0;

/// Physical page height (A4 landscape).
pub const PAGE_HEIGHT_MM: f64 = 210.0;

const DEFAULT_CONTENT_TOP: f64 = 25.0;
const DEFAULT_FOOTER_BOTTOM: f64 = 25.0;
const DEFAULT_LOGO_HEIGHT: f64 = 35.0;
const DEFAULT_SIGNATURE_SPACING: f64 = 3.0;
const DEFAULT_SIGNATURE_IMAGE_HEIGHT: f64 = 20.0;
const DEFAULT_SERIAL_TOP: f64 = 10.0;
const DEFAULT_SERIAL_RIGHT: f64 = 10.0;
const DEFAULT_QR_BOTTOM: f64 = 10.0;
const DEFAULT_QR_RIGHT: f64 = 10.0;

/// Fully-defaulted millimeter offsets plus the resolved frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPlan {
    pub content_top: f64,
    pub footer_bottom: f64,
    pub logo_height: f64,
    pub signature_spacing: f64,
    pub signature_image_height: f64,
    /// `None` keeps the signature image's intrinsic aspect ratio.
    pub signature_image_width: Option<f64>,
    pub serial_top: f64,
    pub serial_right: f64,
    pub qr_bottom: f64,
    pub qr_right: f64,
    /// Decorative frame. Absent when a background image takes visual
    /// precedence or the style is `none`.
    pub frame: Option<FramePlan>,
    /// Background image reference, verbatim from the template.
    pub background_url: Option<String>,
}

/// Resolve `template` into a [`LayoutPlan`].
///
/// Every absent or non-numeric parameter falls back to its documented
/// default; a non-empty `background_url` suppresses the frame regardless
/// of `frame_style`.
pub fn compose(template: &CertificateTemplate) -> LayoutPlan {
    let l = &template.layout;
    let background_url = template
        .background_url
        .clone()
        .filter(|url| !url.trim().is_empty());
    let frame = if background_url.is_some() {
        None
    } else {
        frame::for_style(template.frame_style)
    };

    LayoutPlan {
        content_top: or_default(l.content_top, DEFAULT_CONTENT_TOP),
        footer_bottom: or_default(l.footer_bottom, DEFAULT_FOOTER_BOTTOM),
        logo_height: or_default(l.logo_height, DEFAULT_LOGO_HEIGHT),
        signature_spacing: or_default(l.signature_spacing, DEFAULT_SIGNATURE_SPACING),
        signature_image_height: or_default(
            l.signature_image_height,
            DEFAULT_SIGNATURE_IMAGE_HEIGHT,
        ),
        signature_image_width: l.signature_image_width.filter(|v| v.is_finite() && *v > 0.0),
        serial_top: or_default(l.serial_top, DEFAULT_SERIAL_TOP),
        serial_right: or_default(l.serial_right, DEFAULT_SERIAL_RIGHT),
        qr_bottom: or_default(l.qr_bottom, DEFAULT_QR_BOTTOM),
        qr_right: or_default(l.qr_right, DEFAULT_QR_RIGHT),
        frame,
        background_url,
    }
}

/// Absent or non-numeric values fall back to the documented default.
/// Finite negatives pass through: a negative offset deliberately pulls an
/// element past its anchor edge.
fn or_default(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::FrameStyle;

    #[test]
    fn test_all_defaults() {
        let plan = compose(&CertificateTemplate::default());
        assert_eq!(plan.content_top, 25.0);
        assert_eq!(plan.footer_bottom, 25.0);
        assert_eq!(plan.logo_height, 35.0);
        assert_eq!(plan.signature_spacing, 3.0);
        assert_eq!(plan.signature_image_height, 20.0);
        assert_eq!(plan.signature_image_width, None);
        assert_eq!(plan.serial_top, 10.0);
        assert_eq!(plan.serial_right, 10.0);
        assert_eq!(plan.qr_bottom, 10.0);
        assert_eq!(plan.qr_right, 10.0);
        assert!(plan.frame.is_some());
        assert!(plan.background_url.is_none());
    }

    #[test]
    fn test_override_wins() {
        let mut t = CertificateTemplate::default();
        t.layout.content_top = Some(40.0);
        t.layout.signature_image_width = Some(45.0);
        let plan = compose(&t);
        assert_eq!(plan.content_top, 40.0);
        assert_eq!(plan.signature_image_width, Some(45.0));
    }

    #[test]
    fn test_non_numeric_falls_back() {
        let mut t = CertificateTemplate::default();
        t.layout.serial_top = Some(f64::NAN);
        t.layout.qr_right = Some(f64::INFINITY);
        let plan = compose(&t);
        assert_eq!(plan.serial_top, 10.0);
        assert_eq!(plan.qr_right, 10.0);
    }

    #[test]
    fn test_negative_offset_is_kept() {
        let mut t = CertificateTemplate::default();
        t.layout.serial_top = Some(-4.0);
        let plan = compose(&t);
        assert_eq!(plan.serial_top, -4.0);
    }

    #[test]
    fn test_background_suppresses_frame() {
        for style in [
            FrameStyle::SimpleGold,
            FrameStyle::InfiniteWave,
            FrameStyle::OrnamentalCorners,
            FrameStyle::ThaiPremium,
            FrameStyle::None,
        ] {
            let t = CertificateTemplate {
                frame_style: style,
                background_url: Some("https://cdn.example/bg.png".into()),
                ..Default::default()
            };
            let plan = compose(&t);
            assert!(plan.frame.is_none(), "{style:?}");
            assert!(plan.background_url.is_some());
        }
    }

    #[test]
    fn test_blank_background_is_ignored() {
        let t = CertificateTemplate {
            background_url: Some("   ".into()),
            ..Default::default()
        };
        let plan = compose(&t);
        assert!(plan.background_url.is_none());
        assert!(plan.frame.is_some());
    }

    #[test]
    fn test_frame_none_emits_nothing() {
        let t = CertificateTemplate {
            frame_style: FrameStyle::None,
            ..Default::default()
        };
        let plan = compose(&t);
        assert!(plan.frame.is_none());
        assert!(plan.background_url.is_none());
    }
}
