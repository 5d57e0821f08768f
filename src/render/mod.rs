//! # Document Renderer
//!
//! Assembles the font cascade, the layout plan, and the serial formatter
//! output into one renderable document: standalone markup with an embedded
//! stylesheet, sized for A4 landscape with zero page margin.
//!
//! Composition order is fixed: background or frame → logo block → header →
//! sub-header → recipient name → body (with an optional highlighted award
//! phrase) → date → signatory row → serial badge → verification code.
//!
//! Rendering is deterministic: identical inputs produce byte-identical
//! output. The wall clock is only reachable through `{year}`/`{th_year}`
//! when the caller leaves [`RecipientSample::year`] unset.

mod css;
mod html;

use std::fmt::Write;

use tracing::debug;

use crate::fonts;
use crate::layout::{self, FramePlan, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::serial::{self, SerialVars};
use crate::template::CertificateTemplate;
use html::{esc, esc_multiline};

/// Placeholder rendered when the recipient name is empty, so the preview
/// reveals the gap instead of collapsing the line.
const NAME_PLACEHOLDER: &str = ". . . . . . . . . . . . . . .";

/// Physical page size of the rendered document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_mm: f64,
    pub height_mm: f64,
}

/// Recipient values for one rendered certificate (real or sample).
#[derive(Debug, Clone, Default)]
pub struct RecipientSample {
    /// Recipient display name. Empty renders a dotted placeholder.
    pub name: String,
    pub team_id: String,
    pub activity_id: String,
    /// Award or rank phrase rendered with the highlight style.
    pub award: Option<String>,
    /// Pre-encoded verification code image (e.g. a QR), opaque URL.
    pub verify_image_url: Option<String>,
    /// Fixed Gregorian year for `{year}`/`{th_year}`. `None` = wall clock.
    pub year: Option<i32>,
}

/// A finished certificate document.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    /// Complete standalone markup with embedded stylesheet.
    pub html: String,
    pub page: PageSize,
}

/// Render one certificate from `template` for `sample` at `counter`.
///
/// Total over its input domain: authoring mistakes (empty fields, odd
/// serial formats) degrade visually, never to an error.
pub fn render(
    template: &CertificateTemplate,
    sample: &RecipientSample,
    counter: u32,
) -> RenderedDocument {
    debug!(context = %template.context_key, counter, "render certificate");

    let resolved_fonts = fonts::resolve(template);
    let plan = layout::compose(template);
    let serial_number = serial::render(
        &template.serial_format,
        counter,
        &SerialVars {
            activity_id: sample.activity_id.clone(),
            team_id: sample.team_id.clone(),
            year: sample.year,
        },
    );

    let mut out = String::with_capacity(4096);
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = write!(out, "<title>{}</title>\n", esc(&template.display_name));
    out.push_str("<style>\n");
    out.push_str(&css::stylesheet(&resolved_fonts, &plan, template.text_shadow));
    out.push_str("</style>\n</head>\n<body>\n");

    let page_class = if template.text_shadow { "page shadow" } else { "page" };
    let _ = write!(out, "<div class=\"{page_class}\">\n");

    // Background image beats the decorative frame.
    if let Some(url) = &plan.background_url {
        let _ = write!(out, "<img class=\"background\" src=\"{}\">\n", esc(url));
    } else if let Some(frame) = &plan.frame {
        write_frame(&mut out, frame);
    }

    out.push_str("<div class=\"content\">\n");
    write_logos(&mut out, template);
    let _ = write!(out, "<div class=\"header\">{}</div>\n", esc(&template.header_text));
    let _ = write!(
        out,
        "<div class=\"sub-header\">{}</div>\n",
        esc(&template.sub_header_text)
    );

    let recipient = if sample.name.trim().is_empty() {
        NAME_PLACEHOLDER.to_string()
    } else {
        esc(&sample.name)
    };
    let _ = write!(out, "<div class=\"recipient\">{recipient}</div>\n");

    out.push_str("<div class=\"body\">");
    out.push_str(&esc(&template.body_text));
    if !template.event_name.is_empty() {
        let _ = write!(out, " <span class=\"event\">{}</span>", esc(&template.event_name));
    }
    if let Some(award) = sample.award.as_deref().filter(|a| !a.is_empty()) {
        let _ = write!(out, " <span class=\"highlight\">{}</span>", esc(award));
    }
    out.push_str("</div>\n");

    if !template.date_text.is_empty() {
        let _ = write!(out, "<div class=\"date\">{}</div>\n", esc(&template.date_text));
    }
    out.push_str("</div>\n"); // .content

    write_signatories(&mut out, template);

    let _ = write!(out, "<div class=\"serial\">{}</div>\n", esc(&serial_number));

    if let Some(url) = sample.verify_image_url.as_deref().filter(|u| !u.is_empty()) {
        let _ = write!(
            out,
            "<div class=\"verify\"><img src=\"{}\"></div>\n",
            esc(url)
        );
    }

    out.push_str("</div>\n</body>\n</html>\n");

    RenderedDocument {
        html: out,
        page: PageSize {
            width_mm: PAGE_WIDTH_MM,
            height_mm: PAGE_HEIGHT_MM,
        },
    }
}

/// Frame primitives, mirroring the class names the stylesheet emits.
fn write_frame(out: &mut String, frame: &FramePlan) {
    for i in 0..frame.layers.len() {
        let _ = write!(out, "<div class=\"frame-layer-{i}\"></div>\n");
    }
    if frame.corners.is_some() {
        for pos in ["tl", "tr", "bl", "br"] {
            let _ = write!(out, "<div class=\"corner {pos}\"></div>\n");
        }
    }
    if frame.bands.is_some() {
        out.push_str("<div class=\"band top\"></div>\n<div class=\"band bottom\"></div>\n");
    }
}

/// Logo block: one logo centers as a single block, a pair splits
/// left/right.
fn write_logos(out: &mut String, template: &CertificateTemplate) {
    let left = template.logo_left_url.as_deref().filter(|u| !u.is_empty());
    let right = template.logo_right_url.as_deref().filter(|u| !u.is_empty());
    if left.is_none() && right.is_none() {
        return;
    }
    let class = if left.is_some() && right.is_some() {
        "logos split"
    } else {
        "logos"
    };
    let _ = write!(out, "<div class=\"{class}\">\n");
    for url in [left, right].into_iter().flatten() {
        let _ = write!(out, "<img src=\"{}\">\n", esc(url));
    }
    out.push_str("</div>\n");
}

/// Signatory row: image, optional rule, name in parentheses, multi-line
/// position text.
fn write_signatories(out: &mut String, template: &CertificateTemplate) {
    if template.signatories.is_empty() {
        return;
    }
    out.push_str("<div class=\"signatories\">\n");
    for signatory in &template.signatories {
        out.push_str("<div class=\"signatory\">\n");
        if let Some(url) = signatory.signature_url.as_deref().filter(|u| !u.is_empty()) {
            let _ = write!(out, "<img src=\"{}\">\n", esc(url));
        }
        if template.show_signature_line {
            out.push_str("<div class=\"line\"></div>\n");
        }
        let _ = write!(out, "<div class=\"sig-name\">({})</div>\n", esc(&signatory.name));
        if !signatory.position.is_empty() {
            let _ = write!(
                out,
                "<div class=\"sig-position\">{}</div>\n",
                esc_multiline(&signatory.position)
            );
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{FrameStyle, Signatory};

    fn sample() -> RecipientSample {
        RecipientSample {
            name: "Somchai R.".into(),
            team_id: "T7".into(),
            activity_id: "ACT01".into(),
            year: Some(2024),
            ..Default::default()
        }
    }

    #[test]
    fn test_serial_badge_in_output() {
        let template = CertificateTemplate {
            serial_format: "{activityId}-{year}-{run:4}".into(),
            ..Default::default()
        };
        let doc = render(&template, &sample(), 7);
        assert!(doc.html.contains("ACT01-2024-0007"));
    }

    #[test]
    fn test_page_is_a4_landscape() {
        let doc = render(&CertificateTemplate::default(), &sample(), 1);
        assert_eq!(doc.page.width_mm, 297.0);
        assert_eq!(doc.page.height_mm, 210.0);
        assert!(doc.html.contains("size: 297mm 210mm"));
        assert!(doc.html.contains("margin: 0"));
    }

    #[test]
    fn test_empty_name_renders_placeholder() {
        let doc = render(
            &CertificateTemplate::default(),
            &RecipientSample::default(),
            1,
        );
        assert!(doc.html.contains(NAME_PLACEHOLDER));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let template = CertificateTemplate {
            header_text: "<script>alert(1)</script>".into(),
            ..Default::default()
        };
        let doc = render(&template, &sample(), 1);
        assert!(!doc.html.contains("<script>"));
        assert!(doc.html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_shadow_class_toggles() {
        let mut template = CertificateTemplate::default();
        let plain = render(&template, &sample(), 1);
        assert!(!plain.html.contains("text-shadow"));

        template.text_shadow = true;
        let shadowed = render(&template, &sample(), 1);
        assert!(shadowed.html.contains("class=\"page shadow\""));
        // Eight offsets, one rule.
        assert_eq!(shadowed.html.matches("text-shadow:").count(), 1);
        assert_eq!(shadowed.html.matches("0 #fff").count(), 8);
    }

    #[test]
    fn test_background_replaces_frame_markup() {
        let template = CertificateTemplate {
            background_url: Some("https://cdn.example/bg.png".into()),
            frame_style: FrameStyle::ThaiPremium,
            ..Default::default()
        };
        let doc = render(&template, &sample(), 1);
        assert!(doc.html.contains("class=\"background\""));
        assert!(!doc.html.contains("frame-layer"));
        assert!(!doc.html.contains("class=\"corner"));
    }

    #[test]
    fn test_single_logo_centers_pair_splits() {
        let mut template = CertificateTemplate {
            logo_left_url: Some("https://cdn.example/a.png".into()),
            ..Default::default()
        };
        let doc = render(&template, &sample(), 1);
        assert!(doc.html.contains("class=\"logos\""));
        assert!(!doc.html.contains("logos split"));

        template.logo_right_url = Some("https://cdn.example/b.png".into());
        let doc = render(&template, &sample(), 1);
        assert!(doc.html.contains("class=\"logos split\""));
    }

    #[test]
    fn test_signatory_row() {
        let template = CertificateTemplate {
            signatories: vec![Signatory {
                name: "A. Director".into(),
                position: "Director\nNorth Region".into(),
                signature_url: Some("https://cdn.example/sig.png".into()),
            }],
            ..Default::default()
        };
        let doc = render(&template, &sample(), 1);
        assert!(doc.html.contains("(A. Director)"));
        assert!(doc.html.contains("Director<br>North Region"));
        assert!(doc.html.contains("class=\"line\""));
    }

    #[test]
    fn test_signature_line_toggle() {
        let template = CertificateTemplate {
            show_signature_line: false,
            signatories: vec![Signatory::new("A. Director", "Director")],
            ..Default::default()
        };
        let doc = render(&template, &sample(), 1);
        assert!(!doc.html.contains("class=\"line\""));
    }

    #[test]
    fn test_award_highlight() {
        let s = RecipientSample {
            award: Some("First Prize".into()),
            ..sample()
        };
        let doc = render(&CertificateTemplate::default(), &s, 1);
        assert!(doc.html.contains("<span class=\"highlight\">First Prize</span>"));
    }

    #[test]
    fn test_verify_image_block() {
        let s = RecipientSample {
            verify_image_url: Some("https://cdn.example/qr.png".into()),
            ..sample()
        };
        let doc = render(&CertificateTemplate::default(), &s, 1);
        assert!(doc.html.contains("class=\"verify\""));

        let doc = render(&CertificateTemplate::default(), &sample(), 1);
        assert!(!doc.html.contains("class=\"verify\""));
    }

    #[test]
    fn test_images_forced_transparent() {
        let doc = render(&CertificateTemplate::default(), &sample(), 1);
        assert!(doc.html.contains("mix-blend-mode: multiply"));
        assert!(doc.html.contains("background-color: transparent"));
    }

    #[test]
    fn test_deterministic_output() {
        let template = CertificateTemplate {
            text_shadow: true,
            signatories: vec![Signatory::new("A", "B")],
            ..Default::default()
        };
        let a = render(&template, &sample(), 3);
        let b = render(&template, &sample(), 3);
        assert_eq!(a.html, b.html);
    }
}
