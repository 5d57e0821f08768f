//! Embedded stylesheet assembly.
//!
//! The stylesheet is rebuilt per document from the resolved fonts, the
//! layout plan, and the template flags — no external assets, so the output
//! stays a self-contained printable file.

use std::fmt::Write;

use crate::fonts::ResolvedFonts;
use crate::layout::{FramePlan, LayoutPlan, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};

/// Eight-direction white outline. Offsets are fixed at 1px regardless of
/// font size so contrast holds over arbitrary backgrounds.
const TEXT_OUTLINE: &str = "-1px -1px 0 #fff, 1px -1px 0 #fff, -1px 1px 0 #fff, \
     1px 1px 0 #fff, -1px 0 0 #fff, 1px 0 0 #fff, 0 -1px 0 #fff, 0 1px 0 #fff";

pub(super) fn stylesheet(fonts: &ResolvedFonts, plan: &LayoutPlan, text_shadow: bool) -> String {
    let mut css = String::new();
    let _ = write!(
        css,
        "@page {{ size: {w}mm {h}mm; margin: 0; }}\n\
         html, body {{ margin: 0; padding: 0; }}\n\
         .page {{ position: relative; width: {w}mm; height: {h}mm; overflow: hidden; \
         background: #fff; }}\n",
        w = PAGE_WIDTH_MM,
        h = PAGE_HEIGHT_MM,
    );

    // Background image fills the page and sits under everything else.
    css.push_str(
        ".background { position: absolute; inset: 0; width: 100%; height: 100%; \
         object-fit: cover; }\n",
    );

    // Embedded images never get a white box over a non-white page.
    css.push_str(
        ".logos img, .signatory img, .verify img { background-color: transparent; \
         mix-blend-mode: multiply; }\n",
    );

    let _ = write!(
        css,
        ".content {{ position: absolute; top: {}mm; left: 0; right: 0; \
         text-align: center; }}\n",
        plan.content_top,
    );

    // Logo block: single logo centers, a pair splits left/right.
    let _ = write!(
        css,
        ".logos {{ display: flex; justify-content: center; gap: 12mm; }}\n\
         .logos.split {{ justify-content: space-between; padding: 0 30mm; }}\n\
         .logos img {{ height: {}mm; }}\n",
        plan.logo_height,
    );

    let _ = write!(
        css,
        ".header {{ font-family: '{}'; font-size: 34px; font-weight: bold; margin-top: 6mm; }}\n\
         .sub-header {{ font-family: '{}'; font-size: 22px; margin-top: 3mm; }}\n\
         .recipient {{ font-family: '{}'; font-size: 30px; font-weight: bold; margin-top: 5mm; }}\n\
         .body {{ font-family: '{}'; font-size: 20px; margin-top: 4mm; }}\n\
         .body .highlight {{ font-weight: bold; color: #8a6d1f; }}\n\
         .date {{ font-family: '{}'; font-size: 18px; margin-top: 4mm; }}\n",
        fonts.header,
        fonts.sub_header,
        fonts.name,
        fonts.body,
        fonts.date,
    );

    // Signatory row pinned to the footer.
    let sig_width = match plan.signature_image_width {
        Some(w) => format!("width: {w}mm;"),
        None => "width: auto;".to_string(),
    };
    let _ = write!(
        css,
        ".signatories {{ position: absolute; bottom: {bottom}mm; left: 0; right: 0; \
         display: flex; justify-content: center; gap: 28mm; }}\n\
         .signatory {{ font-family: '{family}'; font-size: 16px; text-align: center; }}\n\
         .signatory img {{ height: {img_h}mm; {sig_width} display: block; margin: 0 auto; }}\n\
         .signatory .line {{ border-top: 0.3mm solid #333; width: 52mm; \
         margin: {spacing}mm auto 0; }}\n\
         .signatory .sig-name {{ margin-top: {spacing}mm; }}\n\
         .signatory .sig-position {{ margin-top: {spacing}mm; white-space: pre-line; }}\n",
        bottom = plan.footer_bottom,
        family = fonts.signatures,
        img_h = plan.signature_image_height,
        spacing = plan.signature_spacing,
    );

    // Fixed-position serial badge and verification code block.
    let _ = write!(
        css,
        ".serial {{ position: absolute; top: {}mm; right: {}mm; \
         font-family: '{}'; font-size: 14px; }}\n\
         .verify {{ position: absolute; bottom: {}mm; right: {}mm; }}\n\
         .verify img {{ width: 22mm; height: 22mm; display: block; }}\n",
        plan.serial_top,
        plan.serial_right,
        fonts.body,
        plan.qr_bottom,
        plan.qr_right,
    );

    if text_shadow {
        // One document-level rule, not per element.
        let _ = write!(
            css,
            ".shadow .content, .shadow .signatory, .shadow .serial \
             {{ text-shadow: {TEXT_OUTLINE}; }}\n",
        );
    }

    if let Some(frame) = &plan.frame {
        frame_css(&mut css, frame);
    }

    css
}

/// Emit one CSS class per frame primitive. The markup side mirrors these
/// class names in [`super::render`].
fn frame_css(css: &mut String, frame: &FramePlan) {
    for (i, layer) in frame.layers.iter().enumerate() {
        let _ = write!(
            css,
            ".frame-layer-{i} {{ position: absolute; inset: {inset}mm; \
             border: {width}mm {style} {color}; pointer-events: none; }}\n",
            inset = layer.inset_mm,
            width = layer.width_mm,
            style = layer.style.css(),
            color = layer.color,
        );
    }

    if let Some(corners) = &frame.corners {
        let _ = write!(
            css,
            ".corner {{ position: absolute; width: {size}mm; height: {size}mm; \
             pointer-events: none; }}\n\
             .corner.tl {{ top: 10mm; left: 10mm; border-top: {t}mm solid {c}; \
             border-left: {t}mm solid {c}; }}\n\
             .corner.tr {{ top: 10mm; right: 10mm; border-top: {t}mm solid {c}; \
             border-right: {t}mm solid {c}; }}\n\
             .corner.bl {{ bottom: 10mm; left: 10mm; border-bottom: {t}mm solid {c}; \
             border-left: {t}mm solid {c}; }}\n\
             .corner.br {{ bottom: 10mm; right: 10mm; border-bottom: {t}mm solid {c}; \
             border-right: {t}mm solid {c}; }}\n",
            size = corners.size_mm,
            t = corners.thickness_mm,
            c = corners.color,
        );
    }

    if let Some(bands) = &frame.bands {
        let _ = write!(
            css,
            ".band {{ position: absolute; left: 0; right: 0; height: {h}mm; \
             background: repeating-linear-gradient(45deg, {a}, {a} 8mm, {b} 8mm, {b} 16mm); \
             pointer-events: none; }}\n\
             .band.top {{ top: 0; }}\n\
             .band.bottom {{ bottom: 0; }}\n",
            h = bands.height_mm,
            a = bands.colors[0],
            b = bands.colors[1],
        );
    }
}
