//! Frame geometries.
//!
//! Each frame style maps to a fixed set of border/ornament primitives
//! anchored to the page margins. The primitives are plain data so the
//! renderer decides how to draw them; the compositor only selects.

use serde::Serialize;

use crate::template::FrameStyle;

const GOLD: &str = "#c8a951";
const DEEP_GOLD: &str = "#8a6d1f";
const WAVE_BLUE: &str = "#1f4e79";
const WAVE_TEAL: &str = "#2e8b8b";
const LACQUER_RED: &str = "#7a1f1f";

/// Line style of one border layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderLineStyle {
    Solid,
    Double,
}

impl BorderLineStyle {
    /// CSS `border-style` keyword.
    pub fn css(self) -> &'static str {
        match self {
            BorderLineStyle::Solid => "solid",
            BorderLineStyle::Double => "double",
        }
    }
}

/// One rectangular border, inset from the page edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BorderLayer {
    pub inset_mm: f64,
    pub width_mm: f64,
    pub color: &'static str,
    pub style: BorderLineStyle,
}

/// L-shaped ornaments drawn at the four corners of the innermost border.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CornerMark {
    pub size_mm: f64,
    pub thickness_mm: f64,
    pub color: &'static str,
}

/// Horizontal wave bands across the top and bottom page edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveBand {
    pub height_mm: f64,
    pub colors: [&'static str; 2],
}

/// Renderable frame description: zero or more border layers, optional
/// corner ornaments, optional wave bands.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FramePlan {
    pub layers: Vec<BorderLayer>,
    pub corners: Option<CornerMark>,
    pub bands: Option<WaveBand>,
}

/// Fixed geometry for each frame style. `None` for [`FrameStyle::None`].
pub fn for_style(style: FrameStyle) -> Option<FramePlan> {
    match style {
        FrameStyle::SimpleGold => Some(FramePlan {
            layers: vec![
                BorderLayer {
                    inset_mm: 6.0,
                    width_mm: 1.2,
                    color: GOLD,
                    style: BorderLineStyle::Solid,
                },
                BorderLayer {
                    inset_mm: 8.5,
                    width_mm: 0.4,
                    color: DEEP_GOLD,
                    style: BorderLineStyle::Solid,
                },
            ],
            ..Default::default()
        }),
        FrameStyle::InfiniteWave => Some(FramePlan {
            bands: Some(WaveBand {
                height_mm: 18.0,
                colors: [WAVE_BLUE, WAVE_TEAL],
            }),
            ..Default::default()
        }),
        FrameStyle::OrnamentalCorners => Some(FramePlan {
            layers: vec![BorderLayer {
                inset_mm: 7.0,
                width_mm: 0.5,
                color: DEEP_GOLD,
                style: BorderLineStyle::Solid,
            }],
            corners: Some(CornerMark {
                size_mm: 14.0,
                thickness_mm: 1.5,
                color: GOLD,
            }),
            ..Default::default()
        }),
        FrameStyle::ThaiPremium => Some(FramePlan {
            layers: vec![
                BorderLayer {
                    inset_mm: 5.0,
                    width_mm: 2.0,
                    color: DEEP_GOLD,
                    style: BorderLineStyle::Double,
                },
                BorderLayer {
                    inset_mm: 9.0,
                    width_mm: 0.8,
                    color: GOLD,
                    style: BorderLineStyle::Solid,
                },
                BorderLayer {
                    inset_mm: 10.5,
                    width_mm: 0.3,
                    color: LACQUER_RED,
                    style: BorderLineStyle::Solid,
                },
            ],
            corners: Some(CornerMark {
                size_mm: 18.0,
                thickness_mm: 2.0,
                color: DEEP_GOLD,
            }),
            ..Default::default()
        }),
        FrameStyle::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_has_no_plan() {
        assert!(for_style(FrameStyle::None).is_none());
    }

    #[test]
    fn test_every_other_style_has_a_plan() {
        for style in [
            FrameStyle::SimpleGold,
            FrameStyle::InfiniteWave,
            FrameStyle::OrnamentalCorners,
            FrameStyle::ThaiPremium,
        ] {
            let plan = for_style(style).unwrap();
            assert!(
                !plan.layers.is_empty() || plan.corners.is_some() || plan.bands.is_some(),
                "{style:?} produced an empty plan"
            );
        }
    }

    #[test]
    fn test_layers_ordered_outside_in() {
        let plan = for_style(FrameStyle::ThaiPremium).unwrap();
        let insets: Vec<f64> = plan.layers.iter().map(|l| l.inset_mm).collect();
        let mut sorted = insets.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(insets, sorted);
    }
}
