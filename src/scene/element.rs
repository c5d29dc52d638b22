use kurbo::{Affine, Point, Rect, Vec2};

use crate::foundation::color::Color;

/// Horizontal text alignment inside an element's frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Flush left.
    #[default]
    Left,
    /// Centered.
    Center,
}

/// What an element draws.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKind {
    /// Solid rounded rectangle.
    Block {
        /// Fill color.
        fill: Color,
        /// Corner radius in pixels.
        corner_radius: f64,
    },
    /// Text laid out inside the element frame. Embedded `\n` are hard line breaks.
    Text {
        /// UTF-8 content.
        content: String,
        /// Font size in pixels.
        font_size: f64,
        /// CSS-style weight (400 regular, 600 semibold, 700 bold).
        font_weight: u16,
        /// Line height as a multiple of the font size.
        line_height: f64,
        /// Text color.
        color: Color,
        /// Font family stack.
        font_family: String,
        /// Horizontal alignment.
        align: TextAlign,
    },
    /// Region reserved for an externally produced video, filled until the video is composited.
    VideoPlaceholder {
        /// Path of the video asset, as given in the props.
        asset_path: String,
        /// Fill shown in place of the video.
        fill: Color,
    },
}

/// One positioned, animated element of a frame.
///
/// `frame` is the untransformed layout box in canvas pixels. The final placement is
/// `translate * scale-about-origin`, see [`Element::transform`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Element {
    /// Stable element id within a composition.
    pub id: String,
    /// Drawing primitive.
    pub kind: ElementKind,
    /// Layout box before animation.
    pub frame: Rect,
    /// Animated offset in pixels.
    pub translate: Vec2,
    /// Uniform scale around `origin`.
    pub scale: f64,
    /// Scale pivot in canvas coordinates.
    pub origin: Point,
    /// Final opacity in `[0, 1]` (parent opacity already folded in).
    pub opacity: f64,
}

impl Element {
    fn new(id: impl Into<String>, kind: ElementKind, frame: Rect) -> Self {
        Self {
            id: id.into(),
            kind,
            frame,
            translate: Vec2::ZERO,
            scale: 1.0,
            origin: frame.center(),
            opacity: 1.0,
        }
    }

    /// Rounded rectangle element.
    pub fn block(id: impl Into<String>, frame: Rect, fill: Color, corner_radius: f64) -> Self {
        Self::new(
            id,
            ElementKind::Block {
                fill,
                corner_radius,
            },
            frame,
        )
    }

    /// Video placeholder element.
    pub fn video_placeholder(
        id: impl Into<String>,
        frame: Rect,
        asset_path: impl Into<String>,
        fill: Color,
    ) -> Self {
        Self::new(
            id,
            ElementKind::VideoPlaceholder {
                asset_path: asset_path.into(),
                fill,
            },
            frame,
        )
    }

    pub(crate) fn text(
        id: impl Into<String>,
        frame: Rect,
        content: impl Into<String>,
        style: &TextStyle<'_>,
    ) -> Self {
        Self::new(
            id,
            ElementKind::Text {
                content: content.into(),
                font_size: style.font_size,
                font_weight: style.font_weight,
                line_height: style.line_height,
                color: style.color,
                font_family: style.font_family.to_owned(),
                align: style.align,
            },
            frame,
        )
    }

    /// Set the animated offset.
    pub fn with_translate(mut self, translate: Vec2) -> Self {
        self.translate = translate;
        self
    }

    /// Set the scale and its pivot.
    pub fn with_scale(mut self, scale: f64, origin: Point) -> Self {
        self.scale = scale;
        self.origin = origin;
        self
    }

    /// Set the opacity, clamped to `[0, 1]`.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Placement transform: `T(translate) * T(origin) * S(scale) * T(-origin)`.
    pub fn transform(&self) -> Affine {
        let o = self.origin.to_vec2();
        Affine::translate(self.translate)
            * Affine::translate(o)
            * Affine::scale(self.scale)
            * Affine::translate(-o)
    }

    /// Bounding box after [`Self::transform`].
    pub fn bounds(&self) -> Rect {
        self.transform().transform_rect_bbox(self.frame)
    }

    /// True when the element contributes nothing to the frame.
    pub fn is_invisible(&self) -> bool {
        self.opacity <= 0.0
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct TextStyle<'a> {
    pub(crate) font_size: f64,
    pub(crate) font_weight: u16,
    pub(crate) line_height: f64,
    pub(crate) color: Color,
    pub(crate) font_family: &'a str,
    pub(crate) align: TextAlign,
}

impl<'a> TextStyle<'a> {
    pub(crate) fn new(
        font_size: f64,
        font_weight: u16,
        color: Color,
        font_family: &'a str,
    ) -> Self {
        Self {
            font_size,
            font_weight,
            line_height: 1.2,
            color,
            font_family,
            align: TextAlign::Center,
        }
    }

    pub(crate) fn line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    pub(crate) fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/element.rs"]
mod tests;
