//! Bounding boxes of document content.

use serde::{Deserialize, Serialize};

use crate::Rect;

/// Axis-aligned bounding box of document content, in canvas space.
///
/// `width` and `height` are derived from the extents. They are written to
/// snapshots for readers that expect them, but are always recomputed on
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawBounds")]
pub struct Bounds {
    /// Left edge.
    pub min_x: f32,
    /// Top edge.
    pub min_y: f32,
    /// Right edge.
    pub max_x: f32,
    /// Bottom edge.
    pub max_y: f32,
    /// `max_x - min_x`.
    pub width: f32,
    /// `max_y - min_y`.
    pub height: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl From<RawBounds> for Bounds {
    fn from(raw: RawBounds) -> Self {
        Self::from_extents(raw.min_x, raw.min_y, raw.max_x, raw.max_y)
    }
}

impl Bounds {
    /// Build bounds from two corners. Inverted extents are swapped so that
    /// `max >= min` always holds.
    #[must_use]
    pub fn from_extents(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        let (min_x, max_x) = (min_x.min(max_x), min_x.max(max_x));
        let (min_y, max_y) = (min_y.min(max_y), min_y.max(max_y));
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    /// Bounds covering a container of the given size at the origin.
    #[must_use]
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::from_extents(0.0, 0.0, width, height)
    }

    /// Smallest box covering every shape, or `None` for an empty slice.
    #[must_use]
    pub fn enclosing(shapes: &[Rect]) -> Option<Self> {
        let mut iter = shapes.iter();
        let first = iter.next()?;
        let seed = Self::from_extents(first.x, first.y, first.right(), first.bottom());

        Some(iter.fold(seed, |acc, shape| {
            let (left, right) = (shape.x.min(shape.right()), shape.x.max(shape.right()));
            let (top, bottom) = (shape.y.min(shape.bottom()), shape.y.max(shape.bottom()));
            Self::from_extents(
                acc.min_x.min(left),
                acc.min_y.min(top),
                acc.max_x.max(right),
                acc.max_y.max(bottom),
            )
        }))
    }

    /// Center of the box.
    #[must_use]
    pub fn center_x(&self) -> f32 {
        self.min_x + self.width / 2.0
    }

    /// Center of the box.
    #[must_use]
    pub fn center_y(&self) -> f32 {
        self.min_y + self.height / 2.0
    }

    /// The box as a [`Rect`].
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.min_x, self.min_y, self.width, self.height)
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self::from_extents(rect.x, rect.y, rect.right(), rect.bottom())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enclosing_two_shapes() {
        let shapes = [
            Rect::new(10.0, 10.0, 50.0, 50.0),
            Rect::new(100.0, 100.0, 20.0, 20.0),
        ];
        let b = Bounds::enclosing(&shapes).expect("non-empty");
        assert_eq!(b, Bounds::from_extents(10.0, 10.0, 120.0, 120.0));
        assert!((b.width - 110.0).abs() < f32::EPSILON);
        assert!((b.height - 110.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_enclosing_empty() {
        assert!(Bounds::enclosing(&[]).is_none());
    }

    #[test]
    fn test_negative_size_is_normalized() {
        let b = Bounds::enclosing(&[Rect::new(50.0, 50.0, -20.0, -10.0)]).expect("non-empty");
        assert!((b.min_x - 30.0).abs() < f32::EPSILON);
        assert!((b.min_y - 40.0).abs() < f32::EPSILON);
        assert!((b.max_x - 50.0).abs() < f32::EPSILON);
        assert!((b.max_y - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_derived_fields_recomputed_on_deserialize() {
        let json = r#"{"minX":0,"minY":0,"maxX":10,"maxY":20,"width":999,"height":999}"#;
        let b: Bounds = serde_json::from_str(json).expect("parse");
        assert!((b.width - 10.0).abs() < f32::EPSILON);
        assert!((b.height - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&Bounds::from_size(4.0, 3.0)).expect("serialize");
        assert!(json.contains("\"minX\""));
        assert!(json.contains("\"width\":4.0"));
    }
}
