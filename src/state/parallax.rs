/// Pointer displacement from the viewport centre, scaled down.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

const DAMPING: f64 = 50.0;

/// `((x - w/2) / 50, (y - h/2) / 50)`. `pointer` is viewport-relative
/// (client coordinates), so scrolling never moves the shapes. A viewport
/// that is not measured yet (infinite while rendering on the server) gives
/// no offset.
pub fn pointer_offset(pointer: (f64, f64), viewport: (f64, f64)) -> Offset {
    if !(viewport.0.is_finite() && viewport.1.is_finite()) {
        return Offset::default();
    }
    Offset {
        x: (pointer.0 - viewport.0 / 2.0) / DAMPING,
        y: (pointer.1 - viewport.1 / 2.0) / DAMPING,
    }
}

/// The two decorative blobs behind the hero banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Primary,
    Secondary,
}

impl Shape {
    /// Secondary drifts against the pointer.
    pub fn factor(self) -> f64 {
        match self {
            Shape::Primary => 2.0,
            Shape::Secondary => -1.5,
        }
    }

    pub fn transform(self, offset: Offset) -> String {
        let k = self.factor();
        format!("translate({:.2}px, {:.2}px)", offset.x * k, offset.y * k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_pointer_is_still() {
        let offset = pointer_offset((640.0, 360.0), (1280.0, 720.0));
        assert_eq!(offset, Offset { x: 0.0, y: 0.0 });
    }

    #[test]
    fn offset_scales_from_centre() {
        let offset = pointer_offset((1140.0, 110.0), (1280.0, 720.0));
        assert!((offset.x - 10.0).abs() < f64::EPSILON);
        assert!((offset.y + 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn offset_is_measured_against_the_viewport_not_the_page() {
        let viewport = (1280.0, 720.0);
        let scroll_y = 500.0;
        let client = (640.0, 360.0);
        let page = (client.0, client.1 + scroll_y);

        let still = pointer_offset(client, viewport);
        assert_eq!(Shape::Primary.transform(still), "translate(0.00px, 0.00px)");

        // Page coordinates would drag the blob down by 2 * scroll / 50.
        let drifted = pointer_offset(page, viewport);
        assert_eq!(Shape::Primary.transform(drifted), "translate(0.00px, 20.00px)");
    }

    #[test]
    fn unmeasured_viewport_is_still() {
        let offset = pointer_offset((0.0, 0.0), (f64::INFINITY, f64::INFINITY));
        assert_eq!(offset, Offset::default());
    }

    #[test]
    fn shapes_move_in_opposite_directions() {
        let offset = Offset { x: 10.0, y: -4.0 };
        assert_eq!(Shape::Primary.transform(offset), "translate(20.00px, -8.00px)");
        assert_eq!(Shape::Secondary.transform(offset), "translate(-15.00px, 6.00px)");
    }
}
