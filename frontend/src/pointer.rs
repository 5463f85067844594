/// Pointer position inside an open panel, in percent of the panel's box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// Position of a client-space point relative to a box at `left`/`top`.
    pub fn within(client_x: f64, client_y: f64, left: f64, top: f64, width: f64, height: f64) -> Self {
        let percent = |offset: f64, extent: f64| {
            if extent <= 0.0 {
                50.0
            } else {
                (offset / extent * 100.0).clamp(0.0, 100.0)
            }
        };
        Self {
            x: percent(client_x - left, width),
            y: percent(client_y - top, height),
        }
    }

    pub fn glow_style(&self) -> String {
        format!("--glow-x: {:.1}%; --glow-y: {:.1}%;", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_box_is_fifty_percent() {
        let p = PointerPosition::within(150.0, 300.0, 100.0, 200.0, 100.0, 200.0);
        assert_eq!(p, PointerPosition { x: 50.0, y: 50.0 });
    }

    #[test]
    fn points_outside_are_clamped() {
        let p = PointerPosition::within(-20.0, 999.0, 0.0, 0.0, 200.0, 100.0);
        assert_eq!(p, PointerPosition { x: 0.0, y: 100.0 });
    }

    #[test]
    fn empty_box_centers_the_glow() {
        let p = PointerPosition::within(10.0, 10.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(p.glow_style(), "--glow-x: 50.0%; --glow-y: 50.0%;");
    }

    // A panel laid out below the fold: the glow follows the panel's own box.
    #[test]
    fn top_left_of_panel_box_is_origin_wherever_the_panel_sits() {
        let panel = PointerPosition::within(320.0, 1480.0, 320.0, 1480.0, 640.0, 420.0);
        assert_eq!(panel, PointerPosition { x: 0.0, y: 0.0 });

        let page = PointerPosition::within(320.0, 1480.0, 0.0, 0.0, 1280.0, 2960.0);
        assert_eq!(page, PointerPosition { x: 25.0, y: 50.0 });
        assert_ne!(panel, page);
    }
}
