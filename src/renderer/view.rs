use crate::{
    engine::{Projector, RayHit},
    renderer::{Renderer, Rgb},
};

/// First-person pass: one grayscale vertical line per ray, column `i` for
/// `hits[i]`.
pub fn draw_view<R: Renderer + ?Sized>(
    r: &mut R,
    hits: &[RayHit],
    projector: &Projector,
    player_angle: f32,
) {
    for (x, hit) in hits.iter().enumerate() {
        let s = projector.project(hit.distance, hit.angle, player_angle);
        r.draw_vline(x as i32, s.top, s.bottom, Rgb::gray(s.brightness));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::Screen,
        renderer::{DrawCall, Recorder},
    };

    #[test]
    fn one_line_per_hit() {
        let proj = Projector::new(Screen::new(4, 600), 100.0);
        let hits = [
            RayHit {
                distance: 200.0,
                angle: 0.0,
            },
            RayHit {
                distance: 10_000.0,
                angle: 0.0,
            },
        ];
        let mut rec = Recorder::default();
        draw_view(&mut rec, &hits, &proj, 0.0);

        assert_eq!(
            rec.calls,
            vec![
                DrawCall::VLine {
                    x: 0,
                    y0: 150,
                    y1: 449,
                    colour: Rgb::gray(155),
                },
                DrawCall::VLine {
                    x: 1,
                    y0: 297,
                    y1: 303,
                    colour: Rgb::gray(50),
                },
            ]
        );
    }
}
