use crate::config::TrailConfig;
use super::points::TrailPoint;

/// Arrow glyph, 3 rows by 5 columns.
pub const GLYPH: [[bool; 5]; 3] = [
    [false, false, true, false, false],
    [false, true, false, true, false],
    [true, false, false, false, true],
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub color: &'static str,
    pub alpha: f64,
    pub glow_color: &'static str,
    pub glow_blur: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    Segment { from: (f64, f64), to: (f64, f64), width: f64, paint: Paint },
    /// Moves the origin to `origin` and rotates by `radians` until the
    /// matching `PopTransform`.
    PushTransform { origin: (f64, f64), radians: f64 },
    PopTransform,
    FillSquare { x: f64, y: f64, side: f64, paint: Paint },
}

/// Builds everything one frame paints for the current trail.
pub fn frame_commands(
    points: &[TrailPoint],
    surface: (u32, u32),
    config: &TrailConfig,
) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::Clear {
        width: surface.0 as f64,
        height: surface.1 as f64,
    }];

    if points.len() > 1 {
        glow_trail(points, config, &mut commands);
    }

    for (i, point) in points.iter().enumerate() {
        let t = i as f64 / config.max_points as f64;
        let size = 8.0 + (1.0 - t) * 10.0;
        pixel_arrow(point.x, point.y, size, t, config, &mut commands);
    }

    commands
}

fn glow_trail(points: &[TrailPoint], config: &TrailConfig, out: &mut Vec<DrawCommand>) {
    let len = points.len() as f64;
    for (i, pair) in points.windows(2).enumerate() {
        let fade = 1.0 - i as f64 / len;
        out.push(DrawCommand::Segment {
            from: (pair[0].x, pair[0].y),
            to: (pair[1].x, pair[1].y),
            width: 8.0 * fade,
            paint: Paint {
                color: config.glow_color,
                alpha: 0.12 * fade,
                glow_color: config.glow_color,
                glow_blur: 25.0 * fade,
            },
        });
    }
}

fn pixel_arrow(
    x: f64,
    y: f64,
    size: f64,
    t: f64,
    config: &TrailConfig,
    out: &mut Vec<DrawCommand>,
) {
    let pixel = (size / 5.0).max(2.0);
    let paint = Paint {
        color: config.main_color,
        alpha: 0.2 + (1.0 - t) * 0.5,
        glow_color: config.glow_color,
        glow_blur: 20.0 * (1.0 - t),
    };
    let rows = GLYPH.len() as f64;

    out.push(DrawCommand::PushTransform {
        origin: (x, y),
        radians: config.glyph_angle.to_radians(),
    });
    for (row, cells) in GLYPH.iter().enumerate() {
        let cols = cells.len() as f64;
        for (col, _) in cells.iter().enumerate().filter(|(_, on)| **on) {
            out.push(DrawCommand::FillSquare {
                x: (col as f64 - cols / 2.0) * pixel,
                y: (row as f64 - rows / 2.0) * pixel,
                side: pixel,
                paint,
            });
        }
    }
    out.push(DrawCommand::PopTransform);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn point(x: f64, y: f64) -> TrailPoint {
        TrailPoint::new(x, y)
    }

    #[test]
    fn empty_trail_only_clears() {
        let commands = frame_commands(&[], (800, 600), &TrailConfig::default());
        assert_eq!(commands, vec![DrawCommand::Clear { width: 800.0, height: 600.0 }]);
    }

    #[test]
    fn single_point_draws_a_glyph_but_no_segments() {
        let commands = frame_commands(&[point(10.0, 20.0)], (100, 100), &TrailConfig::default());
        assert!(!commands.iter().any(|c| matches!(c, DrawCommand::Segment { .. })));

        let squares = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillSquare { .. }))
            .count();
        assert_eq!(squares, 5);
        assert_eq!(
            commands[1],
            DrawCommand::PushTransform {
                origin: (10.0, 20.0),
                radians: (-30.0f64).to_radians()
            }
        );
        assert_eq!(commands.last(), Some(&DrawCommand::PopTransform));
    }

    #[test]
    fn segments_fade_with_age() {
        let points = [point(0.0, 0.0), point(10.0, 0.0), point(20.0, 0.0), point(30.0, 0.0)];
        let commands = frame_commands(&points, (100, 100), &TrailConfig::default());
        let segments: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Segment { from, to, width, paint } => Some((*from, *to, *width, *paint)),
                _ => None,
            })
            .collect();

        assert_eq!(segments.len(), 3);
        for (i, (from, to, width, paint)) in segments.iter().enumerate() {
            let fade = 1.0 - i as f64 / 4.0;
            assert_eq!(*from, (points[i].x, points[i].y));
            assert_eq!(*to, (points[i + 1].x, points[i + 1].y));
            assert!(close(*width, 8.0 * fade));
            assert!(close(paint.alpha, 0.12 * fade));
            assert!(close(paint.glow_blur, 25.0 * fade));
            assert_eq!(paint.color, "#C4FFC2");
        }
    }

    #[test]
    fn newest_glyph_is_largest_and_brightest() {
        let commands = frame_commands(&[point(0.0, 0.0), point(5.0, 5.0)], (50, 50), &TrailConfig::default());
        let squares: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillSquare { x, y, side, paint } => Some((*x, *y, *side, *paint)),
                _ => None,
            })
            .collect();
        assert_eq!(squares.len(), 10);

        // newest: size 18, pixel 3.6; tip of the arrow at column 2, row 0
        let (x, y, side, paint) = squares[0];
        assert!(close(side, 3.6));
        assert!(close(x, (2.0 - 2.5) * 3.6));
        assert!(close(y, (0.0 - 1.5) * 3.6));
        assert!(close(paint.alpha, 0.7));
        assert!(close(paint.glow_blur, 20.0));
        assert_eq!(paint.color, "#EEFFA8");

        // second: t = 1/20, size 17.5
        let (_, _, side, paint) = squares[5];
        assert!(close(side, 3.5));
        assert!(close(paint.alpha, 0.2 + 0.95 * 0.5));
        assert!(close(paint.glow_blur, 19.0));
    }

    #[test]
    fn pixel_size_never_drops_below_two() {
        let config = TrailConfig { max_points: 1, ..TrailConfig::default() };
        // t = 5 gives a negative size; the pixel floor still holds
        let points: Vec<_> = (0..6).map(|i| point(i as f64, 0.0)).collect();
        let commands = frame_commands(&points, (10, 10), &config);
        assert!(commands.iter().all(|c| match c {
            DrawCommand::FillSquare { side, .. } => *side >= 2.0,
            _ => true,
        }));
    }
}
