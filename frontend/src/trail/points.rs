use crate::config::TrailConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub alpha: f64,
}

impl TrailPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, alpha: 1.0 }
    }
}

/// Recent pointer samples, newest first, never longer than `max_points`.
#[derive(Clone, Debug)]
pub struct Trail {
    points: Vec<TrailPoint>,
    max_points: usize,
    decay: f64,
    ease: f64,
    prune_below: f64,
}

impl Trail {
    pub fn new(config: &TrailConfig) -> Self {
        Self {
            points: Vec::with_capacity(config.max_points + 1),
            max_points: config.max_points,
            decay: config.decay,
            ease: config.ease,
            prune_below: config.prune_below,
        }
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.points.insert(0, TrailPoint::new(x, y));
        if self.points.len() > self.max_points {
            self.points.pop();
        }
    }

    /// One decay tick. Each point after the first eases toward the point in
    /// front of it (already moved this tick), every alpha shrinks, and faded
    /// points are dropped.
    pub fn decay_and_prune(&mut self) {
        for i in 0..self.points.len() {
            if i > 0 {
                let newer = self.points[i - 1];
                let point = &mut self.points[i];
                point.x += (newer.x - point.x) * self.ease;
                point.y += (newer.y - point.y) * self.ease;
            }
            self.points[i].alpha *= self.decay;
        }
        let floor = self.prune_below;
        self.points.retain(|p| p.alpha > floor);
    }

    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail() -> Trail {
        Trail::new(&TrailConfig::default())
    }

    #[test]
    fn keeps_only_the_most_recent_twenty_newest_first() {
        let mut trail = trail();
        for i in 0..57 {
            trail.push(i as f64, -(i as f64));
            assert!(trail.len() <= 20);
        }
        assert_eq!(trail.len(), 20);
        let xs: Vec<f64> = trail.points().iter().map(|p| p.x).collect();
        let expected: Vec<f64> = (37..57).rev().map(|i| i as f64).collect();
        assert_eq!(xs, expected);
        assert!(trail.points().iter().all(|p| p.alpha == 1.0));
    }

    #[test]
    fn single_point_only_loses_alpha() {
        let mut trail = trail();
        trail.push(42.5, 7.25);
        trail.decay_and_prune();
        let p = trail.points()[0];
        assert_eq!((p.x, p.y), (42.5, 7.25));
        assert!((p.alpha - 0.86).abs() < 1e-12);
    }

    #[test]
    fn older_point_eases_toward_newer_neighbour() {
        let mut trail = trail();
        trail.push(100.0, 100.0);
        trail.push(110.0, 105.0);
        trail.decay_and_prune();

        let newest = trail.points()[0];
        let older = trail.points()[1];
        assert_eq!((newest.x, newest.y), (110.0, 105.0));
        assert!((older.x - (100.0 + 10.0 * 0.14)).abs() < 1e-9);
        assert!((older.y - (100.0 + 5.0 * 0.14)).abs() < 1e-9);
        assert!((older.alpha - 0.86).abs() < 1e-12);
    }

    #[test]
    fn easing_chains_through_already_moved_neighbours() {
        let mut trail = trail();
        trail.push(0.0, 0.0);
        trail.push(0.0, 0.0);
        trail.push(100.0, 0.0);
        trail.decay_and_prune();

        // second point moved to 14, third eases toward 14 rather than 0
        let xs: Vec<f64> = trail.points().iter().map(|p| p.x).collect();
        assert!((xs[1] - 14.0).abs() < 1e-9);
        assert!((xs[2] - 14.0 * 0.14).abs() < 1e-9);
    }

    #[test]
    fn faded_points_are_pruned_and_stay_gone() {
        let mut trail = trail();
        trail.push(1.0, 1.0);

        let mut ticks = 0;
        let mut alpha: f64 = 1.0;
        while alpha * 0.86 > 0.03 {
            alpha *= 0.86;
            trail.decay_and_prune();
            ticks += 1;
            assert_eq!(trail.len(), 1, "pruned too early at tick {ticks}");
        }
        trail.decay_and_prune();
        assert!(trail.is_empty());
        for _ in 0..5 {
            trail.decay_and_prune();
            assert!(trail.is_empty());
        }
    }

    #[test]
    fn only_faded_points_are_dropped_from_a_mixed_trail() {
        let mut trail = trail();
        trail.push(0.0, 0.0);
        for _ in 0..20 {
            trail.decay_and_prune();
        }
        trail.push(5.0, 5.0);

        // the older point sits at 0.86^20 and has three ticks left in it
        for _ in 0..3 {
            trail.decay_and_prune();
            assert_eq!(trail.len(), 2);
        }
        trail.decay_and_prune();
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.points()[0].x, 5.0);
    }
}
