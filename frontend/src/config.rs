use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while running locally with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Tuning for the cursor trail overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailConfig {
    /// Most points the trail ever holds.
    pub max_points: usize,
    /// Alpha multiplier applied on every decay tick.
    pub decay: f64,
    /// How far a point moves toward its newer neighbour per tick.
    pub ease: f64,
    /// Points at or below this alpha are dropped.
    pub prune_below: f64,
    pub tick_millis: u32,
    pub main_color: &'static str,
    pub glow_color: &'static str,
    /// Glyph rotation in degrees.
    pub glyph_angle: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            max_points: 20,
            decay: 0.86,
            ease: 0.14,
            prune_below: 0.03,
            tick_millis: 30,
            main_color: "#EEFFA8",
            glow_color: "#C4FFC2",
            glyph_angle: -30.0,
        }
    }
}
