use gridfall_engine::coords::Dimensions;

/// Demo configuration.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,

    /// Initial window size in physical pixels.
    pub window: Dimensions,

    /// Source frame size. 21:9 by default, so the 4:3 window letterboxes.
    pub frame: Dimensions,

    /// Grid spacing in frame pixels.
    pub grid_cell: u32,

    /// Scroll speed in frame pixels per second.
    pub grid_speed: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        const FRAME_WIDTH: u32 = 800;

        Self {
            title: "gridfall video demo".to_string(),
            window: Dimensions::new(1024, 768),
            frame: Dimensions::new(FRAME_WIDTH, (f64::from(FRAME_WIDTH) * 9.0 / 21.0) as u32),
            grid_cell: 40,
            grid_speed: 150.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame_is_21_by_9_truncated() {
        let config = DemoConfig::default();
        assert_eq!(config.frame, Dimensions::new(800, 342));
        assert!(!config.window.is_empty());
    }
}
