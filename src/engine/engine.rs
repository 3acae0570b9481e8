use crate::{
    config::Config,
    engine::{EngineError, Projector, RayCaster, RayHit, Screen},
    platform::Platform,
    renderer::{BACKGROUND, Renderer, draw_minimap, draw_view},
    sim::{HeldKeys, Player, advance, is_blocked},
    world::Grid,
};

/// Owns the map, the player and the back-end; drives one frame at a time.
pub struct Engine<R: Renderer> {
    pub renderer: R,
    pub grid: Grid,
    pub player: Player,
    pub config: Config,
    pub screen: Screen,
    pub show_minimap: bool,
    hits: Vec<RayHit>,
}

impl<R: Renderer> Engine<R> {
    /// Validate `config` and `grid`, then spawn the player from `config`.
    pub fn new(renderer: R, grid: Grid, config: Config) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::BadConfig)?;
        grid.validate_enclosed()?;

        let player = Player::from_config(&config);
        if is_blocked(&grid, config.tile_size, player.pos.x, player.pos.y) {
            return Err(EngineError::SpawnInWall {
                x: player.pos.x,
                y: player.pos.y,
            });
        }

        log::info!(
            "map {}x{} cells, tile {} units, spawn ({}, {})",
            grid.width(),
            grid.height(),
            config.tile_size,
            player.pos.x,
            player.pos.y
        );

        Ok(Self {
            renderer,
            grid,
            player,
            screen: Screen::new(config.screen_w, config.screen_h),
            config,
            show_minimap: true,
            hits: Vec::with_capacity(config.screen_w),
        })
    }

    /// Apply one frame of input to the player.
    pub fn update(&mut self, keys: HeldKeys) {
        self.player = advance(self.player, keys, &self.grid, self.config.tile_size);
    }

    /// Rays of the most recent frame, one per column.
    pub fn hits(&self) -> &[RayHit] {
        &self.hits
    }

    /// Clear, cast and draw every column, overlay the minimap, then hand the
    /// buffer to `submit`.
    pub fn render_frame<F, E>(&mut self, submit: F) -> Result<(), E>
    where
        F: FnOnce(&[crate::renderer::Pixel], usize, usize) -> Result<(), E>,
    {
        self.renderer
            .begin_frame(self.screen.w, self.screen.h, BACKGROUND);

        RayCaster::new(&self.grid, self.config.tile_size, self.config.ray_step).cast_all(
            &self.player,
            self.config.fov(),
            self.screen.w,
            &mut self.hits,
        );

        let projector = Projector::new(self.screen, self.config.tile_size);
        draw_view(&mut self.renderer, &self.hits, &projector, self.player.angle);

        if self.show_minimap {
            draw_minimap(&mut self.renderer, &self.grid, &self.player, &self.config);
        }

        self.renderer.end_frame(submit)
    }

    /// Input → move → render → present until the platform asks to stop.
    /// Returns the number of frames shown.
    pub fn run<P: Platform>(&mut self, platform: &mut P) -> Result<u64, P::Error> {
        let mut frames = 0u64;
        while !platform.quit_requested() {
            let keys = platform.held_keys();
            self.update(keys);
            self.render_frame(|fb, w, h| platform.present(fb, w, h))?;
            frames += 1;
        }
        log::info!("quit after {frames} frames");
        Ok(frames)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        renderer::{DrawCall, Recorder},
        world::MapError,
    };
    use glam::Vec2;
    use std::convert::Infallible;

    fn engine() -> Engine<Recorder> {
        Engine::new(Recorder::default(), Grid::builtin(), Config::default()).unwrap()
    }

    #[test]
    fn spawns_from_config() {
        let e = engine();
        assert_eq!(e.player.pos, Vec2::new(300.0, 300.0));
        assert_eq!(e.player.angle, 0.0);
    }

    #[test]
    fn rejects_spawn_in_wall() {
        let cfg = Config {
            spawn: (50.0, 50.0),
            ..Config::default()
        };
        let err = Engine::new(Recorder::default(), Grid::builtin(), cfg)
            .err()
            .unwrap();
        assert_eq!(err, EngineError::SpawnInWall { x: 50.0, y: 50.0 });
    }

    #[test]
    fn rejects_open_map() {
        let grid = Grid::new(4, 4, vec![0; 16]).unwrap();
        let err = Engine::new(Recorder::default(), grid, Config::default())
            .err()
            .unwrap();
        assert_eq!(err, EngineError::Map(MapError::OpenBorder { x: 0, y: 0 }));
    }

    #[test]
    fn rejects_bad_config() {
        let cfg = Config {
            screen_w: 0,
            ..Config::default()
        };
        assert!(matches!(
            Engine::new(Recorder::default(), Grid::builtin(), cfg),
            Err(EngineError::BadConfig(_))
        ));
    }

    #[test]
    fn frame_draws_columns_then_minimap() {
        let mut e = engine();
        e.render_frame(|_, w, h| {
            assert_eq!((w, h), (600, 600));
            Ok::<(), Infallible>(())
        })
        .unwrap();

        let rec = &e.renderer;
        assert_eq!(rec.clear, Some(BACKGROUND));
        assert_eq!(rec.vlines().count(), 600);
        assert_eq!(rec.rects().count(), 101);
        assert!(matches!(rec.calls[0], DrawCall::VLine { x: 0, .. }));
        assert!(matches!(rec.calls[600], DrawCall::Rect { x: 0, y: 0, .. }));
        assert_eq!(e.hits().len(), 600);
    }

    #[test]
    fn minimap_can_be_hidden() {
        let mut e = engine();
        e.show_minimap = false;
        e.render_frame(|_, _, _| Ok::<(), Infallible>(())).unwrap();
        assert_eq!(e.renderer.rects().count(), 0);
    }
}
