use orrery_engine::{
    EngineContext, FrameClock, InputEvent, InputQueue, OrbitControls, OrreryResult,
    PerspectiveCamera, Renderer, Simulation, Viewport,
};

/// Generic app runner that wires up the per-frame loop.
///
/// Owns the simulation, its context, the camera with its controls and the
/// renderer. Browser glue shares it as `Rc<RefCell<AppRunner<_, _>>>`
/// between event handlers and the frame callback; nothing here touches the
/// DOM, so the loop runs natively under a `HeadlessRenderer`.
pub struct AppRunner<S: Simulation, R: Renderer> {
    sim: S,
    ctx: EngineContext,
    camera: PerspectiveCamera,
    controls: OrbitControls,
    renderer: R,
    clock: FrameClock,
    input: InputQueue,
    initialized: bool,
}

impl<S: Simulation, R: Renderer> AppRunner<S, R> {
    /// `fallback_seed` seeds the RNG when the config does not pin one.
    pub fn new(sim: S, renderer: R, fallback_seed: u64) -> Self {
        let config = sim.config();
        let viewport = renderer.size();

        let mut camera = PerspectiveCamera::new(config.fov_deg, viewport.aspect(), config.near, config.far);
        camera.position = config.camera_position;
        camera.look_at(config.camera_target);

        let mut controls = OrbitControls::new(&camera);
        controls.enable_damping = config.enable_damping;
        controls.damping_factor = config.damping_factor;
        controls.set_viewport(viewport);

        Self {
            ctx: EngineContext::new(config.seed.unwrap_or(fallback_seed)),
            clock: FrameClock::new(config.first_tick_dt),
            sim,
            camera,
            controls,
            renderer,
            input: InputQueue::new(),
            initialized: false,
        }
    }

    /// Build the scene. Call once after construction.
    pub fn init(&mut self) -> OrreryResult<()> {
        self.sim.init(&mut self.ctx)?;
        self.initialized = true;
        log::debug!(
            "runner: {} entities, {} lights, backend {}",
            self.ctx.scene.len(),
            self.ctx.lights.count(),
            self.renderer.backend()
        );
        Ok(())
    }

    /// Queue a pointer/wheel event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame at refresh timestamp `now_ms`: advance the simulation,
    /// let the controls move the camera, draw.
    pub fn tick(&mut self, now_ms: f64) {
        if !self.initialized {
            return;
        }

        let dt = self.clock.tick(now_ms);
        self.sim.update(&mut self.ctx, dt);

        self.controls.handle_input(&mut self.input);
        self.controls.update(&mut self.camera);

        self.renderer.render(&self.ctx.scene, &self.camera, &self.ctx.lights);
    }

    /// Match the camera and renderer to a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        let viewport = Viewport::new(width, height);
        self.camera.set_aspect(viewport.aspect());
        self.renderer.set_size(viewport);
        self.controls.set_viewport(viewport);
    }

    pub fn sim(&self) -> &S {
        &self.sim
    }

    pub fn sim_mut(&mut self) -> &mut S {
        &mut self.sim
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn controls_mut(&mut self) -> &mut OrbitControls {
        &mut self.controls
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec3;
    use orrery_engine::{
        Color, Entity, FrameScheduler, HeadlessRenderer, ManualScheduler, MeshComponent, PointerButton,
        SimConfig,
    };

    #[derive(Default)]
    struct Recorder {
        dts: Vec<f32>,
        fail_init: bool,
    }

    impl Simulation for Recorder {
        fn config(&self) -> SimConfig {
            SimConfig {
                seed: Some(7),
                ..SimConfig::default()
            }
        }

        fn init(&mut self, ctx: &mut EngineContext) -> OrreryResult<()> {
            if self.fail_init {
                return Err(orrery_engine::OrreryError::UnknownBody { name: "pluto".into() });
            }
            let id = ctx.next_id();
            ctx.scene.spawn(Entity::new(id).with_mesh(MeshComponent::basic(5.0, Color::WHITE)));
            Ok(())
        }

        fn update(&mut self, _ctx: &mut EngineContext, dt: f32) {
            self.dts.push(dt);
        }
    }

    fn runner() -> AppRunner<Recorder, HeadlessRenderer> {
        let mut r = AppRunner::new(Recorder::default(), HeadlessRenderer::new(Viewport::new(1024, 768)), 1);
        r.init().unwrap();
        r
    }

    #[test]
    fn camera_starts_from_config() {
        let r = runner();
        assert_eq!(r.camera().position, Vec3::new(0.0, 30.0, 50.0));
        assert_eq!(r.camera().target(), Vec3::ZERO);
        assert_eq!(r.camera().fov_deg, 75.0);
    }

    #[test]
    fn resize_updates_camera_and_renderer() {
        let mut r = runner();
        r.resize(800, 600);
        assert!((r.camera().aspect - 800.0 / 600.0).abs() < 1e-6);
        assert_eq!(r.renderer().size(), Viewport::new(800, 600));
        let expected = glam::Mat4::perspective_rh_gl(75f32.to_radians(), 800.0 / 600.0, 0.1, 1000.0);
        assert!(r.camera().projection_matrix().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn tick_before_init_does_nothing() {
        let mut r = AppRunner::new(Recorder::default(), HeadlessRenderer::new(Viewport::new(800, 600)), 1);
        r.tick(0.0);
        assert!(r.sim().dts.is_empty());
        assert_eq!(r.renderer().frames(), 0);
    }

    #[test]
    fn init_error_propagates() {
        let sim = Recorder {
            fail_init: true,
            ..Recorder::default()
        };
        let mut r = AppRunner::new(sim, HeadlessRenderer::default(), 1);
        assert!(r.init().is_err());
    }

    #[test]
    fn ticks_report_elapsed_seconds_and_render() {
        let mut r = runner();
        r.tick(1000.0);
        r.tick(1016.0);
        r.tick(1050.0);
        let dts = &r.sim().dts;
        assert!((dts[0] - 1.0 / 60.0).abs() < 1e-6);
        assert!((dts[1] - 0.016).abs() < 1e-6);
        assert!((dts[2] - 0.034).abs() < 1e-6);
        assert_eq!(r.renderer().frames(), 3);
        assert_eq!(r.renderer().last_frame().len(), 1);
    }

    #[test]
    fn queued_wheel_input_moves_camera_on_tick() {
        let mut r = runner();
        r.controls_mut().enable_damping = false;
        let before = r.camera().position.length();
        r.push_input(InputEvent::Wheel { delta_y: -100.0 });
        r.tick(0.0);
        assert!(r.camera().position.length() < before);
    }

    #[test]
    fn drag_rotates_camera_on_tick() {
        let mut r = runner();
        r.push_input(InputEvent::PointerDown { x: 100.0, y: 100.0, button: PointerButton::Primary });
        r.push_input(InputEvent::PointerMove { x: 200.0, y: 100.0 });
        r.tick(0.0);
        assert!(r.camera().position.x.abs() > 0.0);
    }

    #[test]
    fn scheduler_drives_shared_runner_until_cancelled() {
        let shared = Rc::new(RefCell::new(runner()));
        let mut scheduler = ManualScheduler::new();
        let loop_runner = Rc::clone(&shared);
        scheduler.start(Box::new(move |now| loop_runner.borrow_mut().tick(now)));

        assert!(scheduler.fire(0.0));
        assert!(scheduler.fire(16.0));
        scheduler.cancel();
        assert!(!scheduler.fire(32.0));

        assert_eq!(shared.borrow().sim().dts.len(), 2);
        assert_eq!(shared.borrow().renderer().frames(), 2);
    }
}
