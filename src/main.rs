#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
use anyhow::{anyhow, Result};
use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;
use components::figure::Figure;
use systems::sample_curve::sys_sample_curves;
use vello::kurbo::Size;
use vello::peniko::Color;
use vello::util::RenderContext;
use vello::wgpu;
use vello::{AaConfig, Renderer, Scene};
use winit::application::ApplicationHandler;
use winit::event::*;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use render::{create_figure_window, create_vello_renderer, ActiveRenderState, RenderState};
use plot::figure::draw_figure;
use plot::text::TextRenderer;

mod approximations;
mod components;
mod config;
mod math;
mod plot;
mod render;
mod systems;

struct BrachiApp<'s> {
    context: RenderContext,
    renderers: Vec<Option<Renderer>>,
    state: RenderState<'s>,
    scene: Scene,
    text: TextRenderer,
    world: World, // the figure and everything drawn into it
}

impl<'s> BrachiApp<'s> {
    fn resume(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let RenderState::Suspended(cached_window) = &mut self.state else {
            return Ok(());
        };

        let window = match cached_window.take() {
            Some(window) => window,
            None => create_figure_window(event_loop, self.world.resource::<Figure>())?,
        };

        let size = window.inner_size();
        let surface_future = self.context.create_surface(
            window.clone(),
            size.width,
            size.height,
            wgpu::PresentMode::AutoVsync,
        );
        let surface = pollster::block_on(surface_future)
            .map_err(|err| anyhow!("error creating surface: {err}"))?;
        log::info!("surface ready: {}x{} on device {}", size.width, size.height, surface.dev_id);

        self.renderers
            .resize_with(self.context.devices.len(), || None);
        if self.renderers[surface.dev_id].is_none() {
            self.renderers[surface.dev_id] = Some(create_vello_renderer(&self.context, &surface)?);
        }

        window.request_redraw();
        self.state = RenderState::Active(ActiveRenderState { window, surface });
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        let RenderState::Active(render_state) = &self.state else {
            return Ok(());
        };

        let surface = &render_state.surface;
        let width = surface.config.width;
        let height = surface.config.height;

        self.scene.reset();
        draw_figure(
            &mut self.scene,
            &mut self.text,
            &mut self.world,
            Size::new(width as f64, height as f64),
            render_state.window.scale_factor(),
        );

        let device_handle = &self.context.devices[surface.dev_id];
        let surface_texture = surface.surface.get_current_texture()?;

        self.renderers[surface.dev_id]
            .as_mut()
            .ok_or_else(|| anyhow!("no renderer for device {}", surface.dev_id))?
            .render_to_surface(
                &device_handle.device,
                &device_handle.queue,
                &self.scene,
                &surface_texture,
                &vello::RenderParams {
                    base_color: Color::WHITE,
                    width,
                    height,
                    antialiasing_method: AaConfig::Msaa16,
                },
            )
            .map_err(|err| anyhow!("failed to render to surface: {err}"))?;

        surface_texture.present();
        device_handle.device.poll(wgpu::Maintain::Poll);
        Ok(())
    }
}

impl<'s> ApplicationHandler for BrachiApp<'s> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(err) = self.resume(event_loop) {
            log::error!("{err:#}");
            event_loop.exit();
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        if let RenderState::Active(state) = &self.state {
            log::debug!("suspended, keeping window {:?}", state.window.id());
            self.state = RenderState::Suspended(Some(state.window.clone()));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let render_state = match &mut self.state {
            RenderState::Active(state) if state.window.id() == window_id => state,
            _ => return,
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("figure closed");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.context
                        .resize_surface(&mut render_state.surface, size.width, size.height);
                    render_state.window.request_redraw();
                }
            }
            WindowEvent::ScaleFactorChanged { .. } => render_state.window.request_redraw(),
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    log::error!("{err:#}");
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}

/// Builds the figure: the triangle path, then the spline, then the axes decoration.
fn build_world() -> World {
    let mut world = World::default();
    world.insert_resource(Figure::new(config::FIGURE_WIDTH, config::FIGURE_HEIGHT));

    let start = config::start();
    let end = config::end();
    let mid = math::bezier::midpoint(start, end);

    approximations::draw_triangle_approximation(&mut world, start, end, mid);
    approximations::draw_quadratic_spline(&mut world, start, end, mid);
    world.run_system_once(sys_sample_curves);

    {
        let mut figure = world.resource_mut::<Figure>();
        figure.x_label = Some(config::X_LABEL.to_string());
        figure.y_label = Some(config::Y_LABEL.to_string());
        figure.title = Some(config::TITLE.to_string());
        figure.grid = true;
    }

    world
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let world = build_world();
    log::info!("figure built with {} entities", world.entities().len());

    let mut app = BrachiApp {
        context: RenderContext::new(),
        renderers: Vec::new(),
        state: RenderState::Suspended(None),
        scene: Scene::new(),
        text: TextRenderer::new(),
        world,
    };

    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;
    Ok(())
}
