use std::num::NonZeroUsize;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use vello::util::{RenderContext, RenderSurface};
use vello::{AaSupport, Renderer, RendererOptions};
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::components::figure::Figure;

// window plus the surface we draw the figure into
pub struct ActiveRenderState<'s> {
    pub surface: RenderSurface<'s>,
    pub window: Arc<Window>,
}

pub enum RenderState<'s> {
    Active(ActiveRenderState<'s>),
    /// Keeps the window across suspend so resuming does not open a second one.
    Suspended(Option<Arc<Window>>),
}

/// Opens a window at the figure's logical size, titled after the plot.
pub fn create_figure_window(event_loop: &ActiveEventLoop, figure: &Figure) -> Result<Arc<Window>> {
    let attr = Window::default_attributes()
        .with_inner_size(LogicalSize::new(figure.width, figure.height))
        .with_resizable(true)
        .with_title(figure.title.as_deref().unwrap_or("Figure"));
    let window = event_loop
        .create_window(attr)
        .context("failed to create the figure window")?;
    Ok(Arc::new(window))
}

pub fn create_vello_renderer(render_cx: &RenderContext, surface: &RenderSurface) -> Result<Renderer> {
    Renderer::new(
        &render_cx.devices[surface.dev_id].device,
        RendererOptions {
            surface_format: Some(surface.format),
            use_cpu: false,
            antialiasing_support: AaSupport::all(),
            num_init_threads: NonZeroUsize::new(1),
        },
    )
    .map_err(|err| anyhow!("couldn't create renderer: {err}"))
}
