use std::error::Error;

use log::{error, info};
use thiserror::Error;
use winit::{
    dpi::LogicalSize,
    error::{EventLoopError, OsError},
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::explore::{ExploreController, ExploreOutcome, ExploreSettings};
use crate::core::data::image_size::ImageSize;
use crate::input::gui::key_map::{is_quit_key, map_key};
use crate::presenters::file::image_file::ImageFilePresenter;
use crate::presenters::pixels::presenter::PixelsPresenter;
use crate::storage::metadata_sidecar::JsonSidecarStore;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("event loop failed")]
    EventLoop(#[from] EventLoopError),
    #[error("could not create window")]
    Window(#[from] OsError),
    #[error("could not create pixels surface")]
    Pixels(#[from] pixels::Error),
}

fn log_error_chain(context: &str, err: &dyn Error) {
    let mut message = format!("{context}: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {cause}"));
        source = cause.source();
    }
    error!("{}", message);
}

/// Opens the viewer window and blocks until it is closed.
pub fn run_gui(settings: ExploreSettings) -> Result<(), GuiError> {
    let event_loop = EventLoop::new()?;

    // pixels needs a 'static window
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Explorer")
            .with_inner_size(LogicalSize::new(960.0, 560.0))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let mut presenter = PixelsPresenter::new(window)?;
    let mut controller =
        ExploreController::new(settings, ImageFilePresenter::new(), JsonSidecarStore::new());
    let mut needs_render = true;

    let settings = controller.settings();
    info!(
        "{} scheme, theme primary {} foreground {} background {}",
        settings.colour_scheme,
        settings.theme.primary,
        settings.theme.foreground,
        settings.theme.background
    );
    info!(
        "Snapshots: {}x{} .{} into {}",
        settings.snapshot_size.width(),
        settings.snapshot_size.height(),
        settings.snapshot_extension,
        settings.snapshot_dir.display()
    );

    event_loop.run(move |event, elwt| {
        let Event::WindowEvent { event, window_id } = event else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if is_quit_key(&event.logical_key, event.state) {
                    elwt.exit();
                    return;
                }

                let Some(input) = map_key(&event.logical_key, event.state) else {
                    return;
                };

                match controller.handle(input) {
                    Ok(ExploreOutcome::Redraw) => {
                        needs_render = true;
                        window.request_redraw();
                    }
                    Ok(ExploreOutcome::SnapshotSaved(path)) => {
                        info!("Snapshot saved to {}", path.display());
                    }
                    Ok(ExploreOutcome::Unchanged) => {}
                    Err(err) => log_error_chain("Snapshot failed", &err),
                }
            }
            WindowEvent::Resized(size) => {
                if let Err(err) = presenter.resize(size.width, size.height) {
                    log_error_chain("Resize failed", &err);
                    elwt.exit();
                    return;
                }
                needs_render = true;
                window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                if needs_render {
                    needs_render = false;

                    if let Ok(size) = ImageSize::new(presenter.width(), presenter.height()) {
                        match controller.render(size) {
                            Ok(raster) => presenter.show(&raster),
                            Err(err) => log_error_chain("Render failed", &err),
                        }
                    }
                }

                if let Err(err) = presenter.render() {
                    log_error_chain("Present failed", &err);
                    elwt.exit();
                }
            }
            _ => {}
        }
    })?;

    Ok(())
}
