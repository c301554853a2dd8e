//! Display boundary. The core never depends on what a viewer does with a buffer.

use log::info;

use crate::raster::PixelBuffer;

/// Something that can show a buffer to a person
pub trait Viewer {
    fn display(&mut self, buffer: &PixelBuffer) -> Result<(), String>;
}

/// Viewer for headless builds: records what would have been shown
#[derive(Debug, Default)]
pub struct LogViewer {
    shown: usize,
}

impl LogViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of buffers passed to `display` so far
    pub fn shown(&self) -> usize {
        self.shown
    }
}

impl Viewer for LogViewer {
    fn display(&mut self, buffer: &PixelBuffer) -> Result<(), String> {
        self.shown += 1;
        info!(
            "display requested for {}x{} buffer (built without the `viewer` feature)",
            buffer.width(),
            buffer.height()
        );
        Ok(())
    }
}

#[cfg(feature = "viewer")]
pub use sdl::SdlViewer;

#[cfg(feature = "viewer")]
mod sdl {
    use std::thread;
    use std::time::Duration;

    use sdl2::event::Event;
    use sdl2::keyboard::Keycode;
    use sdl2::pixels::PixelFormatEnum;

    use super::Viewer;
    use crate::raster::PixelBuffer;

    const MAX_WINDOW_WIDTH: u32 = 1280;
    const MAX_WINDOW_HEIGHT: u32 = 960;

    /// Window size that fits the screen budget while keeping the aspect ratio
    pub(super) fn window_size(width: u32, height: u32) -> (u32, u32) {
        let sx = MAX_WINDOW_WIDTH as f32 / width as f32;
        let sy = MAX_WINDOW_HEIGHT as f32 / height as f32;
        let scale = sx.min(sy).min(1.0);
        (
            ((width as f32 * scale) as u32).max(1),
            ((height as f32 * scale) as u32).max(1),
        )
    }

    /// Opens an SDL2 window showing the buffer until it is closed or Escape is pressed
    pub struct SdlViewer {
        title: String,
    }

    impl SdlViewer {
        pub fn new(title: impl Into<String>) -> Self {
            Self {
                title: title.into(),
            }
        }
    }

    impl Viewer for SdlViewer {
        fn display(&mut self, buffer: &PixelBuffer) -> Result<(), String> {
            let sdl_context = sdl2::init()?;
            let video_subsystem = sdl_context.video()?;

            let (width, height) = buffer.dimensions();
            let (win_w, win_h) = window_size(width, height);
            let window = video_subsystem
                .window(&self.title, win_w, win_h)
                .position_centered()
                .build()
                .map_err(|e| e.to_string())?;

            let mut canvas = window
                .into_canvas()
                .accelerated()
                .present_vsync()
                .build()
                .map_err(|e| e.to_string())?;

            let texture_creator = canvas.texture_creator();
            let mut texture = texture_creator
                .create_texture_streaming(PixelFormatEnum::RGBA8888, width, height)
                .map_err(|e| e.to_string())?;
            texture
                .update(None, &buffer.to_rgba8888(), (width * 4) as usize)
                .map_err(|e| e.to_string())?;

            let mut event_pump = sdl_context.event_pump()?;
            'show: loop {
                for event in event_pump.poll_iter() {
                    match event {
                        Event::Quit { .. }
                        | Event::KeyDown {
                            keycode: Some(Keycode::Escape),
                            ..
                        } => break 'show,
                        _ => {},
                    }
                }
                canvas.copy(&texture, None, None)?;
                canvas.present();
                thread::sleep(Duration::from_millis(16));
            }
            Ok(())
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Color;

    #[test]
    fn test_log_viewer_counts() {
        let buf = PixelBuffer::blank(2, 2, Color::BLACK).unwrap();
        let mut viewer = LogViewer::new();
        viewer.display(&buf).unwrap();
        viewer.display(&buf).unwrap();
        assert_eq!(viewer.shown(), 2);
    }
}
