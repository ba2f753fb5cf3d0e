use sdl2::video::FullscreenType;
use sdl2::video::Window;

pub struct WindowData {
    /// Width of the window in pixels
    pub width: u32,

    /// Height of the window in pixels
    pub height: u32,

    fullscreen: bool,
}

impl WindowData {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fullscreen: false,
        }
    }

    /// Switch between windowed mode and desktop fullscreen.
    pub fn toggle_fullscreen(&mut self, window: &mut Window) -> Result<(), String> {
        let mode = if self.fullscreen {
            FullscreenType::Off
        } else {
            FullscreenType::Desktop
        };

        window.set_fullscreen(mode)?;
        self.fullscreen = !self.fullscreen;

        Ok(())
    }
}
