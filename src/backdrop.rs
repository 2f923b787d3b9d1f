//! Backdrop builder and runner.

use winit::event_loop::{ControlFlow, EventLoop};

use crate::app::App;
use crate::config::Mode;
use crate::error::BackdropError;

/// Configures and runs the windowed backdrop.
///
/// Use method chaining to configure, then call `.run()` to start:
///
/// ```ignore
/// use plexus::{Backdrop, Mode};
///
/// Backdrop::new()
///     .with_mode(Mode::Arena)
///     .with_title("plexus")
///     .run()?;
/// ```
#[derive(Debug, Clone)]
pub struct Backdrop {
    pub(crate) mode: Mode,
    pub(crate) title: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl Backdrop {
    /// Create a backdrop with default settings (subtle mode, 1280x720).
    pub fn new() -> Self {
        Self {
            mode: Mode::default(),
            title: "plexus".to_string(),
            width: 1280,
            height: 720,
        }
    }

    /// Set the initial display mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Run the backdrop. Blocks until the window is closed.
    pub fn run(self) -> Result<(), BackdropError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let backdrop = Backdrop::new();
        assert_eq!(backdrop.mode, Mode::Subtle);
        assert_eq!((backdrop.width, backdrop.height), (1280, 720));
    }

    #[test]
    fn test_builder_chaining() {
        let backdrop = Backdrop::new()
            .with_mode(Mode::Arena)
            .with_title("ops console")
            .with_size(800, 600);
        assert_eq!(backdrop.mode, Mode::Arena);
        assert_eq!(backdrop.title, "ops console");
        assert_eq!((backdrop.width, backdrop.height), (800, 600));
    }
}
