//! Display handles

use tracing::debug;

use crate::{CaptureBackend, CaptureResult, NativeDisplay};

/// A system display that can be captured
///
/// Opening a [`Capturer`](crate::Capturer) consumes the handle by value,
/// so any later use of the display is a compile error and no second
/// session can ever be opened from the same handle. Dropping an
/// unconsumed handle releases the native display resource.
pub struct Display {
    pub(crate) raw: Box<dyn NativeDisplay>,
}

impl Display {
    /// All displays known to the backend
    pub fn all(backend: &dyn CaptureBackend) -> CaptureResult<Vec<Display>> {
        let displays: Vec<Display> = backend
            .displays()?
            .into_iter()
            .map(|raw| Display { raw })
            .collect();
        debug!(count = displays.len(), "enumerated displays");
        Ok(displays)
    }

    /// The primary display of the system
    pub fn primary(backend: &dyn CaptureBackend) -> CaptureResult<Display> {
        let raw = backend.primary()?;
        Ok(Display { raw })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.raw.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.raw.height()
    }
}

impl std::fmt::Debug for Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Display")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::sim::{SimBackend, SimDisplayConfig};
    use crate::{CaptureError, Capturer, Display};

    #[test]
    fn enumerates_displays_with_correct_dimensions() {
        let backend = SimBackend::new(vec![
            SimDisplayConfig::new(800, 600),
            SimDisplayConfig::new(1920, 1080),
        ]);
        let displays = Display::all(&backend).unwrap();
        assert_eq!(displays.len(), 2);
        assert_eq!((displays[0].width(), displays[0].height()), (800, 600));
        assert_eq!((displays[1].width(), displays[1].height()), (1920, 1080));
        for display in &displays {
            assert!(display.width() > 0 && display.height() > 0);
        }
    }

    #[test]
    fn enumerated_handles_are_independent() {
        let backend = SimBackend::new(vec![
            SimDisplayConfig::new(800, 600),
            SimDisplayConfig::new(1920, 1080),
        ]);
        let mut displays = Display::all(&backend).unwrap();
        let second = displays.pop().unwrap();
        let first = displays.pop().unwrap();

        // Consuming one handle leaves the other fully usable
        let capturer = Capturer::new(first).unwrap();
        assert_eq!((capturer.width(), capturer.height()), (800, 600));
        assert_eq!((second.width(), second.height()), (1920, 1080));
    }

    #[test]
    fn primary_is_the_first_configured_display() {
        let backend = SimBackend::new(vec![
            SimDisplayConfig::new(1024, 768),
            SimDisplayConfig::new(640, 480),
        ]);
        let display = Display::primary(&backend).unwrap();
        assert_eq!((display.width(), display.height()), (1024, 768));
    }

    #[test]
    fn primary_with_no_displays_fails() {
        let backend = SimBackend::new(Vec::new());
        assert!(matches!(
            Display::primary(&backend),
            Err(CaptureError::NoDisplays)
        ));
        assert!(Display::all(&backend).unwrap().is_empty());
    }
}
