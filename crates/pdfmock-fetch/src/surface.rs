//! Drawing-surface provisioning.
//!
//! The rendering pipeline asks a factory for scratch canvases, resizes them
//! between uses, and hands them back. Invalid arguments here are bugs in the
//! test that built them, so they panic instead of returning an error.

use image::{Rgba, RgbaImage};
use tracing::trace;

/// Creates, resizes, and releases drawing surfaces.
///
/// A surface is used by one owner at a time: create, any number of
/// reset/draw calls, destroy.
pub trait SurfaceFactory {
    type Surface;

    /// Panics if either dimension is zero.
    fn create(&self, width: u32, height: u32) -> Self::Surface;

    /// Panics if the surface was destroyed or a dimension is zero.
    fn reset(&self, surface: &mut Self::Surface, width: u32, height: u32);

    /// Releases backing storage immediately. Panics if already destroyed.
    fn destroy(&self, surface: &mut Self::Surface);
}

/// RGBA pixel buffer.
#[derive(Clone, Debug)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        (x < self.width() && y < self.height()).then(|| self.pixels.get_pixel(x, y).0)
    }
}

/// Drawing state bound to one canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawingContext {
    fill_style: [u8; 4],
}

impl Default for DrawingContext {
    fn default() -> Self {
        Self {
            fill_style: [0, 0, 0, 255],
        }
    }
}

impl DrawingContext {
    pub fn fill_style(&self) -> [u8; 4] {
        self.fill_style
    }
}

/// A canvas with its context. Both are `None` once destroyed.
#[derive(Debug)]
pub struct CanvasAndContext {
    pub canvas: Option<Canvas>,
    pub context: Option<DrawingContext>,
}

impl CanvasAndContext {
    /// Zero once the surface has been destroyed.
    pub fn width(&self) -> u32 {
        self.canvas.as_ref().map_or(0, Canvas::width)
    }

    pub fn height(&self) -> u32 {
        self.canvas.as_ref().map_or(0, Canvas::height)
    }

    pub fn is_live(&self) -> bool {
        self.canvas.is_some() && self.context.is_some()
    }

    pub fn set_fill_style(&mut self, rgba: [u8; 4]) {
        let context = self.context.as_mut().expect("Context is not specified");
        context.fill_style = rgba;
    }

    /// Fill a rectangle with the current fill style, clipped to the canvas.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        let fill = self
            .context
            .as_ref()
            .expect("Context is not specified")
            .fill_style;
        let canvas = self.canvas.as_mut().expect("Canvas is not specified");
        let x_end = x.saturating_add(width).min(canvas.width());
        let y_end = y.saturating_add(height).min(canvas.height());
        for py in y..y_end {
            for px in x..x_end {
                canvas.pixels.put_pixel(px, py, Rgba(fill));
            }
        }
    }
}

/// In-process canvas factory backed by [`RgbaImage`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CanvasFactory;

impl CanvasFactory {
    pub fn new() -> Self {
        Self
    }
}

impl SurfaceFactory for CanvasFactory {
    type Surface = CanvasAndContext;

    fn create(&self, width: u32, height: u32) -> CanvasAndContext {
        assert!(width > 0 && height > 0, "Invalid canvas size");
        trace!(width, height, "create canvas");
        CanvasAndContext {
            canvas: Some(Canvas::new(width, height)),
            context: Some(DrawingContext::default()),
        }
    }

    fn reset(&self, surface: &mut CanvasAndContext, width: u32, height: u32) {
        assert!(surface.canvas.is_some(), "Canvas is not specified");
        assert!(width > 0 && height > 0, "Invalid canvas size");
        trace!(width, height, "reset canvas");
        // Resizing a canvas clears it and resets its drawing state.
        surface.canvas = Some(Canvas::new(width, height));
        surface.context = Some(DrawingContext::default());
    }

    fn destroy(&self, surface: &mut CanvasAndContext) {
        let canvas = surface.canvas.as_mut().expect("Canvas is not specified");
        canvas.pixels = RgbaImage::new(0, 0);
        surface.canvas = None;
        surface.context = None;
        trace!("destroy canvas");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_allocates_requested_size() {
        let surface = CanvasFactory::new().create(20, 10);
        assert_eq!(surface.width(), 20);
        assert_eq!(surface.height(), 10);
        assert!(surface.is_live());
        assert_eq!(surface.canvas.as_ref().unwrap().pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    #[should_panic(expected = "Invalid canvas size")]
    fn create_rejects_zero_width() {
        CanvasFactory::new().create(0, 10);
    }

    #[test]
    #[should_panic(expected = "Invalid canvas size")]
    fn create_rejects_zero_height() {
        CanvasFactory::new().create(10, 0);
    }

    #[test]
    fn reset_resizes_and_clears() {
        let factory = CanvasFactory::new();
        let mut surface = factory.create(4, 4);
        surface.set_fill_style([255, 0, 0, 255]);
        surface.fill_rect(0, 0, 4, 4);

        factory.reset(&mut surface, 8, 2);
        assert_eq!((surface.width(), surface.height()), (8, 2));
        let canvas = surface.canvas.as_ref().unwrap();
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(surface.context.as_ref().unwrap().fill_style(), [0, 0, 0, 255]);
    }

    #[test]
    #[should_panic(expected = "Invalid canvas size")]
    fn reset_rejects_zero_dimension() {
        let factory = CanvasFactory::new();
        let mut surface = factory.create(4, 4);
        factory.reset(&mut surface, 4, 0);
    }

    #[test]
    fn destroy_zeroes_and_drops_context() {
        let factory = CanvasFactory::new();
        let mut surface = factory.create(16, 16);
        factory.destroy(&mut surface);
        assert_eq!(surface.width(), 0);
        assert_eq!(surface.height(), 0);
        assert!(surface.context.is_none());
        assert!(!surface.is_live());
    }

    #[test]
    #[should_panic(expected = "Canvas is not specified")]
    fn reset_after_destroy_panics() {
        let factory = CanvasFactory::new();
        let mut surface = factory.create(16, 16);
        factory.destroy(&mut surface);
        factory.reset(&mut surface, 16, 16);
    }

    #[test]
    #[should_panic(expected = "Canvas is not specified")]
    fn double_destroy_panics() {
        let factory = CanvasFactory::new();
        let mut surface = factory.create(1, 1);
        factory.destroy(&mut surface);
        factory.destroy(&mut surface);
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut surface = CanvasFactory::new().create(3, 3);
        surface.set_fill_style([0, 255, 0, 255]);
        surface.fill_rect(2, 2, 10, 10);
        let canvas = surface.canvas.as_ref().unwrap();
        assert_eq!(canvas.pixel(2, 2), Some([0, 255, 0, 255]));
        assert_eq!(canvas.pixel(1, 1), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(3, 3), None);
    }
}
