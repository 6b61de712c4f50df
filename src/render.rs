//! Renderer seam.
//!
//! The runtime never talks to a windowing stack directly. Everything that
//! draws goes through the [`Renderer`] trait with two primitives: a filled
//! rectangle (optionally tagged with a texture/frame key) and an outline
//! rectangle for collider debug visualization. Hosts plug in a real backend;
//! tests and the headless demo use the implementations below.

/// Drawing primitives consumed by sprites and collider debug draws.
///
/// Coordinates are world-space pixels with a top-left origin; `w`/`h` are the
/// rectangle size in pixels.
pub trait Renderer {
    /// Clear the frame before the entity pass.
    fn clear(&mut self);

    /// Draw a filled rectangle. `frame` is the current animation frame key,
    /// if the caller has one.
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, frame: Option<&str>);

    /// Draw a rectangle outline (collider debug visualization).
    fn draw_outline(&mut self, x: f32, y: f32, w: f32, h: f32);
}

/// Renderer that discards every call. Used by headless scenes and most tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn clear(&mut self) {}
    fn draw_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _frame: Option<&str>) {}
    fn draw_outline(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {}
}

/// Renderer that logs every call at `trace` level. Handy for the demo binary
/// when diagnosing draw order without a window.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceRenderer;

impl Renderer for TraceRenderer {
    fn clear(&mut self) {
        log::trace!("clear");
    }

    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, frame: Option<&str>) {
        log::trace!("rect {x:.2},{y:.2} {w:.0}x{h:.0} frame={frame:?}");
    }

    fn draw_outline(&mut self, x: f32, y: f32, w: f32, h: f32) {
        log::trace!("outline {x:.2},{y:.2} {w:.0}x{h:.0}");
    }
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        frame: Option<String>,
    },
    Outline {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
}

/// Renderer that records every call, for asserting on draw order in tests.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, frame: Option<&str>) {
        self.calls.push(DrawCall::Rect {
            x,
            y,
            w,
            h,
            frame: frame.map(str::to_string),
        });
    }

    fn draw_outline(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(DrawCall::Outline { x, y, w, h });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_renderer_keeps_call_order() {
        let mut r = RecordingRenderer::default();
        r.clear();
        r.draw_rect(1.0, 2.0, 3.0, 4.0, Some("run_0"));
        r.draw_outline(5.0, 6.0, 7.0, 8.0);
        assert_eq!(r.calls.len(), 3);
        assert_eq!(r.calls[0], DrawCall::Clear);
        assert!(matches!(r.calls[1], DrawCall::Rect { .. }));
        assert!(matches!(r.calls[2], DrawCall::Outline { .. }));
    }

    #[test]
    fn test_noop_renderer_accepts_calls() {
        let mut r = NoopRenderer;
        r.clear();
        r.draw_rect(0.0, 0.0, 10.0, 10.0, None);
        r.draw_outline(0.0, 0.0, 10.0, 10.0);
    }
}
