/// Context passed to graph nodes during rendering.
pub struct RenderCtx {
    /// Audio sample rate (e.g., 48000.0)
    pub sample_rate: f32,
}

impl RenderCtx {
    pub fn new(sample_rate: f32) -> Self {
        Self { sample_rate }
    }
}

/// Core trait for stereo audio sources.
///
/// `out` is interleaved stereo: `out[2i]` is the left sample of frame `i`,
/// `out[2i + 1]` the right. Implementations must be realtime-safe: no
/// allocation, no locking, no blocking.
pub trait StereoNode: Send {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx);

    /// Check if this node is still producing sound.
    fn is_active(&self) -> bool {
        true
    }
}

/// Allow boxed nodes to be used as nodes (for dynamic dispatch)
impl StereoNode for Box<dyn StereoNode> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        (**self).render_block(out, ctx)
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}
