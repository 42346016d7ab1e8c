/// Decisions about how much drawing one event cycle needs
pub struct Coalescer;

impl Coalescer {
    /// Draw at most once per cycle: when updates asked for it, or when the
    /// terminal itself needs a full repaint (startup, resize, resume).
    #[inline]
    pub fn decide_render(queued_render_reqs: usize, forced: bool) -> bool {
        queued_render_reqs > 0 || forced
    }

    /// Several resizes in one burst collapse into the last one
    #[inline]
    pub fn decide_resize(
        last_seen: Option<(u16, u16)>,
        events: &[(u16, u16)],
    ) -> Option<(u16, u16)> {
        events.last().copied().or(last_seen)
    }
}
