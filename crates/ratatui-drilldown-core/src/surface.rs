use crate::host::Host;
use crate::host::Visual;
use crate::input::InputEvent;
use crate::input::MouseEvent;
use crate::render;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::layout::Rect;

/// Clickable regions registered during the last frame, in paint order.
///
/// Keep one `HitMap` alongside your app state: a [`Surface`] refills it while drawing, and the
/// event loop resolves pointer events against it until the next draw.
#[derive(Clone, Debug)]
pub struct HitMap<M> {
    regions: Vec<(Rect, M)>,
}

impl<M> Default for HitMap<M> {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
        }
    }
}

impl<M> HitMap<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, message: M) {
        self.regions.push((area, message));
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn regions(&self) -> impl Iterator<Item = (&Rect, &M)> {
        self.regions.iter().map(|(r, m)| (r, m))
    }

    /// The top-most region containing `pos`. Later registrations paint over earlier ones, so they
    /// win.
    pub fn hit(&self, pos: Position) -> Option<&M> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, m)| m)
    }
}

impl<M: Clone> HitMap<M> {
    pub fn resolve(&self, event: &MouseEvent) -> Option<M> {
        if !event.is_activation() {
            return None;
        }
        let hit = self.hit(event.position()).cloned();
        if hit.is_none() {
            tracing::trace!(x = event.x, y = event.y, "click outside any target");
        }
        hit
    }

    pub fn resolve_event(&self, event: &InputEvent) -> Option<M> {
        event.as_mouse().and_then(|m| self.resolve(m))
    }
}

/// Ratatui host: paints into a [`Buffer`] and records clickable regions into a [`HitMap`].
pub struct Surface<'a, M> {
    buf: &'a mut Buffer,
    hits: &'a mut HitMap<M>,
}

impl<'a, M> Surface<'a, M> {
    /// Starts a new frame. Regions from the previous frame are discarded.
    pub fn new(buf: &'a mut Buffer, hits: &'a mut HitMap<M>) -> Self {
        hits.clear();
        Self { buf, hits }
    }

    fn paint(&mut self, area: Rect, visual: &Visual) -> Option<Rect> {
        let area = area.intersection(self.buf.area);
        if area.is_empty() {
            return None;
        }

        self.buf.set_style(area, visual.style);
        let pad = visual.pad_left.min(area.width);
        let y = area.y + area.height.saturating_sub(1) / 2;
        render::render_line_clipped(
            area.x + pad,
            y,
            area.width - pad,
            self.buf,
            &visual.content,
            visual.style,
        );
        Some(area)
    }
}

impl<M> Host<M> for Surface<'_, M> {
    fn clickable(&mut self, area: Rect, visual: &Visual, on_click: M) {
        if let Some(area) = self.paint(area, visual) {
            self.hits.push(area, on_click);
        }
    }

    fn container(&mut self, area: Rect, visual: &Visual) {
        self.paint(area, visual);
    }

    fn buffer_mut(&mut self) -> &mut Buffer {
        self.buf
    }
}
