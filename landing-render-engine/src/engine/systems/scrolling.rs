use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use content::tuning::{SECTION_VISIBILITY_THRESHOLD, WHEEL_LINE_HEIGHT};

use crate::engine::ui::sections::{PageRoot, page_height_vh};
use crate::engine::ui::ModalState;

/// Index of the section currently steering the particle scene.
/// Single writer (the observer), read continuously by the renderer.
/// Resets to 0 on startup.
#[derive(Resource, Default, Debug, PartialEq, Eq)]
pub struct ActiveSection(pub usize);

/// Scroll offset of the page in logical pixels, plus the viewport and
/// content metrics needed to clamp it.
#[derive(Resource)]
pub struct PageScroll {
    pub offset: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl Default for PageScroll {
    fn default() -> Self {
        Self {
            offset: 0.0,
            viewport_height: 1080.0,
            content_height: f32::MAX,
        }
    }
}

impl PageScroll {
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset());
    }

    /// Jump so the given page-space height (in viewport-height units)
    /// lands at the top of the viewport.
    pub fn scroll_to_vh(&mut self, target_vh: f32) {
        self.offset = (target_vh / 100.0 * self.viewport_height).clamp(0.0, self.max_offset());
    }
}

/// One watched region of the page, in page-space pixels.
#[derive(Debug, Clone, Copy)]
pub struct SectionAnchor {
    pub top: f32,
    pub height: f32,
    pub section: usize,
}

/// The four observed anchors: hero plus the three pillars, each one
/// viewport tall. Hero and the first pillar both map to section 0.
pub fn observer_anchors(viewport_height: f32) -> [SectionAnchor; 4] {
    let sections = [0, 0, 1, 2];
    let mut anchors = [SectionAnchor {
        top: 0.0,
        height: viewport_height,
        section: 0,
    }; 4];
    for (i, anchor) in anchors.iter_mut().enumerate() {
        anchor.top = i as f32 * viewport_height;
        anchor.section = sections[i];
    }
    anchors
}

/// Fraction of the anchor inside the viewport at the given offset.
pub fn visible_fraction(anchor: &SectionAnchor, offset: f32, viewport_height: f32) -> f32 {
    let top = anchor.top - offset;
    let bottom = top + anchor.height;
    let visible = bottom.min(viewport_height) - top.max(0.0);
    (visible / anchor.height).clamp(0.0, 1.0)
}

/// Map anchor visibility to a section index. Anchors are evaluated in
/// page order and the last one past the threshold wins; if none
/// qualifies the current section is kept.
pub fn resolve_section(
    anchors: &[SectionAnchor],
    offset: f32,
    viewport_height: f32,
    current: usize,
) -> usize {
    let mut resolved = current;
    for anchor in anchors {
        if visible_fraction(anchor, offset, viewport_height) >= SECTION_VISIBILITY_THRESHOLD {
            resolved = anchor.section;
        }
    }
    resolved
}

/// Keep the scroll metrics in step with the window.
pub fn sync_viewport_metrics(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut scroll: ResMut<PageScroll>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    scroll.viewport_height = window.height();
    scroll.content_height = page_height_vh() / 100.0 * window.height();
    scroll.offset = scroll.offset.clamp(0.0, scroll.max_offset());
}

/// Wheel and trackpad input. An open modal locks the page in place.
pub fn handle_scroll_input(
    mut wheel_events: EventReader<MouseWheel>,
    modal_state: Res<ModalState>,
    mut scroll: ResMut<PageScroll>,
) {
    if modal_state.any_open() {
        wheel_events.clear();
        return;
    }
    for event in wheel_events.read() {
        let step = match event.unit {
            MouseScrollUnit::Line => event.y * WHEEL_LINE_HEIGHT,
            MouseScrollUnit::Pixel => event.y,
        };
        scroll.scroll_by(-step);
    }
}

/// The viewport observer: publish the section of the anchor crossing
/// the visibility threshold.
pub fn observe_sections(scroll: Res<PageScroll>, mut active: ResMut<ActiveSection>) {
    let anchors = observer_anchors(scroll.viewport_height);
    let resolved = resolve_section(&anchors, scroll.offset, scroll.viewport_height, active.0);
    if resolved != active.0 {
        info!("Active section: {} → {}", active.0, resolved);
        active.0 = resolved;
    }
}

/// Translate the page container to reflect the scroll offset.
pub fn apply_page_scroll(scroll: Res<PageScroll>, mut roots: Query<&mut Node, With<PageRoot>>) {
    for mut node in &mut roots {
        node.top = Val::Px(-scroll.offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f32 = 1000.0;

    #[test]
    fn hero_and_first_pillar_share_section_zero() {
        let anchors = observer_anchors(VH);
        assert_eq!(anchors.map(|a| a.section), [0, 0, 1, 2]);
        assert_eq!(anchors.map(|a| a.top), [0.0, VH, 2.0 * VH, 3.0 * VH]);
    }

    #[test]
    fn visibility_fraction_tracks_the_scroll_offset() {
        let anchors = observer_anchors(VH);
        assert_eq!(visible_fraction(&anchors[0], 0.0, VH), 1.0);
        assert_eq!(visible_fraction(&anchors[1], 0.0, VH), 0.0);
        let frac = visible_fraction(&anchors[1], 0.6 * VH, VH);
        assert!((frac - 0.6).abs() < 1e-4);
    }

    #[test]
    fn threshold_crossings_publish_the_mapped_section() {
        let anchors = observer_anchors(VH);
        assert_eq!(resolve_section(&anchors, 0.0, VH, 0), 0);
        assert_eq!(resolve_section(&anchors, 0.6 * VH, VH, 0), 0);
        assert_eq!(resolve_section(&anchors, 1.6 * VH, VH, 0), 1);
        assert_eq!(resolve_section(&anchors, 2.6 * VH, VH, 1), 2);
    }

    #[test]
    fn simultaneous_crossings_resolve_last_write_wins() {
        let anchors = observer_anchors(VH);
        // At exactly half a viewport between pillars two and three, both
        // anchors sit at the threshold; the later one wins.
        assert_eq!(resolve_section(&anchors, 2.5 * VH, VH, 1), 2);
    }

    #[test]
    fn no_qualifying_anchor_keeps_the_current_section() {
        let anchors = observer_anchors(VH);
        assert_eq!(resolve_section(&anchors, 5.0 * VH, VH, 2), 2);
    }

    #[test]
    fn scrolling_clamps_to_the_content_range() {
        let mut scroll = PageScroll {
            offset: 0.0,
            viewport_height: VH,
            content_height: 3.0 * VH,
        };
        scroll.scroll_by(-100.0);
        assert_eq!(scroll.offset, 0.0);
        scroll.scroll_by(10.0 * VH);
        assert_eq!(scroll.offset, 2.0 * VH);
    }
}
