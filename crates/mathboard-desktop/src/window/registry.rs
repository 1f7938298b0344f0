//! Window registry: lifecycle, z-order, focus and transparency

use std::collections::HashMap;

use crate::background::BackgroundTheme;
use crate::math::{Rect, Size, Vec2};
use crate::tool::ToolKind;
use super::{ChromeLayout, Window, WindowId, WindowRegion};

/// Owner of every open window and of the desktop-wide stacking counter
///
/// All operations are total. An id that is no longer open is ignored, since
/// a close click can race a focus click on the same window.
pub struct WindowRegistry {
    /// Open windows in creation order (paint order comes from `z_index`)
    windows: Vec<Window>,
    /// Highest z-index handed out so far
    top_z: u32,
    /// Desktop-wide background theme
    background: BackgroundTheme,
    /// Per-window transparency, mirrored onto `Window::transparent`
    transparency: HashMap<WindowId, bool>,
    /// Floor applied by `resize`
    min_size: Size,
}

impl WindowRegistry {
    /// Create an empty registry whose first window gets `z_seed + 1`
    pub fn new(z_seed: u32, min_size: Size) -> Self {
        Self {
            windows: Vec::new(),
            top_z: z_seed,
            background: BackgroundTheme::default(),
            transparency: HashMap::new(),
            min_size,
        }
    }

    /// Create a window on top of every other one
    pub fn create(&mut self, kind: ToolKind, position: Vec2, size: Size, now_ms: f64) -> WindowId {
        let id = self.allocate_id(kind, now_ms);
        let z_index = self.bump_z();
        let transparent = kind.spec().transparent_by_default;

        if transparent {
            self.transparency.insert(id.clone(), true);
        }

        self.windows.push(Window {
            id: id.clone(),
            kind,
            position,
            size: size.at_least(Size::ZERO),
            z_index,
            transparent,
        });

        tracing::debug!(window = %id, kind = %kind, z_index, "window opened");
        id
    }

    /// Close a window
    pub fn close(&mut self, id: &WindowId) {
        let before = self.windows.len();
        self.windows.retain(|w| &w.id != id);
        self.transparency.remove(id);

        if self.windows.len() != before {
            tracing::debug!(window = %id, "window closed");
        }
    }

    /// Bring a window to the top
    ///
    /// Always consumes a z value, even if the window already is on top.
    pub fn focus(&mut self, id: &WindowId) {
        if !self.contains(id) {
            return;
        }
        let z_index = self.bump_z();
        if let Some(window) = self.get_mut(id) {
            window.z_index = z_index;
        }
        tracing::trace!(window = %id, z_index, "window focused");
    }

    /// Commit a window position
    pub fn move_window(&mut self, id: &WindowId, position: Vec2) {
        if let Some(window) = self.get_mut(id) {
            window.position = position;
        }
    }

    /// Commit a window size, floored at the minimum window size
    pub fn resize(&mut self, id: &WindowId, size: Size) {
        let min_size = self.min_size;
        if let Some(window) = self.get_mut(id) {
            window.size = size.at_least(min_size);
        }
    }

    /// Switch a window between opaque and ghost chrome
    pub fn set_transparent(&mut self, id: &WindowId, transparent: bool) {
        if let Some(window) = self.windows.iter_mut().find(|w| &w.id == id) {
            window.transparent = transparent;
            self.transparency.insert(id.clone(), transparent);
        }
    }

    /// Set the desktop background
    #[inline]
    pub fn set_background(&mut self, theme: BackgroundTheme) {
        self.background = theme;
    }

    #[inline]
    pub fn background(&self) -> BackgroundTheme {
        self.background
    }

    /// Get a window by ID
    pub fn get(&self, id: &WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| &w.id == id)
    }

    fn get_mut(&mut self, id: &WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| &w.id == id)
    }

    /// Check if a window is open
    #[inline]
    pub fn contains(&self, id: &WindowId) -> bool {
        self.get(id).is_some()
    }

    /// Transparency override for a window (false if none recorded)
    pub fn is_transparent(&self, id: &WindowId) -> bool {
        self.transparency.get(id).copied().unwrap_or(false)
    }

    /// Windows in creation order
    #[inline]
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Windows sorted back to front
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.iter().collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Topmost window
    pub fn focused(&self) -> Option<&WindowId> {
        self.windows.iter().max_by_key(|w| w.z_index).map(|w| &w.id)
    }

    /// Current value of the stacking counter
    #[inline]
    pub fn top_z(&self) -> u32 {
        self.top_z
    }

    /// Get the number of windows
    #[inline]
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Find the topmost window region at a surface position
    ///
    /// `frame_of` supplies the rectangle each window is currently drawn at,
    /// which differs from the committed geometry during a drag or resize.
    pub fn region_at<F>(&self, pos: Vec2, frame_of: F) -> Option<(WindowId, WindowRegion)>
    where
        F: Fn(&Window) -> Rect,
    {
        self.windows_by_z().into_iter().rev().find_map(|window| {
            let frame = frame_of(window);
            let layout = if window.transparent {
                ChromeLayout::ghost(frame)
            } else {
                ChromeLayout::opaque(frame)
            };
            layout.hit(pos).map(|region| (window.id.clone(), region))
        })
    }

    fn bump_z(&mut self) -> u32 {
        self.top_z = self.top_z.saturating_add(1);
        self.top_z
    }

    /// Stamp an id from the clock, suffixing it if that id is already open
    fn allocate_id(&self, kind: ToolKind, now_ms: f64) -> WindowId {
        let mut attempt = 1;
        loop {
            let id = WindowId::stamped(kind, now_ms, attempt);
            if !self.contains(&id) {
                return id;
            }
            attempt += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> WindowRegistry {
        WindowRegistry::new(100, Size::new(280.0, 200.0))
    }

    fn open(reg: &mut WindowRegistry, kind: ToolKind, now_ms: f64) -> WindowId {
        reg.create(kind, Vec2::new(100.0, 100.0), Size::new(400.0, 300.0), now_ms)
    }

    fn committed_frame(w: &Window) -> Rect {
        w.rect()
    }

    #[test]
    fn test_create_assigns_increasing_z() {
        let mut reg = registry();
        let a = open(&mut reg, ToolKind::Dice, 1.0);
        let b = open(&mut reg, ToolKind::Clock, 2.0);

        assert_eq!(reg.get(&a).unwrap().z_index, 101);
        assert_eq!(reg.get(&b).unwrap().z_index, 102);
        assert_eq!(reg.top_z(), 102);
        assert_eq!(reg.focused(), Some(&b));
    }

    #[test]
    fn test_same_millisecond_ids_stay_unique() {
        let mut reg = registry();
        let a = open(&mut reg, ToolKind::Dice, 5.0);
        let b = open(&mut reg, ToolKind::Dice, 5.0);
        let c = open(&mut reg, ToolKind::Dice, 5.0);

        assert_eq!(a.as_str(), "dice-5");
        assert_eq!(b.as_str(), "dice-5-2");
        assert_eq!(c.as_str(), "dice-5-3");
    }

    #[test]
    fn test_transparent_default_recorded() {
        let mut reg = registry();
        let ruler = open(&mut reg, ToolKind::Ruler, 1.0);
        let dice = open(&mut reg, ToolKind::Dice, 2.0);

        assert!(reg.get(&ruler).unwrap().transparent);
        assert!(reg.is_transparent(&ruler));
        assert!(!reg.get(&dice).unwrap().transparent);
        assert!(!reg.is_transparent(&dice));
    }

    #[test]
    fn test_focus_bumps_even_when_on_top() {
        let mut reg = registry();
        let a = open(&mut reg, ToolKind::Dice, 1.0);

        reg.focus(&a);
        reg.focus(&a);
        assert_eq!(reg.top_z(), 103);
        assert_eq!(reg.get(&a).unwrap().z_index, 103);
    }

    #[test]
    fn test_close_clears_transparency() {
        let mut reg = registry();
        let ruler = open(&mut reg, ToolKind::Ruler, 1.0);

        reg.close(&ruler);
        assert_eq!(reg.count(), 0);
        assert!(!reg.is_transparent(&ruler));
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut reg = registry();
        let a = open(&mut reg, ToolKind::Dice, 1.0);
        let ghost = WindowId::from("dice-999");
        let before: Vec<Window> = reg.windows().to_vec();
        let top_z = reg.top_z();

        reg.focus(&ghost);
        reg.move_window(&ghost, Vec2::new(1.0, 1.0));
        reg.resize(&ghost, Size::new(900.0, 900.0));
        reg.set_transparent(&ghost, true);
        reg.close(&ghost);

        assert_eq!(reg.windows(), &before[..]);
        assert_eq!(reg.top_z(), top_z);
        assert!(!reg.is_transparent(&ghost));
        assert!(reg.contains(&a));
    }

    #[test]
    fn test_resize_floors_at_minimum() {
        let mut reg = registry();
        let a = open(&mut reg, ToolKind::Dice, 1.0);

        reg.resize(&a, Size::new(-50.0, 120.0));
        let size = reg.get(&a).unwrap().size;
        assert!((size.width - 280.0).abs() < 0.001);
        assert!((size.height - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_set_transparent_toggles_model() {
        let mut reg = registry();
        let a = open(&mut reg, ToolKind::Protractor, 1.0);

        reg.set_transparent(&a, false);
        assert!(!reg.get(&a).unwrap().transparent);
        assert!(!reg.is_transparent(&a));

        reg.set_transparent(&a, true);
        assert!(reg.get(&a).unwrap().transparent);
    }

    #[test]
    fn test_windows_by_z_back_to_front() {
        let mut reg = registry();
        let a = open(&mut reg, ToolKind::Dice, 1.0);
        let b = open(&mut reg, ToolKind::Clock, 2.0);
        reg.focus(&a);

        let order: Vec<&WindowId> = reg.windows_by_z().into_iter().map(|w| &w.id).collect();
        assert_eq!(order, vec![&b, &a]);
        // creation order untouched
        assert_eq!(reg.windows()[0].id, a);
    }

    #[test]
    fn test_region_at_prefers_topmost() {
        let mut reg = registry();
        let a = open(&mut reg, ToolKind::Dice, 1.0);
        let b = open(&mut reg, ToolKind::Clock, 2.0);

        let (hit, region) = reg.region_at(Vec2::new(200.0, 250.0), committed_frame).unwrap();
        assert_eq!(hit, b);
        assert_eq!(region, WindowRegion::Content);

        reg.focus(&a);
        let (hit, _) = reg.region_at(Vec2::new(200.0, 250.0), committed_frame).unwrap();
        assert_eq!(hit, a);

        assert!(reg.region_at(Vec2::new(10.0, 10.0), committed_frame).is_none());
    }

    #[test]
    fn test_background() {
        let mut reg = registry();
        assert_eq!(reg.background(), BackgroundTheme::Grid);
        reg.set_background(BackgroundTheme::Black);
        assert_eq!(reg.background(), BackgroundTheme::Black);
    }
}
