//! Scroll position state and the arithmetic mapping it to visible lines
//!
//! The engine tracks `top`, the first visible line of a data sequence, and
//! `visible_count`, the number of lines in a page. It never draws: callers
//! take the range it computes, slice their data with it and write the lines
//! to the surface themselves.
//!
//! Every operation is total. Out-of-range requests saturate at the nearest
//! valid position instead of failing, so a stray key or a resize can only
//! produce an odd frame, never a crash.

use std::ops::Range;

use ratatui::crossterm::event::KeyCode;

use super::surface::Surface;
use crate::keys::{ScrollKey, ScrollKeys};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEngine {
    top: usize,
    visible_count: usize,
    keys: ScrollKeys,
}

impl ScrollEngine {
    /// Direction tag for [`ScrollEngine::scroll`] towards the first line
    pub const UP: isize = -1;
    /// Direction tag for [`ScrollEngine::scroll`] towards the last line
    pub const DOWN: isize = 1;

    /// Create an engine whose page spans the full height of `surface`
    pub fn new<S: Surface + ?Sized>(surface: &S) -> Self {
        Self::with_visible_count(surface.height())
    }

    pub fn with_visible_count(visible_count: usize) -> Self {
        Self {
            top: 0,
            visible_count,
            keys: ScrollKeys::default(),
        }
    }

    pub fn top(&self) -> usize {
        self.top
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn scroll_keys(&self) -> ScrollKeys {
        self.keys
    }

    /// Set the number of lines shown per page.
    ///
    /// Independent of the surface height, so callers can reserve rows for
    /// headers and footers. Zero is accepted and yields empty ranges.
    pub fn set_visible_count(&mut self, n: usize) {
        self.visible_count = n;
    }

    pub fn set_scroll_keys(&mut self, up_key: KeyCode, down_key: KeyCode) {
        self.keys = ScrollKeys::new(up_key, down_key);
    }

    /// Exclusive end of the visible window.
    ///
    /// The physical height always wins over `top + visible_count`. Once `top`
    /// has moved past the height the range is empty rather than inverted.
    pub fn bottom_index<S: Surface + ?Sized>(&self, surface: &S) -> usize {
        self.top
            .saturating_add(self.visible_count)
            .min(surface.height())
            .max(self.top)
    }

    /// `(top, bottom)` bounds of the visible window
    pub fn visible_range<S: Surface + ?Sized>(&self, surface: &S) -> (usize, usize) {
        (self.top, self.bottom_index(surface))
    }

    /// Same bounds as [`ScrollEngine::visible_range`] as a half-open range
    pub fn visible_slice<S: Surface + ?Sized>(&self, surface: &S) -> Range<usize> {
        self.top..self.bottom_index(surface)
    }

    /// Subset of `data` inside the visible window.
    ///
    /// Does not touch `top`. Bounds past the end of `data` are cut to its
    /// length, so an over-scrolled window yields a short or empty slice.
    pub fn crop_to_range<'a, T, S: Surface + ?Sized>(
        &self,
        surface: &S,
        data: &'a [T],
    ) -> &'a [T] {
        let end = self.bottom_index(surface).min(data.len());
        let start = self.top.min(end);
        &data[start..end]
    }

    /// Pull `top` back so the last page of a `len`-line sequence is shown
    /// when the visible window reaches its end.
    pub fn clamp_to_len<S: Surface + ?Sized>(&mut self, surface: &S, len: usize) {
        if self.bottom_index(surface) >= len {
            self.top = len.saturating_sub(self.visible_count);
        }
    }

    /// Move `top` by a signed number of lines without any end-of-data bound.
    pub fn scroll(&mut self, direction: isize) {
        self.top = self.top.saturating_add_signed(direction);
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.top = self.top.saturating_sub(n);
    }

    /// Move `top` forward by `n`, stopping where the visible window would
    /// pass `restrict`.
    ///
    /// `restrict` is normally the data length. Without it the surface height
    /// minus one is used.
    pub fn scroll_down<S: Surface + ?Sized>(
        &mut self,
        surface: &S,
        n: usize,
        restrict: Option<usize>,
    ) {
        let advanced = self.top.saturating_add(n);
        let limit = advanced.min(self.max_top(surface, restrict));
        self.top = advanced.min(limit);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.visible_count);
    }

    pub fn page_down<S: Surface + ?Sized>(&mut self, surface: &S, restrict: Option<usize>) {
        self.scroll_down(surface, self.visible_count, restrict);
    }

    pub fn jump_to_top(&mut self) {
        self.top = 0;
    }

    pub fn jump_to_bottom<S: Surface + ?Sized>(&mut self, surface: &S, restrict: Option<usize>) {
        self.top = self.max_top(surface, restrict);
    }

    pub fn reset(&mut self) {
        self.top = 0;
    }

    pub fn at_top(&self) -> bool {
        self.top == 0
    }

    pub fn at_bottom<S: Surface + ?Sized>(&self, surface: &S, restrict: Option<usize>) -> bool {
        self.top >= self.max_top(surface, restrict)
    }

    /// Apply one resolved key to the scroll position.
    ///
    /// Returns whether the key was a scroll key. `Other` keys leave the state
    /// untouched.
    pub fn handle_key<S: Surface + ?Sized>(
        &mut self,
        surface: &S,
        key: ScrollKey,
        restrict: Option<usize>,
    ) -> bool {
        #[cfg(debug_assertions)]
        let before = self.top;

        match key {
            ScrollKey::Up => self.scroll_up(1),
            ScrollKey::Down => self.scroll_down(surface, 1, restrict),
            ScrollKey::Other(_) => return false,
        }

        #[cfg(debug_assertions)]
        log::debug!("{:?}: top {} -> {}", key, before, self.top);

        true
    }

    /// Read the surface's current key and scroll if it is bound.
    ///
    /// Meant to run once per frame before the visible range is recomputed.
    pub fn auto_scroll<S: Surface + ?Sized>(
        &mut self,
        surface: &S,
        restrict: Option<usize>,
    ) -> bool {
        let Some(code) = surface.current_key_code() else {
            return false;
        };
        let key = self.keys.resolve(code);
        self.handle_key(surface, key, restrict)
    }

    /// Largest `top` that `scroll_down` can reach for this bound
    fn max_top<S: Surface + ?Sized>(&self, surface: &S, restrict: Option<usize>) -> usize {
        let restrict = restrict.unwrap_or_else(|| surface.height().saturating_sub(1));
        restrict.saturating_sub(self.visible_count)
    }
}

#[cfg(test)]
#[path = "scroll_engine_tests.rs"]
mod scroll_engine_tests;
