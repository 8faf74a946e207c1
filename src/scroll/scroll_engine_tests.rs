//! Tests for ScrollEngine
//!
//! Unit tests live here, scenario and property tests in submodules.


use super::*;
use crate::test_utils::test_helpers::{TestSurface, numbered_lines};

fn engine_at(top: usize, visible_count: usize) -> ScrollEngine {
    let mut engine = ScrollEngine::with_visible_count(visible_count);
    engine.top = top;
    engine
}

#[test]
fn test_new_uses_surface_height() {
    let surface = TestSurface::new(24);
    let engine = ScrollEngine::new(&surface);
    assert_eq!(engine.top(), 0);
    assert_eq!(engine.visible_count(), 24);
    assert_eq!(engine.scroll_keys(), ScrollKeys::default());
}

#[test]
fn test_direction_constants() {
    assert_eq!(ScrollEngine::UP, -1);
    assert_eq!(ScrollEngine::DOWN, 1);
}

#[test]
fn test_set_visible_count_leaves_top() {
    let mut engine = engine_at(7, 10);
    engine.set_visible_count(3);
    assert_eq!(engine.visible_count(), 3);
    assert_eq!(engine.top(), 7);
}

#[test]
fn test_set_scroll_keys() {
    let mut engine = ScrollEngine::with_visible_count(10);
    engine.set_scroll_keys(KeyCode::Char('k'), KeyCode::Char('j'));
    assert_eq!(engine.scroll_keys().up, KeyCode::Char('k'));
    assert_eq!(engine.scroll_keys().down, KeyCode::Char('j'));
}

#[test]
fn test_bottom_index_data_span() {
    let surface = TestSurface::new(100);
    let engine = engine_at(5, 10);
    assert_eq!(engine.bottom_index(&surface), 15);
}

#[test]
fn test_bottom_index_physical_bound_wins() {
    let surface = TestSurface::new(12);
    let engine = engine_at(5, 10);
    assert_eq!(engine.bottom_index(&surface), 12);
}

#[test]
fn test_bottom_index_never_below_top() {
    let surface = TestSurface::new(12);
    let engine = engine_at(30, 10);
    assert_eq!(engine.bottom_index(&surface), 30);
    assert!(engine.visible_slice(&surface).is_empty());
}

#[test]
fn test_bottom_index_zero_visible_count() {
    let surface = TestSurface::new(12);
    let engine = engine_at(4, 0);
    assert_eq!(engine.visible_range(&surface), (4, 4));
}

#[test]
fn test_visible_range_forms_agree() {
    let surface = TestSurface::new(100);
    let engine = engine_at(20, 10);
    let (start, end) = engine.visible_range(&surface);
    assert_eq!((start, end), (20, 30));
    assert_eq!(engine.visible_slice(&surface), start..end);
}

#[test]
fn test_crop_to_range_middle() {
    let surface = TestSurface::new(100);
    let engine = engine_at(3, 4);
    let data = numbered_lines(50);
    assert_eq!(engine.crop_to_range(&surface, &data), &data[3..7]);
}

#[test]
fn test_crop_to_range_past_end_of_data_is_shortened() {
    let surface = TestSurface::new(100);
    let engine = engine_at(45, 10);
    let data = numbered_lines(50);
    assert_eq!(engine.crop_to_range(&surface, &data), &data[45..50]);
}

#[test]
fn test_crop_to_range_top_beyond_data_is_empty() {
    let surface = TestSurface::new(100);
    let engine = engine_at(80, 10);
    let data = numbered_lines(50);
    assert!(engine.crop_to_range(&surface, &data).is_empty());
}

#[test]
fn test_crop_to_range_empty_data() {
    let surface = TestSurface::new(100);
    let engine = engine_at(0, 10);
    let data: Vec<String> = Vec::new();
    assert!(engine.crop_to_range(&surface, &data).is_empty());
}

#[test]
fn test_crop_to_range_does_not_mutate_top() {
    let surface = TestSurface::new(100);
    let engine = engine_at(45, 10);
    let data = numbered_lines(50);
    let _ = engine.crop_to_range(&surface, &data);
    assert_eq!(engine.top(), 45);
}

#[test]
fn test_clamp_to_len_pulls_back_to_last_page() {
    let surface = TestSurface::new(100);
    let mut engine = engine_at(45, 10);
    engine.clamp_to_len(&surface, 50);
    assert_eq!(engine.top(), 40);
}

#[test]
fn test_clamp_to_len_noop_inside_data() {
    let surface = TestSurface::new(100);
    let mut engine = engine_at(12, 10);
    engine.clamp_to_len(&surface, 50);
    assert_eq!(engine.top(), 12);
}

#[test]
fn test_clamp_to_len_short_data_goes_to_zero() {
    let surface = TestSurface::new(100);
    let mut engine = engine_at(6, 10);
    engine.clamp_to_len(&surface, 4);
    assert_eq!(engine.top(), 0);
}

#[test]
fn test_scroll_raw_moves() {
    let mut engine = engine_at(5, 10);
    engine.scroll(ScrollEngine::DOWN);
    assert_eq!(engine.top(), 6);
    engine.scroll(25);
    assert_eq!(engine.top(), 31);
    engine.scroll(ScrollEngine::UP * 4);
    assert_eq!(engine.top(), 27);
}

#[test]
fn test_scroll_has_no_end_of_data_bound() {
    let mut engine = engine_at(0, 10);
    engine.scroll(10_000);
    assert_eq!(engine.top(), 10_000);
}

#[test]
fn test_scroll_below_zero_saturates() {
    let mut engine = engine_at(2, 10);
    engine.scroll(-5);
    assert_eq!(engine.top(), 0);
}

#[test]
fn test_scroll_up() {
    let mut engine = engine_at(50, 10);
    engine.scroll_up(1);
    assert_eq!(engine.top(), 49);
    engine.scroll_up(9);
    assert_eq!(engine.top(), 40);
}

#[test]
fn test_scroll_up_clamped() {
    let mut engine = engine_at(3, 10);
    engine.scroll_up(20);
    assert_eq!(engine.top(), 0);
}

#[test]
fn test_scroll_down_with_restrict() {
    let surface = TestSurface::new(100);
    let mut engine = engine_at(0, 10);
    engine.scroll_down(&surface, 5, Some(50));
    assert_eq!(engine.top(), 5);
}

#[test]
fn test_scroll_down_large_step_saturates() {
    let surface = TestSurface::new(100);
    let mut engine = engine_at(0, 10);
    engine.scroll_down(&surface, 1_000, Some(50));
    assert_eq!(engine.top(), 40);
}

#[test]
fn test_scroll_down_default_restrict_is_height_minus_one() {
    let surface = TestSurface::new(30);
    let mut engine = engine_at(0, 10);
    engine.scroll_down(&surface, 100, None);
    assert_eq!(engine.top(), 19);
}

#[test]
fn test_scroll_down_restrict_smaller_than_page() {
    let surface = TestSurface::new(100);
    let mut engine = engine_at(0, 10);
    engine.scroll_down(&surface, 1, Some(4));
    assert_eq!(engine.top(), 0);
}

#[test]
fn test_scroll_down_pulls_back_when_past_bound() {
    let surface = TestSurface::new(100);
    let mut engine = engine_at(70, 10);
    engine.scroll_down(&surface, 1, Some(50));
    assert_eq!(engine.top(), 40);
}

#[test]
fn test_page_down_and_up() {
    let surface = TestSurface::new(100);
    let mut engine = engine_at(0, 10);
    engine.page_down(&surface, Some(35));
    assert_eq!(engine.top(), 10);
    engine.page_down(&surface, Some(35));
    assert_eq!(engine.top(), 20);
    engine.page_down(&surface, Some(35));
    assert_eq!(engine.top(), 25);

    engine.page_up();
    assert_eq!(engine.top(), 15);
    engine.page_up();
    engine.page_up();
    assert_eq!(engine.top(), 0);
}

#[test]
fn test_jump_to_bottom_and_top() {
    let surface = TestSurface::new(100);
    let mut engine = engine_at(0, 10);

    engine.jump_to_bottom(&surface, Some(200));
    assert_eq!(engine.top(), 190);
    assert!(engine.at_bottom(&surface, Some(200)));
    assert!(!engine.at_top());

    engine.jump_to_top();
    assert_eq!(engine.top(), 0);
    assert!(engine.at_top());
    assert!(!engine.at_bottom(&surface, Some(200)));
}

#[test]
fn test_reset() {
    let mut engine = engine_at(33, 10);
    engine.reset();
    assert_eq!(engine.top(), 0);
    assert_eq!(engine.visible_count(), 10);
}

#[test]
fn test_handle_key_up_down() {
    let surface = TestSurface::new(100);
    let mut engine = engine_at(5, 10);

    assert!(engine.handle_key(&surface, ScrollKey::Down, Some(50)));
    assert_eq!(engine.top(), 6);
    assert!(engine.handle_key(&surface, ScrollKey::Up, Some(50)));
    assert_eq!(engine.top(), 5);
}

#[test]
fn test_handle_key_other_is_idle() {
    let surface = TestSurface::new(100);
    let mut engine = engine_at(5, 10);
    assert!(!engine.handle_key(&surface, ScrollKey::Other(KeyCode::Enter), Some(50)));
    assert_eq!(engine.top(), 5);
}

#[test]
fn test_handle_key_at_boundary_still_reports_scroll_key() {
    let surface = TestSurface::new(100);
    let mut engine = engine_at(0, 10);
    assert!(engine.handle_key(&surface, ScrollKey::Up, None));
    assert_eq!(engine.top(), 0);
}

#[test]
fn test_auto_scroll_without_key() {
    let surface = TestSurface::new(100);
    let mut engine = engine_at(5, 10);
    assert!(!engine.auto_scroll(&surface, Some(50)));
    assert_eq!(engine.top(), 5);
}

#[test]
fn test_auto_scroll_uses_rebound_keys() {
    let mut engine = engine_at(5, 10);
    engine.set_scroll_keys(KeyCode::Char('k'), KeyCode::Char('j'));

    let down = TestSurface::with_key(100, KeyCode::Char('j'));
    assert!(engine.auto_scroll(&down, Some(50)));
    assert_eq!(engine.top(), 6);

    let arrow = TestSurface::with_key(100, KeyCode::Down);
    assert!(!engine.auto_scroll(&arrow, Some(50)));
    assert_eq!(engine.top(), 6);

    let up = TestSurface::with_key(100, KeyCode::Char('k'));
    assert!(engine.auto_scroll(&up, Some(50)));
    assert_eq!(engine.top(), 5);
}

#[test]
fn test_engine_never_writes_to_surface() {
    let surface = TestSurface::with_key(100, KeyCode::Down);
    let mut engine = engine_at(0, 10);
    engine.auto_scroll(&surface, Some(50));
    let _ = engine.crop_to_range(&surface, &numbered_lines(50));
    assert!(surface.lines.is_empty());
}
