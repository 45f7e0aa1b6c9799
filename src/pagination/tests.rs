//! Tests for pagination module

use super::*;
use crate::decode::PageMeta;

fn meta(total_pages: u32, found: u64) -> PageMeta {
    PageMeta { total_pages, found }
}

#[test]
fn test_next_page() {
    let next = NextPage::Continue { page: 2 };
    assert!(next.is_continue());
    assert!(!next.is_done());

    let next = NextPage::Done;
    assert!(next.is_done());
    assert!(!next.is_continue());
}

#[test]
fn test_pagination_state_default() {
    let state = PaginationState::new();
    assert_eq!(state.page, 0);
    assert_eq!(state.total_pages, 1);
    assert!(!state.pinned);
    assert!(state.has_more());
    assert!(state.is_first_page());
}

#[test]
fn test_unpinned_state_ends_after_first_page() {
    let mut state = PaginationState::new();
    assert_eq!(state.advance(), NextPage::Done);
    assert!(!state.has_more());
}

#[test]
fn test_pin_on_first_page() {
    let mut state = PaginationState::new();
    assert!(state.pin(&meta(3, 250)));
    assert_eq!(state.total_pages, 3);

    assert_eq!(state.advance(), NextPage::Continue { page: 1 });
    assert_eq!(state.advance(), NextPage::Continue { page: 2 });
    assert_eq!(state.advance(), NextPage::Done);
}

#[test]
fn test_pin_is_ignored_after_first_page() {
    let mut state = PaginationState::new();
    state.pin(&meta(2, 10));
    state.advance();

    assert!(!state.pin(&meta(50, 5000)));
    assert_eq!(state.total_pages, 2);
}

#[test]
fn test_pin_only_once() {
    let mut state = PaginationState::new();
    assert!(state.pin(&meta(4, 10)));
    assert!(!state.pin(&meta(9, 10)));
    assert_eq!(state.total_pages, 4);
}

#[test]
fn test_pin_is_ignored_when_first_page_was_skipped() {
    let mut state = PaginationState::new();
    state.advance();
    assert!(!state.pin(&meta(7, 10)));
    assert_eq!(state.total_pages, 1);
}

#[test]
fn test_pin_clamps_zero_pages() {
    let mut state = PaginationState::new();
    state.pin(&meta(0, 0));
    assert_eq!(state.total_pages, 1);
}
