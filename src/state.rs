// src/state.rs
use std::rc::Rc;

use yew::prelude::*;

use crate::content::Section;

/// Vertical offset (px) past which the navigation switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// How long the "Chave copiada!" confirmation stays up after the last copy.
pub const COPY_RESET_MS: u32 = 2_000;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// All view-state of the page. Owned by `App`, handed to children as plain
/// values plus callbacks.
///
/// The two modals are independent flags: opening one never closes the other.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub scrolled: bool,
    pub mobile_menu_open: bool,
    pub contribution_open: bool,
    pub prayer_open: bool,
    pub copied: bool,
    /// Tag of the latest successful copy; only its expiry may clear `copied`.
    pub copy_generation: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageAction {
    Scrolled(f64),
    ToggleMenu,
    /// A section link was chosen; the browser follows the anchor itself.
    NavigateTo(Section),
    OpenContribution,
    CloseContribution,
    OpenPrayer,
    ClosePrayer,
    /// "Quero Apoiar" inside the mobile menu.
    SupportFromMenu,
    /// A copy succeeded; carries the tag its reset timer will report back.
    Copied(u32),
    /// The reset timer armed by `Copied(tag)` fired.
    CopyExpired(u32),
}

impl PageState {
    pub fn apply(&self, action: PageAction) -> Self {
        let mut next = self.clone();
        match action {
            PageAction::Scrolled(offset) => next.scrolled = is_scrolled(offset),
            PageAction::ToggleMenu => next.mobile_menu_open = !self.mobile_menu_open,
            PageAction::NavigateTo(_) => next.mobile_menu_open = false,
            PageAction::OpenContribution => next.contribution_open = true,
            PageAction::CloseContribution => next.contribution_open = false,
            PageAction::OpenPrayer => next.prayer_open = true,
            PageAction::ClosePrayer => next.prayer_open = false,
            PageAction::SupportFromMenu => {
                next.contribution_open = true;
                next.mobile_menu_open = false;
            }
            PageAction::Copied(generation) => {
                next.copied = true;
                next.copy_generation = generation;
            }
            // A newer copy re-armed the confirmation; a stale timer must not clear it.
            PageAction::CopyExpired(generation) => {
                if generation == self.copy_generation {
                    next.copied = false;
                }
            }
        }
        next
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        // Scroll fires constantly; hand back the same Rc so use_reducer_eq skips the render.
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: &[PageAction]) -> PageState {
        actions
            .iter()
            .fold(PageState::default(), |state, action| state.apply(*action))
    }

    #[test]
    fn scroll_threshold_is_exclusive() {
        for offset in [0.0, 12.5, 49.9, 50.0] {
            assert!(!is_scrolled(offset), "offset {offset} should not count as scrolled");
        }
        for offset in [50.01, 51.0, 400.0, 10_000.0] {
            assert!(is_scrolled(offset), "offset {offset} should count as scrolled");
        }
    }

    #[test]
    fn scrolling_back_up_restores_transparent_nav() {
        let state = run(&[PageAction::Scrolled(300.0)]);
        assert!(state.scrolled);
        assert!(!state.apply(PageAction::Scrolled(10.0)).scrolled);
    }

    #[test]
    fn menu_toggle_opens_then_closes() {
        let open = run(&[PageAction::ToggleMenu]);
        assert!(open.mobile_menu_open);
        assert!(!open.apply(PageAction::ToggleMenu).mobile_menu_open);
    }

    #[test]
    fn choosing_any_section_closes_menu() {
        for section in Section::ALL {
            let state = run(&[PageAction::ToggleMenu, PageAction::NavigateTo(section)]);
            assert!(!state.mobile_menu_open, "{section:?} left the menu open");
        }
    }

    #[test]
    fn support_from_menu_opens_contribution_and_closes_menu() {
        let state = run(&[PageAction::ToggleMenu, PageAction::SupportFromMenu]);
        assert!(state.contribution_open);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn closing_contribution_leaves_prayer_alone() {
        let both = run(&[PageAction::OpenPrayer, PageAction::OpenContribution]);
        assert!(both.prayer_open && both.contribution_open);

        let after = both.apply(PageAction::CloseContribution);
        assert!(!after.contribution_open);
        assert!(after.prayer_open);
    }

    #[test]
    fn closing_prayer_leaves_contribution_alone() {
        let state = run(&[
            PageAction::OpenContribution,
            PageAction::OpenPrayer,
            PageAction::ClosePrayer,
        ]);
        assert!(state.contribution_open);
        assert!(!state.prayer_open);
    }

    #[test]
    fn copy_expiry_clears_confirmation() {
        let state = run(&[PageAction::OpenContribution, PageAction::Copied(1)]);
        assert!(state.copied);
        assert!(!state.apply(PageAction::CopyExpired(1)).copied);
    }

    #[test]
    fn second_copy_outlives_first_timer() {
        let state = run(&[
            PageAction::Copied(1),
            PageAction::Copied(2),
            PageAction::CopyExpired(1),
        ]);
        assert!(state.copied, "first timer cleared a re-armed confirmation");

        let state = state.apply(PageAction::CopyExpired(2));
        assert!(!state.copied);
    }

    #[test]
    fn expiry_without_pending_copy_changes_nothing() {
        let idle = run(&[PageAction::Copied(1), PageAction::CopyExpired(1)]);
        assert_eq!(idle.apply(PageAction::CopyExpired(1)), idle);
        assert_eq!(
            PageState::default().apply(PageAction::CopyExpired(0)),
            PageState::default()
        );

        let state = Rc::new(idle);
        let same = state.clone().reduce(PageAction::CopyExpired(1));
        assert!(Rc::ptr_eq(&state, &same));
    }

    #[test]
    fn reduce_keeps_rc_when_nothing_changes() {
        let state = Rc::new(PageState::default());
        let same = state.clone().reduce(PageAction::Scrolled(3.0));
        assert!(Rc::ptr_eq(&state, &same));

        let changed = state.clone().reduce(PageAction::Scrolled(80.0));
        assert!(!Rc::ptr_eq(&state, &changed));
        assert!(changed.scrolled);
    }
}
