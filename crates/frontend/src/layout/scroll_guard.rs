//! Фиксация навбара при прокрутке.
//!
//! The baseline offset is captured once when the nav element is mounted and
//! every scroll event is a stateless comparison against it.

use leptos::html::Nav;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollGuard {
    baseline_offset: f64,
}

impl ScrollGuard {
    pub fn new(baseline_offset: f64) -> Self {
        Self { baseline_offset }
    }

    /// Scrolled strictly past the baseline. Equality is not stuck.
    pub fn is_stuck(&self, scroll_y: f64) -> bool {
        scroll_y > self.baseline_offset
    }
}

fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// Installs the guard on `nav_ref` and returns whether the nav is stuck.
pub fn use_scroll_guard(nav_ref: NodeRef<Nav>) -> Signal<bool> {
    let guard = RwSignal::new(None::<ScrollGuard>);
    let stuck = RwSignal::new(false);

    // Смещение навбара относительно документа, снимается один раз
    Effect::new(move |_| {
        if guard.get_untracked().is_some() {
            return;
        }
        if let Some(nav) = nav_ref.get() {
            let baseline = nav.get_bounding_client_rect().top() + scroll_y();
            log::debug!("Scroll guard installed, baseline offset {}", baseline);
            guard.set(Some(ScrollGuard::new(baseline)));
        }
    });

    let _ = window_event_listener(leptos::ev::scroll, move |_| {
        let Some(guard) = guard.get_untracked() else {
            return;
        };
        let next = guard.is_stuck(scroll_y());
        if stuck.get_untracked() != next {
            stuck.set(next);
        }
    });

    stuck.into()
}
