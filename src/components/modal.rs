//! CV viewer overlay.
//!
//! Opening the modal acquires two host resources: an Escape key listener and
//! a scroll lock. Both are owned by [`ModalGuard`] and released in its `Drop`,
//! so every way of closing the modal (Escape, close button, teardown of the
//! surrounding view) gives them back.

use crate::content::Profile;
use crate::i18n::Dictionary;
use crate::pages::html::escape;

/// Key name that closes the modal.
pub const ESCAPE_KEY: &str = "Escape";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(pub u64);

/// The environment a modal is shown in (a document, a terminal, ...).
pub trait ModalHost {
    fn add_key_listener(&self, key: &'static str) -> ListenerId;
    fn remove_key_listener(&self, id: ListenerId);
    fn lock_scroll(&self);
    fn unlock_scroll(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Close,
    Ignore,
}

pub struct CvModal;

impl CvModal {
    /// Open the modal on `host`. The returned guard keeps it open.
    pub fn open<H: ModalHost>(host: &H) -> ModalGuard<'_, H> {
        let listener = host.add_key_listener(ESCAPE_KEY);
        host.lock_scroll();
        ModalGuard { host, listener }
    }

    /// Markup for the overlay. Hidden until the trigger button opens it.
    pub fn render_html(profile: &Profile, dict: &Dictionary) -> String {
        format!(
            r#"<button type="button" class="cv-open" data-modal-target="cv-modal">{open}</button>
<dialog id="cv-modal" class="cv-modal" aria-labelledby="cv-modal-title">
  <header>
    <h2 id="cv-modal-title">{title}</h2>
    <a class="cv-download" href="{path}?download=1" download>{download}</a>
    <form method="dialog"><button class="cv-close">{close}</button></form>
  </header>
  <iframe src="{path}" title="{title}"></iframe>
</dialog>"#,
            open = escape(dict.text("cv.open")),
            title = escape(dict.text("cv.title")),
            download = escape(dict.text("cv.download")),
            close = escape(dict.text("cv.close")),
            path = escape(profile.cv_path),
        )
    }
}

/// Scoped ownership of the resources held while the modal is open.
pub struct ModalGuard<'a, H: ModalHost> {
    host: &'a H,
    listener: ListenerId,
}

impl<H: ModalHost> ModalGuard<'_, H> {
    /// Route a key press; only Escape closes.
    pub fn on_key(&self, key: &str) -> ModalAction {
        if key == ESCAPE_KEY {
            ModalAction::Close
        } else {
            ModalAction::Ignore
        }
    }

    pub fn close(self) {}
}

impl<H: ModalHost> Drop for ModalGuard<'_, H> {
    fn drop(&mut self) {
        self.host.remove_key_listener(self.listener);
        self.host.unlock_scroll();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROFILE;
    use crate::i18n::{dictionary, Locale};
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingHost {
        next_id: Cell<u64>,
        listeners: RefCell<Vec<ListenerId>>,
        scroll_locks: Cell<u32>,
    }

    impl ModalHost for RecordingHost {
        fn add_key_listener(&self, _key: &'static str) -> ListenerId {
            let id = ListenerId(self.next_id.get());
            self.next_id.set(id.0 + 1);
            self.listeners.borrow_mut().push(id);
            id
        }

        fn remove_key_listener(&self, id: ListenerId) {
            self.listeners.borrow_mut().retain(|l| *l != id);
        }

        fn lock_scroll(&self) {
            self.scroll_locks.set(self.scroll_locks.get() + 1);
        }

        fn unlock_scroll(&self) {
            self.scroll_locks.set(self.scroll_locks.get() - 1);
        }
    }

    impl RecordingHost {
        fn is_clean(&self) -> bool {
            self.listeners.borrow().is_empty() && self.scroll_locks.get() == 0
        }
    }

    // ==================== Resource Scope Tests ====================

    #[test]
    fn test_open_acquires_listener_and_scroll_lock() {
        let host = RecordingHost::default();
        let guard = CvModal::open(&host);

        assert_eq!(host.listeners.borrow().len(), 1);
        assert_eq!(host.scroll_locks.get(), 1);
        drop(guard);
    }

    #[test]
    fn test_escape_then_close_releases_everything() {
        let host = RecordingHost::default();
        let guard = CvModal::open(&host);

        assert_eq!(guard.on_key("Enter"), ModalAction::Ignore);
        assert_eq!(guard.on_key(ESCAPE_KEY), ModalAction::Close);
        guard.close();

        assert!(host.is_clean());
    }

    #[test]
    fn test_teardown_without_close_releases_everything() {
        let host = RecordingHost::default();
        {
            let _guard = CvModal::open(&host);
        }
        assert!(host.is_clean());
    }

    #[test]
    fn test_reopen_after_close_is_balanced() {
        let host = RecordingHost::default();
        CvModal::open(&host).close();
        let second = CvModal::open(&host);
        assert_eq!(host.listeners.borrow().as_slice(), &[ListenerId(1)]);
        drop(second);
        assert!(host.is_clean());
    }

    // ==================== Markup Tests ====================

    #[test]
    fn test_render_html_links_pdf() {
        let dict = dictionary(Locale::En).unwrap();
        let html = CvModal::render_html(&PROFILE, dict);
        assert!(html.contains(r#"src="/cv.pdf""#));
        assert!(html.contains(r#"href="/cv.pdf?download=1""#));
        assert!(html.contains("Download PDF"));
    }
}
