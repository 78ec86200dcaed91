//! Presentation components. None of them keep state across requests.

pub mod chat;
pub mod modal;
pub mod switcher;

pub use modal::{CvModal, ListenerId, ModalAction, ModalGuard, ModalHost};
pub use switcher::{render_switcher, switch_locale_path};
