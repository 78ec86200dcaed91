//! Chat demo panel: a pure state machine, the transport it talks through,
//! and the runner that drives it with tokio timers.

mod panel;
mod runner;
mod transport;

pub use panel::{ChatMessage, ChatPanel, Effect, PanelEvent, PanelState, PanelTiming, Role, Timer};
pub use runner::{PanelRunner, Step};
pub use transport::{extract_reply, ChatClientError, ChatRequest, ChatTransport, HttpChatTransport};
