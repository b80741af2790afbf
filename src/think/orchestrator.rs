//! The `think` operation: route, consult memory, scaffold

use super::{router, scaffold, ModeRouter, ThinkMode, ThinkRequest, ThinkResponse};
use crate::memory::MemoryStore;
use crate::{PaiError, Result};
use tracing::{debug, info};

/// Status key used while a scaffold is being built
pub const STATUS_KEY: &str = "pai";

/// Appended when no memory file had content
pub const NO_MEMORY_NOTE: &str =
    "[Note: no memory files found — proceeding without stored context]";

/// Host-side status line. Best-effort: implementations must not fail.
pub trait StatusIndicator {
    fn set_status(&self, key: &str, text: Option<&str>);
}

/// Status indicator for hosts without a UI
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStatus;

impl StatusIndicator for NoStatus {
    fn set_status(&self, _key: &str, _text: Option<&str>) {}
}

/// Clears the status on drop, so every exit path resets it
struct StatusGuard<'a> {
    status: &'a dyn StatusIndicator,
}

impl<'a> StatusGuard<'a> {
    fn set(status: &'a dyn StatusIndicator, mode: ThinkMode) -> Self {
        status.set_status(
            STATUS_KEY,
            Some(&format!("PAI: thinking ({})...", mode.label())),
        );
        Self { status }
    }
}

impl Drop for StatusGuard<'_> {
    fn drop(&mut self) {
        self.status.set_status(STATUS_KEY, None);
    }
}

/// Composes the mode router, the memory store and the scaffolds
#[derive(Debug, Clone)]
pub struct Thinker {
    store: MemoryStore,
    router: Option<ModeRouter>,
}

impl Thinker {
    /// Thinker using the built-in classification rules
    pub fn new(store: MemoryStore) -> Self {
        Self {
            store,
            router: None,
        }
    }

    pub fn with_router(mut self, router: ModeRouter) -> Self {
        self.router = Some(router);
        self
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Pick the mode for a request: explicit modes win over classification.
    pub fn resolve_mode(&self, request: &ThinkRequest) -> ThinkMode {
        if let Some(mode) = request.mode.and_then(|m| m.fixed()) {
            return mode;
        }
        match &self.router {
            Some(router) => router.classify(&request.problem),
            None => router::classify(&request.problem),
        }
    }

    pub async fn think(
        &self,
        request: &ThinkRequest,
        status: &dyn StatusIndicator,
    ) -> Result<ThinkResponse> {
        if request.problem.trim().is_empty() {
            return Err(PaiError::usage("problem is required for think"));
        }

        let mode = self.resolve_mode(request);
        info!("Thinking in {} mode ({})", mode, scaffold::title(mode));
        let _status = StatusGuard::set(status, mode);

        let memory = self.store.read_all().await;
        if memory.is_empty() {
            debug!("No memory content under {:?}", self.store.dir());
        }

        let mut text = scaffold::generate(
            mode,
            &request.problem,
            request.context.as_deref(),
            Some(memory.as_str()).filter(|m| !m.is_empty()),
        );
        if memory.is_empty() {
            text.push_str("\n\n");
            text.push_str(NO_MEMORY_NOTE);
        }

        Ok(ThinkResponse {
            text,
            resolved_mode: mode,
        })
    }
}
