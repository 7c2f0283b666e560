use crate::{AliasMap, ServerInfo};
use std::sync::Arc;

/// Holds the configuration of an [ItqlInterpreter](crate::ItqlInterpreter).
#[derive(Debug, Clone, Default)]
pub struct InterpreterConfig {
    /// The aliases that are known before the first `alias` command.
    pub aliases: AliasMap,
    /// Information about the local server. `None` for stand-alone clients.
    pub server_info: Option<Arc<dyn ServerInfo>>,
}

impl InterpreterConfig {
    #[must_use]
    pub fn with_aliases(mut self, aliases: AliasMap) -> Self {
        self.aliases = aliases;
        self
    }

    #[must_use]
    pub fn with_server_info(mut self, server_info: Arc<dyn ServerInfo>) -> Self {
        self.server_info = Some(server_info);
        self
    }
}
