//! Routing of chat input.
//!
//! Input starting with the `/ai` prefix becomes an oracle prompt; all
//! other input is an ordinary chat line. The caller decides how each is
//! delivered, so routing itself never blocks on the oracle.

/// The command prefix that addresses the oracle.
pub const ORACLE_PREFIX: &str = "/ai";

/// Where a line of chat input should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routed {
    /// Append as a plain chat message from the current user.
    Say {
        /// The message body.
        text: String,
    },
    /// Forward to the oracle; its reply (or the fallback string) is
    /// appended when the call completes.
    Oracle {
        /// The prompt with the prefix stripped.
        prompt: String,
    },
}

/// Route a line of raw chat input.
pub fn route(input: &str) -> Routed {
    let trimmed = input.trim();
    if trimmed == ORACLE_PREFIX {
        return Routed::Oracle {
            prompt: String::new(),
        };
    }
    if let Some(rest) = trimmed.strip_prefix(ORACLE_PREFIX) {
        if let Some(prompt) = rest.strip_prefix(' ') {
            return Routed::Oracle {
                prompt: prompt.trim().to_string(),
            };
        }
    }
    Routed::Say {
        text: trimmed.to_string(),
    }
}
