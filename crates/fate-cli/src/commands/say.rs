use colored::Colorize;
use fate_oracle::{Assistant, FALLBACK_REPLY, HttpOracle, OracleConfig};
use fate_table::{ChatMessage, Routed, SnapshotStore, route};

/// Route one line of chat input: plain text is appended as the local
/// user; `/ai <prompt>` consults the oracle and appends its reply (or
/// the fallback string when the call fails).
pub fn run(store: &SnapshotStore, text: &str) -> Result<(), String> {
    let mut table = super::load_table(store)?;

    match route(text) {
        Routed::Say { text } => {
            table.append_message(ChatMessage::text(table.user.name.clone(), text.clone()));
            println!("  {}: {}", table.user.name.bold(), text);
        }
        Routed::Oracle { prompt } => {
            let oracle = HttpOracle::new(OracleConfig::from_env());
            let context = table.oracle_context();
            let reply = oracle
                .assist(&prompt, &context)
                .unwrap_or_else(|_| FALLBACK_REPLY.to_string());
            table.append_message(ChatMessage::oracle(reply.clone()));
            println!("  {}: {}", "Oracle".bold().magenta(), reply);
        }
    }

    super::save_table(store, &table)
}
