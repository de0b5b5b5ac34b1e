use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use fate_core::Character;
use fate_dice::{DiceRoll, roll_dice};
use fate_oracle::{Assistant, FALLBACK_REPLY, HttpOracle, OracleConfig};
use fate_table::{ChatMessage, Routed, SnapshotStore, Table, route};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Sheet,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Insert,
}

/// One outbound oracle consultation.
struct OracleRequest {
    prompt: String,
    context: String,
}

pub struct App {
    pub table: Table,
    store: SnapshotStore,
    rng: StdRng,

    pub active_view: ActiveView,
    pub input_mode: InputMode,
    pub show_help: bool,

    // Sheet state
    pub active_index: usize,
    pub sheet_scroll: u16,

    // Chat state
    pub input: String,
    pub chat_scroll: u16,
    pub modifier: i32,
    pub pending_oracle: usize,

    // Last save/oracle problem, shown in the status bar.
    pub notice: Option<String>,

    request_tx: Sender<OracleRequest>,
    reply_rx: Receiver<String>,
}

impl App {
    pub fn new(table: Table, store: SnapshotStore) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<OracleRequest>();
        let (reply_tx, reply_rx) = mpsc::channel::<String>();

        // The oracle call blocks, so it lives on its own thread. Replies
        // arrive whenever they arrive; the chat log records them in
        // completion order.
        thread::spawn(move || {
            let oracle = HttpOracle::new(OracleConfig::from_env());
            while let Ok(request) = request_rx.recv() {
                let reply = oracle
                    .assist(&request.prompt, &request.context)
                    .unwrap_or_else(|_| FALLBACK_REPLY.to_string());
                if reply_tx.send(reply).is_err() {
                    break;
                }
            }
        });

        Self {
            table,
            store,
            rng: StdRng::from_os_rng(),
            active_view: ActiveView::Sheet,
            input_mode: InputMode::Normal,
            show_help: false,
            active_index: 0,
            sheet_scroll: 0,
            input: String::new(),
            chat_scroll: 0,
            modifier: 0,
            pending_oracle: 0,
            notice: None,
            request_tx,
            reply_rx,
        }
    }

    pub fn active_character(&self) -> Option<&Character> {
        self.table.room.characters.get(self.active_index)
    }

    pub fn next_character(&mut self) {
        let count = self.table.room.characters.len();
        if count > 0 {
            self.active_index = (self.active_index + 1) % count;
            self.sheet_scroll = 0;
        }
    }

    pub fn prev_character(&mut self) {
        let count = self.table.room.characters.len();
        if count > 0 {
            self.active_index = (self.active_index + count - 1) % count;
            self.sheet_scroll = 0;
        }
    }

    pub fn add_character(&mut self) {
        self.table.add_character(None);
        self.active_index = self.table.room.characters.len() - 1;
        self.save();
    }

    /// Adjust the active character's fate points via copy-modify-replace.
    pub fn adjust_fate(&mut self, delta: i32) {
        let Some(character) = self.active_character() else {
            return;
        };
        let mut edited = character.clone();
        edited.adjust_fate_points(delta);
        if self.table.update_character(edited).is_ok() {
            self.save();
        }
    }

    /// Roll 4dF for the active character (or the user) and record it.
    pub fn roll(&mut self) {
        let sender = self
            .active_character()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| self.table.user.name.clone());
        let faces = roll_dice(&mut self.rng);
        let roll = DiceRoll::new(sender, "Manual roll", faces, self.modifier);
        self.table.record_roll(roll);
        self.chat_scroll = 0;
        self.save();
    }

    /// Submit the chat input line: plain text appends immediately, an
    /// `/ai` prompt goes to the worker and the reply lands later.
    pub fn submit_input(&mut self) {
        let line = std::mem::take(&mut self.input);
        if line.trim().is_empty() {
            return;
        }
        match route(&line) {
            Routed::Say { text } => {
                let sender = self.table.user.name.clone();
                self.table.append_message(ChatMessage::text(sender, text));
                self.save();
            }
            Routed::Oracle { prompt } => {
                let request = OracleRequest {
                    prompt,
                    context: self.table.oracle_context(),
                };
                if self.request_tx.send(request).is_ok() {
                    self.pending_oracle += 1;
                } else {
                    self.notice = Some("oracle worker is gone".to_string());
                }
            }
        }
        self.chat_scroll = 0;
    }

    /// Pull in any oracle replies that finished since the last tick.
    pub fn drain_oracle(&mut self) {
        let mut changed = false;
        while let Ok(reply) = self.reply_rx.try_recv() {
            self.table.append_message(ChatMessage::oracle(reply));
            self.pending_oracle = self.pending_oracle.saturating_sub(1);
            changed = true;
        }
        if changed {
            self.chat_scroll = 0;
            self.save();
        }
    }

    pub fn scroll_down(&mut self) {
        match self.active_view {
            ActiveView::Sheet => self.sheet_scroll = self.sheet_scroll.saturating_add(1),
            ActiveView::Chat => self.chat_scroll = self.chat_scroll.saturating_sub(1),
        }
    }

    pub fn scroll_up(&mut self) {
        match self.active_view {
            ActiveView::Sheet => self.sheet_scroll = self.sheet_scroll.saturating_sub(1),
            ActiveView::Chat => self.chat_scroll = self.chat_scroll.saturating_add(1),
        }
    }

    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    pub fn next_view(&mut self) {
        self.active_view = match self.active_view {
            ActiveView::Sheet => ActiveView::Chat,
            ActiveView::Chat => ActiveView::Sheet,
        };
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Mirror the table to disk, keeping any failure visible instead of
    /// crashing the UI.
    fn save(&mut self) {
        if let Err(e) = self.store.save(&self.table) {
            self.notice = Some(format!("save failed: {e}"));
        }
    }
}
