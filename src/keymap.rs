//! Read-only description of the keys a view should offer.

use alloc::vec::Vec;

use crate::session::{BetStatus, Command, SessionState, TableView};

/// A key binding as shown in the help line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    /// Command sent when the binding is pressed.
    pub command: Command,
    /// Key names that trigger the command.
    pub keys: &'static [&'static str],
    /// Key label for the help line.
    pub help_key: &'static str,
    /// Description for the help line.
    pub help: &'static str,
    /// Whether the command would currently be accepted.
    pub enabled: bool,
}

impl KeyBinding {
    const fn new(
        command: Command,
        keys: &'static [&'static str],
        help_key: &'static str,
        help: &'static str,
        enabled: bool,
    ) -> Self {
        Self {
            command,
            keys,
            help_key,
            help,
            enabled,
        }
    }
}

/// The key bindings of one screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keymap {
    bindings: Vec<KeyBinding>,
}

impl Keymap {
    /// Builds the bindings for `view`.
    #[must_use]
    pub fn for_view(view: &TableView) -> Self {
        let quit = KeyBinding::new(Command::Quit, &["esc", "ctrl+c"], "esc", "Quit", true);

        let bindings = match view.state {
            SessionState::Finished => Vec::new(),
            SessionState::Betting => alloc::vec![
                quit,
                KeyBinding::new(
                    Command::ConfirmBet,
                    &["enter"],
                    "<enter>",
                    "Play!",
                    view.bet_status == BetStatus::Ready,
                ),
                KeyBinding::new(
                    Command::ResetBalance,
                    &["ctrl+k"],
                    "ctrl+k",
                    "Reset",
                    view.bet_status == BetStatus::NoFunds,
                ),
            ],
            _ => {
                let can_act = view.player_can_act();
                alloc::vec![
                    KeyBinding::new(Command::Hit, &["space", "y"], "<space>", "Hit!", can_act),
                    KeyBinding::new(Command::Stand, &["tab", "n"], "<tab>", "Stand", can_act),
                    quit,
                ]
            }
        };

        Self { bindings }
    }

    /// Returns every binding, enabled or not.
    #[must_use]
    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    /// Returns the bindings that are currently enabled.
    pub fn enabled(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter().filter(|binding| binding.enabled)
    }

    /// Returns whether `command` is currently enabled.
    #[must_use]
    pub fn is_enabled(&self, command: Command) -> bool {
        self.enabled().any(|binding| binding.command == command)
    }
}
