//! Configuration shared by every widget in a shell.

use std::path::PathBuf;

use forge_dice::DICE_HISTORY_CAP;
use forge_ledger::FileStore;
use forge_oracle::{ORACLE_HISTORY_CAP, OracleVariant};

/// Configuration for a shell session.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// RNG seed for reproducible rolls; OS entropy when unset.
    pub seed: Option<u64>,
    /// Directory holding persisted histories.
    pub data_dir: Option<PathBuf>,
    /// Persist the dice history.
    pub persist_dice: bool,
    /// Persist the oracle history.
    pub persist_oracle: bool,
    /// Rolls kept in the dice history.
    pub dice_history_cap: usize,
    /// Entries kept in the oracle history.
    pub oracle_history_cap: usize,
    /// Which oracle table answers questions.
    pub oracle_variant: OracleVariant,
    /// Roll a modifier die with likelihood questions.
    pub modifier_die: bool,
    /// Start in dark mode.
    pub dark: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            seed: None,
            data_dir: None,
            persist_dice: true,
            persist_oracle: true,
            dice_history_cap: DICE_HISTORY_CAP,
            oracle_history_cap: ORACLE_HISTORY_CAP,
            oracle_variant: OracleVariant::Likelihood,
            modifier_die: false,
            dark: false,
        }
    }
}

impl ShellConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Turn persistence on or off for every widget.
    pub fn with_persistence(mut self, enabled: bool) -> Self {
        self.persist_dice = enabled;
        self.persist_oracle = enabled;
        self
    }

    /// Set how many entries each history keeps.
    pub fn with_history_caps(mut self, dice: usize, oracle: usize) -> Self {
        self.dice_history_cap = dice;
        self.oracle_history_cap = oracle;
        self
    }

    /// Choose the oracle table.
    pub fn with_oracle_variant(mut self, variant: OracleVariant) -> Self {
        self.oracle_variant = variant;
        self
    }

    /// Roll a modifier die with likelihood questions.
    pub fn with_modifier_die(mut self, enabled: bool) -> Self {
        self.modifier_die = enabled;
        self
    }

    /// Start in dark mode.
    pub fn with_dark(mut self, dark: bool) -> Self {
        self.dark = dark;
        self
    }

    /// The store for persisted histories, if persistence has somewhere to go.
    pub fn store(&self) -> Option<FileStore> {
        self.data_dir.as_ref().map(FileStore::new)
    }

    /// The store for the dice history, if it is persisted.
    pub fn dice_store(&self) -> Option<FileStore> {
        self.store().filter(|_| self.persist_dice)
    }

    /// The store for the oracle history, if it is persisted.
    pub fn oracle_store(&self) -> Option<FileStore> {
        self.store().filter(|_| self.persist_oracle)
    }
}
