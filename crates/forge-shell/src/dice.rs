//! The dice roller widget.

use forge_core::{RandomSource, SeededRandom};
use forge_dice::{DICE_HISTORY_KEY, DiceExpr, DiceRoller, DieSpec, RollOutcome, TrayDieId};
use forge_ledger::{HistoryLedger, Persistence};

use crate::config::ShellConfig;
use crate::error::{ShellError, ShellResult};
use crate::host::Widget;
use crate::render;
use crate::theme::{Theme, ThemeWatch};

const HELP: &str = "\
Dice commands:
  add <die>...          Put dice in the tray (d4 d6 d8 d10 d12 d20 d100)
  remove <id|die>       Take a die out of the tray (#3 or d6)
  clear                 Empty the tray
  roll                  Roll everything in the tray
  custom <expr>         Roll an expression outside the tray (3d6, d7)
  tray                  Show the tray
  history               Show recent rolls
  clear-history         Forget recent rolls
  help                  Show this help";

/// Tray, last roll and history behind a line-oriented interface.
pub struct DiceWidget {
    roller: DiceRoller,
    source: Box<dyn RandomSource>,
    theme: ThemeWatch,
}

impl DiceWidget {
    /// A widget configured from `config`, persisting its history when the
    /// config says so.
    pub fn new(config: &ShellConfig, theme: ThemeWatch) -> Self {
        let cap = config.dice_history_cap;
        let history = match config.dice_store() {
            Some(store) => HistoryLedger::restore(cap, Persistence::new(store, DICE_HISTORY_KEY)),
            None => HistoryLedger::new(cap),
        };
        Self::with_parts(
            DiceRoller::new(history),
            Box::new(SeededRandom::new(config.seed)),
            theme,
        )
    }

    /// A widget over an existing roller and random source.
    pub fn with_parts(
        roller: DiceRoller,
        source: Box<dyn RandomSource>,
        theme: ThemeWatch,
    ) -> Self {
        Self {
            roller,
            source,
            theme,
        }
    }

    /// The underlying roller.
    pub fn roller(&self) -> &DiceRoller {
        &self.roller
    }

    fn do_add(&mut self, rest: &str) -> ShellResult<String> {
        if rest.is_empty() {
            return Err(ShellError::Usage("add <die>...".to_string()));
        }
        let mut added = Vec::new();
        for arg in rest.split_whitespace() {
            let sides = parse_die(arg)?;
            let id = self.roller.add_die(sides)?;
            added.push(format!("d{sides} {id}"));
        }
        Ok(format!(
            "Added {}. Tray: {}",
            added.join(", "),
            self.roller.tray().describe()
        ))
    }

    fn do_remove(&mut self, rest: &str) -> ShellResult<String> {
        if rest.is_empty() {
            return Err(ShellError::Usage("remove <id|die>".to_string()));
        }
        let removed = match rest.trim_start_matches('#').parse::<u64>() {
            Ok(raw) => {
                let id = TrayDieId::from(raw);
                self.roller.remove_die(id).then_some(id)
            }
            Err(_) => self.roller.tray_mut().remove_named(rest),
        };
        match removed {
            Some(id) => Ok(format!("Removed {id}. Tray: {}", self.tray_line())),
            None => Ok(format!("No {rest} in the tray.")),
        }
    }

    fn do_roll(&mut self) -> ShellResult<String> {
        match self.roller.roll_tray(self.source.as_mut())? {
            Some(outcome) => Ok(self.format_roll(&outcome)),
            None => Ok("The tray is empty. Add dice with 'add d6'.".to_string()),
        }
    }

    fn do_custom(&mut self, rest: &str) -> ShellResult<String> {
        if rest.is_empty() {
            return Err(ShellError::Usage("custom <expr>".to_string()));
        }
        let expr = DiceExpr::parse(rest)?;
        let outcome = self.roller.roll_custom(self.source.as_mut(), expr)?;
        Ok(self.format_roll(&outcome))
    }

    fn do_tray(&self) -> String {
        let dice = self.roller.tray().dice();
        if dice.is_empty() {
            return "The tray is empty.".to_string();
        }
        let ids: Vec<String> = dice.iter().map(|d| format!("{} {}", d.id, d.name())).collect();
        format!("Tray: {}\n  {}", self.tray_line(), ids.join("  "))
    }

    fn tray_line(&self) -> String {
        if self.roller.tray().is_empty() {
            "(empty)".to_string()
        } else {
            self.roller.tray().describe()
        }
    }

    fn format_roll(&self, outcome: &RollOutcome) -> String {
        let theme = self.theme.current();
        format!(
            "{}\nTotal: {}",
            outcome.grouped_display(),
            render::highlight(theme, &outcome.total.to_string())
        )
    }
}

/// Sides for a die named `d6`, `D20` or just `12`.
fn parse_die(arg: &str) -> ShellResult<u32> {
    if let Some(spec) = DieSpec::by_name(arg) {
        return Ok(spec.sides);
    }
    arg.trim_start_matches(['d', 'D'])
        .parse::<u32>()
        .map_err(|_| ShellError::Usage(format!("add <die> (not a die: {arg})")))
}

impl Widget for DiceWidget {
    fn name(&self) -> &'static str {
        "dice"
    }

    fn handle(&mut self, input: &str) -> ShellResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "add" => self.do_add(rest),
            "remove" | "rm" => self.do_remove(rest),
            "clear" => {
                self.roller.clear_tray();
                Ok("Tray cleared.".to_string())
            }
            "roll" | "r" => self.do_roll(),
            "custom" => self.do_custom(rest),
            "tray" => Ok(self.do_tray()),
            "history" => Ok(render::dice_history(self.roller.history().entries())),
            "clear-history" => {
                self.roller.clear_history();
                Ok("History cleared.".to_string())
            }
            "help" | "?" => Ok(HELP.to_string()),
            _ => Err(ShellError::UnknownCommand(cmd)),
        }
    }

    fn render(&self, theme: Theme) -> String {
        let mut lines = vec![render::title(theme, "Dice Roller").to_string()];
        lines.push(format!("Tray: {}", self.tray_line()));
        match self.roller.last_roll() {
            Some(last) => lines.push(format!(
                "Last roll: {} = {}",
                last.grouped_display(),
                render::highlight(theme, &last.total.to_string())
            )),
            None => lines.push(render::muted(theme, "No roll yet.").to_string()),
        }
        let history = self.roller.history();
        let footer = format!(
            "{} of {} history slots used. Type 'help' for commands.",
            history.len(),
            history.cap()
        );
        lines.push(render::muted(theme, &footer).to_string());
        lines.join("\n")
    }

    fn teardown(&mut self) {
        tracing::debug!(tray = self.roller.tray().len(), "dice widget torn down");
        self.roller.clear_tray();
    }
}

impl std::fmt::Debug for DiceWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiceWidget")
            .field("roller", &self.roller)
            .finish_non_exhaustive()
    }
}
