//! The oracle widget.

use forge_core::{RandomSource, SeededRandom};
use forge_ledger::{HistoryLedger, Persistence};
use forge_oracle::{Likelihood, ORACLE_HISTORY_KEY, OracleOutcome, OracleSession};

use crate::config::ShellConfig;
use crate::error::{ShellError, ShellResult};
use crate::host::Widget;
use crate::render;
use crate::theme::{Theme, ThemeWatch};

const HELP: &str = "\
Oracle commands:
  ask [likelihood]      Ask a yes/no question (default: even odds)
  inspire               Draw an inspiration seed
  event                 Roll a random event
  prompt                Draw a verb + noun prompt
  reroll verb|noun      Redraw one half of the last prompt
  history               Show recent answers
  clear                 Forget history and current results
  help                  Show this help

Likelihood: impossible, unlikely, even odds, likely, certain";

/// An oracle session behind a line-oriented interface.
pub struct OracleWidget {
    session: OracleSession,
    source: Box<dyn RandomSource>,
    theme: ThemeWatch,
}

impl OracleWidget {
    /// A widget configured from `config`, persisting its history when the
    /// config says so.
    pub fn new(config: &ShellConfig, theme: ThemeWatch) -> Self {
        let resolver = config.oracle_variant.resolver(config.modifier_die);
        let cap = config.oracle_history_cap;
        let history = match config.oracle_store() {
            Some(store) => HistoryLedger::restore(cap, Persistence::new(store, ORACLE_HISTORY_KEY)),
            None => HistoryLedger::new(cap),
        };
        Self::with_parts(
            OracleSession::new(resolver, history),
            Box::new(SeededRandom::new(config.seed)),
            theme,
        )
    }

    /// A widget over an existing session and random source.
    pub fn with_parts(
        session: OracleSession,
        source: Box<dyn RandomSource>,
        theme: ThemeWatch,
    ) -> Self {
        Self {
            session,
            source,
            theme,
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &OracleSession {
        &self.session
    }

    fn do_ask(&mut self, rest: &str) -> ShellResult<String> {
        let likelihood = if !self.session.resolver().needs_likelihood() {
            if !rest.is_empty() {
                tracing::debug!(likelihood = rest, "table takes no likelihood, ignoring");
            }
            None
        } else if rest.is_empty() {
            Some(Likelihood::EvenOdds)
        } else {
            Some(Likelihood::parse_or_err(rest)?)
        };
        let outcome = self.session.ask(self.source.as_mut(), likelihood)?;
        Ok(self.format_answer(&outcome))
    }

    fn do_reroll(&mut self, rest: &str) -> ShellResult<String> {
        let prompt = match rest.to_lowercase().as_str() {
            "verb" => self.session.reroll_verb(self.source.as_mut())?,
            "noun" => self.session.reroll_noun(self.source.as_mut())?,
            _ => return Err(ShellError::Usage("reroll verb|noun".to_string())),
        };
        Ok(format!("{prompt} (Re-rolled)"))
    }

    fn format_answer(&self, outcome: &OracleOutcome) -> String {
        let theme = self.theme.current();
        let mut lines = vec![
            render::answer(theme, &outcome.answer).to_string(),
            render::muted(theme, &outcome.details()).to_string(),
        ];
        if let Some(c) = &outcome.complication {
            lines.push(c.clone());
        }
        if self.session.random_event_pending() {
            lines.push("Doubles! Type 'event' for a random event.".to_string());
        }
        lines.join("\n")
    }
}

impl Widget for OracleWidget {
    fn name(&self) -> &'static str {
        "oracle"
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
            "ask" => self.do_ask(rest),
            "inspire" => Ok(self.session.inspire(self.source.as_mut()).to_string()),
            "event" => {
                let event = self.session.random_event(self.source.as_mut())?;
                Ok(event.to_string())
            }
            "prompt" => Ok(self.session.prompt(self.source.as_mut()).to_string()),
            "reroll" => self.do_reroll(rest),
            "history" => Ok(render::oracle_history(self.session.history().entries())),
            "clear" => {
                self.session.clear();
                Ok("Oracle cleared.".to_string())
            }
            "help" | "?" => Ok(HELP.to_string()),
            _ => Err(ShellError::UnknownCommand(cmd)),
        }
    }

    fn render(&self, theme: Theme) -> String {
        let mut lines = vec![render::title(theme, "Oracle").to_string()];
        let table = format!("Table: {}", self.session.resolver().name());
        lines.push(render::muted(theme, &table).to_string());
        match self.session.current() {
            Some(current) => {
                let answer = render::answer(theme, &current.to_string());
                lines.push(format!("Answer: {answer}"));
                lines.push(render::muted(theme, &current.details()).to_string());
            }
            None => {
                lines.push(render::muted(theme, "Ask a question to begin.").to_string());
            }
        }
        if let Some(event) = self.session.current_event() {
            lines.push(format!("Event: {event}"));
        } else if self.session.random_event_pending() {
            lines.push("Random event available.".to_string());
        }
        if let Some(prompt) = self.session.current_prompt() {
            lines.push(format!("Prompt: {prompt}"));
        }
        if let Some(seed) = self.session.current_inspiration() {
            lines.push(format!("Inspiration: {seed}"));
        }
        lines.join("\n")
    }

    fn teardown(&mut self) {
        tracing::debug!(history = self.session.history().len(), "oracle widget torn down");
    }
}

impl std::fmt::Debug for OracleWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleWidget")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeSignal;
    use forge_core::ScriptedRandom;
    use forge_oracle::{OracleError, OracleVariant};

    fn widget(variant: OracleVariant, modifier: bool, draws: &[u32]) -> OracleWidget {
        colored::control::set_override(false);
        OracleWidget::with_parts(
            OracleSession::session_only(variant.resolver(modifier)),
            Box::new(ScriptedRandom::new(draws.to_vec())),
            ThemeSignal::default().subscribe(),
        )
    }

    #[test]
    fn ask_defaults_to_even_odds() {
        let mut w = widget(OracleVariant::Likelihood, false, &[4]);
        let out = w.handle("ask").unwrap();
        assert_eq!(out, "Yes\n(Even Odds) Roll: 4");
        assert_eq!(w.session().history().len(), 1);
    }

    #[test]
    fn ask_with_likelihood() {
        let mut w = widget(OracleVariant::Likelihood, false, &[5]);
        assert!(w.handle("ask certain").unwrap().starts_with("Yes"));
        assert!(w.handle("ask impossible").unwrap().starts_with("No"));
        assert!(w.handle("ask even odds").unwrap().contains("(Even Odds)"));
    }

    #[test]
    fn unknown_likelihood_fails_fast() {
        let mut w = widget(OracleVariant::Likelihood, false, &[5]);
        let err = w.handle("ask maybe").unwrap_err();
        assert!(matches!(
            err,
            ShellError::Oracle(OracleError::InvalidLikelihood(l)) if l == "maybe"
        ));
        assert!(w.session().history().is_empty());
    }

    #[test]
    fn narrative_answer_shows_complication() {
        let mut w = widget(OracleVariant::Narrative, false, &[1, 2, 4]);
        let out = w.handle("ask").unwrap();
        assert_eq!(
            out,
            "Yes, but with a complication\nRoll: 1+2 = 3\nBut someone gets hurt"
        );
    }

    #[test]
    fn narrative_ignores_any_likelihood_argument() {
        let mut w = widget(OracleVariant::Narrative, false, &[1, 2, 4]);
        let plain = w.handle("ask").unwrap();
        assert_eq!(w.handle("ask maybe").unwrap(), plain);
        assert_eq!(w.handle("ask likely").unwrap(), plain);
        assert_eq!(w.session().history().len(), 3);
    }

    #[test]
    fn doubles_offer_an_event() {
        let mut w = widget(OracleVariant::Likelihood, true, &[2, 2, 3, 5]);
        let out = w.handle("ask likely").unwrap();
        assert!(out.ends_with("Type 'event' for a random event."));
        assert!(w.render(Theme::Light).contains("Random event available."));
        assert_eq!(w.handle("event").unwrap(), "Quest Related with a Positive Spin");
        assert!(w.render(Theme::Light).contains("Event: Quest Related"));
    }

    #[test]
    fn prompt_and_reroll() {
        let mut w = widget(OracleVariant::Likelihood, false, &[1, 1, 2]);
        assert!(matches!(
            w.handle("reroll verb"),
            Err(ShellError::Oracle(OracleError::NoPrompt))
        ));
        assert_eq!(w.handle("prompt").unwrap(), "Abandon Advantage");
        assert_eq!(w.handle("reroll noun").unwrap(), "Abandon Adversity (Re-rolled)");
        assert!(matches!(w.handle("reroll both"), Err(ShellError::Usage(_))));
        assert_eq!(w.session().history().len(), 2);
    }

    #[test]
    fn inspire_is_not_recorded() {
        let mut w = widget(OracleVariant::Likelihood, false, &[2]);
        assert_eq!(w.handle("inspire").unwrap(), "Mysterious stranger");
        assert!(w.session().history().is_empty());
        assert!(w.render(Theme::Dark).contains("Inspiration: Mysterious stranger"));
    }

    #[test]
    fn clear_resets_view() {
        let mut w = widget(OracleVariant::Likelihood, false, &[3]);
        w.handle("ask").unwrap();
        w.handle("prompt").unwrap();
        assert_eq!(w.handle("clear").unwrap(), "Oracle cleared.");
        assert_eq!(w.handle("history").unwrap(), "No oracle history yet.");
        let view = w.render(Theme::Light);
        assert!(view.contains("Ask a question to begin."));
        assert!(!view.contains("Prompt:"));
    }

    #[test]
    fn history_table_lists_entries() {
        let mut w = widget(OracleVariant::Likelihood, false, &[6]);
        w.handle("ask certain").unwrap();
        let table = w.handle("history").unwrap();
        assert!(table.contains("Result"));
        assert!(table.contains("(Certain) Roll: 6"));
    }

    #[test]
    fn oracle_history_persists_like_dice() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShellConfig::default()
            .with_seed(Some(4))
            .with_data_dir(dir.path());
        let theme = ThemeSignal::default();
        let mut w = OracleWidget::new(&config, theme.subscribe());
        w.handle("ask likely").unwrap();
        w.handle("inspire").unwrap();

        let w = OracleWidget::new(&config, theme.subscribe());
        assert_eq!(w.session().history().len(), 1);
        assert!(w.session().current().is_none());
        assert!(dir.path().join("oracle-history.json").exists());
    }

    #[test]
    fn help_lists_likelihoods() {
        let mut w = widget(OracleVariant::Likelihood, false, &[1]);
        let help = w.handle("help").unwrap();
        assert!(help.starts_with("Oracle commands:"));
        assert!(help.contains("Likelihood: impossible"));
    }
}
