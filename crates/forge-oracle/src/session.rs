//! Oracle session state: current answer, prompts and recent history.

use forge_core::{RandomSource, timestamp_label};
use forge_ledger::{HistoryLedger, KeyValueStore, Persistence};

use crate::entry::{OracleEntry, OracleOutcome};
use crate::error::{OracleError, OracleResult};
use crate::event::{RandomEvent, generate_random_event};
use crate::likelihood::Likelihood;
use crate::prompt::VerbNoun;
use crate::resolver::Resolver;
use crate::tables::pick_inspiration;

/// How many entries the oracle history keeps.
pub const ORACLE_HISTORY_CAP: usize = 5;

/// Storage key for the oracle history.
pub const ORACLE_HISTORY_KEY: &str = "oracle-history";

/// One oracle's working state.
pub struct OracleSession {
    resolver: Box<dyn Resolver>,
    current: Option<OracleOutcome>,
    current_event: Option<RandomEvent>,
    current_prompt: Option<VerbNoun>,
    current_inspiration: Option<&'static str>,
    history: HistoryLedger<OracleEntry>,
}

impl OracleSession {
    /// A session answering with `resolver` and recording into `history`.
    pub fn new(resolver: Box<dyn Resolver>, history: HistoryLedger<OracleEntry>) -> Self {
        Self {
            resolver,
            current: None,
            current_event: None,
            current_prompt: None,
            current_inspiration: None,
            history,
        }
    }

    /// A session whose history is not stored anywhere.
    pub fn session_only(resolver: Box<dyn Resolver>) -> Self {
        Self::new(resolver, HistoryLedger::new(ORACLE_HISTORY_CAP))
    }

    /// A session whose history is restored from and mirrored into `store`.
    pub fn durable(resolver: Box<dyn Resolver>, store: impl KeyValueStore + 'static) -> Self {
        Self::new(
            resolver,
            HistoryLedger::restore(
                ORACLE_HISTORY_CAP,
                Persistence::new(store, ORACLE_HISTORY_KEY),
            ),
        )
    }

    /// The table answering questions.
    pub fn resolver(&self) -> &dyn Resolver {
        self.resolver.as_ref()
    }

    /// Ask a question and record the answer.
    pub fn ask(
        &mut self,
        source: &mut dyn RandomSource,
        likelihood: Option<Likelihood>,
    ) -> OracleResult<OracleOutcome> {
        let outcome = self.resolver.resolve(source, likelihood)?;
        tracing::debug!(answer = %outcome.answer, roll = outcome.roll, "oracle answered");
        self.current = Some(outcome.clone());
        self.current_event = None;
        self.history.append(OracleEntry::Question(outcome.clone()));
        Ok(outcome)
    }

    /// Draw an inspiration seed. Not recorded in the history.
    pub fn inspire(&mut self, source: &mut dyn RandomSource) -> &'static str {
        let seed = pick_inspiration(source);
        self.current_inspiration = Some(seed);
        seed
    }

    /// Roll a random event and record it.
    pub fn random_event(&mut self, source: &mut dyn RandomSource) -> OracleResult<RandomEvent> {
        let event = generate_random_event(source)?;
        self.history.append(event.to_entry());
        self.current_event = Some(event.clone());
        Ok(event)
    }

    /// Draw a verb + noun prompt and record it.
    pub fn prompt(&mut self, source: &mut dyn RandomSource) -> VerbNoun {
        let prompt = VerbNoun::roll(source);
        self.set_prompt(prompt, false);
        prompt
    }

    /// Redraw the verb of the current prompt.
    pub fn reroll_verb(&mut self, source: &mut dyn RandomSource) -> OracleResult<VerbNoun> {
        let prompt = self.current_prompt.ok_or(OracleError::NoPrompt)?.reroll_verb(source);
        self.set_prompt(prompt, true);
        Ok(prompt)
    }

    /// Redraw the noun of the current prompt.
    pub fn reroll_noun(&mut self, source: &mut dyn RandomSource) -> OracleResult<VerbNoun> {
        let prompt = self.current_prompt.ok_or(OracleError::NoPrompt)?.reroll_noun(source);
        self.set_prompt(prompt, true);
        Ok(prompt)
    }

    fn set_prompt(&mut self, prompt: VerbNoun, rerolled: bool) {
        self.current_prompt = Some(prompt);
        self.history.append(OracleEntry::Prompt {
            result: prompt.to_string(),
            rerolled,
            timestamp: timestamp_label(),
        });
    }

    /// The latest answer.
    pub fn current(&self) -> Option<&OracleOutcome> {
        self.current.as_ref()
    }

    /// The random event rolled for the latest answer, if any.
    pub fn current_event(&self) -> Option<&RandomEvent> {
        self.current_event.as_ref()
    }

    /// The latest verb + noun prompt.
    pub fn current_prompt(&self) -> Option<VerbNoun> {
        self.current_prompt
    }

    /// The latest inspiration seed.
    pub fn current_inspiration(&self) -> Option<&'static str> {
        self.current_inspiration
    }

    /// Whether the latest answer offers a random event not yet rolled.
    pub fn random_event_pending(&self) -> bool {
        self.current.as_ref().is_some_and(|c| c.random_event) && self.current_event.is_none()
    }

    /// Recent entries, newest first.
    pub fn history(&self) -> &HistoryLedger<OracleEntry> {
        &self.history
    }

    /// Forget the history and everything currently displayed.
    pub fn clear(&mut self) {
        self.history.clear();
        self.current = None;
        self.current_event = None;
        self.current_prompt = None;
        self.current_inspiration = None;
    }
}

impl std::fmt::Debug for OracleSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleSession")
            .field("resolver", &self.resolver.name())
            .field("current", &self.current)
            .field("history", &self.history.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::OracleVariant;
    use forge_core::{ScriptedRandom, SeededRandom};
    use forge_ledger::MemoryStore;

    fn likelihood_session() -> OracleSession {
        OracleSession::session_only(OracleVariant::Likelihood.resolver(false))
    }

    #[test]
    fn ask_records_newest_first() {
        let mut s = likelihood_session();
        let mut rng = ScriptedRandom::new([6, 1]);
        s.ask(&mut rng, Some(Likelihood::Impossible)).unwrap();
        s.ask(&mut rng, Some(Likelihood::Certain)).unwrap();
        let answers: Vec<String> = s.history().entries().iter().map(|e| e.headline()).collect();
        assert_eq!(answers, vec!["No", "Yes"]);
        assert_eq!(s.current().map(|c| c.answer.as_str()), Some("No"));
    }

    #[test]
    fn history_keeps_five() {
        let mut s = likelihood_session();
        let mut rng = SeededRandom::from_seed(1);
        for _ in 0..8 {
            s.ask(&mut rng, Some(Likelihood::Likely)).unwrap();
        }
        assert_eq!(s.history().len(), ORACLE_HISTORY_CAP);
    }

    #[test]
    fn invalid_question_records_nothing() {
        let mut s = likelihood_session();
        let mut rng = ScriptedRandom::constant(3);
        assert_eq!(s.ask(&mut rng, None), Err(OracleError::MissingLikelihood));
        assert!(s.history().is_empty());
        assert!(s.current().is_none());
    }

    #[test]
    fn inspiration_stays_out_of_history() {
        let mut s = likelihood_session();
        let mut rng = ScriptedRandom::constant(1);
        assert_eq!(s.inspire(&mut rng), "Ancient ruins");
        assert_eq!(s.current_inspiration(), Some("Ancient ruins"));
        assert!(s.history().is_empty());
    }

    #[test]
    fn prompts_and_rerolls_are_recorded() {
        let mut s = likelihood_session();
        let mut rng = ScriptedRandom::new([1, 1, 2]);
        assert_eq!(s.reroll_verb(&mut rng), Err(OracleError::NoPrompt));
        s.prompt(&mut rng);
        let p = s.reroll_noun(&mut rng).unwrap();
        assert_eq!(p.to_string(), "Abandon Adversity");
        assert_eq!(s.history().len(), 2);
        assert_eq!(
            s.history().latest().map(|e| e.headline()),
            Some("Abandon Adversity (Re-rolled)".to_string())
        );
    }

    #[test]
    fn doubles_leave_event_pending_until_rolled() {
        let mut s = OracleSession::session_only(OracleVariant::Likelihood.resolver(true));
        let mut rng = ScriptedRandom::new([4, 4, 1, 6]);
        let out = s.ask(&mut rng, Some(Likelihood::EvenOdds)).unwrap();
        assert!(out.random_event);
        assert!(s.random_event_pending());
        let e = s.random_event(&mut rng).unwrap();
        assert_eq!(e.to_string(), "Remote Event with a Positive Spin");
        assert!(!s.random_event_pending());
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn clear_resets_everything() {
        let mut s = likelihood_session();
        let mut rng = SeededRandom::from_seed(2);
        s.ask(&mut rng, Some(Likelihood::Likely)).unwrap();
        s.prompt(&mut rng);
        s.inspire(&mut rng);
        s.clear();
        assert!(s.history().is_empty());
        assert!(s.current().is_none());
        assert!(s.current_prompt().is_none());
        assert!(s.current_inspiration().is_none());
    }

    #[test]
    fn durable_history_reloads() {
        let store = MemoryStore::new();
        let mut s = OracleSession::durable(OracleVariant::Narrative.resolver(false), store.clone());
        let mut rng = ScriptedRandom::constant(1);
        s.ask(&mut rng, None).unwrap();

        let reloaded = OracleSession::durable(OracleVariant::Narrative.resolver(false), store);
        assert_eq!(reloaded.history().len(), 1);
        assert_eq!(
            reloaded.history().latest().map(|e| e.headline()),
            Some("Yes, absolutely".to_string())
        );
        assert!(reloaded.current().is_none());
    }
}
