//! The common contract over both oracle tables.

use forge_core::RandomSource;

use crate::entry::OracleOutcome;
use crate::error::{OracleError, OracleResult};
use crate::likelihood::{Likelihood, LikelihoodOracle};
use crate::narrative::NarrativeOracle;

/// Anything that can answer a yes/no question.
pub trait Resolver {
    /// Short name of the table, for display.
    fn name(&self) -> &'static str;

    /// Whether questions must carry a likelihood.
    fn needs_likelihood(&self) -> bool;

    /// Answer one question.
    fn resolve(
        &self,
        source: &mut dyn RandomSource,
        likelihood: Option<Likelihood>,
    ) -> OracleResult<OracleOutcome>;
}

impl Resolver for LikelihoodOracle {
    fn name(&self) -> &'static str {
        "likelihood"
    }

    fn needs_likelihood(&self) -> bool {
        true
    }

    fn resolve(
        &self,
        source: &mut dyn RandomSource,
        likelihood: Option<Likelihood>,
    ) -> OracleResult<OracleOutcome> {
        let likelihood = likelihood.ok_or(OracleError::MissingLikelihood)?;
        self.ask(source, likelihood)
    }
}

impl Resolver for NarrativeOracle {
    fn name(&self) -> &'static str {
        "narrative"
    }

    fn needs_likelihood(&self) -> bool {
        false
    }

    fn resolve(
        &self,
        source: &mut dyn RandomSource,
        likelihood: Option<Likelihood>,
    ) -> OracleResult<OracleOutcome> {
        if let Some(l) = likelihood {
            tracing::debug!(likelihood = %l, "narrative oracle ignores likelihood");
        }
        self.ask(source)
    }
}

/// Which oracle table a widget uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OracleVariant {
    /// One d6 against a likelihood threshold.
    #[default]
    Likelihood,
    /// 2d6 onto the narrative table.
    Narrative,
}

impl OracleVariant {
    /// Build the resolver for this variant.
    pub fn resolver(self, modifier_die: bool) -> Box<dyn Resolver> {
        match self {
            Self::Likelihood => {
                Box::new(LikelihoodOracle::new().with_modifier_die(modifier_die))
            }
            Self::Narrative => Box::new(NarrativeOracle::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::ScriptedRandom;

    #[test]
    fn likelihood_table_requires_likelihood() {
        let r = OracleVariant::Likelihood.resolver(false);
        let mut rng = ScriptedRandom::constant(4);
        assert!(r.needs_likelihood());
        assert_eq!(r.resolve(&mut rng, None), Err(OracleError::MissingLikelihood));
        let out = r.resolve(&mut rng, Some(Likelihood::EvenOdds)).unwrap();
        assert_eq!(out.answer, "Yes");
    }

    #[test]
    fn narrative_table_ignores_likelihood() {
        let r = OracleVariant::Narrative.resolver(false);
        let mut rng = ScriptedRandom::constant(6);
        assert!(!r.needs_likelihood());
        let out = r.resolve(&mut rng, Some(Likelihood::Certain)).unwrap();
        assert_eq!(out.answer, "Absolutely not");
        assert_eq!(out.likelihood, None);
    }

    #[test]
    fn names() {
        assert_eq!(OracleVariant::Likelihood.resolver(true).name(), "likelihood");
        assert_eq!(OracleVariant::Narrative.resolver(true).name(), "narrative");
    }
}
