//! Verb + noun prompts for open-ended inspiration.

use forge_core::{RandomSource, pick};

use crate::tables::{NOUNS, VERBS};

/// A verb paired with a noun, e.g. `Betray Ally`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbNoun {
    /// The action.
    pub verb: &'static str,
    /// The subject.
    pub noun: &'static str,
}

impl VerbNoun {
    /// Draw a fresh verb and noun.
    pub fn roll<R: RandomSource + ?Sized>(source: &mut R) -> Self {
        Self {
            verb: draw(source, VERBS),
            noun: draw(source, NOUNS),
        }
    }

    /// Keep the noun, draw a new verb.
    pub fn reroll_verb<R: RandomSource + ?Sized>(self, source: &mut R) -> Self {
        Self {
            verb: draw(source, VERBS),
            ..self
        }
    }

    /// Keep the verb, draw a new noun.
    pub fn reroll_noun<R: RandomSource + ?Sized>(self, source: &mut R) -> Self {
        Self {
            noun: draw(source, NOUNS),
            ..self
        }
    }
}

fn draw<R: RandomSource + ?Sized>(source: &mut R, table: &'static [&'static str]) -> &'static str {
    pick(source, table).copied().unwrap_or_default()
}

impl std::fmt::Display for VerbNoun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.verb, self.noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::ScriptedRandom;

    #[test]
    fn roll_draws_verb_then_noun() {
        let mut rng = ScriptedRandom::new([1, 2]);
        let p = VerbNoun::roll(&mut rng);
        assert_eq!(p.to_string(), "Abandon Adversity");
    }

    #[test]
    fn rerolls_keep_the_other_half() {
        let mut rng = ScriptedRandom::new([1, 1, 3, 4]);
        let p = VerbNoun::roll(&mut rng);
        let p = p.reroll_verb(&mut rng);
        assert_eq!(p.verb, "Activate");
        assert_eq!(p.noun, "Advantage");
        let p = p.reroll_noun(&mut rng);
        assert_eq!(p.verb, "Activate");
        assert_eq!(p.noun, "Agreement");
    }
}
