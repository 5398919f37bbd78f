//! Core resolution logic: utterance -> category -> canned response.
//!
//! - Classification is ordered containment matching (Category::classify)
//! - Multi-candidate categories pick uniformly via the injected RandomSource
//! - The time response interpolates the injected Clock at resolution time
//!
//! Resolution never fails: unmatched input falls through to the default
//! category, so every call returns a response string.

use crate::domain::{Category, ResponseCatalog, TIME_PLACEHOLDER, Utterance};
use crate::ports::{Clock, RandomSource};
use std::sync::Arc;
use tracing::debug;

/// Display format for the interpolated wall-clock value, e.g. "3:07 PM".
const TIME_FORMAT: &str = "%-I:%M %p";

/// Response resolver. Pure apart from the injected clock and random source.
pub struct ResponseResolver {
    catalog: ResponseCatalog,
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
}

impl ResponseResolver {
    pub fn new(
        catalog: ResponseCatalog,
        clock: Arc<dyn Clock>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            catalog,
            clock,
            random,
        }
    }

    /// Resolve one utterance to a response string.
    pub fn resolve(&self, utterance: &Utterance) -> String {
        let category = Category::classify(utterance);
        let candidates = self.catalog.entry(category).candidates();

        let chosen = if candidates.len() == 1 {
            &candidates[0]
        } else {
            &candidates[self.random.pick(candidates.len())]
        };

        debug!(?category, candidates = candidates.len(), "resolved utterance");

        if chosen.contains(TIME_PLACEHOLDER) {
            let now = self.clock.now().format(TIME_FORMAT).to_string();
            chosen.replace(TIME_PLACEHOLDER, &now)
        } else {
            chosen.clone()
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{FixedRandom, FrozenClock};
    use super::*;
    use crate::domain::ResponseCatalog;

    fn resolver_with(pick: usize) -> ResponseResolver {
        ResponseResolver::new(
            ResponseCatalog::builtin(),
            Arc::new(FrozenClock::at(15, 7)),
            Arc::new(FixedRandom::returning(pick)),
        )
    }

    fn resolve(resolver: &ResponseResolver, input: &str) -> String {
        resolver.resolve(&Utterance::new(input))
    }

    #[test]
    fn test_greeting_draws_from_fixed_set() {
        let greetings = [
            "Hello! How can I assist you today?",
            "Hi there! What would you like to know?",
            "Hey! Ready to help with anything you need!",
        ];
        for pick in 0..greetings.len() {
            let resolver = resolver_with(pick);
            let reply = resolve(&resolver, "Hey there!");
            assert_eq!(reply, greetings[pick]);
        }
    }

    #[test]
    fn test_unmatched_input_gets_exact_default() {
        let resolver = resolver_with(0);
        assert_eq!(
            resolve(&resolver, "banana"),
            "That's interesting! I'm designed to process information quickly. \
             How can I help you specifically?"
        );
    }

    #[test]
    fn test_empty_input_gets_default() {
        let resolver = resolver_with(0);
        let default = resolve(&resolver, "banana");
        assert_eq!(resolve(&resolver, ""), default);
    }

    #[test]
    fn test_joke_beats_weather() {
        let resolver = resolver_with(0);
        let joke = resolve(&resolver, "tell me a joke");
        assert_eq!(resolve(&resolver, "a joke about the weather"), joke);
    }

    #[test]
    fn test_joke_draws_from_fixed_set() {
        let catalog = ResponseCatalog::builtin();
        let jokes: Vec<String> = catalog.entry(Category::Joke).candidates().to_vec();
        for pick in 0..2 {
            let resolver = resolver_with(pick);
            let reply = resolve(&resolver, "can you tell me a joke");
            assert!(jokes.contains(&reply));
        }
    }

    #[test]
    fn test_time_interpolates_frozen_clock() {
        let resolver = resolver_with(0);
        assert_eq!(
            resolve(&resolver, "what time is it"),
            "The current time is 3:07 PM."
        );
    }

    #[test]
    fn test_single_candidate_is_idempotent() {
        let resolver = resolver_with(0);
        let first = resolve(&resolver, "what's the weather");
        for _ in 0..10 {
            assert_eq!(resolve(&resolver, "what's the weather"), first);
        }
    }

    #[test]
    fn test_uniform_pick_stays_in_range() {
        // A pick index past the end is clamped by the test double, but the
        // real contract is pick(upper) < upper; exercise the resolver with
        // an out-of-range double to make sure selection still lands in set.
        let resolver = resolver_with(99);
        let catalog = ResponseCatalog::builtin();
        let greetings = catalog.entry(Category::Greeting).candidates();
        assert!(greetings.contains(&resolve(&resolver, "hello")));
    }
}
