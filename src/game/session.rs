//! Game session
//!
//! Tracks one player's rounds: the current draw, the cumulative score of
//! accepted words, recent results and the best possible word for the draw.

use super::generator::DrawPolicy;
use super::round::{RoundResult, evaluate_round};
use super::search::{BestWord, find_best_word};
use crate::core::Draw;
use crate::wordlists::SetDictionary;
use rand::Rng;
use tracing::info;

/// Number of past rounds kept in the history
pub const HISTORY_LIMIT: usize = 10;

/// A sequence of rounds played against a shared dictionary
pub struct Session<'a> {
    dictionary: &'a SetDictionary,
    policy: DrawPolicy,
    draw: Draw,
    history: Vec<RoundResult>,
    session_score: i64,
    rounds_played: usize,
    best: Option<BestWord>,
}

impl<'a> Session<'a> {
    /// Start a session on a given draw
    #[must_use]
    pub const fn new(dictionary: &'a SetDictionary, policy: DrawPolicy, draw: Draw) -> Self {
        Self {
            dictionary,
            policy,
            draw,
            history: Vec::new(),
            session_score: 0,
            rounds_played: 0,
            best: None,
        }
    }

    /// Start a session on a freshly generated draw
    pub fn with_random_draw<R: Rng + ?Sized>(
        dictionary: &'a SetDictionary,
        policy: DrawPolicy,
        rng: &mut R,
    ) -> Self {
        Self::new(dictionary, policy, policy.generate(rng))
    }

    /// Play a word against the current draw
    ///
    /// Accepted words add their total to the session score. The best word
    /// for the draw is computed on the first submission.
    pub fn submit(&mut self, raw_word: &str) -> &RoundResult {
        let result = evaluate_round(&self.draw, raw_word, self.dictionary);
        self.rounds_played += 1;

        if result.is_valid() {
            self.session_score += i64::from(result.total());
        }

        self.best_solution();

        info!(
            word = %result.normalized_word,
            total = result.total(),
            session_score = self.session_score,
            "round submitted"
        );

        self.history.insert(0, result);
        self.history.truncate(HISTORY_LIMIT);
        &self.history[0]
    }

    /// Replace the draw with a newly generated one
    pub fn new_draw<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let draw = self.policy.generate(rng);
        self.set_draw(draw);
    }

    /// Replace the draw, forgetting the best word of the previous one
    pub fn set_draw(&mut self, draw: Draw) {
        self.draw = draw;
        self.best = None;
    }

    /// Best dictionary word for the current draw, computed on first use
    pub fn best_solution(&mut self) -> Option<&BestWord> {
        if self.best.is_none() {
            self.best = find_best_word(&self.draw, self.dictionary.words());
        }
        self.best.as_ref()
    }

    /// Best word if it has already been computed for this draw
    #[must_use]
    pub const fn known_best(&self) -> Option<&BestWord> {
        self.best.as_ref()
    }

    #[must_use]
    pub const fn draw(&self) -> &Draw {
        &self.draw
    }

    #[must_use]
    pub const fn policy(&self) -> DrawPolicy {
        self.policy
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a SetDictionary {
        self.dictionary
    }

    /// Recent rounds, most recent first
    #[must_use]
    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }

    /// Most recent round, if any
    #[must_use]
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.history.first()
    }

    /// Sum of the totals of all accepted words
    #[must_use]
    pub const fn session_score(&self) -> i64 {
        self.session_score
    }

    /// Number of words submitted, accepted or not
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::InvalidReason;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> SetDictionary {
        SetDictionary::from_words(["rame", "baigner", "ouf", "arme", "été"])
    }

    fn draw(letters: &str) -> Draw {
        letters.parse().unwrap()
    }

    #[test]
    fn valid_words_add_to_session_score() {
        let dict = dictionary();
        let mut session = Session::new(&dict, DrawPolicy::Weighted, draw("RAME"));

        assert_eq!(session.submit("rame").total(), 15);
        assert_eq!(session.submit("arme").total(), 12);
        assert_eq!(session.session_score(), 27);
        assert_eq!(session.rounds_played(), 2);
    }

    #[test]
    fn invalid_words_do_not_score() {
        let dict = dictionary();
        let mut session = Session::new(&dict, DrawPolicy::Weighted, draw("RAME"));

        let result = session.submit("ramer");
        assert_eq!(result.invalid_reason(), Some(InvalidReason::NotInDictionary));

        let result = session.submit("  ");
        assert_eq!(result.invalid_reason(), Some(InvalidReason::Empty));

        assert_eq!(session.session_score(), 0);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn history_is_most_recent_first_and_capped() {
        let dict = dictionary();
        let mut session = Session::new(&dict, DrawPolicy::Weighted, draw("RAME"));

        for _ in 0..HISTORY_LIMIT {
            session.submit("ouf");
        }
        session.submit("rame");

        assert_eq!(session.history().len(), HISTORY_LIMIT);
        assert_eq!(session.history()[0].normalized_word, "RAME");
        assert_eq!(session.last_result().map(RoundResult::total), Some(15));
        assert_eq!(session.rounds_played(), HISTORY_LIMIT + 1);
    }

    #[test]
    fn best_solution_computed_on_submit() {
        let dict = dictionary();
        let mut session = Session::new(&dict, DrawPolicy::Weighted, draw("RAME"));

        assert!(session.known_best().is_none());
        session.submit("ouf");

        let best = session.known_best().unwrap();
        assert_eq!(best.word, "RAME");
        assert_eq!(best.total(), 15);
    }

    #[test]
    fn new_draw_resets_best_but_keeps_score() {
        let dict = dictionary();
        let mut session = Session::new(&dict, DrawPolicy::Weighted, draw("RAME"));
        session.submit("rame");

        let mut rng = StdRng::seed_from_u64(9);
        session.new_draw(&mut rng);

        assert!(session.known_best().is_none());
        assert_eq!(session.session_score(), 15);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn best_solution_on_demand() {
        let dict = dictionary();
        let mut session = Session::new(&dict, DrawPolicy::Weighted, draw("BANE"));

        let best = session.best_solution().unwrap();
        assert_eq!(best.word, "BAIGNER");
        assert_eq!(best.total(), 13);
    }

    #[test]
    fn random_session_uses_policy() {
        let dict = dictionary();
        let mut rng = StdRng::seed_from_u64(11);
        let session = Session::with_random_draw(&dict, DrawPolicy::Uniform, &mut rng);

        assert_eq!(session.policy(), DrawPolicy::Uniform);
        assert!(session.draw().letters().iter().all(char::is_ascii_uppercase));
        assert_eq!(session.dictionary().len(), 5);
    }
}
