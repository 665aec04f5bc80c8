//! Full rounds against the embedded dictionary

use letter_draw::core::Draw;
use letter_draw::game::{DrawPolicy, HISTORY_LIMIT, InvalidReason, Session, find_best_word};
use letter_draw::wordlists::loader::embedded_dictionary;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn draw(letters: &str) -> Draw {
    letters.parse().unwrap()
}

#[test]
fn session_scores_valid_words_only() {
    let dictionary = embedded_dictionary();
    let mut session = Session::new(&dictionary, DrawPolicy::Weighted, draw("RAME"));

    assert_eq!(session.submit("rame").total(), 15);
    assert_eq!(session.submit("crème").total(), 9);

    let invalid = session.submit("zzzz");
    assert_eq!(invalid.invalid_reason(), Some(InvalidReason::NotInDictionary));

    let empty = session.submit("   ");
    assert_eq!(empty.invalid_reason(), Some(InvalidReason::Empty));

    assert_eq!(session.session_score(), 24);
    assert_eq!(session.rounds_played(), 4);
    assert_eq!(session.history()[0].raw_word, "   ");
}

#[test]
fn best_solution_is_computed_on_first_submit() {
    let dictionary = embedded_dictionary();
    let mut session = Session::new(&dictionary, DrawPolicy::Weighted, draw("BANE"));
    assert!(session.known_best().is_none());

    session.submit("bandeau");
    let best = session.known_best().unwrap();
    assert_eq!(best.word, "BANDEAU");
    assert_eq!(best.total(), 14);
}

#[test]
fn history_is_bounded_most_recent_first() {
    let dictionary = embedded_dictionary();
    let mut session = Session::new(&dictionary, DrawPolicy::Uniform, draw("RAME"));

    for _ in 0..HISTORY_LIMIT {
        session.submit("mer");
    }
    session.submit("rame");

    assert_eq!(session.history().len(), HISTORY_LIMIT);
    assert_eq!(session.last_result().unwrap().normalized_word, "RAME");
    assert_eq!(session.rounds_played(), HISTORY_LIMIT + 1);
}

#[test]
fn new_draw_resets_best_but_keeps_score() {
    let dictionary = embedded_dictionary();
    let mut rng = StdRng::seed_from_u64(11);
    let mut session = Session::with_random_draw(&dictionary, DrawPolicy::Weighted, &mut rng);

    session.set_draw(draw("RAME"));
    session.submit("rame");
    session.new_draw(&mut rng);

    assert!(session.known_best().is_none());
    assert_eq!(session.session_score(), 15);
}

#[test]
fn best_word_matches_session_best() {
    let dictionary = embedded_dictionary();
    let mut session = Session::new(&dictionary, DrawPolicy::Weighted, draw("TRPL"));

    let expected = find_best_word(&draw("TRPL"), dictionary.words()).unwrap();
    assert_eq!(session.best_solution(), Some(&expected));
    assert_eq!(expected.word, "TORPILLE");
    assert_eq!(expected.total(), 13);
}
