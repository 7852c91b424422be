use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use wordle_advisor::core::{GuessConstraint, LetterFeedback, Pattern, Word, simulate_guess_pattern};
use wordle_advisor::solver::{
    GuessSelector, SelectionError, SolverConfig, calculate_entropy, filter_words,
};
use wordle_advisor::wordlists::WordStore;

/// Letters weighted roughly like English, so the corpus is full of repeats and shared letters
const LETTERS: &[u8] = b"EEEEAAAARRRIIOOOTTTNNSSSLLCCUDDPMHGBYFKW";

fn corpus(size: usize, seed: u64) -> Vec<Word> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = BTreeSet::new();
    while seen.len() < size {
        let text: String = (0..5)
            .map(|_| char::from(LETTERS[rng.random_range(0..LETTERS.len())]))
            .collect();
        seen.insert(text);
    }
    seen.iter().map(|text| Word::new(text).unwrap()).collect()
}

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

#[test]
fn test_yellows_never_exceed_unmatched_letters() {
    let words = corpus(150, 1);

    for guess in &words {
        for target in &words {
            let feedback = simulate_guess_pattern(guess, target).feedback();
            let mut available = target.letter_counts();
            let mut yellows = [0u8; 26];

            for (i, &letter) in guess.letters().iter().enumerate() {
                let index = usize::from(letter - b'A');
                match feedback[i] {
                    LetterFeedback::Green => {
                        assert_eq!(letter, target.letter_at(i));
                        available[index] -= 1;
                    }
                    LetterFeedback::Yellow => yellows[index] += 1,
                    LetterFeedback::Gray => {}
                }
            }

            for index in 0..26 {
                assert!(
                    yellows[index] <= available[index],
                    "{guess} vs {target}: too many yellows for {}",
                    char::from(b'A' + index as u8)
                );
            }
        }
    }
}

#[test]
fn test_duplicate_letter_patterns() {
    assert_eq!(simulate_guess_pattern(&word("SPEED"), &word("CREEP")).to_string(), "XYGGX");
    assert_eq!(simulate_guess_pattern(&word("GEESE"), &word("CREEP")).to_string(), "XYGXX");
    assert_eq!(simulate_guess_pattern(&word("LLAMA"), &word("HELLO")).to_string(), "YYXXX");
    assert_eq!(simulate_guess_pattern(&word("EERIE"), &word("THREE")).to_string(), "YXGXG");
}

#[test]
fn test_all_shared_letters_without_position_matches() {
    assert_eq!(simulate_guess_pattern(&word("ABCDE"), &word("BCDEA")).to_string(), "YYYYY");
    // The middle letter lines up when the word is reversed
    assert_eq!(simulate_guess_pattern(&word("ABCDE"), &word("EDCBA")).to_string(), "YYGYY");
}

#[test]
fn test_filter_identity_without_constraints() {
    let words = corpus(300, 2);
    assert_eq!(filter_words(&words, &[]), words);
    assert!(filter_words(&[], &[GuessConstraint::parse("CRANE", "XXXXX").unwrap()]).is_empty());
}

#[test]
fn test_filter_is_idempotent_and_shrinks() {
    let words = corpus(400, 3);
    let targets = [words[17], words[211], words[350]];
    let guesses = [word("SLATE"), word("ROUND"), word("EERIE")];

    for target in targets {
        let mut previous = words.clone();
        let mut history = Vec::new();

        for guess in guesses {
            history.push(GuessConstraint::observed(guess, &target));

            let once = filter_words(&words, &history);
            assert_eq!(filter_words(&once, &history), once);
            assert!(once.len() <= previous.len());
            assert!(once.contains(&target));

            // Filtering by the latest constraint alone gives the same set
            assert_eq!(filter_words(&previous, std::slice::from_ref(&history[history.len() - 1])), once);
            previous = once;
        }
    }
}

#[test]
fn test_entropy_bounds() {
    let words = corpus(500, 4);

    for size in [1, 2, 7, 100, 500] {
        let remaining = &words[..size];
        let bound = (size.min(243) as f64).log2();
        for guess in words.iter().step_by(25) {
            let entropy = calculate_entropy(guess, remaining);
            assert!(entropy >= 0.0, "{guess}: {entropy}");
            assert!(entropy <= bound + 1e-9, "{guess}: {entropy} > {bound}");
        }
    }

    assert_eq!(calculate_entropy(&word("CRANE"), &[]), 0.0);
}

#[test]
fn test_single_candidate_is_returned_for_any_pool() {
    let remaining = [word("CRANE")];
    let store = WordStore::new(corpus(50, 5), Vec::new()).unwrap();
    let selector = GuessSelector::with_defaults(&store).unwrap();
    let history = [GuessConstraint::parse("SLATE", "XXGXG").unwrap()];

    assert_eq!(selector.get_best_guess(&remaining, store.guesses(), &history), Ok(word("CRANE")));
    assert_eq!(selector.get_best_guess(&remaining, &[], &history), Ok(word("CRANE")));
    assert_eq!(selector.get_best_guess(&remaining, &[], &[]), Ok(word("CRANE")));
}

#[test]
fn test_opening_word_is_constant() {
    let mut answers = corpus(300, 6);
    answers.push(word("SLATE"));
    let store = WordStore::new(answers, Vec::new()).unwrap();
    let selector = GuessSelector::with_defaults(&store).unwrap();

    for _ in 0..5 {
        let opener = selector.get_best_guess(store.answers(), store.guesses(), &[]).unwrap();
        assert_eq!(opener, selector.opening_word());
    }
    assert!(["TARES", "SLATE"].contains(&selector.opening_word().text()));
}

#[test]
fn test_computed_opening_word_is_constant() {
    let store = WordStore::new(corpus(120, 7), Vec::new()).unwrap();
    let config = SolverConfig::default().with_opening_words(["ZZZZZ"]);

    let first = GuessSelector::new(config.clone(), &store).unwrap();
    let second = GuessSelector::new(config, &store).unwrap();
    assert_eq!(first.opening_word(), second.opening_word());
    assert_eq!(
        first.get_best_guess(store.answers(), store.guesses(), &[]),
        Ok(first.opening_word())
    );
}

#[test]
fn test_selection_is_deterministic() {
    let store = WordStore::new(corpus(800, 8), corpus(1500, 9)).unwrap();
    let selector = GuessSelector::with_defaults(&store).unwrap();
    let target = store.answers()[123];
    let history = [GuessConstraint::observed(word("ROAST"), &target)];
    let remaining = filter_words(store.answers(), &history);

    let first = selector.get_best_guess(&remaining, store.guesses(), &history).unwrap();
    for _ in 0..5 {
        assert_eq!(selector.get_best_guess(&remaining, store.guesses(), &history), Ok(first));
    }

    // Input order of the guess pool does not matter either
    let mut reversed = store.guesses().to_vec();
    reversed.reverse();
    assert_eq!(selector.get_best_guess(&remaining, &reversed, &history), Ok(first));
}

#[test]
fn test_contradiction_is_reported() {
    let words = corpus(400, 10);
    let history = [
        GuessConstraint::parse("CRANE", "GXXXX").unwrap(),
        GuessConstraint::parse("CRANE", "XXXXX").unwrap(),
    ];

    let remaining = filter_words(&words, &history);
    assert!(remaining.is_empty());

    let store = WordStore::new(words, Vec::new()).unwrap();
    let selector = GuessSelector::with_defaults(&store).unwrap();
    assert_eq!(
        selector.get_best_guess(&remaining, store.guesses(), &history),
        Err(SelectionError::NoConsistentCandidates)
    );
}

#[test]
fn test_games_always_keep_the_target() {
    let store = WordStore::new(corpus(600, 11), Vec::new()).unwrap();
    let selector = GuessSelector::with_defaults(&store).unwrap();

    for &target in store.answers().iter().step_by(60) {
        let mut history: Vec<GuessConstraint> = Vec::new();
        let mut remaining = store.answers().to_vec();

        for _ in 0..10 {
            let guess = selector.get_best_guess(&remaining, store.guesses(), &history).unwrap();
            let constraint = GuessConstraint::observed(guess, &target);
            history.push(constraint);
            if constraint.pattern == Pattern::PERFECT {
                break;
            }
            remaining = filter_words(&remaining, std::slice::from_ref(&constraint));
            assert!(remaining.contains(&target));
        }

        assert_eq!(history.last().map(|c| c.guess), Some(target));
    }
}
