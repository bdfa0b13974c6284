use std::sync::Arc;
use std::time::Duration;

use pass_gen_core::error::{DeleteError, GeneratorError};
use pass_gen_core::generator::options::GeneratorOptions;
use pass_gen_core::generator::phrase_generator::PhraseGenerator;

const SEED: [&str; 10] = [
    "alpha", "bravo", "charlie", "delta", "eagle", "falcon", "garden", "harbor", "island",
    "jungle",
];

fn seeded() -> PhraseGenerator {
    PhraseGenerator::with_words(SEED, GeneratorOptions::new()).unwrap()
}

/// Deferred add units land at their own pace; poll with a bounded number
/// of attempts.
async fn wait_for_count(generator: &PhraseGenerator, expected: usize) {
    for _ in 0..200 {
        if generator.word_count() == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!(
        "word count never reached {} (still {})",
        expected,
        generator.word_count()
    );
}

#[tokio::test]
async fn range_error_carries_both_counts() {
    let generator = seeded();
    let err = generator.generate_words(10, true).await.unwrap_err();
    assert!(matches!(
        err,
        GeneratorError::NotEnoughWords {
            requested: 10,
            available: 9
        }
    ));
    assert_eq!(err.to_string(), "cannot generate 10, only 9 available");

    // Length minus one is the last accepted amount.
    assert_eq!(generator.generate_words(9, true).await.unwrap().len(), 9);
}

#[tokio::test]
async fn generate_uses_the_configured_default_amount() {
    let mut options = GeneratorOptions::new();
    options.num_words = 3;
    let generator = PhraseGenerator::with_words(SEED, options).unwrap();

    let words = generator.generate().await.unwrap();
    assert_eq!(words.len(), 3);
}

#[tokio::test]
async fn unique_sampling_never_repeats_a_word() {
    let generator =
        PhraseGenerator::with_words(["a", "b", "c"], GeneratorOptions::new()).unwrap();
    for _ in 0..50 {
        let words = generator.generate_words(2, true).await.unwrap();
        assert_ne!(words[0], words[1]);
    }
}

#[tokio::test]
async fn added_words_are_case_folded() {
    let generator = seeded();
    generator.add(["Violet"]);
    wait_for_count(&generator, 11).await;

    // The original casing never entered the pool.
    let outcome = generator.delete(&["Violet"]).await;
    assert_eq!(outcome.removed, 0);
    assert_eq!(
        outcome.errors,
        vec![DeleteError::NotFound("Violet".to_owned())]
    );

    let outcome = generator.delete(&["violet"]).await;
    assert_eq!(outcome.removed, 1);
    assert!(outcome.errors.is_empty());
}

#[tokio::test]
async fn adding_a_duplicate_lands_exactly_once() {
    let generator = seeded();
    generator.add(["violet"]);
    generator.add(["violet"]);
    wait_for_count(&generator, 11).await;

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(generator.word_count(), 11);
}

#[tokio::test]
async fn filter_rejections_are_silent() {
    let generator = seeded();
    generator.add(["xy"]);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(generator.word_count(), 10);
}

#[tokio::test]
async fn delete_over_a_small_pool_takes_the_rebuild_path() {
    // Four targets over ten words: rebuild, with uniform miss reporting.
    let generator = seeded();
    let outcome = generator
        .delete(&["alpha", "bravo", "charlie", "missing"])
        .await;

    assert_eq!(outcome.removed, 3);
    assert_eq!(
        outcome.errors,
        vec![DeleteError::NotFound("missing".to_owned())]
    );
    assert_eq!(generator.word_count(), 7);
}

#[tokio::test]
async fn delete_over_a_large_pool_takes_the_indexed_path() {
    // Four targets over 128 words: indexed, same outcome shape.
    let seed: Vec<String> = (0..128).map(|i| format!("word{:03}", i)).collect();
    let generator = PhraseGenerator::with_words(seed, GeneratorOptions::new()).unwrap();

    let outcome = generator
        .delete(&["word001", "word002", "word003", "missing"])
        .await;

    assert_eq!(outcome.removed, 3);
    assert_eq!(
        outcome.errors,
        vec![DeleteError::NotFound("missing".to_owned())]
    );
    assert_eq!(generator.word_count(), 125);
}

#[tokio::test]
async fn delete_queues_behind_readiness() {
    let mut options =
        GeneratorOptions::new().reader(Box::new(&b"alpha\nbravo\ncharlie\n"[..]));
    options.auto_init = false;
    let generator = Arc::new(PhraseGenerator::new(options).unwrap());

    let waiter = {
        let generator = Arc::clone(&generator);
        tokio::spawn(async move { generator.delete(&["alpha", "zulu"]).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!waiter.is_finished());

    generator.init();
    let outcome = waiter.await.unwrap();
    assert_eq!(outcome.removed, 1);
    assert_eq!(outcome.errors, vec![DeleteError::NotFound("zulu".to_owned())]);
    assert_eq!(generator.word_count(), 2);
}

#[tokio::test]
async fn invalid_length_bounds_fail_construction() {
    let mut options = GeneratorOptions::new();
    options.min_length = 9;
    options.max_length = 3;

    let err = PhraseGenerator::new(options).unwrap_err();
    assert!(matches!(
        err,
        GeneratorError::InvalidBounds { min: 9, max: 3 }
    ));
}
