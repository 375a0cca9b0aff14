//! Study loop tests.

mod common;

use pretty_assertions::assert_eq;

use common::{fixtures, TestContext};

/// Lines showing a card face, in the order they were printed.
fn faces(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter_map(|line| line.rsplit("> ").next())
        .filter(|line| line.starts_with("Q: ") || line.starts_with("A: "))
        .collect()
}

fn counters(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter_map(|line| line.rsplit("> ").next())
        .filter(|line| line.starts_with("Card "))
        .collect()
}

#[tokio::test]
async fn test_study_empty_library() {
    let ctx = TestContext::new();
    let output = ctx.run(&["study"]).await.unwrap();
    assert_eq!(output, "No cards to study!\nYou haven't created any flashcards yet.\n");
}

#[tokio::test]
async fn test_study_empty_category() {
    let ctx = TestContext::new();
    fixtures::seed_sample_cards(&mut ctx.store());
    let output = ctx.run(&["study", "--category", "Chemistry"]).await.unwrap();
    assert_eq!(
        output,
        "No cards to study!\nThere are no cards in the \"chemistry\" category.\n"
    );
}

#[tokio::test]
async fn test_next_cycles_back_to_start() {
    let ctx = TestContext::new();
    fixtures::seed_sample_cards(&mut ctx.store());

    let output = ctx
        .run_with_input(&["study", "--seed", "11"], "n\nn\nn\nq\n")
        .await
        .unwrap();

    let shown = faces(&output);
    assert_eq!(shown.len(), 4);
    assert_eq!(shown[0], shown[3]);
    assert_ne!(shown[0], shown[1]);
    assert_ne!(shown[1], shown[2]);
    assert_eq!(
        counters(&output),
        vec!["Card 1 of 3 (33%)", "Card 2 of 3 (67%)", "Card 3 of 3 (100%)", "Card 1 of 3 (33%)"]
    );
}

#[tokio::test]
async fn test_previous_wraps_to_last() {
    let ctx = TestContext::new();
    fixtures::seed_sample_cards(&mut ctx.store());

    let output = ctx
        .run_with_input(&["study", "--seed", "11"], "p\nq\n")
        .await
        .unwrap();
    assert_eq!(counters(&output), vec!["Card 1 of 3 (33%)", "Card 3 of 3 (100%)"]);
}

#[tokio::test]
async fn test_flip_reveals_answer() {
    let ctx = TestContext::new();
    ctx.run(&["add", "What is 2+2?", "4", "math"]).await.unwrap();

    let output = ctx.run_with_input(&["study"], "f\nf\nq\n").await.unwrap();
    assert_eq!(faces(&output), vec!["Q: What is 2+2?", "A: 4", "Q: What is 2+2?"]);
}

#[tokio::test]
async fn test_category_filter_limits_cards() {
    let ctx = TestContext::new();
    fixtures::seed_sample_cards(&mut ctx.store());

    let output = ctx
        .run_with_input(&["study", "-c", "math"], "n\nn\nq\n")
        .await
        .unwrap();
    let shown = faces(&output);
    assert_eq!(shown.len(), 3);
    assert!(shown
        .iter()
        .all(|face| *face == "Q: What is 2+2?" || *face == "Q: What is 3*3?"));
    assert_eq!(counters(&output)[0], "Card 1 of 2 (50%)");
}

#[tokio::test]
async fn test_seed_repeats_order() {
    let ctx = TestContext::new();
    fixtures::seed_sample_cards(&mut ctx.store());

    let script = "n\nn\nq\n";
    let first = ctx.run_with_input(&["study", "--seed", "99"], script).await.unwrap();
    let second = ctx.run_with_input(&["study", "--seed", "99"], script).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_shuffle_restarts_at_first_card() {
    let ctx = TestContext::new();
    fixtures::seed_sample_cards(&mut ctx.store());

    let output = ctx
        .run_with_input(&["study", "--seed", "4"], "n\ns\nq\n")
        .await
        .unwrap();
    assert!(output.contains("Shuffled.\n"));
    assert_eq!(
        counters(&output),
        vec!["Card 1 of 3 (33%)", "Card 2 of 3 (67%)", "Card 1 of 3 (33%)"]
    );
}

#[tokio::test]
async fn test_end_of_input_and_unknown_commands() {
    let ctx = TestContext::new();
    ctx.run(&["add", "q", "a", "c"]).await.unwrap();

    let output = ctx.run_with_input(&["study"], "jump\n").await.unwrap();
    assert!(output.contains("Unknown command \"jump\"\n"));
    assert_eq!(counters(&output).len(), 2);
    assert!(output.ends_with("> \n"));
}
