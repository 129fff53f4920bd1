//! Integration tests against a live PostgreSQL instance.
//!
//! These exercise the transactional engines end to end and are ignored
//! by default. They reset the tables they touch, so point `DB_URL` at a
//! disposable database and run them serially:
//!
//! ```sh
//! DB_URL=postgres://localhost/rpssl_test cargo test -- --ignored --test-threads=1
//! ```

use rpssl::arcade::Arcade;
use rpssl::game::Choice;
use rpssl::game::Seat;
use rpssl::game::Submission;
use rpssl::game::Token;
use rpssl::game::Verdict;
use rpssl::store;
use rpssl::util::ID;
use rpssl::util::SCOREBOARD_LIMIT;
use rpssl::util::Unique;
use std::sync::Arc;

async fn arcade() -> Arcade {
    let client = store::db().await;
    client
        .batch_execute("DELETE FROM outcomes; DELETE FROM sessions;")
        .await
        .expect("reset tables");
    Arcade::new(client)
}

#[tokio::test]
#[ignore]
async fn pairing_fills_sessions_in_pairs() {
    let arcade = arcade().await;
    let t1 = arcade.pair().await.unwrap();
    let t2 = arcade.pair().await.unwrap();
    let t3 = arcade.pair().await.unwrap();
    let v1 = arcade.session(t1).await.unwrap().unwrap();
    let v2 = arcade.session(t2).await.unwrap().unwrap();
    let v3 = arcade.session(t3).await.unwrap().unwrap();
    // first two callers share a session, in call order
    assert_eq!(v1.session().id(), v2.session().id());
    assert_eq!(v1.session().token(Seat::One), t1);
    assert_eq!(v1.session().token(Seat::Two), t2);
    assert!(!v1.session().is_open());
    // the odd caller out starts a fresh one
    assert_ne!(v1.session().id(), v3.session().id());
    assert!(v3.session().is_open());
}

#[tokio::test]
#[ignore]
async fn concurrent_pairing_never_overfills_a_session() {
    let arcade = Arc::new(arcade().await);
    let mut calls = tokio::task::JoinSet::new();
    for _ in 0..10 {
        let arcade = arcade.clone();
        calls.spawn(async move { arcade.pair().await.unwrap() });
    }
    let tokens: Vec<Token> = calls.join_all().await;
    let distinct = tokens.iter().collect::<std::collections::HashSet<_>>();
    assert_eq!(distinct.len(), 10);
    let mut seats = std::collections::HashMap::new();
    for token in tokens {
        let view = arcade.session(token).await.unwrap().unwrap();
        *seats.entry(view.session().id()).or_insert(0) += 1;
    }
    assert_eq!(seats.len(), 5);
    assert!(seats.values().all(|n| *n == 2));
}

#[tokio::test]
#[ignore]
async fn both_tokens_see_the_same_view() {
    let arcade = arcade().await;
    let t1 = arcade.pair().await.unwrap();
    let t2 = arcade.pair().await.unwrap();
    arcade.submit(t1, Choice::Lizard).await.unwrap();
    arcade.submit(t2, Choice::Spock).await.unwrap();
    let v1 = arcade.session(t1).await.unwrap().unwrap();
    let v2 = arcade.session(t2).await.unwrap().unwrap();
    assert_eq!(v1, v2);
}

#[tokio::test]
#[ignore]
async fn unknown_tokens_are_not_found() {
    let arcade = arcade().await;
    let stranger: Token = ID::default();
    assert_eq!(arcade.session(stranger).await.unwrap(), None);
    assert_eq!(
        arcade.submit(stranger, Choice::Rock).await.unwrap(),
        Submission::NotFound
    );
}

#[tokio::test]
#[ignore]
async fn rounds_resolve_and_reset() {
    let arcade = arcade().await;
    let t1 = arcade.pair().await.unwrap();
    let t2 = arcade.pair().await.unwrap();
    assert_eq!(
        arcade.submit(t1, Choice::Rock).await.unwrap(),
        Submission::Accepted
    );
    assert_eq!(
        arcade.submit(t1, Choice::Paper).await.unwrap(),
        Submission::Rejected
    );
    match arcade.submit(t2, Choice::Scissors).await.unwrap() {
        Submission::Resolved(outcome) => assert_eq!(outcome.verdict(), Verdict::Win),
        other => panic!("expected resolution, got {:?}", other),
    }
    let view = arcade.session(t1).await.unwrap().unwrap();
    assert_eq!(view.outcomes().len(), 1);
    assert_eq!(view.session().choice(Seat::One), None);
    assert_eq!(view.session().choice(Seat::Two), None);
    // slots cleared means the next round opens fresh
    assert_eq!(
        arcade.submit(t2, Choice::Spock).await.unwrap(),
        Submission::Accepted
    );
}

#[tokio::test]
#[ignore]
async fn solo_rounds_land_on_the_scoreboard() {
    let arcade = arcade().await;
    let outcome = arcade.solo(Choice::Paper, Choice::Rock).await.unwrap();
    assert_eq!(outcome.verdict(), Verdict::Win);
    assert_eq!(outcome.session(), None);
    let recent = arcade.recent(SCOREBOARD_LIMIT).await.unwrap();
    assert_eq!(recent, vec![outcome]);
}

#[tokio::test]
#[ignore]
async fn scoreboard_keeps_the_ten_most_recent() {
    let arcade = arcade().await;
    arcade.solo(Choice::Paper, Choice::Rock).await.unwrap();
    for _ in 0..10 {
        arcade.solo(Choice::Rock, Choice::Paper).await.unwrap();
    }
    let recent = arcade.recent(SCOREBOARD_LIMIT).await.unwrap();
    assert_eq!(recent.len(), 10);
    // the eleventh-oldest outcome, the only win, has fallen off
    assert!(recent.iter().all(|o| o.verdict() == Verdict::Lose));
    arcade.clear().await.unwrap();
    assert_eq!(arcade.recent(SCOREBOARD_LIMIT).await.unwrap(), vec![]);
}

// Clearing the scoreboard deletes ALL outcomes, including those owned by
// live sessions, silently truncating their histories.
#[tokio::test]
#[ignore]
async fn clearing_the_scoreboard_truncates_session_history() {
    let arcade = arcade().await;
    let t1 = arcade.pair().await.unwrap();
    let t2 = arcade.pair().await.unwrap();
    arcade.submit(t1, Choice::Rock).await.unwrap();
    arcade.submit(t2, Choice::Scissors).await.unwrap();
    assert_eq!(arcade.session(t1).await.unwrap().unwrap().outcomes().len(), 1);
    arcade.clear().await.unwrap();
    assert_eq!(arcade.session(t1).await.unwrap().unwrap().outcomes().len(), 0);
}
