use std::sync::Arc;
use twentyq_application::GameUseCase;
use twentyq_core::error::GameError;
use twentyq_core::game::{SubmitOutcome, Submission};
use twentyq_core::session::{MAX_QUESTIONS, SessionRepository, SessionState};
use twentyq_infrastructure::{InMemorySessionRepository, UuidSessionIdGenerator};

fn create_game() -> (GameUseCase, Arc<InMemorySessionRepository>) {
    let repo = Arc::new(InMemorySessionRepository::new());
    let game = GameUseCase::new(repo.clone(), Arc::new(UuidSessionIdGenerator));
    (game, repo)
}

#[tokio::test]
async fn test_correct_guess_closes_session() {
    let (game, _repo) = create_game();
    let id = game.create_session("word").await.unwrap().id;

    let outcome = game.submit_parts(&id, "", "word").await.unwrap();
    assert!(outcome.is_correct());

    let view = game.get_session(&id).await.unwrap();
    assert!(view.answered);
    assert_eq!(view.state, SessionState::Answered);
    assert!(view.questions.is_empty(), "a correct guess records no question");

    // Further questions and guesses are rejected without mutation
    let before = game.get_session(&id).await.unwrap();
    assert_eq!(
        game.submit_parts(&id, "Is it alive?", "").await.unwrap(),
        SubmitOutcome::SessionClosed
    );
    assert_eq!(
        game.submit_parts(&id, "", "word").await.unwrap(),
        SubmitOutcome::SessionClosed
    );
    assert_eq!(game.get_session(&id).await.unwrap(), before);
}

#[tokio::test]
async fn test_incorrect_guess_has_no_side_effect() {
    let (game, _repo) = create_game();
    let id = game.create_session("word").await.unwrap().id;
    let before = game.get_session(&id).await.unwrap();

    let outcome = game.submit_parts(&id, "", "bird").await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Incorrect);

    // Unlike a fallthrough that would also store an empty question, a wrong
    // guess leaves the session exactly as it was.
    let after = game.get_session(&id).await.unwrap();
    assert!(!after.answered);
    assert!(after.questions.is_empty());
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_decoded_empty_submission_is_rejected() {
    let (game, _repo) = create_game();
    let id = game.create_session("word").await.unwrap().id;

    let empty_question: Submission =
        serde_json::from_str(r#"{"kind":"question","text":""}"#).unwrap();
    let err = game.submit(&id, empty_question).await.unwrap_err();
    assert!(err.is_invalid_intent());

    let err = game.submit(&id, Submission::Guess(String::new())).await.unwrap_err();
    assert!(err.is_invalid_intent());

    let view = game.get_session(&id).await.unwrap();
    assert!(view.questions.is_empty(), "no slot is used by an empty submission");
    assert_eq!(view.questions_remaining, MAX_QUESTIONS);
    assert!(!view.answered);
}

#[tokio::test]
async fn test_empty_submission_rejected_before_session_lookup() {
    let (game, _repo) = create_game();

    let err = game
        .submit("missing", Submission::Question(String::new()))
        .await
        .unwrap_err();
    assert!(err.is_invalid_intent());
}

#[tokio::test]
async fn test_question_then_answer() {
    let (game, _repo) = create_game();
    let id = game.create_session("word").await.unwrap().id;

    let outcome = game.submit_parts(&id, "Is it alive?", "").await.unwrap();
    assert_eq!(outcome.question_index(), Some(0));

    game.record_answer(&id, 0, true).await.unwrap();

    let view = game.get_session(&id).await.unwrap();
    assert_eq!(view.questions.len(), 1);
    assert_eq!(view.questions[0].text, "Is it alive?");
    assert_eq!(view.questions[0].answer, Some(true));
    assert_eq!(view.questions_remaining, MAX_QUESTIONS - 1);
}

#[tokio::test]
async fn test_twenty_questions_then_no_more() {
    let (game, _repo) = create_game();
    let id = game.create_session("word").await.unwrap().id;

    for expected in 0..MAX_QUESTIONS {
        let outcome = game
            .submit(&id, Submission::Question(format!("Question {}?", expected)))
            .await
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::QuestionRecorded { index: expected });
    }

    let err = game.submit_parts(&id, "One more?", "").await.unwrap_err();
    assert_eq!(err, GameError::no_more_questions(id.clone()));

    // A full session can still be won by guessing
    assert!(game.submit_parts(&id, "", "word").await.unwrap().is_correct());
}

#[tokio::test]
async fn test_record_answer_errors() {
    let (game, _repo) = create_game();
    let id = game.create_session("word").await.unwrap().id;
    game.submit_parts(&id, "Is it alive?", "").await.unwrap();

    assert_eq!(
        game.record_answer(&id, 1, true).await.unwrap_err(),
        GameError::question_not_found(id.clone(), 1)
    );
    assert_eq!(
        game.record_answer("missing", 0, true).await.unwrap_err(),
        GameError::session_not_found("missing")
    );
}

#[tokio::test]
async fn test_record_answer_ignores_answered_flag_and_overwrites() {
    let (game, _repo) = create_game();
    let id = game.create_session("word").await.unwrap().id;
    game.submit_parts(&id, "Is it alive?", "").await.unwrap();
    game.submit_parts(&id, "", "word").await.unwrap();

    game.record_answer(&id, 0, true).await.unwrap();
    game.record_answer(&id, 0, false).await.unwrap();

    let view = game.get_session(&id).await.unwrap();
    assert_eq!(view.questions[0].answer, Some(false));
}

#[tokio::test]
async fn test_get_unknown_session() {
    let (game, _repo) = create_game();

    assert_eq!(
        game.get_session("missing").await.unwrap_err(),
        GameError::session_not_found("missing")
    );
}

#[tokio::test]
async fn test_created_session_and_view_hide_secret() {
    let (game, repo) = create_game();
    let created = game.create_session("platypus").await.unwrap();

    assert!(!format!("{:?}", created).contains("platypus"));
    assert!(!format!("{:?}", game.get_session(&created.id).await.unwrap()).contains("platypus"));
    // The repository still holds it for the engine
    assert_eq!(repo.get_session(&created.id).await.unwrap().secret_word, "platypus");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_questions_across_sessions() {
    let (game, _repo) = create_game();
    let game = Arc::new(game);
    let first = game.create_session("alpha").await.unwrap().id;
    let second = game.create_session("beta").await.unwrap().id;

    let mut handles = Vec::new();
    for i in 0..30 {
        for id in [first.clone(), second.clone()] {
            let game = Arc::clone(&game);
            handles.push(tokio::spawn(async move {
                game.submit_parts(&id, &format!("q{}", i), "").await
            }));
        }
    }

    let mut recorded = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(SubmitOutcome::QuestionRecorded { .. }) => recorded += 1,
            Err(GameError::NoMoreQuestions { .. }) => rejected += 1,
            other => panic!("unexpected result: {:?}", other),
        }
    }

    assert_eq!(recorded, 2 * MAX_QUESTIONS);
    assert_eq!(rejected, 60 - 2 * MAX_QUESTIONS);
    for id in [&first, &second] {
        let view = game.get_session(id).await.unwrap();
        assert_eq!(view.questions.len(), MAX_QUESTIONS);
        assert_eq!(view.questions_remaining, 0);
    }
}
