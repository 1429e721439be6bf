use crate::workflows::visa_quiz::domain::{JobOffer, QuestionKey, Reason};
use crate::workflows::visa_quiz::{QuizError, QuizSession, QuizStep};

fn answer_choices(session: &mut QuizSession) {
    for token in ["remote-work", "6-12-months", "over-2k", "self-employed", "children"] {
        session.select(token).expect("valid choice");
    }
}

#[test]
fn fresh_session_starts_on_first_question() {
    let session = QuizSession::new();
    assert_eq!(session.step(), QuizStep::Question(QuestionKey::Reason));
    assert_eq!(session.progress_percent(), 0);
    assert!(session.draft().is_empty());
    assert!(session.answers().is_none());
    assert_eq!(
        session.current_question().expect("question").key,
        QuestionKey::Reason
    );
}

#[test]
fn choices_advance_automatically() {
    let mut session = QuizSession::new();
    let step = session.select("employment").expect("valid");
    assert_eq!(step, QuizStep::Question(QuestionKey::Duration));
    assert_eq!(session.progress_percent(), 17);

    answer_choices_from_duration(&mut session);
    assert_eq!(session.step(), QuizStep::Question(QuestionKey::Nationality));
    assert_eq!(session.progress_percent(), 83);
}

fn answer_choices_from_duration(session: &mut QuizSession) {
    for token in ["permanently", "local", "yes", "spouse"] {
        session.select(token).expect("valid choice");
    }
}

#[test]
fn invalid_choice_keeps_the_current_question() {
    let mut session = QuizSession::new();
    let err = session.select("sailing").expect_err("unknown token");
    assert!(matches!(err, QuizError::InvalidChoice { question: QuestionKey::Reason, .. }));
    assert_eq!(session.step(), QuizStep::Question(QuestionKey::Reason));
}

#[test]
fn nationality_requires_explicit_continue() {
    let mut session = QuizSession::new();
    answer_choices(&mut session);

    assert!(matches!(
        session.select("Brazil"),
        Err(QuizError::NotAChoiceQuestion(QuestionKey::Nationality))
    ));
    assert!(matches!(
        session.proceed(),
        Err(QuizError::NationalityRequired)
    ));

    session.enter_nationality("Brazil").expect("free text accepted");
    assert_eq!(session.step(), QuizStep::Question(QuestionKey::Nationality));

    assert_eq!(session.proceed().expect("completes"), QuizStep::Complete);
    assert_eq!(session.progress_percent(), 100);

    let answers = session.answers().expect("complete answers");
    assert_eq!(answers.reason, Reason::RemoteWork);
    assert_eq!(answers.job_offer, JobOffer::SelfEmployed);
    assert_eq!(answers.nationality, "Brazil");
    assert!(!session.was_resumed());
}

#[test]
fn clearing_nationality_blocks_completion() {
    let mut session = QuizSession::new();
    answer_choices(&mut session);
    session.enter_nationality("Chile").expect("accepted");
    session.enter_nationality("  ").expect("accepted");
    assert!(matches!(
        session.proceed(),
        Err(QuizError::NationalityRequired)
    ));
}

#[test]
fn free_text_only_on_nationality_question() {
    let mut session = QuizSession::new();
    assert!(matches!(
        session.enter_nationality("Chile"),
        Err(QuizError::NotAFreeTextQuestion(QuestionKey::Reason))
    ));
    assert!(matches!(
        session.proceed(),
        Err(QuizError::NotAFreeTextQuestion(QuestionKey::Reason))
    ));
}

#[test]
fn back_keeps_previous_answers() {
    let mut session = QuizSession::new();
    session.select("study").expect("valid");
    session.select("1-plus-years").expect("valid");

    assert_eq!(
        session.back().expect("can go back"),
        QuizStep::Question(QuestionKey::Duration)
    );
    assert_eq!(session.draft().reason, Some(Reason::Study));
    assert!(session.draft().duration.is_some());

    session.back().expect("can go back");
    assert_eq!(
        session.back().expect("stays on first question"),
        QuizStep::Question(QuestionKey::Reason)
    );
    assert_eq!(session.draft().reason, Some(Reason::Study));
}

#[test]
fn completed_session_rejects_edits_until_retake() {
    let mut session = QuizSession::new();
    answer_choices(&mut session);
    session.enter_nationality("Japan").expect("accepted");
    session.proceed().expect("completes");

    assert!(matches!(session.back(), Err(QuizError::AlreadyComplete)));
    assert!(matches!(
        session.select("study"),
        Err(QuizError::AlreadyComplete)
    ));

    session.retake();
    assert_eq!(session.step(), QuizStep::Question(QuestionKey::Reason));
    assert!(session.draft().is_empty());
}

#[test]
fn share_query_resumes_directly_into_results() {
    let mut session = QuizSession::new();
    answer_choices(&mut session);
    session.enter_nationality("New Zealand").expect("accepted");
    session.proceed().expect("completes");
    let query = session.share_query().expect("complete quiz has a share link");

    let resumed = QuizSession::resume(&format!("?{query}"));
    assert!(resumed.is_complete());
    assert!(resumed.was_resumed());
    assert_eq!(resumed.answers(), session.answers());
}

#[test]
fn partial_share_query_starts_a_fresh_quiz() {
    let resumed = QuizSession::resume("reason=study&duration=permanently&income=none");
    assert_eq!(resumed, QuizSession::new());
    assert!(resumed.share_query().is_none());
}
