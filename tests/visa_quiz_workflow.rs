use std::sync::Arc;

use visa_finder::workflows::visa_quiz::{
    decode_answers, encode_answers, recommend, CountryTable, CountryTableError, FamilyComposition,
    IncomeSource, JobOffer, QuizAnswers, QuizError, QuizSession, QuizStep, Reason,
    RecommendationEngine, StayDuration, VisaKind, VisaQuizService, VisaStatus,
};

fn service() -> VisaQuizService {
    let countries = CountryTable::embedded().expect("embedded country table parses");
    VisaQuizService::new(Arc::new(countries))
}

fn retiree(nationality: &str) -> QuizAnswers {
    QuizAnswers {
        reason: Reason::Retirement,
        duration: StayDuration::Permanently,
        income: IncomeSource::Over2k,
        job_offer: JobOffer::No,
        family: FamilyComposition::Spouse,
        nationality: nationality.to_string(),
    }
}

#[test]
fn quiz_session_feeds_the_service_end_to_end() {
    let mut session = QuizSession::new();
    for token in ["study", "permanently", "over-2k", "no", "just-me"] {
        session.select(token).expect("valid choice");
    }
    session.enter_nationality("germany").expect("free text accepted");
    assert_eq!(session.proceed().expect("quiz completes"), QuizStep::Complete);

    let answers = session.answers().expect("complete answers");
    let report = service().advise(&answers);

    assert_eq!(report.recommendations.primary.kind, VisaKind::Retirement);
    assert!(report.recommendations.contains(VisaKind::Student));
    assert_eq!(
        report.recommendations.primary.match_reasons[0],
        "Your income level qualifies you for a rentista visa"
    );

    let country = report.nationality.country.as_ref().expect("germany is listed");
    assert_eq!(country.name, "Germany");
    assert_eq!(country.visa_status, VisaStatus::Exempt);
    assert_eq!(report.share_query, session.share_query().expect("share link"));
}

#[test]
fn shared_links_reproduce_the_same_report() {
    let service = service();
    let original = service.advise(&retiree("United Kingdom"));

    let query = encode_answers(&original.answers);
    assert_eq!(
        query,
        "reason=retirement&duration=permanently&income=over-2k&jobOffer=no&family=spouse&nationality=United+Kingdom"
    );

    let shared = service.advise_shared(&query).expect("complete share link");
    assert_eq!(shared, original);
    assert_eq!(decode_answers(&format!("?{query}")), Some(original.answers));
}

#[test]
fn padded_nationality_survives_the_share_round_trip() {
    let service = service();
    let report = service.advise(&retiree(" Chile "));

    assert_eq!(report.answers.nationality, "Chile");
    assert!(report.nationality.country.is_some());
    assert_eq!(decode_answers(&report.share_query), Some(report.answers.clone()));

    let shared = service.advise_shared(&report.share_query).expect("complete share link");
    assert_eq!(shared, report);
}

#[test]
fn incomplete_share_links_are_rejected() {
    let err = service()
        .advise_shared("reason=retirement&duration=permanently&income=over-2k&jobOffer=no&family=spouse&nationality=")
        .expect_err("empty nationality");
    assert_eq!(err, QuizError::IncompleteAnswers);

    assert!(decode_answers("reason=sailing&duration=permanently&income=over-2k&jobOffer=no&family=spouse&nationality=Chile").is_none());
}

#[test]
fn nationality_notes_cover_exempt_required_and_unknown() {
    let service = service();

    let exempt = service.advise(&retiree("United States")).nationality;
    assert_eq!(
        exempt.note,
        "United States citizens can enter Argentina visa-free for up to 90 days. For longer stays, you'll need one of the visa types recommended above."
    );

    let short_stay = service.advise(&retiree("Venezuela")).nationality;
    assert!(short_stay.note.contains("up to 60 days"));

    let required = service.advise(&retiree("china")).nationality;
    assert_eq!(
        required.note,
        "China citizens require a visa to enter Argentina. Contact the nearest Argentine consulate to begin your application."
    );

    let unknown = service.advise(&retiree("Atlantis")).nationality;
    assert!(unknown.country.is_none());
    assert_eq!(
        unknown.note,
        "Check with the Argentine consulate in your country for specific visa requirements."
    );
}

#[test]
fn recommendations_ignore_the_country_table() {
    let empty = VisaQuizService::with_engine(
        RecommendationEngine::standard(),
        Arc::new(CountryTable::from_records(Vec::new())),
    );
    let answers = retiree("United States");

    let report = empty.advise(&answers);
    assert_eq!(report.recommendations, recommend(&answers));
    assert!(report.nationality.country.is_none());
}

#[test]
fn custom_country_tables_are_validated() {
    let csv = "slug,name,flag,region,visa_status,stay_days\nchile,Chile,🇨🇱,americas,exempt,45\n";
    let err = CountryTable::from_reader(csv.as_bytes()).expect_err("45-day stay rejected");
    assert!(matches!(err, CountryTableError::UnsupportedStay { days: 45, .. }));

    let csv = "slug,name,flag,region,visa_status,stay_days\nchile,Chile,🇨🇱,americas,exempt,90\n";
    let table = CountryTable::from_reader(csv.as_bytes()).expect("valid table");
    let service = VisaQuizService::new(Arc::new(table));
    assert_eq!(service.suggest("chi").len(), 1);
    assert!(service.country("brazil").is_err());
}
