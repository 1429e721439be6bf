use url::form_urlencoded;

use super::domain::{AnswerDraft, QuestionKey, QuizAnswers};

/// Encodes a completed answer set as a share-link query string (no leading `?`).
pub fn encode_answers(answers: &QuizAnswers) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for key in QuestionKey::ordered() {
        serializer.append_pair(key.param(), answers.token(key));
    }
    serializer.finish()
}

/// Decodes a share-link query string. Anything short of a full, valid answer set yields `None`.
pub fn decode_answers(query: &str) -> Option<QuizAnswers> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut draft = AnswerDraft::default();

    for key in QuestionKey::ordered() {
        let value = form_urlencoded::parse(query.as_bytes())
            .find(|(name, _)| name == key.param())
            .map(|(_, value)| value.into_owned())?;
        if value.trim().is_empty() {
            return None;
        }

        match key {
            QuestionKey::Nationality => draft.set_nationality(&value),
            choice => draft.set_choice(choice, &value).ok()?,
        }
    }

    draft.complete()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::visa_quiz::domain::{
        FamilyComposition, IncomeSource, JobOffer, Reason, StayDuration,
    };

    fn answers() -> QuizAnswers {
        QuizAnswers {
            reason: Reason::Retirement,
            duration: StayDuration::Permanently,
            income: IncomeSource::Over2k,
            job_offer: JobOffer::No,
            family: FamilyComposition::Spouse,
            nationality: "United Kingdom".to_string(),
        }
    }

    #[test]
    fn encodes_in_question_order() {
        assert_eq!(
            encode_answers(&answers()),
            "reason=retirement&duration=permanently&income=over-2k&jobOffer=no&family=spouse&nationality=United+Kingdom"
        );
    }

    #[test]
    fn decodes_what_it_encodes() {
        let original = answers();
        let decoded = decode_answers(&encode_answers(&original)).expect("round trip");
        assert_eq!(decoded, original);
    }

    #[test]
    fn accepts_leading_question_mark_and_any_order() {
        let decoded = decode_answers(
            "?nationality=C%C3%B4te&family=just-me&jobOffer=yes&income=local&duration=3-6-months&reason=employment&utm_source=x",
        )
        .expect("complete query");
        assert_eq!(decoded.nationality, "C\u{f4}te");
        assert_eq!(decoded.job_offer, JobOffer::Yes);
    }

    #[test]
    fn missing_parameter_means_no_prefill() {
        for key in QuestionKey::ordered() {
            let partial: String = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(
                    QuestionKey::ordered()
                        .into_iter()
                        .filter(|other| *other != key)
                        .map(|other| (other.param(), answers().token(other).to_string())),
                )
                .finish();
            assert!(decode_answers(&partial).is_none(), "missing {key}");
        }
    }

    #[test]
    fn empty_or_unknown_values_mean_no_prefill() {
        assert!(decode_answers(
            "reason=&duration=permanently&income=over-2k&jobOffer=no&family=spouse&nationality=Chile"
        )
        .is_none());
        assert!(decode_answers(
            "reason=sailing&duration=permanently&income=over-2k&jobOffer=no&family=spouse&nationality=Chile"
        )
        .is_none());
        assert!(decode_answers("").is_none());
    }

    #[test]
    fn first_occurrence_wins() {
        let decoded = decode_answers(
            "reason=study&reason=investment&duration=permanently&income=none&jobOffer=no&family=children&nationality=Peru",
        )
        .expect("complete");
        assert_eq!(decoded.reason, Reason::Study);
    }
}
