use super::super::catalog::{VisaKind, VisaRecommendation};
use super::super::domain::{IncomeSource, JobOffer, QuizAnswers, Reason, StayDuration};

/// Predicate over a completed answer set plus the recommendation it emits.
#[derive(Clone, Copy)]
pub struct VisaRule {
    pub kind: VisaKind,
    pub applies: fn(&QuizAnswers) -> bool,
    pub build: fn(&QuizAnswers) -> VisaRecommendation,
}

impl std::fmt::Debug for VisaRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisaRule").field("kind", &self.kind).finish()
    }
}

/// Candidate rules in evaluation order.
pub(crate) fn standard_rules() -> Vec<VisaRule> {
    vec![
        VisaRule {
            kind: VisaKind::DigitalNomad,
            applies: digital_nomad_applies,
            build: digital_nomad,
        },
        VisaRule {
            kind: VisaKind::Work,
            applies: work_applies,
            build: work,
        },
        VisaRule {
            kind: VisaKind::Retirement,
            applies: retirement_applies,
            build: retirement,
        },
        VisaRule {
            kind: VisaKind::Student,
            applies: student_applies,
            build: student,
        },
        VisaRule {
            kind: VisaKind::Investment,
            applies: investment_applies,
            build: investment,
        },
        VisaRule {
            kind: VisaKind::Tourist,
            applies: tourist_applies,
            build: tourist,
        },
    ]
}

pub(crate) fn digital_nomad_applies(answers: &QuizAnswers) -> bool {
    answers.reason == Reason::RemoteWork
        || (answers.reason == Reason::Visiting
            && answers.duration != StayDuration::UnderThreeMonths
            && answers.job_offer == JobOffer::SelfEmployed)
}

fn digital_nomad(answers: &QuizAnswers) -> VisaRecommendation {
    VisaRecommendation::new(
        VisaKind::DigitalNomad,
        "Work remotely from Argentina for up to 6 months. Designed for location-independent professionals with income from abroad.",
        [
            if answers.reason == Reason::RemoteWork {
                "You indicated remote work as your primary reason"
            } else {
                "Self-employed visitors can qualify for the Digital Nomad Visa"
            },
            "Perfect for freelancers and remote employees",
            "Valid for up to 180 days, extendable",
        ],
    )
}

pub(crate) fn work_applies(answers: &QuizAnswers) -> bool {
    answers.reason == Reason::Employment || answers.job_offer == JobOffer::Yes
}

fn work(answers: &QuizAnswers) -> VisaRecommendation {
    VisaRecommendation::new(
        VisaKind::Work,
        "For those with an employment offer from an Argentine company. Your employer sponsors the visa application.",
        [
            if answers.job_offer == JobOffer::Yes {
                "You have a job offer from an Argentine company"
            } else {
                "Employment in Argentina requires a work visa"
            },
            "Allows legal employment with full benefits",
            "Renewable for 1\u{2013}3 years",
        ],
    )
}

pub(crate) fn retirement_applies(answers: &QuizAnswers) -> bool {
    answers.reason == Reason::Retirement
        || (answers.is_long_term()
            && answers.income == IncomeSource::Over2k
            && answers.reason != Reason::Employment)
}

fn retirement(answers: &QuizAnswers) -> VisaRecommendation {
    VisaRecommendation::new(
        VisaKind::Retirement,
        "For retirees and those with stable passive income. Offers a path to permanent residency in Argentina.",
        [
            if answers.reason == Reason::Retirement {
                "Retirement is your primary reason for moving"
            } else {
                "Your income level qualifies you for a rentista visa"
            },
            if answers.income == IncomeSource::Over2k {
                "Your income exceeds the typical minimum requirement"
            } else {
                "Income documentation will be required"
            },
            "Path to permanent residency",
        ],
    )
}

pub(crate) fn student_applies(answers: &QuizAnswers) -> bool {
    answers.reason == Reason::Study
}

fn student(_answers: &QuizAnswers) -> VisaRecommendation {
    VisaRecommendation::new(
        VisaKind::Student,
        "Study at Argentine universities or language schools. Allows part-time work while enrolled.",
        [
            "You plan to study in Argentina",
            "Part-time work permitted while enrolled",
            "Valid for the duration of your studies",
        ],
    )
}

pub(crate) fn investment_applies(answers: &QuizAnswers) -> bool {
    answers.reason == Reason::Investment
        || (answers.is_long_term()
            && answers.job_offer == JobOffer::SelfEmployed
            && answers.reason != Reason::RemoteWork)
}

fn investment(answers: &QuizAnswers) -> VisaRecommendation {
    VisaRecommendation::new(
        VisaKind::Investment,
        "For entrepreneurs and investors starting or acquiring a business in Argentina.",
        [
            if answers.reason == Reason::Investment {
                "You plan to invest in or start a business in Argentina"
            } else {
                "Self-employed long-term residents may qualify through investment"
            },
            "Allows you to own and operate an Argentine business",
            "Renewable for 1\u{2013}3 years",
        ],
    )
}

pub(crate) fn tourist_applies(answers: &QuizAnswers) -> bool {
    answers.reason == Reason::Visiting && answers.duration == StayDuration::UnderThreeMonths
}

fn tourist(_answers: &QuizAnswers) -> VisaRecommendation {
    VisaRecommendation::new(
        VisaKind::Tourist,
        "Most nationalities can enter Argentina visa-free for up to 90 days. No special visa application needed.",
        [
            "Short visits under 3 months typically don't require a visa",
            "Most nationalities get 90 days on arrival",
            "Extensions available at the immigration office",
        ],
    )
}

/// Emitted when no rule fires.
pub(crate) fn fallback() -> VisaRecommendation {
    VisaRecommendation::new(
        VisaKind::DigitalNomad,
        "A flexible option for those who earn income from abroad. Good starting point while you explore longer-term options.",
        [
            "Based on your answers, this is the most flexible starting visa",
            "Valid for up to 180 days",
            "Can transition to other visa types later",
        ],
    )
}

/// "Consider also" suggestions appended for long-term stays.
pub(crate) fn long_term_supplements(
    answers: &QuizAnswers,
    present: &[VisaKind],
) -> Vec<VisaRecommendation> {
    let mut supplements = Vec::new();
    if !answers.is_long_term() {
        return supplements;
    }

    if !present.contains(&VisaKind::Retirement) && answers.income == IncomeSource::Over2k {
        supplements.push(VisaRecommendation::new(
            VisaKind::Retirement,
            "Your steady income could qualify you for Argentina's rentista visa, offering a path to permanent residency.",
            [
                "Your income qualifies you for a rentista visa",
                "Good option for long-term stays",
                "Path to permanent residency",
            ],
        ));
    }

    if !present.contains(&VisaKind::Investment) {
        supplements.push(VisaRecommendation::new(
            VisaKind::Investment,
            "Consider investing in Argentine business or real estate for a long-term residency path.",
            [
                "Long-term stays benefit from investment-based residency",
                "Opens business opportunities",
                "Renewable for 1\u{2013}3 years",
            ],
        ));
    }

    supplements
}
