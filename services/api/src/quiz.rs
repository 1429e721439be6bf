use crate::infra::{load_country_table, parse_region, parse_status};
use clap::Args;
use std::io::{self, BufRead, Write};
use visa_finder::config::AppConfig;
use visa_finder::error::AppError;
use visa_finder::telemetry::{self, LogSink};
use visa_finder::workflows::visa_quiz::{
    AnswerDraft, CountryRecord, CountryTable, FamilyComposition, IncomeSource, JobOffer,
    QuestionKind, QuizError, QuizReport, QuizSession, Reason, Region, StayDuration,
    VisaQuizService, VisaRecommendation, VisaStatus, SUGGESTION_LIMIT,
};

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    /// Primary reason for the move (remote-work, employment, retirement, study, investment, visiting)
    #[arg(long, required_unless_present = "query")]
    pub(crate) reason: Option<Reason>,
    /// Intended stay (under-3-months, 3-6-months, 6-12-months, 1-plus-years, permanently)
    #[arg(long, required_unless_present = "query")]
    pub(crate) duration: Option<StayDuration>,
    /// Monthly income source (over-2k, under-2k, local, none)
    #[arg(long, required_unless_present = "query")]
    pub(crate) income: Option<IncomeSource>,
    /// Argentine job offer (yes, no, self-employed)
    #[arg(long, required_unless_present = "query")]
    pub(crate) job_offer: Option<JobOffer>,
    /// Family coming along (just-me, spouse, children, extended)
    #[arg(long, required_unless_present = "query")]
    pub(crate) family: Option<FamilyComposition>,
    /// Nationality as a country name
    #[arg(long, required_unless_present = "query")]
    pub(crate) nationality: Option<String>,
    /// Share-link query string carrying every answer
    #[arg(long, conflicts_with_all = ["reason", "duration", "income", "job_offer", "family", "nationality"])]
    pub(crate) query: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CountriesArgs {
    /// Only list one region (americas, europe, asia-pacific, africa-middle-east)
    #[arg(long, value_parser = parse_region)]
    pub(crate) region: Option<Region>,
    /// Only list one entry status (exempt, required)
    #[arg(long, value_parser = parse_status)]
    pub(crate) status: Option<VisaStatus>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let service = cli_service()?;
    let report = recommend_report(&service, args)?;

    let mut stdout = io::stdout().lock();
    render_report(&mut stdout, &report)?;
    Ok(())
}

pub(crate) fn run_interactive() -> Result<(), AppError> {
    let service = cli_service()?;
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match run_session(stdin, &mut stdout, &service)? {
        Some(report) => render_report(&mut stdout, &report)?,
        None => writeln!(stdout, "\nQuiz abandoned before completion.")?,
    }
    Ok(())
}

pub(crate) fn run_countries(args: CountriesArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init_with_sink(&config.telemetry, LogSink::Stderr)?;
    let table = load_country_table(&config.quiz)?;

    let mut stdout = io::stdout().lock();
    render_countries(&mut stdout, &table, &args)?;
    Ok(())
}

fn cli_service() -> Result<VisaQuizService, AppError> {
    let config = AppConfig::load()?;
    telemetry::init_with_sink(&config.telemetry, LogSink::Stderr)?;
    let countries = load_country_table(&config.quiz)?;
    Ok(VisaQuizService::new(countries))
}

pub(crate) fn recommend_report(
    service: &VisaQuizService,
    args: RecommendArgs,
) -> Result<QuizReport, AppError> {
    if let Some(query) = args.query {
        return Ok(service.advise_shared(&query)?);
    }

    let mut draft = AnswerDraft {
        reason: args.reason,
        duration: args.duration,
        income: args.income,
        job_offer: args.job_offer,
        family: args.family,
        nationality: None,
    };
    draft.set_nationality(args.nationality.as_deref().unwrap_or_default());

    match draft.complete() {
        Some(answers) => Ok(service.advise(&answers)),
        None if draft.nationality.is_none() => Err(QuizError::NationalityRequired.into()),
        None => Err(QuizError::IncompleteAnswers.into()),
    }
}

/// Drives a quiz session over line-oriented input. Returns `None` when input ends early.
pub(crate) fn run_session<R, W>(
    input: R,
    output: &mut W,
    service: &VisaQuizService,
) -> Result<Option<QuizReport>, AppError>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    let mut session = QuizSession::new();
    let mut offered: Vec<String> = Vec::new();

    while let Some(question) = session.current_question() {
        writeln!(
            output,
            "\n[{:>3}%] {}\n       {}",
            session.progress_percent(),
            question.title,
            question.subtitle
        )?;

        match question.kind {
            QuestionKind::Choice => {
                for (index, option) in question.options.iter().enumerate() {
                    writeln!(output, "  {}. {}", index + 1, option.label)?;
                }
                write!(output, "Choose 1-{} (b = back): ", question.options.len())?;
            }
            QuestionKind::Nationality => {
                for (index, name) in offered.iter().enumerate() {
                    writeln!(output, "  {}. {}", index + 1, name)?;
                }
                write!(output, "Nationality (b = back): ")?;
            }
        }
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(None);
        };
        let line = line.trim();

        if line.eq_ignore_ascii_case("b") {
            offered.clear();
            session.back()?;
            continue;
        }

        let outcome = match question.kind {
            QuestionKind::Choice => {
                let picked = line
                    .parse::<usize>()
                    .ok()
                    .and_then(|number| number.checked_sub(1))
                    .and_then(|index| question.options.get(index));
                session
                    .select(picked.map_or(line, |option| option.value))
                    .map(|_| ())
            }
            QuestionKind::Nationality => {
                let chosen = line
                    .parse::<usize>()
                    .ok()
                    .and_then(|number| number.checked_sub(1))
                    .and_then(|index| offered.get(index))
                    .cloned()
                    .unwrap_or_else(|| line.to_string());
                confirm_nationality(&mut session, service.countries(), &chosen, &mut offered)
            }
        };

        if let Err(error) = outcome {
            writeln!(output, "  {error}")?;
        }
    }

    Ok(session.answers().map(|answers| service.advise(&answers)))
}

/// Accepts a listed country, or free text the user repeats after seeing suggestions.
fn confirm_nationality(
    session: &mut QuizSession,
    countries: &CountryTable,
    value: &str,
    offered: &mut Vec<String>,
) -> Result<(), QuizError> {
    session.enter_nationality(value)?;

    let listed = countries.find_by_name(value).is_some();
    let repeated = offered.iter().any(|name| name == value);
    if !listed && !repeated && !value.is_empty() {
        let suggestions = countries.suggest(value, SUGGESTION_LIMIT);
        if !suggestions.is_empty() {
            *offered = suggestions
                .into_iter()
                .map(|country| country.name.clone())
                .collect();
            offered.push(value.to_string());
            return Ok(());
        }
    }

    offered.clear();
    session.proceed().map(|_| ())
}

pub(crate) fn render_report<W: Write>(output: &mut W, report: &QuizReport) -> io::Result<()> {
    writeln!(output, "\nYour visa match")?;
    render_recommendation(output, "Best match", &report.recommendations.primary, usize::MAX)?;

    if report.recommendations.alternatives.is_empty() {
        writeln!(output, "\nNo alternative visas apply.")?;
    } else {
        writeln!(output, "\nAlso consider")?;
        for alternative in &report.recommendations.alternatives {
            render_recommendation(output, "Alternative", alternative, 2)?;
        }
    }

    let nationality = &report.nationality;
    match &nationality.country {
        Some(country) => writeln!(
            output,
            "\nNationality: {} {} ({})",
            country.flag,
            country.name,
            country.visa_status.label()
        )?,
        None => writeln!(output, "\nNationality: {}", nationality.nationality)?,
    }
    writeln!(output, "  {}", nationality.note)?;
    writeln!(output, "\nShare link: /visas/quiz?{}", report.share_query)?;
    Ok(())
}

fn render_recommendation<W: Write>(
    output: &mut W,
    heading: &str,
    recommendation: &VisaRecommendation,
    reasons: usize,
) -> io::Result<()> {
    writeln!(
        output,
        "\n{heading}: {} ({})",
        recommendation.name, recommendation.href
    )?;
    writeln!(output, "  {}", recommendation.description)?;
    for reason in recommendation.match_reasons.iter().take(reasons) {
        writeln!(output, "  - {reason}")?;
    }
    Ok(())
}

pub(crate) fn render_countries<W: Write>(
    output: &mut W,
    table: &CountryTable,
    args: &CountriesArgs,
) -> io::Result<()> {
    let mut listed: Vec<&CountryRecord> = match args.region {
        Some(region) => table.in_region(region),
        None => table.countries().iter().collect(),
    };
    if let Some(status) = args.status {
        let matching = table.with_status(status);
        listed.retain(|country| matching.contains(country));
    }

    for country in &listed {
        let stay = if country.is_exempt() {
            format!("{} days", country.stay_days)
        } else {
            "-".to_string()
        };
        writeln!(
            output,
            "{} {:<28} {:<22} {:<14} {}",
            country.flag,
            country.name,
            country.region.label(),
            country.visa_status.label(),
            stay
        )?;
    }
    writeln!(output, "{} countries", listed.len())?;
    Ok(())
}
