use crate::chart;
use crate::cli::{AddFanArgs, ParticipantArgs, SubmitSurveyArgs, VoteArgs};
use chrono::Local;
use clap::Args;
use fan_engagement::config::AppConfig;
use fan_engagement::engagement::quiz::QuizBank;
use fan_engagement::engagement::{EngagementKind, EngagementRecord, FanRecord};
use fan_engagement::error::AppError;
use fan_engagement::store::{EngagementStore, FanStore, SurveyStore};
use fan_engagement::surveys::report::{
    aggregate, render_text, BarChartSpec, SentimentTally, SurveyReportView,
};
use fan_engagement::surveys::sentiment::SentimentLexicon;
use fan_engagement::surveys::SurveyResponse;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Also print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Also draw the survey bar chart
    #[arg(long)]
    pub(crate) chart: bool,
    /// Where to write the chart image (implies --chart)
    #[arg(long)]
    pub(crate) chart_path: Option<PathBuf>,
}

pub(crate) fn add_fan(config: &AppConfig, args: AddFanArgs) -> Result<(), AppError> {
    let record = FanRecord {
        name: args.name,
        email: args.email,
    };
    FanStore::new(config.storage.fan_data_path()).append(&record)?;
    println!("Fan added: {} ({})", record.name, record.email);
    Ok(())
}

pub(crate) fn submit_survey(config: &AppConfig, args: SubmitSurveyArgs) -> Result<(), AppError> {
    let response = SurveyResponse {
        name: args.name,
        email: args.email,
        feedback: args.feedback,
    };
    SurveyStore::new(config.storage.survey_responses_path()).append(&response)?;
    println!("Thank you for sharing your feedback, {}.", response.name);
    Ok(())
}

pub(crate) fn record_vote(config: &AppConfig, args: VoteArgs) -> Result<(), AppError> {
    record_engagement(
        config,
        EngagementRecord {
            kind: EngagementKind::Voting,
            participant: args.participant,
            details: args.player,
        },
    )
}

/// Run the quiz over stdin and store the resulting score.
pub(crate) fn run_quiz(config: &AppConfig, args: ParticipantArgs) -> Result<(), AppError> {
    let bank = QuizBank::standard();
    let mut score = 0;

    println!("Answer the quiz questions!");
    for question in bank.questions() {
        println!("{}", question.prompt);
        for (index, option) in question.options.iter().enumerate() {
            println!("{}. {}", index + 1, option);
        }
        let answer = crate::menu::prompt("Enter your choice (1-4): ")?;
        let choice = answer.parse::<usize>().ok().and_then(|n| n.checked_sub(1));
        if choice.is_some_and(|index| question.is_correct(index)) {
            score += 1;
        }
    }

    let details = bank.score_summary(score);
    println!("{details}");
    record_engagement(
        config,
        EngagementRecord {
            kind: EngagementKind::Quiz,
            participant: args.participant,
            details,
        },
    )
}

pub(crate) fn record_prize(config: &AppConfig, args: ParticipantArgs) -> Result<(), AppError> {
    record_engagement(
        config,
        EngagementRecord {
            kind: EngagementKind::Prize,
            participant: args.participant,
            details: "Participated in prize event".to_string(),
        },
    )
}

pub(crate) fn record_engagement(
    config: &AppConfig,
    record: EngagementRecord,
) -> Result<(), AppError> {
    EngagementStore::new(config.storage.engagement_data_path()).append(&record)?;
    println!(
        "Participation recorded: {} - {}",
        record.kind.label(),
        record.participant
    );
    Ok(())
}

pub(crate) fn report(config: &AppConfig, args: ReportArgs) -> Result<(), AppError> {
    let store = SurveyStore::new(config.storage.survey_responses_path());
    let rows = store.load_rows()?;

    let lexicon = SentimentLexicon::standard();
    let tally = aggregate(&lexicon, &rows);
    if tally.is_empty() {
        println!("No survey responses available for reporting.");
        return Ok(());
    }

    let text = render_text(&tally);
    let report_path = config.storage.report_path();
    fs::write(&report_path, &text)?;
    info!(path = %report_path.display(), "report written");

    println!("Report generated {}", Local::now().date_naive());
    println!("{text}");

    if args.json {
        print_json_view(&tally);
    }

    if args.chart || args.chart_path.is_some() {
        let spec = BarChartSpec::from_tally(&tally);
        let chart_path = args
            .chart_path
            .unwrap_or_else(|| config.storage.chart_path());
        chart::draw(&spec, &chart_path)?;
        println!("Chart written to {}", chart_path.display());
    }

    Ok(())
}

fn print_json_view(tally: &SentimentTally) {
    let view = SurveyReportView::from_tally(tally);
    match serde_json::to_string_pretty(&view) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("Report view unavailable: {err}"),
    }
}
