use crate::commands::{self, ReportArgs};
use crate::menu;
use clap::{Args, Parser, Subcommand};
use fan_engagement::config::AppConfig;
use fan_engagement::error::AppError;
use fan_engagement::{store, telemetry};

#[derive(Parser, Debug)]
#[command(
    name = "Fan Engagement Tracker",
    about = "Record fans, surveys, and event participation, and report on survey sentiment",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a fan
    AddFan(AddFanArgs),
    /// Record survey feedback
    Survey {
        #[command(subcommand)]
        command: SurveyCommand,
    },
    /// Record participation in an engagement event
    Engage {
        #[command(subcommand)]
        command: EngageCommand,
    },
    /// Generate the survey sentiment report
    Report(ReportArgs),
    /// Run the interactive menu (default command)
    Menu,
}

#[derive(Subcommand, Debug)]
enum SurveyCommand {
    /// Store one survey response
    Submit(SubmitSurveyArgs),
}

#[derive(Subcommand, Debug)]
enum EngageCommand {
    /// Vote for a player
    Vote(VoteArgs),
    /// Answer the quiz interactively and store the score
    Quiz(ParticipantArgs),
    /// Record participation in the prize event
    Prize(ParticipantArgs),
}

#[derive(Args, Debug)]
pub(crate) struct AddFanArgs {
    /// Fan name
    #[arg(long)]
    pub(crate) name: String,
    /// Fan email
    #[arg(long)]
    pub(crate) email: String,
}

#[derive(Args, Debug)]
pub(crate) struct SubmitSurveyArgs {
    /// Respondent name
    #[arg(long)]
    pub(crate) name: String,
    /// Respondent email
    #[arg(long)]
    pub(crate) email: String,
    /// Free-text feedback
    #[arg(long)]
    pub(crate) feedback: String,
}

#[derive(Args, Debug)]
pub(crate) struct VoteArgs {
    /// Voter name
    #[arg(long)]
    pub(crate) participant: String,
    /// Player receiving the vote
    #[arg(long)]
    pub(crate) player: String,
}

#[derive(Args, Debug)]
pub(crate) struct ParticipantArgs {
    /// Participant name
    #[arg(long)]
    pub(crate) participant: String,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, config.environment)?;
    store::ensure_data_files(&config.storage)?;

    let command = cli.command.unwrap_or(Command::Menu);
    match command {
        Command::AddFan(args) => commands::add_fan(&config, args),
        Command::Survey {
            command: SurveyCommand::Submit(args),
        } => commands::submit_survey(&config, args),
        Command::Engage { command } => match command {
            EngageCommand::Vote(args) => commands::record_vote(&config, args),
            EngageCommand::Quiz(args) => commands::run_quiz(&config, args),
            EngageCommand::Prize(args) => commands::record_prize(&config, args),
        },
        Command::Report(args) => commands::report(&config, args),
        Command::Menu => menu::run(&config),
    }
}
