use crate::cli::{AddFanArgs, ParticipantArgs, SubmitSurveyArgs, VoteArgs};
use crate::commands::{self, ReportArgs};
use fan_engagement::config::AppConfig;
use fan_engagement::engagement::EngagementKind;
use fan_engagement::error::AppError;
use std::io::{self, BufRead, Write};

const PLAYERS: [&str; 3] = ["Player A", "Player B", "Player C"];

/// Interactive loop mirroring the subcommands for use at a booth or kiosk.
pub(crate) fn run(config: &AppConfig) -> Result<(), AppError> {
    loop {
        println!();
        println!("Options:");
        println!("1. Add Fan");
        println!("2. Submit Survey");
        println!("3. Participate in Engagement Event");
        println!("4. Generate Report");
        println!("5. Exit");

        let choice = match prompt("Enter your choice: ") {
            Ok(choice) => choice,
            Err(AppError::Io(err)) if err.kind() == io::ErrorKind::UnexpectedEof => {
                println!("Exiting. Goodbye!");
                return Ok(());
            }
            Err(err) => return Err(err),
        };
        match choice.as_str() {
            "1" => add_fan(config)?,
            "2" => submit_survey(config)?,
            "3" => engage(config)?,
            "4" => commands::report(
                config,
                ReportArgs {
                    chart: true,
                    ..ReportArgs::default()
                },
            )?,
            "5" => {
                println!("Exiting. Goodbye!");
                return Ok(());
            }
            _ => println!("Invalid choice. Please enter a valid option."),
        }
    }
}

fn add_fan(config: &AppConfig) -> Result<(), AppError> {
    println!("Welcome to the fan registration!");
    let name = prompt("Enter fan name: ")?;
    let email = prompt("Enter fan email: ")?;
    commands::add_fan(config, AddFanArgs { name, email })
}

fn submit_survey(config: &AppConfig) -> Result<(), AppError> {
    println!("Thank you for sharing your feedback!");
    let name = prompt("Enter your name: ")?;
    let email = prompt("Enter your email: ")?;
    let feedback = prompt("Enter your feedback: ")?;
    commands::submit_survey(
        config,
        SubmitSurveyArgs {
            name,
            email,
            feedback,
        },
    )
}

fn engage(config: &AppConfig) -> Result<(), AppError> {
    for (index, kind) in EngagementKind::ordered().iter().enumerate() {
        println!("{}. {}", index + 1, kind.label());
    }
    let kind = prompt("Select engagement type (1-3): ")?;
    let participant = prompt("Enter your name: ")?;

    match kind.as_str() {
        "1" => {
            println!("Select a player to vote for:");
            for (index, player) in PLAYERS.iter().enumerate() {
                println!("{}. {}", index + 1, player);
            }
            let vote = prompt("Enter your vote (1-3): ")?;
            let player = vote
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|index| PLAYERS.get(index))
                .map_or("Invalid Choice", |player| *player)
                .to_string();
            commands::record_vote(config, VoteArgs { participant, player })
        }
        "2" => commands::run_quiz(config, ParticipantArgs { participant }),
        "3" => commands::record_prize(config, ParticipantArgs { participant }),
        _ => {
            println!("Unknown engagement type.");
            Ok(())
        }
    }
}

pub(crate) fn prompt(label: &str) -> Result<String, AppError> {
    print!("{label}");
    io::stdout().flush()?;
    read_prompt_line(io::stdin().lock())
}

/// Read one trimmed line. A zero-byte read means the input stream is closed;
/// surfacing that as `UnexpectedEof` lets the menu loop exit instead of
/// re-prompting forever.
fn read_prompt_line<R: BufRead>(mut reader: R) -> Result<String, AppError> {
    let mut line = String::new();
    let bytes = reader.read_line(&mut line)?;
    if bytes == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        )));
    }
    Ok(line.trim().to_string())
}
