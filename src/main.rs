use actix_web::{web, App, HttpServer};
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::info;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

mod errors;
mod handlers;
mod models;
mod services;

use models::AppState;
use services::clock::{Clock, SystemClock};
use services::provision::{provision, ProvisionRequest};
use services::word_loader::load_puzzle;

// Function to initialize logging
fn init_logging(log_file: Option<&String>) -> io::Result<()> {
    if let Some(file) = log_file {
        let log_output = OpenOptions::new().create(true).append(true).open(file)?;

        env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(log_output)))
            .init();
    } else {
        env_logger::init();
    }
    Ok(())
}

fn share_dir_arg() -> Arg {
    Arg::new("share-dir")
        .long("share-dir")
        .num_args(1)
        .default_value("./share")
        .help("Directory holding words.txt and game.json")
}

fn log_file_arg() -> Arg {
    Arg::new("log-file")
        .long("log-file")
        .num_args(1)
        .global(true)
        .help("Specify a log file path (if omitted, logs to stderr)")
}

fn cli() -> Command {
    Command::new("dailyd")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Ron Straight <straightre@gmail.com>")
        .about("Daily word puzzle service")
        .subcommand_required(true)
        .arg(log_file_arg())
        .subcommand(
            Command::new("serve")
                .about("Serve today's puzzle over HTTP")
                .arg(
                    Arg::new("listen-host")
                        .long("listen-host")
                        .num_args(1)
                        .default_value("0.0.0.0:8000")
                        .help("Specify the listen address (e.g., 0.0.0.0:8000)"),
                )
                .arg(share_dir_arg()),
        )
        .subcommand(
            Command::new("provision")
                .about("Create a new game from a word source file")
                .arg(
                    Arg::new("source")
                        .long("source")
                        .num_args(1)
                        .required(true)
                        .help("Candidate words, one per line"),
                )
                .arg(
                    Arg::new("topic")
                        .long("topic")
                        .num_args(1)
                        .required(true)
                        .help("Topic shown to players (e.g., 'Space')"),
                )
                .arg(
                    Arg::new("max-length")
                        .long("max-length")
                        .num_args(1)
                        .value_parser(clap::value_parser!(usize))
                        .default_value("8")
                        .help("Longest word to keep (5-10)"),
                )
                .arg(
                    Arg::new("reset")
                        .long("reset")
                        .action(ArgAction::SetTrue)
                        .help("Replace an existing game without asking"),
                )
                .arg(share_dir_arg()),
        )
}

fn share_dir(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<String>("share-dir")
        .map(PathBuf::from)
        .expect("share-dir argument must always have a default value")
}

async fn serve(matches: &ArgMatches) -> io::Result<()> {
    let listen_host = matches
        .get_one::<String>("listen-host")
        .expect("listen-host argument must always have a default value")
        .clone();
    let share_dir = share_dir(matches);

    let puzzle = load_puzzle(&share_dir)?;
    info!(
        "Serving topic '{}' with {} words from {}",
        puzzle.config().topic,
        puzzle.words().len(),
        share_dir.display()
    );
    let state = AppState {
        puzzle,
        clock: Box::new(SystemClock),
    };
    let shared_state = web::Data::new(state);

    info!("Listening on {}", listen_host);
    HttpServer::new(move || {
        App::new()
            .app_data(shared_state.clone())
            .configure(handlers::configure)
    })
    .bind(&listen_host)?
    .run()
    .await
}

fn run_provision(matches: &ArgMatches) -> io::Result<()> {
    let request = ProvisionRequest {
        share_dir: share_dir(matches),
        source: matches
            .get_one::<String>("source")
            .map(PathBuf::from)
            .unwrap_or_default(),
        topic: matches.get_one::<String>("topic").cloned().unwrap_or_default(),
        max_length: *matches
            .get_one::<usize>("max-length")
            .expect("max-length argument must always have a default value"),
        reset: matches.get_flag("reset"),
    };

    let today = SystemClock.today();
    let summary = provision(&request, today, &mut rand::thread_rng())?;

    println!(
        "Provisioned {} words on '{}' in {}; first puzzle on {}.",
        summary.word_count,
        request.topic,
        request.share_dir.display(),
        summary.start_date
    );
    Ok(())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let matches = cli().get_matches();

    init_logging(matches.get_one::<String>("log-file"))?;

    match matches.subcommand() {
        Some(("serve", sub)) => serve(sub).await,
        Some(("provision", sub)) => run_provision(sub),
        _ => unreachable!("subcommand_required is set"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn test_provision_args() {
        let matches = cli()
            .try_get_matches_from([
                "dailyd",
                "provision",
                "--source",
                "words.src",
                "--topic",
                "Fruits",
                "--max-length",
                "6",
                "--reset",
            ])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "provision");
        assert_eq!(sub.get_one::<usize>("max-length"), Some(&6));
        assert!(sub.get_flag("reset"));
        assert_eq!(share_dir(sub), PathBuf::from("./share"));
    }

    #[test]
    fn test_serve_defaults() {
        let matches = cli().try_get_matches_from(["dailyd", "serve"]).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<String>("listen-host").unwrap(), "0.0.0.0:8000");
    }

    #[test]
    fn test_provision_requires_topic() {
        let result = cli().try_get_matches_from(["dailyd", "provision", "--source", "w.txt"]);
        assert!(result.is_err());
    }
}
