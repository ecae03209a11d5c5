use std::io;

use clap::{Arg, Command};

use kalah::shell::Shell;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("kalah")
        .about("Play Mancala/Kalah against the computer")
        .arg(
            Arg::new("level")
                .long("level")
                .help("Difficulty of the first game. Higher levels search deeper.")
                .num_args(1)
                .default_value("3")
                .value_parser(clap::value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("logLevel")
                .long("log-level")
                .help("Log messages at or above this level to stderr")
                .num_args(1)
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .default_value("warn"),
        )
        .arg(
            Arg::new("logfile")
                .long("logfile")
                .help("Also write debug logs to this file")
                .num_args(1),
        )
        .get_matches();

    let level = match matches.get_one::<String>("logLevel").map(String::as_str) {
        Some("error") => log::LevelFilter::Error,
        Some("info") => log::LevelFilter::Info,
        Some("debug") => log::LevelFilter::Debug,
        Some("trace") => log::LevelFilter::Trace,
        _ => log::LevelFilter::Warn,
    };

    let log_dispatcher = fern::Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "{}[{}][{}] {}",
            chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
            record.target(),
            record.level(),
            message
        ))
    });

    if let Some(log_file) = matches.get_one::<String>("logfile") {
        log_dispatcher
            .chain(
                fern::Dispatch::new()
                    .level(log::LevelFilter::Debug)
                    .chain(fern::log_file(log_file)?),
            )
            .chain(fern::Dispatch::new().level(level).chain(io::stderr()))
            .apply()?;
    } else {
        log_dispatcher.level(level).chain(io::stderr()).apply()?;
    }

    let first_level = matches.get_one::<u32>("level").copied().unwrap_or(3);
    let mut shell = Shell::new(first_level);
    shell.run(io::stdin().lock(), &mut io::stdout())?;
    Ok(())
}
