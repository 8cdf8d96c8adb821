use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use pinpoint_core as game;
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(version, about = "Single-round photo location guessing game")]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Target latitude in decimal degrees
    #[arg(long, default_value_t = 41.78856635419693, allow_negative_numbers = true)]
    lat: f64,

    /// Target longitude in decimal degrees
    #[arg(long, default_value_t = -87.59945524126239, allow_negative_numbers = true)]
    lng: f64,

    /// Photo of the target location
    #[arg(long)]
    photo_url: Option<String>,

    /// Distance in feet that counts as finding the spot
    #[arg(long, default_value_t = game::DEFAULT_WIN_RADIUS_FEET)]
    win_radius_feet: f64,

    /// Guess budget for the round
    #[arg(long, default_value_t = game::DEFAULT_MAX_GUESSES)]
    max_guesses: game::GuessCount,

    /// Play area south-west corner as "LAT,LNG"
    #[arg(long, default_value = "41.7832,-87.6126", value_parser = parse_latlng)]
    sw: game::LatLng,

    /// Play area north-east corner as "LAT,LNG"
    #[arg(long, default_value = "41.8051,-87.5860", value_parser = parse_latlng)]
    ne: game::LatLng,
}

fn parse_latlng(raw: &str) -> Result<game::LatLng, String> {
    let (lat, lng) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LNG, got {raw:?}"))?;
    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("bad latitude: {err}"))?;
    let lng = lng
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("bad longitude: {err}"))?;
    Ok(game::LatLng::new(lat, lng))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let play_area =
        game::GeoBounds::new(args.sw, args.ne).context("invalid play area corners")?;
    let config = game::RoundConfig::new(
        game::LatLng::new(args.lat, args.lng),
        args.photo_url.unwrap_or_default(),
        args.win_radius_feet,
        args.max_guesses,
    );
    let mut session =
        game::RoundSession::with_play_area(game::GuessEngine::new(config), Some(play_area));
    log::debug!(
        "round configured: win radius {} ft, {} guesses",
        session.engine().config().win_radius_feet,
        session.engine().config().max_guesses
    );

    print_banner(&session);

    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let mut parts = line.trim().splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or_default();
        let rest = parts.next().unwrap_or_default().trim();

        match command {
            "" => {}
            "quit" | "q" | "exit" => break,
            "help" => print_help(),
            "status" => print_status(&session),
            "reset" => {
                session.reset();
                println!("Round reset.");
            }
            "clear" => match session.clear_pin() {
                game::PinOutcome::Cleared => println!("Pin cleared."),
                _ => println!("No pin to clear."),
            },
            "pin" => match parse_latlng(rest) {
                Ok(point) => report_pin(session.place_pin(point), point),
                Err(err) => println!("{err}"),
            },
            "guess" => {
                if !rest.is_empty() {
                    match parse_latlng(rest) {
                        Ok(point) => report_pin(session.place_pin(point), point),
                        Err(err) => {
                            println!("{err}");
                            prompt()?;
                            continue;
                        }
                    }
                }
                let outcome = session.submit(Utc::now());
                report_outcome(&session, outcome);
            }
            other => println!("Unknown command {other:?}; try `help`."),
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

fn print_banner(session: &game::RoundSession) {
    let config = session.engine().config();
    println!("Where was this photo taken?");
    if config.photo_url.is_empty() {
        println!("  (no photo URL configured)");
    } else {
        println!("  {}", config.photo_url);
    }
    println!(
        "Win radius: {} ft, guesses: {}",
        config.win_radius_feet.round() as i64,
        config.max_guesses
    );
    if let Some(area) = session.play_area() {
        println!("Play area: {} to {}", area.sw(), area.ne());
    }
    println!("Type `help` for commands.");
}

fn print_help() {
    println!("Commands:");
    println!("  pin LAT,LNG    drop a candidate pin");
    println!("  guess [LAT,LNG] submit the pending pin (optionally pinning first)");
    println!("  clear          remove the pending pin");
    println!("  status         show the guess ledger and round state");
    println!("  reset          start the round over");
    println!("  quit           leave the game");
}

fn print_status(session: &game::RoundSession) {
    let engine = session.engine();
    println!(
        "Guesses: {} / {}",
        engine.guess_count(),
        engine.config().max_guesses
    );
    for (i, guess) in engine.guesses().iter().enumerate() {
        println!(
            "  #{} {} -> {} {} {}",
            i + 1,
            guess.point,
            game::format_feet(guess.distance_feet),
            guess.compass.arrow(),
            swatch(game::closeness_color(guess.distance_feet)),
        );
    }
    if let Some(pin) = session.pending_pin() {
        println!("Pending pin: {pin}");
    }
    match engine.state() {
        game::RoundState::InProgress => println!("{}.", left_label(engine.remaining())),
        game::RoundState::Solved => println!("Solved!"),
        game::RoundState::Exhausted => println!("Out of guesses."),
    }
    if let Some(target) = engine.target() {
        println!("The spot: {target}");
    }
}

fn report_pin(outcome: game::PinOutcome, point: game::LatLng) {
    match outcome {
        game::PinOutcome::Placed => println!("Pin at {point}."),
        _ => println!("Pin rejected (outside the play area, or the round is over)."),
    }
}

fn report_outcome(session: &game::RoundSession, outcome: game::GuessOutcome) {
    let engine = session.engine();
    match outcome {
        game::GuessOutcome::Ignored => {
            println!("Nothing submitted. Drop a pin first, or `reset` a finished round.");
        }
        game::GuessOutcome::Scored(guess) => {
            print_guess_row(engine.guess_count(), guess);
            println!("{}.", left_label(engine.remaining()));
        }
        game::GuessOutcome::Solved(guess) => {
            print_guess_row(engine.guess_count(), guess);
            println!(
                "Solved! Found it within {} ft.",
                engine.config().win_radius_feet.round() as i64
            );
        }
        game::GuessOutcome::Exhausted(guess) => {
            print_guess_row(engine.guess_count(), guess);
            if let Some(target) = engine.target() {
                println!("Out of guesses. The spot was at {target}.");
            }
        }
    }
}

fn print_guess_row(number: game::GuessCount, guess: game::Guess) {
    let color = game::closeness_color(guess.distance_feet);
    println!(
        "Guess #{number}: {} {} {} {color}",
        game::format_feet(guess.distance_feet),
        guess.compass.arrow(),
        swatch(color),
    );
}

fn left_label(remaining: game::GuessCount) -> String {
    format!(
        "{remaining} guess{} left",
        if remaining == 1 { "" } else { "es" }
    )
}

fn swatch(color: game::Rgb) -> String {
    format!("\x1b[48;2;{};{};{}m  \x1b[0m", color.r, color.g, color.b)
}
