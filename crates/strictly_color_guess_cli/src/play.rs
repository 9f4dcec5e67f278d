//! Interactive play loop.
//!
//! Generic over the reader and writer so games can be scripted in tests.
//! End of input at any prompt ends the sitting without an error.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_color_guess::{
    parse_guess, score, Code, GameConfig, SecretGenerator, Session, SessionStatus, Tally,
};
use tracing::{debug, info, instrument};

/// Options for an interactive sitting.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    /// Show the secret at the start of every game.
    pub demo: bool,
}

/// Plays games until the player declines a replay or input ends.
#[instrument(skip_all, fields(demo = options.demo))]
pub fn run<R: BufRead, W: Write, G: SecretGenerator>(
    config: &GameConfig,
    generator: &mut G,
    options: PlayOptions,
    input: &mut R,
    output: &mut W,
) -> Result<Tally> {
    let mut tally = Tally::new();

    loop {
        let mut session = Session::new(config.clone(), generator)
            .context("Secret generator produced an invalid code")?;

        let Some(status) = play_game(&mut session, options, input, output)? else {
            info!("Input closed mid-game");
            break;
        };
        tally.record(&status);

        writeln!(output, "Your score is: {}", tally.won())?;
        let Some(answer) = prompt(input, output, "Do you want to play again? (Y/N) ")? else {
            break;
        };
        if !answer.trim().eq_ignore_ascii_case("y") {
            break;
        }
    }

    info!(played = tally.played(), won = tally.won(), "Sitting over");
    Ok(tally)
}

/// Plays one game; `None` means input ended before it finished.
fn play_game<R: BufRead, W: Write>(
    session: &mut Session,
    options: PlayOptions,
    input: &mut R,
    output: &mut W,
) -> Result<Option<SessionStatus>> {
    let config = session.config().clone();
    writeln!(
        output,
        "Welcome to Color Guess! You have {} tries to guess the code.",
        config.max_attempts()
    )?;
    if options.demo {
        writeln!(output, "Demo Mode. Answer Sheet is: {}", session.demo_secret())?;
    }
    writeln!(output, "The valid colors are {}", config.alphabet())?;

    loop {
        let Some(guess) = read_guess(&config, input, output)? else {
            return Ok(None);
        };
        let outcome = session.submit_guess(guess)?;

        match &outcome.status {
            SessionStatus::Won { attempts } => {
                writeln!(output, "You guessed the code in {} tries!", attempts)?;
            }
            SessionStatus::Exhausted { secret } => {
                writeln!(output, "{}", outcome.score)?;
                writeln!(output, "You ran out of tries, the code was: {}", secret)?;
            }
            SessionStatus::InProgress => writeln!(output, "{}", outcome.score)?,
        }

        if outcome.status.is_finished() {
            return Ok(Some(outcome.status));
        }
    }
}

/// Prompts until a valid guess is typed; `None` on end of input.
fn read_guess<R: BufRead, W: Write>(
    config: &GameConfig,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Code>> {
    loop {
        let Some(line) = prompt(input, output, "Guess: ")? else {
            return Ok(None);
        };
        match parse_guess(&line, config) {
            Ok(code) => return Ok(Some(code)),
            Err(err) => {
                debug!(%err, "Rejected guess");
                writeln!(output, "{}", err)?;
            }
        }
    }
}

/// Writes `message` and reads one line; `None` on end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    Ok((read > 0).then_some(line))
}

/// Scores `guess` against `secret`, both typed as color lists.
#[instrument(skip(config, output))]
pub fn score_once<W: Write>(config: &GameConfig, secret: &str, guess: &str, output: &mut W) -> Result<()> {
    let secret = parse_guess(secret, config).context("Invalid secret")?;
    let guess = parse_guess(guess, config).context("Invalid guess")?;
    let result = score(&guess, &secret)?;
    writeln!(output, "{}", result)?;
    Ok(())
}
