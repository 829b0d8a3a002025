//! CLI higher-or-lower example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use futures::executor::block_on;
use hilo::view::{CardFace, TITLE};
use hilo::{
    ActivityHost, Game, GameOptions, Guess, Profile, Session, SessionConfig, SessionError, View,
};

/// A terminal is never embedded in a host, so the session goes standalone.
struct TerminalHost;

impl ActivityHost for TerminalHost {
    fn is_embedded(&self) -> bool {
        false
    }

    async fn ready(&self) -> Result<(), SessionError> {
        Err(SessionError::NotReady("no host in a terminal".to_owned()))
    }

    async fn authorize(
        &self,
        _client_id: &str,
        _scopes: &[String],
    ) -> Result<String, SessionError> {
        Err(SessionError::Authorize("no host in a terminal".to_owned()))
    }

    async fn post_json(&self, _url: &str, _body: &str) -> Result<String, SessionError> {
        Err(SessionError::Exchange("no host in a terminal".to_owned()))
    }

    async fn authenticate(&self, _access_token: &str) -> Result<Profile, SessionError> {
        Err(SessionError::Authenticate("no host in a terminal".to_owned()))
    }
}

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    println!("Higher or Lower CLI example (type 'q' to quit)");

    let session = Session::new();
    let config = SessionConfig::default().with_client_id("cli");
    block_on(session.connect(&TerminalHost, &config));

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    print_view(&View::render(&game.state(), &session.connection(), TITLE));
    if !matches!(prompt_line("Start? (y/n): ").as_str(), "y" | "yes" | "") {
        return;
    }

    loop {
        game.start();

        loop {
            print_view(&View::render(&game.state(), &session.connection(), TITLE));
            if !game.state().accepts_guess() {
                break;
            }

            let guess = match prompt_line("[h]igher or [l]ower: ").as_str() {
                "h" | "higher" => Guess::Higher,
                "l" | "lower" => Guess::Lower,
                "q" | "quit" => return,
                _ => {
                    println!("Unknown guess.");
                    continue;
                }
            };
            game.guess(guess);
        }

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" | "" => {}
            _ => {
                println!("Goodbye.");
                break;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_view(view: &View) {
    println!(
        "\n== {} == [{}] {}",
        view.header.title, view.header.badge.status, view.header.badge.text
    );

    if let Some(prompt) = view.prompt {
        println!("{prompt}");
        return;
    }

    if let Some(card) = &view.card {
        println!("\n   {}   (score {})\n", format_card(card), view.score);
    }
    if let Some(message) = &view.message {
        println!("{message}");
    }

    for row in &view.scoreboard {
        let result = if row.correct {
            colorize("correct", "32")
        } else {
            colorize("incorrect", "31")
        };
        println!(
            "  #{:<3} {} {} {}  ({}) {}",
            row.round,
            format_card(&row.from),
            row.arrow,
            format_card(&row.to),
            row.guess,
            result
        );
    }
}

fn format_card(card: &CardFace) -> String {
    let code = if card.color == "red" { "31" } else { "34" };
    colorize(&format!("{}{}", card.rank, card.symbol), code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
