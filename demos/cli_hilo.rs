//! CLI Hi-Lo example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use hilors::{BetCategory, CHIP_DENOMINATIONS, Card, Color, GameOptions, GameSession, RoundPhase};

/// How long a losing card stays on the table before the round resets.
const BUST_DISPLAY: Duration = Duration::from_secs(2);

fn main() {
    env_logger::init();

    println!("Hi-Lo CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut session = GameSession::new(GameOptions::default(), seed);

    loop {
        print_table(&session);
        println!("{}", format_commands(&session));

        let input = prompt_line("> ");
        let result = match input.as_str() {
            "q" | "quit" => break,
            "h" | "hi" => bet(&mut session, BetCategory::HiOrSame),
            "l" | "lo" => bet(&mut session, BetCategory::LoOrUnder),
            "r" | "red" => bet(&mut session, BetCategory::Red),
            "b" | "black" => bet(&mut session, BetCategory::Black),
            "c" | "cash" => session
                .cash_out()
                .map(|cash_out| println!("{cash_out}"))
                .map_err(|err| err.to_string()),
            "n" | "new" => {
                session.reset_round();
                println!("New round.");
                Ok(())
            }
            other => match other.strip_prefix('+').map(str::parse::<usize>) {
                Some(Ok(index)) if (1..=CHIP_DENOMINATIONS.len()).contains(&index) => session
                    .add_to_pot(CHIP_DENOMINATIONS[index - 1])
                    .map(|_| ())
                    .map_err(|err| err.to_string()),
                _ => match other.strip_prefix("bank ").map(str::parse::<usize>) {
                    Some(Ok(balance)) => session
                        .configure_bankroll(balance)
                        .map(|()| println!("Bankroll set to {balance}."))
                        .map_err(|err| err.to_string()),
                    _ => Err("unknown command".to_string()),
                },
            },
        };

        if let Err(err) = result {
            println!("{}", colorize(&err, "33"));
        }

        if session.phase() == RoundPhase::Bust {
            print_table(&session);
            thread::sleep(BUST_DISPLAY);
            session.reset_round();
            println!("New round.");
        }

        if session.balance() == 0 && session.pot() == 0 {
            println!("You are out of money. Game over.");
            break;
        }
    }
}

fn bet(session: &mut GameSession, category: BetCategory) -> Result<(), String> {
    let outcome = session.place_bet(category).map_err(|err| err.to_string())?;
    let code = if outcome.is_win() { "32" } else { "31" };
    println!("{}", colorize(&outcome.to_string(), code));
    Ok(())
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(session: &GameSession) {
    let history = session
        .history()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    println!("\nPrevious: {}", if history.is_empty() { "-" } else { &history });
    println!(
        "Current: {}   Shoe: {} left",
        format_card(&session.current_card()),
        session.remaining()
    );
    println!("Pot: {}   Balance: {}", session.pot(), session.balance());
}

fn format_commands(session: &GameSession) -> String {
    let rank = session.current_card().rank;
    let enabled = session.phase() == RoundPhase::Accumulating;

    let mut parts = Vec::new();
    for (key, category) in [
        ("h", BetCategory::HiOrSame),
        ("l", BetCategory::LoOrUnder),
        ("r", BetCategory::Red),
        ("b", BetCategory::Black),
    ] {
        let text = format!(
            "[{key}]{} {} -> {}",
            category.label(rank),
            session.odds_for(category),
            session.potential_payout(category)
        );
        parts.push(format_command(&text, enabled));
    }
    parts.push(format_command("[c]ash out", enabled));

    let chips = CHIP_DENOMINATIONS
        .iter()
        .enumerate()
        .map(|(index, value)| format!("+{}={value}", index + 1))
        .collect::<Vec<_>>()
        .join(" ");

    format!("{}\nChips: {chips}  [n]ew round  bank <amount>", parts.join("  "))
}

fn format_command(text: &str, allowed: bool) -> String {
    if allowed {
        colorize(text, "32")
    } else {
        colorize(text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let code = match card.color() {
        Color::Red => "31",
        Color::Black => "34",
    };
    colorize(&card.to_string(), code)
}
