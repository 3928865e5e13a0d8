//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    Card, Intent, Response, RoundOutcome, RoundResult, RoundState, Table, TableError,
    TableOptions, TableView, parse_capital,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let name = prompt_raw("Enter player name: ");
    let capital = parse_capital(&prompt_line("Enter capital: "));

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut options = TableOptions::default().with_starting_capital(capital);
    if !name.is_empty() {
        options = options.with_player_name(name);
    }
    let mut table = Table::new(options, seed);

    loop {
        if table.state() == RoundState::AwaitingBet && table.is_broke() {
            println!("You are out of money. Game over.");
            finish(&mut table);
            return;
        }

        let Some(intent) = read_intent(&table) else {
            finish(&mut table);
            return;
        };

        match table.dispatch(intent) {
            Ok(Response::Table(view)) => print_table(&view),
            Ok(Response::Resolved { result, view }) => {
                print_table(&view);
                print_result(&result);
                println!("{}", view.stats);
            }
            Ok(Response::Rules(rules)) => println!("\n{rules}\n"),
            Ok(Response::Quit(summary)) => {
                println!("Goodbye. {summary}");
                return;
            }
            Err(err) if err.is_recoverable() => println!("{}", capitalize(&err)),
            Err(err) => {
                println!(
                    "{}. The round is called off and your bet returned.",
                    capitalize(&err)
                );
                match table.dispatch(Intent::AbandonRound) {
                    Ok(Response::Table(view)) => print_table(&view),
                    Ok(_) => {}
                    Err(err) => {
                        println!("The table cannot continue: {err}");
                        return;
                    }
                }
            }
        }
    }
}

fn finish(table: &mut Table) {
    if let Ok(Response::Quit(summary)) = table.dispatch(Intent::Quit) {
        println!("Final statistics. {summary}");
    }
}

fn read_intent(table: &Table) -> Option<Intent> {
    loop {
        let intent = match table.state() {
            RoundState::AwaitingBet => {
                println!("{}", table.instruction().message());
                let capital = table.player().capital();
                let input = prompt_line(&format!("Bet amount (1-{capital}), [r]ules, [q]uit: "));
                match input.as_str() {
                    "q" | "quit" => return None,
                    "r" | "rules" => Intent::ShowRules,
                    _ => Intent::PlaceBet(input.into()),
                }
            }
            RoundState::PlayerTurn => {
                println!("{}", table.instruction().message());
                match prompt_line("[h]it, [s]tand, [r]ules, [q]uit: ").as_str() {
                    "h" | "hit" => Intent::DrawCard,
                    "s" | "stand" => Intent::Stand,
                    "r" | "rules" => Intent::ShowRules,
                    "q" | "quit" => return None,
                    _ => {
                        println!("Unknown action.");
                        continue;
                    }
                }
            }
            RoundState::HouseTurn | RoundState::Resolved => {
                match prompt_line("[n]ew round, [r]ules, [q]uit: ").as_str() {
                    "" | "n" | "new" => Intent::NewRound,
                    "r" | "rules" => Intent::ShowRules,
                    "q" | "quit" => return None,
                    _ => {
                        println!("Unknown action.");
                        continue;
                    }
                }
            }
        };
        return Some(intent);
    }
}

fn prompt_raw(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_owned()
}

fn prompt_line(prompt: &str) -> String {
    prompt_raw(prompt).to_lowercase()
}

fn print_table(view: &TableView) {
    println!("\nDeck: {} cards remaining", view.cards_remaining);
    println!(
        "House: {} (value {})",
        format_cards(&view.house_cards),
        format_value(view.house_value)
    );
    println!(
        "{}: {} (value {})",
        view.player_name,
        format_cards(&view.player_cards),
        format_value(view.player_value)
    );
    println!("Capital: {} | Bet: {}\n", view.capital, view.bet);
}

fn print_result(result: &RoundResult) {
    let message = match result.outcome {
        RoundOutcome::Win { payout } => format!("You won {payout}!"),
        RoundOutcome::Lose if result.player_bust => String::from("Busted. You lost the round."),
        RoundOutcome::Lose => String::from("You lost the round."),
        RoundOutcome::Draw => String::from("The round is a draw."),
    };
    println!(
        "{message} ({} against {})",
        result.player_value, result.house_value
    );
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return String::from("-");
    }
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_value(value: Option<u8>) -> String {
    value.map_or_else(|| String::from("-"), |value| value.to_string())
}

fn capitalize(err: &TableError) -> String {
    let text = err.to_string();
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
