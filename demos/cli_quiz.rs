//! CLI quiz betting example.
//!
//! Run with `RUST_LOG=debug` to see every accepted and rejected intent.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use hintbet::{Game, GameOptions, Phase, Question, QuestionDeck};

const STARTING_BALANCE: f64 = 100.0;

fn main() {
    env_logger::init();
    println!("Quiz betting CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = sample_deck();
    deck.shuffle(seed);

    let game = Game::new(GameOptions::default());
    loop {
        let name = prompt_line("Player name (empty to start): ");
        if name.is_empty() {
            break;
        }
        if name == "q" {
            return;
        }
        let id = game.add_player(name, STARTING_BALANCE);
        println!("Seated player {id}.");
    }

    if game.player_count() == 0 {
        println!("Nobody joined. Goodbye.");
        return;
    }

    loop {
        let Some(question) = game.current_question(&deck) else {
            println!("No more questions.");
            break;
        };

        while game.phase() != Phase::Answer {
            print_table(&game, question);
            let keep_going = match game.phase() {
                Phase::Guessing => guessing_turn(&game),
                Phase::Bet1 | Phase::Bet2 | Phase::Bet3 => betting_turn(&game),
                Phase::Hint1 | Phase::Hint2 => hint_turn(&game),
                Phase::Answer => true,
            };
            if !keep_going {
                return;
            }
        }

        print_table(&game, question);
        match game.award_from(&deck) {
            Ok(settlement) => {
                for payout in &settlement.payouts {
                    let name = game
                        .get_player(payout.player_id)
                        .map(|p| p.name().to_owned())
                        .unwrap_or_default();
                    println!("{name} wins {:.2}", payout.amount);
                }
            }
            Err(err) => println!("Settlement error: {err}"),
        }

        if !game.has_next_question(&deck) {
            println!("That was the last question.");
            print_balances(&game);
            break;
        }
        if let Err(err) = game.start_new_question() {
            println!("Cannot start next question: {err}");
            break;
        }
    }
}

fn guessing_turn(game: &Game) -> bool {
    let name = acting_name(game);
    let input = prompt_line(&format!("{name}, your guess (or 'f' to fold): "));
    match input.as_str() {
        "q" | "quit" => return false,
        "f" | "fold" => report(game.fold().map(|_| ())),
        other => match other.parse::<f64>() {
            Ok(value) => report(game.submit_guess(value).map(|_| ())),
            Err(_) => println!("Please enter a number."),
        },
    }
    true
}

fn betting_turn(game: &Game) -> bool {
    let name = acting_name(game);
    let input = prompt_line(&format!(
        "{name}: [c]heck, [b]et <amount>, [f]old, [n]ext phase: "
    ));
    let mut parts = input.split_whitespace();
    match parts.next().unwrap_or_default() {
        "q" | "quit" => return false,
        "c" | "check" => report(game.check().map(|_| ())),
        "f" | "fold" => report(game.fold().map(|_| ())),
        "n" | "next" => report(game.advance_phase().map(|_| ())),
        "b" | "bet" => match parts.next().map(str::parse::<f64>) {
            Some(Ok(amount)) => report(game.bet(amount).map(|_| ())),
            _ => println!("Usage: b <amount>"),
        },
        _ => println!("Unknown action."),
    }
    true
}

fn hint_turn(game: &Game) -> bool {
    let input = prompt_line("Press enter to continue, 'f' to fold: ");
    match input.as_str() {
        "q" | "quit" => return false,
        "f" | "fold" => report(game.fold().map(|_| ())),
        _ => report(game.advance_phase().map(|_| ())),
    }
    true
}

fn report<E: core::fmt::Display>(result: Result<(), E>) {
    if let Err(err) = result {
        println!("Not allowed: {err}");
    }
}

fn acting_name(game: &Game) -> String {
    game.current_player()
        .map(|p| p.name().to_owned())
        .unwrap_or_default()
}

fn print_table(game: &Game, question: &Question) {
    let state = game.snapshot();
    println!(
        "\nQuestion {}: {}",
        question.ordinal + 1,
        question.text
    );
    for (index, hint) in question.revealed_hints(state.phase).iter().enumerate() {
        println!("  Hint {}: {hint}", index + 1);
    }
    if let Some(answer) = question.revealed_answer(state.phase) {
        println!("  Answer: {answer}");
    }
    println!(
        "Phase {:?} | pot {:.2} | live bet {:.2}",
        state.phase, state.pot, state.current_bet
    );
    for (seat, player) in state.players.iter().enumerate() {
        let marker = if seat == state.action_index { "*" } else { " " };
        let dealer = if seat == state.dealer_index { "D" } else { " " };
        let status = if player.is_folded() {
            "folded"
        } else if player.has_guessed() {
            "guessed"
        } else {
            ""
        };
        println!(
            "{marker}{dealer} {:<12} {:>8.2} {status}",
            player.name(),
            player.balance()
        );
    }
    println!();
}

fn print_balances(game: &Game) {
    for player in game.players() {
        println!("{:<12} {:>8.2}", player.name(), player.balance());
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_owned()
}

fn sample_deck() -> QuestionDeck {
    [
        Question::new(
            "How many bones are in the adult human body?",
            "More than 200",
            "Fewer than 210",
            206.0,
        ),
        Question::new(
            "In what year did the first person walk on the Moon?",
            "It was in the 1960s",
            "Late in the decade",
            1969.0,
        ),
        Question::new(
            "How many kilometres long is the Great Wall of China, in thousands?",
            "More than 15",
            "Fewer than 25",
            21.2,
        ),
        Question::new(
            "How many keys does a standard piano have?",
            "More than 80",
            "An even number",
            88.0,
        ),
    ]
    .into_iter()
    .collect()
}
