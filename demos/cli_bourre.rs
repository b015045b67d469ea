//! CLI Bourré example: one human against computer players.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bourre::{
    Card, DecisionProvider, Game, GameOptions, HeuristicOptions, HeuristicProvider, Player,
    Recovery, SelectionError, Suit, Trick,
};
use tracing_subscriber::EnvFilter;

const OPPONENTS: u64 = 4;
const STARTING_CHIPS: usize = 10;

/// Asks the person at the keyboard for every decision.
struct ConsoleProvider;

impl DecisionProvider for ConsoleProvider {
    fn choose_pass_or_play(&self, player: &Player, trump_card: Card) -> bool {
        println!("\nTrump card: {}", format_card(trump_card));
        println!("Your hand: {}", format_hand(player.hand()));
        matches!(
            prompt_line("Would you like to play this hand? (y/n): ").as_str(),
            "y" | "yes"
        )
    }

    fn choose_discards(&self, player: &Player, _trump_card: Card) -> Vec<Card> {
        println!("Your hand: {}", format_hand(player.hand()));
        let input = prompt_line("Cards to exchange (numbers separated by commas, blank for none): ");
        input
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .filter_map(|part| part.parse::<usize>().ok())
            .filter_map(|index| index.checked_sub(1))
            // Out-of-range numbers become a card the player doesn't hold.
            .map(|index| player.hand().get(index).copied().unwrap_or(Card::new(Suit::Clubs, 0)))
            .collect()
    }

    fn choose_card(&self, player: &Player, trick: &Trick, trump: Suit) -> Card {
        println!("\nTrick {} (trump {trump})", trick.number());
        for play in trick.plays() {
            println!("  player {} played {}", play.player, format_card(play.card));
        }
        println!("Your hand: {}", format_hand(player.hand()));

        let input = prompt_line("Card to play (number): ");
        input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| player.hand().get(index).copied())
            // The engine rejects this and asks again.
            .unwrap_or(Card::new(trump, 0))
    }

    fn on_illegal_selection(&self, _player: &Player, error: SelectionError) -> Recovery {
        println!("Not allowed: {error}.");
        Recovery::Retry
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .without_time()
        .init();

    println!("Bourré CLI example");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    // Ask up to five times before a default card is played.
    let options = GameOptions::default().with_max_selection_attempts(5);
    let mut game = Game::new(options, seed);

    for i in 0..OPPONENTS {
        let npc = HeuristicProvider::new(HeuristicOptions::default(), seed.wrapping_add(i + 1));
        game.join(format!("npc{}", i + 1), STARTING_CHIPS, Box::new(npc));
    }
    let human = game.join("you", STARTING_CHIPS, Box::new(ConsoleProvider));

    loop {
        match game.play_hand() {
            Ok(result) => {
                println!("\nHand complete. Trump was {}.", format_card(result.trump_card));
                match result.winner {
                    Some(winner) => println!("Player {winner} wins {} chip(s).", result.payout),
                    None => println!("Nobody played; {} chip(s) carry over.", result.carried_over),
                }
                for player in &result.players {
                    let bourre = if player.gone_bourre { " (bourré!)" } else { "" };
                    println!(
                        "  player {}: {} trick(s), {} chip(s){bourre}",
                        player.player_id, player.tricks_won, player.chips
                    );
                }
            }
            Err(err) => {
                println!("Hand error: {err}");
                break;
            }
        }

        game.clear_hand();

        if game.player(human).is_none_or(|p| p.chips() == 0) {
            println!("You are out of chips. Game over.");
            break;
        }
        if !matches!(prompt_line("\nPlay another hand? (y/n): ").as_str(), "y" | "yes") {
            println!("Goodbye.");
            break;
        }
        if let Err(err) = game.rotate_dealer() {
            println!("Dealer error: {err}");
            break;
        }
    }
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

fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, card)| format!("{}:{}", i + 1, format_card(*card)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
