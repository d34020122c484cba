use std::env;
use std::process::exit;
use wildrun_client::{caught_points, EventQueue, HandState};
use wildrun_core::{
    best_partition, hand_size, is_wild, parse_hand, run_lengths, wild_rank, Card, Deck, Meld,
    RngState,
};

const USAGE: &str = "usage: wildrun-cli [--json] <round> <cards...>
       wildrun-cli [--json] --deal [--seed N] <round>

cards are rank+suit tokens (9s tc jh qd ad) or jo for a joker";

#[derive(Debug, Default)]
struct CliOptions {
    round: Option<u32>,
    tokens: Vec<String>,
    deal: bool,
    seed: Option<u64>,
    json: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--deal" => options.deal = true,
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                options.seed = Some(value.parse().map_err(|_| format!("bad seed `{value}`"))?);
            }
            "-h" | "--help" => return Err(String::new()),
            _ if options.round.is_none() => {
                options.round = Some(
                    arg.parse()
                        .ok()
                        .filter(|&r| r >= 1)
                        .ok_or_else(|| format!("round must be a positive integer, got `{arg}`"))?,
                );
            }
            _ => options.tokens.push(arg),
        }
    }
    if options.round.is_none() {
        return Err("missing round".into());
    }
    if options.deal && !options.tokens.is_empty() {
        return Err("--deal takes no cards".into());
    }
    if !options.deal && options.tokens.is_empty() {
        return Err("no cards given (or use --deal)".into());
    }
    Ok(options)
}

fn render_hand(cards: &[Card], melds: &[Meld], round: u32) -> String {
    let mut out = String::new();
    for (i, card) in cards.iter().enumerate() {
        if !out.is_empty() {
            out.push(' ');
        }
        if melds.iter().any(|m| m.start == i) {
            out.push('[');
        }
        out.push_str(&card.to_string());
        if is_wild(*card, round) {
            out.push('*');
        }
        if melds.iter().any(|m| m.start + m.len == i + 1) {
            out.push(']');
        }
    }
    out
}

fn main() {
    let options = match parse_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            if !message.is_empty() {
                eprintln!("wildrun-cli: {message}");
            }
            eprintln!("{USAGE}");
            exit(if message.is_empty() { 0 } else { 1 });
        }
    };
    let round = options.round.unwrap_or(1);

    let (cards, seed) = if options.deal {
        let mut rng = match options.seed {
            Some(seed) => RngState::from_seed(seed),
            None => RngState::from_entropy(),
        };
        let mut deck = Deck::game_deck();
        deck.shuffle(&mut rng);
        (deck.deal(round), Some(rng.seed()))
    } else {
        match parse_hand(&options.tokens.join(" ")) {
            Ok(cards) => (cards, None),
            Err(error) => {
                eprintln!("wildrun-cli: {error}");
                exit(1);
            }
        }
    };

    let mut events = EventQueue::default();
    let mut hand = HandState::new();
    hand.set_hand(cards.clone(), round, &mut events);
    let melds = best_partition(&run_lengths(&cards, wild_rank(round)));

    if options.json {
        let report = serde_json::json!({
            "round": round,
            "wild": wild_rank(round),
            "handSize": hand_size(round),
            "seed": seed,
            "cards": cards.iter().enumerate().map(|(i, card)| {
                serde_json::json!({
                    "card": card.to_string(),
                    "wild": is_wild(*card, round),
                    "grouped": hand.grouped()[i],
                })
            }).collect::<Vec<_>>(),
            "grouped": hand.grouped_count(),
            "canGoOut": hand.can_go_out(),
            "caughtPoints": caught_points(&hand),
        });
        println!("{report}");
        return;
    }

    match wild_rank(round) {
        Some(rank) => println!("round {round}, {:?} wild (* = wild)", rank),
        None => println!("round {round}, only jokers wild (* = wild)"),
    }
    if let Some(seed) = seed {
        println!("seed {seed}");
    }
    println!("hand: {}", render_hand(&cards, &melds, round));
    if hand.can_go_out() {
        println!("all {} cards grouped: can go out", hand.len());
    } else {
        println!(
            "grouped {} of {}; caught with {} points",
            hand.grouped_count(),
            hand.len(),
            caught_points(&hand)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split_whitespace().map(ToString::to_string)
    }

    #[test]
    fn parses_round_and_cards() {
        let options = parse_args(args("4 9s ts js")).unwrap();
        assert_eq!(options.round, Some(4));
        assert_eq!(options.tokens, vec!["9s", "ts", "js"]);
        assert!(!options.deal);
    }

    #[test]
    fn parses_deal_with_seed() {
        let options = parse_args(args("--json --deal --seed 7 3")).unwrap();
        assert!(options.json && options.deal);
        assert_eq!(options.seed, Some(7));
        assert_eq!(options.round, Some(3));
    }

    #[test]
    fn rejects_bad_rounds() {
        assert!(parse_args(args("0 9s")).is_err());
        assert!(parse_args(args("nope 9s")).is_err());
        assert!(parse_args(args("--deal --seed x 3")).is_err());
    }

    #[test]
    fn renders_meld_brackets_and_wild_badges() {
        let cards = parse_hand("9s jo js qs 2c").unwrap();
        let melds = best_partition(&run_lengths(&cards, wild_rank(11)));
        assert_eq!(render_hand(&cards, &melds, 11), "[9s jo* js qs] 2c");
    }
}
