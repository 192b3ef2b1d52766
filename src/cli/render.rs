use crate::cards::*;
use crate::engine::*;
use crate::gameplay::*;
use colored::*;

pub fn card(card: Card) -> ColoredString {
    let face = format!("{}{}", card.rank(), card.suit().symbol());
    match card.suit().is_red() {
        true => face.red().bold(),
        false => face.bold(),
    }
}

pub fn cards(cards: &[Card]) -> String {
    match cards.is_empty() {
        true => "-".dimmed().to_string(),
        false => cards
            .iter()
            .map(|c| card(*c).to_string())
            .collect::<Vec<_>>()
            .join(" "),
    }
}

pub fn face_up(reserve: &Reserve) -> String {
    reserve
        .slots()
        .iter()
        .map(|slot| match slot {
            Some(c) => card(*c).to_string(),
            None => "__".dimmed().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn face_down(reserve: &Reserve) -> String {
    reserve
        .slots()
        .iter()
        .enumerate()
        .map(|(i, slot)| match slot {
            Some(_) => format!("#{}", i).blue().to_string(),
            None => "__".dimmed().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn marker(shown: Shown, wanted: Shown) -> &'static str {
    match shown == wanted {
        true => ">",
        false => " ",
    }
}

pub fn board(view: &View) -> String {
    let context = &view.context;
    let bot = context.bot();
    let human = context.human();
    let top = context
        .pile()
        .top()
        .map(|c| card(c).to_string())
        .unwrap_or_else(|| "empty".dimmed().to_string());
    let mut lines = Vec::new();
    lines.push(format!(
        "{} bot   {} cards in hand",
        marker(context.shown(Side::Bot), Shown::Hand),
        bot.hand().len()
    ));
    lines.push(format!(
        "{}       up {}   down {}",
        marker(context.shown(Side::Bot), Shown::OffHand),
        face_up(bot.offhand().face_up()),
        face_down(bot.offhand().face_down())
    ));
    lines.push(format!(
        "  pile  {} ({} cards)   burned {}",
        top,
        context.pile().len(),
        context.discard().len()
    ));
    lines.push(format!(
        "{}       up {}   down {}",
        marker(context.shown(Side::Human), Shown::OffHand),
        face_up(human.offhand().face_up()),
        face_down(human.offhand().face_down())
    ));
    lines.push(format!(
        "{} you   {}",
        marker(context.shown(Side::Human), Shown::Hand),
        cards(human.hand())
    ));
    lines.push(format!("  {} to move, {}", context.turn(), view.phase));
    lines.join("\n")
}

pub fn verdict(view: &View) -> Option<String> {
    match view.phase {
        Phase::Won => Some("You win!".green().bold().to_string()),
        Phase::Lost => Some("The bot wins.".red().bold().to_string()),
        _ => None,
    }
}
