use super::render;
use crate::cards::*;
use crate::engine::*;
use crate::gameplay::*;
use crate::gameroom::*;
use dialoguer::Confirm;
use dialoguer::Select;

/// One line of the move menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Play(Card),
    Blind(usize),
    TakePile,
    Sort,
    Toggle(Shown),
}

/// Terminal front end for the human seat.
///
/// Waits for the room to ask the human, draws the board, and prompts.
/// Prompts block, so they run on the blocking pool.
pub struct Terminal {
    handle: Handle,
    answered: u64,
}

impl Terminal {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            answered: 0,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            let last = self.answered;
            let Some(view) = self
                .handle
                .until(|v| v.is_over() || v.awaiting_human().is_some_and(|seq| seq > last))
                .await
            else {
                break;
            };
            println!("\n{}", render::board(&view));
            if let Some(verdict) = render::verdict(&view) {
                println!("{}", verdict);
                if !Self::confirm("Play again?").await? {
                    break;
                }
                self.handle.new_game();
                self.handle.until(|v| !v.is_over()).await;
                continue;
            }
            match view.phase {
                Phase::ChoosingFaceUp => self.reserve(&view).await?,
                _ => self.turn(&view).await?,
            }
        }
        Ok(())
    }

    async fn reserve(&mut self, view: &View) -> anyhow::Result<()> {
        let me = view.context.human();
        let hand = me.hand().to_vec();
        let prompt = format!(
            "Choose a face-up card ({}/{})",
            me.offhand().face_up().count() + 1,
            crate::SLOTS
        );
        let labels = hand.iter().map(|c| render::card(*c).to_string()).collect();
        let index = Self::select(prompt, labels).await?;
        self.answer(view, Pick::Card {
            card: hand[index],
            n: None,
        });
        Ok(())
    }

    async fn turn(&mut self, view: &View) -> anyhow::Result<()> {
        let menu = Self::menu(view);
        let labels = menu.iter().map(|(label, _)| label.clone()).collect();
        let index = Self::select(String::from("Your move"), labels).await?;
        match menu[index].1 {
            Choice::Play(card) => {
                let n = self.count(view, card).await?;
                self.answer(view, Pick::Card { card, n });
            }
            Choice::Blind(index) => self.answer(view, Pick::Blind(index)),
            Choice::TakePile => {
                self.answered = view.awaiting_human().unwrap_or(self.answered);
                self.handle.take_pile();
            }
            Choice::Sort => {
                self.handle.sort_hand();
                self.handle.changed().await;
            }
            Choice::Toggle(shown) => {
                self.handle.show(Side::Human, shown);
                self.handle.changed().await;
            }
        }
        Ok(())
    }

    /// How many of `card`'s rank to lay down, when there is a choice.
    async fn count(&self, view: &View, card: Card) -> anyhow::Result<Option<usize>> {
        let me = view.context.human();
        let same = me
            .playable()
            .into_iter()
            .filter(|c| c.rank() == card.rank())
            .count();
        if same < 2 || me.active().is_blind() {
            return Ok(None);
        }
        let labels = (1..=same).map(|n| n.to_string()).collect();
        let index = Self::select(format!("How many {}s?", card.rank()), labels).await?;
        Ok(Some(index + 1))
    }

    fn menu(view: &View) -> Vec<(String, Choice)> {
        let context = &view.context;
        let me = context.human();
        let mut menu = Vec::new();
        if me.active().is_blind() {
            menu.extend(
                me.offhand()
                    .face_down()
                    .filled()
                    .map(|i| (format!("flip face-down #{}", i), Choice::Blind(i))),
            );
        } else {
            menu.extend(
                me.playable()
                    .into_iter()
                    .filter(|c| context.pile().accepts(*c))
                    .map(|c| (format!("play {}", render::card(c)), Choice::Play(c))),
            );
        }
        match context.pile().is_empty() {
            false => menu.push((String::from("take the pile"), Choice::TakePile)),
            true if menu.is_empty() => menu.push((String::from("pass"), Choice::TakePile)),
            true => {}
        }
        if me.hand().len() > 1 {
            menu.push((String::from("sort hand"), Choice::Sort));
        }
        let shown = context.shown(Side::Human).toggled();
        menu.push((format!("show {}", shown), Choice::Toggle(shown)));
        menu
    }

    fn answer(&mut self, view: &View, pick: Pick) {
        self.answered = view.awaiting_human().unwrap_or(self.answered);
        self.handle.pick(pick);
    }

    async fn select(prompt: String, labels: Vec<String>) -> anyhow::Result<usize> {
        Ok(tokio::task::spawn_blocking(move || {
            Select::new()
                .with_prompt(prompt)
                .items(&labels)
                .default(0)
                .report(false)
                .interact()
        })
        .await??)
    }

    async fn confirm(prompt: &'static str) -> anyhow::Result<bool> {
        Ok(tokio::task::spawn_blocking(move || {
            Confirm::new().with_prompt(prompt).default(true).interact()
        })
        .await??)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        Card::parse(s).unwrap()
    }
    fn view(human: Player, pile: &str) -> View {
        let context = GameContext::from_parts(vec![], human, Player::default())
            .with_pile(Pile::from(cards(pile)));
        View {
            phase: Phase::Playing(Step::WaitForMove),
            context,
            asking: Some((Side::Human, 1)),
        }
    }

    #[test]
    fn menu_lists_only_legal_cards() {
        let view = view(Player::new(cards("4c 9d Kh"), OffHand::default()), "8s");
        let plays = Terminal::menu(&view)
            .into_iter()
            .filter_map(|(_, choice)| match choice {
                Choice::Play(card) => Some(card),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(plays, cards("9d Kh"));
    }

    #[test]
    fn menu_offers_positions_when_blind() {
        let down = Reserve::try_from(cards("4c 9d")).unwrap();
        let view = view(Player::new(vec![], OffHand::new(Reserve::default(), down)), "8s");
        let menu = Terminal::menu(&view);
        assert_eq!(menu[0].1, Choice::Blind(0));
        assert_eq!(menu[1].1, Choice::Blind(1));
        assert!(menu.iter().any(|(_, c)| *c == Choice::TakePile));
        assert!(!menu.iter().any(|(_, c)| *c == Choice::Sort));
    }

    #[test]
    fn menu_never_leaves_the_human_stuck() {
        let empty = view(Player::default(), "");
        let menu = Terminal::menu(&empty);
        assert_eq!(menu[0], (String::from("pass"), Choice::TakePile));

        let holding = view(Player::new(cards("4c"), OffHand::default()), "");
        assert!(!Terminal::menu(&holding).iter().any(|(_, c)| *c == Choice::TakePile));
    }
}
