use super::deal::deal;
use super::player::*;
use super::side::Side;
use super::zone::*;
use crate::PLAYERS;
use crate::SLOTS;
use crate::cards::*;
use enum_map::EnumMap;
use rand::Rng;

/// Authoritative snapshot of a game in progress.
///
/// Only the engine mutates a live context; everyone else reads clones.
/// Every card of the deck is always in exactly one of: deck, discard,
/// pile, or a player's hand or reserves.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct GameContext {
    deck: Vec<Card>,
    discard: Vec<Card>,
    pile: Pile,
    players: EnumMap<Side, Player>,
    shown: EnumMap<Side, Shown>,
    turn: Side,
}

impl GameContext {
    /// Shuffle, deal both seats, and turn the opponent's first three hand
    /// cards face up. The human opens.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let (deck, players) = deal(PLAYERS, Deck::shuffled(rng));
        let mut players = players.into_iter();
        let human = players.next().unwrap_or_default();
        let mut bot = players.next().unwrap_or_default();
        bot.stash(SLOTS);
        Self::from_parts(deck.into(), human, bot)
    }
    /// Assemble a context from already dealt parts, human to move.
    pub fn from_parts(deck: Vec<Card>, human: Player, bot: Player) -> Self {
        Self {
            deck,
            discard: Vec::new(),
            pile: Pile::default(),
            players: EnumMap::from_array([human, bot]),
            shown: EnumMap::default(),
            turn: Side::Human,
        }
    }
    /// No cards anywhere.
    pub fn empty() -> Self {
        Self::from_parts(Vec::new(), Player::default(), Player::default())
    }
    pub fn with_pile(mut self, pile: Pile) -> Self {
        self.pile = pile;
        self
    }
    pub fn with_turn(mut self, turn: Side) -> Self {
        self.turn = turn;
        self
    }
}

impl GameContext {
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }
    pub fn pile(&self) -> &Pile {
        &self.pile
    }
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side]
    }
    pub fn human(&self) -> &Player {
        self.player(Side::Human)
    }
    pub fn bot(&self) -> &Player {
        self.player(Side::Bot)
    }
    pub fn turn(&self) -> Side {
        self.turn
    }
    /// The player whose turn it is.
    pub fn current(&self) -> &Player {
        self.player(self.turn)
    }
    pub fn shown(&self, side: Side) -> Shown {
        self.shown[side]
    }
    /// Cards accounted for across every location.
    pub fn total(&self) -> usize {
        self.deck.len()
            + self.discard.len()
            + self.pile.len()
            + self.players.values().map(Player::total).sum::<usize>()
    }
    /// Whether the human has filled all face-up positions.
    pub fn has_reserved(&self) -> bool {
        self.human().offhand().face_up().is_full()
    }
}

impl GameContext {
    pub(crate) fn switch_turns(&mut self) {
        self.turn = self.turn.other();
    }
    /// The player to move picks up the whole pile.
    pub(crate) fn take_pile(&mut self) {
        let cards = self.pile.drain();
        self.players[self.turn].receive(cards);
    }
    pub(crate) fn burn(&mut self) {
        let cards = self.pile.drain();
        self.discard.extend(cards);
    }
    /// Move `card` (and up to `n - 1` same-rank companions) from the
    /// active zone of the player to move onto the pile.
    pub(crate) fn play(&mut self, card: Card, n: Option<usize>) -> Vec<Card> {
        let played = self.players[self.turn].release(card, n);
        self.pile.extend(played.iter().copied());
        played
    }
    /// Point the displayed zone of `side` at where that player plays from.
    pub(crate) fn refresh_shown(&mut self, side: Side) {
        self.shown[side] = Shown::from(self.players[side].active());
    }
    pub(crate) fn refresh_all(&mut self) {
        Side::all().into_iter().for_each(|side| self.refresh_shown(side));
    }
    pub(crate) fn set_shown(&mut self, side: Side, shown: Shown) {
        self.shown[side] = shown;
    }
    pub(crate) fn sort_hand(&mut self) {
        self.players[Side::Human].sort_hand();
    }
    pub(crate) fn reserve(&mut self, card: Card) -> bool {
        self.players[Side::Human].reserve(card)
    }
    /// Throw away every card in every location.
    pub(crate) fn drain(&mut self) {
        self.deck.clear();
        self.discard.clear();
        self.pile.drain();
        self.players.values_mut().for_each(|p| {
            p.drain();
        });
    }
}

impl std::fmt::Display for GameContext {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "turn  {}", self.turn)?;
        writeln!(f, "pile  {}", self.pile)?;
        writeln!(f, "bot   {}", self.bot())?;
        write!(f, "human {}", self.human())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::Reserve;
    use crate::HAND_SIZE;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn cards(s: &str) -> Vec<Card> {
        Card::parse(s).unwrap()
    }
    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    #[test]
    fn fresh_game_layout() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let context = GameContext::new(rng);
        assert_eq!(context.total(), 52);
        assert_eq!(context.turn(), Side::Human);
        assert!(context.pile().is_empty());
        assert_eq!(context.human().hand().len(), HAND_SIZE);
        assert!(context.human().offhand().face_up().is_empty());
        assert_eq!(context.bot().hand().len(), HAND_SIZE - SLOTS);
        assert!(context.bot().offhand().face_up().is_full());
        assert!(context.bot().offhand().face_down().is_full());
        assert_eq!(context.shown(Side::Human), Shown::Hand);
    }

    #[test]
    fn opponent_reserve_comes_from_its_hand() {
        let bot = Player::new(cards("3c 4c 5c 6c 7c 8c"), OffHand::default());
        let mut context = GameContext::from_parts(vec![], Player::default(), bot);
        context.players[Side::Bot].stash(SLOTS);
        assert_eq!(context.bot().hand().len(), 3);
        assert_eq!(
            context.bot().offhand().face_up().cards().collect::<Vec<_>>(),
            cards("3c 4c 5c")
        );
    }

    #[test]
    fn play_then_take_pile() {
        let human = Player::new(cards("9c 9d 4h"), OffHand::default());
        let bot = Player::new(cards("3s"), OffHand::default());
        let mut context = GameContext::from_parts(vec![], human, bot);
        assert_eq!(context.play(card("9c"), Some(2)), cards("9c 9d"));
        assert_eq!(context.pile().cards(), cards("9c 9d").as_slice());
        context.switch_turns();
        context.take_pile();
        assert!(context.pile().is_empty());
        assert_eq!(context.bot().hand(), cards("3s 9c 9d").as_slice());
        assert_eq!(context.total(), 4);
    }

    #[test]
    fn burn_moves_pile_to_discard() {
        let human = Player::new(cards("Tc 4h"), OffHand::default());
        let mut context = GameContext::from_parts(vec![], human, Player::default());
        context.play(card("Tc"), None);
        context.burn();
        assert!(context.pile().is_empty());
        assert_eq!(context.discard(), cards("Tc").as_slice());
        assert_eq!(context.total(), 2);
    }

    #[test]
    fn shown_follows_active_zone() {
        let human = Player::new(vec![], OffHand::new(Reserve::from([card("3c"), card("4c"), card("5c")]), Reserve::default()));
        let mut context = GameContext::from_parts(vec![], human, Player::default());
        context.refresh_shown(Side::Human);
        assert_eq!(context.shown(Side::Human), Shown::OffHand);
        context.set_shown(Side::Human, Shown::Hand);
        assert_eq!(context.shown(Side::Human), Shown::Hand);
    }

    #[test]
    fn drain_empties_everything() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let mut context = GameContext::new(rng);
        context.drain();
        assert_eq!(context.total(), 0);
    }
}
