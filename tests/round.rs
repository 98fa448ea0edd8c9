//! Card, deck, scoring and round engine tests.

use std::collections::HashSet;

use bjtui::hand::{is_soft, score};
use bjtui::{
    ActionError, Card, DECK_SIZE, DealError, DealerHand, Deck, DeckError, Evaluation, Hand,
    Outcome, Rank, Round, RoundPhase, ShowdownError, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn cards(ranks: &[Rank]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(Suit::Spades, rank)).collect()
}

/// Builds a round whose deck deals `ranks` from the top.
fn round_with(ranks: &[Rank]) -> Round {
    Round::with_deck(Deck::from_cards(cards(ranks)))
}

#[test]
fn canonical_deck_order() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.cards()[0], card(Suit::Spades, Rank::Ace));
    assert_eq!(deck.cards()[12], card(Suit::Spades, Rank::King));
    assert_eq!(deck.cards()[13], card(Suit::Hearts, Rank::Ace));
    assert_eq!(deck.cards()[51], card(Suit::Clubs, Rank::King));

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn shuffle_is_a_permutation() {
    let canonical: HashSet<Card> = Deck::new().cards().iter().copied().collect();

    for seed in 0..64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        assert_eq!(deck.len(), DECK_SIZE);
        let shuffled: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(shuffled, canonical, "seed {seed}");
    }
}

#[test]
fn shuffle_is_deterministic_per_seed() {
    let mut a = Deck::new();
    let mut b = Deck::new();
    a.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    b.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    assert_eq!(a, b);

    let mut c = Deck::new();
    c.shuffle(&mut ChaCha8Rng::seed_from_u64(8));
    assert_ne!(a, c);
}

#[test]
fn draw_takes_from_the_top() {
    let mut deck = Deck::new();
    let drawn = deck.draw(3).unwrap();
    assert_eq!(
        drawn,
        vec![
            card(Suit::Spades, Rank::Ace),
            card(Suit::Spades, Rank::Two),
            card(Suit::Spades, Rank::Three),
        ]
    );
    assert_eq!(deck.len(), DECK_SIZE - 3);
    assert_eq!(deck.draw_one().unwrap(), card(Suit::Spades, Rank::Four));
}

#[test]
fn draw_past_the_end_fails_without_consuming() {
    let mut deck = Deck::from_cards(cards(&[Rank::Two, Rank::Three]));
    assert_eq!(
        deck.draw(3),
        Err(DeckError::Empty {
            requested: 3,
            remaining: 2
        })
    );
    assert_eq!(deck.len(), 2);

    deck.draw(2).unwrap();
    assert!(deck.is_empty());
    assert_eq!(
        deck.draw_one(),
        Err(DeckError::Empty {
            requested: 1,
            remaining: 0
        })
    );
}

#[test]
fn scoring_rules() {
    assert_eq!(score(&[]), 0);
    assert_eq!(score(&cards(&[Rank::Ace, Rank::King])), 21);
    assert_eq!(score(&cards(&[Rank::Ace, Rank::Ace, Rank::Nine])), 21);
    assert_eq!(score(&cards(&[Rank::King, Rank::Queen, Rank::Five])), 25);
    assert_eq!(score(&cards(&[Rank::Ace, Rank::Ace])), 12);
    assert_eq!(score(&cards(&[Rank::Ace, Rank::Five, Rank::King])), 26);
    assert_eq!(score(&cards(&[Rank::Ace, Rank::Six, Rank::Ten])), 27);
    assert_eq!(score(&cards(&[Rank::Six, Rank::Ten, Rank::Ace])), 17);
    assert_eq!(score(&cards(&[Rank::Jack, Rank::Queen])), 20);

    assert!(is_soft(&cards(&[Rank::Ace, Rank::Six])));
    assert!(!is_soft(&cards(&[Rank::Ace, Rank::Six, Rank::Ten])));
    assert!(!is_soft(&cards(&[Rank::Ace, Rank::Ace, Rank::Nine])));
    assert!(is_soft(&cards(&[Rank::Five, Rank::Ace])));
}

#[test]
fn hand_tracks_bust() {
    let mut hand = Hand::new();
    assert!(hand.is_empty());
    hand.add_card(card(Suit::Hearts, Rank::King));
    hand.add_card(card(Suit::Clubs, Rank::Queen));
    assert!(!hand.is_bust());
    hand.add_card(card(Suit::Diamonds, Rank::Two));
    assert_eq!(hand.score(), 22);
    assert!(hand.is_bust());

    hand.clear();
    assert_eq!(hand.score(), 0);
}

#[test]
fn dealer_hand_hides_face_down_cards() {
    let mut dealer = DealerHand::new();
    dealer.add_face_up(card(Suit::Hearts, Rank::Ace));
    dealer.add_face_down(card(Suit::Clubs, Rank::Six));

    assert_eq!(dealer.len(), 2);
    assert_eq!(dealer.face_up().len(), 1);
    assert_eq!(dealer.hidden_count(), 1);
    assert_eq!(dealer.score(), 11);

    assert!(dealer.reveal());
    assert!(!dealer.has_hidden());
    assert_eq!(dealer.score(), 17);
    assert!(!dealer.reveal());
}

#[test]
fn first_deal_alternates_player_and_dealer() {
    let mut round = Round::new();
    assert_eq!(round.phase(), RoundPhase::Betting);

    round.deal_first_hand().unwrap();
    assert_eq!(round.phase(), RoundPhase::PlayerTurn);
    assert_eq!(round.cards_remaining(), DECK_SIZE - 4);

    // Canonical deck: A♠ to the player, 2♠ up, 3♠ to the player, 4♠ down.
    assert_eq!(
        round.player_hand().cards(),
        &[
            card(Suit::Spades, Rank::Ace),
            card(Suit::Spades, Rank::Three)
        ]
    );
    assert_eq!(
        round.dealer_hand().face_up(),
        &[card(Suit::Spades, Rank::Two)]
    );
    assert_eq!(round.dealer_hand().hidden_count(), 1);
    assert_eq!(round.player_score(), 14);
    assert_eq!(round.dealer_score(), 2);
}

#[test]
fn deal_requires_betting_phase_and_four_cards() {
    let mut round = round_with(&[Rank::Two, Rank::Three, Rank::Four]);
    assert_eq!(
        round.deal_first_hand(),
        Err(DealError::InsufficientDeck { remaining: 3 })
    );
    assert_eq!(round.phase(), RoundPhase::Betting);
    assert_eq!(round.cards_remaining(), 3);

    let mut round = Round::new();
    round.deal_first_hand().unwrap();
    assert_eq!(round.deal_first_hand(), Err(DealError::InvalidState));
}

#[test]
fn actions_out_of_phase_are_rejected() {
    let mut round = Round::new();
    assert_eq!(round.player_hit(), Err(ActionError::InvalidState));
    assert_eq!(round.player_stand(), Err(ActionError::InvalidState));
    assert_eq!(round.dealer_reveal(), Err(ActionError::InvalidState));
    assert_eq!(round.evaluate(), Err(ShowdownError::InvalidState));

    round.deal_first_hand().unwrap();
    assert_eq!(round.dealer_reveal(), Err(ActionError::InvalidState));
}

#[test]
fn hit_on_empty_deck_fails() {
    let mut round = round_with(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five]);
    round.deal_first_hand().unwrap();
    assert_eq!(
        round.player_hit(),
        Err(ActionError::EmptyDeck(DeckError::Empty {
            requested: 1,
            remaining: 0
        }))
    );
    assert_eq!(round.player_hand().len(), 2);
}

#[test]
fn natural_twenty_one_wins_immediately() {
    let mut round = round_with(&[Rank::Ace, Rank::Ten, Rank::King, Rank::Nine]);
    round.deal_first_hand().unwrap();

    assert_eq!(round.evaluate(), Ok(Evaluation::Settled(Outcome::PlayerWin)));
    assert_eq!(round.phase(), RoundPhase::Resolved);
    assert_eq!(round.outcome(), Some(Outcome::PlayerWin));
    // The dealer never turned the hole card.
    assert!(round.dealer_hand().has_hidden());
}

#[test]
fn hitting_past_21_busts() {
    let mut round = round_with(&[Rank::King, Rank::Seven, Rank::Five, Rank::Ten, Rank::Queen]);
    round.deal_first_hand().unwrap();
    assert_eq!(round.evaluate(), Ok(Evaluation::PlayerToAct));
    assert_eq!(round.dealer_reveal(), Err(ActionError::InvalidState));

    let drawn = round.player_hit().unwrap();
    assert_eq!(drawn.rank, Rank::Queen);
    assert_eq!(round.player_score(), 25);
    assert_eq!(round.evaluate(), Ok(Evaluation::Settled(Outcome::PlayerBust)));
}

#[test]
fn high_ace_is_kept_when_a_later_card_busts() {
    let mut round = round_with(&[Rank::Ace, Rank::Seven, Rank::Five, Rank::Ten, Rank::King]);
    round.deal_first_hand().unwrap();
    assert_eq!(round.player_score(), 16);
    assert_eq!(round.evaluate(), Ok(Evaluation::PlayerToAct));

    round.player_hit().unwrap();
    assert_eq!(round.player_score(), 26);
    assert_eq!(round.evaluate(), Ok(Evaluation::Settled(Outcome::PlayerBust)));
}

#[test]
fn dealer_ace_is_scored_in_deal_order() {
    // Dealer shows 5, hides an Ace (16), then draws a King.
    let mut round = round_with(&[
        Rank::Ten,
        Rank::Five,
        Rank::Nine,
        Rank::Ace,
        Rank::King,
    ]);
    round.deal_first_hand().unwrap();
    round.player_stand().unwrap();
    assert_eq!(round.dealer_score(), 16);
    assert_eq!(round.evaluate(), Ok(Evaluation::DealerMustDraw));

    round.dealer_reveal().unwrap();
    assert_eq!(round.dealer_score(), 26);
    assert_eq!(round.evaluate(), Ok(Evaluation::Settled(Outcome::DealerBust)));
}

#[test]
fn tie_is_not_declared_before_the_dealer_finishes() {
    let mut round = round_with(&[Rank::Ten, Rank::Ten, Rank::Eight, Rank::Eight]);
    round.deal_first_hand().unwrap();
    assert_eq!(round.evaluate(), Ok(Evaluation::PlayerToAct));

    round.player_stand().unwrap();
    assert_eq!(round.phase(), RoundPhase::DealerTurn);
    assert!(!round.dealer_hand().has_hidden());
    assert_eq!(round.dealer_score(), 18);
    assert_eq!(round.evaluate(), Ok(Evaluation::Settled(Outcome::Push)));
}

#[test]
fn dealer_draws_to_seventeen_and_can_bust() {
    let mut round = round_with(&[
        Rank::Ten,
        Rank::Ten,
        Rank::Nine,
        Rank::Six,
        Rank::Six,
    ]);
    round.deal_first_hand().unwrap();
    round.player_stand().unwrap();
    assert_eq!(round.dealer_score(), 16);
    assert_eq!(round.evaluate(), Ok(Evaluation::DealerMustDraw));

    round.dealer_reveal().unwrap();
    assert_eq!(round.dealer_score(), 22);
    assert_eq!(round.evaluate(), Ok(Evaluation::Settled(Outcome::DealerBust)));
}

#[test]
fn higher_dealer_total_wins() {
    let mut round = round_with(&[Rank::Ten, Rank::Ten, Rank::Seven, Rank::Nine]);
    round.deal_first_hand().unwrap();
    round.player_stand().unwrap();
    assert_eq!(round.evaluate(), Ok(Evaluation::Settled(Outcome::DealerWin)));
}

#[test]
fn higher_player_total_wins_after_dealer_stands() {
    let mut round = round_with(&[Rank::Ten, Rank::Ten, Rank::King, Rank::Seven]);
    round.deal_first_hand().unwrap();
    round.player_stand().unwrap();
    assert_eq!(round.evaluate(), Ok(Evaluation::Settled(Outcome::PlayerWin)));
}

#[test]
fn resolved_round_keeps_its_outcome() {
    let mut round = round_with(&[Rank::Ten, Rank::Ten, Rank::Seven, Rank::Nine]);
    round.deal_first_hand().unwrap();
    round.player_stand().unwrap();
    assert_eq!(round.evaluate(), Ok(Evaluation::Settled(Outcome::DealerWin)));
    assert_eq!(round.evaluate(), Ok(Evaluation::Settled(Outcome::DealerWin)));
    assert_eq!(round.player_hit(), Err(ActionError::InvalidState));
}

#[test]
fn reset_starts_over_with_a_full_deck() {
    let mut round = round_with(&[Rank::Ten, Rank::Ten, Rank::Seven, Rank::Nine]);
    round.deal_first_hand().unwrap();
    assert!(!round.replace_deck(Deck::new()));

    round.reset();
    assert_eq!(round.phase(), RoundPhase::Betting);
    assert_eq!(round.outcome(), None);
    assert!(round.player_hand().is_empty());
    assert!(round.dealer_hand().is_empty());
    assert_eq!(round.deck_cards(), Deck::new().cards());
    assert!(round.replace_deck(Deck::from_cards(cards(&[Rank::Two]))));
    assert_eq!(round.cards_remaining(), 1);
}

#[test]
fn dealt_cards_are_never_repeated() {
    for seed in 0..32 {
        let mut round = Round::new();
        round.shuffle_deck(&mut ChaCha8Rng::seed_from_u64(seed));
        round.deal_first_hand().unwrap();
        while round.player_score() < 17 {
            round.player_hit().unwrap();
        }
        if round.evaluate() == Ok(Evaluation::PlayerToAct) {
            round.player_stand().unwrap();
            while round.evaluate() == Ok(Evaluation::DealerMustDraw) {
                round.dealer_reveal().unwrap();
            }
        }

        let mut seen: HashSet<Card> = round.deck_cards().iter().copied().collect();
        let dealt = round
            .player_hand()
            .cards()
            .iter()
            .chain(round.dealer_hand().face_up());
        for card in dealt {
            assert!(seen.insert(*card), "seed {seed}: {card:?} dealt twice");
        }
        let total = seen.len() + round.dealer_hand().hidden_count();
        assert_eq!(total, DECK_SIZE, "seed {seed}");
    }
}
