//! Round engine integration tests.

#![allow(clippy::float_cmp)]

use hintbet::{
    ActionError, ActionOutcome, BettingRotation, Game, GameOptions, GuessError, Phase, PhaseError,
    PlayerId, Question, QuestionDeck, QuestionSource, SettleError, SettlementKind,
};

fn seated(names: &[&str]) -> (Game, Vec<PlayerId>) {
    seated_with(GameOptions::default(), names)
}

fn seated_with(options: GameOptions, names: &[&str]) -> (Game, Vec<PlayerId>) {
    let game = Game::new(options);
    let ids = names.iter().map(|name| game.add_player(*name, 100.0)).collect();
    (game, ids)
}

fn guess_all(game: &Game, guesses: &[f64]) {
    for &guess in guesses {
        game.submit_guess(guess).unwrap();
    }
}

fn advance_to(game: &Game, phase: Phase) {
    while game.phase() != phase {
        game.advance_phase().unwrap();
    }
}

fn balance(game: &Game, id: PlayerId) -> f64 {
    game.get_player(id).unwrap().balance()
}

#[test]
fn player_ids_are_unique_and_follow_seat_order() {
    let (game, ids) = seated(&["Ann", "Ben", "Cal", "Ann"]);

    assert_eq!(ids, vec![1, 2, 3, 4]);
    let seated_ids: Vec<PlayerId> = game.players().iter().map(|p| p.id()).collect();
    assert_eq!(seated_ids, ids);

    let fifth = game.add_player("Dee", 5.5);
    assert_eq!(fifth, 5);
    assert_eq!(game.players().last().unwrap().name(), "Dee");
    assert_eq!(game.action_index(), 0);
    assert_eq!(game.dealer_index(), 0);
    assert_eq!(game.phase(), Phase::Guessing);
}

#[test]
fn new_player_starts_without_guess_or_fold() {
    let (game, ids) = seated(&["Ann"]);
    let player = game.get_player(ids[0]).unwrap();

    assert_eq!(player.guess(), None);
    assert!(!player.has_guessed());
    assert!(!player.is_folded());
    assert_eq!(player.balance(), 100.0);
}

#[test]
fn guessing_passes_action_and_advances_when_complete() {
    let (game, ids) = seated(&["Ann", "Ben", "Cal"]);

    assert_eq!(game.submit_guess(10.0).unwrap(), ActionOutcome::NextTurn(1));
    assert_eq!(game.submit_guess(20.0).unwrap(), ActionOutcome::NextTurn(2));
    assert_eq!(
        game.submit_guess(30.0).unwrap(),
        ActionOutcome::PhaseChanged(Phase::Bet1)
    );

    assert_eq!(game.phase(), Phase::Bet1);
    assert_eq!(game.get_player(ids[1]).unwrap().guess(), Some(20.0));
    assert!(game.get_player(ids[2]).unwrap().has_guessed());
}

#[test]
fn last_eligible_guess_enters_bet1_without_advance() {
    let (game, _) = seated(&["Ann", "Ben", "Cal"]);

    game.submit_guess(1.0).unwrap();
    // Ben folds, so Cal is the only player left to guess.
    assert_eq!(game.fold().unwrap(), ActionOutcome::NextTurn(2));
    assert_eq!(
        game.submit_guess(3.0).unwrap(),
        ActionOutcome::PhaseChanged(Phase::Bet1)
    );
    assert_eq!(game.phase(), Phase::Bet1);
}

#[test]
fn guess_errors() {
    let (game, _) = seated(&["Ann", "Ben"]);

    assert_eq!(
        game.submit_guess(f64::NAN).unwrap_err(),
        GuessError::NotFinite
    );
    assert_eq!(
        game.submit_guess(f64::INFINITY).unwrap_err(),
        GuessError::NotFinite
    );

    guess_all(&game, &[1.0, 2.0]);
    let before = game.snapshot();
    assert_eq!(game.submit_guess(3.0).unwrap_err(), GuessError::InvalidState);
    assert_eq!(game.snapshot(), before);

    let empty = Game::new(GameOptions::default());
    assert_eq!(empty.submit_guess(1.0).unwrap_err(), GuessError::NoPlayers);
}

#[test]
fn phases_follow_fixed_cycle() {
    let (game, _) = seated(&["Ann", "Ben"]);

    let expected = [
        Phase::Bet1,
        Phase::Hint1,
        Phase::Bet2,
        Phase::Hint2,
        Phase::Bet3,
        Phase::Answer,
    ];
    for phase in expected {
        assert_eq!(game.advance_phase().unwrap(), phase);
    }

    let before = game.snapshot();
    assert_eq!(game.advance_phase().unwrap_err(), PhaseError::QuestionOver);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn betting_rounds_keep_pot_and_reset_checks() {
    let (game, ids) = seated(&["Ann", "Ben"]);
    guess_all(&game, &[1.0, 2.0]);

    // Ben guessed last and keeps the action.
    assert_eq!(game.action_index(), 1);
    assert_eq!(game.check().unwrap(), ActionOutcome::NextTurn(0));
    assert_eq!(game.check_count(), 1);

    assert_eq!(game.bet(5.0).unwrap(), ActionOutcome::NextTurn(1));
    assert_eq!(game.pot(), 5.0);
    assert_eq!(game.current_bet(), 5.0);
    assert_eq!(game.check_count(), 0);
    assert_eq!(balance(&game, ids[0]), 95.0);

    advance_to(&game, Phase::Bet2);
    assert_eq!(game.pot(), 5.0);
    assert_eq!(game.current_bet(), 5.0);
    assert_eq!(game.check_count(), 0);

    let before = game.snapshot();
    assert_eq!(game.check().unwrap_err(), ActionError::BetOutstanding);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn reset_bet_each_round_allows_checks_after_earlier_bet() {
    let options = GameOptions::default().with_reset_bet_each_round(true);
    let (game, _) = seated_with(options, &["Ann", "Ben"]);
    guess_all(&game, &[1.0, 2.0]);

    game.bet(5.0).unwrap();
    advance_to(&game, Phase::Bet2);

    assert_eq!(game.current_bet(), 0.0);
    assert_eq!(game.pot(), 5.0);
    assert_eq!(game.check().unwrap(), ActionOutcome::NextTurn(1));
}

#[test]
fn checks_from_every_active_player_close_subround() {
    let (game, _) = seated(&["Ann", "Ben", "Cal"]);
    guess_all(&game, &[1.0, 2.0, 3.0]);

    assert_eq!(game.check().unwrap(), ActionOutcome::NextTurn(0));
    assert_eq!(game.check().unwrap(), ActionOutcome::NextTurn(1));
    assert_eq!(
        game.check().unwrap(),
        ActionOutcome::PhaseChanged(Phase::Hint1)
    );

    advance_to(&game, Phase::Bet2);
    assert_eq!(game.check_count(), 0);
}

#[test]
fn checks_close_subround_with_folded_player() {
    for rotation in [BettingRotation::Sequential, BettingRotation::SkipFolded] {
        let options = GameOptions::default().with_betting_rotation(rotation);
        let (game, _) = seated_with(options, &["Ann", "Ben", "Cal"]);
        guess_all(&game, &[1.0, 2.0, 3.0]);
        assert_eq!(game.action_index(), 2);

        assert_eq!(game.fold().unwrap(), ActionOutcome::NextTurn(0));
        assert_eq!(game.check().unwrap(), ActionOutcome::NextTurn(1));
        assert_eq!(
            game.check().unwrap(),
            ActionOutcome::PhaseChanged(Phase::Hint1),
            "{rotation:?}"
        );
        assert_eq!(game.active_player_count(), 2);
    }
}

#[test]
fn bet_beyond_balance_changes_nothing() {
    let (game, ids) = seated(&["Ann", "Ben"]);
    guess_all(&game, &[1.0, 2.0]);

    let before = game.snapshot();
    assert_eq!(game.bet(100.5).unwrap_err(), ActionError::InsufficientFunds);
    assert_eq!(game.snapshot(), before);
    assert_eq!(balance(&game, ids[1]), 100.0);
    assert_eq!(game.pot(), 0.0);
    assert_eq!(game.current_bet(), 0.0);

    // Going all in is allowed.
    game.bet(100.0).unwrap();
    assert_eq!(balance(&game, ids[1]), 0.0);
}

#[test]
fn zero_bet_restarts_checks_and_passes_turn() {
    let (game, ids) = seated(&["Ann", "Ben"]);
    guess_all(&game, &[1.0, 2.0]);
    assert_eq!(game.action_index(), 1);

    assert_eq!(game.check().unwrap(), ActionOutcome::NextTurn(0));
    assert_eq!(game.check_count(), 1);

    assert_eq!(game.bet(0.0).unwrap(), ActionOutcome::NextTurn(1));
    assert_eq!(game.check_count(), 0);
    assert_eq!(game.pot(), 0.0);
    assert_eq!(game.current_bet(), 0.0);
    assert_eq!(balance(&game, ids[0]), 100.0);
    assert_eq!(game.phase(), Phase::Bet1);

    assert_eq!(game.check().unwrap(), ActionOutcome::NextTurn(0));
    assert_eq!(
        game.check().unwrap(),
        ActionOutcome::PhaseChanged(Phase::Hint1)
    );
}

#[test]
fn bet_amount_errors() {
    let (game, _) = seated(&["Ann", "Ben"]);

    assert_eq!(game.bet(5.0).unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.check().unwrap_err(), ActionError::InvalidState);

    guess_all(&game, &[1.0, 2.0]);
    assert_eq!(game.bet(-1.0).unwrap_err(), ActionError::InvalidAmount);
    assert_eq!(game.bet(f64::NAN).unwrap_err(), ActionError::InvalidAmount);

    let empty = Game::new(GameOptions::default());
    empty.advance_phase().unwrap();
    assert_eq!(empty.check().unwrap_err(), ActionError::NoPlayers);
}

#[test]
fn live_bet_is_the_largest_single_contribution() {
    let (game, _) = seated(&["Ann", "Ben", "Cal"]);
    guess_all(&game, &[1.0, 2.0, 3.0]);

    game.bet(10.0).unwrap();
    game.bet(4.0).unwrap();
    assert_eq!(game.current_bet(), 10.0);
    game.bet(12.5).unwrap();
    assert_eq!(game.current_bet(), 12.5);
    assert_eq!(game.pot(), 26.5);
}

#[test]
fn fold_to_single_player_jumps_to_answer_from_any_phase() {
    for phase in [
        Phase::Bet1,
        Phase::Hint1,
        Phase::Bet2,
        Phase::Hint2,
        Phase::Bet3,
    ] {
        let (game, _) = seated(&["Ann", "Ben"]);
        guess_all(&game, &[1.0, 2.0]);
        advance_to(&game, phase);

        assert_eq!(
            game.fold().unwrap(),
            ActionOutcome::PhaseChanged(Phase::Answer),
            "fold from {phase:?}"
        );
        assert_eq!(game.phase(), Phase::Answer);
    }
}

#[test]
fn fold_errors() {
    let (game, _) = seated(&["Ann", "Ben"]);
    guess_all(&game, &[1.0, 2.0]);
    advance_to(&game, Phase::Answer);

    assert_eq!(game.fold().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn sequential_rotation_stalls_on_folded_player() {
    let (game, _) = seated(&["Ann", "Ben", "Cal"]);
    guess_all(&game, &[1.0, 2.0, 3.0]);

    game.bet(5.0).unwrap(); // Cal
    game.fold().unwrap(); // Ann
    game.bet(5.0).unwrap(); // Ben
    assert_eq!(game.bet(5.0).unwrap(), ActionOutcome::NextTurn(0)); // Cal

    let before = game.snapshot();
    assert_eq!(game.check().unwrap_err(), ActionError::Folded);
    assert_eq!(game.bet(1.0).unwrap_err(), ActionError::Folded);
    assert_eq!(game.fold().unwrap_err(), ActionError::Folded);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn skip_folded_rotation_passes_over_folded_player() {
    let options = GameOptions::default().with_betting_rotation(BettingRotation::SkipFolded);
    let (game, _) = seated_with(options, &["Ann", "Ben", "Cal"]);
    guess_all(&game, &[1.0, 2.0, 3.0]);

    game.bet(5.0).unwrap(); // Cal
    game.fold().unwrap(); // Ann
    game.bet(5.0).unwrap(); // Ben
    assert_eq!(game.bet(5.0).unwrap(), ActionOutcome::NextTurn(1)); // Cal
}

#[test]
fn tied_guesses_split_the_pot() {
    let (game, ids) = seated(&["Ann", "Ben"]);
    guess_all(&game, &[3.0, 7.0]);

    game.bet(10.0).unwrap(); // Ben
    game.bet(5.0).unwrap(); // Ann
    advance_to(&game, Phase::Answer);

    let settlement = game.award_winner(5.0).unwrap();
    assert_eq!(settlement.kind, SettlementKind::Closest);
    assert_eq!(settlement.pot, 15.0);
    assert!(settlement.is_split());
    assert_eq!(settlement.winners().collect::<Vec<_>>(), ids);
    assert!(settlement.payouts.iter().all(|p| p.amount == 7.5));
    assert!(settlement.payouts.iter().all(|p| p.distance == 2.0));

    assert_eq!(balance(&game, ids[0]), 102.5);
    assert_eq!(balance(&game, ids[1]), 97.5);
    assert_eq!(game.pot(), 0.0);
    assert_eq!(game.phase(), Phase::Answer);
}

#[test]
fn closest_guess_takes_the_pot() {
    let (game, ids) = seated(&["Ann", "Ben"]);
    guess_all(&game, &[2.0, 9.0]);

    game.bet(10.0).unwrap();
    game.bet(10.0).unwrap();
    advance_to(&game, Phase::Answer);

    let settlement = game.award_winner(5.0).unwrap();
    assert_eq!(settlement.winners().collect::<Vec<_>>(), [ids[0]]);
    assert_eq!(settlement.payouts[0].distance, 3.0);
    assert_eq!(settlement.payouts[0].guess, Some(2.0));
    assert_eq!(balance(&game, ids[0]), 110.0);
    assert_eq!(balance(&game, ids[1]), 90.0);
}

#[test]
fn last_player_standing_takes_pot_regardless_of_guess() {
    let (game, ids) = seated(&["Ann", "Ben", "Cal"]);
    guess_all(&game, &[1000.0, 5.0, 5.0]);

    game.bet(10.0).unwrap(); // Cal
    game.bet(10.0).unwrap(); // Ann
    game.fold().unwrap(); // Ben
    assert_eq!(
        game.fold().unwrap(), // Cal
        ActionOutcome::PhaseChanged(Phase::Answer)
    );

    let settlement = game.award_winner(5.0).unwrap();
    assert_eq!(settlement.kind, SettlementKind::LastStanding);
    assert_eq!(settlement.winners().collect::<Vec<_>>(), [ids[0]]);
    assert_eq!(balance(&game, ids[0]), 110.0);
    assert_eq!(balance(&game, ids[2]), 90.0);
}

#[test]
fn missing_guess_never_beats_a_submitted_one() {
    let (game, ids) = seated(&["Ann", "Ben", "Cal"]);
    game.submit_guess(100.0).unwrap();
    // Skip the remaining guessers.
    game.advance_phase().unwrap();

    game.bet(30.0).unwrap(); // Ben
    game.bet(30.0).unwrap(); // Cal
    game.bet(30.0).unwrap(); // Ann
    advance_to(&game, Phase::Answer);

    let settlement = game.award_winner(0.0).unwrap();
    assert_eq!(settlement.winners().collect::<Vec<_>>(), [ids[0]]);
    assert_eq!(balance(&game, ids[0]), 160.0);
}

#[test]
fn settling_with_everyone_folded_keeps_pot() {
    let (game, ids) = seated(&["Ann"]);
    assert_eq!(
        game.submit_guess(5.0).unwrap(),
        ActionOutcome::PhaseChanged(Phase::Bet1)
    );
    assert_eq!(game.bet(4.0).unwrap(), ActionOutcome::NextTurn(0));
    assert_eq!(
        game.fold().unwrap(),
        ActionOutcome::PhaseChanged(Phase::Answer)
    );

    assert_eq!(
        game.award_winner(1.0).unwrap_err(),
        SettleError::NoActivePlayers
    );
    assert_eq!(game.pot(), 4.0);
    assert_eq!(balance(&game, ids[0]), 96.0);
    assert_eq!(game.phase(), Phase::Answer);
}

#[test]
fn settlement_errors() {
    let (game, _) = seated(&["Ann", "Ben"]);
    assert_eq!(game.award_winner(1.0).unwrap_err(), SettleError::InvalidState);

    advance_to(&game, Phase::Answer);
    assert_eq!(
        game.award_winner(f64::NAN).unwrap_err(),
        SettleError::InvalidAnswer
    );

    let deck = QuestionDeck::new();
    assert_eq!(
        game.award_from(&deck).unwrap_err(),
        SettleError::QuestionNotFound(0)
    );
}

#[test]
fn award_from_uses_current_question_answer() {
    let deck: QuestionDeck = [
        Question::new("Legs on a spider?", "More than six", "Fewer than ten", 8.0),
        Question::new("Planets?", "Pluto is out", "Single digit", 8.0),
    ]
    .into_iter()
    .collect();

    let (game, ids) = seated(&["Ann", "Ben"]);
    assert_eq!(game.current_question(&deck).unwrap().text, "Legs on a spider?");
    assert!(game.has_next_question(&deck));

    guess_all(&game, &[8.0, 6.0]);
    game.bet(20.0).unwrap();
    advance_to(&game, Phase::Answer);

    let settlement = game.award_from(&deck).unwrap();
    assert_eq!(settlement.correct_answer, 8.0);
    assert_eq!(settlement.winners().collect::<Vec<_>>(), [ids[0]]);

    game.start_new_question().unwrap();
    assert_eq!(game.current_question(&deck).unwrap().ordinal, 1);
    assert!(!game.has_next_question(&deck));
}

#[test]
fn new_question_clears_round_and_rotates_dealer() {
    let (game, ids) = seated(&["Ann", "Ben", "Cal"]);
    game.fold().unwrap(); // Ann
    game.submit_guess(4.0).unwrap(); // Ben
    game.submit_guess(5.0).unwrap(); // Cal
    game.bet(10.0).unwrap();

    assert_eq!(game.start_new_question().unwrap(), 1);
    assert_eq!(game.question_index(), 1);
    assert_eq!(game.dealer_index(), 1);
    assert_eq!(game.action_index(), 2);
    assert_eq!(game.phase(), Phase::Guessing);
    assert_eq!(game.pot(), 0.0);
    assert_eq!(game.current_bet(), 0.0);
    assert_eq!(game.check_count(), 0);
    for player in game.players() {
        assert_eq!(player.guess(), None);
        assert!(!player.has_guessed());
        assert!(!player.is_folded());
    }
    // The unsettled pot stays with nobody.
    assert_eq!(balance(&game, ids[2]), 90.0);

    game.start_new_question().unwrap();
    assert_eq!((game.dealer_index(), game.action_index()), (2, 0));
    game.start_new_question().unwrap();
    assert_eq!((game.dealer_index(), game.action_index()), (0, 1));
}

#[test]
fn new_question_requires_players() {
    let game = Game::new(GameOptions::default());
    assert_eq!(game.start_new_question().unwrap_err(), PhaseError::NoPlayers);
    assert_eq!(game.question_index(), 0);
}

#[test]
fn single_player_guess_goes_straight_to_betting() {
    let (game, _) = seated(&["Ann"]);
    assert_eq!(
        game.submit_guess(1.0).unwrap(),
        ActionOutcome::PhaseChanged(Phase::Bet1)
    );
    assert_eq!(
        game.check().unwrap(),
        ActionOutcome::PhaseChanged(Phase::Hint1)
    );
}

#[test]
fn question_hints_follow_phase() {
    let question = Question::new("Bones in a human hand?", "More than 20", "Fewer than 30", 27.0);

    assert!(question.revealed_hints(Phase::Guessing).is_empty());
    assert!(question.revealed_hints(Phase::Bet1).is_empty());
    assert_eq!(question.revealed_hints(Phase::Hint1), ["More than 20"]);
    assert_eq!(question.revealed_hints(Phase::Bet3).len(), 2);
    assert_eq!(question.hint2(), "Fewer than 30");
    assert_eq!(question.revealed_answer(Phase::Bet3), None);
    assert_eq!(question.revealed_answer(Phase::Answer), Some(27.0));
}

#[test]
fn deck_shuffle_is_deterministic_and_renumbers() {
    let questions: Vec<Question> = (0..10)
        .map(|i| Question::new(format!("Q{i}"), "a", "b", f64::from(i)))
        .collect();

    let mut first: QuestionDeck = questions.iter().cloned().collect();
    let mut second: QuestionDeck = questions.into_iter().collect();
    first.shuffle(7);
    second.shuffle(7);

    assert_eq!(first, second);
    assert_eq!(first.len(), 10);
    for (ordinal, question) in first.iter().enumerate() {
        assert_eq!(question.ordinal, ordinal);
        assert_eq!(first.question(ordinal), Some(question));
    }
}

#[test]
fn deck_push_assigns_ordinals() {
    let mut deck = QuestionDeck::new();
    assert!(deck.is_empty());
    assert_eq!(deck.push(Question::new("a", "b", "c", 1.0)), 0);
    assert_eq!(deck.push(Question::new("d", "e", "f", 2.0)), 1);
    assert_eq!(deck.question(1).unwrap().hint1(), "e");
    assert_eq!(deck.question(2), None);
}
