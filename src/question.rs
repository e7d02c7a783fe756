//! Question records and question sources.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::game::Phase;

/// Number of hints attached to each question.
pub const HINT_COUNT: usize = 2;

/// A quiz question with two progressive hints and a numeric answer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Question {
    /// Position of the question in its source.
    pub ordinal: usize,
    /// The question text.
    pub text: String,
    /// Hints in reveal order.
    pub hints: [String; HINT_COUNT],
    /// The correct numeric answer.
    pub correct_answer: f64,
}

impl Question {
    /// Creates a new question with ordinal 0.
    ///
    /// The ordinal is reassigned when the question is pushed into a
    /// [`QuestionDeck`].
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        hint1: impl Into<String>,
        hint2: impl Into<String>,
        correct_answer: f64,
    ) -> Self {
        Self {
            ordinal: 0,
            text: text.into(),
            hints: [hint1.into(), hint2.into()],
            correct_answer,
        }
    }

    /// Returns the first hint.
    #[must_use]
    pub fn hint1(&self) -> &str {
        &self.hints[0]
    }

    /// Returns the second hint.
    #[must_use]
    pub fn hint2(&self) -> &str {
        &self.hints[1]
    }

    /// Returns the hints visible during the given phase.
    ///
    /// ```
    /// use hintbet::{Phase, Question};
    ///
    /// let q = Question::new("How many moons?", "More than one", "Fewer than three", 2.0);
    /// assert!(q.revealed_hints(Phase::Bet1).is_empty());
    /// assert_eq!(q.revealed_hints(Phase::Bet2), ["More than one"]);
    /// assert_eq!(q.revealed_hints(Phase::Answer).len(), 2);
    /// ```
    #[must_use]
    pub fn revealed_hints(&self, phase: Phase) -> &[String] {
        &self.hints[..phase.hints_revealed()]
    }

    /// Returns the answer if the phase reveals it.
    #[must_use]
    pub fn revealed_answer(&self, phase: Phase) -> Option<f64> {
        (phase == Phase::Answer).then_some(self.correct_answer)
    }
}

/// A read-only supplier of questions addressed by ordinal.
pub trait QuestionSource {
    /// Returns the question with the given ordinal.
    fn question(&self, ordinal: usize) -> Option<&Question>;

    /// Returns the number of questions available.
    fn len(&self) -> usize;

    /// Returns whether the source has no questions.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An in-memory, ordered question source.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestionDeck {
    questions: Vec<Question>,
}

impl QuestionDeck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            questions: Vec::new(),
        }
    }

    /// Appends a question, assigning it the next ordinal.
    ///
    /// Returns the assigned ordinal.
    pub fn push(&mut self, mut question: Question) -> usize {
        let ordinal = self.questions.len();
        question.ordinal = ordinal;
        self.questions.push(question);
        ordinal
    }

    /// Shuffles the deck with the given seed and renumbers the ordinals.
    ///
    /// The same seed always produces the same order.
    pub fn shuffle(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.questions.shuffle(&mut rng);
        self.renumber();
    }

    /// Returns an iterator over the questions in ordinal order.
    pub fn iter(&self) -> core::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    fn renumber(&mut self) {
        for (ordinal, question) in self.questions.iter_mut().enumerate() {
            question.ordinal = ordinal;
        }
    }
}

impl FromIterator<Question> for QuestionDeck {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> Self {
        let mut deck = Self {
            questions: iter.into_iter().collect(),
        };
        deck.renumber();
        deck
    }
}

impl<'a> IntoIterator for &'a QuestionDeck {
    type Item = &'a Question;
    type IntoIter = core::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

impl QuestionSource for QuestionDeck {
    fn question(&self, ordinal: usize) -> Option<&Question> {
        self.questions.get(ordinal)
    }

    fn len(&self) -> usize {
        self.questions.len()
    }
}
