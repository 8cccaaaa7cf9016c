//! Stress self-assessment quiz
//!
//! Point-sum scoring over the question bank, with severity banding.

use crate::data::questions::QuestionBank;

/// Number of questions in the assessment
pub const QUESTION_COUNT: usize = 5;
/// Highest score a single answer can carry
pub const MAX_ANSWER: u8 = 4;

/// Severity bands derived from the score percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StressBand {
    Low,
    Moderate,
    Elevated,
    High,
}

impl StressBand {
    /// Map a percentage (0-100) to its band, inclusive thresholds
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            0..=25 => StressBand::Low,
            26..=50 => StressBand::Moderate,
            51..=75 => StressBand::Elevated,
            _ => StressBand::High,
        }
    }

    /// Short display name
    pub fn name(&self) -> &'static str {
        match self {
            StressBand::Low => "Low",
            StressBand::Moderate => "Moderate",
            StressBand::Elevated => "Elevated",
            StressBand::High => "High",
        }
    }

    /// Fixed advisory message for the band
    pub fn advice(&self) -> &'static str {
        match self {
            StressBand::Low => {
                "Your stress level is low. Keep nurturing the habits that hold you steady."
            }
            StressBand::Moderate => {
                "Moderate stress. Short daily practices, like a breathing cycle or a ten-minute meditation, will help."
            }
            StressBand::Elevated => {
                "Elevated stress. Build in regular recovery time and talk things through with someone you trust."
            }
            StressBand::High => {
                "High stress. Be gentle with yourself, prioritise rest, and consider reaching out to a professional."
            }
        }
    }
}

/// The computed outcome of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StressResult {
    /// 100 * sum / max achievable sum
    pub percent: u32,
    pub band: StressBand,
}

/// Quiz answer accumulator
///
/// Holds one optional answer per question. Never persisted; the result
/// is recomputed on every submission.
#[derive(Debug, Clone, Default)]
pub struct Quiz {
    answers: [Option<u8>; QUESTION_COUNT],
    result: Option<StressResult>,
}

impl Quiz {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer for a question (0-based index)
    ///
    /// Out-of-range questions or scores are ignored.
    pub fn answer(&mut self, question: usize, score: u8) {
        if question < QUESTION_COUNT && score <= MAX_ANSWER {
            self.answers[question] = Some(score);
        }
    }

    /// Get the recorded answer for a question
    pub fn answer_for(&self, question: usize) -> Option<u8> {
        self.answers.get(question).copied().flatten()
    }

    /// How many questions have been answered
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// True once every question has an answer
    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(|a| a.is_some())
    }

    /// The result of the last submission, if any
    pub fn result(&self) -> Option<StressResult> {
        self.result
    }

    /// Score the quiz. Returns None until every question is answered.
    pub fn submit(&mut self, bank: &QuestionBank) -> Option<StressResult> {
        if !self.is_complete() {
            return None;
        }

        let sum: u32 = self.answers.iter().flatten().map(|&a| a as u32).sum();
        let max = bank.max_score().max(1);
        let percent = 100 * sum / max;

        let result = StressResult {
            percent,
            band: StressBand::from_percent(percent),
        };
        self.result = Some(result);
        log::info!("Quiz submitted: {}% ({})", percent, result.band.name());
        Some(result)
    }

    /// Clear all answers and the previous result
    pub fn retake(&mut self) {
        self.answers = [None; QUESTION_COUNT];
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::questions::default_question_bank;

    fn answered(scores: [u8; QUESTION_COUNT]) -> Quiz {
        let mut quiz = Quiz::new();
        for (i, &s) in scores.iter().enumerate() {
            quiz.answer(i, s);
        }
        quiz
    }

    #[test]
    fn test_submit_requires_all_answers() {
        let bank = default_question_bank();
        let mut quiz = Quiz::new();
        quiz.answer(0, 2);
        assert!(quiz.submit(&bank).is_none(), "Partial quiz must not score");
        assert!(quiz.result().is_none());
    }

    #[test]
    fn test_half_score_is_moderate() {
        let bank = default_question_bank();
        let mut quiz = answered([2, 2, 2, 2, 2]); // Sum 10 of 20
        let result = quiz.submit(&bank).unwrap();
        assert_eq!(result.percent, 50);
        assert_eq!(result.band, StressBand::Moderate);
    }

    #[test]
    fn test_extremes() {
        let bank = default_question_bank();

        let mut quiz = answered([0; QUESTION_COUNT]);
        let result = quiz.submit(&bank).unwrap();
        assert_eq!(result.percent, 0);
        assert_eq!(result.band, StressBand::Low);

        let mut quiz = answered([4; QUESTION_COUNT]);
        let result = quiz.submit(&bank).unwrap();
        assert_eq!(result.percent, 100);
        assert_eq!(result.band, StressBand::High);
    }

    #[test]
    fn test_band_thresholds_are_inclusive() {
        assert_eq!(StressBand::from_percent(25), StressBand::Low);
        assert_eq!(StressBand::from_percent(26), StressBand::Moderate);
        assert_eq!(StressBand::from_percent(50), StressBand::Moderate);
        assert_eq!(StressBand::from_percent(75), StressBand::Elevated);
        assert_eq!(StressBand::from_percent(76), StressBand::High);
    }

    #[test]
    fn test_retake_clears_everything() {
        let bank = default_question_bank();
        let mut quiz = answered([1; QUESTION_COUNT]);
        quiz.submit(&bank);
        quiz.retake();
        assert_eq!(quiz.answered_count(), 0);
        assert!(quiz.result().is_none());
    }

    #[test]
    fn test_out_of_range_answers_ignored() {
        let mut quiz = Quiz::new();
        quiz.answer(99, 2);
        quiz.answer(0, 9);
        assert_eq!(quiz.answered_count(), 0);
    }
}
