//! Stress self-assessment question bank
//!
//! Five questions, each with five ordinal options valued 0-4. The quiz
//! scorer works on option indices; only the text lives here.

use serde::{Deserialize, Serialize};

/// A single assessment question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Question ID (1-based, stable across reordering)
    pub id: u8,
    /// The question text
    pub prompt: String,
    /// Ordinal answer labels; the option index is the score (0-4)
    pub options: Vec<String>,
}

/// The full ordered question set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionBank {
    pub questions: Vec<Question>,
}

impl QuestionBank {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Highest achievable total score
    pub fn max_score(&self) -> u32 {
        self.questions
            .iter()
            .map(|q| q.options.len().saturating_sub(1) as u32)
            .sum()
    }
}

/// Shared ordinal labels for the default questions
fn ordinal_options() -> Vec<String> {
    ["Never", "Rarely", "Sometimes", "Often", "Very often"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Create the default question bank (hardcoded fallback)
pub fn default_question_bank() -> QuestionBank {
    let prompts = [
        "How often have you felt unable to control the important things in your life?",
        "How often have you felt nervous or stressed?",
        "How often have you found you could not cope with all the things you had to do?",
        "How often have you had trouble relaxing, even when you had the chance to?",
        "How often has tension interfered with your sleep?",
    ];

    QuestionBank {
        questions: prompts
            .iter()
            .enumerate()
            .map(|(i, prompt)| Question {
                id: (i + 1) as u8,
                prompt: prompt.to_string(),
                options: ordinal_options(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bank_shape() {
        let bank = default_question_bank();
        assert_eq!(bank.len(), 5, "Expected five questions");
        for q in &bank.questions {
            assert_eq!(q.options.len(), 5, "Question {} must have five options", q.id);
        }
        assert_eq!(bank.max_score(), 20);
    }

    #[test]
    fn test_question_ids_are_sequential() {
        let bank = default_question_bank();
        for (i, q) in bank.questions.iter().enumerate() {
            assert_eq!(q.id as usize, i + 1);
        }
    }
}
