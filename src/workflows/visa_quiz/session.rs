use super::domain::{AnswerDraft, QuestionKey, QuizAnswers};
use super::questions::{question, QuestionKind, QuizQuestion, QUESTION_COUNT};
use super::share::{decode_answers, encode_answers};
use super::QuizError;

/// Where the quiz currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    Question(QuestionKey),
    Complete,
}

impl QuizStep {
    fn index(self) -> usize {
        match self {
            QuizStep::Question(key) => key.position(),
            QuizStep::Complete => QUESTION_COUNT,
        }
    }

    fn from_index(index: usize) -> Self {
        QuestionKey::ordered()
            .get(index)
            .copied()
            .map(QuizStep::Question)
            .unwrap_or(QuizStep::Complete)
    }
}

/// Answer collector for one visitor working through the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    step: QuizStep,
    draft: AnswerDraft,
    resumed: bool,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            step: QuizStep::Question(QuestionKey::Reason),
            draft: AnswerDraft::default(),
            resumed: false,
        }
    }

    /// Starts directly in `Complete` when the query carries a full answer set.
    pub fn resume(query: &str) -> Self {
        match decode_answers(query) {
            Some(answers) => Self {
                step: QuizStep::Complete,
                draft: answers.into(),
                resumed: true,
            },
            None => Self::new(),
        }
    }

    pub fn step(&self) -> QuizStep {
        self.step
    }

    pub fn draft(&self) -> &AnswerDraft {
        &self.draft
    }

    pub fn is_complete(&self) -> bool {
        self.step == QuizStep::Complete
    }

    /// True when the session was restored from a shared link rather than answered here.
    pub fn was_resumed(&self) -> bool {
        self.resumed
    }

    pub fn current_question(&self) -> Option<QuizQuestion> {
        match self.step {
            QuizStep::Question(key) => Some(question(key)),
            QuizStep::Complete => None,
        }
    }

    pub fn progress_percent(&self) -> u8 {
        let ratio = self.step.index() as f32 / QUESTION_COUNT as f32;
        (ratio * 100.0).round() as u8
    }

    /// Records a choice for the current question and advances.
    pub fn select(&mut self, token: &str) -> Result<QuizStep, QuizError> {
        let key = self.current_key()?;
        if question(key).kind != QuestionKind::Choice {
            return Err(QuizError::NotAChoiceQuestion(key));
        }

        self.draft.set_choice(key, token)?;
        self.step = QuizStep::from_index(key.position() + 1);
        Ok(self.step)
    }

    /// Stores typed nationality text without advancing.
    pub fn enter_nationality(&mut self, value: &str) -> Result<(), QuizError> {
        let key = self.current_key()?;
        if key != QuestionKey::Nationality {
            return Err(QuizError::NotAFreeTextQuestion(key));
        }

        self.draft.set_nationality(value);
        Ok(())
    }

    /// Confirms the nationality question and completes the quiz.
    pub fn proceed(&mut self) -> Result<QuizStep, QuizError> {
        let key = self.current_key()?;
        if key != QuestionKey::Nationality {
            return Err(QuizError::NotAFreeTextQuestion(key));
        }
        if !self.draft.is_answered(QuestionKey::Nationality) {
            return Err(QuizError::NationalityRequired);
        }

        self.step = QuizStep::Complete;
        Ok(self.step)
    }

    /// Steps back one question, keeping the earlier answer. No-op on the first question.
    pub fn back(&mut self) -> Result<QuizStep, QuizError> {
        let key = self.current_key()?;
        self.step = QuizStep::from_index(key.position().saturating_sub(1));
        Ok(self.step)
    }

    /// Clears every answer and starts over.
    pub fn retake(&mut self) {
        *self = Self::new();
    }

    pub fn answers(&self) -> Option<QuizAnswers> {
        if self.is_complete() {
            self.draft.complete()
        } else {
            None
        }
    }

    pub fn share_query(&self) -> Option<String> {
        self.answers().map(|answers| encode_answers(&answers))
    }

    fn current_key(&self) -> Result<QuestionKey, QuizError> {
        match self.step {
            QuizStep::Question(key) => Ok(key),
            QuizStep::Complete => Err(QuizError::AlreadyComplete),
        }
    }
}
