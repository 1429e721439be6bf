pub mod visa_quiz;
