#![forbid(unsafe_code)]

pub mod generator;
pub mod progression;

pub use generator::{generate_question, generate_question_with};
pub use progression::{
    AnswerOutcome, NextAction, Verdict, advance_level, continue_path, evaluate_answer,
};
