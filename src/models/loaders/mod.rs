pub mod quiz_loader;

pub use quiz_loader::{load_quiz_file, parse_quiz, QuizFormat};
