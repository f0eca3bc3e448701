mod level;
mod path;
mod question;
mod session;
mod settings;
mod token;

pub use level::{Level, LevelError};
pub use path::{PathRange, PathRangeError};
pub use question::{CHOICE_COUNT, Question, QuestionError};
pub use session::{POINTS_PER_CORRECT, QUESTIONS_PER_LEVEL, Session};
pub use settings::{GameSettings, InputMode};
pub use token::SessionToken;
