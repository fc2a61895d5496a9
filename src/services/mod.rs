pub mod announcements;
pub mod clock;
pub mod quizzes;
