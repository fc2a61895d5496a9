pub mod announcements;
pub mod health;
pub mod quizzes;
