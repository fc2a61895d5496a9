use crate::models::quiz::{NewQuiz, QuizPatch};
use crate::services::quizzes::QuizFilter;
use crate::utils::time::deserialize_optional_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateQuizRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    #[schema(value_type = String, format = DateTime, example = "2024-12-15T23:59:59.000Z")]
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateQuizRequest {
    pub title: Option<String>,
    pub course: Option<String>,
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    #[schema(value_type = String, format = DateTime, example = "2024-12-15T23:59:59.000Z")]
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuizListQuery {
    /// Case-insensitive substring of the course name.
    pub course: Option<String>,
    /// Only the literal `true` selects upcoming quizzes.
    pub upcoming: Option<String>,
}

impl QuizListQuery {
    /// Builds the query from raw pairs; a repeated key keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "course" => &mut query.course,
                "upcoming" => &mut query.upcoming,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// `upcoming=true` wins over `course`; an empty course means no filter.
    pub fn filter(&self) -> QuizFilter {
        if self.upcoming.as_deref() == Some("true") {
            return QuizFilter::Upcoming;
        }

        match self.course.as_deref() {
            Some(course) if !course.is_empty() => QuizFilter::Course(course.to_string()),
            _ => QuizFilter::All,
        }
    }
}

impl<'de> Deserialize<'de> for QuizListQuery {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<(String, String)>::deserialize(deserializer).map(Self::from_pairs)
    }
}

impl From<CreateQuizRequest> for NewQuiz {
    fn from(request: CreateQuizRequest) -> Self {
        Self {
            title: request.title,
            course: request.course,
            topic: request.topic,
            due_date: request.due_date,
        }
    }
}

impl From<UpdateQuizRequest> for QuizPatch {
    fn from(request: UpdateQuizRequest) -> Self {
        Self {
            title: request.title,
            course: request.course,
            topic: request.topic,
            due_date: request.due_date,
        }
    }
}
