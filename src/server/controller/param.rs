use serde::Deserialize;

/// Query parameters identifying the entity to delete.
#[derive(Deserialize)]
pub struct NameParam {
    pub name: String,
}

#[derive(Deserialize)]
pub struct CourseParam {
    pub course: String,
}

#[derive(Deserialize)]
pub struct GroupParam {
    pub group: String,
}

/// Query parameters of the participation report.
#[derive(Deserialize)]
pub struct ParticipationParam {
    pub group: String,
    pub course: String,
}

/// Query parameters of the age report.
///
/// A missing or non-numeric `age` is rejected by the extractor before the handler runs.
#[derive(Deserialize)]
pub struct AgeParam {
    pub age: i32,
    pub course: String,
}
