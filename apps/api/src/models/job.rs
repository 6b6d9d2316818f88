use serde::{Deserialize, Serialize};

/// Column order of the backing CSV file. Matches the field order of `JobRecord`.
pub const JOB_COLUMNS: [&str; 10] = [
    "id",
    "title",
    "company",
    "location",
    "experienceLevel",
    "skills",
    "employmentType",
    "salary",
    "description",
    "category",
];

/// A stored job posting. One CSV row, one JSON object.
///
/// The aliases accept the column names written by older versions of the
/// board (`Experience`, `Skills`, `type`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: u64,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(alias = "Experience")]
    pub experience_level: String,
    #[serde(alias = "Skills")]
    pub skills: String,
    #[serde(alias = "type")]
    pub employment_type: String,
    pub salary: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Creation payload. Every field is optional on the wire so that a missing
/// field is reported as a validation error rather than a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, alias = "Experience")]
    pub experience_level: Option<String>,
    #[serde(default, alias = "Skills")]
    pub skills: Option<String>,
    #[serde(default, alias = "type")]
    pub employment_type: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl NewJob {
    /// Returns the names of required fields that are absent or blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("company", &self.company),
            ("location", &self.location),
            ("experienceLevel", &self.experience_level),
            ("skills", &self.skills),
            ("employmentType", &self.employment_type),
            ("salary", &self.salary),
            ("description", &self.description),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect()
    }

    /// Builds the stored record. Callers check `missing_fields` first.
    pub fn into_record(self, id: u64) -> JobRecord {
        JobRecord {
            id,
            title: self.title.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            experience_level: self.experience_level.unwrap_or_default(),
            skills: self.skills.unwrap_or_default(),
            employment_type: self.employment_type.unwrap_or_default(),
            salary: self.salary.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category: self.category.filter(|c| !c.trim().is_empty()),
        }
    }
}

/// Title-mode recommendation row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleRecommendation {
    pub title: String,
    pub company: String,
    pub location: String,
    pub category: Option<String>,
}

impl From<&JobRecord> for TitleRecommendation {
    fn from(job: &JobRecord) -> Self {
        TitleRecommendation {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            category: job.category.clone(),
        }
    }
}

/// Skills-mode recommendation row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsRecommendation {
    pub title: String,
    pub company: String,
    pub location: String,
    pub skills: String,
}

impl From<&JobRecord> for SkillsRecommendation {
    fn from(job: &JobRecord) -> Self {
        SkillsRecommendation {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            skills: job.skills.clone(),
        }
    }
}
