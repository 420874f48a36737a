use crate::Error;
use serde::{Deserialize, Serialize};

/// One education entry, displayed in the main column's timeline
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub years: String,
    pub school: String,
    pub location: String,
}

/// One experience entry, displayed in the main column's timeline
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub years: String,
    pub position: String,
    pub description: String,
}

/// A named skill with a proficiency level from 0 to 100. Levels above 100
/// are clamped when the skill bar is laid out.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

/// The flat record of resume fields supplied by the form handler.
///
/// Sequence order is display order: entries render in the order they were
/// submitted. A record is constructed per request, consumed once by the
/// layout engine, and discarded with the resulting [`Layout`](crate::Layout).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl ResumeRecord {
    /// Check that the required fields are present. `name` and `title` must
    /// be non-blank; every other field may be empty and simply renders
    /// nothing. Called by the engine before any drawing begins.
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::MissingField("name"));
        }
        if self.title.trim().is_empty() {
            return Err(Error::MissingField("title"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_required_fields() {
        let mut record = ResumeRecord {
            name: "Jane Doe".into(),
            title: "Engineer".into(),
            ..Default::default()
        };
        assert!(record.validate().is_ok());

        record.name = "   ".into();
        assert!(matches!(
            record.validate(),
            Err(Error::MissingField("name"))
        ));

        record.name = "Jane Doe".into();
        record.title.clear();
        assert!(matches!(
            record.validate(),
            Err(Error::MissingField("title"))
        ));
    }

    #[test]
    fn deserializes_from_form_json() {
        let json = r#"{
            "name": "Jane Doe",
            "title": "Engineer",
            "skills": [{"name": "Go", "level": 80}],
            "education": [{"years": "2018-2020", "school": "State U", "location": "City"}]
        }"#;
        let record: ResumeRecord = serde_json::from_str(json).expect("record parses");
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.skills[0].level, 80);
        assert!(record.about.is_empty());
        assert!(record.experience.is_empty());
    }
}
