use serde::{Deserialize, Serialize};

use crate::lesson::vocab::{join_labels, EducationLevel, GraduateDimension, PancaCinta, Pedagogy};

/// Everything the teacher filled in, as handed to the generator and renderer.
///
/// Wire format is camelCase JSON (`schoolName`, `teacherNIP`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonPlanRequest {
    pub school_name: String,
    pub teacher_name: String,
    #[serde(rename = "teacherNIP")]
    pub teacher_nip: String,
    pub principal_name: String,
    #[serde(rename = "principalNIP")]
    pub principal_nip: String,
    pub level: EducationLevel,
    pub grade_class: String,
    pub subject: String,
    /// Capaian Pembelajaran, echoed verbatim.
    pub cp: String,
    /// Tujuan Pembelajaran, echoed verbatim.
    pub tp: String,
    pub material: String,
    pub meeting_count: u32,
    /// Label such as "2 x 35 menit".
    pub duration: String,
    /// One entry per meeting, in meeting order.
    pub pedagogies: Vec<Pedagogy>,
    #[serde(default)]
    pub dimensions: Vec<GraduateDimension>,
    #[serde(default)]
    pub panca_cinta: Vec<PancaCinta>,
}

impl LessonPlanRequest {
    /// The "Praktik Pedagogis" line: every meeting's pedagogy, in order.
    pub fn pedagogy_line(&self) -> String {
        join_labels(&self.pedagogies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_request;

    #[test]
    fn test_request_uses_camel_case_wire_names() {
        let value = serde_json::to_value(sample_request()).unwrap();
        assert!(value.get("schoolName").is_some());
        assert!(value.get("teacherNIP").is_some());
        assert!(value.get("principalNIP").is_some());
        assert!(value.get("pancaCinta").is_some());
        assert!(value.get("meetingCount").is_some());
    }

    #[test]
    fn test_request_deserializes_original_form_payload() {
        let json = serde_json::json!({
            "schoolName": "MIN 1 Banyuwangi",
            "teacherName": "Siti Aminah",
            "teacherNIP": "198001012005012001",
            "principalName": "Ahmad Fauzi",
            "principalNIP": "197501012000031001",
            "level": "SD",
            "gradeClass": "5",
            "subject": "IPAS",
            "cp": "Peserta didik memahami ekosistem.",
            "tp": "Menjelaskan rantai makanan.",
            "material": "Rantai Makanan",
            "meetingCount": 2,
            "duration": "2 x 35 menit",
            "pedagogies": ["Inkuiri-Discovery Learning", "Game Based Learning"],
            "dimensions": ["Kreativitas"],
            "pancaCinta": ["Cinta Lingkungan"]
        });
        let request: LessonPlanRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.level, EducationLevel::Sd);
        assert_eq!(request.pedagogies[1], Pedagogy::GameBased);
        assert_eq!(request.panca_cinta, vec![PancaCinta::LoveOfEnvironment]);
    }

    #[test]
    fn test_missing_multi_selects_default_to_empty() {
        let mut value = serde_json::to_value(sample_request()).unwrap();
        let object = value.as_object_mut().unwrap();
        object.remove("dimensions");
        object.remove("pancaCinta");
        let request: LessonPlanRequest = serde_json::from_value(value).unwrap();
        assert!(request.dimensions.is_empty());
        assert!(request.panca_cinta.is_empty());
    }

    #[test]
    fn test_pedagogy_line_keeps_meeting_order() {
        let mut request = sample_request();
        request.meeting_count = 3;
        request.pedagogies = vec![
            Pedagogy::StationLearning,
            Pedagogy::ProjectBased,
            Pedagogy::InquiryDiscovery,
        ];
        assert_eq!(
            request.pedagogy_line(),
            "Station Learning, Project Based Learning (PjBL), Inkuiri-Discovery Learning"
        );
    }
}
