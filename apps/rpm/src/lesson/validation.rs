use serde::{Deserialize, Serialize};

use crate::lesson::request::LessonPlanRequest;

pub const MIN_MEETINGS: u32 = 1;
pub const MAX_MEETINGS: u32 = 20;

/// A single field that blocks submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Wire name of the field, e.g. `schoolName`.
    pub field: String,
    /// Label shown on the form.
    pub label: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub passed: bool,
    pub issues: Vec<FieldIssue>,
}

impl ValidationResult {
    /// One user-facing sentence listing every issue.
    pub fn summary(&self) -> String {
        if self.issues.is_empty() {
            return String::new();
        }
        let details = self
            .issues
            .iter()
            .map(|issue| format!("{} {}", issue.label, issue.reason))
            .collect::<Vec<_>>()
            .join("; ");
        format!("Data belum lengkap: {details}.")
    }

    #[cfg(test)]
    pub fn has_issue(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

/// Checks a request before it may reach the generator.
///
/// - every identity and curriculum text field is non-empty after trimming
/// - meeting count lies in `[MIN_MEETINGS, MAX_MEETINGS]`
/// - exactly one pedagogy per meeting
/// - the class belongs to the selected level
pub fn validate_request(request: &LessonPlanRequest) -> ValidationResult {
    let required: [(&str, &str, &str); 11] = [
        ("schoolName", "Nama Satuan Pendidikan", request.school_name.as_str()),
        ("principalName", "Nama Kepala Sekolah", request.principal_name.as_str()),
        ("principalNIP", "NIP Kepala Sekolah", request.principal_nip.as_str()),
        ("teacherName", "Nama Guru", request.teacher_name.as_str()),
        ("teacherNIP", "NIP Guru", request.teacher_nip.as_str()),
        ("gradeClass", "Kelas", request.grade_class.as_str()),
        ("subject", "Mata Pelajaran", request.subject.as_str()),
        ("cp", "Capaian Pembelajaran (CP)", request.cp.as_str()),
        ("tp", "Tujuan Pembelajaran (TP)", request.tp.as_str()),
        ("material", "Materi Pelajaran", request.material.as_str()),
        ("duration", "Durasi per Pertemuan", request.duration.as_str()),
    ];

    let mut issues: Vec<FieldIssue> = required
        .iter()
        .filter(|(_, _, value)| value.trim().is_empty())
        .map(|(field, label, _)| issue(field, label, "wajib diisi"))
        .collect();

    let class = request.grade_class.trim();
    if !class.is_empty() && !request.level.has_class(class) {
        issues.push(issue(
            "gradeClass",
            "Kelas",
            &format!(
                "{class} tidak tersedia untuk jenjang {}",
                request.level.label()
            ),
        ));
    }

    if !(MIN_MEETINGS..=MAX_MEETINGS).contains(&request.meeting_count) {
        issues.push(issue(
            "meetingCount",
            "Jumlah Pertemuan",
            &format!("harus antara {MIN_MEETINGS} dan {MAX_MEETINGS}"),
        ));
    } else if request.pedagogies.len() != request.meeting_count as usize {
        issues.push(issue(
            "pedagogies",
            "Praktik Pedagogis",
            &format!(
                "harus dipilih untuk setiap pertemuan ({} dari {})",
                request.pedagogies.len(),
                request.meeting_count
            ),
        ));
    }

    ValidationResult {
        passed: issues.is_empty(),
        issues,
    }
}

fn issue(field: &str, label: &str, reason: &str) -> FieldIssue {
    FieldIssue {
        field: field.to_string(),
        label: label.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::vocab::{EducationLevel, Pedagogy};
    use crate::test_helpers::sample_request;

    #[test]
    fn test_complete_request_passes() {
        let result = validate_request(&sample_request());
        assert!(result.passed, "unexpected issues: {:?}", result.issues);
        assert!(result.summary().is_empty());
    }

    #[test]
    fn test_each_required_field_is_checked() {
        let blanks: [(&str, fn(&mut LessonPlanRequest)); 11] = [
            ("schoolName", |r| r.school_name.clear()),
            ("principalName", |r| r.principal_name.clear()),
            ("principalNIP", |r| r.principal_nip.clear()),
            ("teacherName", |r| r.teacher_name.clear()),
            ("teacherNIP", |r| r.teacher_nip.clear()),
            ("gradeClass", |r| r.grade_class.clear()),
            ("subject", |r| r.subject.clear()),
            ("cp", |r| r.cp.clear()),
            ("tp", |r| r.tp.clear()),
            ("material", |r| r.material.clear()),
            ("duration", |r| r.duration.clear()),
        ];
        for (field, blank) in blanks {
            let mut request = sample_request();
            blank(&mut request);
            let result = validate_request(&request);
            assert!(!result.passed, "{field} should be required");
            assert!(result.has_issue(field), "{field} not reported");
            assert_eq!(result.issues.len(), 1);
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut request = sample_request();
        request.subject = "   \n".to_string();
        assert!(validate_request(&request).has_issue("subject"));
    }

    #[test]
    fn test_meeting_count_bounds() {
        let mut request = sample_request();
        request.meeting_count = 0;
        request.pedagogies.clear();
        assert!(validate_request(&request).has_issue("meetingCount"));

        request.meeting_count = 21;
        request.pedagogies = vec![Pedagogy::default(); 21];
        assert!(validate_request(&request).has_issue("meetingCount"));

        request.meeting_count = 20;
        request.pedagogies = vec![Pedagogy::default(); 20];
        assert!(validate_request(&request).passed);
    }

    #[test]
    fn test_pedagogy_count_must_match_meetings() {
        let mut request = sample_request();
        request.meeting_count = 3;
        request.pedagogies = vec![Pedagogy::GameBased];
        let result = validate_request(&request);
        assert!(result.has_issue("pedagogies"));
        assert!(result.summary().contains("1 dari 3"));
    }

    #[test]
    fn test_class_must_match_level() {
        let mut request = sample_request();
        request.level = EducationLevel::Sma;
        request.grade_class = "5".to_string();
        let result = validate_request(&request);
        assert!(result.has_issue("gradeClass"));
        assert!(result.summary().contains("jenjang SMA"));
    }

    #[test]
    fn test_summary_lists_every_issue() {
        let mut request = sample_request();
        request.school_name.clear();
        request.tp.clear();
        let summary = validate_request(&request).summary();
        assert!(summary.starts_with("Data belum lengkap:"));
        assert!(summary.contains("Nama Satuan Pendidikan wajib diisi"));
        assert!(summary.contains("Tujuan Pembelajaran (TP) wajib diisi"));
    }
}
