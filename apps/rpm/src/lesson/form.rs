//! Form Collector — the editable draft behind the lesson-plan form.
//!
//! The draft may be incomplete at any time; `submit()` is the only way to
//! turn it into a `LessonPlanRequest`. The pedagogy list is kept in sync with
//! the meeting count on every change, so `pedagogies().len() ==
//! meeting_count()` always holds.

use serde::Serialize;

use crate::lesson::request::LessonPlanRequest;
use crate::lesson::validation::{validate_request, ValidationResult, MAX_MEETINGS};
use crate::lesson::vocab::{EducationLevel, GraduateDimension, PancaCinta, Pedagogy};

/// Form key prefix for the per-meeting pedagogy selects (`pedagogy_0`, ...).
pub const PEDAGOGY_KEY_PREFIX: &str = "pedagogy_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub school_name: String,
    pub teacher_name: String,
    pub teacher_nip: String,
    pub principal_name: String,
    pub principal_nip: String,
    pub level: EducationLevel,
    pub grade_class: String,
    pub subject: String,
    pub cp: String,
    pub tp: String,
    pub material: String,
    pub duration: String,
    meeting_count: u32,
    pedagogies: Vec<Pedagogy>,
    dimensions: Vec<GraduateDimension>,
    panca_cinta: Vec<PancaCinta>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            school_name: String::new(),
            teacher_name: String::new(),
            teacher_nip: String::new(),
            principal_name: String::new(),
            principal_nip: String::new(),
            level: EducationLevel::default(),
            grade_class: String::new(),
            subject: String::new(),
            cp: String::new(),
            tp: String::new(),
            material: String::new(),
            duration: String::new(),
            meeting_count: 1,
            pedagogies: vec![Pedagogy::default()],
            dimensions: Vec::new(),
            panca_cinta: Vec::new(),
        }
    }
}

impl FormState {
    pub fn meeting_count(&self) -> u32 {
        self.meeting_count
    }

    pub fn pedagogies(&self) -> &[Pedagogy] {
        &self.pedagogies
    }

    pub fn dimensions(&self) -> &[GraduateDimension] {
        &self.dimensions
    }

    pub fn panca_cinta(&self) -> &[PancaCinta] {
        &self.panca_cinta
    }

    /// Stores the meeting count (clamped to `0..=MAX_MEETINGS`) and truncates
    /// or pads the pedagogy list to match it. New meetings get the default
    /// pedagogy; existing choices are kept.
    pub fn set_meeting_count(&mut self, count: u32) {
        let count = count.min(MAX_MEETINGS);
        self.meeting_count = count;
        self.pedagogies.resize(count as usize, Pedagogy::default());
    }

    /// Replaces the pedagogy of one meeting. Indices past the last meeting
    /// are ignored.
    pub fn set_pedagogy(&mut self, index: usize, pedagogy: Pedagogy) {
        if let Some(slot) = self.pedagogies.get_mut(index) {
            *slot = pedagogy;
        }
    }

    /// Switches level; a class that does not exist for the new level is cleared.
    pub fn set_level(&mut self, level: EducationLevel) {
        self.level = level;
        if !level.has_class(&self.grade_class) {
            self.grade_class.clear();
        }
    }

    pub fn toggle_dimension(&mut self, dimension: GraduateDimension) {
        toggle(&mut self.dimensions, dimension);
    }

    pub fn toggle_panca_cinta(&mut self, value: PancaCinta) {
        toggle(&mut self.panca_cinta, value);
    }

    /// Builds a draft from urlencoded form pairs.
    ///
    /// Multi-selects arrive as repeated `dimensions` / `pancaCinta` keys.
    /// Per-meeting selects arrive as `pedagogy_<index>`. Unknown keys and
    /// unknown vocabulary labels are ignored; an unparseable meeting count
    /// becomes 0 so that validation reports it.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut form = FormState::default();
        let mut level = EducationLevel::default();
        let mut meeting_count = 1;
        let mut pedagogy_choices: Vec<(usize, Pedagogy)> = Vec::new();

        for (key, value) in pairs {
            match key.as_str() {
                "schoolName" => form.school_name = value.clone(),
                "teacherName" => form.teacher_name = value.clone(),
                "teacherNIP" => form.teacher_nip = value.clone(),
                "principalName" => form.principal_name = value.clone(),
                "principalNIP" => form.principal_nip = value.clone(),
                "gradeClass" => form.grade_class = value.clone(),
                "subject" => form.subject = value.clone(),
                "cp" => form.cp = value.clone(),
                "tp" => form.tp = value.clone(),
                "material" => form.material = value.clone(),
                "duration" => form.duration = value.clone(),
                "level" => level = value.parse().unwrap_or_default(),
                "meetingCount" => meeting_count = value.trim().parse().unwrap_or(0),
                "dimensions" => {
                    if let Ok(dimension) = value.parse() {
                        if !form.dimensions.contains(&dimension) {
                            form.dimensions.push(dimension);
                        }
                    }
                }
                "pancaCinta" => {
                    if let Ok(item) = value.parse() {
                        if !form.panca_cinta.contains(&item) {
                            form.panca_cinta.push(item);
                        }
                    }
                }
                other => {
                    let index = other
                        .strip_prefix(PEDAGOGY_KEY_PREFIX)
                        .and_then(|i| i.parse::<usize>().ok());
                    if let (Some(index), Ok(pedagogy)) = (index, value.parse()) {
                        pedagogy_choices.push((index, pedagogy));
                    }
                }
            }
        }

        form.set_level(level);
        form.set_meeting_count(meeting_count);
        for (index, pedagogy) in pedagogy_choices {
            form.set_pedagogy(index, pedagogy);
        }
        form
    }

    /// Snapshot of the draft as a request, without validation.
    pub fn to_request(&self) -> LessonPlanRequest {
        LessonPlanRequest {
            school_name: self.school_name.trim().to_string(),
            teacher_name: self.teacher_name.trim().to_string(),
            teacher_nip: self.teacher_nip.trim().to_string(),
            principal_name: self.principal_name.trim().to_string(),
            principal_nip: self.principal_nip.trim().to_string(),
            level: self.level,
            grade_class: self.grade_class.trim().to_string(),
            subject: self.subject.trim().to_string(),
            cp: self.cp.trim().to_string(),
            tp: self.tp.trim().to_string(),
            material: self.material.trim().to_string(),
            meeting_count: self.meeting_count,
            duration: self.duration.trim().to_string(),
            pedagogies: self.pedagogies.clone(),
            dimensions: self.dimensions.clone(),
            panca_cinta: self.panca_cinta.clone(),
        }
    }

    /// Returns the validated request, or every issue that blocks submission.
    pub fn submit(&self) -> Result<LessonPlanRequest, ValidationResult> {
        let request = self.to_request();
        let validation = validate_request(&request);
        if validation.passed {
            Ok(request)
        } else {
            Err(validation)
        }
    }
}

fn toggle<T: PartialEq>(selection: &mut Vec<T>, value: T) {
    if let Some(position) = selection.iter().position(|v| *v == value) {
        selection.remove(position);
    } else {
        selection.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn complete_pairs() -> Vec<(String, String)> {
        pairs(&[
            ("schoolName", "MIN 1 Banyuwangi"),
            ("principalName", "Ahmad Fauzi"),
            ("principalNIP", "197501012000031001"),
            ("teacherName", "Siti Aminah"),
            ("teacherNIP", "198001012005012001"),
            ("level", "SD"),
            ("gradeClass", "5"),
            ("subject", "IPAS"),
            ("cp", "Peserta didik memahami ekosistem."),
            ("tp", "Menjelaskan rantai makanan."),
            ("material", "Rantai Makanan"),
            ("meetingCount", "3"),
            ("duration", "2 x 35 menit"),
            ("pedagogy_0", "Station Learning"),
            ("pedagogy_1", "Game Based Learning"),
            ("pedagogy_2", "Project Based Learning (PjBL)"),
            ("dimensions", "Kreativitas"),
            ("dimensions", "Kolaborasi"),
            ("pancaCinta", "Cinta Ilmu"),
        ])
    }

    #[test]
    fn test_default_form_has_one_meeting() {
        let form = FormState::default();
        assert_eq!(form.meeting_count(), 1);
        assert_eq!(form.pedagogies(), &[Pedagogy::InquiryDiscovery]);
    }

    #[test]
    fn test_pedagogies_track_meeting_count_through_any_edit_sequence() {
        let mut form = FormState::default();
        for count in [3, 1, 7, 7, 0, 20, 2, 35, 5, 4] {
            form.set_meeting_count(count);
            assert_eq!(
                form.pedagogies().len(),
                form.meeting_count() as usize,
                "after setting {count}"
            );
        }
        assert_eq!(form.meeting_count(), 4);
    }

    #[test]
    fn test_growing_keeps_existing_choices_and_pads_with_default() {
        let mut form = FormState::default();
        form.set_pedagogy(0, Pedagogy::GameBased);
        form.set_meeting_count(3);
        assert_eq!(
            form.pedagogies(),
            &[
                Pedagogy::GameBased,
                Pedagogy::InquiryDiscovery,
                Pedagogy::InquiryDiscovery
            ]
        );
    }

    #[test]
    fn test_shrinking_truncates_from_the_end() {
        let mut form = FormState::default();
        form.set_meeting_count(3);
        form.set_pedagogy(0, Pedagogy::StationLearning);
        form.set_pedagogy(2, Pedagogy::ProblemBased);
        form.set_meeting_count(1);
        assert_eq!(form.pedagogies(), &[Pedagogy::StationLearning]);
    }

    #[test]
    fn test_meeting_count_is_clamped_to_maximum() {
        let mut form = FormState::default();
        form.set_meeting_count(500);
        assert_eq!(form.meeting_count(), MAX_MEETINGS);
        assert_eq!(form.pedagogies().len(), MAX_MEETINGS as usize);
    }

    #[test]
    fn test_set_pedagogy_out_of_range_is_ignored() {
        let mut form = FormState::default();
        form.set_pedagogy(4, Pedagogy::GameBased);
        assert_eq!(form.pedagogies(), &[Pedagogy::InquiryDiscovery]);
    }

    #[test]
    fn test_toggle_preserves_selection_order() {
        let mut form = FormState::default();
        form.toggle_dimension(GraduateDimension::Creativity);
        form.toggle_dimension(GraduateDimension::Faith);
        form.toggle_dimension(GraduateDimension::Collaboration);
        form.toggle_dimension(GraduateDimension::Faith);
        assert_eq!(
            form.dimensions(),
            &[GraduateDimension::Creativity, GraduateDimension::Collaboration]
        );

        form.toggle_panca_cinta(PancaCinta::LoveOfHomeland);
        form.toggle_panca_cinta(PancaCinta::LoveOfHomeland);
        assert!(form.panca_cinta().is_empty());
    }

    #[test]
    fn test_set_level_clears_foreign_class() {
        let mut form = FormState::default();
        form.grade_class = "5".to_string();
        form.set_level(EducationLevel::Smp);
        assert!(form.grade_class.is_empty());

        form.grade_class = "8".to_string();
        form.set_level(EducationLevel::Smp);
        assert_eq!(form.grade_class, "8");
    }

    #[test]
    fn test_from_pairs_builds_complete_form() {
        let form = FormState::from_pairs(&complete_pairs());
        assert_eq!(form.school_name, "MIN 1 Banyuwangi");
        assert_eq!(form.meeting_count(), 3);
        assert_eq!(
            form.pedagogies(),
            &[
                Pedagogy::StationLearning,
                Pedagogy::GameBased,
                Pedagogy::ProjectBased
            ]
        );
        assert_eq!(
            form.dimensions(),
            &[GraduateDimension::Creativity, GraduateDimension::Collaboration]
        );
        assert_eq!(form.panca_cinta(), &[PancaCinta::LoveOfKnowledge]);
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_from_pairs_pads_missing_pedagogy_selects() {
        let mut items = complete_pairs();
        items.retain(|(k, _)| !k.starts_with(PEDAGOGY_KEY_PREFIX));
        let form = FormState::from_pairs(&items);
        assert_eq!(form.pedagogies().len(), 3);
        assert!(form
            .pedagogies()
            .iter()
            .all(|p| *p == Pedagogy::InquiryDiscovery));
    }

    #[test]
    fn test_from_pairs_drops_pedagogies_beyond_meeting_count() {
        let mut items = complete_pairs();
        items.push(("pedagogy_9".to_string(), "Game Based Learning".to_string()));
        let form = FormState::from_pairs(&items);
        assert_eq!(form.pedagogies().len(), 3);
    }

    #[test]
    fn test_from_pairs_ignores_duplicates_and_unknown_labels() {
        let mut items = complete_pairs();
        items.push(("dimensions".to_string(), "Kreativitas".to_string()));
        items.push(("dimensions".to_string(), "Telepati".to_string()));
        let form = FormState::from_pairs(&items);
        assert_eq!(form.dimensions().len(), 2);
    }

    #[test]
    fn test_unparseable_meeting_count_blocks_submit() {
        let mut items = complete_pairs();
        for (key, value) in items.iter_mut() {
            if key == "meetingCount" {
                *value = "tiga".to_string();
            }
        }
        let form = FormState::from_pairs(&items);
        assert_eq!(form.meeting_count(), 0);
        assert!(form.pedagogies().is_empty());
        let err = form.submit().unwrap_err();
        assert!(err.has_issue("meetingCount"));
    }

    #[test]
    fn test_submit_with_empty_required_field_fails() {
        let mut form = FormState::from_pairs(&complete_pairs());
        form.cp = "  ".to_string();
        let err = form.submit().unwrap_err();
        assert!(!err.passed);
        assert!(err.has_issue("cp"));
    }

    #[test]
    fn test_submit_trims_text_fields() {
        let mut form = FormState::from_pairs(&complete_pairs());
        form.subject = "  IPAS  ".to_string();
        let request = form.submit().unwrap();
        assert_eq!(request.subject, "IPAS");
        assert_eq!(request.meeting_count, 3);
        assert_eq!(request.pedagogies.len(), 3);
    }
}
