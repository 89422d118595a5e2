//! The generated RPM content.
//!
//! Field names follow the keys the generation service is asked to return
//! (`identifikasi`, `desain_pembelajaran`, ...). Every leaf is required free
//! text: a missing or null leaf fails deserialization. Extra keys are ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPlanContent {
    #[serde(rename = "identifikasi")]
    pub identification: Identification,
    #[serde(rename = "desain_pembelajaran")]
    pub design: LearningDesign,
    #[serde(rename = "langkah_pembelajaran")]
    pub steps: LearningSteps,
    #[serde(rename = "asesmen")]
    pub assessment: Assessment,
    #[serde(rename = "lampiran")]
    pub appendix: Appendix,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identification {
    /// Prior knowledge and readiness of the learners.
    #[serde(rename = "peserta_didik")]
    pub learners: String,
    #[serde(rename = "materi_pelajaran")]
    pub subject_matter: String,
    #[serde(rename = "lintas_disiplin")]
    pub cross_disciplinary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningDesign {
    #[serde(rename = "capaian_pembelajaran_narasi")]
    pub achievement_narrative: String,
    #[serde(rename = "topik_pembelajaran")]
    pub topic: String,
    #[serde(rename = "kemitraan")]
    pub partnerships: String,
    #[serde(rename = "lingkungan")]
    pub environment: String,
    pub digital: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningSteps {
    #[serde(rename = "pendahuluan")]
    pub opening: OpeningPhase,
    #[serde(rename = "inti")]
    pub core: CorePhase,
    #[serde(rename = "penutup")]
    pub closing: ClosingPhase,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningPhase {
    #[serde(rename = "salam_sapa")]
    pub greeting: String,
    #[serde(rename = "aktivitas_pemantik")]
    pub trigger_activity: String,
    #[serde(rename = "informasi_tujuan")]
    pub objectives_briefing: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorePhase {
    #[serde(rename = "memahami")]
    pub understanding: String,
    #[serde(rename = "mengaplikasi")]
    pub applying: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosingPhase {
    #[serde(rename = "refleksi_presentasi")]
    pub reflection: String,
    #[serde(rename = "kesimpulan")]
    pub conclusion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(rename = "awal")]
    pub initial: String,
    #[serde(rename = "proses")]
    pub formative: String,
    #[serde(rename = "akhir")]
    pub summative: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appendix {
    #[serde(rename = "lks")]
    pub worksheet: Worksheet,
    #[serde(rename = "rubrik")]
    pub rubric: Rubric,
    #[serde(rename = "soal_akhir")]
    pub quiz: Quiz,
    /// KKTP narrative.
    #[serde(rename = "kktp")]
    pub mastery_criteria: String,
}

/// Lembar Kerja Siswa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worksheet {
    #[serde(rename = "judul")]
    pub title: String,
    #[serde(rename = "tujuan")]
    pub objective: String,
    #[serde(rename = "alat_bahan")]
    pub materials: String,
    #[serde(rename = "langkah_kerja")]
    pub procedure: String,
    #[serde(rename = "pertanyaan_diskusi")]
    pub discussion_questions: String,
}

/// Attitude rubric with exactly two scored aspects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rubric {
    #[serde(rename = "aspek1")]
    pub first_aspect: String,
    #[serde(rename = "deskripsi1")]
    pub first_description: String,
    #[serde(rename = "aspek2")]
    pub second_aspect: String,
    #[serde(rename = "deskripsi2")]
    pub second_description: String,
}

impl Rubric {
    /// `(aspect, description)` rows in order.
    pub fn rows(&self) -> [(&str, &str); 2] {
        [
            (self.first_aspect.as_str(), self.first_description.as_str()),
            (self.second_aspect.as_str(), self.second_description.as_str()),
        ]
    }
}

/// Five-question closing quiz with its answer key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(rename = "soal1")]
    pub question_1: String,
    #[serde(rename = "soal2")]
    pub question_2: String,
    #[serde(rename = "soal3")]
    pub question_3: String,
    #[serde(rename = "soal4")]
    pub question_4: String,
    #[serde(rename = "soal5")]
    pub question_5: String,
    #[serde(rename = "kunci_jawaban")]
    pub answer_key: String,
}

impl Quiz {
    pub fn questions(&self) -> [&str; 5] {
        [
            self.question_1.as_str(),
            self.question_2.as_str(),
            self.question_3.as_str(),
            self.question_4.as_str(),
            self.question_5.as_str(),
        ]
    }
}
