//! Document Renderer — maps a request and its generated content onto the
//! fixed RPM layout.
//!
//! `render` is pure: no I/O, inputs are only borrowed, and the same inputs
//! always produce the same `DocumentView`. The view is then serialized by
//! `to_html()` (see `html.rs`) or `to_plain_text()` (see `text.rs`).

mod html;
mod text;

use crate::lesson::{LessonPlanContent, LessonPlanRequest};

pub const DOCUMENT_TITLE: &str = "Format Perencanaan Pembelajaran";
pub const STEPS_TITLE: &str = "C. Langkah-Langkah Pembelajaran";
const SEMESTER_PLACEHOLDER: &str = "(Ganjil/Genap)";
const EXPERIENCE_INTRO: &str = "Langkah-langkah Pembelajaran Pada tahap ini, murid aktif \
    terlibat dalam pengalaman belajar memahami, mengaplikasi, dan merefleksi dalam suasana \
    yang saling memuliakan. Pendidik menerapkan prinsip pembelajaran berkesadaran, bermakna, \
    menyenangkan.";
const EXPERIENCE_NOTE: &str = "(berkesadaran, bermakna, menggembirakan)";

/// Where and when the document is signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSettings {
    pub signing_place: String,
    pub year: i32,
}

impl DocumentSettings {
    pub fn new(signing_place: impl Into<String>, year: i32) -> Self {
        Self {
            signing_place: signing_place.into(),
            year,
        }
    }
}

/// One `label: value` line of the identity list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub value: String,
}

/// A labelled paragraph inside a main-table cell. Any part may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub label: String,
    pub note: String,
    pub text: String,
    pub items: Vec<String>,
}

/// One row of the main table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRow {
    pub label: String,
    pub note: String,
    pub text: String,
}

/// A phase of the steps table: a header row followed by its step rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    pub title: String,
    pub rows: Vec<StepRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RubricRow {
    pub aspect: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView {
    pub questions: Vec<String>,
    pub answer_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Lines above the signing space, e.g. "Mengetahui," / "Kepala Sekolah".
    pub caption: Vec<String>,
    pub name: String,
    pub nip_line: String,
}

/// The finished document, as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentView {
    pub title: String,
    pub identity: Vec<Field>,
    pub overview: Vec<Section>,
    pub steps_title: String,
    pub steps: Vec<Phase>,
    pub worksheet: Vec<Block>,
    pub rubric: Vec<RubricRow>,
    pub quiz: QuizView,
    pub mastery_criteria: String,
    pub signatures: Vec<Signature>,
}

pub fn render(
    request: &LessonPlanRequest,
    content: &LessonPlanContent,
    settings: &DocumentSettings,
) -> DocumentView {
    DocumentView {
        title: DOCUMENT_TITLE.to_string(),
        identity: identity(request),
        overview: vec![
            identification_section(request, content),
            design_section(request, content),
            experience_section(content),
            assessment_section(content),
        ],
        steps_title: STEPS_TITLE.to_string(),
        steps: steps(content),
        worksheet: worksheet(content),
        rubric: content
            .appendix
            .rubric
            .rows()
            .iter()
            .map(|(aspect, description)| RubricRow {
                aspect: aspect.to_string(),
                description: description.to_string(),
            })
            .collect(),
        quiz: QuizView {
            questions: content
                .appendix
                .quiz
                .questions()
                .iter()
                .map(|q| q.to_string())
                .collect(),
            answer_key: content.appendix.quiz.answer_key.clone(),
        },
        mastery_criteria: content.appendix.mastery_criteria.clone(),
        signatures: signatures(request, settings),
    }
}

fn field(label: &str, value: impl Into<String>) -> Field {
    Field {
        label: label.to_string(),
        value: value.into(),
    }
}

fn block(label: &str, text: impl Into<String>) -> Block {
    Block {
        label: label.to_string(),
        text: text.into(),
        ..Block::default()
    }
}

fn list(label: &str, items: Vec<String>) -> Block {
    Block {
        label: label.to_string(),
        items,
        ..Block::default()
    }
}

fn identity(request: &LessonPlanRequest) -> Vec<Field> {
    vec![
        field("Nama Sekolah", request.school_name.as_str()),
        field(
            "Kelas/Fase",
            format!("{} / {}", request.grade_class, request.level),
        ),
        field("Semester", SEMESTER_PLACEHOLDER),
        field("Mata Pelajaran", request.subject.as_str()),
        field(
            "Alokasi Waktu",
            format!("{} ({} JP)", request.duration, request.meeting_count),
        ),
        field("Materi", request.material.as_str()),
    ]
}

fn identification_section(request: &LessonPlanRequest, content: &LessonPlanContent) -> Section {
    let identification = &content.identification;
    let dimensions = request
        .dimensions
        .iter()
        .enumerate()
        .map(|(i, d)| format!("DPL{}: {}", i + 1, d))
        .collect();
    let panca_cinta = request.panca_cinta.iter().map(|p| p.to_string()).collect();

    Section {
        heading: "Identifikasi".to_string(),
        blocks: vec![
            Block {
                label: "Peserta Didik".to_string(),
                note: "Identifikasi kesiapan peserta didik sebelum belajar.".to_string(),
                text: format!("Pengetahuan Awal:\n{}", identification.learners),
                items: Vec::new(),
            },
            block("Materi Pelajaran", identification.subject_matter.as_str()),
            list("Dimensi Profil Lulusan", dimensions),
            block(
                "Lintas Disiplin Ilmu",
                identification.cross_disciplinary.as_str(),
            ),
            list("Panca Cinta (Kemenag RI)", panca_cinta),
        ],
    }
}

fn design_section(request: &LessonPlanRequest, content: &LessonPlanContent) -> Section {
    let design = &content.design;
    Section {
        heading: "Desain Pembelajaran".to_string(),
        blocks: vec![
            block(
                "Capaian Pembelajaran",
                design.achievement_narrative.as_str(),
            ),
            block("Tujuan Pembelajaran", request.tp.as_str()),
            block("Topik Pembelajaran", design.topic.as_str()),
            block("Praktik Pedagogis", request.pedagogy_line()),
            block("Kemitraan Pembelajaran", design.partnerships.as_str()),
            block("Lingkungan Pembelajaran", design.environment.as_str()),
            block("Pemanfaatan Digital", design.digital.as_str()),
        ],
    }
}

fn experience_section(content: &LessonPlanContent) -> Section {
    let steps = &content.steps;
    let phase = |label: &str, text: &str| Block {
        label: label.to_string(),
        note: EXPERIENCE_NOTE.to_string(),
        text: text.to_string(),
        items: Vec::new(),
    };
    Section {
        heading: "Pengalaman Belajar".to_string(),
        blocks: vec![
            block("", EXPERIENCE_INTRO),
            phase("Memahami", &steps.core.understanding),
            phase("Mengaplikasi", &steps.core.applying),
            phase("Merefleksi", &steps.closing.conclusion),
        ],
    }
}

fn assessment_section(content: &LessonPlanContent) -> Section {
    let assessment = &content.assessment;
    Section {
        heading: "Asesmen Pembelajaran".to_string(),
        blocks: vec![
            block("Asesmen Awal", assessment.initial.as_str()),
            block("Asesmen Proses", assessment.formative.as_str()),
            block("Asesmen Akhir", assessment.summative.as_str()),
        ],
    }
}

fn step(label: &str, note: &str, text: impl Into<String>) -> StepRow {
    StepRow {
        label: label.to_string(),
        note: note.to_string(),
        text: text.into(),
    }
}

fn steps(content: &LessonPlanContent) -> Vec<Phase> {
    let steps = &content.steps;
    vec![
        Phase {
            title: "Pendahuluan".to_string(),
            rows: vec![
                step("Salam Sapa", "", steps.opening.greeting.as_str()),
                step(
                    "Aktivitas Pemantik",
                    "",
                    steps.opening.trigger_activity.as_str(),
                ),
                step("Informasi", "", steps.opening.objectives_briefing.as_str()),
            ],
        },
        Phase {
            title: "Inti".to_string(),
            rows: vec![
                step(
                    "Memahami",
                    "(menggembirakan, berkesadaran)",
                    steps.core.understanding.as_str(),
                ),
                step(
                    "Mengaplikasi",
                    "(bermakna, menggembirakan)",
                    steps.core.applying.as_str(),
                ),
            ],
        },
        Phase {
            title: "Merefleksi dan Penutup".to_string(),
            rows: vec![step(
                "Presentasi & Kesimpulan",
                "",
                format!(
                    "{}\n\n{}",
                    steps.closing.reflection, steps.closing.conclusion
                ),
            )],
        },
    ]
}

fn worksheet(content: &LessonPlanContent) -> Vec<Block> {
    let lks = &content.appendix.worksheet;
    vec![
        block("Topik", lks.title.as_str()),
        block("Tujuan", lks.objective.as_str()),
        block("Alat dan Bahan", lks.materials.as_str()),
        block("Langkah Kerja", lks.procedure.as_str()),
        block("Pertanyaan Diskusi", lks.discussion_questions.as_str()),
    ]
}

fn signatures(request: &LessonPlanRequest, settings: &DocumentSettings) -> Vec<Signature> {
    vec![
        Signature {
            caption: vec!["Mengetahui,".to_string(), "Kepala Sekolah".to_string()],
            name: request.principal_name.clone(),
            nip_line: format!("NIP. {}", request.principal_nip),
        },
        Signature {
            caption: vec![
                format!(
                    "{}, ..................... {}",
                    settings.signing_place, settings.year
                ),
                "Guru Mata Pelajaran".to_string(),
            ],
            name: request.teacher_name.clone(),
            nip_line: format!("NIP. {}", request.teacher_nip),
        },
    ]
}
