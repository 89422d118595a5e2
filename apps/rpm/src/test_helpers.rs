//! Fixtures and fakes shared by the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;

use crate::config::Config;
use crate::generation::generator::{ContentGenerator, GenerationError};
use crate::lesson::content::{
    Appendix, Assessment, ClosingPhase, CorePhase, Identification, LearningDesign, LearningSteps,
    OpeningPhase, Quiz, Rubric, Worksheet,
};
use crate::lesson::vocab::{EducationLevel, GraduateDimension, PancaCinta, Pedagogy};
use crate::lesson::{FormState, LessonPlanContent, LessonPlanRequest};
use crate::render::DocumentSettings;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

pub fn sample_request() -> LessonPlanRequest {
    LessonPlanRequest {
        school_name: "MIN 1 Banyuwangi".to_string(),
        teacher_name: "Siti Aminah".to_string(),
        teacher_nip: "198001012005012001".to_string(),
        principal_name: "Ahmad Fauzi".to_string(),
        principal_nip: "197501012000031001".to_string(),
        level: EducationLevel::Sd,
        grade_class: "5".to_string(),
        subject: "IPAS".to_string(),
        cp: "Peserta didik memahami hubungan antar makhluk hidup dalam ekosistem.".to_string(),
        tp: "Peserta didik dapat menjelaskan rantai makanan di lingkungan sekitar.".to_string(),
        material: "Rantai Makanan".to_string(),
        meeting_count: 2,
        duration: "2 x 35 menit".to_string(),
        pedagogies: vec![Pedagogy::InquiryDiscovery, Pedagogy::GameBased],
        dimensions: vec![GraduateDimension::Creativity, GraduateDimension::Collaboration],
        panca_cinta: vec![PancaCinta::LoveOfKnowledge, PancaCinta::LoveOfEnvironment],
    }
}

pub fn sample_content() -> LessonPlanContent {
    LessonPlanContent {
        identification: Identification {
            learners: "Peserta didik sudah mengenal hewan pemakan tumbuhan.".to_string(),
            subject_matter: "Rantai makanan: produsen, konsumen, pengurai.".to_string(),
            cross_disciplinary: "Bahasa Indonesia, Matematika".to_string(),
        },
        design: LearningDesign {
            achievement_narrative: "Peserta didik menganalisis aliran energi.".to_string(),
            topic: "Siapa Memakan Siapa?".to_string(),
            partnerships: "Orang tua dan petani setempat".to_string(),
            environment: "Kebun sekolah".to_string(),
            digital: "Video animasi rantai makanan".to_string(),
        },
        steps: LearningSteps {
            opening: OpeningPhase {
                greeting: "Guru menyapa dan mengajak berdoa.".to_string(),
                trigger_activity: "Menebak hewan dari suara.".to_string(),
                objectives_briefing: "Guru menyampaikan tujuan pembelajaran.".to_string(),
            },
            core: CorePhase {
                understanding: "Mengamati gambar ekosistem sawah.".to_string(),
                applying: "Menyusun kartu rantai makanan (LKS).".to_string(),
            },
            closing: ClosingPhase {
                reflection: "Kelompok mempresentasikan hasil.".to_string(),
                conclusion: "Bersama menyimpulkan peran setiap makhluk hidup.".to_string(),
            },
        },
        assessment: Assessment {
            initial: "Tanya jawab lisan".to_string(),
            formative: "Observasi kerja kelompok".to_string(),
            summative: "Kuis pilihan ganda".to_string(),
        },
        appendix: Appendix {
            worksheet: Worksheet {
                title: "Rantai Makanan di Sawah".to_string(),
                objective: "Menyusun rantai makanan sederhana".to_string(),
                materials: "Kartu gambar\nLem\nKertas karton".to_string(),
                procedure: "1. Amati kartu\n2. Urutkan\n3. Tempel".to_string(),
                discussion_questions: "Apa yang terjadi jika ular punah?".to_string(),
            },
            rubric: Rubric {
                first_aspect: "Kolaborasi".to_string(),
                first_description: "Aktif berbagi tugas dalam kelompok".to_string(),
                second_aspect: "Penalaran Kritis".to_string(),
                second_description: "Memberi alasan logis atas urutan".to_string(),
            },
            quiz: Quiz {
                question_1: "Produsen dalam rantai makanan adalah ...".to_string(),
                question_2: "Contoh konsumen tingkat I adalah ...".to_string(),
                question_3: "Pengurai berperan untuk ...".to_string(),
                question_4: "Jika tikus punah maka ...".to_string(),
                question_5: "Energi utama berasal dari ...".to_string(),
                answer_key: "1. a 2. b 3. c 4. d 5. a".to_string(),
            },
            mastery_criteria: "Peserta didik tuntas jika mampu menyusun minimal 3 tingkat."
                .to_string(),
        },
    }
}

/// A complete draft that submits to `sample_request()`.
pub fn sample_form() -> FormState {
    let request = sample_request();
    let mut form = FormState::default();
    form.school_name = request.school_name;
    form.teacher_name = request.teacher_name;
    form.teacher_nip = request.teacher_nip;
    form.principal_name = request.principal_name;
    form.principal_nip = request.principal_nip;
    form.grade_class = request.grade_class;
    form.subject = request.subject;
    form.cp = request.cp;
    form.tp = request.tp;
    form.material = request.material;
    form.duration = request.duration;
    form.set_level(request.level);
    form.set_meeting_count(request.meeting_count);
    for (i, pedagogy) in request.pedagogies.into_iter().enumerate() {
        form.set_pedagogy(i, pedagogy);
    }
    for dimension in request.dimensions {
        form.toggle_dimension(dimension);
    }
    for value in request.panca_cinta {
        form.toggle_panca_cinta(value);
    }
    form
}

pub fn sample_settings() -> DocumentSettings {
    DocumentSettings::new("Banyuwangi", 2026)
}

pub fn test_config() -> Config {
    Config {
        gemini_api_key: None,
        gemini_api_base: None,
        port: 0,
        rust_log: "debug".to_string(),
        editor_url: "https://docs.new".to_string(),
        signing_place: "Banyuwangi".to_string(),
        document_year: 2026,
        session_ttl: Duration::from_secs(60 * 60),
    }
}

/// What the fake generator answers with.
#[derive(Clone)]
pub enum FakeOutcome {
    Content(Box<LessonPlanContent>),
    EmptyResponse,
    Malformed,
    Configuration,
}

/// In-memory `ContentGenerator` that counts calls.
pub struct FakeGenerator {
    outcome: FakeOutcome,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl FakeGenerator {
    pub fn new(outcome: FakeOutcome) -> Self {
        Self {
            outcome,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(FakeOutcome::Content(Box::new(sample_content())))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentGenerator for FakeGenerator {
    async fn generate(
        &self,
        _request: &LessonPlanRequest,
    ) -> Result<LessonPlanContent, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.outcome {
            FakeOutcome::Content(content) => Ok(content.as_ref().clone()),
            FakeOutcome::EmptyResponse => Err(GenerationError::EmptyResponse),
            FakeOutcome::Malformed => Err(GenerationError::MalformedResponse(
                "expected value at line 1 column 1".to_string(),
            )),
            FakeOutcome::Configuration => Err(GenerationError::Configuration),
        }
    }
}

pub fn test_state(generator: Arc<FakeGenerator>) -> AppState {
    let config = test_config();
    AppState {
        generator,
        sessions: SessionStore::new(config.session_ttl),
        document: config.document_settings(),
        config,
    }
}

pub fn test_router(generator: Arc<FakeGenerator>) -> Router {
    build_router(test_state(generator))
}
