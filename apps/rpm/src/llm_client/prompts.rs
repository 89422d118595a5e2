// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Instruction appended to every structured-output prompt.
pub const JSON_OUTPUT_INSTRUCTION: &str = "\
    Output WAJIB berupa satu objek JSON yang valid dan lengkap sesuai skema. \
    Jangan menambahkan teks di luar objek JSON. \
    Jangan menggunakan markdown code fence. \
    Semua nilai berupa teks biasa; gunakan baris baru untuk daftar bernomor.";

/// Instruction keeping generated text concise and operational.
pub const CONCISE_INSTRUCTION: &str = "\
    Buat konten yang spesifik, operasional, dan tidak bertele-tele. \
    Hindari pengulangan kalimat yang tidak perlu.";
