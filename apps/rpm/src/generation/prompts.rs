// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System instruction for RPM generation.
pub const GENERATION_SYSTEM: &str = "Anda adalah konsultan kurikulum profesional \
    yang menyusun Rencana Pembelajaran Mendalam (RPM) untuk guru di Indonesia. \
    Gunakan Bahasa Indonesia yang baku. \
    Anda HANYA merespons dengan JSON yang valid sesuai skema yang diberikan.";

/// RPM generation prompt template.
/// Placeholders: {json_instruction}, {concise_instruction}, {school_name},
/// {teacher_name}, {teacher_nip}, {principal_name}, {principal_nip}, {level}, {grade_class}, {subject}, {cp},
/// {tp}, {material}, {meeting_count}, {duration}, {pedagogy_lines},
/// {dimensions}, {panca_cinta}
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"Buat konten Rencana Pembelajaran Mendalam (RPM) sesuai Permendikdasmen No. 1 Tahun 2026.

Data Input:
- Satuan Pendidikan: {school_name}
- Guru Mata Pelajaran: {teacher_name} (NIP {teacher_nip})
- Kepala Sekolah: {principal_name} (NIP {principal_nip})
- Mata Pelajaran: {subject}
- Fase/Kelas: Kelas {grade_class} ({level})
- Capaian Pembelajaran (CP): {cp}
- Tujuan Pembelajaran (TP): {tp}
- Materi: {material}
- Jumlah Pertemuan: {meeting_count} pertemuan, masing-masing {duration}
- Model Pembelajaran per Pertemuan:
{pedagogy_lines}
- Dimensi Profil Lulusan: {dimensions}
- Panca Cinta: {panca_cinta}

Instruksi:
1. {concise_instruction}
2. Sesuaikan bahasa dan aktivitas dengan jenjang dan kelas di atas.
3. Terapkan model pembelajaran setiap pertemuan secara eksplisit pada langkah inti.

Detail Isi:
- Identifikasi Peserta Didik: fokus pada pengetahuan awal dan prasyarat.
- Desain Pembelajaran: uraikan CP menjadi langkah konkret; kaitkan dengan dimensi profil lulusan dan nilai Panca Cinta yang dipilih.
- Langkah Pembelajaran:
  * Pendahuluan: salam sapa, apersepsi/aktivitas pemantik yang menarik, dan informasi tujuan.
  * Inti: kegiatan "Memahami" (konsep) dan "Mengaplikasi" (praktik/LKS).
  * Penutup: refleksi/presentasi singkat dan kesimpulan.
- Asesmen: awal, proses, dan akhir.
- Lampiran LKS: harus ada langkah kerja eksperimen/aktivitas nyata.
- Rubrik: tepat dua aspek sikap beserta deskripsi indikatornya.
- Soal Akhir: 5 soal pilihan ganda singkat beserta kunci jawaban.
- KKTP: narasi kriteria ketercapaian tujuan pembelajaran.

{json_instruction}"#;
