//! Structured-output schema for `LessonPlanContent`.
//!
//! Uses the service's OpenAPI subset (`OBJECT` / `STRING`). Every property is
//! listed in `required` and in `propertyOrdering`, so the model returns the
//! sections in document order.

use serde_json::{json, Map, Value};

pub fn response_schema() -> Value {
    object(&[
        (
            "identifikasi",
            object(&[
                ("peserta_didik", string()),
                ("materi_pelajaran", string()),
                ("lintas_disiplin", string()),
            ]),
        ),
        (
            "desain_pembelajaran",
            object(&[
                ("capaian_pembelajaran_narasi", string()),
                ("topik_pembelajaran", string()),
                ("kemitraan", string()),
                ("lingkungan", string()),
                ("digital", string()),
            ]),
        ),
        (
            "langkah_pembelajaran",
            object(&[
                (
                    "pendahuluan",
                    object(&[
                        ("salam_sapa", string()),
                        ("aktivitas_pemantik", string()),
                        ("informasi_tujuan", string()),
                    ]),
                ),
                (
                    "inti",
                    object(&[("memahami", string()), ("mengaplikasi", string())]),
                ),
                (
                    "penutup",
                    object(&[
                        ("refleksi_presentasi", string()),
                        ("kesimpulan", string()),
                    ]),
                ),
            ]),
        ),
        (
            "asesmen",
            object(&[
                ("awal", string()),
                ("proses", string()),
                ("akhir", string()),
            ]),
        ),
        (
            "lampiran",
            object(&[
                (
                    "lks",
                    object(&[
                        ("judul", string()),
                        ("tujuan", string()),
                        ("alat_bahan", string()),
                        ("langkah_kerja", string()),
                        ("pertanyaan_diskusi", string()),
                    ]),
                ),
                (
                    "rubrik",
                    object(&[
                        ("aspek1", string()),
                        ("deskripsi1", string()),
                        ("aspek2", string()),
                        ("deskripsi2", string()),
                    ]),
                ),
                (
                    "soal_akhir",
                    object(&[
                        ("soal1", string()),
                        ("soal2", string()),
                        ("soal3", string()),
                        ("soal4", string()),
                        ("soal5", string()),
                        ("kunci_jawaban", string()),
                    ]),
                ),
                ("kktp", string()),
            ]),
        ),
    ])
}

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn object(properties: &[(&str, Value)]) -> Value {
    let names: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();
    let properties: Map<String, Value> = properties
        .iter()
        .map(|(name, schema)| (name.to_string(), schema.clone()))
        .collect();
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": names,
        "propertyOrdering": names,
    })
}
