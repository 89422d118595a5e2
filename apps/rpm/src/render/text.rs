use std::fmt::Write;

use super::{Block, DocumentView};

impl DocumentView {
    /// Plain-text rendition, used for the clipboard's text flavour and the CLI.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out);
        let _ = writeln!(out, "Identitas");
        for field in &self.identity {
            let _ = writeln!(out, "  • {}: {}", field.label, field.value);
        }

        for section in &self.overview {
            let _ = writeln!(out);
            let _ = writeln!(out, "== {} ==", section.heading);
            for block in &section.blocks {
                write_block(&mut out, block);
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.steps_title);
        for phase in &self.steps {
            let _ = writeln!(out, "-- {} --", phase.title);
            for row in &phase.rows {
                if row.note.is_empty() {
                    let _ = writeln!(out, "{}:", row.label);
                } else {
                    let _ = writeln!(out, "{} {}:", row.label, row.note);
                }
                let _ = writeln!(out, "{}", row.text);
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Lembar Kerja Siswa (LKS)");
        for block in &self.worksheet {
            write_block(&mut out, block);
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Rubrik Pengamatan Sikap");
        for row in &self.rubric {
            let _ = writeln!(out, "  {}: {}", row.aspect, row.description);
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Asesmen Formatif Akhir Pembelajaran (Quiz)");
        for (i, question) in self.quiz.questions.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, question);
        }
        let _ = writeln!(out, "Kunci Jawaban: {}", self.quiz.answer_key);

        let _ = writeln!(out);
        let _ = writeln!(out, "Kriteria Ketercapaian Tujuan Pembelajaran (KKTP)");
        let _ = writeln!(out, "{}", self.mastery_criteria);

        for signature in &self.signatures {
            let _ = writeln!(out);
            for line in &signature.caption {
                let _ = writeln!(out, "{line}");
            }
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", signature.name);
            let _ = writeln!(out, "{}", signature.nip_line);
        }

        out
    }
}

fn write_block(out: &mut String, block: &Block) {
    if !block.label.is_empty() {
        let _ = writeln!(out, "{}:", block.label);
    }
    if !block.note.is_empty() {
        let _ = writeln!(out, "{}", block.note);
    }
    if !block.text.is_empty() {
        let _ = writeln!(out, "{}", block.text);
    }
    for item in &block.items {
        let _ = writeln!(out, "  - {item}");
    }
}
