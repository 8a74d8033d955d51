//! # Client-side grade derivation
//!
//! The grading table derives a letter grade and point value from the score as
//! the teacher types, purely as a UI convenience — the backend revalidates on
//! submit. The breakpoints are fixed:
//!
//! | Score | Grade | Point |
//! |-------|-------|-------|
//! | ≥ 70 | A | 5 |
//! | ≥ 60 | B | 4 |
//! | ≥ 50 | C | 3 |
//! | ≥ 45 | D | 2 |
//! | ≥ 40 | E | 1 |
//! | else | F | 0 |

use std::collections::BTreeMap;

use api::models::{GradeRecord, ResultEntry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grade {
    pub letter: char,
    pub point: u8,
}

/// Map a score to its grade bucket. Deterministic and total: anything below
/// 40 (including negative or nonsense input clamped by the caller) is an F.
pub fn grade_for_score(score: f64) -> Grade {
    if score >= 70.0 {
        Grade { letter: 'A', point: 5 }
    } else if score >= 60.0 {
        Grade { letter: 'B', point: 4 }
    } else if score >= 50.0 {
        Grade { letter: 'C', point: 3 }
    } else if score >= 45.0 {
        Grade { letter: 'D', point: 2 }
    } else if score >= 40.0 {
        Grade { letter: 'E', point: 1 }
    } else {
        Grade { letter: 'F', point: 0 }
    }
}

/// One editable row of the grading table. Grade and point are derived from
/// the score and cleared when the score stops parsing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SheetRow {
    pub score: String,
    pub grade: String,
    pub point: String,
    pub semester: String,
    /// `"new"` for a first submission, `"edit"` when overwriting an
    /// already-submitted result.
    pub mode: &'static str,
}

/// The grade-entry table for one course, keyed by student id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GradeSheet {
    rows: BTreeMap<String, SheetRow>,
}

impl GradeSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(&self, student_id: &str) -> SheetRow {
        self.rows.get(student_id).cloned().unwrap_or_default()
    }

    /// Record a keystroke in the score column, rederiving grade and point.
    pub fn set_score(&mut self, student_id: &str, raw: &str) {
        let row = self.rows.entry(student_id.to_string()).or_default();
        row.score = raw.trim().to_string();
        match row.score.parse::<f64>() {
            Ok(score) => {
                let grade = grade_for_score(score);
                row.grade = grade.letter.to_string();
                row.point = grade.point.to_string();
            }
            Err(_) => {
                row.grade.clear();
                row.point.clear();
            }
        }
    }

    pub fn set_semester(&mut self, student_id: &str, semester: &str) {
        let row = self.rows.entry(student_id.to_string()).or_default();
        row.semester = semester.to_string();
    }

    /// Preload rows from results the teacher already submitted; edits to
    /// those rows go up with mode `"edit"`.
    pub fn load_existing(&mut self, results: &[ResultEntry]) {
        self.rows.clear();
        for entry in results {
            let Some(student_id) = entry.owner_id() else {
                continue;
            };
            self.rows.insert(
                student_id.to_string(),
                SheetRow {
                    score: entry.score.map(fmt_number).unwrap_or_default(),
                    grade: entry.grade.clone().unwrap_or_default(),
                    point: entry.point.map(fmt_number).unwrap_or_default(),
                    semester: entry.semester.clone().unwrap_or_default(),
                    mode: "edit",
                },
            );
        }
    }

    /// The submit gate: every listed student must have a non-empty score,
    /// grade, point, and semester. A student with no row at all fails it.
    pub fn is_complete(&self, student_ids: &[String]) -> bool {
        !student_ids.is_empty()
            && student_ids.iter().all(|id| {
                self.rows.get(id).is_some_and(|row| {
                    !row.score.is_empty()
                        && !row.grade.is_empty()
                        && !row.point.is_empty()
                        && !row.semester.is_empty()
                })
            })
    }

    /// Rows formatted for `submit-results`. Call only after
    /// [`GradeSheet::is_complete`]; rows that fail to parse are skipped.
    pub fn to_records(&self, unit: Option<u32>, code: Option<&str>) -> Vec<GradeRecord> {
        self.rows
            .iter()
            .filter_map(|(student_id, row)| {
                let score = row.score.parse::<f64>().ok()?;
                let point = row.point.parse::<u8>().ok()?;
                Some(GradeRecord {
                    student_id: student_id.clone(),
                    score,
                    grade: row.grade.clone(),
                    point,
                    semester: row.semester.clone(),
                    unit,
                    code: code.map(str::to_string),
                    mode: if row.mode == "edit" { "edit" } else { "new" }.to_string(),
                })
            })
            .collect()
    }
}

fn fmt_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_scores_map_to_their_own_bucket() {
        let cases = [
            (70.0, 'A', 5),
            (69.0, 'B', 4),
            (60.0, 'B', 4),
            (59.0, 'C', 3),
            (50.0, 'C', 3),
            (49.0, 'D', 2),
            (45.0, 'D', 2),
            (44.0, 'E', 1),
            (40.0, 'E', 1),
            (39.0, 'F', 0),
            (100.0, 'A', 5),
            (0.0, 'F', 0),
            (-3.0, 'F', 0),
        ];
        for (score, letter, point) in cases {
            let grade = grade_for_score(score);
            assert_eq!(grade.letter, letter, "score {score}");
            assert_eq!(grade.point, point, "score {score}");
        }
    }

    #[test]
    fn derivation_is_idempotent() {
        for score in [39.0, 40.0, 55.5, 70.0, 88.0] {
            assert_eq!(grade_for_score(score), grade_for_score(score));
        }
    }

    #[test]
    fn set_score_derives_grade_and_point() {
        let mut sheet = GradeSheet::new();
        sheet.set_score("s1", "72");
        let row = sheet.row("s1");
        assert_eq!(row.grade, "A");
        assert_eq!(row.point, "5");
    }

    #[test]
    fn unparsable_score_clears_the_derivation() {
        let mut sheet = GradeSheet::new();
        sheet.set_score("s1", "72");
        sheet.set_score("s1", "7x");
        let row = sheet.row("s1");
        assert!(row.grade.is_empty());
        assert!(row.point.is_empty());
    }

    #[test]
    fn submit_gate_requires_every_row_complete() {
        let ids = vec!["s1".to_string(), "s2".to_string()];
        let mut sheet = GradeSheet::new();

        // No rows at all
        assert!(!sheet.is_complete(&ids));

        sheet.set_score("s1", "65");
        sheet.set_semester("s1", "First");
        // s2 untouched
        assert!(!sheet.is_complete(&ids));

        sheet.set_score("s2", "48");
        // s2 has no semester yet
        assert!(!sheet.is_complete(&ids));

        sheet.set_semester("s2", "First");
        assert!(sheet.is_complete(&ids));
    }

    #[test]
    fn empty_class_is_not_submittable() {
        let sheet = GradeSheet::new();
        assert!(!sheet.is_complete(&[]));
    }

    #[test]
    fn records_carry_course_fields_and_mode() {
        let mut sheet = GradeSheet::new();
        sheet.set_score("s1", "72");
        sheet.set_semester("s1", "Second");

        let records = sheet.to_records(Some(3), Some("CSC301"));
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.grade, "A");
        assert_eq!(record.point, 5);
        assert_eq!(record.unit, Some(3));
        assert_eq!(record.code.as_deref(), Some("CSC301"));
        assert_eq!(record.mode, "new");
    }

    #[test]
    fn preloaded_rows_submit_as_edits() {
        let existing: Vec<ResultEntry> = serde_json::from_str(
            r#"[{ "studentId": "s1", "score": 64, "grade": "B", "point": 4, "semester": "First" }]"#,
        )
        .unwrap();

        let mut sheet = GradeSheet::new();
        sheet.load_existing(&existing);

        assert_eq!(sheet.row("s1").mode, "edit");
        let records = sheet.to_records(None, None);
        assert_eq!(records[0].mode, "edit");
        assert_eq!(records[0].score, 64.0);
    }
}
