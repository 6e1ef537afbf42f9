/// One row of a course table. `points` is the pre-weighted grade point
/// value for the row (credits x grade weight), supplied with the data;
/// nothing in the application derives it from the grade label.
#[derive(Clone, Debug, PartialEq)]
pub struct Course {
    pub code: String,
    pub title: String,
    pub credits: u32,
    pub grade: String,
    pub points: f64,
}

pub fn course(code: &str, title: &str, credits: u32, grade: &str, points: f64) -> Course {
    Course {
        code: code.into(),
        title: title.into(),
        credits,
        grade: grade.into(),
        points,
    }
}

/// A semester block on the official report. The earned hours and the two
/// averages are display values carried with the data, not recomputed.
#[derive(Clone, Debug, PartialEq)]
pub struct Semester {
    pub name: String,
    pub courses: Vec<Course>,
    pub credit_hours_earned: u32,
    pub sgpa: String,
    pub cgpa: String,
}

/// The official student report document.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptData {
    pub serial_no: String,
    pub issue_date: String,
    pub student_id: String,
    pub student_name: String,
    pub fathers_name: String,
    pub school: String,
    pub degree: String,
    pub semesters: Vec<Semester>,
    pub total_credit_hours: u32,
    pub total_grade_points: f64,
    pub final_cgpa: String,
}

impl TranscriptData {
    pub fn defaults() -> TranscriptData {
        TranscriptData {
            serial_no: "Sr. No. SE 376F2024-302".into(),
            issue_date: "April 14, 2025".into(),
            student_id: "F2024065302".into(),
            student_name: "Faiz Shahzad".into(),
            fathers_name: "Muhammad Shahzad".into(),
            school: "School of Systems and Technology".into(),
            degree: "Bachelor of Science in Software Engineering".into(),
            semesters: vec![
                Semester {
                    name: "Fall 2024".into(),
                    courses: vec![
                        course("CC111", "Programming Fundamentals", 3, "B+", 9.0),
                        course("CC111L", "Programming Fundamentals Lab", 1, "A-", 3.7),
                        course("CC120", "Application of Information & Communication Technologies", 2, "B-", 5.4),
                        course("CC120L", "Application of Information & Communication Technologies (Lab)", 1, "B", 3.0),
                        course("EN110", "English-I", 3, "C+", 6.9),
                        course("ISL112", "Islamic Thought and Perspectives", 2, "C-", 5.1),
                        course("MATH107", "Calculus and Analytical Geometry", 3, "C+", 6.9),
                        course("POL121", "Pakistan Ideology, Constitution and Society", 4, "B", 8.0),
                    ],
                    credit_hours_earned: 19,
                    sgpa: "2.74".into(),
                    cgpa: "2.74".into(),
                },
                Semester {
                    name: "Spring 2025".into(),
                    courses: vec![
                        course("CC112", "Object Oriented Programming", 3, "C", 6.0),
                        course("CC112L", "Object Oriented Programming (Lab)", 1, "B", 3.0),
                        course("CC141", "Discrete Structures", 3, "C", 6.0),
                        course("EN123", "English-II", 3, "B+", 8.1),
                        course("MATH102", "Multivariable Calculus", 3, "C+", 6.9),
                        course("MATH150", "Probability and Statistics", 3, "B", 9.0),
                        course("NS125", "Applied Physics", 3, "C", 6.0),
                        course("NS125L", "Applied Physics (Lab)", 1, "B-", 2.7),
                    ],
                    credit_hours_earned: 19,
                    sgpa: "2.36".into(),
                    cgpa: "2.55".into(),
                },
            ],
            total_credit_hours: 38,
            total_grade_points: 96.80,
            final_cgpa: "2.55 / 4.00".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util;

    #[test]
    fn report_carries_two_semesters_with_sixteen_courses() {
        let data = TranscriptData::defaults();
        assert_eq!(data.semesters.len(), 2);
        let rows: usize = data.semesters.iter().map(|s| s.courses.len()).sum();
        assert_eq!(rows, 16);
    }

    #[test]
    fn report_footer_renders_stored_aggregates() {
        let data = TranscriptData::defaults();
        assert_eq!(data.total_credit_hours.to_string(), "38");
        assert_eq!(util::fmt_grade_points(data.total_grade_points), "96.80");
        assert_eq!(data.final_cgpa, "2.55 / 4.00");
    }
}
