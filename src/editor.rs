use crate::transcript::{course, Course};

pub const DEFAULT_CREDITS: u32 = 3;
pub const DEFAULT_GRADE: &str = "A";
pub const DEFAULT_POINTS: f64 = 12.0;

/// Identity scalars of the editable transcript.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IdentityField {
    Name,
    Id,
    Program,
    Semester,
    Year,
    Cgpa,
}

/// Cells of one course row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CourseField {
    Code,
    Title,
    Credits,
    Grade,
    Points,
}

/// The editable transcript document. Every operation returns a fresh
/// snapshot; the previous one is left untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct EditableTranscript {
    pub name: String,
    pub id: String,
    pub program: String,
    pub semester: String,
    pub year: String,
    pub cgpa: String,
    pub courses: Vec<Course>,
}

impl EditableTranscript {
    pub fn defaults() -> EditableTranscript {
        EditableTranscript {
            name: "Faiz Shahzad".into(),
            id: "F2024065302".into(),
            program: "BS Software Engineering".into(),
            semester: "Fall 2025".into(),
            year: "2025".into(),
            cgpa: "2.55".into(),
            courses: vec![
                course("CC211", "Data Structures and Algorithms", 3, "B+", 9.9),
                course("CC211L", "Data Structures and Algorithms (Lab)", 1, "A-", 3.7),
                course("SE210", "Software Requirements Engineering", 3, "B", 9.0),
            ],
        }
    }

    pub fn with_field(&self, field: IdentityField, value: String) -> EditableTranscript {
        let mut next = self.clone();
        match field {
            IdentityField::Name => next.name = value,
            IdentityField::Id => next.id = value,
            IdentityField::Program => next.program = value,
            IdentityField::Semester => next.semester = value,
            IdentityField::Year => next.year = value,
            IdentityField::Cgpa => next.cgpa = value,
        }
        next
    }

    /// Replaces one cell of the row at `index`. Numeric cells fall back to
    /// zero on unparseable input; an out-of-range index leaves the snapshot
    /// equal to the current one.
    pub fn with_course_field(&self, index: usize, field: CourseField, value: &str) -> EditableTranscript {
        let mut next = self.clone();
        if let Some(course) = next.courses.get_mut(index) {
            match field {
                CourseField::Code => course.code = value.to_owned(),
                CourseField::Title => course.title = value.to_owned(),
                CourseField::Credits => course.credits = value.parse().unwrap_or(0),
                CourseField::Grade => course.grade = value.to_owned(),
                CourseField::Points => course.points = value.parse().unwrap_or(0.0),
            }
        }
        next
    }

    pub fn with_new_course(&self) -> EditableTranscript {
        let mut next = self.clone();
        next.courses.push(course("", "", DEFAULT_CREDITS, DEFAULT_GRADE, DEFAULT_POINTS));
        next
    }

    pub fn without_course(&self, index: usize) -> EditableTranscript {
        let mut next = self.clone();
        next.courses = next
            .courses
            .into_iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, course)| course)
            .collect();
        next
    }

    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(|course| course.credits).sum()
    }

    pub fn total_points(&self) -> f64 {
        self.courses.iter().map(|course| course.points).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util;

    #[test]
    fn updating_one_identity_field_leaves_the_rest_alone() {
        let draft = EditableTranscript::defaults();
        let next = draft.with_field(IdentityField::Program, "BS Computer Science".into());

        assert_eq!(next.program, "BS Computer Science");
        let mut expected = draft.clone();
        expected.program = "BS Computer Science".into();
        assert_eq!(next, expected);
    }

    #[test]
    fn appending_a_course_adds_one_default_row() {
        let draft = EditableTranscript::defaults();
        let next = draft.with_new_course();

        assert_eq!(next.courses.len(), draft.courses.len() + 1);
        let added = next.courses.last().unwrap();
        assert_eq!(added.code, "");
        assert_eq!(added.title, "");
        assert_eq!(added.credits, DEFAULT_CREDITS);
        assert_eq!(added.grade, DEFAULT_GRADE);
        assert_eq!(added.points, DEFAULT_POINTS);
    }

    #[test]
    fn removing_a_course_keeps_the_other_rows_in_order() {
        let draft = EditableTranscript::defaults();
        let next = draft.without_course(1);

        assert_eq!(next.courses.len(), draft.courses.len() - 1);
        assert_eq!(next.courses[0], draft.courses[0]);
        assert_eq!(next.courses[1], draft.courses[2]);
    }

    #[test]
    fn removing_past_the_end_changes_nothing() {
        let draft = EditableTranscript::defaults();
        assert_eq!(draft.without_course(99), draft);
    }

    #[test]
    fn editing_a_course_cell_replaces_only_that_cell() {
        let draft = EditableTranscript::defaults();
        let next = draft.with_course_field(0, CourseField::Grade, "A");

        assert_eq!(next.courses[0].grade, "A");
        assert_eq!(next.courses[0].title, draft.courses[0].title);
        assert_eq!(next.courses[1], draft.courses[1]);
    }

    #[test]
    fn unparseable_numeric_input_falls_back_to_zero() {
        let draft = EditableTranscript::defaults();
        let next = draft.with_course_field(0, CourseField::Credits, "three");
        assert_eq!(next.courses[0].credits, 0);

        let next = draft.with_course_field(0, CourseField::Points, "");
        assert_eq!(next.courses[0].points, 0.0);
    }

    #[test]
    fn footer_totals_sum_over_all_current_courses() {
        let draft = EditableTranscript::defaults();
        assert_eq!(draft.total_credits(), 7);
        assert_eq!(util::fmt_points(draft.total_points()), "22.6");

        let next = draft.with_new_course();
        assert_eq!(next.total_credits(), 10);
        assert_eq!(util::fmt_points(next.total_points()), "34.6");
    }
}
