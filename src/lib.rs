use enclose::enc;
use seed::{prelude::*, *};
use web_sys::HtmlElement;

pub mod editor;
pub mod export;
pub mod transcript;
pub mod util;

use editor::{CourseField, EditableTranscript, IdentityField};
use transcript::{Course, Semester, TranscriptData};

const LOGO_PATH: &str = "static/umt_logo.png";

// ------ ------
//     Model
// ------ ------

// ------ Model ------

struct Model {
    data: Data,
    refs: Refs,
}

struct Data {
    report: TranscriptData,
    draft: EditableTranscript,
    template: Template,
    editing: bool,
}

impl Data {
    fn student_name(&self) -> &str {
        match self.template {
            Template::Report => &self.report.student_name,
            Template::Builder => &self.draft.name,
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Template {
    Report,
    Builder,
}

#[derive(Default)]
struct Refs {
    transcript: ElRef<HtmlElement>,
}

// ------ ------
//  After Mount
// ------ ------

fn after_mount(_: Url, _: &mut impl Orders<Msg>) -> AfterMount<Model> {
    AfterMount::new(Model {
        data: Data {
            report: TranscriptData::defaults(),
            draft: EditableTranscript::defaults(),
            template: Template::Report,
            editing: false,
        },
        refs: Refs::default(),
    })
}

// ------ ------
//    Update
// ------ ------

enum Msg {
    ShowReport,
    ShowBuilder,
    ToggleEditing,

    IdentityChanged(IdentityField, String),
    CourseChanged(usize, CourseField, String),
    AddCourse,
    RemoveCourse(usize),

    DownloadPdf,
    DownloadImage,

    NoOp,
}

fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    let data = &mut model.data;
    match msg {
        Msg::ShowReport => {
            data.template = Template::Report;
        }
        Msg::ShowBuilder => {
            data.template = Template::Builder;
        }
        Msg::ToggleEditing => {
            data.editing = !data.editing;
        }

        Msg::IdentityChanged(field, value) => {
            data.draft = data.draft.with_field(field, value);
        }
        Msg::CourseChanged(index, field, value) => {
            data.draft = data.draft.with_course_field(index, field, &value);
        }
        Msg::AddCourse => {
            data.draft = data.draft.with_new_course();
        }
        Msg::RemoveCourse(index) => {
            data.draft = data.draft.without_course(index);
        }

        Msg::DownloadPdf => {
            // Skipped entirely while the document is not mounted.
            if let Some(target) = model.refs.transcript.get() {
                let filename = export::filename(data.student_name(), "pdf");
                orders.perform_cmd(async move {
                    if let Err(err) = export::download_pdf(target, filename).await {
                        error!(format!("PDF export failed: {}", err));
                    }
                    Msg::NoOp
                });
            }
        }
        Msg::DownloadImage => {
            if let Some(target) = model.refs.transcript.get() {
                let filename = export::filename(data.student_name(), "png");
                orders.perform_cmd(async move {
                    if let Err(err) = export::download_image(target, filename).await {
                        error!(format!("image export failed: {}", err));
                    }
                    Msg::NoOp
                });
            }
        }

        Msg::NoOp => (),
    }
}

// ------ ------
//     View
// ------ ------

fn view(model: &Model) -> impl View<Msg> {
    let data = &model.data;
    nodes![
        view_controls(data.template, data.editing),
        match data.template {
            Template::Report => view_report(&data.report, &model.refs.transcript),
            Template::Builder => {
                if data.editing {
                    view_editor(&data.draft)
                } else {
                    view_builder_doc(&data.draft, &model.refs.transcript)
                }
            }
        },
    ]
}

// ------ controls ------

fn view_controls(template: Template, editing: bool) -> Node<Msg> {
    header![
        class!["controls"],
        h1!["Transcript Generator"],
        div![
            class!["control-buttons"],
            button![
                class!["active" => template == Template::Report],
                ev(Ev::Click, |_| Msg::ShowReport),
                "Official Report"
            ],
            button![
                class!["active" => template == Template::Builder],
                ev(Ev::Click, |_| Msg::ShowBuilder),
                "Builder"
            ],
            match template {
                Template::Builder => button![
                    ev(Ev::Click, |_| Msg::ToggleEditing),
                    if editing { "Preview" } else { "Edit" }
                ],
                Template::Report => empty![],
            },
            button![ev(Ev::Click, |_| Msg::DownloadPdf), "Download PDF"],
            button![ev(Ev::Click, |_| Msg::DownloadImage), "Download Image"],
        ]
    ]
}

// ------ official report ------

fn view_report(data: &TranscriptData, transcript_ref: &ElRef<HtmlElement>) -> Node<Msg> {
    div![
        el_ref(transcript_ref),
        class!["transcript"],
        view_report_header(data),
        view_student_info(data),
        div![
            class!["semesters-container"],
            data.semesters.iter().map(view_semester),
        ],
        view_total_summary(data),
        view_signatures(),
    ]
}

fn view_report_header(data: &TranscriptData) -> Node<Msg> {
    div![
        class!["transcript-header"],
        div![
            class!["header-top"],
            div![class!["serial-number"], data.serial_no],
            view_logo(),
            div![class!["header-date"], format!("Date: {}", data.issue_date)],
        ],
        div![class!["header-title"], h1!["Student Report"]],
    ]
}

fn view_logo() -> Node<Msg> {
    div![
        class!["header-logo"],
        img![
            class!["logo"],
            attrs! {
                At::Src => LOGO_PATH;
                At::Alt => "UMT Logo";
            },
        ],
        div![class!["logo-separator"]],
        div![class!["umt-text"], "UMT"],
    ]
}

fn view_student_info(data: &TranscriptData) -> Node<Msg> {
    div![
        class!["student-info"],
        div![
            class!["info-row"],
            span![strong!["ID No:"], format!(" {}", data.student_id)],
            span![strong!["Name:"], format!(" {}", data.student_name)],
        ],
        div![
            class!["info-row"],
            span![strong!["Father's Name:"], format!(" {}", data.fathers_name)],
            span![strong!["School:"], format!(" {}", data.school)],
        ],
        div![
            class!["info-row"],
            span![strong!["Degree:"], format!(" {}", data.degree)],
        ],
    ]
}

fn view_semester(semester: &Semester) -> Node<Msg> {
    div![
        class!["semester-section"],
        h3![class!["semester-title"], semester.name],
        div![
            class!["courses-table"],
            table![
                view_table_head(),
                tbody![
                    semester.courses.iter().map(view_course_row),
                    view_semester_summary(semester),
                ],
            ],
        ],
    ]
}

fn view_table_head() -> Node<Msg> {
    thead![tr![
        th!["Course Code"],
        th!["Course Title"],
        th!["Cr. Hrs"],
        th!["Grade"],
        th!["G.P."],
    ]]
}

fn view_course_row(course: &Course) -> Node<Msg> {
    tr![
        td![class!["course-code"], course.code],
        td![class!["course-title"], course.title],
        td![class!["credits"], course.credits.to_string()],
        td![class!["grade"], course.grade],
        td![class!["points"], util::fmt_points(course.points)],
    ]
}

fn view_semester_summary(semester: &Semester) -> Node<Msg> {
    tr![
        class!["summary-row"],
        td![
            class!["summary-cell"],
            attrs! {At::ColSpan => "5"},
            div![
                class!["summary-content"],
                span![
                    class!["credit-hours"],
                    strong![format!(
                        "Credit Hours Earned: {}",
                        semester.credit_hours_earned
                    )],
                ],
                span![class!["cgpa"], strong![format!("CGPA: {}", semester.cgpa)]],
                span![class!["sgpa"], strong![format!("SGPA: {}", semester.sgpa)]],
            ],
        ],
    ]
}

fn view_total_summary(data: &TranscriptData) -> Node<Msg> {
    div![
        class!["total-summary"],
        div![
            class!["total-summary-content"],
            span![
                strong!["Total Credit Hours Earned:"],
                format!(" {}", data.total_credit_hours),
            ],
            span![
                strong!["Total Grade Points:"],
                format!(" {}", util::fmt_grade_points(data.total_grade_points)),
            ],
            span![strong!["CGPA:"], format!(" {}", data.final_cgpa)],
        ],
    ]
}

fn view_signatures() -> Node<Msg> {
    div![
        class!["transcript-footer"],
        div![
            class!["signature-section"],
            div![
                class!["signature"],
                div![class!["signature-line"]],
                p!["Controller of Examinations"],
            ],
            div![
                class!["signature"],
                div![class!["signature-line", "verified-signature"]],
                p!["Registrar"],
            ],
        ],
    ]
}

// ------ builder document ------

fn view_builder_doc(draft: &EditableTranscript, transcript_ref: &ElRef<HtmlElement>) -> Node<Msg> {
    div![
        el_ref(transcript_ref),
        class!["transcript"],
        div![
            class!["transcript-header"],
            div![class!["header-top"], view_logo()],
            div![class!["header-title"], h1!["Academic Transcript"]],
        ],
        view_draft_info(draft),
        div![
            class!["courses-table"],
            table![
                view_table_head(),
                tbody![
                    draft.courses.iter().map(view_course_row),
                    view_draft_totals(draft),
                ],
            ],
        ],
        view_signatures(),
    ]
}

fn view_draft_info(draft: &EditableTranscript) -> Node<Msg> {
    div![
        class!["student-info"],
        div![
            class!["info-row"],
            span![strong!["Name:"], format!(" {}", draft.name)],
            span![strong!["ID No:"], format!(" {}", draft.id)],
        ],
        div![
            class!["info-row"],
            span![strong!["Program:"], format!(" {}", draft.program)],
            span![strong!["Semester:"], format!(" {}", draft.semester)],
        ],
        div![
            class!["info-row"],
            span![strong!["Year:"], format!(" {}", draft.year)],
            span![strong!["CGPA:"], format!(" {}", draft.cgpa)],
        ],
    ]
}

fn view_draft_totals(draft: &EditableTranscript) -> Node<Msg> {
    tr![
        class!["summary-row"],
        td![
            class!["summary-cell"],
            attrs! {At::ColSpan => "5"},
            div![
                class!["summary-content"],
                span![strong![format!("Total Credits: {}", draft.total_credits())]],
                span![strong![format!(
                    "Total Points: {}",
                    util::fmt_points(draft.total_points())
                )]],
                span![strong![format!("CGPA: {}", draft.cgpa)]],
            ],
        ],
    ]
}

// ------ edit form ------

fn view_editor(draft: &EditableTranscript) -> Node<Msg> {
    div![
        class!["editor"],
        div![
            class!["editor-section"],
            h3!["Student"],
            div![
                class!["field-grid"],
                view_identity_input("Name", IdentityField::Name, &draft.name),
                view_identity_input("ID No", IdentityField::Id, &draft.id),
                view_identity_input("Program", IdentityField::Program, &draft.program),
                view_identity_input("Semester", IdentityField::Semester, &draft.semester),
                view_identity_input("Year", IdentityField::Year, &draft.year),
                view_identity_input("CGPA", IdentityField::Cgpa, &draft.cgpa),
            ],
        ],
        div![
            class!["editor-section"],
            h3!["Courses"],
            draft
                .courses
                .iter()
                .enumerate()
                .map(|(index, course)| view_course_editor(index, course)),
            button![
                class!["add-course"],
                ev(Ev::Click, |_| Msg::AddCourse),
                "Add Course"
            ],
        ],
    ]
}

fn view_identity_input(label: &'static str, field: IdentityField, value: &str) -> Node<Msg> {
    label![
        class!["field"],
        span![label],
        input![
            attrs! {At::Value => value},
            input_ev(Ev::Input, move |value| Msg::IdentityChanged(field, value)),
        ],
    ]
}

fn view_course_editor(index: usize, course: &Course) -> Node<Msg> {
    div![
        class!["course-row"],
        input![
            class!["code"],
            attrs! {
                At::Value => course.code;
                At::Placeholder => "Code";
            },
            input_ev(
                Ev::Input,
                enc!((index) move |value| Msg::CourseChanged(index, CourseField::Code, value))
            ),
        ],
        input![
            class!["title"],
            attrs! {
                At::Value => course.title;
                At::Placeholder => "Course Title";
            },
            input_ev(
                Ev::Input,
                enc!((index) move |value| Msg::CourseChanged(index, CourseField::Title, value))
            ),
        ],
        input![
            class!["credits"],
            attrs! {
                At::Type => "number";
                At::Min => "0";
                At::Value => course.credits.to_string();
            },
            input_ev(
                Ev::Input,
                enc!((index) move |value| Msg::CourseChanged(index, CourseField::Credits, value))
            ),
        ],
        input![
            class!["grade"],
            attrs! {
                At::Value => course.grade;
                At::Placeholder => "Grade";
            },
            input_ev(
                Ev::Input,
                enc!((index) move |value| Msg::CourseChanged(index, CourseField::Grade, value))
            ),
        ],
        input![
            class!["points"],
            attrs! {
                At::Type => "number";
                At::Step => "0.1";
                At::Value => course.points.to_string();
            },
            input_ev(
                Ev::Input,
                enc!((index) move |value| Msg::CourseChanged(index, CourseField::Points, value))
            ),
        ],
        button![
            class!["destroy"],
            ev(
                Ev::Click,
                enc!((index) move |_| Msg::RemoveCourse(index))
            )
        ],
    ]
}

// ------ ------
//     Start
// ------ ------

#[wasm_bindgen(start)]
pub fn render() {
    App::builder(update, view)
        .after_mount(after_mount)
        .build_and_start();
}
