#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use transcriptgen::editor::{EditableTranscript, IdentityField};
use transcriptgen::export;
use transcriptgen::transcript::TranscriptData;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn report_seed_data_is_complete() {
    let data = TranscriptData::defaults();
    assert_eq!(data.semesters.len(), 2);
    assert_eq!(data.total_credit_hours, 38);
}

#[wasm_bindgen_test]
fn draft_snapshots_do_not_alias() {
    let draft = EditableTranscript::defaults();
    let next = draft.with_field(IdentityField::Name, "Someone Else".into());
    assert_eq!(draft.name, "Faiz Shahzad");
    assert_eq!(next.name, "Someone Else");
}

#[wasm_bindgen_test]
fn export_filenames_follow_the_student_name() {
    let data = TranscriptData::defaults();
    assert_eq!(
        export::filename(&data.student_name, "pdf"),
        "Faiz Shahzad_transcript.pdf"
    );
}
