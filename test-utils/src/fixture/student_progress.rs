//! Student progress fixtures.

use chrono::Utc;
use entity::student_progress;

/// Creates an in-progress row for student `1` on module `1` at paragraph `highest`.
pub fn entity(highest: i32) -> student_progress::Model {
    let now = Utc::now();
    student_progress::Model {
        id: 1,
        student_id: 1,
        module_id: 1,
        highest_paragraph_index_reached: highest,
        completed: false,
        completed_at: None,
        score: None,
        teacher_feedback: None,
        teacher_feedback_at: None,
        final_summary: None,
        time_spent_minutes: 0,
        started_at: now,
        updated_at: now,
    }
}
