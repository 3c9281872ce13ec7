use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::workflows::catalog::{Lesson, LessonCatalog, LessonId};

/// Points owed for completing `lesson_id`.
///
/// Zero when the lesson was already completed or is not in the catalog. The caller records the
/// completion and adds the returned points.
pub fn award_lesson_points(
    lesson_id: &LessonId,
    completed: &BTreeSet<LessonId>,
    lessons: &LessonCatalog,
) -> u32 {
    if completed.contains(lesson_id) {
        return 0;
    }

    lessons
        .get(lesson_id)
        .map(|lesson| lesson.points)
        .unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub lesson_id: LessonId,
    pub correct: usize,
    pub total: usize,
}

impl QuizResult {
    pub fn summary(&self) -> String {
        format!("{} / {} correct", self.correct, self.total)
    }
}

/// Count correct answers. Missing or out-of-range answers are wrong.
pub fn grade_quiz(lesson: &Lesson, answers: &[usize]) -> QuizResult {
    let correct = lesson
        .quiz
        .iter()
        .zip(answers)
        .filter(|(question, answer)| question.answer_index == **answer)
        .count();

    QuizResult {
        lesson_id: lesson.id.clone(),
        correct,
        total: lesson.quiz.len(),
    }
}
