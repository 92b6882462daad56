//! 채점 및 리뷰 집계

use serde::Serialize;

use super::model::{Question, Submission, Tryout};

/// 문항별 채점 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerStatus {
    Correct,
    Wrong,
    Unanswered,
}

/// 소시험 점수
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubtestScore {
    pub subtest_id: String,
    pub correct: u32,
    pub wrong: u32,
    pub unanswered: u32,

    /// 획득 점수
    pub points: u32,

    /// 만점
    pub max_points: u32,
}

/// 트라이아웃 점수
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TryoutScore {
    pub tryout_id: String,
    pub subtests: Vec<SubtestScore>,
    pub correct: u32,
    pub wrong: u32,
    pub unanswered: u32,
    pub points: u32,
    pub max_points: u32,

    /// 트라이아웃에 없는 문항에 대한 답 (채점에서 제외)
    pub ignored_answers: u32,
}

impl TryoutScore {
    /// 백분율 점수 (0.0 ~ 100.0, 만점이 0이면 0.0)
    pub fn percentage(&self) -> f64 {
        if self.max_points == 0 {
            return 0.0;
        }
        self.points as f64 * 100.0 / self.max_points as f64
    }
}

/// 리뷰 화면용 문항 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionReview {
    pub subtest_id: String,
    pub question_id: String,
    pub chosen: Option<String>,
    pub answer_key: String,
    pub status: AnswerStatus,
}

fn grade(question: &Question, chosen: Option<&str>) -> AnswerStatus {
    match chosen {
        None => AnswerStatus::Unanswered,
        Some(answer) if answer == question.answer_key.trim() => AnswerStatus::Correct,
        Some(_) => AnswerStatus::Wrong,
    }
}

/// 제출 답안 채점
pub fn score(tryout: &Tryout, submission: &Submission) -> TryoutScore {
    let mut total = TryoutScore {
        tryout_id: tryout.id.clone(),
        ..Default::default()
    };

    for subtest in &tryout.subtests {
        let mut sub = SubtestScore {
            subtest_id: subtest.id.clone(),
            ..Default::default()
        };

        for question in &subtest.questions {
            sub.max_points = sub.max_points.saturating_add(question.points);
            match grade(question, submission.answer(&question.id)) {
                AnswerStatus::Correct => {
                    sub.correct = sub.correct.saturating_add(1);
                    sub.points = sub.points.saturating_add(question.points);
                }
                AnswerStatus::Wrong => sub.wrong = sub.wrong.saturating_add(1),
                AnswerStatus::Unanswered => sub.unanswered = sub.unanswered.saturating_add(1),
            }
        }

        total.correct = total.correct.saturating_add(sub.correct);
        total.wrong = total.wrong.saturating_add(sub.wrong);
        total.unanswered = total.unanswered.saturating_add(sub.unanswered);
        total.points = total.points.saturating_add(sub.points);
        total.max_points = total.max_points.saturating_add(sub.max_points);
        total.subtests.push(sub);
    }

    total.ignored_answers = submission
        .answers
        .keys()
        .filter(|id| !tryout.contains_question(id))
        .count() as u32;

    total
}

/// 리뷰 목록 생성 (출제 순서 유지)
pub fn review(tryout: &Tryout, submission: &Submission) -> Vec<QuestionReview> {
    tryout
        .subtests
        .iter()
        .flat_map(|subtest| {
            subtest.questions.iter().map(move |question| {
                let chosen = submission.answer(&question.id);
                QuestionReview {
                    subtest_id: subtest.id.clone(),
                    question_id: question.id.clone(),
                    chosen: chosen.map(str::to_string),
                    answer_key: question.answer_key.clone(),
                    status: grade(question, chosen),
                }
            })
        })
        .collect()
}
