//! 트라이아웃 타입

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// 트라이아웃
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tryout {
    pub id: String,

    #[serde(default)]
    pub title: String,

    /// 소시험 목록 (응시 순서)
    #[serde(default)]
    pub subtests: Vec<Subtest>,
}

/// 소시험
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtest {
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// 문항 목록 (출제 순서)
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// 문항
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,

    /// 정답
    #[serde(rename = "answerKey", alias = "answer_key")]
    pub answer_key: String,

    /// 배점
    #[serde(default = "default_points")]
    pub points: u32,
}

fn default_points() -> u32 {
    1
}

impl Question {
    pub fn new(id: impl Into<String>, answer_key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            answer_key: answer_key.into(),
            points: default_points(),
        }
    }

    /// 배점 설정
    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }
}

impl Subtest {
    pub fn new(id: impl Into<String>, name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            questions,
        }
    }
}

impl Tryout {
    pub fn new(id: impl Into<String>, title: impl Into<String>, subtests: Vec<Subtest>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtests,
        }
    }

    /// 전체 문항 수
    pub fn question_count(&self) -> usize {
        self.subtests.iter().map(|s| s.questions.len()).sum()
    }

    /// 문항 ID로 조회
    pub fn contains_question(&self, question_id: &str) -> bool {
        self.subtests
            .iter()
            .flat_map(|s| s.questions.iter())
            .any(|q| q.id == question_id)
    }
}

/// 제출 답안 (문항 ID → 선택한 답)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub answers: HashMap<String, String>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    /// 답안 추가
    pub fn with_answer(mut self, question_id: impl Into<String>, answer: impl Into<String>) -> Self {
        self.answers.insert(question_id.into(), answer.into());
        self
    }

    /// 문항의 답 조회 (공백만 있는 답은 미응답)
    pub fn answer(&self, question_id: &str) -> Option<&str> {
        self.answers
            .get(question_id)
            .map(|a| a.trim())
            .filter(|a| !a.is_empty())
    }
}
