//! 트라이아웃(모의고사) 채점 및 리뷰
//!
//! 트라이아웃은 여러 소시험(subtest)으로, 소시험은 문항으로 구성됩니다.
//! 제출된 답안을 채점해 소시험별/전체 점수를 집계하고, 리뷰 화면용
//! 문항별 결과를 만듭니다. 모두 순수 함수입니다.
//!
//! # 모듈 구조
//!
//! - `model`: 트라이아웃/소시험/문항/답안 타입
//! - `scoring`: 채점 및 리뷰 집계

mod model;
mod scoring;

pub use model::{Question, Submission, Subtest, Tryout};
pub use scoring::{review, score, AnswerStatus, QuestionReview, SubtestScore, TryoutScore};
