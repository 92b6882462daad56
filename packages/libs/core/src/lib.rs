//! bimbel-core: bimbelbeta 공통 비즈니스 규칙 라이브러리
//!
//! 서버 API와 클라이언트 렌더링이 공유하는 규칙을 제공합니다.
//!
//! # 모듈 구조
//!
//! - `access`: premium 콘텐츠 접근 정책 및 서버 측 가드
//! - `ratelimit`: 키별 token bucket rate limiter
//! - `prompt`: 목표 선택 안내 표시 규칙
//! - `tryout`: 트라이아웃 채점 및 리뷰 집계
//! - `config`: YAML/환경변수 설정
//! - `error`: 공통 에러 타입

pub mod access;
pub mod config;
pub mod error;
pub mod prompt;
pub mod ratelimit;
pub mod tryout;

pub use config::Config;
pub use error::{Error, Result};
