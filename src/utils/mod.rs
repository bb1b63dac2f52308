//! 유틸리티 모듈
//!
//! 시작 배너 출력 등 애플리케이션 전반에서 사용하는 보조 기능을
//! 제공합니다.

pub mod display_terminal;
