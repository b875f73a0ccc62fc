//! 중력 에너지 저장(GESS) 계산 로직을 라이브러리로 분리하여 CLI 외의 프런트엔드도 같은 코어를 쓰게 한다.

pub mod app;
pub mod cli;
pub mod config;
pub mod gess;
pub mod i18n;
pub mod material_db;
pub mod ui_cli;
pub mod units;
