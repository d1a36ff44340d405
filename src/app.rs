use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::deemter::{Analysis, DeemterError};
use crate::i18n::{self, Translator};
use crate::input::InputSnapshot;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// 계산 전제 조건 위반
    #[error("calculation error: {0}")]
    Engine(#[from] DeemterError),
}

/// CLI 세션 상태. 계산 결과는 저장하지 않고 필요할 때마다 스냅샷에서 다시 계산한다.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: Config,
    pub config_path: PathBuf,
    pub tr: Translator,
    pub snapshot: InputSnapshot,
}

impl Session {
    /// 설정과 CLI 언어 인자로 세션을 만든다. 시작 입력값은 설정의 defaults를 범위 안으로 제한한 값이다.
    pub fn new(config: Config, config_path: PathBuf, cli_lang: &str) -> Self {
        let lang = i18n::resolve_language(cli_lang, Some(config.language.as_str()));
        let tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
        let snapshot = config.bounds.clamp(&config.defaults);
        Self {
            config,
            config_path,
            tr,
            snapshot,
        }
    }

    /// 현재 스냅샷으로 전체 결과를 계산한다.
    pub fn analysis(&self) -> Result<Analysis, AppError> {
        Ok(Analysis::compute(&self.snapshot, &self.config.domain)?)
    }

    /// 언어 설정을 바꾸고 번역기를 다시 만든다.
    pub fn set_language(&mut self, code: &str) {
        self.config.language = code.to_string();
        let lang = i18n::resolve_language(code, None);
        self.tr = Translator::new_with_pack(&lang, self.config.language_pack_dir.as_deref());
        info!(lang = %lang, "language changed");
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.config.save_to(&self.config_path)?;
        Ok(())
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
/// 표준 입력이 닫히면 메뉴에서든 값 입력 중이든 종료와 같이 처리한다.
pub fn run(session: &mut Session) -> Result<(), AppError> {
    loop {
        let outcome = match ui_cli::main_menu(&session.tr)? {
            MenuChoice::Coefficients => ui_cli::handle_coefficients(session),
            MenuChoice::FlowRate => ui_cli::handle_flow_rate(session),
            MenuChoice::Summary => ui_cli::handle_summary(session),
            MenuChoice::Export => ui_cli::handle_export(session),
            MenuChoice::Settings => ui_cli::handle_settings(session).and_then(|()| session.save()),
            MenuChoice::Exit => break,
        };
        match outcome {
            Ok(()) => {}
            Err(err) if ui_cli::is_end_of_input(&err) => {
                info!("input closed, leaving interactive mode");
                break;
            }
            Err(err) => return Err(err),
        }
    }
    session.save()?;
    println!("{}", session.tr.t(i18n::keys::APP_EXIT));
    Ok(())
}
