use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::app::{AppError, Session};
use crate::config::MAX_PRECISION;
use crate::export;
use crate::i18n::{keys, Translator};
use crate::input::Bound;
use crate::summary;

/// 내보내기 파일 기본 이름.
pub const DEFAULT_EXPORT_FILE: &str = "van_deemter.csv";

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Coefficients,
    FlowRate,
    Summary,
    Export,
    Settings,
    Exit,
}

impl MenuChoice {
    /// 메뉴 번호를 해석한다.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Coefficients),
            "2" => Some(MenuChoice::FlowRate),
            "3" => Some(MenuChoice::Summary),
            "4" => Some(MenuChoice::Export),
            "5" => Some(MenuChoice::Settings),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    main_menu_from(tr, &mut io::stdin().lock())
}

/// 입력 스트림에서 메뉴 선택을 읽는다. 입력이 끝나면 종료로 본다.
pub fn main_menu_from<R: BufRead>(
    tr: &Translator,
    input: &mut R,
) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_COEFFICIENTS,
        keys::MAIN_MENU_FLOW_RATE,
        keys::MAIN_MENU_SUMMARY,
        keys::MAIN_MENU_EXPORT,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = match read_line_from(input, &tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(err) if is_end_of_input(&err) => {
                println!();
                return Ok(MenuChoice::Exit);
            }
            Err(err) => return Err(err),
        };
        match MenuChoice::parse(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 표준 입력이 닫혀 더 읽을 수 없는 경우인지 확인한다.
pub fn is_end_of_input(err: &AppError) -> bool {
    matches!(err, AppError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}

/// 계수 A, B, C 입력을 처리한다. 범위를 벗어난 값은 제한 후 안내한다.
pub fn handle_coefficients(session: &mut Session) -> Result<(), AppError> {
    let bounds = session.config.bounds;
    let tr = &session.tr;
    let a = read_bounded(tr, keys::PROMPT_COEFF_A, &bounds.a)?;
    let b = read_bounded(tr, keys::PROMPT_COEFF_B, &bounds.b)?;
    let c = read_bounded(tr, keys::PROMPT_COEFF_C, &bounds.c)?;
    session.snapshot.coefficients.a = a;
    session.snapshot.coefficients.b = b;
    session.snapshot.coefficients.c = c;
    handle_summary(session)
}

/// 선택 유속 입력을 처리한다.
pub fn handle_flow_rate(session: &mut Session) -> Result<(), AppError> {
    let bound = session.config.bounds.flow_rate;
    session.snapshot.flow_rate = read_bounded(&session.tr, keys::PROMPT_FLOW_RATE, &bound)?;
    handle_summary(session)
}

/// 현재 입력으로 결과를 계산해 요약을 출력한다.
pub fn handle_summary(session: &Session) -> Result<(), AppError> {
    let analysis = session.analysis()?;
    println!();
    println!("{}", summary::equation_label(&analysis.coefficients));
    println!(
        "{}",
        summary::render(&analysis, &session.tr, session.config.precision)
    );
    Ok(())
}

/// 샘플 곡선을 CSV 파일로 내보낸다.
pub fn handle_export(session: &Session) -> Result<(), AppError> {
    let input = read_line(&session.tr.t(keys::PROMPT_EXPORT_PATH))?;
    let path = match input.trim() {
        "" => PathBuf::from(DEFAULT_EXPORT_FILE),
        other => PathBuf::from(other),
    };
    let analysis = session.analysis()?;
    export::save_curve_csv(&path, &analysis.curve, &analysis.coefficients)?;
    println!(
        "{}",
        session
            .tr
            .tf(keys::EXPORT_DONE, &[("path", path.display().to_string())])
    );
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(session: &mut Session) -> Result<(), AppError> {
    println!("{}", session.tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}",
        session.tr.tf(
            keys::SETTINGS_CURRENT,
            &[
                ("lang", session.config.language.clone()),
                ("precision", session.config.precision.to_string()),
            ],
        )
    );
    let lang = read_line(&session.tr.t(keys::SETTINGS_PROMPT_LANG))?;
    if !lang.trim().is_empty() {
        session.set_language(lang.trim());
    }
    loop {
        let precision = read_line(&session.tr.t(keys::SETTINGS_PROMPT_PRECISION))?;
        if precision.trim().is_empty() {
            break;
        }
        match precision.trim().parse::<usize>() {
            Ok(p) => {
                session.config.precision = p.min(MAX_PRECISION);
                break;
            }
            Err(_) => println!("{}", session.tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
    println!("{}", session.tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 범위 밖 입력을 제한하고, 바뀐 경우 안내 문구를 돌려준다.
pub fn clamp_with_note(tr: &Translator, bound: &Bound, value: f64) -> (f64, Option<String>) {
    let clamped = bound.clamp(value);
    if clamped == value {
        (clamped, None)
    } else {
        let note = tr.tf(
            keys::NOTE_CLAMPED,
            &[("value", value.to_string()), ("clamped", clamped.to_string())],
        );
        (clamped, Some(note))
    }
}

fn read_bounded(tr: &Translator, prompt_key: &str, bound: &Bound) -> Result<f64, AppError> {
    let prompt = tr.tf(
        prompt_key,
        &[("min", bound.min.to_string()), ("max", bound.max.to_string())],
    );
    let value = read_f64(tr, &prompt)?;
    let (value, note) = clamp_with_note(tr, bound, value);
    if let Some(note) = note {
        println!("{note}");
    }
    Ok(value)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

/// 한 줄을 읽는다. 0 바이트를 읽으면 입력 끝이므로 UnexpectedEof 오류를 돌려준다.
fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    read_f64_from(tr, &mut io::stdin().lock(), prompt)
}

fn read_f64_from<R: BufRead>(
    tr: &Translator,
    input: &mut R,
    prompt: &str,
) -> Result<f64, AppError> {
    loop {
        let s = read_line_from(input, prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_map_to_choices() {
        assert_eq!(MenuChoice::parse("1\n"), Some(MenuChoice::Coefficients));
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::Export));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("9"), None);
    }

    #[test]
    fn closed_input_exits_menu() {
        let tr = Translator::new("en");
        let mut input = io::Cursor::new("");
        assert_eq!(main_menu_from(&tr, &mut input).unwrap(), MenuChoice::Exit);

        let mut input = io::Cursor::new("7\nx\n");
        assert_eq!(main_menu_from(&tr, &mut input).unwrap(), MenuChoice::Exit);

        let mut input = io::Cursor::new("9\n3\n");
        assert_eq!(main_menu_from(&tr, &mut input).unwrap(), MenuChoice::Summary);
    }

    #[test]
    fn closed_input_ends_number_prompt() {
        let tr = Translator::new("en");
        let mut input = io::Cursor::new("abc\n");
        let err = read_f64_from(&tr, &mut input, "> ").unwrap_err();
        assert!(is_end_of_input(&err));

        let mut input = io::Cursor::new("abc\n2.5\n");
        assert_eq!(read_f64_from(&tr, &mut input, "> ").unwrap(), 2.5);
    }

    #[test]
    fn other_errors_are_not_end_of_input() {
        let err = AppError::Io(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(!is_end_of_input(&err));
    }

    #[test]
    fn out_of_range_value_gets_note() {
        let tr = Translator::new("en");
        let bound = Bound::new(1.0, 200.0, 1.0);
        let (v, note) = clamp_with_note(&tr, &bound, 0.0);
        assert_eq!(v, 1.0);
        assert_eq!(
            note.as_deref(),
            Some("Value 0 is out of range and was set to 1.")
        );
        assert_eq!(clamp_with_note(&tr, &bound, 50.0), (50.0, None));
    }
}
