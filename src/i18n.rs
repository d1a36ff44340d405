use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;
use tracing::{debug, warn};

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_COEFFICIENTS: &str = "main_menu.coefficients";
    pub const MAIN_MENU_FLOW_RATE: &str = "main_menu.flow_rate";
    pub const MAIN_MENU_SUMMARY: &str = "main_menu.summary";
    pub const MAIN_MENU_EXPORT: &str = "main_menu.export";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const PROMPT_COEFF_A: &str = "prompt.coeff_a";
    pub const PROMPT_COEFF_B: &str = "prompt.coeff_b";
    pub const PROMPT_COEFF_C: &str = "prompt.coeff_c";
    pub const PROMPT_FLOW_RATE: &str = "prompt.flow_rate";
    pub const PROMPT_EXPORT_PATH: &str = "prompt.export_path";
    pub const NOTE_CLAMPED: &str = "note.clamped";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const EXPORT_DONE: &str = "export.done";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_PROMPT_LANG: &str = "settings.prompt_lang";
    pub const SETTINGS_PROMPT_PRECISION: &str = "settings.prompt_precision";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const SUMMARY_HEADING: &str = "summary.heading";
    pub const SUMMARY_EQUATION: &str = "summary.equation";
    pub const SUMMARY_PARAMS: &str = "summary.params";
    pub const SUMMARY_EDDY: &str = "summary.eddy";
    pub const SUMMARY_LONGITUDINAL: &str = "summary.longitudinal";
    pub const SUMMARY_MASS_TRANSFER: &str = "summary.mass_transfer";
    pub const SUMMARY_OPTIMUM: &str = "summary.optimum";
    pub const SUMMARY_OPT_FLOW: &str = "summary.opt_flow";
    pub const SUMMARY_MIN_H: &str = "summary.min_h";
    pub const SUMMARY_ANALYTIC: &str = "summary.analytic";
    pub const SUMMARY_ANALYTIC_NONE: &str = "summary.analytic_none";
    pub const SUMMARY_SELECTED: &str = "summary.selected";
    pub const SUMMARY_SEL_FLOW: &str = "summary.sel_flow";
    pub const SUMMARY_SEL_H: &str = "summary.sel_h";

    pub const CHART_TITLE: &str = "chart.title";
    pub const CHART_X: &str = "chart.x_axis";
    pub const CHART_Y: &str = "chart.y_axis";
    pub const LEGEND_OPTIMAL: &str = "chart.legend_optimal";
    pub const LEGEND_SELECTED: &str = "chart.legend_selected";
    pub const LEGEND_TERM_A: &str = "chart.legend_term_a";
    pub const LEGEND_TERM_B: &str = "chart.legend_term_b";
    pub const LEGEND_TERM_C: &str = "chart.legend_term_c";

    pub const GUI_TITLE: &str = "gui.title";
    pub const GUI_SUBTITLE: &str = "gui.subtitle";
    pub const GUI_SIDEBAR_HEADING: &str = "gui.sidebar_heading";
    pub const GUI_SIDEBAR_HINT: &str = "gui.sidebar_hint";
    pub const SLIDER_A: &str = "gui.slider_a";
    pub const SLIDER_B: &str = "gui.slider_b";
    pub const SLIDER_C: &str = "gui.slider_c";
    pub const SLIDER_U: &str = "gui.slider_u";
    pub const HELP_A: &str = "help.a";
    pub const HELP_B: &str = "help.b";
    pub const HELP_C: &str = "help.c";
    pub const HELP_U: &str = "help.u";
    pub const GUI_SHOW_TERMS: &str = "gui.show_terms";
    pub const GUI_RESET: &str = "gui.reset";
    pub const GUI_EXPORT: &str = "gui.export";
    pub const GUI_SETTINGS: &str = "gui.settings";
    pub const GUI_LANGUAGE: &str = "gui.language";
    pub const GUI_LANG_AUTO: &str = "gui.lang_auto";
    pub const GUI_PRECISION: &str = "gui.precision";
    pub const GUI_SAVE: &str = "gui.save";
    pub const GUI_SAVED: &str = "gui.saved";
    pub const GUI_HELP: &str = "gui.help";
    pub const GUI_GLOSSARY: &str = "gui.glossary";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    De,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("de") {
            Language::De
        } else if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Ko => "ko",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(en/de/ko)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 locales/ 를 찾고, 그것도 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        debug!(lang = lang_code, overrides = overrides.is_some(), "translator ready");
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 → 영어 순으로 찾는다.
    pub fn t(&self, key: &str) -> Cow<'_, str> {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return Cow::Borrowed(v.as_str());
        }
        let builtin = match self.lang {
            Language::En => en(key),
            Language::De => de(key).or_else(|| en(key)),
            Language::Ko => ko(key).or_else(|| en(key)),
        };
        Cow::Borrowed(builtin.unwrap_or("[missing translation]"))
    }

    /// 번역 문자열의 `{name}` 자리를 채운다.
    pub fn tf(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(&self.t(key), vars)
    }
}

/// `{name}` 형식의 자리표시자를 값으로 바꾼다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("de") => Some("de".into()),
        other if other.starts_with("ko") => Some("ko".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    matches!(lang.as_str(), "en" | "de" | "ko").then_some(lang)
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(&path).ok()?;
        let map = parse_toml_to_map(&content);
        if map.is_none() {
            warn!(path = %path.display(), "language pack is empty or malformed");
        }
        map
    };

    // 1) full code (e.g., de-de)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., de)
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Van Deemter Toolbox ===",
        MAIN_MENU_COEFFICIENTS => "1) Set coefficients A, B, C",
        MAIN_MENU_FLOW_RATE => "2) Set flow rate u",
        MAIN_MENU_SUMMARY => "3) Show summary",
        MAIN_MENU_EXPORT => "4) Export curve (CSV)",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        PROMPT_COEFF_A => "A: Eddy diffusion [{min} to {max}]: ",
        PROMPT_COEFF_B => "B: Longitudinal diffusion [{min} to {max}]: ",
        PROMPT_COEFF_C => "C: Mass transfer [{min} to {max}]: ",
        PROMPT_FLOW_RATE => "u: Linear flow rate (cm/s) [{min} to {max}]: ",
        PROMPT_EXPORT_PATH => "Output file (enter for van_deemter.csv): ",
        NOTE_CLAMPED => "Value {value} is out of range and was set to {clamped}.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        EXPORT_DONE => "Curve written to {path}.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Language: {lang}, decimal places: {precision}",
        SETTINGS_PROMPT_LANG => "Language (auto/en/de/ko, enter to keep): ",
        SETTINGS_PROMPT_PRECISION => "Decimal places (enter to keep): ",
        SETTINGS_SAVED => "Settings saved.",
        SUMMARY_HEADING => "Key findings",
        SUMMARY_EQUATION => "Van Deemter equation: H = A + B/u + C·u",
        SUMMARY_PARAMS => "Current parameters:",
        SUMMARY_EDDY => "Eddy diffusion (A):",
        SUMMARY_LONGITUDINAL => "Longitudinal diffusion (B):",
        SUMMARY_MASS_TRANSFER => "Mass transfer (C):",
        SUMMARY_OPTIMUM => "Optimal values from the chart:",
        SUMMARY_OPT_FLOW => "Optimal flow rate:",
        SUMMARY_MIN_H => "Minimal plate height:",
        SUMMARY_ANALYTIC => "Analytic optimum u = √(B/C):",
        SUMMARY_ANALYTIC_NONE => "Analytic optimum: none (requires B > 0 and C > 0)",
        SUMMARY_SELECTED => "Selected point:",
        SUMMARY_SEL_FLOW => "Linear flow rate:",
        SUMMARY_SEL_H => "Calculated plate height:",
        CHART_TITLE => "Van Deemter plot",
        CHART_X => "Linear flow rate (u)",
        CHART_Y => "Plate height (H)",
        LEGEND_OPTIMAL => "Optimal: u={u}, H={h}",
        LEGEND_SELECTED => "Selected: u={u}, H={h}",
        LEGEND_TERM_A => "A (eddy diffusion)",
        LEGEND_TERM_B => "B/u (longitudinal diffusion)",
        LEGEND_TERM_C => "C·u (mass transfer)",
        GUI_TITLE => "Van Deemter equation visualization",
        GUI_SUBTITLE => "An interactive tool for exploring the factors that affect chromatographic efficiency.",
        GUI_SIDEBAR_HEADING => "Adjust parameters",
        GUI_SIDEBAR_HINT => "Use the sliders to change the coefficients of the Van Deemter equation.",
        SLIDER_A => "A: Eddy diffusion",
        SLIDER_B => "B: Longitudinal diffusion",
        SLIDER_C => "C: Mass transfer",
        SLIDER_U => "u: Linear flow rate (cm/s)",
        HELP_A => "Eddy diffusion does not depend on flow rate. A higher value raises H at every flow rate.",
        HELP_B => "Longitudinal diffusion is inversely proportional to flow rate. It dominates at low flow rates.",
        HELP_C => "Mass transfer is directly proportional to flow rate. It dominates at high flow rates.",
        HELP_U => "Linear flow rate of the mobile phase.",
        GUI_SHOW_TERMS => "Show individual terms",
        GUI_RESET => "Reset",
        GUI_EXPORT => "Export CSV",
        GUI_SETTINGS => "Settings",
        GUI_LANGUAGE => "Language",
        GUI_LANG_AUTO => "System",
        GUI_PRECISION => "Decimal places",
        GUI_SAVE => "Save settings",
        GUI_SAVED => "Saved.",
        GUI_HELP => "Help",
        GUI_GLOSSARY => "Plate height H: column efficiency, lower is better.\nLinear flow rate u: velocity of the mobile phase.\nOptimal flow rate: u_opt = √(B/C), H_min = A + 2√(B·C).",
        _ => return None,
    })
}

fn de(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Fehler",
        APP_EXIT => "Programm wird beendet.",
        MAIN_MENU_COEFFICIENTS => "1) Koeffizienten A, B, C setzen",
        MAIN_MENU_FLOW_RATE => "2) Flussrate u setzen",
        MAIN_MENU_SUMMARY => "3) Zusammenfassung anzeigen",
        MAIN_MENU_EXPORT => "4) Kurve exportieren (CSV)",
        MAIN_MENU_SETTINGS => "5) Einstellungen",
        MAIN_MENU_EXIT => "0) Beenden",
        PROMPT_MENU_SELECT => "Menü wählen: ",
        INVALID_SELECTION_RETRY => "Ungültige Eingabe. Bitte erneut versuchen.",
        PROMPT_COEFF_A => "A: Eddy-Diffusion [{min} bis {max}]: ",
        PROMPT_COEFF_B => "B: Longitudinale Diffusion [{min} bis {max}]: ",
        PROMPT_COEFF_C => "C: Massentransfer [{min} bis {max}]: ",
        PROMPT_FLOW_RATE => "u: Lineare Flussrate (cm/s) [{min} bis {max}]: ",
        PROMPT_EXPORT_PATH => "Ausgabedatei (Enter für van_deemter.csv): ",
        NOTE_CLAMPED => "Wert {value} liegt außerhalb des Bereichs und wurde auf {clamped} gesetzt.",
        ERROR_INVALID_NUMBER => "Bitte eine Zahl eingeben.",
        EXPORT_DONE => "Kurve gespeichert: {path}",
        SETTINGS_HEADING => "\n-- Einstellungen --",
        SETTINGS_CURRENT => "Sprache: {lang}, Nachkommastellen: {precision}",
        SETTINGS_PROMPT_LANG => "Sprache (auto/en/de/ko, Enter zum Beibehalten): ",
        SETTINGS_PROMPT_PRECISION => "Nachkommastellen (Enter zum Beibehalten): ",
        SETTINGS_SAVED => "Einstellungen gespeichert.",
        SUMMARY_HEADING => "Wichtige Erkenntnisse",
        SUMMARY_EQUATION => "Van-Deemter-Gleichung: H = A + B/u + C·u",
        SUMMARY_PARAMS => "Aktuelle Parameter:",
        SUMMARY_EDDY => "Eddy-Diffusion (A):",
        SUMMARY_LONGITUDINAL => "Longitudinale Diffusion (B):",
        SUMMARY_MASS_TRANSFER => "Massentransfer (C):",
        SUMMARY_OPTIMUM => "Optimale Werte aus dem Diagramm:",
        SUMMARY_OPT_FLOW => "Optimale Flussrate:",
        SUMMARY_MIN_H => "Minimale Bodenhöhe:",
        SUMMARY_ANALYTIC => "Analytisches Optimum u = √(B/C):",
        SUMMARY_ANALYTIC_NONE => "Analytisches Optimum: keines (erfordert B > 0 und C > 0)",
        SUMMARY_SELECTED => "Ausgewählter Punkt:",
        SUMMARY_SEL_FLOW => "Lineare Flussrate:",
        SUMMARY_SEL_H => "Berechnete Bodenhöhe:",
        CHART_TITLE => "Van-Deemter-Diagramm",
        CHART_X => "Lineare Flussrate (u)",
        CHART_Y => "Bodenhöhe (H)",
        LEGEND_OPTIMAL => "Optimal: u={u}, H={h}",
        LEGEND_SELECTED => "Ausgewählt: u={u}, H={h}",
        LEGEND_TERM_A => "A (Eddy-Diffusion)",
        LEGEND_TERM_B => "B/u (longitudinale Diffusion)",
        LEGEND_TERM_C => "C·u (Massentransfer)",
        GUI_TITLE => "Visualisierung der Van-Deemter-Gleichung",
        GUI_SUBTITLE => "Ein interaktives Werkzeug zur Untersuchung der Faktoren, die die chromatographische Effizienz beeinflussen.",
        GUI_SIDEBAR_HEADING => "Parameter anpassen",
        GUI_SIDEBAR_HINT => "Verwende die Schieberegler, um die Koeffizienten der Van-Deemter-Gleichung zu ändern.",
        SLIDER_A => "A: Eddy-Diffusion",
        SLIDER_B => "B: Longitudinale Diffusion",
        SLIDER_C => "C: Massentransfer",
        SLIDER_U => "u: Lineare Flussrate (cm/s)",
        HELP_A => "Die Eddy-Diffusion ist unabhängig von der Flussrate. Ein höherer Wert erhöht H bei allen Flussraten.",
        HELP_B => "Die longitudinale Diffusion ist umgekehrt proportional zur Flussrate. Dieser Term dominiert bei niedrigen Flussraten.",
        HELP_C => "Der Massentransfer ist direkt proportional zur Flussrate. Dieser Term dominiert bei hohen Flussraten.",
        HELP_U => "Die lineare Flussrate der mobilen Phase.",
        GUI_SHOW_TERMS => "Einzelne Terme anzeigen",
        GUI_RESET => "Zurücksetzen",
        GUI_EXPORT => "CSV exportieren",
        GUI_SETTINGS => "Einstellungen",
        GUI_LANGUAGE => "Sprache",
        GUI_LANG_AUTO => "System",
        GUI_PRECISION => "Nachkommastellen",
        GUI_SAVE => "Einstellungen speichern",
        GUI_SAVED => "Gespeichert.",
        GUI_HELP => "Hilfe",
        GUI_GLOSSARY => "Bodenhöhe H: Maß der Säuleneffizienz, kleiner ist besser.\nLineare Flussrate u: Geschwindigkeit der mobilen Phase.\nOptimale Flussrate: u_opt = √(B/C), H_min = A + 2√(B·C).",
        _ => return None,
    })
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_COEFFICIENTS => "1) 계수 A, B, C 입력",
        MAIN_MENU_FLOW_RATE => "2) 유속 u 입력",
        MAIN_MENU_SUMMARY => "3) 결과 요약",
        MAIN_MENU_EXPORT => "4) 곡선 내보내기 (CSV)",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        PROMPT_COEFF_A => "A: 에디 확산 [{min} ~ {max}]: ",
        PROMPT_COEFF_B => "B: 종방향 확산 [{min} ~ {max}]: ",
        PROMPT_COEFF_C => "C: 물질 전달 [{min} ~ {max}]: ",
        PROMPT_FLOW_RATE => "u: 선속도 (cm/s) [{min} ~ {max}]: ",
        PROMPT_EXPORT_PATH => "출력 파일 (엔터 시 van_deemter.csv): ",
        NOTE_CLAMPED => "입력값 {value} 이(가) 범위를 벗어나 {clamped} (으)로 조정했습니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        EXPORT_DONE => "곡선을 저장했습니다: {path}",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "언어: {lang}, 소수 자릿수: {precision}",
        SETTINGS_PROMPT_LANG => "언어 (auto/en/de/ko, 유지하려면 엔터): ",
        SETTINGS_PROMPT_PRECISION => "소수 자릿수 (유지하려면 엔터): ",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        SUMMARY_HEADING => "주요 결과",
        SUMMARY_EQUATION => "Van Deemter 식: H = A + B/u + C·u",
        SUMMARY_PARAMS => "현재 계수:",
        SUMMARY_EDDY => "에디 확산 (A):",
        SUMMARY_LONGITUDINAL => "종방향 확산 (B):",
        SUMMARY_MASS_TRANSFER => "물질 전달 (C):",
        SUMMARY_OPTIMUM => "그래프상의 최적값:",
        SUMMARY_OPT_FLOW => "최적 유속:",
        SUMMARY_MIN_H => "최소 단높이:",
        SUMMARY_ANALYTIC => "해석적 최적점 u = √(B/C):",
        SUMMARY_ANALYTIC_NONE => "해석적 최적점: 없음 (B > 0, C > 0 필요)",
        SUMMARY_SELECTED => "선택한 점:",
        SUMMARY_SEL_FLOW => "선속도:",
        SUMMARY_SEL_H => "계산된 단높이:",
        CHART_X => "선속도 (u)",
        CHART_Y => "단높이 (H)",
        LEGEND_OPTIMAL => "최적: u={u}, H={h}",
        LEGEND_SELECTED => "선택: u={u}, H={h}",
        GUI_SIDEBAR_HEADING => "계수 조정",
        GUI_SIDEBAR_HINT => "슬라이더로 Van Deemter 식의 계수를 바꿔 보세요.",
        SLIDER_A => "A: 에디 확산",
        SLIDER_B => "B: 종방향 확산",
        SLIDER_C => "C: 물질 전달",
        SLIDER_U => "u: 선속도 (cm/s)",
        GUI_SHOW_TERMS => "항별 곡선 표시",
        GUI_RESET => "초기화",
        GUI_EXPORT => "CSV 내보내기",
        GUI_SETTINGS => "설정",
        GUI_LANGUAGE => "언어",
        GUI_LANG_AUTO => "시스템",
        GUI_PRECISION => "소수 자릿수",
        GUI_SAVE => "설정 저장",
        GUI_SAVED => "저장되었습니다.",
        GUI_HELP => "도움말",
        _ => return None,
    })
}
