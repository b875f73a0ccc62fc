use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const USING_DEFAULT: &str = "general.using_default";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_SWEEPS: &str = "main_menu.sweeps";
    pub const MAIN_MENU_OPTIMIZE: &str = "main_menu.optimize";
    pub const MAIN_MENU_SCENARIO: &str = "main_menu.scenario";
    pub const MAIN_MENU_SIZING: &str = "main_menu.sizing";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION: &str = "error.invalid_selection";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const PROMPT_MATERIAL: &str = "prompt.material";
    pub const PROMPT_MASS: &str = "prompt.mass";
    pub const PROMPT_HEIGHT: &str = "prompt.height";
    pub const PROMPT_SYSTEM_EFFICIENCY: &str = "prompt.system_efficiency";
    pub const PROMPT_CYCLES: &str = "prompt.cycles";
    pub const PROMPT_TIME_ELAPSED: &str = "prompt.time_elapsed";
    pub const PROMPT_CRITERION: &str = "prompt.criterion";
    pub const PROMPT_SCENARIO: &str = "prompt.scenario";
    pub const PROMPT_TARGET_ENERGY: &str = "prompt.target_energy";

    pub const CALC_HEADING: &str = "calc.heading";
    pub const RESULT_POTENTIAL: &str = "result.potential";
    pub const RESULT_RECOVERED: &str = "result.recovered";
    pub const RESULT_INPUT_OUTPUT: &str = "result.input_output";
    pub const RESULT_POWER_LOSS: &str = "result.power_loss";
    pub const RESULT_EFFICIENCY: &str = "result.efficiency";
    pub const RESULT_ROUND_TRIP: &str = "result.round_trip";
    pub const RESULT_LIFESPAN: &str = "result.lifespan";
    pub const RESULT_VOLUME: &str = "result.volume";
    pub const RESULT_ENERGY_DENSITY: &str = "result.energy_density";
    pub const RESULT_SELF_DISCHARGE: &str = "result.self_discharge";
    pub const RESULT_DEGRADATION: &str = "result.degradation";
    pub const RESULT_COST_EFFECTIVENESS: &str = "result.cost_effectiveness";
    pub const RESULT_PROJECT_ENERGY: &str = "result.project_energy";
    pub const RESULT_AFTER_STORAGE: &str = "result.after_storage";

    pub const SWEEPS_HEADING: &str = "sweeps.heading";
    pub const SWEEPS_OPTIONS_LINE1: &str = "sweeps.options_line1";
    pub const SWEEPS_OPTIONS_LINE2: &str = "sweeps.options_line2";

    pub const OPTIMIZE_HEADING: &str = "optimize.heading";
    pub const CRITERION_OPTIONS: &str = "optimize.criterion_options";
    pub const RESULT_OPTIMAL: &str = "result.optimal";

    pub const SCENARIO_HEADING: &str = "scenario.heading";
    pub const RESULT_RECOMMENDED: &str = "result.recommended";

    pub const SIZING_HEADING: &str = "sizing.heading";
    pub const SIZING_OPTIONS: &str = "sizing.options";
    pub const RESULT_REQUIRED_MASS: &str = "result.required_mass";
    pub const RESULT_REQUIRED_HEIGHT: &str = "result.required_height";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
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
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어팩 디렉터리(locales/ 등)의 `<code>.toml`이 있으면 내장 문자열 위에 덮어쓴다.
    pub fn new_with_pack(lang_code: &str, pack_dir: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: load_overrides(pack_dir, lang_code),
        }
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        "ko" | "ko-kr" => Some("ko".into()),
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };
    try_load(lang).or_else(|| {
        lang.split_once(['-', '_'])
            .and_then(|(base, _)| try_load(base))
    })
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    let value: toml::Value = toml::from_str(src).ok()?;
    let mut map = HashMap::new();
    walk("", &value, &mut map);
    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        USING_DEFAULT => "(엔터 = 기본값)",
        MAIN_MENU_TITLE => "\n=== GESS Toolbox (중력 에너지 저장) ===",
        MAIN_MENU_CALCULATE => "1) 에너지 계산",
        MAIN_MENU_SWEEPS => "2) 스윕/비교 표",
        MAIN_MENU_OPTIMIZE => "3) 최적 재료 찾기",
        MAIN_MENU_SCENARIO => "4) 시나리오 추천",
        MAIN_MENU_SIZING => "5) 설비 규모 산정",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION => "잘못된 선택입니다.",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        PROMPT_MATERIAL => "재료 (water/sand/concrete): ",
        PROMPT_MASS => "부하 질량 [kg]: ",
        PROMPT_HEIGHT => "인양 높이 [m]: ",
        PROMPT_SYSTEM_EFFICIENCY => "시스템 효율 [%]: ",
        PROMPT_CYCLES => "운전 사이클 수: ",
        PROMPT_TIME_ELAPSED => "저장 경과 시간 [h]: ",
        PROMPT_CRITERION => "기준 번호: ",
        PROMPT_SCENARIO => "시나리오 번호: ",
        PROMPT_TARGET_ENERGY => "목표 에너지 [kWh]: ",
        CALC_HEADING => "\n-- 에너지 계산 --",
        RESULT_POTENTIAL => "위치 에너지:",
        RESULT_RECOVERED => "회수 에너지:",
        RESULT_INPUT_OUTPUT => "투입/출력 에너지:",
        RESULT_POWER_LOSS => "손실량:",
        RESULT_EFFICIENCY => "회수 효율:",
        RESULT_ROUND_TRIP => "왕복 효율:",
        RESULT_LIFESPAN => "유효 수명:",
        RESULT_VOLUME => "필요 체적:",
        RESULT_ENERGY_DENSITY => "에너지 밀도:",
        RESULT_SELF_DISCHARGE => "자기방전율:",
        RESULT_DEGRADATION => "열화율(사이클당/누적):",
        RESULT_COST_EFFECTIVENESS => "비용 효과 점수:",
        RESULT_PROJECT_ENERGY => "프로젝트 에너지(인양×발전):",
        RESULT_AFTER_STORAGE => "저장 후 출력 에너지:",
        SWEEPS_HEADING => "\n-- 스윕/비교 표 --",
        SWEEPS_OPTIONS_LINE1 => "1) 질량 스윕  2) 높이 스윕  3) 에너지 수요 스윕  4) 에너지 밀도 비교",
        SWEEPS_OPTIONS_LINE2 => "5) 효율 분해  6) 질량 시뮬레이션  7) 높이 시뮬레이션",
        OPTIMIZE_HEADING => "\n-- 최적 재료 --",
        CRITERION_OPTIONS => "1) 효율  2) 수명  3) 비용 효과  4) 에너지 밀도  5) 출력",
        RESULT_OPTIMAL => "최적 재료:",
        SCENARIO_HEADING => "\n-- 시나리오 추천 --",
        RESULT_RECOMMENDED => "추천 재료:",
        SIZING_HEADING => "\n-- 설비 규모 산정 --",
        SIZING_OPTIONS => "1) 필요 질량  2) 필요 높이  3) 설비 부하 프로필  4) 학교 분석  5) 높이-질량 트레이드오프",
        RESULT_REQUIRED_MASS => "필요 질량:",
        RESULT_REQUIRED_HEIGHT => "필요 높이:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 기본값:",
        SETTINGS_OPTIONS => "기본 운전 조건을 새로 입력합니다.",
        SETTINGS_SAVED => "기본값이 저장되었습니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        USING_DEFAULT => "(enter = default)",
        MAIN_MENU_TITLE => "\n=== GESS Toolbox (Gravity Energy Storage) ===",
        MAIN_MENU_CALCULATE => "1) Energy calculation",
        MAIN_MENU_SWEEPS => "2) Sweeps & comparisons",
        MAIN_MENU_OPTIMIZE => "3) Find optimal material",
        MAIN_MENU_SCENARIO => "4) Scenario recommendation",
        MAIN_MENU_SIZING => "5) System sizing",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION => "Invalid selection.",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PROMPT_MATERIAL => "Material (water/sand/concrete): ",
        PROMPT_MASS => "Load mass [kg]: ",
        PROMPT_HEIGHT => "Lift height [m]: ",
        PROMPT_SYSTEM_EFFICIENCY => "System efficiency [%]: ",
        PROMPT_CYCLES => "Operating cycles: ",
        PROMPT_TIME_ELAPSED => "Storage time elapsed [h]: ",
        PROMPT_CRITERION => "Criterion number: ",
        PROMPT_SCENARIO => "Scenario number: ",
        PROMPT_TARGET_ENERGY => "Target energy [kWh]: ",
        CALC_HEADING => "\n-- Energy Calculation --",
        RESULT_POTENTIAL => "Potential energy:",
        RESULT_RECOVERED => "Recovered energy:",
        RESULT_INPUT_OUTPUT => "Input/output energy:",
        RESULT_POWER_LOSS => "Energy loss:",
        RESULT_EFFICIENCY => "Recovery efficiency:",
        RESULT_ROUND_TRIP => "Round-trip efficiency:",
        RESULT_LIFESPAN => "Effective lifespan:",
        RESULT_VOLUME => "Volume required:",
        RESULT_ENERGY_DENSITY => "Energy density:",
        RESULT_SELF_DISCHARGE => "Self-discharge:",
        RESULT_DEGRADATION => "Degradation (per cycle/total):",
        RESULT_COST_EFFECTIVENESS => "Cost-effectiveness score:",
        RESULT_PROJECT_ENERGY => "Project energy (lift × generation):",
        RESULT_AFTER_STORAGE => "Output after storage:",
        SWEEPS_HEADING => "\n-- Sweeps & Comparisons --",
        SWEEPS_OPTIONS_LINE1 => "1) Mass sweep  2) Height sweep  3) Energy demand sweep  4) Energy density comparison",
        SWEEPS_OPTIONS_LINE2 => "5) Efficiency breakdown  6) Mass simulation  7) Height simulation",
        OPTIMIZE_HEADING => "\n-- Optimal Material --",
        CRITERION_OPTIONS => "1) Efficiency  2) Lifespan  3) Cost-effectiveness  4) Energy density  5) Power output",
        RESULT_OPTIMAL => "Optimal material:",
        SCENARIO_HEADING => "\n-- Scenario Recommendation --",
        RESULT_RECOMMENDED => "Recommended material:",
        SIZING_HEADING => "\n-- System Sizing --",
        SIZING_OPTIONS => "1) Required mass  2) Required height  3) Facility profiles  4) School analysis  5) Height-mass trade-off",
        RESULT_REQUIRED_MASS => "Required mass:",
        RESULT_REQUIRED_HEIGHT => "Required height:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current defaults:",
        SETTINGS_OPTIONS => "Enter new default operating parameters.",
        SETTINGS_SAVED => "Defaults saved.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_show_missing_marker() {
        let tr = Translator::new("en-us");
        assert_eq!(tr.t(keys::APP_EXIT), "Exiting application.");
        assert_eq!(tr.t("no.such.key"), "[missing translation]");
    }

    #[test]
    fn explicit_flag_wins_over_config() {
        assert_eq!(resolve_language(Some("ko-KR"), Some("en")), "ko");
        assert_eq!(resolve_language(Some("auto"), Some("en")), "en-us");
    }

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[general]\napp_exit = \"bye\"\n").unwrap_or_default();
        assert_eq!(map.get("general.app_exit").map(String::as_str), Some("bye"));
    }
}
