use clap::Parser;
use gess_toolbox::cli::Cli;
use gess_toolbox::i18n::{self, keys, Translator};
use gess_toolbox::{app, config};
use tracing_subscriber::EnvFilter;

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 서브커맨드나 대화형 메뉴를 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!(error = %err, "falling back to default configuration");
            config::Config::default()
        }
    };
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, "locales");

    if let Err(err) = try_run(cli, &mut cfg, &tr) {
        eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(cli: Cli, cfg: &mut config::Config, tr: &Translator) -> Result<(), app::AppError> {
    match cli.command {
        Some(command) => app::execute(command, cfg, tr),
        None => app::run(cfg, tr),
    }
}
