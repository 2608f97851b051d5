use std::path::PathBuf;

use clap::Parser;

use pour_cost_toolbox::{app, config, i18n};

/// 잔당 원가 계산 CLI의 명령행 옵션.
#[derive(Debug, Parser)]
#[command(name = "pour_cost_toolbox_cli", about = "Bar beverage cost & pricing toolbox")]
struct Cli {
    /// 언어 코드 (auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, cfg.language.as_deref());
    let tr = i18n::Translator::new_with_pack(&lang, None);
    app::run(&mut cfg, &tr, &cli.config)?;
    Ok(())
}
