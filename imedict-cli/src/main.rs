mod convert;
mod stats;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use imedict::{CategoryFilter, Converter};
use tracing_subscriber::EnvFilter;

use crate::convert::{Outputs, run_conversions};
use crate::stats::{print_categories, print_stats};

const AFTER_HELP: &str = "\
使用例:
  imedict dictionary.json --stats
  imedict dictionary.json --list-categories
  imedict dictionary.json --csv output.csv --categories \"記号・マーク,矢印\"
  imedict dictionary.json --macos dictionary.plist
  imedict dictionary.json --all-formats --output-dir ./output";

/// IME辞書変換ツール - JSON辞書を各プラットフォーム形式に変換
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = AFTER_HELP)]
struct Args {
    /// 入力JSONファイル
    json_file: PathBuf,

    /// CSV形式で出力
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// TXT形式で出力
    #[arg(long, value_name = "FILE")]
    txt: Option<PathBuf>,

    /// macOS形式で出力（.plist拡張子でplist形式、それ以外はテキスト形式）
    #[arg(long, value_name = "FILE")]
    macos: Option<PathBuf>,

    /// Windows形式で出力
    #[arg(long, value_name = "FILE")]
    windows: Option<PathBuf>,

    /// 全形式で出力
    #[arg(long)]
    all_formats: bool,

    /// 出力ディレクトリ（--all-formats時）
    #[arg(long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// 出力するカテゴリ（カンマ区切り）
    #[arg(long, value_name = "LIST")]
    categories: Option<String>,

    /// 統計情報を表示
    #[arg(long)]
    stats: bool,

    /// カテゴリ一覧を表示
    #[arg(long)]
    list_categories: bool,

    /// Print --stats / --list-categories as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn outputs(&self) -> Outputs {
        Outputs {
            csv: self.csv.clone(),
            txt: self.txt.clone(),
            macos: self.macos.clone(),
            windows: self.windows.clone(),
            all_formats: self.all_formats.then(|| self.output_dir.clone()),
        }
    }

    fn has_action(&self) -> bool {
        !self.outputs().is_empty() || self.stats || self.list_categories
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if !args.has_action() {
        eprintln!("❌ 出力形式を指定してください");
        eprintln!("   --csv, --txt, --macos, --windows, --all-formats");
        eprintln!("   または --stats, --list-categories");
        process::exit(1);
    }

    let converter = match Converter::load(&args.json_file) {
        Ok(converter) => converter,
        Err(e) => {
            eprintln!("❌ エラー: {}", e);
            process::exit(1);
        }
    };

    if args.list_categories {
        print_categories(converter.dictionary(), args.json);
        return;
    }

    if args.stats {
        print_stats(converter.dictionary(), args.json);
        return;
    }

    let filter = args.categories.as_deref().and_then(CategoryFilter::parse);
    if let Some(filter) = &filter {
        println!("🔍 対象カテゴリ: {}", filter);
        println!();
    }

    if let Err(e) = run_conversions(&converter, &args.json_file, &args.outputs(), filter) {
        eprintln!("❌ 変換エラー: {}", e);
        process::exit(1);
    }
}
