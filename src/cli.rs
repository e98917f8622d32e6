use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "license-collector",
    about = "Collect dependency license files and emit a license manifest",
    version
)]
pub struct Cli {
    /// Project name, used to name the manifest file
    pub project_name: String,

    /// Project directory to inspect
    pub project_dir: PathBuf,

    /// Directory that receives the license files and the manifest
    pub output_dir: PathBuf,

    /// Config file [default: <PROJECT_DIR>/.license-collector/config.toml, fallback ~/.config/license-collector/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where fetched license files are cached
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Skip a dependency manager even if detected (repeatable)
    #[arg(long = "exclude-manager", value_name = "MANAGER")]
    pub exclude_manager: Vec<ManagerArg>,

    /// Show all dependencies (not just incomplete ones)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ManagerArg {
    RubyBundler,
    JsNpm,
    RustCargo,
}

impl ManagerArg {
    /// Name the dependency manager reports for itself.
    pub fn manager_name(self) -> &'static str {
        match self {
            ManagerArg::RubyBundler => "ruby_bundler",
            ManagerArg::JsNpm => "js_npm",
            ManagerArg::RustCargo => "rust_cargo",
        }
    }
}
