use clap::Parser;
use itertools::Itertools;
use zenoh_pico_buildconf::config::ResolvedConfig;
use zenoh_pico_buildconf::env::{propagate, LibraryEnv, ProjectEnv};
use zenoh_pico_buildconf::identity::TargetIdentity;
use zenoh_pico_buildconf::resolve::resolve;
use zenoh_pico_buildconf::BuildConfResult;

/// Resolve the zenoh-pico source filter and preprocessor defines for a
/// PlatformIO target.
#[derive(Parser)]
#[clap(version)]
struct Opts {
    /// Framework list as PlatformIO reports it; the first entry wins
    #[clap(long, env = "PIOFRAMEWORK")]
    framework: String,

    /// Platform identifier
    #[clap(long, env = "PIOPLATFORM", default_value = "")]
    platform: String,

    /// Build-target/environment identifier
    #[clap(long, env = "PIOENV", default_value = "")]
    board: String,

    /// Build against the generic platform layer regardless of the target
    /// (also enabled by ZENOH_GENERIC=1)
    #[clap(long)]
    generic: bool,
}

fn main() -> BuildConfResult<()> {
    let opts = Opts::parse();
    let generic = opts.generic
        || std::env::var("ZENOH_GENERIC").as_deref() == Ok("1");

    let mut library = LibraryEnv::new();
    library.set_var("PIOFRAMEWORK", &opts.framework);
    library.set_var("PIOPLATFORM", &opts.platform);
    library.set_var("PIOENV", &opts.board);
    if generic {
        library.set_var("ZENOH_GENERIC", "1");
    }

    let identity = TargetIdentity::from_env(&library)?;
    let config: ResolvedConfig = resolve(&identity);

    let mut project = ProjectEnv::new();
    let mut global = ProjectEnv::new();
    propagate(&config, &mut [&mut library, &mut project, &mut global]);

    println!("SRC_FILTER={}", library.src_filter.iter().join(" "));
    println!("CPPDEFINES={}", library.cppdefines.iter().join(" "));

    Ok(())
}
