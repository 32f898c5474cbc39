use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use revgen_codegen::Strategy;

use super::UnwrapOrExit;
use crate::{
    ops::{self, ReverseOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ReverseCommand {
    /// Render each template once for all tables instead of once per table
    #[arg(short = 's', long = "single")]
    single: bool,

    /// Schema snapshot (.json or .toml)
    schema: PathBuf,

    /// Directory of templates, optionally with a `config` file
    template_dir: PathBuf,

    /// Output directory; its name is exposed to templates as `model`
    /// (defaults to ./model)
    output_dir: Option<PathBuf>,

    /// Regular expression selecting tables by name
    filter: Option<String>,

    /// Target language, overriding `lang` in the config file
    #[arg(short, long)]
    lang: Option<String>,

    /// Table name prefix to strip, overriding `prefix` in the config file
    #[arg(long)]
    prefix: Option<String>,

    /// Skip the formatting pass
    #[arg(long)]
    no_format: bool,

    /// Print generated files instead of writing them
    #[arg(long)]
    dry_run: bool,
}

impl ReverseCommand {
    pub fn run(&self) -> Result<()> {
        let resolved = ops::resolve(
            &self.template_dir,
            self.lang.as_deref(),
            self.prefix.as_deref(),
        )
        .unwrap_or_exit();

        let options = ReverseOptions {
            schema: self.schema.clone(),
            template_dir: self.template_dir.clone(),
            output_dir: self.output_dir.clone(),
            filter: self.filter.clone(),
            strategy: Strategy::from_single(self.single),
            format: !self.no_format,
            dry_run: self.dry_run,
        };

        let report = ops::reverse(&resolved, &options)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
