use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use revgen_codegen::Strategy;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Directory of templates to validate
    template_dir: PathBuf,

    /// Check output names as in single-file mode
    #[arg(short = 's', long = "single")]
    single: bool,

    /// Target language, overriding `lang` in the config file
    #[arg(short, long)]
    lang: Option<String>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let resolved = ops::resolve(&self.template_dir, self.lang.as_deref(), None).unwrap_or_exit();

        let report = ops::check(
            &self.template_dir,
            &resolved,
            Strategy::from_single(self.single),
        )?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
