use crate::{
    cli::{answers::load_answers, Args},
    error::{Error, Result},
    ioutils::{get_output_file, write_file},
    model::NetworkSecurityConfig,
    prompt::{confirm, get_prompt_provider, PromptProvider},
    wizard::Wizard,
    xml::XmlStyle,
};
use std::path::PathBuf;

/// Main CLI runner that orchestrates one generation session
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Runs the session against the terminal.
    pub fn run(self) -> Result<()> {
        self.run_with(get_prompt_provider())
    }

    /// Runs the session with the given prompt provider.
    pub fn run_with<P: PromptProvider>(self, provider: P) -> Result<()> {
        let wizard = Wizard::new(provider);

        let config = self.load_config(&wizard)?;

        let style = XmlStyle { indent: self.args.indent, ..XmlStyle::default() };
        let document = config.to_xml(&style);

        if self.args.dry_run {
            log::info!("Dry run, printing the config instead of writing it");
            print!("{document}");
            return Ok(());
        }

        let output_file = self.resolve_output_file(&wizard)?;
        write_file(&document, &output_file)?;
        log::info!("Wrote {} bytes to {}", document.len(), output_file.display());

        println!("Network security config saved to {}.", output_file.display());
        Ok(())
    }

    /// Takes the policy from answers when given, otherwise asks for it.
    fn load_config<P: PromptProvider>(&self, wizard: &Wizard<P>) -> Result<NetworkSecurityConfig> {
        if let Some(config) =
            load_answers(self.args.answers.as_deref(), self.args.answers_file.as_deref())?
        {
            log::debug!("Using policy from answers, skipping the wizard");
            return Ok(config);
        }

        if self.args.non_interactive {
            return Err(Error::MissingAnswers);
        }
        wizard.run()
    }

    /// Determines where to write, asking for the path and for overwrite permission if needed.
    fn resolve_output_file<P: PromptProvider>(&self, wizard: &Wizard<P>) -> Result<PathBuf> {
        let output_file = match &self.args.output {
            Some(path) => path.clone(),
            None if self.args.non_interactive => return Err(Error::MissingOutputPath),
            None => wizard.ask_output_path()?,
        };

        let overwrite = if !output_file.exists() {
            true
        } else if self.args.non_interactive && !self.args.force {
            false
        } else {
            confirm(
                wizard.provider(),
                self.args.force,
                format!("Overwrite {}?", output_file.display()),
            )?
        };

        get_output_file(output_file, overwrite)
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
