use crate::error::{CutoutError, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Called once for each cutout that was freshly downloaded.
///
/// Errors are not handled by the batch; they abort the run.
pub trait PostProcess {
    fn process(&mut self, path: &Path) -> Result<()>;
}

impl<F> PostProcess for F
where
    F: FnMut(&Path) -> Result<()>,
{
    fn process(&mut self, path: &Path) -> Result<()> {
        self(path)
    }
}

/// Runs an external program with the cutout path as its last argument.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandHook {
    program: String,
    args: Vec<String>,
}

impl CommandHook {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Split a command line on whitespace, e.g. `"gzip -k"`.
    pub fn parse(command_line: &str) -> Result<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| CutoutError::Config("post-processing command is empty".to_string()))?;
        Ok(Self::new(program, parts.collect()))
    }
}

impl PostProcess for CommandHook {
    fn process(&mut self, path: &Path) -> Result<()> {
        debug!("Running {} {:?} on {}", self.program, self.args, path.display());

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|e| CutoutError::PostProcess {
                path: path.to_path_buf(),
                message: format!("could not start '{}': {}", self.program, e),
            })?;

        if !status.success() {
            return Err(CutoutError::PostProcess {
                path: path.to_path_buf(),
                message: format!("'{}' exited with {}", self.program, status),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_line() {
        let hook = CommandHook::parse("  gzip -k -9 ").unwrap();
        assert_eq!(
            hook,
            CommandHook::new("gzip", vec!["-k".to_string(), "-9".to_string()])
        );
        assert!(CommandHook::parse("   ").is_err());
    }

    #[test]
    fn test_closure_hook() {
        let mut seen = Vec::new();
        {
            let mut hook = |path: &Path| -> Result<()> {
                seen.push(path.to_path_buf());
                Ok(())
            };
            hook.process(Path::new("a.fits")).unwrap();
        }
        assert_eq!(seen, vec![Path::new("a.fits").to_path_buf()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_command_hook_exit_status() {
        let mut ok = CommandHook::new("true", vec![]);
        assert!(ok.process(Path::new("a.fits")).is_ok());

        let mut failing = CommandHook::new("false", vec![]);
        let err = failing.process(Path::new("a.fits")).unwrap_err();
        assert!(matches!(err, CutoutError::PostProcess { .. }));
    }

    #[test]
    fn test_command_hook_missing_program() {
        let mut hook = CommandHook::new("definitely-not-a-real-program-7f3a", vec![]);
        assert!(matches!(
            hook.process(Path::new("a.fits")),
            Err(CutoutError::PostProcess { .. })
        ));
    }
}
