//! Package cflags lookup through an external `pkg-config` style tool.

use flagscope_api::{ApiError, ApiResult, PackageQuery};
use std::process::Command;
use tracing::debug;

pub const DEFAULT_PROGRAM: &str = "pkg-config";

/// Runs `<program> --cflags <package>` for each query.
#[derive(Debug, Clone)]
pub struct PkgConfig {
    program: String,
}

impl PkgConfig {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn invocation_error(&self, package: &str, reason: String) -> ApiError {
        ApiError::ProcessInvocation {
            program: self.program.clone(),
            package: package.to_string(),
            reason,
        }
    }
}

impl Default for PkgConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl PackageQuery for PkgConfig {
    fn query_package_flags(&self, name: &str) -> ApiResult<Vec<String>> {
        debug!("Running {} --cflags {}", self.program, name);

        let output = Command::new(&self.program)
            .arg("--cflags")
            .arg(name)
            .output()
            .map_err(|e| self.invocation_error(name, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let reason = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                format!("exited with {}: {}", output.status, stderr)
            };
            return Err(self.invocation_error(name, reason));
        }

        Ok(split_cflags(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Strip surrounding whitespace, split on single spaces, drop empty tokens.
pub fn split_cflags(stdout: &str) -> Vec<String> {
    stdout
        .trim()
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_cflags() {
        let out = split_cflags("  -pthread  -I/usr/include/gtk-3.0 -I/usr/include/pango-1.0 \n");
        assert_eq!(
            out,
            vec!["-pthread", "-I/usr/include/gtk-3.0", "-I/usr/include/pango-1.0"]
        );
    }

    #[test]
    fn test_split_cflags_empty_output() {
        assert!(split_cflags("\n").is_empty());
    }

    #[test]
    fn test_missing_program_is_invocation_error() {
        let query = PkgConfig::new("flagscope-no-such-pkg-config-binary");
        let err = query.query_package_flags("gtk+-3.0").unwrap_err();
        match err {
            ApiError::ProcessInvocation {
                program, package, ..
            } => {
                assert_eq!(program, "flagscope-no-such-pkg-config-binary");
                assert_eq!(package, "gtk+-3.0");
            }
            other => panic!("Expected ProcessInvocation, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_invocation_error() {
        // `false` ignores its arguments and exits 1
        let query = PkgConfig::new("false");
        let err = query.query_package_flags("gtk+-3.0").unwrap_err();
        assert!(matches!(err, ApiError::ProcessInvocation { .. }));
    }
}
