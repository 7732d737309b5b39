//! Logic behind the command-line filters.
//!
//! Both binaries read a JSON document from stdin and write to stdout:
//! - `json-hash-tree` — embed hashes and print the hashed document
//! - `json-validate-tree` — check embedded hashes, print `OK` on success

use serde_json::Value;

use crate::config::ApplyConfig;
use crate::error::TreeHashError;
use crate::hasher::apply_hashes;
use crate::validate::validate;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Json(serde_json::Error),
    Hash(TreeHashError),
    Usage(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e) => write!(f, "{e}"),
            CliError::Hash(e) => write!(f, "{e}"),
            CliError::Usage(e) => write!(f, "{e}"),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<TreeHashError> for CliError {
    fn from(e: TreeHashError) -> Self {
        CliError::Hash(e)
    }
}

// ── json-hash-tree ────────────────────────────────────────────────────────

/// Options accepted by the `json-hash-tree` binary.
#[derive(Debug, Default)]
pub struct HashCmd {
    pub pretty: bool,
    pub keep_existing: bool,
    pub no_recursive: bool,
    pub precision: Option<u32>,
}

/// Parse the command-line arguments of `json-hash-tree` (without argv[0]).
pub fn parse_hash_args(args: &[String]) -> Result<HashCmd, CliError> {
    let mut cmd = HashCmd::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--pretty" => cmd.pretty = true,
            "--keep-existing" => cmd.keep_existing = true,
            "--no-recursive" => cmd.no_recursive = true,
            "--precision" => {
                let digits = iter
                    .next()
                    .ok_or_else(|| CliError::Usage("--precision requires a value".into()))?;
                cmd.precision = Some(digits.parse().map_err(|_| {
                    CliError::Usage(format!("invalid --precision value: {digits}"))
                })?);
            }
            other => {
                return Err(CliError::Usage(format!("unknown argument: {other}")));
            }
        }
    }
    Ok(cmd)
}

/// Hash a JSON document and return the serialized result.
pub fn run_hash(input: &str, cmd: &HashCmd) -> Result<String, CliError> {
    let mut config = ApplyConfig {
        update_existing_hashes: !cmd.keep_existing,
        recursive: !cmd.no_recursive,
        ..ApplyConfig::default()
    };
    if let Some(digits) = cmd.precision {
        config.floating_point_precision = digits;
    }

    let mut tree: Value = serde_json::from_str(input)?;
    apply_hashes(&mut tree, &config)?;
    if cmd.pretty {
        Ok(serde_json::to_string_pretty(&tree)?)
    } else {
        Ok(serde_json::to_string(&tree)?)
    }
}

// ── json-validate-tree ────────────────────────────────────────────────────

/// Validate a JSON document's embedded hashes; returns `"OK"` on success.
pub fn run_validate(input: &str) -> Result<String, CliError> {
    let tree: Value = serde_json::from_str(input)?;
    validate(&tree)?;
    Ok("OK".to_owned())
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_defaults() {
        let cmd = parse_hash_args(&[]).unwrap();
        assert!(!cmd.pretty);
        assert!(!cmd.keep_existing);
        assert!(!cmd.no_recursive);
        assert_eq!(cmd.precision, None);
    }

    #[test]
    fn parse_all_flags() {
        let cmd =
            parse_hash_args(&args(&["--pretty", "--keep-existing", "--precision", "5"])).unwrap();
        assert!(cmd.pretty);
        assert!(cmd.keep_existing);
        assert_eq!(cmd.precision, Some(5));
    }

    #[test]
    fn parse_rejects_unknown_flag() {
        assert!(matches!(
            parse_hash_args(&args(&["--bogus"])),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn parse_rejects_bad_precision() {
        assert!(matches!(
            parse_hash_args(&args(&["--precision", "many"])),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            parse_hash_args(&args(&["--precision"])),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn hash_then_validate() {
        let out = run_hash("{\"key\":\"value\"}", &HashCmd::default()).unwrap();
        assert!(out.contains("5Dq88zdSRIOcAS-WM_lYYt"));
        assert_eq!(run_validate(&out).unwrap(), "OK");
    }

    #[test]
    fn validate_rejects_unhashed_input() {
        assert!(matches!(
            run_validate("{\"key\":\"value\"}"),
            Err(CliError::Hash(TreeHashError::MissingHash { .. }))
        ));
    }

    #[test]
    fn pretty_output() {
        let cmd = HashCmd {
            pretty: true,
            ..HashCmd::default()
        };
        let out = run_hash("{\"key\":1}", &cmd).unwrap();
        assert!(out.contains('\n'));
        assert!(out.contains("t4HVsGBJblqznOBwy6IeLt"));
    }

    #[test]
    fn bad_json_input() {
        assert!(matches!(run_hash("nope{", &HashCmd::default()), Err(CliError::Json(_))));
    }
}
