//! shoutout-guard: moderate shoutout-booth messages from the command line.
//!
//! Reads a JSON request from stdin and writes a JSON response to stdout.
//!
//! Modes:
//!   (default)      {"message": "..."}  -> verdict
//!   --inspect      {"message": "..."}  -> every check's flag
//!   --submit       full submission     -> accepted / error
//!   --rewrite      {"message": "..."}  -> AI rewrite accepted / error
//!   --dump-config                      -> merged configuration as TOML
//!
//! `--config <path>` loads an overlay instead of the default user file.

use serde::Deserialize;
use serde_json::{Value, json};
use shoutout_guard::config::Config;
use shoutout_guard::gate::{
    Accepted, Rewrite, RewriteError, Submission, SubmissionError, SubmissionGate,
};
use shoutout_guard::logging;
use std::io::Read;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Evaluate,
    Inspect,
    Submit,
    Rewrite,
    DumpConfig,
}

#[derive(Deserialize)]
struct MessageInput {
    #[serde(default)]
    message: String,
}

#[derive(Debug, PartialEq)]
struct Args {
    mode: Mode,
    config_path: Option<String>,
}

/// Parse flags, excluding the program name.
fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut mode = Mode::Evaluate;
    let mut config_path = None;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let next_mode = match arg.as_str() {
            "--inspect" => Mode::Inspect,
            "--submit" => Mode::Submit,
            "--rewrite" => Mode::Rewrite,
            "--dump-config" => Mode::DumpConfig,
            "--config" => {
                config_path = Some(args.next().ok_or("--config requires a path")?);
                continue;
            }
            other => return Err(format!("unknown argument: {other}")),
        };
        if mode != Mode::Evaluate {
            return Err("only one mode flag may be given".into());
        }
        mode = next_mode;
    }
    Ok(Args { mode, config_path })
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("shoutout-guard: {msg}");
    std::process::exit(1);
}

fn read_stdin() -> String {
    let mut input = String::new();
    if std::io::stdin().read_to_string(&mut input).is_err() {
        fail("failed to read stdin");
    }
    input
}

fn parse_input<T: serde::de::DeserializeOwned>(input: &str) -> T {
    match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => fail(format!("JSON parse error: {e}")),
    }
}

fn submit_response(result: Result<Accepted, SubmissionError>) -> Value {
    match result {
        Ok(accepted) => json!({
            "accepted": true,
            "warning": accepted.warning,
        }),
        Err(e) => json!({
            "accepted": false,
            "error": e.to_string(),
        }),
    }
}

fn rewrite_response(result: Result<Rewrite, RewriteError>) -> Value {
    match result {
        Ok(rewrite) => json!({
            "accepted": true,
            "message": rewrite.message,
            "truncated": rewrite.truncated,
            "warning": rewrite.warning,
        }),
        Err(e) => json!({
            "accepted": false,
            "error": e.to_string(),
        }),
    }
}

fn main() {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(a) => a,
        Err(e) => fail(e),
    };

    logging::init();
    let config = match &args.config_path {
        Some(path) => Config::load_from(path).unwrap_or_else(|e| fail(e)),
        None => Config::load(),
    };
    logging::set_level(&config.settings.log_level);

    let gate = SubmissionGate::from_config(&config);

    let output = match args.mode {
        Mode::DumpConfig => {
            match config.to_toml() {
                Ok(s) => print!("{s}"),
                Err(e) => fail(format!("failed to render config: {e}")),
            }
            return;
        }
        Mode::Evaluate => {
            let req: MessageInput = parse_input(&read_stdin());
            let result = gate.moderator().assess(&req.message);
            logging::log_verdict(&req.message, &result);
            json!(result.verdict)
        }
        Mode::Inspect => {
            let req: MessageInput = parse_input(&read_stdin());
            json!(gate.moderator().inspect(&req.message))
        }
        Mode::Submit => {
            let submission: Submission = parse_input(&read_stdin());
            submit_response(gate.check(&submission))
        }
        Mode::Rewrite => {
            let req: MessageInput = parse_input(&read_stdin());
            rewrite_response(gate.accept_rewrite(&req.message))
        }
    };

    println!("{output}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoutout_guard::RejectReason;

    fn args(list: &[&str]) -> Result<Args, String> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    fn gate() -> SubmissionGate {
        SubmissionGate::from_config(&Config::default_config())
    }

    // ── Flags ──

    #[test]
    fn no_flags_evaluates() {
        assert_eq!(
            args(&[]),
            Ok(Args {
                mode: Mode::Evaluate,
                config_path: None,
            })
        );
    }

    #[test]
    fn mode_flags() {
        assert_eq!(args(&["--inspect"]).unwrap().mode, Mode::Inspect);
        assert_eq!(args(&["--submit"]).unwrap().mode, Mode::Submit);
        assert_eq!(args(&["--rewrite"]).unwrap().mode, Mode::Rewrite);
        assert_eq!(args(&["--dump-config"]).unwrap().mode, Mode::DumpConfig);
    }

    #[test]
    fn config_path_with_mode() {
        assert_eq!(
            args(&["--config", "~/booth.toml", "--submit"]),
            Ok(Args {
                mode: Mode::Submit,
                config_path: Some("~/booth.toml".into()),
            })
        );
    }

    #[test]
    fn two_mode_flags_rejected() {
        assert_eq!(
            args(&["--inspect", "--submit"]).unwrap_err(),
            "only one mode flag may be given"
        );
    }

    #[test]
    fn config_without_path_rejected() {
        assert_eq!(args(&["--config"]).unwrap_err(), "--config requires a path");
    }

    #[test]
    fn unknown_argument_rejected() {
        assert_eq!(
            args(&["--loud"]).unwrap_err(),
            "unknown argument: --loud"
        );
    }

    // ── Responses ──

    #[test]
    fn submit_accepted_shape() {
        let submission: Submission =
            serde_json::from_str(r#"{"recipient": "Sam", "message": "that's so lame"}"#).unwrap();
        assert_eq!(
            submit_response(gate().check(&submission)),
            json!({"accepted": true, "warning": true})
        );
    }

    #[test]
    fn submit_error_shape() {
        let submission: Submission =
            serde_json::from_str(r#"{"recipient": "Sam", "message": "you are a loser"}"#).unwrap();
        assert_eq!(
            submit_response(gate().check(&submission)),
            json!({"accepted": false, "error": "message rejected: inappropriate content"})
        );
        assert_eq!(
            submit_response(Err(SubmissionError::MissingRecipient)),
            json!({"accepted": false, "error": "recipient name is required"})
        );
    }

    #[test]
    fn rewrite_accepted_shape() {
        let long = "love you ".repeat(28);
        let response = rewrite_response(gate().accept_rewrite(&long));
        assert_eq!(response["accepted"], json!(true));
        assert_eq!(response["truncated"], json!(true));
        assert_eq!(response["warning"], json!(false));
        assert_eq!(response["message"].as_str().unwrap().chars().count(), 200);
    }

    #[test]
    fn rewrite_error_shape() {
        assert_eq!(
            rewrite_response(Err(RewriteError::Rejected(RejectReason::ExcessiveCaps))),
            json!({"accepted": false, "error": "rewrite rejected: excessive capital letters"})
        );
        assert_eq!(
            rewrite_response(gate().accept_rewrite("  ")),
            json!({"accepted": false, "error": "rewrite returned no message"})
        );
    }
}
