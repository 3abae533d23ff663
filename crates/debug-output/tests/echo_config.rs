//! Echo configuration and file output.

use std::ffi::OsString;
use std::fs;
use std::sync::Arc;

use debug_output::{Context, DEBUG_ENV, Echo, EchoConfig, LOG_FILE_ENV};
use tempfile::TempDir;

fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<OsString> + 'a {
    move |key| {
        pairs
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| OsString::from(value))
    }
}

#[test]
fn release_rules_need_the_variable() {
    assert!(!EchoConfig::from_lookup_with_build(env(&[]), false).verbose);
    assert!(EchoConfig::from_lookup_with_build(env(&[(DEBUG_ENV, "1")]), false).verbose);
}

#[test]
fn debug_rules_honour_silent() {
    assert!(EchoConfig::from_lookup_with_build(env(&[(DEBUG_ENV, "1")]), true).verbose);
    assert!(!EchoConfig::from_lookup_with_build(env(&[(DEBUG_ENV, "verbose,silent")]), true).verbose);
}

#[test]
fn log_file_variable_is_picked_up() {
    let config = EchoConfig::from_lookup_with_build(env(&[(LOG_FILE_ENV, "/tmp/gl.log")]), true);
    assert_eq!(config.log_file().and_then(|p| p.to_str()), Some("/tmp/gl.log"));
}

#[test]
fn errors_and_warnings_land_in_log_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("echo.log");
    let config = EchoConfig::verbose().with_log_file(&path);
    let mut ctx = Context::new().with_echo(Arc::new(Echo::from_config(&config)));

    ctx.pop_debug_group();
    ctx.warning("falling back to software path");
    drop(ctx);

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(
        lines,
        vec![
            "gl: User error: GL_STACK_UNDERFLOW in glPopDebugGroup",
            "gl warning: falling back to software path",
        ]
    );
}

#[test]
fn unwritable_log_file_falls_back_to_stderr() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("echo.log");
    let echo = Echo::from_config(&EchoConfig::verbose().with_log_file(&path));
    assert!(echo.is_verbose());
    assert!(!path.exists());
}

#[test]
fn silent_config_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("echo.log");
    let echo = Arc::new(Echo::from_config(&EchoConfig::silent().with_log_file(&path)));
    let mut ctx = Context::new().with_echo(echo);
    ctx.pop_debug_group();
    drop(ctx);
    assert!(!path.exists());
}

#[test]
fn log_file_is_not_touched_before_first_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("echo.log");
    fs::write(&path, "previous run\n").unwrap();
    let echo = Arc::new(Echo::from_config(&EchoConfig::verbose().with_log_file(&path)));

    let mut ctx = Context::new().with_echo(Arc::clone(&echo));
    ctx.debug_state();
    assert_eq!(fs::read_to_string(&path).unwrap(), "previous run\n");

    ctx.pop_debug_group();
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "gl: User error: GL_STACK_UNDERFLOW in glPopDebugGroup\n");
}
