use std::process::{Command, Stdio};
use tracing::{debug, error};

/// Spawn a detached process that won't be killed when the parent exits
pub fn spawn_detached(program: &str, args: &[&str]) -> bool {
    debug!("Spawning detached: {} {:?}", program, args);

    let result = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match result {
        Ok(_) => {
            debug!("Successfully spawned: {}", program);
            true
        }
        Err(e) => {
            error!("Failed to spawn '{}': {}", program, e);
            false
        }
    }
}

/// Spawn with fallbacks - tries each candidate argv, with `trailing`
/// appended, until one spawns
pub fn spawn_with_fallbacks(candidates: &[&[&str]], trailing: &str) -> bool {
    for argv in candidates {
        let (program, rest) = match argv.split_first() {
            Some(split) => split,
            None => continue,
        };

        let mut args: Vec<&str> = rest.to_vec();
        args.push(trailing);

        if spawn_detached(program, &args) {
            return true;
        }
    }
    false
}
