//! Build script for livejump - embeds build date and git commit hash
//!
//! Always emits `VERGEN_BUILD_DATE`. Dev builds additionally emit
//! `VERGEN_GIT_SHA`; `--features release` builds leave it out so the
//! version string stays clean.

use vergen_gitcl::{BuildBuilder, Emitter};

fn main() {
    let mut emitter = Emitter::default();

    match BuildBuilder::default().build_date(true).build() {
        Ok(build) => {
            if let Err(e) = emitter.add_instructions(&build) {
                println!("cargo:warning=Failed to add build date: {}", e);
            }
        }
        Err(e) => println!("cargo:warning=Failed to configure build date: {}", e),
    }

    #[cfg(not(feature = "release"))]
    let has_sha = add_git_sha(&mut emitter);
    #[cfg(feature = "release")]
    let has_sha = true;

    if let Err(e) = emitter.emit() {
        println!("cargo:warning=Failed to emit build info: {}", e);
        println!("cargo:rustc-env=VERGEN_BUILD_DATE=unknown");
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
    } else if !has_sha {
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
    }
}

/// Register the git SHA; `false` when git info is unavailable.
#[cfg(not(feature = "release"))]
fn add_git_sha(emitter: &mut Emitter) -> bool {
    use vergen_gitcl::GitclBuilder;

    let added = GitclBuilder::default()
        .sha(true)
        .build()
        .map_err(|e| e.to_string())
        .and_then(|git| emitter.add_instructions(&git).map(|_| ()).map_err(|e| e.to_string()));

    match added {
        Ok(()) => true,
        Err(e) => {
            // Not in a git repo, or git missing
            println!("cargo:warning=Failed to get git info: {}", e);
            false
        }
    }
}
