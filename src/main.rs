//! confpatch: rewrite key=value settings in config files from an overrides file

use anyhow::Result;

fn main() -> Result<()> {
    confpatch::cli::run()
}
