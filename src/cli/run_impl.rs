use std::io;

use anyhow::Result;

use crate::render::write_tree;
use crate::types::RenderMode;

use super::Args;

pub(super) fn mode_for(args: &Args) -> RenderMode {
    RenderMode::from_flag(args.flag.as_deref())
}

pub fn run_with_args(args: &Args) -> Result<()> {
    let mode = mode_for(args);
    log::debug!("rendering {} in {:?} mode", args.path.display(), mode);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tree(&mut out, &args.path, mode)?;
    Ok(())
}
