use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry;

pub fn help() -> Result<CmdResult> {
    let mut result = CmdResult::default().with_message(CmdMessage::info("Available commands:"));
    result.help = registry::all().map(|spec| spec.usage).collect();
    result.show_help = true;
    Ok(result)
}

pub fn exit() -> Result<CmdResult> {
    let mut result = CmdResult::default()
        .with_message(CmdMessage::info("Exiting Flashnotes as requested. Goodbye!"));
    result.exit = true;
    Ok(result)
}
