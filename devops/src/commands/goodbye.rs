use crate::output::CommandResult;
use devops_messages::{messages::MESSAGES, msg};

pub fn handle_goodbye(name: &str) -> CommandResult {
    CommandResult::Message(msg!(MESSAGES.goodbye_farewell, name = name))
}
