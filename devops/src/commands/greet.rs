use crate::output::CommandResult;
use devops_messages::{messages::MESSAGES, msg};

pub fn handle_greet(name: &str) -> CommandResult {
    CommandResult::Message(msg!(MESSAGES.greet_hello, name = name))
}
