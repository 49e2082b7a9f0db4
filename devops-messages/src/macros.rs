/// Render a template from [`MESSAGES`](crate::messages::MESSAGES).
///
/// ```
/// use devops_messages::{messages::MESSAGES, msg};
///
/// assert_eq!(msg!(MESSAGES.greet_hello, name = "Jane"), "Hello, Jane!");
/// ```
#[macro_export]
macro_rules! msg {
    ($template:expr $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::builder::MessageBuilder::new($template)
            $(.var(stringify!($key), $value))*
            .build()
    };
}
