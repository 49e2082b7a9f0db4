//! Themed output macros for the snow-devops CLI.
//!
//! Command results go to stdout through `devops_println!`; everything else
//! (errors, hints, warnings) goes to stderr so that `--format json` output
//! stays machine readable.

#[macro_export]
macro_rules! devops_println {
    () => {
        println!();
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! devops_error {
    ($($arg:tt)*) => {
        eprintln!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! devops_error_hint {
    ($($arg:tt)*) => {
        eprintln!("💡 {}", format!($($arg)*));
    };
}
