/// Report that `unwrap!` failed to unwrap a value.
///
/// Called by code generated by [unwrap!][crate::unwrap!] in debug builds,
/// right before returning early. The report is emitted as a `tracing` error
/// event, so it is only visible if a subscriber is installed.
///
/// # Examples
///
/// ```
/// freestanding::report_failed_unwrapping("Unexpected None value: a", file!(), line!());
/// ```
#[cold]
pub fn report_failed_unwrapping(message: &str, file: &str, line: u32) {
    tracing::error!(file, line, "{message}");
}
