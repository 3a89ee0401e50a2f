/// ProgressReporter port for user-facing status messages
///
/// Messages go to stderr in the CLI so stdout carries only the
/// rendered project fragment.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports per-entry progress through the manifest
    ///
    /// # Arguments
    /// * `current` - Entries processed so far
    /// * `total` - Entries in the manifest
    /// * `message` - Optional label (usually the entry name)
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning that does not stop the migration
    fn report_warning(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
